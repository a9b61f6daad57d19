use anyhow::{Context, Result};
use arbor_opts::GeneralOptions;
use std::fs::File;
use std::sync::Arc;
use tracing::Level;

/// Routes log events to the `--log` file when one was given, stderr
/// otherwise. Installation is best-effort: a subscriber may already be in
/// place when several invocations share one process.
pub fn init_logging(log_path: &str) -> Result<()> {
    if log_path.is_empty() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::INFO)
            .with_writer(std::io::stderr)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    } else {
        let file = File::create(log_path)
            .with_context(|| format!("creating log output file '{log_path}'"))?;
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::INFO)
            .with_ansi(false)
            .with_writer(Arc::new(file))
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }
    Ok(())
}

/// Whether the general group's required fields were all supplied.
pub fn general_required_present(general: &GeneralOptions) -> bool {
    !general.input.get().is_empty()
        && !general.target.get().is_empty()
        && !general.output.get().is_empty()
}

/// One `key = value` line of the resolved-configuration print-out.
pub fn print_param(name: &str, value: impl std::fmt::Display) {
    println!("  {name} = {value}");
}

pub fn print_general_params(general: &GeneralOptions) {
    print_param("input", general.input.get());
    print_param("target", general.target.get());
    print_param("output", general.output.get());
    print_param("whitelist", general.white_list.get());
    print_param("blacklist", general.black_list.get());
    print_param("data_delim", general.data_delimiter.get().escape_default());
    print_param(
        "head_delim",
        general.header_delimiter.get().escape_default(),
    );
    print_param("prune_features", general.prune_features.get());
    print_param("seed", general.seed.get());
}
