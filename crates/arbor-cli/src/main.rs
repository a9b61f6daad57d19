use arbor_opts::RawArgs;
use std::env;
use std::process;
use tracing::error;

mod banner;
mod commands;

fn main() {
    let mut args: Vec<String> = env::args().skip(1).collect();

    banner::print_header();

    let Some(program) = args.first().cloned() else {
        banner::print_help_hint();
        return;
    };
    if program == "-h" || program == "--help" {
        banner::print_help_hint();
        return;
    }

    let raw = RawArgs::new(args.split_off(1));
    let result = match program.as_str() {
        "filter" => commands::filter::handle(&raw),
        "build" => commands::build::handle(&raw),
        "predict" => commands::predict::handle(&raw),
        other => {
            eprintln!("unknown program '{other}'; expected one of: filter, build, predict");
            process::exit(1);
        }
    };

    // Fail fast, fail loud, fail the whole run: any violation is a
    // single-line diagnostic on stderr and exit status 1.
    if let Err(err) = result {
        error!("option processing failed: {err}");
        eprintln!("{err}");
        process::exit(1);
    }
}
