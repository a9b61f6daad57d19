//! The predict program: applies a stored predictor to novel data.
//!
//! Binds General + Predictor.

use anyhow::Result;
use arbor_core::generate_seed;
use arbor_opts::{check_unique_aliases, GeneralOptions, OptionGroup, PredictorOptions, RawArgs};
use std::io;
use tracing::info;

use crate::banner;
use crate::commands::util;

pub fn handle(raw: &RawArgs) -> Result<()> {
    let mut general = GeneralOptions::default();
    let mut predictor = PredictorOptions::default();
    check_unique_aliases(&[&general, &predictor])?;

    general.bind(raw)?;
    if general.help_requested() {
        print_help(&general, &predictor)?;
        return Ok(());
    }
    util::init_logging(general.log.get())?;

    predictor.bind(raw)?;

    general.resolve_seed(generate_seed);

    general.validate()?;
    predictor.validate()?;

    if predictor.forest.get().is_empty() || !util::general_required_present(&general) {
        print_help(&general, &predictor)?;
        banner::print_help_hint();
        return Ok(());
    }

    info!(forest = %predictor.forest.get(), "predict configuration resolved");
    println!("Resolved predict configuration:");
    util::print_general_params(&general);
    util::print_param("forest", predictor.forest.get());
    Ok(())
}

fn print_help(general: &GeneralOptions, predictor: &PredictorOptions) -> Result<()> {
    banner::print_predictor_overview();
    let out = &mut io::stdout();
    general.write_help(out)?;
    predictor.write_help(out)?;
    Ok(())
}
