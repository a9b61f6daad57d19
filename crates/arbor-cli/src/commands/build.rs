//! The build program: constructs an RF or GBT predictor.
//!
//! Binds General + PredictorBuilder + StochasticForest. The builder flags
//! pick the forest preset, so the builder group is validated before the
//! preset lands and before forest overrides are bound.

use anyhow::Result;
use arbor_core::generate_seed;
use arbor_opts::{
    check_unique_aliases, ForestOptions, GeneralOptions, OptionGroup, PredictorBuilderOptions,
    RawArgs,
};
use std::io;
use tracing::info;

use crate::banner;
use crate::commands::util;

pub fn handle(raw: &RawArgs) -> Result<()> {
    let mut general = GeneralOptions::default();
    let mut builder = PredictorBuilderOptions::default();
    let mut forest = ForestOptions::default();
    check_unique_aliases(&[&general, &builder, &forest])?;

    general.bind(raw)?;
    if general.help_requested() {
        print_help(&general, &builder, &forest)?;
        return Ok(());
    }
    util::init_logging(general.log.get())?;

    builder.bind(raw)?;
    builder.validate()?;
    let preset = builder.preset();

    // Preset before user overrides, never after.
    forest.apply_preset(preset);
    forest.bind(raw)?;

    general.resolve_seed(generate_seed);

    general.validate()?;
    forest.validate()?;

    if !util::general_required_present(&general) {
        print_help(&general, &builder, &forest)?;
        banner::print_help_hint();
        return Ok(());
    }

    info!(mode = preset.as_str(), "build configuration resolved");
    println!("Resolved build configuration:");
    util::print_param("mode", preset.as_str());
    util::print_general_params(&general);
    util::print_param("ntrees", forest.n_trees.get());
    util::print_param("mtry", forest.m_try.get());
    util::print_param("nmaxleaves", forest.n_max_leaves.get());
    util::print_param("nodesize", forest.node_size.get());
    util::print_param("shrinkage", forest.shrinkage.get());
    Ok(())
}

fn print_help(
    general: &GeneralOptions,
    builder: &PredictorBuilderOptions,
    forest: &ForestOptions,
) -> Result<()> {
    banner::print_builder_overview();
    let out = &mut io::stdout();
    general.write_help(out)?;
    builder.write_help(out)?;
    forest.write_help(out)?;
    Ok(())
}
