//! The filter program: significance testing of predictors.
//!
//! Binds General + StochasticForest + StatisticalTest.

use anyhow::Result;
use arbor_core::generate_seed;
use arbor_opts::{
    check_unique_aliases, ForestOptions, GeneralOptions, OptionGroup, RawArgs,
    StatisticalTestOptions,
};
use std::io;
use tracing::info;

use crate::banner;
use crate::commands::util;

pub fn handle(raw: &RawArgs) -> Result<()> {
    let mut general = GeneralOptions::default();
    let mut forest = ForestOptions::default();
    let mut stat_test = StatisticalTestOptions::default();
    check_unique_aliases(&[&general, &forest, &stat_test])?;

    general.bind(raw)?;
    if general.help_requested() {
        print_help(&general, &forest, &stat_test)?;
        return Ok(());
    }
    util::init_logging(general.log.get())?;

    forest.bind(raw)?;
    stat_test.bind(raw)?;

    general.resolve_seed(generate_seed);

    general.validate()?;
    forest.validate()?;
    stat_test.validate()?;

    if !util::general_required_present(&general) {
        print_help(&general, &forest, &stat_test)?;
        banner::print_help_hint();
        return Ok(());
    }

    info!(
        input = %general.input.get(),
        target = %general.target.get(),
        "filter configuration resolved"
    );
    print_resolved(&general, &forest, &stat_test);
    Ok(())
}

fn print_help(
    general: &GeneralOptions,
    forest: &ForestOptions,
    stat_test: &StatisticalTestOptions,
) -> Result<()> {
    banner::print_filter_overview();
    let out = &mut io::stdout();
    general.write_help(out)?;
    forest.write_help(out)?;
    stat_test.write_help(out)?;
    Ok(())
}

fn print_resolved(
    general: &GeneralOptions,
    forest: &ForestOptions,
    stat_test: &StatisticalTestOptions,
) {
    println!("Resolved filter configuration:");
    util::print_general_params(general);
    util::print_param("ntrees", forest.n_trees.get());
    util::print_param("mtry", forest.m_try.get());
    util::print_param("nmaxleaves", forest.n_max_leaves.get());
    util::print_param("nodesize", forest.node_size.get());
    util::print_param("shrinkage", forest.shrinkage.get());
    util::print_param("nperms", stat_test.n_perms.get());
    util::print_param("pthreshold", stat_test.p_value_threshold.get());
}
