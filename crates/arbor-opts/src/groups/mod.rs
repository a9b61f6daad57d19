//! The five concrete option groups and their shared lifecycle.

pub mod builder;
pub mod forest;
pub mod general;
pub mod predictor;
pub mod stat_test;

pub use builder::PredictorBuilderOptions;
pub use forest::{ForestDefaults, ForestOptions, ForestPreset};
pub use general::{GeneralDefaults, GeneralOptions};
pub use predictor::PredictorOptions;
pub use stat_test::{StatisticalTestDefaults, StatisticalTestOptions};

use crate::binder::ArgumentBinder;
use arbor_core::{ArborError, ArborResult};
use std::collections::HashSet;
use std::io::{self, Write};

/// Shared lifecycle of every option group.
///
/// `bind` asks the argument collaborator for each field in turn; `validate`
/// runs the group's cross-field rules in a fixed order and reports the first
/// violation; `write_help` renders the group's fields in declared order.
/// None of these terminate the process; the driver decides what a violation
/// costs.
pub trait OptionGroup {
    /// Restores every field's compiled-in default. Idempotent; construction
    /// already leaves the group in this state.
    fn apply_defaults(&mut self);

    fn bind(&mut self, binder: &dyn ArgumentBinder) -> ArborResult<()>;

    fn validate(&mut self) -> ArborResult<()>;

    fn write_help(&self, out: &mut dyn Write) -> io::Result<()>;

    /// Every (short, long) alias pair, in declared order.
    fn aliases(&self) -> Vec<(&'static str, &'static str)>;
}

/// Checks the alias-uniqueness invariant over a set of groups bound together
/// in one invocation: no short and no long alias may repeat.
pub fn check_unique_aliases(groups: &[&dyn OptionGroup]) -> ArborResult<()> {
    let mut shorts = HashSet::new();
    let mut longs = HashSet::new();
    for group in groups {
        for (short, long) in group.aliases() {
            if !shorts.insert(short) {
                return Err(ArborError::Other(format!(
                    "duplicate short alias '-{short}' across bound option groups"
                )));
            }
            if !longs.insert(long) {
                return Err(ArborError::Other(format!(
                    "duplicate long alias '--{long}' across bound option groups"
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_five_groups_have_unique_aliases() {
        let general = GeneralOptions::default();
        let forest = ForestOptions::default();
        let predictor = PredictorOptions::default();
        let builder = PredictorBuilderOptions::default();
        let stat_test = StatisticalTestOptions::default();
        check_unique_aliases(&[&general, &forest, &predictor, &builder, &stat_test]).unwrap();
    }

    #[test]
    fn duplicate_aliases_are_rejected() {
        let general = GeneralOptions::default();
        let err = check_unique_aliases(&[&general, &general]).unwrap_err();
        assert!(err.to_string().contains("duplicate short alias"));
    }

    #[test]
    fn combined_help_lists_every_alias_exactly_once() {
        let general = GeneralOptions::default();
        let forest = ForestOptions::default();
        let predictor = PredictorOptions::default();
        let builder = PredictorBuilderOptions::default();
        let stat_test = StatisticalTestOptions::default();
        let groups: [&dyn OptionGroup; 5] =
            [&general, &forest, &predictor, &builder, &stat_test];

        let mut out = Vec::new();
        for group in &groups {
            group.write_help(&mut out).unwrap();
        }
        let rendered = String::from_utf8(out).unwrap();

        for group in &groups {
            for (short, long) in group.aliases() {
                let marker = format!(" -{short} / --{long}");
                assert_eq!(
                    rendered.matches(&marker).count(),
                    1,
                    "alias -{short} / --{long} should appear exactly once"
                );
            }
        }
    }
}
