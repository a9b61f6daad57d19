//! Statistical-test parameters.

use crate::binder::ArgumentBinder;
use crate::field::OptionField;
use crate::groups::OptionGroup;
use arbor_core::{ArborError, ArborResult};
use std::io::{self, Write};

/// Compiled-in defaults for the statistical-test group.
#[derive(Debug, Clone)]
pub struct StatisticalTestDefaults {
    pub n_perms: usize,
    pub p_value_threshold: f64,
}

impl Default for StatisticalTestDefaults {
    fn default() -> Self {
        StatisticalTestDefaults {
            n_perms: 20,
            p_value_threshold: 0.05,
        }
    }
}

/// Permutation count and p-value threshold for the significance test run by
/// the filter program.
#[derive(Debug, Clone)]
pub struct StatisticalTestOptions {
    pub n_perms: OptionField<usize>,
    pub p_value_threshold: OptionField<f64>,
}

impl StatisticalTestOptions {
    pub fn new(defaults: &StatisticalTestDefaults) -> Self {
        StatisticalTestOptions {
            n_perms: OptionField::new(
                "nperms",
                "p",
                "nperms",
                defaults.n_perms,
                format!(
                    "Number of permutations in statistical test (default {})",
                    defaults.n_perms
                ),
            ),
            p_value_threshold: OptionField::new(
                "pthreshold",
                "t",
                "pthreshold",
                defaults.p_value_threshold,
                format!(
                    "P-value threshold in statistical test (default {})",
                    defaults.p_value_threshold
                ),
            ),
        }
    }
}

impl Default for StatisticalTestOptions {
    fn default() -> Self {
        StatisticalTestOptions::new(&StatisticalTestDefaults::default())
    }
}

impl OptionGroup for StatisticalTestOptions {
    fn apply_defaults(&mut self) {
        self.n_perms.apply_default();
        self.p_value_threshold.apply_default();
    }

    fn bind(&mut self, binder: &dyn ArgumentBinder) -> ArborResult<()> {
        self.n_perms.bind(binder)?;
        self.p_value_threshold.bind(binder)?;
        Ok(())
    }

    fn validate(&mut self) -> ArborResult<()> {
        let n_perms = *self.n_perms.get();
        if n_perms < 6 {
            return Err(ArborError::Range(format!(
                "use more than 5 permutations in the statistical test (got {n_perms})"
            )));
        }
        let threshold = *self.p_value_threshold.get();
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ArborError::Range(format!(
                "p-value threshold in statistical test must be within 0...1 (got {threshold})"
            )));
        }
        Ok(())
    }

    fn write_help(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "OPTIONAL ARGUMENTS -- STATISTICAL TEST:")?;
        self.n_perms.write_help_line(out)?;
        self.p_value_threshold.write_help_line(out)?;
        writeln!(out)
    }

    fn aliases(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            (self.n_perms.short(), self.n_perms.long()),
            (
                self.p_value_threshold.short(),
                self.p_value_threshold.long(),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binder::RawArgs;

    #[test]
    fn defaults_pass_validation() {
        let mut stat_test = StatisticalTestOptions::default();
        assert_eq!(*stat_test.n_perms.get(), 20);
        assert_eq!(*stat_test.p_value_threshold.get(), 0.05);
        stat_test.validate().unwrap();
    }

    #[test]
    fn too_few_permutations_violate_the_range_rule() {
        let mut stat_test = StatisticalTestOptions::default();
        stat_test.bind(&RawArgs::new(["--nperms", "3"])).unwrap();
        let err = stat_test.validate().unwrap_err();
        assert!(matches!(err, ArborError::Range(_)));
        assert!(err.to_string().contains("permutations"));
    }

    #[test]
    fn six_permutations_are_enough() {
        let mut stat_test = StatisticalTestOptions::default();
        stat_test.bind(&RawArgs::new(["-p", "6"])).unwrap();
        stat_test.validate().unwrap();
    }

    #[test]
    fn threshold_interval_is_closed() {
        for boundary in ["0.0", "1.0"] {
            let mut stat_test = StatisticalTestOptions::default();
            stat_test
                .bind(&RawArgs::new(["--pthreshold", boundary]))
                .unwrap();
            stat_test.validate().unwrap();
        }
    }

    #[test]
    fn threshold_outside_the_interval_is_rejected() {
        for bad in ["1.5", "-0.01"] {
            let mut stat_test = StatisticalTestOptions::default();
            stat_test.bind(&RawArgs::new(["-t", bad])).unwrap();
            let err = stat_test.validate().unwrap_err();
            assert!(err.to_string().contains("0...1"));
        }
    }
}
