//! Predictor-builder mode selection.

use crate::binder::ArgumentBinder;
use crate::field::OptionField;
use crate::groups::{ForestPreset, OptionGroup};
use arbor_core::{ArborError, ArborResult};
use std::io::{self, Write};

/// Chooses between the two predictor models. The flags are mutually
/// exclusive; raising neither selects RF.
#[derive(Debug, Clone)]
pub struct PredictorBuilderOptions {
    pub is_gbt: OptionField<bool>,
    pub is_rf: OptionField<bool>,
}

impl PredictorBuilderOptions {
    pub fn new() -> Self {
        PredictorBuilderOptions {
            is_gbt: OptionField::new(
                "GBT",
                "G",
                "GBT",
                false,
                "Set this flag if you prefer GBT as the predictor model",
            ),
            is_rf: OptionField::new(
                "RF",
                "R",
                "RF",
                false,
                "Set this flag if you prefer RF as the predictor model (default)",
            ),
        }
    }

    /// The forest preset the selected mode stands for. Meaningful only
    /// after [`OptionGroup::validate`] has applied the defaulting rule.
    pub fn preset(&self) -> ForestPreset {
        if self.is_gbt.is_set() {
            ForestPreset::Gbt
        } else {
            ForestPreset::Rf
        }
    }
}

impl Default for PredictorBuilderOptions {
    fn default() -> Self {
        PredictorBuilderOptions::new()
    }
}

impl OptionGroup for PredictorBuilderOptions {
    fn apply_defaults(&mut self) {
        self.is_gbt.apply_default();
        self.is_rf.apply_default();
    }

    fn bind(&mut self, binder: &dyn ArgumentBinder) -> ArborResult<()> {
        self.is_gbt.bind_flag(binder);
        self.is_rf.bind_flag(binder);
        Ok(())
    }

    fn validate(&mut self) -> ArborResult<()> {
        // If neither flag was raised, fall back to RF.
        if !(self.is_gbt.is_set() || self.is_rf.is_set()) {
            self.is_rf.set(true);
        }
        if self.is_rf.is_set() && self.is_gbt.is_set() {
            return Err(ArborError::MutualExclusion(
                "cannot choose both RF and GBT for predictor building".to_string(),
            ));
        }
        Ok(())
    }

    fn write_help(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "OPTIONAL ARGUMENTS -- PREDICTOR BUILDER:")?;
        self.is_gbt.write_help_line(out)?;
        self.is_rf.write_help_line(out)?;
        writeln!(out)
    }

    fn aliases(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            (self.is_gbt.short(), self.is_gbt.long()),
            (self.is_rf.short(), self.is_rf.long()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binder::RawArgs;

    #[test]
    fn neither_flag_defaults_to_rf() {
        let mut builder = PredictorBuilderOptions::default();
        builder.bind(&RawArgs::new(Vec::<String>::new())).unwrap();
        builder.validate().unwrap();
        assert!(builder.is_rf.is_set());
        assert!(!builder.is_gbt.is_set());
        assert_eq!(builder.preset(), ForestPreset::Rf);
    }

    #[test]
    fn gbt_flag_selects_gbt() {
        let mut builder = PredictorBuilderOptions::default();
        builder.bind(&RawArgs::new(["-G"])).unwrap();
        builder.validate().unwrap();
        assert!(builder.is_gbt.is_set());
        assert!(!builder.is_rf.is_set());
        assert_eq!(builder.preset(), ForestPreset::Gbt);
    }

    #[test]
    fn both_flags_are_mutually_exclusive() {
        let mut builder = PredictorBuilderOptions::default();
        builder.bind(&RawArgs::new(["-G", "--RF"])).unwrap();
        let err = builder.validate().unwrap_err();
        assert!(matches!(err, ArborError::MutualExclusion(_)));
        assert!(err.to_string().contains("both RF and GBT"));
    }
}
