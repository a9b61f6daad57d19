//! Predictor-loading options.

use crate::binder::ArgumentBinder;
use crate::field::OptionField;
use crate::groups::OptionGroup;
use arbor_core::ArborResult;
use std::io::{self, Write};

/// Location of a previously built forest predictor. Presence is enforced by
/// the consumer that first dereferences the path, not here.
#[derive(Debug, Clone)]
pub struct PredictorOptions {
    pub forest: OptionField<String>,
}

impl PredictorOptions {
    pub fn new() -> Self {
        PredictorOptions {
            forest: OptionField::new(
                "forest",
                "F",
                "forest",
                String::new(),
                "Forest predictor stored in a .sf file",
            ),
        }
    }
}

impl Default for PredictorOptions {
    fn default() -> Self {
        PredictorOptions::new()
    }
}

impl OptionGroup for PredictorOptions {
    fn apply_defaults(&mut self) {
        self.forest.apply_default();
    }

    fn bind(&mut self, binder: &dyn ArgumentBinder) -> ArborResult<()> {
        self.forest.bind(binder)
    }

    fn validate(&mut self) -> ArborResult<()> {
        Ok(())
    }

    fn write_help(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "REQUIRED ARGUMENTS -- PREDICTOR:")?;
        self.forest.write_help_line(out)?;
        writeln!(out)
    }

    fn aliases(&self) -> Vec<(&'static str, &'static str)> {
        vec![(self.forest.short(), self.forest.long())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binder::RawArgs;

    #[test]
    fn forest_path_binds_from_arguments() {
        let mut predictor = PredictorOptions::default();
        predictor
            .bind(&RawArgs::new(["-F", "model.sf"]))
            .unwrap();
        assert_eq!(predictor.forest.get(), "model.sf");
    }

    #[test]
    fn absent_forest_path_stays_empty() {
        let mut predictor = PredictorOptions::default();
        predictor.bind(&RawArgs::new(["-I", "data.afm"])).unwrap();
        assert!(predictor.forest.get().is_empty());
        predictor.validate().unwrap();
    }
}
