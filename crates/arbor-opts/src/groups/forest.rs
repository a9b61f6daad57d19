//! Stochastic-forest hyperparameters and the RF/GBT preset tables.

use crate::binder::ArgumentBinder;
use crate::field::OptionField;
use crate::groups::OptionGroup;
use arbor_core::{ArborError, ArborResult};
use std::io::{self, Write};

/// The closed enumeration of forest presets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ForestPreset {
    #[default]
    Rf,
    Gbt,
}

impl ForestPreset {
    pub fn from_name(name: &str) -> ArborResult<Self> {
        match name.to_ascii_uppercase().as_str() {
            "RF" => Ok(ForestPreset::Rf),
            "GBT" => Ok(ForestPreset::Gbt),
            other => Err(ArborError::UnknownPreset(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ForestPreset::Rf => "RF",
            ForestPreset::Gbt => "GBT",
        }
    }

    /// The complete default table this preset stands for.
    pub fn defaults(self) -> ForestDefaults {
        match self {
            ForestPreset::Rf => ForestDefaults::rf(),
            ForestPreset::Gbt => ForestDefaults::gbt(),
        }
    }
}

/// A complete default-value table for the forest group, keyed by preset.
#[derive(Debug, Clone)]
pub struct ForestDefaults {
    pub n_trees: usize,
    pub m_try: usize,
    pub n_max_leaves: usize,
    pub node_size: usize,
    pub shrinkage: f64,
}

impl ForestDefaults {
    pub fn rf() -> Self {
        ForestDefaults {
            n_trees: 100,
            m_try: 0,
            n_max_leaves: 100,
            node_size: 5,
            shrinkage: 0.0,
        }
    }

    pub fn gbt() -> Self {
        ForestDefaults {
            n_trees: 100,
            m_try: 0,
            n_max_leaves: 6,
            node_size: 5,
            shrinkage: 0.1,
        }
    }
}

impl Default for ForestDefaults {
    fn default() -> Self {
        ForestDefaults::rf()
    }
}

/// Ensemble-model hyperparameters. `m_try == 0` means "let the trainer pick
/// an automatic candidate count".
#[derive(Debug, Clone)]
pub struct ForestOptions {
    pub n_trees: OptionField<usize>,
    pub m_try: OptionField<usize>,
    pub n_max_leaves: OptionField<usize>,
    pub node_size: OptionField<usize>,
    pub shrinkage: OptionField<f64>,
}

impl ForestOptions {
    pub fn new(defaults: &ForestDefaults) -> Self {
        ForestOptions {
            n_trees: OptionField::new(
                "ntrees",
                "n",
                "ntrees",
                defaults.n_trees,
                "Number of trees in the forest",
            ),
            m_try: OptionField::new(
                "mtry",
                "m",
                "mtry",
                defaults.m_try,
                "Number of randomly drawn features per node split (0 = automatic)",
            ),
            n_max_leaves: OptionField::new(
                "nmaxleaves",
                "a",
                "nmaxleaves",
                defaults.n_max_leaves,
                "Maximum number of leaves per tree",
            ),
            node_size: OptionField::new(
                "nodesize",
                "s",
                "nodesize",
                defaults.node_size,
                "Minimum number of train samples per node, affects tree depth",
            ),
            shrinkage: OptionField::new(
                "shrinkage",
                "k",
                "shrinkage",
                defaults.shrinkage,
                "[GBT only] Shrinkage applied to evolving the residual",
            ),
        }
    }

    /// Overwrites every field with the named preset's table. Must run before
    /// user overrides are bound, never after.
    pub fn apply_preset(&mut self, preset: ForestPreset) {
        let defaults = preset.defaults();
        self.n_trees.reset(defaults.n_trees);
        self.m_try.reset(defaults.m_try);
        self.n_max_leaves.reset(defaults.n_max_leaves);
        self.node_size.reset(defaults.node_size);
        self.shrinkage.reset(defaults.shrinkage);
    }
}

impl Default for ForestOptions {
    fn default() -> Self {
        ForestOptions::new(&ForestDefaults::default())
    }
}

impl OptionGroup for ForestOptions {
    fn apply_defaults(&mut self) {
        self.n_trees.apply_default();
        self.m_try.apply_default();
        self.n_max_leaves.apply_default();
        self.node_size.apply_default();
        self.shrinkage.apply_default();
    }

    fn bind(&mut self, binder: &dyn ArgumentBinder) -> ArborResult<()> {
        self.n_trees.bind(binder)?;
        self.m_try.bind(binder)?;
        self.n_max_leaves.bind(binder)?;
        self.node_size.bind(binder)?;
        self.shrinkage.bind(binder)?;
        Ok(())
    }

    // No cross-field rules beyond the type bounds.
    fn validate(&mut self) -> ArborResult<()> {
        Ok(())
    }

    fn write_help(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "OPTIONAL ARGUMENTS -- STOCHASTIC FOREST:")?;
        self.n_trees.write_help_line(out)?;
        self.m_try.write_help_line(out)?;
        self.n_max_leaves.write_help_line(out)?;
        self.node_size.write_help_line(out)?;
        self.shrinkage.write_help_line(out)?;
        writeln!(out)
    }

    fn aliases(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            (self.n_trees.short(), self.n_trees.long()),
            (self.m_try.short(), self.m_try.long()),
            (self.n_max_leaves.short(), self.n_max_leaves.long()),
            (self.node_size.short(), self.node_size.long()),
            (self.shrinkage.short(), self.shrinkage.long()),
        ]
    }
}
