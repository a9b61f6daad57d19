//! General I/O options shared by every program.

use crate::binder::ArgumentBinder;
use crate::field::OptionField;
use crate::groups::OptionGroup;
use arbor_core::{ArborResult, UNSET_SEED};
use std::io::{self, Write};

/// Compiled-in defaults for the general group, passed explicitly into the
/// constructor instead of living as free constants.
#[derive(Debug, Clone)]
pub struct GeneralDefaults {
    pub data_delimiter: char,
    pub header_delimiter: char,
    pub prune_features: usize,
    pub seed: i64,
}

impl Default for GeneralDefaults {
    fn default() -> Self {
        GeneralDefaults {
            data_delimiter: '\t',
            header_delimiter: ':',
            prune_features: 5,
            seed: UNSET_SEED,
        }
    }
}

/// General I/O parameters: input/target/output, feature filters, delimiters,
/// feature pruning and the random seed.
#[derive(Debug, Clone)]
pub struct GeneralOptions {
    pub print_help: OptionField<bool>,
    pub input: OptionField<String>,
    pub target: OptionField<String>,
    pub output: OptionField<String>,
    pub white_list: OptionField<String>,
    pub black_list: OptionField<String>,
    pub log: OptionField<String>,
    pub data_delimiter: OptionField<char>,
    pub header_delimiter: OptionField<char>,
    pub prune_features: OptionField<usize>,
    pub seed: OptionField<i64>,
}

impl GeneralOptions {
    pub fn new(defaults: &GeneralDefaults) -> Self {
        GeneralOptions {
            print_help: OptionField::new("help", "h", "help", false, "Print help"),
            input: OptionField::new(
                "input",
                "I",
                "input",
                String::new(),
                "Input data file, either AFM or ARFF",
            ),
            target: OptionField::new(
                "target",
                "i",
                "target",
                String::new(),
                "Target, specified as integer or string that is to be matched with the content of input",
            ),
            output: OptionField::new("output", "O", "output", String::new(), "Output file"),
            white_list: OptionField::new(
                "whitelist",
                "W",
                "whitelist",
                String::new(),
                "White list of features to be included in the input file(s)",
            ),
            black_list: OptionField::new(
                "blacklist",
                "B",
                "blacklist",
                String::new(),
                "Black list of features to be excluded from the input file(s)",
            ),
            log: OptionField::new("log", "L", "log", String::new(), "Log output file"),
            data_delimiter: OptionField::new(
                "data_delim",
                "D",
                "data_delim",
                defaults.data_delimiter,
                "Data delimiter (default \\t)",
            ),
            header_delimiter: OptionField::new(
                "head_delim",
                "H",
                "head_delim",
                defaults.header_delimiter,
                format!(
                    "Header delimiter that separates the N and C symbols in feature headers from the rest (default {})",
                    defaults.header_delimiter
                ),
            ),
            prune_features: OptionField::new(
                "prune_features",
                "X",
                "prune_features",
                defaults.prune_features,
                format!(
                    "Features with less than n (default {}) samples will be removed",
                    defaults.prune_features
                ),
            ),
            seed: OptionField::new(
                "seed",
                "S",
                "seed",
                defaults.seed,
                "Seed (positive integer) for the random number generator",
            ),
        }
    }

    pub fn help_requested(&self) -> bool {
        self.print_help.is_set()
    }

    /// Seed-defaulting policy: if the seed still carries the "unset"
    /// sentinel after binding, replace it with a generated value. The
    /// generator is injected so callers can pin it.
    pub fn resolve_seed<F: FnOnce() -> i64>(&mut self, generate: F) {
        if *self.seed.get() == UNSET_SEED {
            self.seed.set(generate());
        }
    }
}

impl Default for GeneralOptions {
    fn default() -> Self {
        GeneralOptions::new(&GeneralDefaults::default())
    }
}

impl OptionGroup for GeneralOptions {
    fn apply_defaults(&mut self) {
        self.print_help.apply_default();
        self.input.apply_default();
        self.target.apply_default();
        self.output.apply_default();
        self.white_list.apply_default();
        self.black_list.apply_default();
        self.log.apply_default();
        self.data_delimiter.apply_default();
        self.header_delimiter.apply_default();
        self.prune_features.apply_default();
        self.seed.apply_default();
    }

    fn bind(&mut self, binder: &dyn ArgumentBinder) -> ArborResult<()> {
        self.print_help.bind_flag(binder);
        self.input.bind(binder)?;
        self.target.bind(binder)?;
        self.output.bind(binder)?;
        self.white_list.bind(binder)?;
        self.black_list.bind(binder)?;
        self.log.bind(binder)?;
        self.data_delimiter.bind(binder)?;
        self.header_delimiter.bind(binder)?;
        self.prune_features.bind(binder)?;
        self.seed.bind(binder)?;
        Ok(())
    }

    // Presence of the required fields is the driver's concern; nothing else
    // in this group is range-constrained.
    fn validate(&mut self) -> ArborResult<()> {
        Ok(())
    }

    fn write_help(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "REQUIRED ARGUMENTS:")?;
        self.input.write_help_line(out)?;
        self.target.write_help_line(out)?;
        self.output.write_help_line(out)?;
        writeln!(out)?;

        writeln!(out, "OPTIONAL ARGUMENTS:")?;
        self.print_help.write_help_line(out)?;
        self.log.write_help_line(out)?;
        self.white_list.write_help_line(out)?;
        self.black_list.write_help_line(out)?;
        self.data_delimiter.write_help_line(out)?;
        self.header_delimiter.write_help_line(out)?;
        self.prune_features.write_help_line(out)?;
        self.seed.write_help_line(out)?;
        writeln!(out)
    }

    fn aliases(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            (self.print_help.short(), self.print_help.long()),
            (self.input.short(), self.input.long()),
            (self.target.short(), self.target.long()),
            (self.output.short(), self.output.long()),
            (self.white_list.short(), self.white_list.long()),
            (self.black_list.short(), self.black_list.long()),
            (self.log.short(), self.log.long()),
            (self.data_delimiter.short(), self.data_delimiter.long()),
            (self.header_delimiter.short(), self.header_delimiter.long()),
            (self.prune_features.short(), self.prune_features.long()),
            (self.seed.short(), self.seed.long()),
        ]
    }
}
