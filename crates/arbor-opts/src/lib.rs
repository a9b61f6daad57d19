//! # arbor-opts: declarative option groups for the arbor CLI
//!
//! Models the configuration surface of the tool as five typed, validated
//! option groups. Each group owns its compiled-in defaults, binds user
//! overrides from the raw arguments through the [`ArgumentBinder`] seam,
//! validates its cross-field rules, and renders its own help section from
//! the same declarative source.
//!
//! Lifecycle of a group: construction (defaults) -> optional preset
//! override -> user-argument override -> validation -> read-only
//! consumption. Binding and validation return [`arbor_core::ArborResult`];
//! nothing in this crate terminates the process.

pub mod binder;
pub mod field;
pub mod groups;
pub mod help;

pub use binder::{ArgumentBinder, RawArgs};
pub use field::{FieldValue, OptionField};
pub use groups::{
    check_unique_aliases, ForestDefaults, ForestOptions, ForestPreset, GeneralDefaults,
    GeneralOptions, OptionGroup, PredictorBuilderOptions, PredictorOptions,
    StatisticalTestDefaults, StatisticalTestOptions,
};
