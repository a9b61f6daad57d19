//! Generic option fields.
//!
//! One [`OptionField`] record replaces the per-parameter value/short/long
//! triplets a hand-written struct per concern would need: every configurable
//! parameter is the same record, parameterized by its value type.

use crate::binder::ArgumentBinder;
use crate::help::write_option_line;
use arbor_core::{ArborError, ArborResult};
use std::io::{self, Write};

/// A value type an option field can carry, with its textual-conversion rule.
pub trait FieldValue: Clone {
    /// Human-readable type name used in conversion diagnostics.
    const TYPE_NAME: &'static str;

    /// Converts the bound argument text, or `None` if it does not represent
    /// a value of this type.
    fn parse_text(text: &str) -> Option<Self>;
}

impl FieldValue for bool {
    const TYPE_NAME: &'static str = "boolean";

    fn parse_text(text: &str) -> Option<Self> {
        match text {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        }
    }
}

impl FieldValue for i64 {
    const TYPE_NAME: &'static str = "integer";

    fn parse_text(text: &str) -> Option<Self> {
        text.parse().ok()
    }
}

impl FieldValue for usize {
    const TYPE_NAME: &'static str = "unsigned integer";

    fn parse_text(text: &str) -> Option<Self> {
        text.parse().ok()
    }
}

impl FieldValue for f64 {
    const TYPE_NAME: &'static str = "decimal number";

    fn parse_text(text: &str) -> Option<Self> {
        text.parse().ok()
    }
}

impl FieldValue for char {
    const TYPE_NAME: &'static str = "single character";

    fn parse_text(text: &str) -> Option<Self> {
        match text {
            "\\t" => Some('\t'),
            "\\n" => Some('\n'),
            _ => {
                let mut chars = text.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(c),
                    _ => None,
                }
            }
        }
    }
}

impl FieldValue for String {
    const TYPE_NAME: &'static str = "text";

    fn parse_text(text: &str) -> Option<Self> {
        Some(text.to_string())
    }
}

/// One configurable parameter: identity, aliases, help text, and a typed
/// default plus current value. The current value starts equal to the default
/// and changes only through preset application or argument binding.
#[derive(Debug, Clone)]
pub struct OptionField<T: FieldValue> {
    name: &'static str,
    short: &'static str,
    long: &'static str,
    help: String,
    default: T,
    value: T,
}

impl<T: FieldValue> OptionField<T> {
    pub fn new(
        name: &'static str,
        short: &'static str,
        long: &'static str,
        default: T,
        help: impl Into<String>,
    ) -> Self {
        OptionField {
            name,
            short,
            long,
            help: help.into(),
            value: default.clone(),
            default,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn short(&self) -> &'static str {
        self.short
    }

    pub fn long(&self) -> &'static str {
        self.long
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn set(&mut self, value: T) {
        self.value = value;
    }

    /// Restores the compiled-in default.
    pub fn apply_default(&mut self) {
        self.value = self.default.clone();
    }

    /// Replaces both the default and the current value, used when a preset
    /// table overwrites the whole group before user overrides.
    pub fn reset(&mut self, default: T) {
        self.value = default.clone();
        self.default = default;
    }

    /// Overwrites the current value from the raw arguments if the field's
    /// alias appears there; otherwise leaves it unchanged. Safe to invoke
    /// more than once with the same binder.
    pub fn bind(&mut self, binder: &dyn ArgumentBinder) -> ArborResult<()> {
        if let Some(text) = binder.value_of(self.short, self.long) {
            match T::parse_text(&text) {
                Some(parsed) => self.value = parsed,
                None => {
                    return Err(ArborError::Conversion {
                        short: self.short.to_string(),
                        long: self.long.to_string(),
                        value: text,
                        expected: T::TYPE_NAME,
                    })
                }
            }
        }
        Ok(())
    }

    /// Writes this field's help line: ` -s / --long`, padded to the shared
    /// column width, then the help text.
    pub fn write_help_line(&self, out: &mut dyn Write) -> io::Result<()> {
        write_option_line(out, self.short, self.long, &self.help)
    }
}

impl OptionField<bool> {
    /// Presence-only binding: the flag's appearance raises the field, its
    /// absence leaves it untouched.
    pub fn bind_flag(&mut self, binder: &dyn ArgumentBinder) {
        if binder.has_flag(self.short, self.long) {
            self.value = true;
        }
    }

    pub fn is_set(&self) -> bool {
        self.value
    }
}
