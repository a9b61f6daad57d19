//! The raw-argument collaborator seam.
//!
//! The option framework never walks argv itself; it asks an
//! [`ArgumentBinder`] whether a field's short or long alias appears and, for
//! valued options, what text was supplied. [`RawArgs`] is the concrete
//! binder used by the driver.

/// Contract the framework expects from the raw-argument collaborator.
pub trait ArgumentBinder {
    /// Textual value of `-short <v>`, `--long <v>` or `--long=<v>`, if any.
    fn value_of(&self, short: &str, long: &str) -> Option<String>;

    /// Whether the presence-only flag `-short` / `--long` appears.
    fn has_flag(&self, short: &str, long: &str) -> bool;
}

/// Binder over a captured token list (typically `env::args()` minus the
/// binary and program names).
#[derive(Debug, Clone, Default)]
pub struct RawArgs {
    tokens: Vec<String>,
}

impl RawArgs {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RawArgs {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    fn matches(token: &str, short: &str, long: &str) -> bool {
        token.strip_prefix("--").is_some_and(|rest| rest == long)
            || token.strip_prefix('-').is_some_and(|rest| rest == short)
    }
}

impl ArgumentBinder for RawArgs {
    fn value_of(&self, short: &str, long: &str) -> Option<String> {
        let long_eq = format!("--{long}=");
        for (index, token) in self.tokens.iter().enumerate() {
            if Self::matches(token, short, long) {
                // `-x` as the last token binds nothing; the field keeps its
                // prior value.
                return self.tokens.get(index + 1).cloned();
            }
            if let Some(value) = token.strip_prefix(&long_eq) {
                return Some(value.to_string());
            }
        }
        None
    }

    fn has_flag(&self, short: &str, long: &str) -> bool {
        self.tokens
            .iter()
            .any(|token| Self::matches(token, short, long))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binds_short_and_long_value_forms() {
        let args = RawArgs::new(["-p", "30", "--pthreshold", "0.01"]);
        assert_eq!(args.value_of("p", "nperms").as_deref(), Some("30"));
        assert_eq!(args.value_of("t", "pthreshold").as_deref(), Some("0.01"));
    }

    #[test]
    fn binds_long_equals_form() {
        let args = RawArgs::new(["--seed=42"]);
        assert_eq!(args.value_of("S", "seed").as_deref(), Some("42"));
    }

    #[test]
    fn absent_option_yields_none() {
        let args = RawArgs::new(["-p", "30"]);
        assert_eq!(args.value_of("n", "ntrees"), None);
        assert!(!args.has_flag("G", "GBT"));
    }

    #[test]
    fn trailing_option_without_value_yields_none() {
        let args = RawArgs::new(["--seed"]);
        assert_eq!(args.value_of("S", "seed"), None);
    }

    #[test]
    fn flags_are_presence_only() {
        let args = RawArgs::new(["-G", "--RF"]);
        assert!(args.has_flag("G", "GBT"));
        assert!(args.has_flag("R", "RF"));
        assert!(!args.has_flag("h", "help"));
    }

    #[test]
    fn alias_matching_is_exact() {
        // `-n` must not match `--n` nor a prefix of another alias.
        let args = RawArgs::new(["--ntrees", "50"]);
        assert_eq!(args.value_of("n", "ntrees").as_deref(), Some("50"));
        assert_eq!(args.value_of("n", "nt"), None);
    }
}
