//! Non-fatal problems found while loading per-file-ignores configuration.
//!
//! A bad entry never aborts the load: the entry is dropped and a warning is
//! recorded so the host can surface it (as a startup message, a diagnostic,
//! or nothing at all).

use thiserror::Error;

/// A configuration entry that was dropped during loading.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigWarning {
    /// An entry with no `:` separating the pattern from its code list.
    #[error("ignore entry `{entry}` has no `:` separating pattern from codes")]
    MissingSeparator { entry: String },

    /// An entry whose pattern is empty after trimming.
    #[error("ignore entry `{entry}` has an empty pattern")]
    EmptyPattern { entry: String },

    /// A pattern that failed to compile as a regular expression.
    ///
    /// Produced when the rule set is compiled, not during parsing; carried
    /// here so both loading stages report through one type.
    #[error("invalid ignore pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

impl ConfigWarning {
    /// Returns the warning code for this dropped entry.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingSeparator { .. } => "missing-separator",
            Self::EmptyPattern { .. } => "empty-pattern",
            Self::InvalidPattern { .. } => "invalid-pattern",
        }
    }

    /// Returns a human-readable message describing the dropped entry.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}
