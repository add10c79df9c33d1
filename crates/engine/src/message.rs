/// Both spellings of a single diagnostic.
///
/// Host linters identify a message by a symbolic name (e.g.
/// `"missing-function-docstring"`) and a short code (e.g. `"C0116"`). Users
/// may configure either spelling, so the matcher compares against both.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageIdentity {
    /// Symbolic name of the diagnostic.
    pub symbolic: String,
    /// Short code of the diagnostic.
    pub code: String,
}

impl MessageIdentity {
    /// Create an identity from a symbolic name and a short code.
    #[must_use]
    pub fn new(symbolic: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            symbolic: symbolic.into(),
            code: code.into(),
        }
    }

    /// Identity for an id with no known alias: both spellings are the id
    /// itself. Rules written against the exact string still apply.
    #[must_use]
    pub fn opaque(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            symbolic: id.clone(),
            code: id,
        }
    }
}
