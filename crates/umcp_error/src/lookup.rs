//! Lookup error types for read-only views.

/// Kinds of lookup errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum LookupErrorKind {
    /// Key is absent from the underlying mapping
    #[display("Key not found: {}", _0)]
    KeyNotFound(String),
}

/// Lookup error with location tracking.
///
/// # Examples
///
/// ```
/// use umcp_error::{LookupError, LookupErrorKind};
///
/// let err = LookupError::new(LookupErrorKind::KeyNotFound("\"c\"".to_string()));
/// assert!(format!("{}", err).contains("Key not found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Lookup Error: {} at line {} in {}", kind, line, file)]
pub struct LookupError {
    /// The kind of error that occurred
    pub kind: LookupErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl LookupError {
    /// Create a new lookup error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: LookupErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for a missing key, rendered with its `Debug` form.
    #[track_caller]
    pub fn key_not_found(key: &impl std::fmt::Debug) -> Self {
        Self::new(LookupErrorKind::KeyNotFound(format!("{:?}", key)))
    }
}
