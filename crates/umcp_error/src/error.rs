//! Top-level error wrapper types.

use crate::{ConfigError, LookupError};

/// Every error the umcp crates can surface.
///
/// # Examples
///
/// ```
/// use umcp_error::{ConfigError, UmcpError};
///
/// let err: UmcpError = ConfigError::new("bad window").into();
/// assert!(format!("{}", err).contains("Invalid umcp settings"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum UmcpErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Lookup in a read-only view failed
    #[from(LookupError)]
    Lookup(LookupError),
}

/// umcp error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Umcp Error: {}", _0)]
pub struct UmcpError(Box<UmcpErrorKind>);

impl UmcpError {
    /// Create a new error from a kind.
    pub fn new(kind: UmcpErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &UmcpErrorKind {
        &self.0
    }
}

impl<T> From<T> for UmcpError
where
    T: Into<UmcpErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for umcp operations.
pub type UmcpResult<T> = std::result::Result<T, UmcpError>;
