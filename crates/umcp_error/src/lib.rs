//! Error types for the umcp plugin utilities.
//!
//! # Error Hierarchy
//!
//! Errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - Constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use umcp_error::{ConfigError, UmcpResult};
//!
//! fn load() -> UmcpResult<u32> {
//!     Err(ConfigError::new("rate must be positive"))?
//! }
//!
//! assert!(load().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod lookup;

pub use config::ConfigError;
pub use error::{UmcpError, UmcpErrorKind, UmcpResult};
pub use lookup::{LookupError, LookupErrorKind};
