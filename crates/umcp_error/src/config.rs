//! Errors raised while loading or validating umcp settings.

/// Invalid or unreadable umcp settings, tagged with where they were rejected.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Invalid umcp settings ({}:{}): {}", file, line, message)]
pub struct ConfigError {
    /// What was wrong with the settings
    pub message: String,
    /// Source line that rejected the settings
    pub line: u32,
    /// Source file that rejected the settings
    pub file: &'static str,
}

impl ConfigError {
    /// Reject settings with `message`, recording the caller's location.
    ///
    /// # Examples
    ///
    /// ```
    /// use umcp_error::ConfigError;
    ///
    /// let err = ConfigError::new("spam.per_secs must be at least 1");
    /// assert!(err.to_string().starts_with("Invalid umcp settings"));
    /// assert!(err.to_string().ends_with("spam.per_secs must be at least 1"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            file: location.file(),
            line: location.line(),
        }
    }
}
