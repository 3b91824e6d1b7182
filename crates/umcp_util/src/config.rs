//! Configuration for the umcp plugin utilities.
//!
//! Sources, in order of precedence (later override earlier):
//! 1. Bundled defaults (`umcp.toml` shipped with the crate)
//! 2. `~/.config/umcp/umcp.toml`
//! 3. `./umcp.toml`

use crate::{Clock, CommandCooldown, SpamLimit};
use config::{Config, File, FileFormat};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};
use umcp_error::{ConfigError, UmcpResult};

/// Per-user spam limit settings.
///
/// ```toml
/// [spam]
/// rate = 3
/// per_secs = 10
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(default)]
pub struct SpamLimitConfig {
    /// Uses allowed per window
    #[serde(default = "default_rate")]
    rate: u32,

    /// Window length (seconds)
    #[serde(default = "default_per_secs")]
    per_secs: u64,
}

fn default_rate() -> u32 {
    1
}

fn default_per_secs() -> u64 {
    5
}

impl Default for SpamLimitConfig {
    fn default() -> Self {
        Self {
            rate: default_rate(),
            per_secs: default_per_secs(),
        }
    }
}

impl SpamLimitConfig {
    /// Create a builder for spam limit configuration.
    pub fn builder() -> SpamLimitConfigBuilder {
        SpamLimitConfigBuilder::default()
    }

    /// Window length as a duration.
    pub fn per(&self) -> Duration {
        Duration::from_secs(self.per_secs)
    }

    /// Check that the limit can ever be satisfied and expires.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `rate` or `per_secs` is zero.
    pub fn validate(&self) -> UmcpResult<()> {
        if self.rate == 0 {
            return Err(ConfigError::new("spam.rate must be at least 1").into());
        }
        if self.per_secs == 0 {
            return Err(ConfigError::new("spam.per_secs must be at least 1").into());
        }
        Ok(())
    }

    /// Template bucket for these settings.
    pub fn cooldown(&self) -> CommandCooldown {
        CommandCooldown::new(self.rate, self.per())
    }

    /// Spam limit using the system clock.
    pub fn spam_limit(&self) -> SpamLimit<CommandCooldown> {
        SpamLimit::new(self.cooldown())
    }

    /// Spam limit reading time from `clock`.
    pub fn spam_limit_with_clock<C: Clock>(&self, clock: C) -> SpamLimit<CommandCooldown, C> {
        SpamLimit::with_clock(self.cooldown(), clock)
    }
}

/// Top-level umcp configuration.
///
/// # Example
///
/// ```no_run
/// use umcp_util::UmcpConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = UmcpConfig::load()?;
/// let mut spam = config.spam().spam_limit();
/// let _bucket = spam.get_user(1234);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Getters)]
pub struct UmcpConfig {
    /// Per-user spam limit
    #[serde(default)]
    spam: SpamLimitConfig,
}

impl UmcpConfig {
    /// Load configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> UmcpResult<Self> {
        debug!("Loading configuration from file");

        let config: Self = Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                ))
            })?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;

        config.spam.validate()?;
        Ok(config)
    }

    /// Load configuration with precedence: current dir > home dir > bundled defaults.
    ///
    /// User config files are optional and silently skipped if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if a present file cannot be parsed or the merged
    /// values are invalid.
    #[instrument]
    pub fn load() -> UmcpResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        const DEFAULT_CONFIG: &str = include_str!("../umcp.toml");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/umcp/umcp.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("umcp").required(false));

        let config: Self = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;

        config.spam.validate()?;
        debug!(rate = config.spam.rate, per_secs = config.spam.per_secs, "Loaded configuration");
        Ok(config)
    }
}
