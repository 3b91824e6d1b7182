//! Helpers for the umcp chat-bot plugin.
//!
//! - [`MappingProxy`] - read-only view over a map
//! - [`SpamLimit`] - per-user rate-limit buckets with lazy expiry
//! - [`partition`] - split a sequence by a predicate
//! - [`make_keypad`] / [`parse_keypad`] - keycap digit emoji
//!
//! Spam limit settings load from TOML through [`UmcpConfig`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod clock;
mod config;
mod cooldown;
mod keypad;
mod mapping;
mod partition;
mod spam;
mod telemetry;

pub use clock::{Clock, MockClock, SystemClock};
pub use config::{SpamLimitConfig, SpamLimitConfigBuilder, UmcpConfig};
pub use cooldown::{CommandCooldown, Cooldown};
pub use keypad::{KEYPAD_SUFFIX, KEYPAD_UTF8, make_keypad, parse_keypad};
pub use mapping::MappingProxy;
pub use partition::{partition, try_partition};
pub use spam::SpamLimit;
pub use telemetry::init_tracing;
