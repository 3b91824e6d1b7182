//! Rate-limit buckets.
//!
//! [`Cooldown`] is the capability the spam limit needs from a bucket: make a
//! fresh copy, report when it was last used, and report its window.
//! [`CommandCooldown`] is a fixed-window bucket allowing `rate` uses per `per`.

use std::fmt::Debug;
use std::time::{Duration, Instant};

/// A rate-limit bucket that can be cached per user.
pub trait Cooldown: Debug {
    /// An independent bucket with the same limit and window and no usage.
    fn copy(&self) -> Self
    where
        Self: Sized;

    /// When the bucket last recorded a use, if ever.
    fn last_used(&self) -> Option<Instant>;

    /// Length of the rate-limit window.
    fn per(&self) -> Duration;

    /// A bucket is expired once its window has fully elapsed since its last
    /// use. A bucket that was never used is always expired, and one whose
    /// window end is not representable never expires.
    fn is_expired(&self, now: Instant) -> bool {
        match self.last_used() {
            Some(last) => window_elapsed(last, self.per(), now),
            None => true,
        }
    }
}

/// Fixed-window bucket allowing `rate` uses every `per`.
///
/// # Examples
///
/// ```
/// use umcp_util::CommandCooldown;
/// use std::time::{Duration, Instant};
///
/// let mut bucket = CommandCooldown::new(2, Duration::from_secs(10));
/// let now = Instant::now();
///
/// assert_eq!(bucket.update_rate_limit(now), None);
/// assert_eq!(bucket.update_rate_limit(now), None);
/// assert_eq!(bucket.update_rate_limit(now), Some(Duration::from_secs(10)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandCooldown {
    rate: u32,
    per: Duration,
    tokens: u32,
    window: Option<Instant>,
    last: Option<Instant>,
}

impl CommandCooldown {
    /// Create a bucket with full tokens that has never been used.
    pub fn new(rate: u32, per: Duration) -> Self {
        Self {
            rate,
            per,
            tokens: rate,
            window: None,
            last: None,
        }
    }

    /// Maximum uses per window.
    pub fn rate(&self) -> u32 {
        self.rate
    }

    /// Tokens available at `now`.
    pub fn get_tokens(&self, now: Instant) -> u32 {
        match self.window {
            Some(start) if !window_elapsed(start, self.per, now) => self.tokens,
            _ => self.rate,
        }
    }

    /// Time until a token becomes available, or `None` if one is available now.
    pub fn get_retry_after(&self, now: Instant) -> Option<Duration> {
        if self.get_tokens(now) > 0 {
            return None;
        }
        Some(self.remaining_window(now))
    }

    /// Record a use at `now`.
    ///
    /// Returns `None` when the use was allowed and a token was consumed, or
    /// the time to wait when the bucket is exhausted.
    pub fn update_rate_limit(&mut self, now: Instant) -> Option<Duration> {
        self.last = Some(now);
        self.tokens = self.get_tokens(now);

        if self.tokens == self.rate {
            self.window = Some(now);
        }

        if self.tokens == 0 {
            return Some(self.remaining_window(now));
        }

        self.tokens -= 1;
        if self.tokens == 0 {
            self.window = Some(now);
        }
        None
    }

    /// Restore full tokens and forget the last use.
    pub fn reset(&mut self) {
        self.tokens = self.rate;
        self.window = None;
        self.last = None;
    }

    fn remaining_window(&self, now: Instant) -> Duration {
        match self.window {
            Some(start) => self.per.saturating_sub(now.saturating_duration_since(start)),
            None => Duration::ZERO,
        }
    }
}

/// `now` is past `start + per`; false when that end is not representable.
fn window_elapsed(start: Instant, per: Duration, now: Instant) -> bool {
    start.checked_add(per).is_some_and(|end| now > end)
}

impl Cooldown for CommandCooldown {
    fn copy(&self) -> Self {
        Self::new(self.rate, self.per)
    }

    fn last_used(&self) -> Option<Instant> {
        self.last
    }

    fn per(&self) -> Duration {
        self.per
    }
}
