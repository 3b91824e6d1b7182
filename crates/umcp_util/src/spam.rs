//! Per-user spam limiting.

use crate::{Clock, CommandCooldown, Cooldown, SystemClock};
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, instrument};

/// Caches one rate-limit bucket per user id.
///
/// Buckets are copied from a template on first lookup and swept once their
/// window has elapsed since their last use. The template itself is never
/// counted against.
///
/// # Example
///
/// ```
/// use umcp_util::{CommandCooldown, SpamLimit};
/// use std::time::Duration;
///
/// let mut spam = SpamLimit::new(CommandCooldown::new(1, Duration::from_secs(5)));
///
/// assert_eq!(spam.update_rate_limit(42), None);
/// assert!(spam.update_rate_limit(42).is_some());
/// assert_eq!(spam.update_rate_limit(7), None);
/// ```
#[derive(Debug)]
pub struct SpamLimit<B, C = SystemClock> {
    cache: HashMap<u64, B>,
    cooldown: B,
    clock: C,
}

impl<B: Cooldown> SpamLimit<B> {
    /// Create a spam limit backed by the system clock.
    pub fn new(original: B) -> Self {
        Self::with_clock(original, SystemClock::new())
    }
}

impl<B: Cooldown, C: Clock> SpamLimit<B, C> {
    /// Create a spam limit reading time from `clock`.
    pub fn with_clock(original: B, clock: C) -> Self {
        debug!(per = ?original.per(), "Creating new SpamLimit");
        Self {
            cache: HashMap::new(),
            cooldown: original,
            clock,
        }
    }

    /// Bucket for `user_id`, creating a fresh copy of the template if the user
    /// has none or theirs expired.
    ///
    /// Every call first sweeps all expired buckets, not only this user's.
    #[instrument(skip(self), fields(cache_size = self.cache.len()))]
    pub fn get_user(&mut self, user_id: u64) -> &mut B {
        self.cleanup_expired();

        let template = &self.cooldown;
        self.cache.entry(user_id).or_insert_with(|| {
            debug!("Creating bucket for user");
            template.copy()
        })
    }

    /// Remove every bucket whose window has elapsed, returning how many went.
    pub fn cleanup_expired(&mut self) -> usize {
        let now = self.clock.now();
        let before = self.cache.len();

        self.cache.retain(|_, bucket| !bucket.is_expired(now));

        let removed = before - self.cache.len();
        if removed > 0 {
            debug!(removed, remaining = self.cache.len(), "Swept expired buckets");
        }
        removed
    }

    /// The bucket every user starts from.
    pub fn template(&self) -> &B {
        &self.cooldown
    }

    /// The clock expiry is measured against.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Number of cached buckets, including ones not yet swept.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Check if no buckets are cached.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl<C: Clock> SpamLimit<CommandCooldown, C> {
    /// Record a use by `user_id` now.
    ///
    /// Returns `None` if allowed, or how long the user must wait.
    pub fn update_rate_limit(&mut self, user_id: u64) -> Option<Duration> {
        let now = self.clock.now();
        let retry_after = self.get_user(user_id).update_rate_limit(now);
        if let Some(wait) = retry_after {
            debug!(user_id, retry_after = ?wait, "User is rate limited");
        }
        retry_after
    }
}
