//! Tests for per-user spam limiting.

use std::time::{Duration, Instant};
use umcp_util::{Clock, CommandCooldown, Cooldown, MockClock, SpamLimit};

fn spam_limit(rate: u32, per_secs: u64) -> (SpamLimit<CommandCooldown, MockClock>, MockClock) {
    let clock = MockClock::new(Instant::now());
    let spam = SpamLimit::with_clock(
        CommandCooldown::new(rate, Duration::from_secs(per_secs)),
        clock.clone(),
    );
    (spam, clock)
}

#[test]
fn test_bucket_survives_within_window_and_expires_after() {
    let (mut spam, clock) = spam_limit(1, 2);
    let start = clock.now();

    // t=0: consume the only token
    assert_eq!(spam.get_user(1).update_rate_limit(start), None);

    // t=1: same bucket, still exhausted
    clock.advance(Duration::from_secs(1));
    let bucket = spam.get_user(1);
    assert_eq!(bucket.last_used(), Some(start));
    assert_eq!(bucket.get_tokens(clock.now()), 0);

    // t=5: old bucket evicted, fresh one handed out
    clock.advance(Duration::from_secs(4));
    let bucket = spam.get_user(1);
    assert_eq!(bucket.last_used(), None);
    assert_eq!(bucket.get_tokens(clock.now()), 1);
}

#[test]
fn test_usage_accumulates_per_user() {
    let (mut spam, _clock) = spam_limit(2, 10);

    assert_eq!(spam.update_rate_limit(1), None);
    assert_eq!(spam.update_rate_limit(1), None);
    assert_eq!(spam.update_rate_limit(1), Some(Duration::from_secs(10)));

    // Other users have their own buckets
    assert_eq!(spam.update_rate_limit(2), None);
}

#[test]
fn test_retry_after_shrinks_with_time() {
    let (mut spam, clock) = spam_limit(1, 10);

    assert_eq!(spam.update_rate_limit(9), None);
    clock.advance(Duration::from_secs(4));
    assert_eq!(spam.update_rate_limit(9), Some(Duration::from_secs(6)));
}

#[test]
fn test_sweep_runs_for_every_lookup() {
    let (mut spam, clock) = spam_limit(1, 2);

    spam.update_rate_limit(1);
    spam.update_rate_limit(2);
    assert_eq!(spam.len(), 2);

    clock.advance(Duration::from_secs(3));
    spam.update_rate_limit(3);

    // Users 1 and 2 expired and were swept by the lookup for user 3
    assert_eq!(spam.len(), 1);
}

#[test]
fn test_repeated_use_keeps_bucket_alive() {
    let (mut spam, clock) = spam_limit(5, 2);

    for _ in 0..4 {
        assert_eq!(spam.update_rate_limit(1), None);
        clock.advance(Duration::from_millis(1500));
    }

    // Each use refreshed last_used, so the bucket was never swept
    assert_eq!(spam.len(), 1);
    assert!(spam.get_user(1).last_used().is_some());
}

#[test]
fn test_cleanup_expired_reports_removed() {
    let (mut spam, clock) = spam_limit(1, 1);
    spam.update_rate_limit(1);
    spam.update_rate_limit(2);

    assert_eq!(spam.cleanup_expired(), 0);
    clock.advance(Duration::from_secs(2));
    assert_eq!(spam.cleanup_expired(), 2);
    assert!(spam.is_empty());
}

#[test]
fn test_exhausted_user_waits_full_window_from_last_token() {
    let (mut spam, clock) = spam_limit(2, 10);

    assert_eq!(spam.update_rate_limit(1), None);
    clock.advance(Duration::from_secs(5));
    assert_eq!(spam.update_rate_limit(1), None);

    // The last token restarted the window at t=5
    clock.advance(Duration::from_secs(7));
    assert_eq!(spam.update_rate_limit(1), Some(Duration::from_secs(3)));
}

#[test]
fn test_huge_window_never_panics() {
    let clock = MockClock::new(Instant::now());
    let mut spam = SpamLimit::with_clock(CommandCooldown::new(1, Duration::MAX), clock.clone());

    assert_eq!(spam.update_rate_limit(1), None);
    clock.advance(Duration::from_secs(60));
    assert!(spam.update_rate_limit(1).is_some());
    assert_eq!(spam.len(), 1);

    let mut system = SpamLimit::new(CommandCooldown::new(1, Duration::MAX));
    assert_eq!(system.update_rate_limit(1), None);
    assert!(system.update_rate_limit(1).is_some());
}
