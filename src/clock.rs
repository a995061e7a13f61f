//! Sources of "now" for issuing and checking expiring URLs.
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};

/// Something that can tell the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

/// The wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to, with one second resolution.
///
/// Safe to share between threads; wrap it in an `Arc` to keep a handle after
/// handing it to a signer.
#[derive(Debug)]
pub struct FixedClock {
    seconds: AtomicI64,
}

impl FixedClock {
    pub fn new(at: DateTime<Utc>) -> Self {
        FixedClock {
            seconds: AtomicI64::new(at.timestamp()),
        }
    }

    /// A clock stopped at `seconds` since the Unix epoch.
    ///
    /// Values chrono cannot represent are clamped into its range.
    pub fn from_timestamp(seconds: i64) -> Self {
        FixedClock::new(from_seconds(seconds))
    }

    pub fn set(&self, at: DateTime<Utc>) {
        self.seconds.store(at.timestamp(), Ordering::SeqCst);
    }

    /// Move the clock by `by`, which may be negative. Saturates at the ends of
    /// chrono's range.
    pub fn advance(&self, by: Duration) {
        let now = self.now();
        let next = now.checked_add_signed(by).unwrap_or(if by < Duration::zero() {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        });
        self.set(next);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        from_seconds(self.seconds.load(Ordering::SeqCst))
    }
}

fn from_seconds(seconds: i64) -> DateTime<Utc> {
    match Utc.timestamp_opt(seconds, 0).single() {
        Some(at) => at,
        None if seconds < 0 => DateTime::<Utc>::MIN_UTC,
        None => DateTime::<Utc>::MAX_UTC,
    }
}
