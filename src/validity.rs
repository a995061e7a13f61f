use chrono::{DateTime, Duration, Utc};

/// How long a signed URL stays valid.
///
/// Instants in the past and negative durations are accepted; they produce a
/// URL that is already expired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    /// Valid for this long after signing.
    For(Duration),
    /// Valid until this instant.
    Until(DateTime<Utc>),
}

impl Validity {
    /// The instant the URL stops being valid when signed at `now`.
    pub fn expires_at(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        match *self {
            Validity::For(duration) => {
                now.checked_add_signed(duration)
                    .unwrap_or(if duration < Duration::zero() {
                        DateTime::<Utc>::MIN_UTC
                    } else {
                        DateTime::<Utc>::MAX_UTC
                    })
            }
            Validity::Until(at) => at,
        }
    }
}

impl From<Duration> for Validity {
    fn from(duration: Duration) -> Self {
        Validity::For(duration)
    }
}

impl From<DateTime<Utc>> for Validity {
    fn from(at: DateTime<Utc>) -> Self {
        Validity::Until(at)
    }
}
