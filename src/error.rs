use chrono::{DateTime, Utc};
use snafu::Snafu;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised while building a signer or signing content.
#[derive(Debug, Snafu)]
#[snafu(visibility = "pub(crate)")]
pub enum Error {
    #[snafu(display("The secret key must not be empty"))]
    EmptyKey,
    /// HMAC-SHA256 accepts any key length, so this is not produced today.
    #[snafu(display("The secret key could not be used to initialise HMAC-SHA256"))]
    InvalidKeyLength,
    #[snafu(display("The secret key is not valid base64. Decoding failed with: {}", source))]
    InvalidKeyEncoding { source: base64::DecodeError },
    #[snafu(display("No secret key found in environment variable {}", name))]
    MissingSecret {
        source: std::env::VarError,
        name: String,
    },
    #[snafu(display("Invalid query parameter name {:?}: {}", name, reason))]
    InvalidParameterName { name: String, reason: String },
    #[snafu(display(
        "Content already defines the reserved query parameter {:?}",
        parameter
    ))]
    ReservedParameterCollision { parameter: String },
}

/// The ways a signed URL can fail verification.
///
/// `Unsigned` and `Unverified` mean the request did not come from us (or was
/// altered), `Expired` means it did but is no longer valid.
#[derive(Debug, Snafu, Clone, PartialEq, Eq)]
#[snafu(visibility = "pub(crate)")]
pub enum VerificationError {
    #[snafu(display("The URL carries no signature"))]
    Unsigned,
    #[snafu(display("The URL signature does not match its content"))]
    Unverified,
    #[snafu(display("The URL expired at {}", expired_at))]
    Expired { expired_at: DateTime<Utc> },
}

impl VerificationError {
    /// True when the signature was genuine but the link ran out of time.
    pub fn is_expired(&self) -> bool {
        matches!(self, VerificationError::Expired { .. })
    }
}
