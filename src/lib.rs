//! Tamper-evident, optionally expiring URLs.
//!
//! A [`UrlSigner`] appends an HMAC-SHA256 signature (`_hash`) and, when asked,
//! an expiration timestamp (`_expiration`) to a URL's query string. Handing
//! the result back to [`UrlSigner::verify`] tells you whether it is genuine
//! and still valid:
//!
//! - [`VerificationError::Unsigned`]: there is no `_hash` at all.
//! - [`VerificationError::Unverified`]: the `_hash` does not match, because the
//!   URL was altered or signed with another key.
//! - [`VerificationError::Expired`]: the URL is genuine but too old.
//!
//! Typical uses are password reset and e-mail confirmation links. The visible
//! parts of a signed URL travel in plain text, so they must not be secret
//! themselves. Verifying does not consume a URL: it stays valid until it
//! expires.
//!
//! ```
//! use chrono::Duration;
//! use signed_url::{SecretKey, UrlSigner, VerificationError};
//!
//! let signer = UrlSigner::new(SecretKey::generate()).unwrap();
//! let link = signer
//!     .sign_for("https://example.com/verify-email?user=42", Duration::hours(24))
//!     .unwrap();
//!
//! match signer.verify(&link) {
//!     Ok(()) => {}
//!     Err(VerificationError::Expired { .. }) => panic!("ask for a new link"),
//!     Err(_) => panic!("invalid or tampered link"),
//! }
//! ```
pub mod batch;
pub mod clock;
pub mod config;
pub mod error;
pub mod key;
pub mod signer;
pub mod utils;
pub mod validity;

#[cfg(test)]
mod test_data;

pub use batch::{par_verify, par_verify_each};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::SignerConfig;
pub use error::{Error, Result, VerificationError};
pub use key::SecretKey;
pub use signer::UrlSigner;
pub use validity::Validity;
