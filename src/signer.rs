//! Issuing and checking signed, optionally expiring URLs.
use std::fmt;
use std::sync::Arc;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Duration, TimeZone, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use snafu::{ensure, OptionExt};

use crate::clock::{Clock, SystemClock};
use crate::config::SignerConfig;
use crate::error::{
    Expired, InvalidKeyLength, ReservedParameterCollision, Result, Unverified, VerificationError,
};
use crate::key::SecretKey;
use crate::utils;
use crate::validity::Validity;

type HmacSha256 = Hmac<Sha256>;

/// Signs URLs with HMAC-SHA256 and verifies them again.
///
/// A signed URL is the original URL with `_expiration=<unix seconds>` (only
/// when a validity was asked for) and `_hash=<unpadded base64url MAC>`
/// appended to its query, ahead of any fragment. The MAC covers the whole
/// string except the `_hash` parameter itself.
///
/// Signing and verifying are pure: no state is kept between calls, so a
/// single signer can be shared across threads.
///
/// # Example
///```
///use chrono::Duration;
///use signed_url::{SecretKey, UrlSigner, VerificationError};
///
///let signer = UrlSigner::new(SecretKey::from_bytes(vec![42u8; 32]).unwrap()).unwrap();
///let url = signer
///    .sign_for("https://example.com/reset?id=5", Duration::hours(1))
///    .unwrap();
///assert!(signer.verify(&url).is_ok());
///
///let forged = url.replace("id=5", "id=6");
///assert_eq!(signer.verify(&forged), Err(VerificationError::Unverified));
///```
pub struct UrlSigner {
    mac: HmacSha256,
    hash_parameter: String,
    expiration_parameter: String,
    clock: Arc<dyn Clock>,
}

impl UrlSigner {
    /// A signer using `_hash` and `_expiration` and the system clock.
    pub fn new(key: SecretKey) -> Result<UrlSigner> {
        UrlSigner::with_config(key, &SignerConfig::default())
    }

    pub fn with_config(key: SecretKey, config: &SignerConfig) -> Result<UrlSigner> {
        config.validate()?;
        // HMAC takes keys of any length and `SecretKey` is never empty, so
        // this cannot fail today. Kept so a change of MAC does not need a
        // panic here.
        let mac = HmacSha256::new_from_slice(key.as_bytes())
            .ok()
            .context(InvalidKeyLength)?;
        Ok(UrlSigner {
            mac,
            hash_parameter: config.hash_parameter.clone(),
            expiration_parameter: config.expiration_parameter.clone(),
            clock: Arc::new(SystemClock),
        })
    }

    /// Replace the clock used to compute and check expirations.
    pub fn with_clock<C: Clock + 'static>(mut self, clock: C) -> UrlSigner {
        self.clock = Arc::new(clock);
        self
    }

    pub fn hash_parameter(&self) -> &str {
        &self.hash_parameter
    }

    pub fn expiration_parameter(&self) -> &str {
        &self.expiration_parameter
    }

    /// Sign `content`, optionally limiting how long the result stays valid.
    ///
    /// `content` is treated as an opaque string and may be any URL, absolute
    /// or not. It must not already use either reserved parameter name.
    pub fn sign(&self, content: &str, validity: Option<Validity>) -> Result<String> {
        let parts = utils::split_url(content);
        for reserved in [&self.hash_parameter, &self.expiration_parameter].iter() {
            ensure!(
                !parts.has_param(reserved),
                ReservedParameterCollision {
                    parameter: reserved.as_str(),
                }
            );
        }

        let unsigned = match validity {
            Some(validity) => {
                let expires_at = validity.expires_at(self.clock.now());
                utils::append_param(
                    content,
                    &self.expiration_parameter,
                    &expires_at.timestamp().to_string(),
                )
            }
            None => content.to_owned(),
        };

        let hash = self.compute_hash(&utils::split_url(&unsigned).canonical());
        Ok(utils::append_param(&unsigned, &self.hash_parameter, &hash))
    }

    /// Sign `content` so that it expires `duration` from now.
    pub fn sign_for(&self, content: &str, duration: Duration) -> Result<String> {
        self.sign(content, Some(Validity::For(duration)))
    }

    /// Sign `content` so that it expires at `at`.
    pub fn sign_until(&self, content: &str, at: DateTime<Utc>) -> Result<String> {
        self.sign(content, Some(Validity::Until(at)))
    }

    /// Check that `signed` was produced by this signer, unaltered, and has not
    /// expired.
    ///
    /// The signature is always checked before the expiration, so a forged URL
    /// reports `Unverified` no matter what its `_expiration` says.
    ///
    /// A URL is expired once the clock reaches its `_expiration` second
    /// (`now >= expiry`). A URL signed for one second therefore fails exactly
    /// one second after signing, and one signed for an hour is still valid at
    /// +3599 but not at +3600.
    pub fn verify(&self, signed: &str) -> Result<(), VerificationError> {
        self.expiration(signed).map(|_| ())
    }

    /// Like `verify`, but collapses every failure into `false`.
    pub fn check(&self, signed: &str) -> bool {
        self.verify(signed).is_ok()
    }

    /// Verify `signed` and return its authenticated expiration instant, or
    /// `None` if it never expires.
    pub fn expiration(&self, signed: &str) -> Result<Option<DateTime<Utc>>, VerificationError> {
        let expires_at = self.authenticate(signed)?;
        if let Some(expired_at) = expires_at {
            ensure!(
                self.clock.now().timestamp() < expired_at.timestamp(),
                Expired { expired_at }
            );
        }
        Ok(expires_at)
    }

    fn authenticate(&self, signed: &str) -> Result<Option<DateTime<Utc>>, VerificationError> {
        let mut parts = utils::split_url(signed);

        let hashes = parts.values(&self.hash_parameter);
        let hash = match hashes.as_slice() {
            [hash] => *hash,
            [] => return Err(VerificationError::Unsigned),
            _ => return Err(VerificationError::Unverified),
        };
        let expirations = parts.values(&self.expiration_parameter);

        parts.remove_param(&self.hash_parameter);
        let provided = URL_SAFE_NO_PAD.decode(hash).ok().context(Unverified)?;
        self.keyed(&parts.canonical())
            .verify_slice(&provided)
            .ok()
            .context(Unverified)?;

        // Only reachable with a genuine signature, so anything odd here means
        // the URL was signed by something other than `sign`.
        match expirations.as_slice() {
            [] => Ok(None),
            [raw] => {
                let seconds: i64 = raw.parse().ok().context(Unverified)?;
                let at = Utc.timestamp_opt(seconds, 0).single().context(Unverified)?;
                Ok(Some(at))
            }
            _ => Err(VerificationError::Unverified),
        }
    }

    fn keyed(&self, canonical: &str) -> HmacSha256 {
        let mut mac = self.mac.clone();
        mac.update(canonical.as_bytes());
        mac
    }

    fn compute_hash(&self, canonical: &str) -> String {
        URL_SAFE_NO_PAD.encode(self.keyed(canonical).finalize().into_bytes())
    }
}

impl fmt::Debug for UrlSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UrlSigner")
            .field("hash_parameter", &self.hash_parameter)
            .field("expiration_parameter", &self.expiration_parameter)
            .finish()
    }
}
