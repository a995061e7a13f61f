//! The secret that URL signatures are keyed with.
use std::fmt;

use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD, URL_SAFE, URL_SAFE_NO_PAD};
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use snafu::{ensure, ResultExt};
use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::error::{EmptyKey, InvalidKeyEncoding, MissingSecret, Result};

/// Keys shorter than this many bytes are accepted but warned about.
pub const RECOMMENDED_KEY_LEN: usize = 32;

/// Secret key material. Wiped from memory on drop and never printed.
#[derive(Clone)]
pub struct SecretKey(Zeroizing<Vec<u8>>);

impl SecretKey {
    pub fn from_bytes<B: Into<Vec<u8>>>(bytes: B) -> Result<SecretKey> {
        let bytes = Zeroizing::new(bytes.into());
        ensure!(!bytes.is_empty(), EmptyKey);
        if bytes.len() < RECOMMENDED_KEY_LEN {
            warn!(
                len = bytes.len(),
                recommended = RECOMMENDED_KEY_LEN,
                "URL signing key is shorter than recommended"
            );
        }
        Ok(SecretKey(bytes))
    }

    /// Decode a base64 key. Both the standard and the url-safe alphabet are
    /// accepted, with or without padding. Surrounding whitespace is ignored.
    pub fn from_base64(encoded: &str) -> Result<SecretKey> {
        let encoded = encoded.trim();
        let decoded = STANDARD
            .decode(encoded)
            .or_else(|_| URL_SAFE.decode(encoded))
            .or_else(|_| STANDARD_NO_PAD.decode(encoded))
            .or_else(|_| URL_SAFE_NO_PAD.decode(encoded))
            .context(InvalidKeyEncoding)?;
        SecretKey::from_bytes(decoded)
    }

    /// Read a base64 key from the environment variable `name`.
    pub fn from_env(name: &str) -> Result<SecretKey> {
        let encoded = Zeroizing::new(std::env::var(name).context(MissingSecret { name })?);
        let key = SecretKey::from_base64(&encoded)?;
        debug!(var = name, len = key.len(), "Loaded URL signing key");
        Ok(key)
    }

    /// A fresh 256 bit key from the operating system's RNG.
    pub fn generate() -> SecretKey {
        let mut bytes = Zeroizing::new(vec![0u8; RECOMMENDED_KEY_LEN]);
        OsRng.fill_bytes(&mut bytes);
        SecretKey(bytes)
    }

    /// Encode the key as standard padded base64, the format `from_base64`
    /// and `from_env` read.
    pub fn to_base64(&self) -> Zeroizing<String> {
        Zeroizing::new(STANDARD.encode(self.as_bytes()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_recommended_length(&self) -> bool {
        self.len() >= RECOMMENDED_KEY_LEN
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey([REDACTED; {} bytes])", self.len())
    }
}
