//! Names of the query parameters a signer reserves.
use serde::{Deserialize, Serialize};
use snafu::ensure;
use tracing::debug;

use crate::error::{InvalidParameterName, Result};

pub const DEFAULT_HASH_PARAMETER: &str = "_hash";
pub const DEFAULT_EXPIRATION_PARAMETER: &str = "_expiration";

pub const HASH_PARAMETER_VAR: &str = "URL_SIGNER_HASH_PARAMETER";
pub const EXPIRATION_PARAMETER_VAR: &str = "URL_SIGNER_EXPIRATION_PARAMETER";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignerConfig {
    pub hash_parameter: String,
    pub expiration_parameter: String,
}

impl Default for SignerConfig {
    fn default() -> Self {
        SignerConfig {
            hash_parameter: DEFAULT_HASH_PARAMETER.to_owned(),
            expiration_parameter: DEFAULT_EXPIRATION_PARAMETER.to_owned(),
        }
    }
}

impl SignerConfig {
    /// Defaults, overridden by `URL_SIGNER_HASH_PARAMETER` and
    /// `URL_SIGNER_EXPIRATION_PARAMETER` when set.
    pub fn from_env() -> Result<SignerConfig> {
        let mut config = SignerConfig::default();
        if let Ok(name) = std::env::var(HASH_PARAMETER_VAR) {
            config.hash_parameter = name;
        }
        if let Ok(name) = std::env::var(EXPIRATION_PARAMETER_VAR) {
            config.expiration_parameter = name;
        }
        config.validate()?;
        debug!(
            hash_parameter = %config.hash_parameter,
            expiration_parameter = %config.expiration_parameter,
            "Loaded URL signer config"
        );
        Ok(config)
    }

    /// Check that both names can sit in a query string unescaped and can be
    /// told apart.
    pub fn validate(&self) -> Result<()> {
        for name in [&self.hash_parameter, &self.expiration_parameter].iter() {
            ensure!(
                !name.is_empty(),
                InvalidParameterName {
                    name: name.as_str(),
                    reason: "must not be empty",
                }
            );
            ensure!(
                !name.contains(|c: char| c == '&' || c == '=' || c == '#' || c == '?'),
                InvalidParameterName {
                    name: name.as_str(),
                    reason: "must not contain '&', '=', '#' or '?'",
                }
            );
        }
        ensure!(
            self.hash_parameter != self.expiration_parameter,
            InvalidParameterName {
                name: self.expiration_parameter.as_str(),
                reason: "must differ from the hash parameter",
            }
        );
        Ok(())
    }
}
