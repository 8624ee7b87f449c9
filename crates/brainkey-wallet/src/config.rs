//! Per-deployment derivation and diagnostics policy.
//!
//! Every policy here is fixed for the lifetime of a [`crate::Wallet`]; none
//! of them is ever inferred from the input secret.

use brainkey_address::Network;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Which SEC1 serialization of the public key is reported and hashed
/// into the address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublicKeyFormat {
    /// 65-byte `04 || x || y`, as used by legacy brain wallets.
    #[default]
    Uncompressed,
    /// 33-byte `02/03 || x`.
    Compressed,
}

impl PublicKeyFormat {
    /// Whether this is the 33-byte compressed serialization.
    pub const fn is_compressed(self) -> bool {
        matches!(self, PublicKeyFormat::Compressed)
    }
}

/// How the derived private key is rendered in a [`crate::KeypairResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrivateKeyFormat {
    /// 64 lowercase hex characters.
    #[default]
    Hex,
    /// WIF with the configured network prefix; the compression flag follows
    /// [`PublicKeyFormat`].
    Wif,
}

/// How the secret text appears in failure diagnostics.
///
/// Logging a raw passphrase or private key exposes it to whoever reads the
/// logs, so the verbatim form must be opted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SecretLogging {
    /// Log the secret exactly as supplied.
    Verbatim,
    /// Log only the secret's length.
    #[default]
    Redacted,
    /// Leave the secret out of the record.
    Omitted,
}

/// The configuration values that dictate how keypairs are derived and
/// reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WalletConfig {
    /// Network selecting the address version byte and accepted WIF prefix.
    pub network: Network,

    /// Public key serialization used for output and address hashing.
    pub public_key_format: PublicKeyFormat,

    /// Private key rendering.
    pub private_key_format: PrivateKeyFormat,

    /// Secret exposure in failure diagnostics.
    pub secret_logging: SecretLogging,
}

impl WalletConfig {
    /// Parse a config from a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WalletConfig::default();
        assert_eq!(config.network, Network::Mainnet);
        assert_eq!(config.public_key_format, PublicKeyFormat::Uncompressed);
        assert_eq!(config.private_key_format, PrivateKeyFormat::Hex);
        assert_eq!(config.secret_logging, SecretLogging::Redacted);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(WalletConfig::from_toml_str("").unwrap(), WalletConfig::default());
    }

    #[test]
    fn test_full_toml() {
        let config = WalletConfig::from_toml_str(
            r#"
            network = "testnet"
            public_key_format = "compressed"
            private_key_format = "wif"
            secret_logging = "verbatim"
            "#,
        )
        .unwrap();
        assert_eq!(
            config,
            WalletConfig {
                network: Network::Testnet,
                public_key_format: PublicKeyFormat::Compressed,
                private_key_format: PrivateKeyFormat::Wif,
                secret_logging: SecretLogging::Verbatim,
            }
        );
    }

    #[test]
    fn test_rejects_unknown_values() {
        assert!(WalletConfig::from_toml_str(r#"network = "regtest""#).is_err());
        assert!(WalletConfig::from_toml_str(r#"compression = "auto""#).is_err());
    }
}
