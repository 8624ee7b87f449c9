//! Wallet facade.
//!
//! `Wallet` runs normalization and derivation as one call and reports
//! failures to its diagnostic sink before handing them back to the caller.

use std::fmt;
use std::sync::Arc;

use crate::config::WalletConfig;
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::error::WalletError;
use crate::key_deriver::KeyDeriver;
use crate::secret::{normalize, Secret};
use crate::types::KeypairResult;
use crate::DerivationError;

/// Stateless entry point for keypair derivation.
///
/// Cheap to clone and safe to share across threads; calls never affect
/// one another.
#[derive(Clone)]
pub struct Wallet {
    config: WalletConfig,
    deriver: KeyDeriver,
    sink: Arc<dyn DiagnosticSink>,
}

impl Wallet {
    /// Create a wallet logging through `tracing` under the config's secret policy.
    pub fn new(config: WalletConfig) -> Self {
        Self::with_sink(config, Arc::new(TracingSink::new(config.secret_logging)))
    }

    /// Create a wallet reporting to a custom sink.
    pub fn with_sink(config: WalletConfig, sink: Arc<dyn DiagnosticSink>) -> Self {
        Wallet {
            config,
            deriver: KeyDeriver::new(&config),
            sink,
        }
    }

    /// The configuration this wallet was built with.
    pub fn config(&self) -> &WalletConfig {
        &self.config
    }

    /// Derive a keypair from secret text.
    ///
    /// With `is_private_key == false` the text is a brain wallet passphrase;
    /// otherwise it must be a hex or WIF private key. On failure the sink
    /// sees the literal text once and the error is returned unchanged
    /// alongside that text. No partial result is ever returned.
    pub fn create_wallet(
        &self,
        secret_text: &str,
        is_private_key: bool,
    ) -> Result<KeypairResult, WalletError> {
        let outcome =
            normalize(secret_text, is_private_key).and_then(|secret| self.deriver.derive(&secret));
        self.report(secret_text, outcome)
    }

    /// Derive a keypair from a brain wallet passphrase.
    pub fn from_passphrase(&self, passphrase: &str) -> Result<KeypairResult, WalletError> {
        self.create_wallet(passphrase, false)
    }

    /// Derive a keypair from a hex or WIF private key.
    pub fn from_private_key(&self, encoded_key: &str) -> Result<KeypairResult, WalletError> {
        self.create_wallet(encoded_key, true)
    }

    /// Derive a keypair from an already-normalized or explicitly declared secret.
    pub fn derive(&self, secret: &Secret) -> Result<KeypairResult, WalletError> {
        let outcome = self.deriver.derive(secret);
        self.report(secret.text(), outcome)
    }

    fn report(
        &self,
        secret_text: &str,
        outcome: Result<KeypairResult, DerivationError>,
    ) -> Result<KeypairResult, WalletError> {
        match outcome {
            Ok(keypair) => {
                self.sink.derivation_succeeded(keypair.address());
                Ok(keypair)
            }
            Err(error) => {
                self.sink.derivation_failed(secret_text, &error);
                Err(WalletError::new(secret_text, error))
            }
        }
    }
}

impl Default for Wallet {
    fn default() -> Self {
        Self::new(WalletConfig::default())
    }
}

impl fmt::Debug for Wallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wallet").field("config", &self.config).finish_non_exhaustive()
    }
}

/// Derive a keypair with the default configuration.
///
/// Mainnet, uncompressed public key, hex private key, redacted diagnostics.
pub fn create_wallet(secret_text: &str, is_private_key: bool) -> Result<KeypairResult, WalletError> {
    Wallet::default().create_wallet(secret_text, is_private_key)
}
