//! Failure diagnostics.
//!
//! The wallet reports through a [`DiagnosticSink`] instead of logging
//! directly, so a deployment can redact, reroute or silence records that
//! may contain secret material.

use tracing::{debug, warn};

use crate::config::SecretLogging;
use crate::DerivationError;

/// Receives one record per `create_wallet` outcome.
pub trait DiagnosticSink: Send + Sync {
    /// Called once when normalization or derivation fails.
    ///
    /// `secret_text` is the literal input and may be a passphrase or a
    /// private key.
    fn derivation_failed(&self, secret_text: &str, error: &DerivationError);

    /// Called once when a keypair was derived.
    fn derivation_succeeded(&self, _address: &str) {}
}

/// Emits diagnostics as `tracing` events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TracingSink {
    secret_logging: SecretLogging,
}

impl TracingSink {
    /// Create a sink rendering secrets under `secret_logging`.
    pub fn new(secret_logging: SecretLogging) -> Self {
        TracingSink { secret_logging }
    }
}

impl DiagnosticSink for TracingSink {
    fn derivation_failed(&self, secret_text: &str, error: &DerivationError) {
        let secret = render_secret(self.secret_logging, secret_text);
        warn!(%secret, %error, "failed to generate keypair");
    }

    fn derivation_succeeded(&self, address: &str) {
        debug!(%address, "derived keypair");
    }
}

/// Discards all diagnostics.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn derivation_failed(&self, _secret_text: &str, _error: &DerivationError) {}
}

/// Render the secret for a log record under the given policy.
pub fn render_secret(policy: SecretLogging, secret_text: &str) -> String {
    match policy {
        SecretLogging::Verbatim => secret_text.to_string(),
        SecretLogging::Redacted => format!("<redacted: {} chars>", secret_text.chars().count()),
        SecretLogging::Omitted => "<omitted>".to_string(),
    }
}
