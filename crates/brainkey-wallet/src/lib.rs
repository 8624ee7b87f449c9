//! Brainkey - Keypair derivation from passphrases and encoded private keys.
//!
//! The pipeline is secret normalization, then key derivation, behind the
//! [`Wallet`] facade:
//! - [`secret`] validates raw text into a passphrase or an encoded key
//! - [`key_deriver`] turns a secret into a scalar, public key and address
//! - [`wallet`] composes both and reports failures to a [`DiagnosticSink`]
//!
//! Brain wallet passphrases are low-entropy by nature and are routinely
//! brute-forced; this crate derives from them but does not judge them.

mod error;
pub use error::{ConfigError, DerivationError, WalletError};

pub mod config;
pub mod diagnostics;
pub mod key_deriver;
pub mod secret;
pub mod types;
pub mod wallet;

pub use config::{PrivateKeyFormat, PublicKeyFormat, SecretLogging, WalletConfig};
pub use diagnostics::{DiagnosticSink, NoopSink, TracingSink};
pub use key_deriver::KeyDeriver;
pub use secret::{normalize, KeyEncoding, Secret};
pub use types::KeypairResult;
pub use wallet::{create_wallet, Wallet};
