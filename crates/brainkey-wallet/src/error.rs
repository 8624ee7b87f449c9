use std::fmt;

use brainkey_primitives::PrimitivesError;
use zeroize::Zeroizing;

/// Errors raised while normalizing a secret or deriving its keypair.
///
/// Every variant is a deterministic function of the input, so none of
/// them is worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DerivationError {
    /// The input claims to be a private key but is neither 64-character hex
    /// nor a valid WIF string.
    #[error("malformed key encoding: {0}")]
    MalformedKeyEncoding(String),

    /// The private key scalar is zero or not below the curve order.
    #[error("private key is zero or not below the secp256k1 curve order")]
    InvalidPrivateKeyRange,

    /// The passphrase hash reduced to the zero scalar.
    #[error("passphrase hash reduces to the zero scalar")]
    DegenerateKey,

    /// Failure inside the underlying cryptographic primitives.
    #[error("key derivation failed: {0}")]
    Crypto(#[source] PrimitivesError),
}

impl From<PrimitivesError> for DerivationError {
    fn from(e: PrimitivesError) -> Self {
        match e {
            PrimitivesError::ScalarOutOfRange => DerivationError::InvalidPrivateKeyRange,
            PrimitivesError::ZeroScalar => DerivationError::DegenerateKey,
            PrimitivesError::InvalidWif(_)
            | PrimitivesError::ChecksumMismatch
            | PrimitivesError::InvalidHex(_)
            | PrimitivesError::InvalidBase58(_)
            | PrimitivesError::InvalidKeyLength { .. } => {
                DerivationError::MalformedKeyEncoding(e.to_string())
            }
            PrimitivesError::InvalidPublicKey(_) => DerivationError::Crypto(e),
        }
    }
}

/// A failed `create_wallet` call.
///
/// Carries the secret text exactly as supplied (never the derived key) next
/// to the underlying [`DerivationError`]. The secret is zeroized on drop and
/// kept out of `Debug` and `Display` output.
#[derive(thiserror::Error)]
#[error("failed to generate keypair: {source}")]
pub struct WalletError {
    secret_text: Zeroizing<String>,
    source: DerivationError,
}

impl WalletError {
    pub(crate) fn new(secret_text: &str, source: DerivationError) -> Self {
        WalletError {
            secret_text: Zeroizing::new(secret_text.to_string()),
            source,
        }
    }

    /// The secret text supplied to the failed call. Sensitive.
    pub fn secret_text(&self) -> &str {
        &self.secret_text
    }

    /// The underlying derivation failure.
    pub fn kind(&self) -> &DerivationError {
        &self.source
    }
}

impl fmt::Debug for WalletError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletError")
            .field("secret_text", &"[REDACTED]")
            .field("source", &self.source)
            .finish()
    }
}

/// Errors raised while loading a [`crate::WalletConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid wallet config: {0}")]
    Parse(#[from] toml::de::Error),
}
