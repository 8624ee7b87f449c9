/// Unified error type for all primitives operations.
///
/// Covers errors from encoding, decoding and secp256k1 key construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrimitivesError {
    #[error("private key scalar is zero or not below the curve order")]
    ScalarOutOfRange,

    #[error("passphrase digest reduces to the zero scalar")]
    ZeroScalar,

    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("invalid WIF format: {0}")]
    InvalidWif(String),

    #[error("checksum mismatch")]
    ChecksumMismatch,

    #[error("invalid key length: expected {expected}, got {got}")]
    InvalidKeyLength { expected: usize, got: usize },

    #[error("invalid hex: {0}")]
    InvalidHex(String),

    #[error("invalid base58: {0}")]
    InvalidBase58(String),
}

impl From<hex::FromHexError> for PrimitivesError {
    fn from(e: hex::FromHexError) -> Self {
        PrimitivesError::InvalidHex(e.to_string())
    }
}
