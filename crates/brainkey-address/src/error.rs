/// Error types for address operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    /// Invalid address string.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// Invalid address length after Base58 decoding.
    #[error("invalid address length for '{0}'")]
    InvalidAddressLength(String),

    /// Address version byte is not a known P2PKH version.
    #[error("address not supported {0}")]
    UnsupportedAddress(String),

    /// Checksum failed.
    #[error("checksum failed")]
    EncodingChecksumFailed,
}
