/// Brainkey - P2PKH address handling.
///
/// Network version bytes, address generation from public keys and
/// Base58Check address validation.

mod error;
pub use error::AddressError;

pub mod address;
pub mod network;

pub use address::Address;
pub use network::Network;
