/// P2PKH address handling.
///
/// An address is `version || RIPEMD160(SHA256(pubkey))` followed by a 4-byte
/// SHA-256d checksum, Base58-encoded.

use std::fmt;
use std::str::FromStr;

use brainkey_primitives::base58;
use brainkey_primitives::ec::PublicKey;

use crate::{AddressError, Network};

/// Decoded payload length: version byte + 20-byte hash.
const PAYLOAD_LEN: usize = 21;

/// A Bitcoin P2PKH address.
///
/// Contains the 20-byte public key hash and the network it belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Address {
    /// The human-readable Base58Check address string.
    pub address_string: String,
    /// The 20-byte RIPEMD-160(SHA-256(pubkey)) hash.
    pub public_key_hash: [u8; 20],
    /// The network this address belongs to.
    pub network: Network,
}

impl Address {
    /// Parse a Base58Check-encoded address string.
    ///
    /// Decodes the string, validates the checksum, and detects the network
    /// from the version byte (0x00 = mainnet, 0x6f = testnet).
    pub fn from_string(addr: &str) -> Result<Self, AddressError> {
        let decoded = base58::decode(addr)
            .map_err(|_| AddressError::InvalidAddress(format!("bad char for '{}'", addr)))?;

        if decoded.len() != PAYLOAD_LEN + base58::CHECKSUM_LEN {
            return Err(AddressError::InvalidAddressLength(addr.to_string()));
        }

        let (payload, checksum) = decoded.split_at(PAYLOAD_LEN);
        if checksum != base58::checksum(payload) {
            return Err(AddressError::EncodingChecksumFailed);
        }

        let network = Network::from_p2pkh_version(payload[0])
            .ok_or_else(|| AddressError::UnsupportedAddress(addr.to_string()))?;

        let mut pkh = [0u8; 20];
        pkh.copy_from_slice(&payload[1..]);

        Ok(Address {
            address_string: addr.to_string(),
            public_key_hash: pkh,
            network,
        })
    }

    /// Create an address from a 20-byte public key hash.
    pub fn from_public_key_hash(hash: &[u8; 20], network: Network) -> Self {
        let mut payload = Vec::with_capacity(PAYLOAD_LEN);
        payload.push(network.p2pkh_version());
        payload.extend_from_slice(hash);

        Address {
            address_string: base58::check_encode(&payload),
            public_key_hash: *hash,
            network,
        }
    }

    /// Create an address from a public key in the requested serialization.
    ///
    /// The compressed and uncompressed forms of one point hash to
    /// different addresses.
    pub fn from_public_key(pub_key: &PublicKey, compressed: bool, network: Network) -> Self {
        Self::from_public_key_hash(&pub_key.hash160(compressed), network)
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl fmt::Display for Address {
    /// Display the address as its Base58Check string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address_string)
    }
}
