/// Elliptic curve cryptography on secp256k1.
///
/// Provides private keys (hex, WIF and passphrase-digest construction)
/// and public keys with compressed/uncompressed serialization.

pub mod private_key;
pub mod public_key;

pub use private_key::{wif_shape, DecodedWif, PrivateKey, WifShape};
pub use public_key::PublicKey;
