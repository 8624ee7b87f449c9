/// Brainkey - Cryptographic primitives, hashing, and encoding.
///
/// This crate provides the building blocks for deterministic key derivation:
/// - Hash functions (SHA-256, SHA-256d, RIPEMD-160, Hash160)
/// - Base58 and Base58Check encoding/decoding
/// - secp256k1 private and public keys (WIF, hex, passphrase digests)

pub mod hash;
pub mod base58;
pub mod ec;

mod error;
pub use error::PrimitivesError;
