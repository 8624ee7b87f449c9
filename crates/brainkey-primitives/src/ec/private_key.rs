//! secp256k1 private key with Bitcoin-specific functionality.
//!
//! Wraps a k256 signing key and adds range-checked construction from raw
//! bytes, hex, WIF and passphrase digests, plus WIF export.

use k256::ecdsa::SigningKey;
use k256::elliptic_curve::ops::Reduce;
use k256::{FieldBytes, NonZeroScalar, Scalar, U256};
use zeroize::Zeroizing;

use crate::base58;
use crate::ec::public_key::PublicKey;
use crate::PrimitivesError;

/// Length of a serialized private key in bytes.
pub const PRIVATE_KEY_BYTES_LEN: usize = 32;

/// Compression flag byte appended to WIF for compressed public keys.
const COMPRESS_MAGIC: u8 = 0x01;

/// A secp256k1 private key scalar in `[1, n - 1]`.
///
/// The inner `SigningKey` zeroizes its scalar on drop.
#[derive(Clone)]
pub struct PrivateKey {
    inner: SigningKey,
}

/// The framing of a WIF string: its prefix byte and compression flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WifShape {
    /// The network prefix byte.
    pub prefix: u8,
    /// Whether the payload ends with the compressed-public-key flag.
    pub compressed: bool,
}

/// The contents of a decoded WIF string.
#[derive(Clone, Debug)]
pub struct DecodedWif {
    /// The private key scalar.
    pub key: PrivateKey,
    /// The network prefix byte (0x80 mainnet, 0xef testnet).
    pub prefix: u8,
    /// Whether the WIF carried the compressed-public-key flag.
    pub compressed: bool,
}

impl PrivateKey {
    /// Create a private key from a raw 32-byte big-endian scalar.
    ///
    /// # Returns
    /// `Ok(PrivateKey)` if the scalar lies in `[1, n - 1]`. A zero scalar or
    /// one at or above the curve order fails with `ScalarOutOfRange`; it is
    /// never reduced.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        if bytes.len() != PRIVATE_KEY_BYTES_LEN {
            return Err(PrimitivesError::InvalidKeyLength {
                expected: PRIVATE_KEY_BYTES_LEN,
                got: bytes.len(),
            });
        }
        let repr = FieldBytes::clone_from_slice(bytes);
        let scalar = Option::<NonZeroScalar>::from(NonZeroScalar::from_repr(repr))
            .ok_or(PrimitivesError::ScalarOutOfRange)?;
        Ok(PrivateKey {
            inner: SigningKey::from(scalar),
        })
    }

    /// Create a private key from a 64-character hexadecimal string.
    pub fn from_hex(hex_str: &str) -> Result<Self, PrimitivesError> {
        if hex_str.is_empty() {
            return Err(PrimitivesError::InvalidHex(
                "private key hex is empty".to_string(),
            ));
        }
        let bytes = hex::decode(hex_str)?;
        Self::from_bytes(&bytes)
    }

    /// Create a private key from a 32-byte digest reduced modulo the curve order.
    ///
    /// This is the brain wallet construction: the digest is a SHA-256 of the
    /// passphrase. A digest congruent to zero fails with `ZeroScalar`.
    pub fn from_digest_reduced(digest: &[u8; 32]) -> Result<Self, PrimitivesError> {
        let scalar = <Scalar as Reduce<U256>>::reduce(U256::from_be_slice(digest));
        let scalar = Option::<NonZeroScalar>::from(NonZeroScalar::new(scalar))
            .ok_or(PrimitivesError::ZeroScalar)?;
        Ok(PrivateKey {
            inner: SigningKey::from(scalar),
        })
    }

    /// Decode a WIF (Wallet Import Format) string.
    ///
    /// Verifies the Base58Check checksum and the optional compression flag.
    /// The prefix byte is returned as-is; callers decide which networks
    /// they accept.
    pub fn decode_wif(wif: &str) -> Result<DecodedWif, PrimitivesError> {
        let (payload, shape) = decode_wif_payload(wif)?;
        let key = Self::from_bytes(&payload[1..1 + PRIVATE_KEY_BYTES_LEN])?;
        Ok(DecodedWif {
            key,
            prefix: shape.prefix,
            compressed: shape.compressed,
        })
    }

    /// Encode the private key as a WIF string.
    ///
    /// # Arguments
    /// * `prefix` - The network prefix byte (0x80 for mainnet, 0xef for testnet).
    /// * `compressed` - Whether to append the compressed-public-key flag.
    pub fn to_wif(&self, prefix: u8, compressed: bool) -> String {
        let mut payload = Vec::with_capacity(1 + PRIVATE_KEY_BYTES_LEN + 1);
        payload.push(prefix);
        payload.extend_from_slice(&self.to_bytes());
        if compressed {
            payload.push(COMPRESS_MAGIC);
        }
        let wif = base58::check_encode(&payload);
        zeroize::Zeroize::zeroize(&mut payload);
        wif
    }

    /// Serialize the private key as a 32-byte big-endian array.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.inner.to_bytes().into()
    }

    /// Serialize the private key as a lowercase hexadecimal string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Derive the corresponding public key, `scalar * G`.
    pub fn pub_key(&self) -> PublicKey {
        PublicKey::from_k256_verifying_key(self.inner.verifying_key())
    }
}

/// Check the Base58Check framing of a WIF string without reading the key.
///
/// Accepts a 33-byte payload (uncompressed) or a 34-byte payload ending in
/// `0x01` (compressed). The 32 key bytes are not range-checked.
pub fn wif_shape(wif: &str) -> Result<WifShape, PrimitivesError> {
    decode_wif_payload(wif).map(|(_, shape)| shape)
}

fn decode_wif_payload(wif: &str) -> Result<(Zeroizing<Vec<u8>>, WifShape), PrimitivesError> {
    let payload = Zeroizing::new(base58::check_decode(wif).map_err(|e| match e {
        PrimitivesError::ChecksumMismatch => e,
        other => PrimitivesError::InvalidWif(other.to_string()),
    })?);

    // 1 byte prefix + 32 bytes key (+ 1 byte compress flag)
    let compressed = match payload.len() {
        34 => {
            if payload[33] != COMPRESS_MAGIC {
                return Err(PrimitivesError::InvalidWif(
                    "invalid compression flag".to_string(),
                ));
            }
            true
        }
        33 => false,
        len => {
            return Err(PrimitivesError::InvalidWif(format!(
                "invalid payload length {len}"
            )));
        }
    };

    let prefix = payload[0];
    Ok((payload, WifShape { prefix, compressed }))
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes() == other.to_bytes()
    }
}

impl Eq for PrivateKey {}

impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PrivateKey([REDACTED])")
    }
}
