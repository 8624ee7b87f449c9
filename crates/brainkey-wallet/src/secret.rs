//! Secret normalization.
//!
//! Turns raw secret text into a typed [`Secret`]: either brain wallet
//! passphrase material or an encoded private key with a known encoding.
//!
//! Any string is accepted as a passphrase. A brain wallet is only as strong
//! as its passphrase, and human-chosen phrases fall quickly to dictionary
//! search; nothing here measures or enforces entropy.

use std::fmt;

use brainkey_address::Network;
use brainkey_primitives::ec::wif_shape;
use brainkey_primitives::PrimitivesError;
use zeroize::Zeroizing;

use crate::DerivationError;

/// Number of hex characters in a raw private key.
pub const HEX_KEY_LEN: usize = 64;

/// Supported encodings of a private key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEncoding {
    /// 64 hex characters, either case.
    Hex,
    /// Base58Check WIF with the compression flag.
    WifCompressed,
    /// Base58Check WIF without the compression flag.
    WifUncompressed,
}

/// A validated secret ready for key derivation.
///
/// The text is zeroized on drop and never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub enum Secret {
    /// Brain wallet passphrase, kept byte-for-byte.
    Passphrase(Zeroizing<String>),
    /// An encoded private key.
    EncodedKey {
        text: Zeroizing<String>,
        encoding: KeyEncoding,
    },
}

impl Secret {
    /// Wrap a passphrase.
    pub fn passphrase(text: impl Into<String>) -> Self {
        Secret::Passphrase(Zeroizing::new(text.into()))
    }

    /// Declare an encoded key explicitly, skipping detection.
    ///
    /// The declaration is checked during derivation; a key that does not
    /// match it fails with `MalformedKeyEncoding`.
    pub fn encoded_key(text: impl Into<String>, encoding: KeyEncoding) -> Self {
        Secret::EncodedKey {
            text: Zeroizing::new(text.into()),
            encoding,
        }
    }

    /// The secret text as supplied.
    pub fn text(&self) -> &str {
        match self {
            Secret::Passphrase(text) | Secret::EncodedKey { text, .. } => text,
        }
    }

    /// The key encoding, or `None` for a passphrase.
    pub fn encoding(&self) -> Option<KeyEncoding> {
        match self {
            Secret::Passphrase(_) => None,
            Secret::EncodedKey { encoding, .. } => Some(*encoding),
        }
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Secret::Passphrase(_) => f.write_str("Passphrase([REDACTED])"),
            Secret::EncodedKey { encoding, .. } => f
                .debug_struct("EncodedKey")
                .field("text", &"[REDACTED]")
                .field("encoding", encoding)
                .finish(),
        }
    }
}

/// Canonicalize raw secret text.
///
/// With `is_private_key == false` the text becomes a passphrase unchanged.
/// Otherwise its encoding is detected; see [`detect_encoding`].
pub fn normalize(raw: &str, is_private_key: bool) -> Result<Secret, DerivationError> {
    if !is_private_key {
        return Ok(Secret::passphrase(raw));
    }
    let encoding = detect_encoding(raw)?;
    Ok(Secret::encoded_key(raw, encoding))
}

/// Detect the encoding of a private key string.
///
/// Exactly 64 hex digits is [`KeyEncoding::Hex`]. Anything else must be a
/// Base58Check WIF with a known network prefix, a valid checksum and a
/// well-formed compression flag. Whitespace and `0x` prefixes are not
/// stripped.
pub fn detect_encoding(raw: &str) -> Result<KeyEncoding, DerivationError> {
    if is_hex_key(raw) {
        return Ok(KeyEncoding::Hex);
    }

    let shape = wif_shape(raw).map_err(|e| match e {
        PrimitivesError::ChecksumMismatch => {
            DerivationError::MalformedKeyEncoding("WIF checksum mismatch".to_string())
        }
        other => DerivationError::MalformedKeyEncoding(format!(
            "expected 64 hex characters or a WIF string: {other}"
        )),
    })?;

    if Network::from_wif_prefix(shape.prefix).is_none() {
        return Err(DerivationError::MalformedKeyEncoding(format!(
            "unknown WIF version prefix {:#04x}",
            shape.prefix
        )));
    }

    Ok(if shape.compressed {
        KeyEncoding::WifCompressed
    } else {
        KeyEncoding::WifUncompressed
    })
}

pub(crate) fn is_hex_key(raw: &str) -> bool {
    raw.len() == HEX_KEY_LEN && raw.bytes().all(|b| b.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use brainkey_primitives::base58;

    use super::*;

    const HEX_KEY: &str = "0c28fca386c7a227600b2fe50b7cae11ec86d3bf1fbe471be89827e19d72aa1d";
    const WIF_UNCOMPRESSED: &str = "5HueCGU8rMjxEXxiPuD5BDku4MkFqeZyd4dZ1jvhTVqvbTLvyTJ";
    const WIF_COMPRESSED: &str = "KwdMAjGmerYanjeui5SHS7JkmpZvVipYvB2LJGU1ZxJwYvP98617";

    fn assert_malformed(raw: &str) {
        assert!(
            matches!(
                normalize(raw, true),
                Err(DerivationError::MalformedKeyEncoding(_))
            ),
            "accepted {raw:?}"
        );
    }

    #[test]
    fn test_passphrase_is_kept_unchanged() {
        for raw in ["", "  padded  ", "correct horse battery staple", "ünïcødé 🔑"] {
            let secret = normalize(raw, false).unwrap();
            assert_eq!(secret, Secret::passphrase(raw));
            assert_eq!(secret.text(), raw);
            assert_eq!(secret.encoding(), None);
        }
    }

    #[test]
    fn test_passphrase_mode_ignores_key_shape() {
        let secret = normalize(HEX_KEY, false).unwrap();
        assert!(matches!(secret, Secret::Passphrase(_)));
    }

    #[test]
    fn test_detects_hex_either_case() {
        assert_eq!(detect_encoding(HEX_KEY).unwrap(), KeyEncoding::Hex);
        assert_eq!(
            detect_encoding(&HEX_KEY.to_uppercase()).unwrap(),
            KeyEncoding::Hex
        );
    }

    #[test]
    fn test_detects_wif_variants() {
        assert_eq!(
            detect_encoding(WIF_UNCOMPRESSED).unwrap(),
            KeyEncoding::WifUncompressed
        );
        assert_eq!(
            detect_encoding(WIF_COMPRESSED).unwrap(),
            KeyEncoding::WifCompressed
        );
        // testnet prefix
        assert_eq!(
            detect_encoding("91gGn1HgSap6CbU12F6z3pJri26xzp7Ay1VW6NHCoEayNXwRpu2").unwrap(),
            KeyEncoding::WifUncompressed
        );
    }

    #[test]
    fn test_rejects_malformed_hex() {
        // odd length
        assert_malformed(&HEX_KEY[..63]);
        assert_malformed(&format!("{HEX_KEY}a"));
        // non-hex character
        assert_malformed(&format!("{}g", &HEX_KEY[..63]));
        // prefixed or padded
        assert_malformed(&format!("0x{HEX_KEY}"));
        assert_malformed(&format!(" {HEX_KEY}"));
        assert_malformed("");
    }

    #[test]
    fn test_rejects_bad_wif_checksum() {
        let mut corrupted = WIF_UNCOMPRESSED.to_string();
        corrupted.pop();
        corrupted.push('K');
        assert_eq!(
            normalize(&corrupted, true).unwrap_err(),
            DerivationError::MalformedKeyEncoding("WIF checksum mismatch".to_string())
        );
    }

    #[test]
    fn test_rejects_unknown_wif_prefix() {
        let mut payload = vec![0x00];
        payload.extend_from_slice(&[7u8; 32]);
        assert_malformed(&base58::check_encode(&payload));
    }

    #[test]
    fn test_rejects_bad_compression_flag() {
        let mut payload = vec![0x80];
        payload.extend_from_slice(&[7u8; 32]);
        payload.push(0x02);
        assert_malformed(&base58::check_encode(&payload));
    }

    #[test]
    fn test_debug_is_redacted() {
        let secret = normalize(HEX_KEY, true).unwrap();
        let shown = format!("{secret:?}");
        assert!(!shown.contains(HEX_KEY));
        assert!(shown.contains("Hex"));
        assert!(!format!("{:?}", Secret::passphrase("hunter2")).contains("hunter2"));
    }
}
