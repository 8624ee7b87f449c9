//! Key derivation engine.
//!
//! KeyDeriver turns a [`Secret`] into a private key scalar, multiplies it by
//! the secp256k1 generator, and encodes the P2PKH address of the configured
//! public key serialization.

use brainkey_address::{Address, Network};
use brainkey_primitives::ec::PrivateKey;
use brainkey_primitives::hash::sha256;
use zeroize::{Zeroize, Zeroizing};

use crate::config::{PrivateKeyFormat, PublicKeyFormat, WalletConfig};
use crate::secret::{is_hex_key, KeyEncoding, Secret};
use crate::types::KeypairResult;
use crate::DerivationError;

/// Derives keypairs under a fixed network and serialization policy.
///
/// Holds no mutable state; one deriver may be shared across threads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyDeriver {
    network: Network,
    public_key_format: PublicKeyFormat,
    private_key_format: PrivateKeyFormat,
}

impl KeyDeriver {
    /// Create a deriver from the network and format policies of `config`.
    pub fn new(config: &WalletConfig) -> Self {
        KeyDeriver {
            network: config.network,
            public_key_format: config.public_key_format,
            private_key_format: config.private_key_format,
        }
    }

    /// The network addresses and WIF prefixes are checked against.
    pub fn network(&self) -> Network {
        self.network
    }

    /// Derive the full keypair for a secret.
    ///
    /// The result is built only once every step has succeeded.
    pub fn derive(&self, secret: &Secret) -> Result<KeypairResult, DerivationError> {
        let private_key = self.derive_private_key(secret)?;
        let public_key = private_key.pub_key();
        let compressed = self.public_key_format.is_compressed();
        let address = Address::from_public_key(&public_key, compressed, self.network);
        let private_key_text = Zeroizing::new(match self.private_key_format {
            PrivateKeyFormat::Hex => private_key.to_hex(),
            PrivateKeyFormat::Wif => private_key.to_wif(self.network.wif_prefix(), compressed),
        });

        Ok(KeypairResult::new(
            secret.text(),
            private_key,
            public_key,
            address,
            compressed,
            private_key_text,
        ))
    }

    /// Produce the private key scalar for a secret.
    ///
    /// Passphrases hash to `SHA256(p) mod n`. Encoded keys are decoded and
    /// must already lie in `[1, n - 1]`.
    pub fn derive_private_key(&self, secret: &Secret) -> Result<PrivateKey, DerivationError> {
        match secret {
            Secret::Passphrase(passphrase) => {
                let mut digest = sha256(passphrase.as_bytes());
                let key = PrivateKey::from_digest_reduced(&digest);
                digest.zeroize();
                Ok(key?)
            }
            Secret::EncodedKey {
                text,
                encoding: KeyEncoding::Hex,
            } => {
                if !is_hex_key(text) {
                    return Err(DerivationError::MalformedKeyEncoding(
                        "expected 64 hex characters".to_string(),
                    ));
                }
                let mut bytes = Zeroizing::new([0u8; 32]);
                hex::decode_to_slice(text.as_bytes(), bytes.as_mut_slice())
                    .map_err(|e| DerivationError::MalformedKeyEncoding(e.to_string()))?;
                Ok(PrivateKey::from_bytes(bytes.as_slice())?)
            }
            Secret::EncodedKey { text, encoding } => {
                let decoded = PrivateKey::decode_wif(text)?;
                if decoded.compressed != matches!(encoding, KeyEncoding::WifCompressed) {
                    return Err(DerivationError::MalformedKeyEncoding(format!(
                        "WIF compression flag does not match declared encoding {encoding:?}"
                    )));
                }
                if decoded.prefix != self.network.wif_prefix() {
                    return Err(DerivationError::MalformedKeyEncoding(format!(
                        "WIF version prefix {:#04x} is not valid on {}",
                        decoded.prefix, self.network
                    )));
                }
                Ok(decoded.key)
            }
        }
    }
}

impl Default for KeyDeriver {
    fn default() -> Self {
        Self::new(&WalletConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use brainkey_primitives::base58;

    use super::*;
    use crate::secret::normalize;

    const CURVE_ORDER_HEX: &str =
        "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141";

    const WIF_KEY_HEX: &str = "0c28fca386c7a227600b2fe50b7cae11ec86d3bf1fbe471be89827e19d72aa1d";

    fn derive(raw: &str, is_private_key: bool) -> Result<KeypairResult, DerivationError> {
        KeyDeriver::default().derive(&normalize(raw, is_private_key)?)
    }

    #[test]
    fn test_correct_horse_battery_staple() {
        let keypair = derive("correct horse battery staple", false).unwrap();
        assert_eq!(
            keypair.private_key(),
            "c4bbcb1fbec99d65bf59d85c8cb62ee2db963f0fe106f483d9afa73bd4e39a8a"
        );
        assert_eq!(
            keypair.public_key(),
            "0478d430274f8c5ec1321338151e9f27f4c676a008bdf8638d07c0b6be9ab35c71a1518063243acd4dfe96b66e3f2ec8013c8e072cd09b3834a19f81f659cc3455"
        );
        assert_eq!(keypair.address(), "1JwSSubhmg6iPtRjtyqhUYYH7bZg3Lfy1T");
    }

    #[test]
    fn test_empty_passphrase() {
        let keypair = derive("", false).unwrap();
        assert_eq!(
            keypair.private_key(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(keypair.address(), "1HZwkjkeaoZfTSaJxDw6aKkxp45agDiEzN");
    }

    #[test]
    fn test_wif_vector() {
        let keypair = derive("5HueCGU8rMjxEXxiPuD5BDku4MkFqeZyd4dZ1jvhTVqvbTLvyTJ", true).unwrap();
        assert_eq!(keypair.private_key(), WIF_KEY_HEX);
        assert_eq!(
            keypair.public_key(),
            "04d0de0aaeaefad02b8bdc8a01a1b8b11c696bd3d66a2c5f10780d95b7df42645cd85228a6fb29940e858e7e55842ae2bd115d1ed7cc0e82d934e929c97648cb0a"
        );
        assert_eq!(keypair.address(), "1GAehh7TsJAHuUAeKZcXf5CnwuGuGgyX2S");
    }

    #[test]
    fn test_compressed_wif_follows_fixed_policy() {
        // The WIF flag does not switch the address; the deriver's policy does.
        let keypair = derive("KwdMAjGmerYanjeui5SHS7JkmpZvVipYvB2LJGU1ZxJwYvP98617", true).unwrap();
        assert_eq!(keypair.address(), "1GAehh7TsJAHuUAeKZcXf5CnwuGuGgyX2S");
        assert!(!keypair.is_compressed());
    }

    #[test]
    fn test_compressed_policy() {
        let config = WalletConfig {
            public_key_format: PublicKeyFormat::Compressed,
            private_key_format: PrivateKeyFormat::Wif,
            ..WalletConfig::default()
        };
        let deriver = KeyDeriver::new(&config);
        let keypair = deriver
            .derive(&normalize(WIF_KEY_HEX, true).unwrap())
            .unwrap();
        assert_eq!(
            keypair.public_key(),
            "02d0de0aaeaefad02b8bdc8a01a1b8b11c696bd3d66a2c5f10780d95b7df42645c"
        );
        assert_eq!(keypair.address(), "1LoVGDgRs9hTfTNJNuXKSpywcbdvwRXpmK");
        assert_eq!(
            keypair.private_key(),
            "KwdMAjGmerYanjeui5SHS7JkmpZvVipYvB2LJGU1ZxJwYvP98617"
        );
        assert_eq!(keypair.private_key_hex().as_str(), WIF_KEY_HEX);
    }

    #[test]
    fn test_testnet_policy() {
        let config = WalletConfig {
            network: Network::Testnet,
            ..WalletConfig::default()
        };
        let deriver = KeyDeriver::new(&config);
        let keypair = deriver
            .derive(&normalize("91gGn1HgSap6CbU12F6z3pJri26xzp7Ay1VW6NHCoEayNXwRpu2", true).unwrap())
            .unwrap();
        assert_eq!(keypair.address(), "mvgbzkCSgKbYgaeG38auUzR7otscEGi8U7");
        assert_eq!(keypair.network(), Network::Testnet);
        assert_eq!(
            keypair.private_key_wif().as_str(),
            "91gGn1HgSap6CbU12F6z3pJri26xzp7Ay1VW6NHCoEayNXwRpu2"
        );
    }

    #[test]
    fn test_wif_network_mismatch() {
        let err = derive("91gGn1HgSap6CbU12F6z3pJri26xzp7Ay1VW6NHCoEayNXwRpu2", true).unwrap_err();
        assert!(matches!(err, DerivationError::MalformedKeyEncoding(_)));
    }

    #[test]
    fn test_declared_encoding_must_match() {
        let deriver = KeyDeriver::default();
        let wrong_flag = Secret::encoded_key(
            "KwdMAjGmerYanjeui5SHS7JkmpZvVipYvB2LJGU1ZxJwYvP98617",
            KeyEncoding::WifUncompressed,
        );
        assert!(matches!(
            deriver.derive(&wrong_flag),
            Err(DerivationError::MalformedKeyEncoding(_))
        ));

        let not_hex = Secret::encoded_key(
            "5HueCGU8rMjxEXxiPuD5BDku4MkFqeZyd4dZ1jvhTVqvbTLvyTJ",
            KeyEncoding::Hex,
        );
        assert!(matches!(
            deriver.derive(&not_hex),
            Err(DerivationError::MalformedKeyEncoding(_))
        ));

        let not_wif = Secret::encoded_key(WIF_KEY_HEX, KeyEncoding::WifCompressed);
        assert!(matches!(
            deriver.derive(&not_wif),
            Err(DerivationError::MalformedKeyEncoding(_))
        ));
    }

    #[test]
    fn test_zero_and_curve_order_are_out_of_range() {
        let zero = "0".repeat(64);
        assert_eq!(
            derive(&zero, true).unwrap_err(),
            DerivationError::InvalidPrivateKeyRange
        );
        assert_eq!(
            derive(CURVE_ORDER_HEX, true).unwrap_err(),
            DerivationError::InvalidPrivateKeyRange
        );

        let mut payload = vec![0x80];
        payload.extend_from_slice(&hex::decode(CURVE_ORDER_HEX).unwrap());
        let wif = base58::check_encode(&payload);
        assert_eq!(
            derive(&wif, true).unwrap_err(),
            DerivationError::InvalidPrivateKeyRange
        );
    }

    #[test]
    fn test_hex_and_direct_scalar_agree() {
        let from_hex = derive(WIF_KEY_HEX, true).unwrap();
        let direct = PrivateKey::from_hex(WIF_KEY_HEX).unwrap().pub_key();
        assert_eq!(from_hex.public_key_point(), &direct);
        assert_eq!(
            derive(&WIF_KEY_HEX.to_uppercase(), true).unwrap().address(),
            from_hex.address()
        );
    }

    #[test]
    fn test_passphrase_is_not_a_key() {
        // The same text hashes as a passphrase but decodes as a key.
        let as_passphrase = derive(WIF_KEY_HEX, false).unwrap();
        let as_key = derive(WIF_KEY_HEX, true).unwrap();
        assert_ne!(as_passphrase.private_key(), as_key.private_key());
    }
}
