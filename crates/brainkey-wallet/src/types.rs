//! Derivation output.

use std::fmt;

use brainkey_address::{Address, Network};
use brainkey_primitives::ec::{PrivateKey, PublicKey};
use zeroize::Zeroizing;

/// The immutable result of one derivation.
///
/// Holds the address, public key and private key in their external string
/// forms next to the typed values, plus the secret that produced them.
/// Sensitive strings are zeroized when the result is dropped.
#[derive(Clone)]
pub struct KeypairResult {
    secret: Zeroizing<String>,
    address: Address,
    public_key: PublicKey,
    public_key_hex: String,
    private_key: PrivateKey,
    private_key_text: Zeroizing<String>,
    compressed: bool,
}

impl KeypairResult {
    pub(crate) fn new(
        secret: &str,
        private_key: PrivateKey,
        public_key: PublicKey,
        address: Address,
        compressed: bool,
        private_key_text: Zeroizing<String>,
    ) -> Self {
        KeypairResult {
            secret: Zeroizing::new(secret.to_string()),
            public_key_hex: public_key.to_hex(compressed),
            address,
            public_key,
            private_key,
            private_key_text,
            compressed,
        }
    }

    /// Base58Check P2PKH address.
    pub fn address(&self) -> &str {
        &self.address.address_string
    }

    /// Hex-encoded public key in the configured serialization.
    pub fn public_key(&self) -> &str {
        &self.public_key_hex
    }

    /// Private key in the configured rendering (hex or WIF). Sensitive.
    pub fn private_key(&self) -> &str {
        &self.private_key_text
    }

    /// The secret text this keypair was derived from. Sensitive.
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// The typed address.
    pub fn typed_address(&self) -> &Address {
        &self.address
    }

    /// The public key point.
    pub fn public_key_point(&self) -> &PublicKey {
        &self.public_key
    }

    /// Hash160 of the serialized public key, the address payload.
    pub fn hash160(&self) -> [u8; 20] {
        self.address.public_key_hash
    }

    /// The network the address was encoded for.
    pub fn network(&self) -> Network {
        self.address.network
    }

    /// Whether the public key and address use the compressed serialization.
    pub fn is_compressed(&self) -> bool {
        self.compressed
    }

    /// Private key as 64 lowercase hex characters, whatever the configured rendering.
    pub fn private_key_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(self.private_key.to_hex())
    }

    /// Private key as WIF for this result's network and compression.
    pub fn private_key_wif(&self) -> Zeroizing<String> {
        Zeroizing::new(
            self.private_key
                .to_wif(self.network().wif_prefix(), self.compressed),
        )
    }
}

impl fmt::Debug for KeypairResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeypairResult")
            .field("address", &self.address.address_string)
            .field("public_key", &self.public_key_hex)
            .field("private_key", &"[REDACTED]")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}
