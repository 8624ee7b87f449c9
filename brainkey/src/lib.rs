#![deny(missing_docs)]

//! Brainkey - deterministic keypair and address derivation.
//!
//! Re-exports all brainkey components for convenient single-crate usage.
//!
//! ```
//! let keypair = brainkey::create_wallet("correct horse battery staple", false)?;
//! assert_eq!(keypair.address(), "1JwSSubhmg6iPtRjtyqhUYYH7bZg3Lfy1T");
//!
//! let keypair = brainkey::create_wallet("5HueCGU8rMjxEXxiPuD5BDku4MkFqeZyd4dZ1jvhTVqvbTLvyTJ", true)?;
//! assert_eq!(keypair.address(), "1GAehh7TsJAHuUAeKZcXf5CnwuGuGgyX2S");
//! # Ok::<(), brainkey::WalletError>(())
//! ```

pub use brainkey_address as address;
pub use brainkey_primitives as primitives;
pub use brainkey_wallet as wallet;

pub use brainkey_wallet::{
    create_wallet, DerivationError, KeypairResult, Wallet, WalletConfig, WalletError,
};
