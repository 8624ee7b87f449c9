//! Network selection and its version bytes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Mainnet P2PKH address version byte.
const MAINNET_P2PKH: u8 = 0x00;
/// Testnet P2PKH address version byte.
const TESTNET_P2PKH: u8 = 0x6f;
/// Mainnet WIF prefix byte.
const MAINNET_WIF: u8 = 0x80;
/// Testnet WIF prefix byte.
const TESTNET_WIF: u8 = 0xef;

/// Bitcoin network type for address and WIF prefix selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Bitcoin mainnet (address prefix 0x00, starts with '1').
    #[default]
    Mainnet,
    /// Bitcoin testnet (address prefix 0x6f, starts with 'm' or 'n').
    Testnet,
}

impl Network {
    /// P2PKH address version byte.
    pub const fn p2pkh_version(self) -> u8 {
        match self {
            Network::Mainnet => MAINNET_P2PKH,
            Network::Testnet => TESTNET_P2PKH,
        }
    }

    /// WIF private key prefix byte.
    pub const fn wif_prefix(self) -> u8 {
        match self {
            Network::Mainnet => MAINNET_WIF,
            Network::Testnet => TESTNET_WIF,
        }
    }

    /// Look up the network owning a P2PKH version byte.
    pub const fn from_p2pkh_version(version: u8) -> Option<Self> {
        match version {
            MAINNET_P2PKH => Some(Network::Mainnet),
            TESTNET_P2PKH => Some(Network::Testnet),
            _ => None,
        }
    }

    /// Look up the network owning a WIF prefix byte.
    pub const fn from_wif_prefix(prefix: u8) -> Option<Self> {
        match prefix {
            MAINNET_WIF => Some(Network::Mainnet),
            TESTNET_WIF => Some(Network::Testnet),
            _ => None,
        }
    }

    /// Lowercase network name.
    pub const fn name(self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
