use crate::network::NetworkError;

use serde::Serialize;
use std::{fmt, str::FromStr};

/// Represents a named attribute of a network definition.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Attribute {
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "alias")]
    Alias,
    #[serde(rename = "pubkeyhash")]
    PubkeyHash,
    #[serde(rename = "privatekey")]
    PrivateKey,
    #[serde(rename = "scripthash")]
    ScriptHash,
    #[serde(rename = "xpubkey")]
    XPubKey,
    #[serde(rename = "xprivkey")]
    XPrivKey,
    #[serde(rename = "networkMagic")]
    NetworkMagic,
    #[serde(rename = "port")]
    Port,
    #[serde(rename = "dnsSeeds")]
    DnsSeeds,
}

impl Attribute {
    /// Every attribute of a network definition, in declaration order.
    pub const ALL: [Attribute; 10] = [
        Attribute::Name,
        Attribute::Alias,
        Attribute::PubkeyHash,
        Attribute::PrivateKey,
        Attribute::ScriptHash,
        Attribute::XPubKey,
        Attribute::XPrivKey,
        Attribute::NetworkMagic,
        Attribute::Port,
        Attribute::DnsSeeds,
    ];

    /// The attributes whose values are entered into a registry's reverse index.
    /// The encoded network magic and the dns seed list are stored but never indexed.
    pub const INDEXED: [Attribute; 8] = [
        Attribute::Name,
        Attribute::Alias,
        Attribute::PubkeyHash,
        Attribute::PrivateKey,
        Attribute::ScriptHash,
        Attribute::XPubKey,
        Attribute::XPrivKey,
        Attribute::Port,
    ];

    /// Returns the canonical name of the attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Attribute::Name => "name",
            Attribute::Alias => "alias",
            Attribute::PubkeyHash => "pubkeyhash",
            Attribute::PrivateKey => "privatekey",
            Attribute::ScriptHash => "scripthash",
            Attribute::XPubKey => "xpubkey",
            Attribute::XPrivKey => "xprivkey",
            Attribute::NetworkMagic => "networkMagic",
            Attribute::Port => "port",
            Attribute::DnsSeeds => "dnsSeeds",
        }
    }

    /// Returns `true` if values of this attribute are entered into the reverse index.
    pub fn is_indexed(&self) -> bool {
        Self::INDEXED.contains(self)
    }
}

impl FromStr for Attribute {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|attribute| attribute.as_str() == s)
            .copied()
            .ok_or_else(|| NetworkError::InvalidAttribute(s.into()))
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
