use crate::attribute::Attribute;
use crate::scalar::Scalar;

use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

/// The interface for a generic network parameter set.
pub trait Network: Clone + Debug + Display + Send + Sync + 'static + Eq + Hash + Sized {
    /// Returns the canonical name of the network.
    fn name(&self) -> &str;

    /// Returns the secondary accepted name of the network.
    fn alias(&self) -> &str;

    /// Returns the pay-to-pubkey-hash address version byte.
    fn pubkeyhash(&self) -> u8;

    /// Returns the wif private key version byte.
    fn privatekey(&self) -> u8;

    /// Returns the pay-to-script-hash address version byte.
    fn scripthash(&self) -> u8;

    /// Returns the extended public key version magic.
    fn xpubkey(&self) -> u32;

    /// Returns the extended private key version magic.
    fn xprivkey(&self) -> u32;

    /// Returns the big-endian encoding of the p2p network magic.
    fn network_magic(&self) -> [u8; 4];

    /// Returns the default p2p port.
    fn port(&self) -> u16;

    /// Returns the dns seed hostnames.
    fn dns_seeds(&self) -> &[String];

    /// Returns the scalar value of the given attribute, or `None` for
    /// the encoded network magic and the dns seed list.
    fn value(&self, attribute: Attribute) -> Option<Scalar> {
        match attribute {
            Attribute::Name => Some(self.name().into()),
            Attribute::Alias => Some(self.alias().into()),
            Attribute::PubkeyHash => Some(self.pubkeyhash().into()),
            Attribute::PrivateKey => Some(self.privatekey().into()),
            Attribute::ScriptHash => Some(self.scripthash().into()),
            Attribute::XPubKey => Some(self.xpubkey().into()),
            Attribute::XPrivKey => Some(self.xprivkey().into()),
            Attribute::Port => Some(self.port().into()),
            Attribute::NetworkMagic | Attribute::DnsSeeds => None,
        }
    }

    /// Returns the indexed attribute values of the network, in declaration order.
    fn scalars(&self) -> Vec<(Attribute, Scalar)> {
        Attribute::ALL
            .iter()
            .filter(|attribute| attribute.is_indexed())
            .filter_map(|attribute| self.value(*attribute).map(|value| (*attribute, value)))
            .collect()
    }
}

#[derive(Debug, Fail)]
pub enum NetworkError {
    #[fail(display = "{}: {}", _0, _1)]
    Crate(&'static str, String),

    #[fail(display = "invalid attribute: {}", _0)]
    InvalidAttribute(String),

    #[fail(display = "invalid network: {}", _0)]
    InvalidNetwork(String),
}

impl From<serde_json::Error> for NetworkError {
    fn from(error: serde_json::Error) -> Self {
        NetworkError::Crate("serde_json", format!("{:?}", error))
    }
}
