use chainparams_model::{buffer_as_integer, integer_as_buffer, Network, NetworkError};

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod livenet;
pub mod testnet;

/// The parameters of a network, as supplied to a registry's `add`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkParams {
    pub name: String,
    pub alias: String,
    pub pubkeyhash: u8,
    pub privatekey: u8,
    pub scripthash: u8,
    pub xpubkey: u32,
    pub xprivkey: u32,
    pub network_magic: u32,
    pub port: u16,
    pub dns_seeds: Vec<String>,
}

impl NetworkParams {
    /// Returns the network parameters of the given JSON object.
    /// Fields use their camelCase names, e.g. `networkMagic` and `dnsSeeds`.
    pub fn from_json(json: &str) -> Result<Self, NetworkError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Represents a registered network.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkDefinition {
    name: String,
    alias: String,
    pubkeyhash: u8,
    privatekey: u8,
    scripthash: u8,
    xpubkey: u32,
    xprivkey: u32,
    network_magic: [u8; 4],
    port: u16,
    dns_seeds: Vec<String>,
}

impl NetworkDefinition {
    pub(crate) fn new(params: NetworkParams) -> Self {
        Self {
            name: params.name,
            alias: params.alias,
            pubkeyhash: params.pubkeyhash,
            privatekey: params.privatekey,
            scripthash: params.scripthash,
            xpubkey: params.xpubkey,
            xprivkey: params.xprivkey,
            network_magic: integer_as_buffer(params.network_magic),
            port: params.port,
            dns_seeds: params.dns_seeds,
        }
    }

    /// Returns the p2p network magic as an integer.
    pub fn magic(&self) -> u32 {
        buffer_as_integer(&self.network_magic)
    }
}

impl Network for NetworkDefinition {
    fn name(&self) -> &str {
        &self.name
    }

    fn alias(&self) -> &str {
        &self.alias
    }

    fn pubkeyhash(&self) -> u8 {
        self.pubkeyhash
    }

    fn privatekey(&self) -> u8 {
        self.privatekey
    }

    fn scripthash(&self) -> u8 {
        self.scripthash
    }

    fn xpubkey(&self) -> u32 {
        self.xpubkey
    }

    fn xprivkey(&self) -> u32 {
        self.xprivkey
    }

    fn network_magic(&self) -> [u8; 4] {
        self.network_magic
    }

    fn port(&self) -> u16 {
        self.port
    }

    fn dns_seeds(&self) -> &[String] {
        &self.dns_seeds
    }
}

impl fmt::Display for NetworkDefinition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chainparams_model::{Attribute, Scalar};

    const FOO: &str = r#"{
        "name": "foo",
        "alias": "bar",
        "pubkeyhash": 1,
        "privatekey": 2,
        "scripthash": 3,
        "xpubkey": 4,
        "xprivkey": 5,
        "networkMagic": 168496141,
        "port": 9999,
        "dnsSeeds": ["x.example.com"]
    }"#;

    fn foo() -> NetworkParams {
        NetworkParams {
            name: "foo".into(),
            alias: "bar".into(),
            pubkeyhash: 1,
            privatekey: 2,
            scripthash: 3,
            xpubkey: 4,
            xprivkey: 5,
            network_magic: 0x0A0B0C0D,
            port: 9999,
            dns_seeds: vec!["x.example.com".into()],
        }
    }

    mod params {
        use super::*;

        #[test]
        fn from_json() {
            assert_eq!(foo(), NetworkParams::from_json(FOO).unwrap());
        }

        #[test]
        fn from_json_rejects_out_of_range_version_byte() {
            let json = FOO.replace("\"pubkeyhash\": 1", "\"pubkeyhash\": 256");
            match NetworkParams::from_json(&json) {
                Err(NetworkError::Crate(name, _)) => assert_eq!("serde_json", name),
                other => panic!("unexpected result: {:?}", other),
            }
        }

        #[test]
        fn from_json_rejects_out_of_range_magic() {
            let json = FOO.replace("168496141", "4294967296");
            assert!(NetworkParams::from_json(&json).is_err());
        }

        #[test]
        fn from_json_rejects_missing_field() {
            let json = FOO.replace("\"port\": 9999,", "");
            assert!(NetworkParams::from_json(&json).is_err());
        }
    }

    mod definition {
        use super::*;

        #[test]
        fn network_magic_is_big_endian() {
            let network = NetworkDefinition::new(foo());
            assert_eq!([0x0A, 0x0B, 0x0C, 0x0D], network.network_magic());
            assert_eq!(0x0A0B0C0D, network.magic());
        }

        #[test]
        fn fields_are_verbatim() {
            let network = NetworkDefinition::new(foo());
            assert_eq!("foo", network.name());
            assert_eq!("bar", network.alias());
            assert_eq!(1, network.pubkeyhash());
            assert_eq!(2, network.privatekey());
            assert_eq!(3, network.scripthash());
            assert_eq!(4, network.xpubkey());
            assert_eq!(5, network.xprivkey());
            assert_eq!(9999, network.port());
            assert_eq!(["x.example.com".to_string()], network.dns_seeds());
        }

        #[test]
        fn display_is_name() {
            assert_eq!("foo", NetworkDefinition::new(foo()).to_string());
        }

        #[test]
        fn scalars() {
            let network = NetworkDefinition::new(foo());
            let expected = vec![
                (Attribute::Name, Scalar::from("foo")),
                (Attribute::Alias, Scalar::from("bar")),
                (Attribute::PubkeyHash, Scalar::Integer(1)),
                (Attribute::PrivateKey, Scalar::Integer(2)),
                (Attribute::ScriptHash, Scalar::Integer(3)),
                (Attribute::XPubKey, Scalar::Integer(4)),
                (Attribute::XPrivKey, Scalar::Integer(5)),
                (Attribute::Port, Scalar::Integer(9999)),
            ];
            assert_eq!(expected, network.scalars());
        }

        #[test]
        fn serialize() {
            let value = serde_json::to_value(NetworkDefinition::new(foo())).unwrap();
            assert_eq!("foo", value["name"]);
            assert_eq!(serde_json::json!([10, 11, 12, 13]), value["networkMagic"]);
            assert_eq!(serde_json::json!(["x.example.com"]), value["dnsSeeds"]);
        }
    }
}
