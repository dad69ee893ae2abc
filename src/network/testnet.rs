use crate::network::NetworkParams;

pub const NAME: &str = "testnet";
pub const ALIAS: &str = "testnet";

// These mirror livenet byte for byte. Every scalar shared with livenet
// therefore resolves to testnet through the reverse index; only `name`
// and `alias` tell the two apart.
// TODO: replace with the real testnet prefixes, magic, port and seeds once published.
pub const PUBKEYHASH: u8 = 0x19;
pub const PRIVATEKEY: u8 = 0x99;
pub const SCRIPTHASH: u8 = 0x55;
pub const XPUBKEY: u32 = 0x02cfbede;
pub const XPRIVKEY: u32 = 0x02cfbf60;
pub const NETWORK_MAGIC: u32 = 0x70352205;
pub const PORT: u16 = 15714;

pub const DNS_SEEDS: [&str; 4] = [
    "rat4.blackcoin.co",
    "seed.blackcoin.co",
    "6.syllabear.us.to",
    "bcseed.syllabear.us.to",
];

/// Returns the parameters of the test network.
pub fn params() -> NetworkParams {
    NetworkParams {
        name: NAME.into(),
        alias: ALIAS.into(),
        pubkeyhash: PUBKEYHASH,
        privatekey: PRIVATEKEY,
        scripthash: SCRIPTHASH,
        xpubkey: XPUBKEY,
        xprivkey: XPRIVKEY,
        network_magic: NETWORK_MAGIC,
        port: PORT,
        dns_seeds: DNS_SEEDS.iter().map(|seed| seed.to_string()).collect(),
    }
}
