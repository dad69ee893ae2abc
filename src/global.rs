//! The process-wide network registry.
//!
//! Seeded with livenet and testnet on first use and extended through [`add`].
//! It lives for the rest of the process.

use crate::identifier::Identifier;
use crate::network::{livenet, testnet, NetworkDefinition, NetworkParams};
use crate::registry::Networks;
use chainparams_model::{Attribute, NetworkError};

use parking_lot::RwLock;
use std::sync::Arc;

struct Registry {
    networks: RwLock<Networks>,
    livenet: Arc<NetworkDefinition>,
    testnet: Arc<NetworkDefinition>,
}

impl Registry {
    fn seed() -> Self {
        let mut networks = Networks::new();
        let livenet = networks.add(livenet::params());
        let testnet = networks.add(testnet::params());

        Self {
            networks: RwLock::new(networks),
            livenet,
            testnet,
        }
    }
}

lazy_static! {
    static ref REGISTRY: Registry = Registry::seed();
}

/// Registers a network with the process-wide registry and returns its definition.
pub fn add(params: NetworkParams) -> Arc<NetworkDefinition> {
    REGISTRY.networks.write().add(params)
}

/// Returns the network identified by `arg` in the process-wide registry.
/// See [`Networks::get`].
pub fn get<I: Into<Identifier>>(arg: I, key: Option<Attribute>) -> Option<Arc<NetworkDefinition>> {
    REGISTRY.networks.read().get(arg, key)
}

/// Returns the network with the given name or alias in the process-wide registry.
pub fn resolve(name: &str) -> Result<Arc<NetworkDefinition>, NetworkError> {
    REGISTRY.networks.read().resolve(name)
}

/// Returns the definitions of the process-wide registry in insertion order.
pub fn networks() -> Vec<Arc<NetworkDefinition>> {
    REGISTRY.networks.read().iter().cloned().collect()
}

pub fn livenet() -> Arc<NetworkDefinition> {
    REGISTRY.livenet.clone()
}

/// Alias of [`livenet`].
pub fn mainnet() -> Arc<NetworkDefinition> {
    livenet()
}

pub fn testnet() -> Arc<NetworkDefinition> {
    REGISTRY.testnet.clone()
}

/// The network used when none is given, always [`livenet`].
pub fn default_network() -> Arc<NetworkDefinition> {
    livenet()
}
