use crate::identifier::Identifier;
use crate::network::{livenet, testnet, NetworkDefinition, NetworkParams};
use chainparams_model::{Attribute, Network, NetworkError, Scalar};

use std::{collections::HashMap, sync::Arc};
use tracing::{debug, trace};

/// A registry of network definitions.
///
/// Definitions are kept in insertion order for keyed scans, and every
/// indexed attribute value is mapped back to the definition that declared
/// it. A value declared by more than one definition maps to the one added
/// last.
#[derive(Debug, Clone)]
pub struct Networks {
    definitions: Vec<Arc<NetworkDefinition>>,
    index: HashMap<Scalar, Arc<NetworkDefinition>>,
}

impl Networks {
    /// Returns an empty registry.
    pub fn new() -> Self {
        Self {
            definitions: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Returns a registry seeded with livenet and then testnet.
    pub fn with_builtins() -> Self {
        let mut networks = Self::new();
        networks.add(livenet::params());
        networks.add(testnet::params());
        networks
    }

    /// Registers a network and returns its definition.
    pub fn add(&mut self, params: NetworkParams) -> Arc<NetworkDefinition> {
        let network = Arc::new(NetworkDefinition::new(params));

        for (attribute, value) in network.scalars() {
            if let Some(previous) = self.index.insert(value.clone(), network.clone()) {
                if !Arc::ptr_eq(&previous, &network) {
                    trace!(%attribute, %value, %previous, %network, "network index entry overwritten");
                }
            }
        }

        self.definitions.push(network.clone());
        debug!(
            %network,
            alias = network.alias(),
            magic = %hex::encode(network.network_magic()),
            "registered network"
        );

        network
    }

    /// Returns the network identified by `arg`.
    ///
    /// A network that is already registered here is returned as is. With a
    /// `key`, definitions are scanned in insertion order for the first whose
    /// `key` attribute equals `arg`. Otherwise `arg` is resolved through the
    /// reverse index; a network registered elsewhere resolves by its name.
    pub fn get<I: Into<Identifier>>(&self, arg: I, key: Option<Attribute>) -> Option<Arc<NetworkDefinition>> {
        let arg = arg.into();

        if let Identifier::Network(network) = &arg {
            if self.contains(network) {
                return Some(network.clone());
            }
        }

        match (arg, key) {
            (Identifier::Scalar(value), Some(key)) => self
                .definitions
                .iter()
                .find(|network| network.value(key).as_ref() == Some(&value))
                .cloned(),
            (Identifier::Network(_), Some(_)) => None,
            (Identifier::Scalar(value), None) => self.index.get(&value).cloned(),
            (Identifier::Network(network), None) => self.index.get(&Scalar::from(network.name())).cloned(),
        }
    }

    /// Returns the network with the given name or alias.
    pub fn resolve(&self, name: &str) -> Result<Arc<NetworkDefinition>, NetworkError> {
        self.get(name, None).ok_or_else(|| NetworkError::InvalidNetwork(name.into()))
    }

    /// Returns `true` if this exact definition is registered here.
    pub fn contains(&self, network: &Arc<NetworkDefinition>) -> bool {
        self.definitions.iter().any(|registered| Arc::ptr_eq(registered, network))
    }

    /// Returns the registered definitions in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<NetworkDefinition>> + '_ {
        self.definitions.iter()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl Default for Networks {
    fn default() -> Self {
        Self::with_builtins()
    }
}
