use crate::network::NetworkDefinition;
use chainparams_model::Scalar;

use std::sync::Arc;

/// The argument of a registry lookup: either an already resolved network
/// or a scalar attribute value to resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier {
    Network(Arc<NetworkDefinition>),
    Scalar(Scalar),
}

impl From<Arc<NetworkDefinition>> for Identifier {
    fn from(network: Arc<NetworkDefinition>) -> Self {
        Identifier::Network(network)
    }
}

impl From<&Arc<NetworkDefinition>> for Identifier {
    fn from(network: &Arc<NetworkDefinition>) -> Self {
        Identifier::Network(network.clone())
    }
}

impl From<Scalar> for Identifier {
    fn from(value: Scalar) -> Self {
        Identifier::Scalar(value)
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Identifier {
                fn from(value: $ty) -> Self {
                    Identifier::Scalar(Scalar::from(value))
                }
            }
        )*
    };
}

impl_from_scalar!(&str, String, &String, u8, u16, u32, i32, i64);
