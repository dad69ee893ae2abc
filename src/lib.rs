//! # Chainparams
//!
//! A registry of blockchain network parameter sets, resolvable by name or by
//! any of their version bytes.
#![warn(unused_extern_crates)]
#![forbid(unsafe_code)]

#[macro_use]
extern crate lazy_static;

pub use chainparams_model::{Attribute, Network, NetworkError, Scalar};

pub mod global;
pub use self::global::*;

pub mod identifier;
pub use self::identifier::*;

pub mod network;
pub use self::network::*;

pub mod registry;
pub use self::registry::*;
