//! # Model
//!
//! A model for blockchain network parameter sets.

#![warn(unused_extern_crates)]
#![forbid(unsafe_code)]

#[macro_use]
extern crate failure;

pub mod attribute;
pub use self::attribute::*;

pub mod network;
pub use self::network::*;

pub mod scalar;
pub use self::scalar::*;

pub mod utilities;
pub use self::utilities::*;
