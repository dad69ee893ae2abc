pub mod bytes;
pub use self::bytes::*;
