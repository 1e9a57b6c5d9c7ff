#![warn(clippy::pedantic)]

pub mod bytes;
pub mod error;
pub mod length;
pub mod oid;

pub use error::WireError;
