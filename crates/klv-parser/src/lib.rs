#![warn(clippy::pedantic)]

pub mod parser;

pub use parser::{KeyFormat, StreamParser, Triplet};
