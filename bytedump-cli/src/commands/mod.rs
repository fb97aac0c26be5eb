//! CLI command implementations.
//!
//! There is exactly one command:
//! - `dump`: read a file and print its bytes as decimal values

pub mod dump;
