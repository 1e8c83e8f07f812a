//! # Adapters Layer
//!
//! Implementations of the outbound cipher port.
//! - `secp256k1`: the production cipher, wire-compatible with other memo clients
//! - `deterministic`: fixed-nonce, identity "encryption" for tests

pub mod deterministic;
pub mod secp256k1;
