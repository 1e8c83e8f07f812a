//! # Domain Layer
//!
//! Pure memo protocol logic with no I/O dependencies.
//! This is the inner layer of the hexagonal architecture.

pub mod counterparty;
pub mod entities;
pub mod envelope;
pub mod errors;
pub mod framing;
pub mod marker;
pub mod transport;
