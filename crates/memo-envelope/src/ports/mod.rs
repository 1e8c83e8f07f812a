//! # Ports Layer
//!
//! Trait definitions for the hexagonal architecture.
//! - **Inbound (Driving)**: API that callers assembling transactions use
//! - **Outbound (Driven)**: The key and cipher primitives this subsystem needs

pub mod inbound;
pub mod outbound;
