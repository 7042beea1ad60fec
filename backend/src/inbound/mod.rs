//! Inbound adapters that translate external requests into domain service
//! calls while keeping framework details at the edge.
//!
//! REST endpoints live under [`http`]; the push channel lives under [`ws`].

pub mod http;
pub mod ws;
