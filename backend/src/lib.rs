//! Showcase backend: a paginated user directory, a character stream, and a
//! task queue whose results are pushed over WebSocket.
//!
//! The crate follows a ports-and-adapters layout: [`domain`] holds entities,
//! use-cases and port traits; [`inbound`] translates HTTP and WebSocket
//! traffic; [`outbound`] provides the in-memory adapters; [`server`] wires
//! them together.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

#[cfg(test)]
mod test_support;

pub use middleware::Trace;
