//! Outbound adapters implementing domain ports.
//!
//! - **memory**: process-local user directory and work item storage
//! - **push**: fan-out hub delivering completion events to WebSocket sessions
//! - **text**: lorem text generation backed by the `example-data` crate
//!
//! Adapters are thin translators between domain types and their backing
//! representation. They contain no business logic.

pub mod memory;
pub mod push;
pub mod text;
