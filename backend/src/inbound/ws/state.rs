//! Shared WebSocket adapter state.

use std::sync::Arc;

use crate::outbound::push::PushHub;

/// Dependency bundle for the push endpoint.
#[derive(Clone)]
pub struct WsState {
    pub hub: Arc<PushHub>,
}

impl WsState {
    /// Construct state around the hub that completion events are published to.
    pub fn new(hub: Arc<PushHub>) -> Self {
        Self { hub }
    }
}
