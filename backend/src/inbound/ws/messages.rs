//! Wire-level message definitions for the WebSocket adapter.
//!
//! Domain events are transformed into these payloads before being serialized
//! to JSON and sent to connected clients.

use serde::Serialize;

use crate::domain::{CompletionEvent, WorkItemId};

/// Result body carried by a push frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultPayload {
    /// Completed work item identifier.
    pub id: WorkItemId,
    /// Generated result text.
    pub text: String,
}

/// Outbound frame, tagged by `type` with the body under `data`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum PushMessage {
    Result(ResultPayload),
}

impl From<CompletionEvent> for PushMessage {
    fn from(value: CompletionEvent) -> Self {
        let CompletionEvent { id, text } = value;
        Self::Result(ResultPayload { id, text })
    }
}
