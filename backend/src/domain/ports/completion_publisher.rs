//! Driven port for announcing completed work to push subscribers.

use crate::domain::CompletionEvent;

/// Fan-out sink for completion events.
///
/// Delivery is best effort: subscribers that cannot accept the event are
/// dropped by the adapter, never retried.
#[cfg_attr(test, mockall::automock)]
pub trait CompletionPublisher: Send + Sync {
    /// Deliver `event` to every open subscriber and return how many accepted it.
    fn publish(&self, event: &CompletionEvent) -> usize;
}

/// Publisher that drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpCompletionPublisher;

impl CompletionPublisher for NoOpCompletionPublisher {
    fn publish(&self, _event: &CompletionEvent) -> usize {
        0
    }
}
