//! Fan-out hub for completion events.
//!
//! Each WebSocket session registers a [`Subscription`] and receives every
//! event published after it registered. There is no backlog: late subscribers
//! only see later events. A subscriber whose receiver has gone away is pruned
//! the next time anything is published.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tokio::sync::mpsc;
use tracing::debug;

use crate::domain::CompletionEvent;
use crate::domain::ports::CompletionPublisher;

/// Identifier assigned to each subscriber.
pub type SubscriberId = u64;

/// Receiving half handed to a push session.
#[derive(Debug)]
pub struct Subscription {
    id: SubscriberId,
    receiver: mpsc::UnboundedReceiver<CompletionEvent>,
}

impl Subscription {
    pub fn id(&self) -> SubscriberId {
        self.id
    }

    /// Wait for the next event; `None` once the hub has dropped this subscriber.
    pub async fn recv(&mut self) -> Option<CompletionEvent> {
        self.receiver.recv().await
    }
}

/// Registry of open push subscribers.
#[derive(Debug, Default)]
pub struct PushHub {
    subscribers: Mutex<HashMap<SubscriberId, mpsc::UnboundedSender<CompletionEvent>>>,
    next_id: AtomicU64,
}

impl PushHub {
    pub fn new() -> Self {
        Self::default()
    }

    // A poisoned map still holds valid senders.
    fn subscribers(
        &self,
    ) -> MutexGuard<'_, HashMap<SubscriberId, mpsc::UnboundedSender<CompletionEvent>>> {
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a new subscriber.
    pub fn subscribe(&self) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let (sender, receiver) = mpsc::unbounded_channel();
        self.subscribers().insert(id, sender);
        debug!(subscriber = id, "push subscriber registered");
        Subscription { id, receiver }
    }

    /// Remove a subscriber; unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubscriberId) {
        if self.subscribers().remove(&id).is_some() {
            debug!(subscriber = id, "push subscriber removed");
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers().len()
    }

    /// Send `event` to every subscriber, pruning closed ones.
    ///
    /// # Examples
    /// ```
    /// use showcase_backend::domain::{CompletionEvent, WorkItemId};
    /// use showcase_backend::outbound::push::PushHub;
    ///
    /// let hub = PushHub::new();
    /// let _subscription = hub.subscribe();
    /// let event = CompletionEvent { id: WorkItemId::random(), text: "done".into() };
    /// assert_eq!(hub.broadcast(&event), 1);
    /// ```
    pub fn broadcast(&self, event: &CompletionEvent) -> usize {
        let mut subscribers = self.subscribers();
        let before = subscribers.len();
        subscribers.retain(|_, sender| sender.send(event.clone()).is_ok());
        let delivered = subscribers.len();
        if delivered < before {
            debug!(pruned = before - delivered, "closed push subscribers pruned");
        }
        delivered
    }
}

impl CompletionPublisher for PushHub {
    fn publish(&self, event: &CompletionEvent) -> usize {
        self.broadcast(event)
    }
}
