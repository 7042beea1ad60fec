//! Shared test doubles for queue service and worker tests.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Local, Utc};
use mockable::Clock;
use tokio::sync::mpsc;

use crate::domain::ports::CompletionPublisher;
use crate::domain::{CompletionEvent, CooldownPolicy, PendingPicker, WorkItemId, WorkerSleeper};

pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(now)
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ImmediateSleeper;

#[async_trait]
impl WorkerSleeper for ImmediateSleeper {
    async fn sleep(&self, _duration: Duration) {}
}

#[derive(Default)]
pub struct RecordingSleeper(pub Mutex<Vec<Duration>>);

impl RecordingSleeper {
    pub fn recorded(&self) -> Vec<Duration> {
        self.0.lock().expect("sleeper mutex").clone()
    }
}

#[async_trait]
impl WorkerSleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.0.lock().expect("sleeper mutex").push(duration);
    }
}

/// Always picks the oldest pending item.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstPicker;

impl PendingPicker for FirstPicker {
    fn pick(&self, pending: &[WorkItemId]) -> Option<WorkItemId> {
        pending.first().cloned()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestCooldown;

impl CooldownPolicy for ShortestCooldown {
    fn delay(&self, min: Duration, _max: Duration) -> Duration {
        min
    }
}

/// Publisher forwarding every event into a channel.
pub struct ChannelPublisher {
    sender: mpsc::UnboundedSender<CompletionEvent>,
}

impl ChannelPublisher {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<CompletionEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl CompletionPublisher for ChannelPublisher {
    fn publish(&self, event: &CompletionEvent) -> usize {
        usize::from(self.sender.send(event.clone()).is_ok())
    }
}
