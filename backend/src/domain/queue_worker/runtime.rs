//! Port and runtime dependency bundles for the queue worker.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::domain::WorkItemId;
use crate::domain::ports::{CompletionPublisher, TextGenerator, WorkItemRepository};

use super::{CooldownPolicy, PendingPicker, WorkerSleeper};

/// Port bundle required by the queue worker.
pub struct QueueWorkerPorts {
    /// Work item storage shared with the queue service.
    pub repository: Arc<dyn WorkItemRepository>,
    /// Fan-out for completion events.
    pub publisher: Arc<dyn CompletionPublisher>,
    /// Source of result text.
    pub text: Arc<dyn TextGenerator>,
}

impl QueueWorkerPorts {
    /// Build a strongly-typed worker port bundle.
    pub fn new(
        repository: Arc<dyn WorkItemRepository>,
        publisher: Arc<dyn CompletionPublisher>,
        text: Arc<dyn TextGenerator>,
    ) -> Self {
        Self {
            repository,
            publisher,
            text,
        }
    }
}

/// Runtime helpers controlling pacing and selection.
pub struct QueueWorkerRuntime {
    /// Async sleep implementation for the cool-down.
    pub sleeper: Arc<dyn WorkerSleeper>,
    /// Choice of the next pending item.
    pub picker: Arc<dyn PendingPicker>,
    /// Cool-down length between completions.
    pub cooldown: Arc<dyn CooldownPolicy>,
}

impl Default for QueueWorkerRuntime {
    fn default() -> Self {
        Self {
            sleeper: Arc::new(TokioSleeper),
            picker: Arc::new(UniformPicker),
            cooldown: Arc::new(UniformCooldown),
        }
    }
}

/// Tokio-based sleeper implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl WorkerSleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Picks any pending item with equal probability.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformPicker;

impl PendingPicker for UniformPicker {
    fn pick(&self, pending: &[WorkItemId]) -> Option<WorkItemId> {
        pending.choose(&mut rand::rng()).cloned()
    }
}

/// Draws the cool-down uniformly from `[min, max)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformCooldown;

impl CooldownPolicy for UniformCooldown {
    fn delay(&self, min: Duration, max: Duration) -> Duration {
        if max <= min {
            return min;
        }
        let min_ms = u64::try_from(min.as_millis()).unwrap_or(u64::MAX);
        let max_ms = u64::try_from(max.as_millis()).unwrap_or(u64::MAX);
        if max_ms <= min_ms {
            return min;
        }
        Duration::from_millis(rand::rng().random_range(min_ms..max_ms))
    }
}
