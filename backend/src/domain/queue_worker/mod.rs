//! Background worker draining the task queue.
//!
//! The worker completes one pending item per tick: it picks an item at
//! random, stores the generated result, broadcasts the completion, and then
//! holds its `processing` flag through a randomised cool-down. A tick that
//! finds the flag already set does nothing. Between ticks the run loop parks on
//! the queue's wake signal, so an idle worker never polls.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::domain::ports::{CompletionPublisher, TextGenerator, WorkItemRepository};
use crate::domain::queue_service::map_repository_error;
use crate::domain::{CompletionEvent, Error, WorkItemId};

mod runtime;

pub use runtime::{
    QueueWorkerPorts, QueueWorkerRuntime, TokioSleeper, UniformCooldown, UniformPicker,
};

/// Worker configuration controlling result size and pacing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueWorkerConfig {
    /// Paragraphs of lorem text attached to each completed item.
    pub result_paragraphs: usize,
    /// Inclusive lower bound of the post-completion cool-down.
    pub min_cooldown: Duration,
    /// Exclusive upper bound of the post-completion cool-down.
    pub max_cooldown: Duration,
}

impl Default for QueueWorkerConfig {
    fn default() -> Self {
        Self {
            result_paragraphs: 3,
            min_cooldown: Duration::from_millis(1000),
            max_cooldown: Duration::from_millis(3000),
        }
    }
}

/// Summary of one completed item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionReport {
    pub id: WorkItemId,
    /// Subscribers that accepted the completion event.
    pub delivered: usize,
    /// Items still pending after this completion.
    pub remaining: usize,
    pub cooldown: Duration,
}

/// Result of a single worker tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Another tick holds the processing flag.
    Busy,
    /// Nothing was pending.
    Idle,
    Completed(CompletionReport),
}

/// Async sleeping abstraction for the cool-down.
///
/// ```rust,no_run
/// use async_trait::async_trait;
/// use showcase_backend::domain::WorkerSleeper;
/// use std::time::Duration;
///
/// struct SkipSleeper;
///
/// #[async_trait]
/// impl WorkerSleeper for SkipSleeper {
///     async fn sleep(&self, _duration: Duration) {}
/// }
/// ```
#[async_trait]
pub trait WorkerSleeper: Send + Sync {
    /// Suspend execution for `duration`.
    async fn sleep(&self, duration: Duration);
}

/// Chooses which pending item to complete next.
pub trait PendingPicker: Send + Sync {
    /// Return one of `pending`, or `None` when it is empty.
    fn pick(&self, pending: &[WorkItemId]) -> Option<WorkItemId>;
}

/// Chooses the cool-down following a completion.
///
/// ```rust
/// use showcase_backend::domain::CooldownPolicy;
/// use std::time::Duration;
///
/// struct Shortest;
///
/// impl CooldownPolicy for Shortest {
///     fn delay(&self, min: Duration, _max: Duration) -> Duration {
///         min
///     }
/// }
///
/// let delay = Shortest.delay(Duration::from_millis(10), Duration::from_millis(20));
/// assert_eq!(delay, Duration::from_millis(10));
/// ```
pub trait CooldownPolicy: Send + Sync {
    /// Delay within `[min, max)`; `min` when the range is empty.
    fn delay(&self, min: Duration, max: Duration) -> Duration;
}

/// Clears the processing flag however the tick ends.
struct ProcessingGuard<'a>(&'a AtomicBool);

impl Drop for ProcessingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Domain-owned queue worker.
pub struct QueueWorker {
    repository: Arc<dyn WorkItemRepository>,
    publisher: Arc<dyn CompletionPublisher>,
    text: Arc<dyn TextGenerator>,
    sleeper: Arc<dyn WorkerSleeper>,
    picker: Arc<dyn PendingPicker>,
    cooldown: Arc<dyn CooldownPolicy>,
    wake: Arc<Notify>,
    processing: AtomicBool,
    config: QueueWorkerConfig,
}

impl QueueWorker {
    /// Build a worker using default runtime dependencies.
    /// ```rust,ignore
    /// let worker = QueueWorker::new(ports, wake, QueueWorkerConfig::default());
    /// ```
    pub fn new(ports: QueueWorkerPorts, wake: Arc<Notify>, config: QueueWorkerConfig) -> Self {
        Self::with_runtime(ports, QueueWorkerRuntime::default(), wake, config)
    }

    /// Build a worker with injected runtime abstractions.
    pub fn with_runtime(
        ports: QueueWorkerPorts,
        runtime: QueueWorkerRuntime,
        wake: Arc<Notify>,
        config: QueueWorkerConfig,
    ) -> Self {
        Self {
            repository: ports.repository,
            publisher: ports.publisher,
            text: ports.text,
            sleeper: runtime.sleeper,
            picker: runtime.picker,
            cooldown: runtime.cooldown,
            wake,
            processing: AtomicBool::new(false),
            config,
        }
    }

    /// Whether a tick currently holds the processing flag.
    pub fn is_processing(&self) -> bool {
        self.processing.load(Ordering::Acquire)
    }

    /// Complete at most one pending item.
    ///
    /// The processing flag stays set through the cool-down, so concurrent
    /// ticks observe [`TickOutcome::Busy`] until it elapses.
    pub async fn tick(&self) -> Result<TickOutcome, Error> {
        if self
            .processing
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Ok(TickOutcome::Busy);
        }
        let _guard = ProcessingGuard(&self.processing);
        self.complete_one().await
    }

    async fn complete_one(&self) -> Result<TickOutcome, Error> {
        let pending = self
            .repository
            .pending_ids()
            .await
            .map_err(map_repository_error)?;
        let Some(id) = self.picker.pick(&pending) else {
            return Ok(TickOutcome::Idle);
        };

        let text = self
            .text
            .paragraphs(self.config.result_paragraphs)
            .map_err(|err| Error::internal(format!("result text generation failed: {err}")))?;
        self.repository
            .complete(&id, text.clone())
            .await
            .map_err(map_repository_error)?;

        let delivered = self.publisher.publish(&CompletionEvent {
            id: id.clone(),
            text,
        });
        let remaining = pending.len().saturating_sub(1);
        let cooldown = self
            .cooldown
            .delay(self.config.min_cooldown, self.config.max_cooldown);
        info!(
            id = %id,
            delivered,
            remaining,
            cooldown_ms = u64::try_from(cooldown.as_millis()).unwrap_or(u64::MAX),
            "work item completed"
        );
        self.sleeper.sleep(cooldown).await;

        Ok(TickOutcome::Completed(CompletionReport {
            id,
            delivered,
            remaining,
            cooldown,
        }))
    }

    /// Drive ticks until `shutdown` is cancelled.
    ///
    /// After a completion the loop ticks again immediately; otherwise it waits
    /// for the queue to signal new work.
    pub async fn run(&self, shutdown: CancellationToken) {
        info!("queue worker started");
        loop {
            let outcome = tokio::select! {
                biased;
                () = shutdown.cancelled() => break,
                outcome = self.tick() => outcome,
            };
            match outcome {
                Ok(TickOutcome::Completed(_)) => continue,
                Ok(TickOutcome::Idle | TickOutcome::Busy) => {}
                Err(error) => warn!(error = %error, "queue worker tick failed"),
            }
            tokio::select! {
                biased;
                () = shutdown.cancelled() => break,
                () = self.wake.notified() => {}
            }
        }
        info!("queue worker stopped");
    }

    /// Spawn [`QueueWorker::run`] onto the current Tokio runtime.
    pub fn spawn(self: Arc<Self>, shutdown: CancellationToken) -> JoinHandle<()> {
        tokio::spawn(async move { self.run(shutdown).await })
    }
}
