//! Driving port for queue mutations.
//!
//! Inbound adapters use this port to enqueue work without touching the
//! repository or the worker directly.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use crate::domain::{Error, WorkItem, WorkItemId};

/// Domain use-case port for creating queued work.
///
/// # Examples
///
/// ```rust,no_run
/// use showcase_backend::domain::WorkStatus;
/// use showcase_backend::domain::ports::{FixtureQueueCommand, QueueCommand};
///
/// # async fn example() -> Result<(), showcase_backend::domain::Error> {
/// let item = FixtureQueueCommand.create_item().await?;
/// assert_eq!(item.status(), WorkStatus::Pending);
/// # Ok(())
/// # }
/// ```
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QueueCommand: Send + Sync {
    /// Create a pending work item and wake the worker.
    async fn create_item(&self) -> Result<WorkItem, Error>;
}

/// Fixture command returning a fresh pending item without queueing it.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureQueueCommand;

#[async_trait]
impl QueueCommand for FixtureQueueCommand {
    async fn create_item(&self) -> Result<WorkItem, Error> {
        let created_at = Utc
            .timestamp_millis_opt(0)
            .single()
            .ok_or_else(|| Error::internal("invalid fixture timestamp"))?;
        Ok(WorkItem::pending(WorkItemId::random(), created_at))
    }
}
