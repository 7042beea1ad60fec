//! Driving port for queue reads.

use async_trait::async_trait;

use crate::domain::{Error, WorkItem, WorkItemId};

/// Domain use-case port for looking up queued work.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QueueQuery: Send + Sync {
    /// Fetch an item by identifier; unknown identifiers yield `not_found`.
    async fn find_item(&self, id: &WorkItemId) -> Result<WorkItem, Error>;
}

/// Fixture query that knows no items.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureQueueQuery;

#[async_trait]
impl QueueQuery for FixtureQueueQuery {
    async fn find_item(&self, _id: &WorkItemId) -> Result<WorkItem, Error> {
        Err(Error::not_found("Item not found"))
    }
}
