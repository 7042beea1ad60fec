//! Port abstraction for work item storage and its errors.

use async_trait::async_trait;

use crate::domain::{WorkItem, WorkItemId};

/// Storage errors raised by work item repositories.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorkItemRepositoryError {
    /// An item with the same identifier already exists.
    #[error("work item {id} already exists")]
    Duplicate { id: WorkItemId },
    /// No item exists for the identifier.
    #[error("work item {id} was not found")]
    NotFound { id: WorkItemId },
    /// The item was already completed.
    #[error("work item {id} is already completed")]
    AlreadyCompleted { id: WorkItemId },
    /// The backing store could not be used.
    #[error("work item store is unavailable: {message}")]
    Unavailable { message: String },
}

impl WorkItemRepositoryError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}

/// Work item storage used by the queue service and worker.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorkItemRepository: Send + Sync {
    /// Store a newly created item.
    async fn insert(&self, item: WorkItem) -> Result<(), WorkItemRepositoryError>;

    /// Fetch an item by identifier.
    async fn find(&self, id: &WorkItemId) -> Result<Option<WorkItem>, WorkItemRepositoryError>;

    /// Identifiers of every pending item, in creation order.
    async fn pending_ids(&self) -> Result<Vec<WorkItemId>, WorkItemRepositoryError>;

    /// Transition a pending item to completed and return the stored result.
    async fn complete(
        &self,
        id: &WorkItemId,
        result: String,
    ) -> Result<WorkItem, WorkItemRepositoryError>;
}
