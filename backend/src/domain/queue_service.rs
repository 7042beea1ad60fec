//! Task queue service implementing the queue driving ports.
//!
//! Creation stores a pending item and then wakes the worker. The wake signal
//! is a [`Notify`] permit, so a creation that races the worker's idle check is
//! never lost.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tokio::sync::Notify;
use tracing::debug;

use crate::domain::ports::{QueueCommand, QueueQuery, WorkItemRepository, WorkItemRepositoryError};
use crate::domain::{Error, WorkItem, WorkItemId};

/// Message returned for unknown work item identifiers.
pub const ITEM_NOT_FOUND: &str = "Item not found";

/// Queue use-cases backed by a work item repository.
#[derive(Clone)]
pub struct TaskQueueService {
    repository: Arc<dyn WorkItemRepository>,
    clock: Arc<dyn Clock>,
    wake: Arc<Notify>,
}

impl TaskQueueService {
    /// Build the service; `wake` is shared with the queue worker.
    pub fn new(
        repository: Arc<dyn WorkItemRepository>,
        clock: Arc<dyn Clock>,
        wake: Arc<Notify>,
    ) -> Self {
        Self {
            repository,
            clock,
            wake,
        }
    }
}

pub(crate) fn map_repository_error(error: WorkItemRepositoryError) -> Error {
    match error {
        WorkItemRepositoryError::NotFound { .. } => Error::not_found(ITEM_NOT_FOUND),
        WorkItemRepositoryError::Duplicate { .. }
        | WorkItemRepositoryError::AlreadyCompleted { .. } => Error::conflict(error.to_string()),
        WorkItemRepositoryError::Unavailable { .. } => Error::internal(error.to_string()),
    }
}

#[async_trait]
impl QueueCommand for TaskQueueService {
    async fn create_item(&self) -> Result<WorkItem, Error> {
        let item = WorkItem::pending(WorkItemId::random(), self.clock.utc());
        self.repository
            .insert(item.clone())
            .await
            .map_err(map_repository_error)?;
        self.wake.notify_one();
        debug!(id = %item.id(), "work item queued");
        Ok(item)
    }
}

#[async_trait]
impl QueueQuery for TaskQueueService {
    async fn find_item(&self, id: &WorkItemId) -> Result<WorkItem, Error> {
        self.repository
            .find(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(ITEM_NOT_FOUND))
    }
}

#[cfg(test)]
mod tests {
    //! Service-level coverage using mocked repositories.
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::MockWorkItemRepository;
    use crate::test_support::queue::FixedClock;
    use chrono::{TimeZone, Utc};
    use rstest::{fixture, rstest};
    use std::time::Duration;
    use tokio::time::timeout;

    #[fixture]
    fn clock() -> Arc<dyn Clock> {
        Arc::new(FixedClock::new(
            Utc.timestamp_millis_opt(1_700_000_000_000)
                .single()
                .expect("valid time"),
        ))
    }

    fn build_service(
        repository: MockWorkItemRepository,
        clock: Arc<dyn Clock>,
    ) -> (TaskQueueService, Arc<Notify>) {
        let wake = Arc::new(Notify::new());
        (
            TaskQueueService::new(Arc::new(repository), clock, Arc::clone(&wake)),
            wake,
        )
    }

    #[rstest]
    #[tokio::test]
    async fn create_item_stores_pending_item_and_wakes_worker(clock: Arc<dyn Clock>) {
        let mut repository = MockWorkItemRepository::new();
        repository
            .expect_insert()
            .withf(|item| item.is_pending() && item.timestamp() == 1_700_000_000_000)
            .times(1)
            .returning(|_| Ok(()));
        let (service, wake) = build_service(repository, clock);

        let item = service.create_item().await.expect("item created");
        assert!(item.is_pending());
        assert!(item.result().is_none());

        timeout(Duration::from_secs(1), wake.notified())
            .await
            .expect("worker woken");
    }

    #[rstest]
    #[tokio::test]
    async fn create_item_surfaces_store_failures_as_internal(clock: Arc<dyn Clock>) {
        let mut repository = MockWorkItemRepository::new();
        repository
            .expect_insert()
            .returning(|_| Err(WorkItemRepositoryError::unavailable("poisoned")));
        let (service, _wake) = build_service(repository, clock);

        let err = service.create_item().await.expect_err("store failure");
        assert_eq!(err.code(), ErrorCode::InternalError);
    }

    #[rstest]
    #[tokio::test]
    async fn find_item_maps_missing_items_to_not_found(clock: Arc<dyn Clock>) {
        let mut repository = MockWorkItemRepository::new();
        repository.expect_find().returning(|_| Ok(None));
        let (service, _wake) = build_service(repository, clock);

        let err = service
            .find_item(&WorkItemId::random())
            .await
            .expect_err("missing item");
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.message(), ITEM_NOT_FOUND);
    }

    #[rstest]
    #[tokio::test]
    async fn find_item_returns_stored_item(clock: Arc<dyn Clock>) {
        let stored = WorkItem::pending(WorkItemId::random(), clock.utc());
        let expected = stored.clone();
        let mut repository = MockWorkItemRepository::new();
        repository
            .expect_find()
            .returning(move |_| Ok(Some(stored.clone())));
        let (service, _wake) = build_service(repository, clock);

        let found = service
            .find_item(expected.id())
            .await
            .expect("stored item");
        assert_eq!(found, expected);
    }

    #[rstest]
    #[case(WorkItemRepositoryError::NotFound { id: WorkItemId::random() }, ErrorCode::NotFound)]
    #[case(WorkItemRepositoryError::Duplicate { id: WorkItemId::random() }, ErrorCode::Conflict)]
    #[case(
        WorkItemRepositoryError::AlreadyCompleted { id: WorkItemId::random() },
        ErrorCode::Conflict
    )]
    #[case(WorkItemRepositoryError::unavailable("down"), ErrorCode::InternalError)]
    fn repository_errors_map_to_domain_codes(
        #[case] error: WorkItemRepositoryError,
        #[case] expected: ErrorCode,
    ) {
        assert_eq!(map_repository_error(error).code(), expected);
    }
}
