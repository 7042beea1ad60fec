//! Mutex-guarded work item table.
//!
//! Items are kept in a map for lookup plus an insertion-ordered id list so
//! pending items come back in creation order. Completed items are retained.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{WorkItemRepository, WorkItemRepositoryError};
use crate::domain::{WorkItem, WorkItemId};

#[derive(Debug, Default)]
struct WorkItemTable {
    items: HashMap<WorkItemId, WorkItem>,
    order: Vec<WorkItemId>,
}

/// Process-local work item storage.
#[derive(Debug, Default)]
pub struct InMemoryWorkItemRepository {
    table: Mutex<WorkItemTable>,
}

impl InMemoryWorkItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, WorkItemTable>, WorkItemRepositoryError> {
        self.table
            .lock()
            .map_err(|_| WorkItemRepositoryError::unavailable("work item table lock poisoned"))
    }
}

#[async_trait]
impl WorkItemRepository for InMemoryWorkItemRepository {
    async fn insert(&self, item: WorkItem) -> Result<(), WorkItemRepositoryError> {
        let mut table = self.lock()?;
        if table.items.contains_key(item.id()) {
            return Err(WorkItemRepositoryError::Duplicate {
                id: item.id().clone(),
            });
        }
        table.order.push(item.id().clone());
        table.items.insert(item.id().clone(), item);
        Ok(())
    }

    async fn find(&self, id: &WorkItemId) -> Result<Option<WorkItem>, WorkItemRepositoryError> {
        Ok(self.lock()?.items.get(id).cloned())
    }

    async fn pending_ids(&self) -> Result<Vec<WorkItemId>, WorkItemRepositoryError> {
        let table = self.lock()?;
        Ok(table
            .order
            .iter()
            .filter(|id| table.items.get(*id).is_some_and(WorkItem::is_pending))
            .cloned()
            .collect())
    }

    async fn complete(
        &self,
        id: &WorkItemId,
        result: String,
    ) -> Result<WorkItem, WorkItemRepositoryError> {
        let mut table = self.lock()?;
        let current = table
            .items
            .remove(id)
            .ok_or_else(|| WorkItemRepositoryError::NotFound { id: id.clone() })?;
        match current.clone().complete(result) {
            Ok(completed) => {
                table.items.insert(id.clone(), completed.clone());
                Ok(completed)
            }
            Err(_) => {
                table.items.insert(id.clone(), current);
                Err(WorkItemRepositoryError::AlreadyCompleted { id: id.clone() })
            }
        }
    }
}
