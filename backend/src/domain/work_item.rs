//! Work items tracked by the task queue.
//!
//! A work item is created `pending` and moves to `completed` exactly once,
//! carrying the generated result text from then on. Items are never deleted.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a queued work item, rendered as a hyphenated UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkItemId(Uuid);

impl WorkItemId {
    /// Allocate a fresh random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an identifier supplied by a client.
    ///
    /// # Examples
    /// ```
    /// use showcase_backend::domain::WorkItemId;
    ///
    /// assert!(WorkItemId::parse("3fa85f64-5717-4562-b3fc-2c963f66afa6").is_ok());
    /// assert!(WorkItemId::parse("not-an-id").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(raw.trim()).map(Self)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for WorkItemId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for WorkItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Lifecycle state of a work item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkStatus {
    Pending,
    Completed,
}

/// Raised when a completed item is asked to complete again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("work item {id} is already completed")]
pub struct AlreadyCompleted {
    pub id: WorkItemId,
}

/// One unit of queued processing.
///
/// Serialises as `{"id", "status", "result"?, "timestamp"}` where
/// `timestamp` is the creation time in milliseconds since the Unix epoch.
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use showcase_backend::domain::{WorkItem, WorkItemId, WorkStatus};
///
/// let created = Utc.timestamp_millis_opt(1_700_000_000_000).single().expect("valid time");
/// let item = WorkItem::pending(WorkItemId::random(), created);
/// let done = item.complete("lorem ipsum").expect("first completion");
/// assert_eq!(done.status(), WorkStatus::Completed);
/// assert!(done.complete("again").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItem {
    id: WorkItemId,
    status: WorkStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    result: Option<String>,
    timestamp: i64,
}

impl WorkItem {
    /// A freshly queued item created at `created_at`.
    pub fn pending(id: WorkItemId, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            status: WorkStatus::Pending,
            result: None,
            timestamp: created_at.timestamp_millis(),
        }
    }

    /// Move the item to `completed`, attaching its result text.
    pub fn complete(self, result: impl Into<String>) -> Result<Self, AlreadyCompleted> {
        if self.status == WorkStatus::Completed {
            return Err(AlreadyCompleted { id: self.id });
        }
        Ok(Self {
            status: WorkStatus::Completed,
            result: Some(result.into()),
            ..self
        })
    }

    pub fn id(&self) -> &WorkItemId {
        &self.id
    }

    pub fn status(&self) -> WorkStatus {
        self.status
    }

    pub fn is_pending(&self) -> bool {
        self.status == WorkStatus::Pending
    }

    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    /// Creation time in milliseconds since the Unix epoch.
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }
}

/// Broadcast payload announcing a completed work item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionEvent {
    pub id: WorkItemId,
    pub text: String,
}
