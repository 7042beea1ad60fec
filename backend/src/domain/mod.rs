//! Domain primitives, services, and ports.
//!
//! Purpose: define the directory and queue entities used by the HTTP and push
//! adapters, together with the pure filter engine and the queue worker. Types
//! document their invariants and serialisation contracts in their Rustdoc.
//!
//! Public surface:
//! - Error (alias to `error::Error`): API error response payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - User, UserQuery, UserPage and `query_users`: directory filtering.
//! - WorkItem, CompletionEvent: queue entities.
//! - TaskQueueService, QueueWorker: queue use-cases and the background worker.
//! - stream_characters: timed text emission.

pub mod error;
pub mod ports;
pub mod queue_service;
pub mod queue_worker;
pub mod text_stream;
pub mod user;
pub mod user_directory;
pub mod work_item;

pub use self::error::{Error, ErrorCode, ErrorValidationError, REDACTED_MESSAGE};
pub use self::queue_service::{ITEM_NOT_FOUND, TaskQueueService};
pub use self::queue_worker::{
    CompletionReport, CooldownPolicy, PendingPicker, QueueWorker, QueueWorkerConfig,
    QueueWorkerPorts, QueueWorkerRuntime, TickOutcome, TokioSleeper, UniformCooldown,
    UniformPicker, WorkerSleeper,
};
pub use self::text_stream::stream_characters;
pub use self::user::User;
pub use self::user_directory::{
    DEFAULT_LIMIT, DEFAULT_PAGE, FacetCount, Facets, PageRequest, UserFilter, UserPage, UserQuery,
    query_users,
};
pub use self::work_item::{AlreadyCompleted, CompletionEvent, WorkItem, WorkItemId, WorkStatus};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use showcase_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<()> {
///     Err(Error::not_found("Item not found"))
/// }
/// assert!(handler().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
