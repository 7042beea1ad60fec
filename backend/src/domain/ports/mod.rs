//! Domain ports and supporting types for the hexagonal boundary.

mod completion_publisher;
mod queue_command;
mod queue_query;
mod text_generator;
mod users_query;
mod work_item_repository;

#[cfg(test)]
pub use completion_publisher::MockCompletionPublisher;
pub use completion_publisher::{CompletionPublisher, NoOpCompletionPublisher};
#[cfg(test)]
pub use queue_command::MockQueueCommand;
pub use queue_command::{FixtureQueueCommand, QueueCommand};
#[cfg(test)]
pub use queue_query::MockQueueQuery;
pub use queue_query::{FixtureQueueQuery, QueueQuery};
#[cfg(test)]
pub use text_generator::MockTextGenerator;
pub use text_generator::{FixtureTextGenerator, TextGenerationError, TextGenerator};
#[cfg(test)]
pub use users_query::MockUsersQuery;
pub use users_query::{FixtureUsersQuery, UsersQuery};
#[cfg(test)]
pub use work_item_repository::MockWorkItemRepository;
pub use work_item_repository::{WorkItemRepository, WorkItemRepositoryError};
