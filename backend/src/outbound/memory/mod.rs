//! In-memory adapters. State lives for the lifetime of the process.

mod users;
mod work_items;

pub use users::InMemoryUserDirectory;
pub use work_items::InMemoryWorkItemRepository;
