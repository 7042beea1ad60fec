//! Generated user directory backing the `UsersQuery` port.

use std::sync::Arc;

use async_trait::async_trait;
use example_data::{GenerationError, generate_example_users};
use tracing::info;

use crate::domain::ports::UsersQuery;
use crate::domain::{Error, User, UserPage, UserQuery, query_users};

/// Immutable user collection shared by every HTTP worker.
#[derive(Debug, Clone)]
pub struct InMemoryUserDirectory {
    users: Arc<[User]>,
}

impl InMemoryUserDirectory {
    /// Wrap an existing collection, keeping its order.
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: users.into(),
        }
    }

    /// Generate `count` users from `seed`.
    ///
    /// # Examples
    /// ```
    /// use showcase_backend::outbound::memory::InMemoryUserDirectory;
    ///
    /// let directory = InMemoryUserDirectory::generate(7, 25).expect("generated");
    /// assert_eq!(directory.len(), 25);
    /// ```
    pub fn generate(seed: u64, count: usize) -> Result<Self, GenerationError> {
        let users: Vec<User> = generate_example_users(seed, count)?
            .into_iter()
            .map(User::from)
            .collect();
        info!(seed, count = users.len(), "user directory generated");
        Ok(Self::new(users))
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UsersQuery for InMemoryUserDirectory {
    async fn query_users(&self, query: &UserQuery) -> Result<UserPage, Error> {
        Ok(query_users(&self.users, query))
    }
}
