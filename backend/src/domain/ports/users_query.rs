//! Driving port for user directory queries.
//!
//! Inbound adapters (HTTP handlers) use this port to page through the
//! directory without knowing where the records live. Production backs it with
//! the generated in-memory collection; tests can use the three-user fixture.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Error, User, UserPage, UserQuery, query_users};

/// Domain use-case port for filtering and paginating users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Return one page of users matching `query`, with facet counts.
    async fn query_users(&self, query: &UserQuery) -> Result<UserPage, Error>;
}

/// Small fixed directory used by handler tests and local wiring.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUsersQuery;

impl FixtureUsersQuery {
    /// The records served by the fixture, in generation order.
    pub fn users() -> Vec<User> {
        vec![
            User::new(Uuid::from_u128(1), "John", "Doe")
                .with_age(30)
                .with_nationality("USA")
                .with_hobbies(["Reading", "Gaming"])
                .with_avatar("avatar1.jpg"),
            User::new(Uuid::from_u128(2), "Jane", "Smith")
                .with_age(25)
                .with_nationality("Italian")
                .with_hobbies(["Cooking", "Traveling"])
                .with_avatar("avatar2.jpg"),
            User::new(Uuid::from_u128(3), "Mario", "Rossi")
                .with_age(35)
                .with_nationality("Italian")
                .with_hobbies(["Gaming", "Music"])
                .with_avatar("avatar3.jpg"),
        ]
    }
}

#[async_trait]
impl UsersQuery for FixtureUsersQuery {
    async fn query_users(&self, query: &UserQuery) -> Result<UserPage, Error> {
        Ok(query_users(&Self::users(), query))
    }
}
