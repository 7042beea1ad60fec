//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::ports::{
    FixtureQueueCommand, FixtureQueueQuery, FixtureTextGenerator, FixtureUsersQuery,
    QueueCommand, QueueQuery, TextGenerator, UsersQuery,
};

/// Pacing and size of the character stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamSettings {
    /// Delay before each emitted character.
    pub interval: Duration,
    /// Paragraphs of lorem text per stream.
    pub paragraphs: usize,
}

impl Default for StreamSettings {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(500),
            paragraphs: 32,
        }
    }
}

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub users: Arc<dyn UsersQuery>,
    pub queue: Arc<dyn QueueCommand>,
    pub queue_query: Arc<dyn QueueQuery>,
    pub text: Arc<dyn TextGenerator>,
}

impl Default for HttpStatePorts {
    fn default() -> Self {
        Self {
            users: Arc::new(FixtureUsersQuery),
            queue: Arc::new(FixtureQueueCommand),
            queue_query: Arc::new(FixtureQueueQuery),
            text: Arc::new(FixtureTextGenerator),
        }
    }
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UsersQuery>,
    pub queue: Arc<dyn QueueCommand>,
    pub queue_query: Arc<dyn QueueQuery>,
    pub text: Arc<dyn TextGenerator>,
    pub stream: StreamSettings,
}

impl HttpState {
    /// Construct state from a ports bundle and stream pacing.
    ///
    /// # Examples
    /// ```
    /// use showcase_backend::inbound::http::state::{HttpState, HttpStatePorts, StreamSettings};
    ///
    /// let state = HttpState::new(HttpStatePorts::default(), StreamSettings::default());
    /// assert_eq!(state.stream.paragraphs, 32);
    /// ```
    pub fn new(ports: HttpStatePorts, stream: StreamSettings) -> Self {
        let HttpStatePorts {
            users,
            queue,
            queue_query,
            text,
        } = ports;
        Self {
            users,
            queue,
            queue_query,
            text,
            stream,
        }
    }
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports, StreamSettings::default())
    }
}
