//! Server settings loaded via OrthoConfig.
//!
//! Numeric settings carry defaults so an empty environment still loads; CLI
//! flags and `SHOWCASE_*` environment variables only name what they override.

use std::time::Duration;

use example_data::{MAX_PARAGRAPHS, MAX_USER_COUNT};
use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::QueueWorkerConfig;
use crate::inbound::http::state::StreamSettings;

const DEFAULT_HOST: &str = "0.0.0.0";

/// Settings rejected before the server starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("user_count must be at most {max}, got {requested}")]
    TooManyUsers { requested: usize, max: usize },
    #[error("{field} must be between 1 and {max}, got {requested}")]
    ParagraphCount {
        field: &'static str,
        requested: usize,
        max: usize,
    },
    #[error("worker_min_delay_ms ({min}) must not exceed worker_max_delay_ms ({max})")]
    CooldownRange { min: u64, max: u64 },
}

/// Runtime configuration for the showcase server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SHOWCASE")]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    #[ortho_config(default = 3000)]
    pub port: u16,
    /// Number of demo users generated at startup.
    #[ortho_config(default = 100)]
    pub user_count: usize,
    /// Seed for the user directory; random per process when absent.
    pub user_seed: Option<u64>,
    /// Pause between streamed characters, in milliseconds.
    #[ortho_config(default = 500)]
    pub stream_interval_ms: u64,
    /// Paragraphs generated per text stream.
    #[ortho_config(default = 32)]
    pub stream_paragraphs: usize,
    /// Paragraphs attached to each completed work item.
    #[ortho_config(default = 3)]
    pub result_paragraphs: usize,
    /// Lower bound of the worker cool-down, in milliseconds.
    #[ortho_config(default = 1000)]
    pub worker_min_delay_ms: u64,
    /// Upper bound (exclusive) of the worker cool-down, in milliseconds.
    #[ortho_config(default = 3000)]
    pub worker_max_delay_ms: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: None,
            port: 3000,
            user_count: 100,
            user_seed: None,
            stream_interval_ms: 500,
            stream_paragraphs: 32,
            result_paragraphs: 3,
            worker_min_delay_ms: 1000,
            worker_max_delay_ms: 3000,
        }
    }
}

impl ServerSettings {
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn user_count(&self) -> usize {
        self.user_count
    }

    /// Return the configured seed or draw a fresh one.
    pub fn user_seed(&self) -> u64 {
        self.user_seed.unwrap_or_else(rand::random)
    }

    /// Stream pacing derived from the interval and paragraph settings.
    pub fn stream_settings(&self) -> StreamSettings {
        StreamSettings {
            interval: Duration::from_millis(self.stream_interval_ms),
            paragraphs: self.stream_paragraphs,
        }
    }

    /// Worker result size and cool-down bounds.
    pub fn worker_config(&self) -> QueueWorkerConfig {
        QueueWorkerConfig {
            result_paragraphs: self.result_paragraphs,
            min_cooldown: Duration::from_millis(self.worker_min_delay_ms),
            max_cooldown: Duration::from_millis(self.worker_max_delay_ms),
        }
    }

    /// Reject settings the generators or the worker cannot honour.
    ///
    /// # Examples
    /// ```
    /// use showcase_backend::server::ServerSettings;
    ///
    /// let settings = ServerSettings {
    ///     worker_min_delay_ms: 5,
    ///     worker_max_delay_ms: 1,
    ///     ..ServerSettings::default()
    /// };
    /// assert!(settings.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), SettingsError> {
        let requested = self.user_count();
        if requested > MAX_USER_COUNT {
            return Err(SettingsError::TooManyUsers {
                requested,
                max: MAX_USER_COUNT,
            });
        }

        let stream = self.stream_settings();
        let worker = self.worker_config();
        for (field, count) in [
            ("stream_paragraphs", stream.paragraphs),
            ("result_paragraphs", worker.result_paragraphs),
        ] {
            if count == 0 || count > MAX_PARAGRAPHS {
                return Err(SettingsError::ParagraphCount {
                    field,
                    requested: count,
                    max: MAX_PARAGRAPHS,
                });
            }
        }

        let (min, max) = (self.worker_min_delay_ms, self.worker_max_delay_ms);
        if min > max {
            return Err(SettingsError::CooldownRange { min, max });
        }
        Ok(())
    }
}
