//! Deterministic demo data for the showcase backend.
//!
//! This crate produces the in-memory user directory served by the backend and
//! the lorem text used by the streaming endpoint and the task queue worker. It
//! is independent of backend domain types so generation can be exercised on
//! its own.
//!
//! # Overview
//!
//! - [`generate_example_users`] builds a reproducible set of users from a
//!   numeric seed.
//! - [`generate_paragraphs`] renders lorem paragraphs from any RNG.
//! - [`HOBBIES`] and [`NATIONALITIES`] are the catalogues users draw from.
//!
//! # Example
//!
//! ```
//! use example_data::generate_example_users;
//!
//! let users = generate_example_users(42, 3).expect("generation succeeds");
//! assert_eq!(users.len(), 3);
//!
//! // Same seed, same directory.
//! assert_eq!(users, generate_example_users(42, 3).expect("generation succeeds"));
//! ```

mod catalogue;
mod error;
mod generator;
mod lorem;
mod seed;

pub use catalogue::{HOBBIES, NATIONALITIES};
pub use error::GenerationError;
pub use generator::{MAX_USER_COUNT, generate_example_users};
pub use lorem::{MAX_PARAGRAPHS, generate_paragraphs};
pub use seed::ExampleUser;
