//! Test utilities shared by the crate's unit tests.

pub mod queue;
