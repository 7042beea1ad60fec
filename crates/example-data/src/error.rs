//! Error types for the example-data crate.
//!
//! Generation is pure and infallible for sane inputs; these errors guard the
//! inputs that would otherwise exhaust memory or produce an empty payload.

use thiserror::Error;

/// Errors that can occur while generating demo data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// More users were requested than the generator allows.
    #[error("requested {requested} users but at most {max} can be generated")]
    TooManyUsers {
        /// Number of users requested.
        requested: usize,
        /// Upper bound accepted by the generator.
        max: usize,
    },

    /// Lorem text was requested with a paragraph count outside the accepted range.
    #[error("paragraph count must be between 1 and {max}, got {requested}")]
    InvalidParagraphCount {
        /// Number of paragraphs requested.
        requested: usize,
        /// Upper bound accepted by the generator.
        max: usize,
    },
}
