//! Lorem text adapter backed by the `example-data` crate.

use example_data::generate_paragraphs;

use crate::domain::ports::{TextGenerationError, TextGenerator};

/// Generates fresh lorem text from the thread-local RNG on every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoremTextGenerator;

impl TextGenerator for LoremTextGenerator {
    fn paragraphs(&self, count: usize) -> Result<String, TextGenerationError> {
        generate_paragraphs(&mut rand::rng(), count).map_err(|err| {
            TextGenerationError::InvalidCount {
                requested: count,
                message: err.to_string(),
            }
        })
    }
}
