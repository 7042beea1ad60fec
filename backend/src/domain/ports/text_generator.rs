//! Driven port for generated filler text.

/// Errors raised by text generators.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TextGenerationError {
    /// The paragraph count is outside what the generator supports.
    #[error("cannot generate {requested} paragraphs: {message}")]
    InvalidCount { requested: usize, message: String },
}

/// Source of pseudo-random lorem text.
#[cfg_attr(test, mockall::automock)]
pub trait TextGenerator: Send + Sync {
    /// Produce `count` paragraphs separated by newlines.
    fn paragraphs(&self, count: usize) -> Result<String, TextGenerationError>;
}

/// Generator returning the same sentence for every paragraph.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTextGenerator;

impl FixtureTextGenerator {
    pub const PARAGRAPH: &'static str = "Lorem ipsum dolor sit amet.";
}

impl TextGenerator for FixtureTextGenerator {
    fn paragraphs(&self, count: usize) -> Result<String, TextGenerationError> {
        if count == 0 {
            return Err(TextGenerationError::InvalidCount {
                requested: count,
                message: "at least one paragraph is required".to_owned(),
            });
        }
        Ok(vec![Self::PARAGRAPH; count].join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, 1)]
    #[case(3, 3)]
    fn fixture_emits_requested_paragraphs(#[case] count: usize, #[case] lines: usize) {
        let text = FixtureTextGenerator.paragraphs(count).expect("text");
        assert_eq!(text.lines().count(), lines);
    }

    #[rstest]
    fn fixture_rejects_zero_paragraphs() {
        assert!(FixtureTextGenerator.paragraphs(0).is_err());
    }
}
