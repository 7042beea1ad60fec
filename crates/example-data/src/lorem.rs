//! Lorem paragraph rendering.

use fake::Fake;
use fake::faker::lorem::raw::Paragraphs;
use fake::locales::EN;
use rand::Rng;

use crate::error::GenerationError;

/// Upper bound on paragraphs rendered by a single call.
pub const MAX_PARAGRAPHS: usize = 256;

/// Renders `count` lorem paragraphs separated by newlines.
///
/// Each paragraph occupies exactly one line: the sentence breaks `fake` puts
/// inside a paragraph are collapsed to single spaces.
///
/// The caller owns the RNG, so seeded generators give reproducible text and
/// thread-local generators give fresh text per call.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidParagraphCount`] when `count` is zero or
/// exceeds [`MAX_PARAGRAPHS`].
///
/// # Example
///
/// ```
/// use example_data::generate_paragraphs;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(3);
/// let text = generate_paragraphs(&mut rng, 3).expect("rendered");
/// assert_eq!(text.lines().count(), 3);
/// ```
pub fn generate_paragraphs<R>(rng: &mut R, count: usize) -> Result<String, GenerationError>
where
    R: Rng + ?Sized,
{
    if count == 0 || count > MAX_PARAGRAPHS {
        return Err(GenerationError::InvalidParagraphCount {
            requested: count,
            max: MAX_PARAGRAPHS,
        });
    }

    let paragraphs: Vec<String> = Paragraphs(EN, count..count + 1).fake_with_rng(rng);
    Ok(paragraphs
        .iter()
        .map(|paragraph| single_line(paragraph))
        .collect::<Vec<_>>()
        .join("\n"))
}

fn single_line(paragraph: &str) -> String {
    paragraph.split_whitespace().collect::<Vec<_>>().join(" ")
}
