//! Deterministic user generation from a numeric seed.
//!
//! The same seed and count always produce identical output, which keeps the
//! directory stable across requests and lets tests pin expectations.

use fake::Fake;
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

use crate::catalogue::{HOBBIES, NATIONALITIES};
use crate::error::GenerationError;
use crate::seed::ExampleUser;

/// Upper bound on the number of users a single call may generate.
pub const MAX_USER_COUNT: usize = 100_000;

/// Youngest age assigned to a generated user.
const MIN_AGE: u8 = 18;

/// Oldest age assigned to a generated user.
const MAX_AGE: u8 = 100;

/// Minimum number of hobbies assigned to a user.
const MIN_HOBBIES: usize = 1;

/// Maximum number of hobbies assigned to a user.
const MAX_HOBBIES: usize = 5;

/// Generates `count` demo users from `seed`.
///
/// Every user has:
///
/// - a UUID derived from the seeded RNG
/// - English first and last names
/// - an age between 18 and 100 inclusive
/// - one nationality from [`NATIONALITIES`]
/// - between one and five distinct hobbies from [`HOBBIES`]
/// - an avatar URL keyed by the user's id
///
/// # Errors
///
/// Returns [`GenerationError::TooManyUsers`] when `count` exceeds
/// [`MAX_USER_COUNT`].
///
/// # Example
///
/// ```
/// use example_data::{NATIONALITIES, generate_example_users};
///
/// let users = generate_example_users(7, 25).expect("generated");
/// assert_eq!(users.len(), 25);
/// assert!(users.iter().all(|user| NATIONALITIES.contains(&user.nationality.as_str())));
/// ```
pub fn generate_example_users(seed: u64, count: usize) -> Result<Vec<ExampleUser>, GenerationError> {
    if count > MAX_USER_COUNT {
        return Err(GenerationError::TooManyUsers {
            requested: count,
            max: MAX_USER_COUNT,
        });
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Ok((0..count).map(|_| generate_single_user(&mut rng)).collect())
}

fn generate_single_user(rng: &mut ChaCha8Rng) -> ExampleUser {
    let id = Uuid::from_u128(rng.random());
    let first_name: String = FirstName(EN).fake_with_rng(rng);
    let last_name: String = LastName(EN).fake_with_rng(rng);
    let age = rng.random_range(MIN_AGE..=MAX_AGE);
    let nationality = NATIONALITIES
        .choose(rng)
        .map_or_else(String::new, |label| (*label).to_owned());
    let hobbies = select_hobbies(rng);

    ExampleUser {
        id,
        first_name,
        last_name,
        age,
        nationality,
        hobbies,
        avatar: format!("https://i.pravatar.cc/150?u={id}"),
    }
}

/// Shuffles the hobby catalogue and keeps a random-length prefix.
fn select_hobbies(rng: &mut ChaCha8Rng) -> Vec<String> {
    let count = rng.random_range(MIN_HOBBIES..=MAX_HOBBIES);
    let mut shuffled = HOBBIES.to_vec();
    shuffled.shuffle(rng);
    shuffled
        .into_iter()
        .take(count)
        .map(str::to_owned)
        .collect()
}
