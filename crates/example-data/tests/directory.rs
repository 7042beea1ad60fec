//! Public-API properties of the generated directory.

use example_data::{HOBBIES, generate_example_users, generate_paragraphs};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rstest::rstest;

#[rstest]
#[case(5, 20)]
#[case(1, 100)]
fn larger_directories_extend_smaller_ones(#[case] small: usize, #[case] large: usize) {
    let prefix = generate_example_users(9, small).expect("small directory");
    let full = generate_example_users(9, large).expect("large directory");
    assert_eq!(full.get(..small), Some(prefix.as_slice()));
}

#[rstest]
fn hobbies_come_from_the_catalogue() {
    let users = generate_example_users(3, 200).expect("directory");
    assert!(
        users
            .iter()
            .flat_map(|user| user.hobbies.iter())
            .all(|hobby| HOBBIES.contains(&hobby.as_str()))
    );
}

#[rstest]
fn seeded_text_is_reproducible() {
    let first = generate_paragraphs(&mut ChaCha8Rng::seed_from_u64(5), 4).expect("text");
    let second = generate_paragraphs(&mut ChaCha8Rng::seed_from_u64(5), 4).expect("text");
    assert_eq!(first, second);
    assert_eq!(first.lines().count(), 4);
}
