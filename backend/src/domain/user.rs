//! User directory record.
//!
//! Records are generated once at startup and never mutated. Field names stay
//! snake_case on the wire because the directory UI binds to them directly.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A read-only user in the demo directory.
///
/// # Examples
/// ```
/// use showcase_backend::domain::User;
/// use uuid::Uuid;
///
/// let user = User::new(Uuid::nil(), "Mario", "Rossi")
///     .with_age(35)
///     .with_nationality("Italian")
///     .with_hobbies(["Gaming", "Music"]);
/// assert_eq!(user.full_name(), "Mario Rossi");
/// assert!(user.has_hobby("Music"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: Uuid,
    first_name: String,
    last_name: String,
    age: u8,
    nationality: String,
    hobbies: Vec<String>,
    avatar: String,
}

impl User {
    /// Build a user with the given identity; remaining fields start empty.
    pub fn new(id: Uuid, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            age: 0,
            nationality: String::new(),
            hobbies: Vec::new(),
            avatar: String::new(),
        }
    }

    /// Set the age in years.
    pub fn with_age(mut self, age: u8) -> Self {
        self.age = age;
        self
    }

    /// Set the nationality label.
    pub fn with_nationality(mut self, nationality: impl Into<String>) -> Self {
        self.nationality = nationality.into();
        self
    }

    /// Replace the hobby labels.
    pub fn with_hobbies<I, S>(mut self, hobbies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hobbies = hobbies.into_iter().map(Into::into).collect();
        self
    }

    /// Set the avatar URL.
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = avatar.into();
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn age(&self) -> u8 {
        self.age
    }

    pub fn nationality(&self) -> &str {
        &self.nationality
    }

    pub fn hobbies(&self) -> &[String] {
        &self.hobbies
    }

    pub fn avatar(&self) -> &str {
        &self.avatar
    }

    /// First and last name joined by a single space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Whether the user lists `hobby` (exact, case-sensitive label match).
    pub fn has_hobby(&self, hobby: &str) -> bool {
        self.hobbies.iter().any(|own| own == hobby)
    }
}

impl From<example_data::ExampleUser> for User {
    fn from(value: example_data::ExampleUser) -> Self {
        let example_data::ExampleUser {
            id,
            first_name,
            last_name,
            age,
            nationality,
            hobbies,
            avatar,
        } = value;
        Self {
            id,
            first_name,
            last_name,
            age,
            nationality,
            hobbies,
            avatar,
        }
    }
}
