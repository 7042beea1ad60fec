//! Generated user record type.
//!
//! This type is independent of backend domain types; the backend converts it
//! into its own `User` at startup.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A generated demo user.
///
/// # Example
///
/// ```
/// use example_data::ExampleUser;
/// use uuid::Uuid;
///
/// let user = ExampleUser {
///     id: Uuid::nil(),
///     first_name: "Ada".to_owned(),
///     last_name: "Lovelace".to_owned(),
///     age: 36,
///     nationality: "British".to_owned(),
///     hobbies: vec!["Writing".to_owned()],
///     avatar: "https://i.pravatar.cc/150?u=ada".to_owned(),
/// };
///
/// assert_eq!(user.nationality, "British");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleUser {
    /// Unique identifier for the user.
    pub id: Uuid,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Age in years.
    pub age: u8,
    /// Nationality label drawn from [`crate::NATIONALITIES`].
    pub nationality: String,
    /// Distinct hobby labels drawn from [`crate::HOBBIES`].
    pub hobbies: Vec<String>,
    /// Avatar image URL.
    pub avatar: String,
}
