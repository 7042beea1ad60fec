//! Label catalogues generated users draw from.

/// Hobby labels assigned to generated users.
pub const HOBBIES: [&str; 15] = [
    "Reading",
    "Gaming",
    "Cooking",
    "Photography",
    "Traveling",
    "Painting",
    "Writing",
    "Music",
    "Dancing",
    "Gardening",
    "Sports",
    "Hiking",
    "Yoga",
    "Movies",
    "Chess",
];

/// Nationality labels assigned to generated users.
pub const NATIONALITIES: [&str; 10] = [
    "American",
    "British",
    "Canadian",
    "German",
    "French",
    "Italian",
    "Spanish",
    "Japanese",
    "Chinese",
    "Australian",
];
