//! Tests for the directory filter and paginate engine.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;
use uuid::Uuid;

#[fixture]
fn seeded_users() -> Vec<User> {
    vec![
        User::new(Uuid::from_u128(1), "John", "Doe")
            .with_age(30)
            .with_nationality("USA")
            .with_hobbies(["Reading", "Gaming"]),
        User::new(Uuid::from_u128(2), "Jane", "Smith")
            .with_age(25)
            .with_nationality("Italian")
            .with_hobbies(["Cooking", "Traveling"]),
        User::new(Uuid::from_u128(3), "Mario", "Rossi")
            .with_age(35)
            .with_nationality("Italian")
            .with_hobbies(["Gaming", "Music"]),
    ]
}

fn query(filter: UserFilter) -> UserQuery {
    UserQuery {
        filter,
        page: PageRequest::default(),
    }
}

fn names(page: &UserPage) -> Vec<String> {
    page.data.iter().map(User::full_name).collect()
}

#[rstest]
#[case("mario", vec!["Mario Rossi"])]
#[case("MARIO", vec!["Mario Rossi"])]
#[case("rossi mario", vec!["Mario Rossi"])]
#[case("  jane   smith ", vec!["Jane Smith"])]
#[case("o", vec!["John Doe", "Mario Rossi"])]
#[case("mario doe", vec![])]
fn search_matches_every_token(
    seeded_users: Vec<User>,
    #[case] search: &str,
    #[case] expected: Vec<&str>,
) {
    let page = query_users(&seeded_users, &query(UserFilter::default().with_search(search)));
    assert_eq!(names(&page), expected);
}

#[rstest]
fn empty_search_returns_everyone(seeded_users: Vec<User>) {
    let page = query_users(&seeded_users, &query(UserFilter::default().with_search("   ")));
    assert_eq!(page.total, 3);
}

#[rstest]
fn nationality_filter_accepts_any_listed(seeded_users: Vec<User>) {
    let italian = query_users(
        &seeded_users,
        &query(UserFilter::default().with_nationalities(["Italian"])),
    );
    assert_eq!(italian.total, 2);
    assert!(italian.data.iter().all(|user| user.nationality() == "Italian"));

    let either = query_users(
        &seeded_users,
        &query(UserFilter::default().with_nationalities(["Italian", "USA"])),
    );
    assert_eq!(either.total, 3);
}

#[rstest]
fn hobby_filter_requires_all_listed(seeded_users: Vec<User>) {
    let gaming = query_users(
        &seeded_users,
        &query(UserFilter::default().with_hobbies(["Gaming"])),
    );
    assert_eq!(names(&gaming), vec!["John Doe", "Mario Rossi"]);

    let both = query_users(
        &seeded_users,
        &query(UserFilter::default().with_hobbies(["Gaming", "Music"])),
    );
    assert_eq!(names(&both), vec!["Mario Rossi"]);
}

#[rstest]
fn blank_labels_are_ignored() {
    let filter = UserFilter::default()
        .with_hobbies(["", " Gaming "])
        .with_nationalities(["  "]);
    assert_eq!(filter.hobbies(), ["Gaming".to_owned()]);
    assert!(filter.nationalities().is_empty());
}

#[rstest]
fn facets_count_the_filtered_set(seeded_users: Vec<User>) {
    let page = query_users(
        &seeded_users,
        &query(UserFilter::default().with_hobbies(["Gaming"])),
    );
    let value = serde_json::to_value(&page.filters).expect("serialise facets");
    assert_eq!(
        value,
        json!({
            "hobbies": [
                { "label": "Reading", "count": 1 },
                { "label": "Gaming", "count": 2 },
                { "label": "Music", "count": 1 }
            ],
            "nationalities": [
                { "label": "USA", "count": 1 },
                { "label": "Italian", "count": 1 }
            ]
        })
    );
}

#[rstest]
fn facets_cover_all_pages(seeded_users: Vec<User>) {
    let page = query_users(
        &seeded_users,
        &UserQuery {
            filter: UserFilter::default(),
            page: PageRequest::new(1, 1),
        },
    );
    assert_eq!(page.data.len(), 1);
    let italian = page
        .filters
        .nationalities
        .iter()
        .find(|facet| facet.label == "Italian")
        .map(|facet| facet.count);
    assert_eq!(italian, Some(2));
}

#[rstest]
#[case(1, 2, 2)]
#[case(2, 2, 1)]
#[case(3, 2, 0)]
#[case(1, 20, 3)]
#[case(4, 1, 0)]
fn page_length_follows_slice_bounds(
    seeded_users: Vec<User>,
    #[case] page: usize,
    #[case] limit: usize,
    #[case] expected_len: usize,
) {
    let result = query_users(
        &seeded_users,
        &UserQuery {
            filter: UserFilter::default(),
            page: PageRequest::new(page, limit),
        },
    );
    let expected = limit.min(result.total.saturating_sub((page - 1) * limit));
    assert_eq!(result.data.len(), expected);
    assert_eq!(result.data.len(), expected_len);
    assert_eq!(result.total_pages, 3usize.div_ceil(limit));
}

#[rstest]
fn no_matches_yield_zero_pages(seeded_users: Vec<User>) {
    let page = query_users(
        &seeded_users,
        &query(UserFilter::default().with_nationalities(["Japanese"])),
    );
    assert_eq!(page.total, 0);
    assert_eq!(page.total_pages, 0);
    assert!(page.data.is_empty());
    assert!(page.filters.hobbies.is_empty());
}

#[rstest]
#[case(0, 0, 1, 1)]
#[case(0, 5, 1, 5)]
#[case(7, 0, 7, 1)]
fn page_request_clamps_to_one(
    #[case] page: usize,
    #[case] limit: usize,
    #[case] expected_page: usize,
    #[case] expected_limit: usize,
) {
    let request = PageRequest::new(page, limit);
    assert_eq!(request.page(), expected_page);
    assert_eq!(request.limit(), expected_limit);
}

#[rstest]
fn huge_pages_do_not_overflow(seeded_users: Vec<User>) {
    let page = query_users(
        &seeded_users,
        &UserQuery {
            filter: UserFilter::default(),
            page: PageRequest::new(usize::MAX, usize::MAX),
        },
    );
    assert!(page.data.is_empty());
    assert_eq!(page.total, 3);
}

#[rstest]
fn page_serialises_with_camel_case_totals(seeded_users: Vec<User>) {
    let page = query_users(&seeded_users, &UserQuery::default());
    let value = serde_json::to_value(&page).expect("serialise page");
    assert_eq!(value["totalPages"], json!(1));
    assert_eq!(value["page"], json!(1));
    assert_eq!(value["limit"], json!(20));
    assert_eq!(value["data"][0]["first_name"], json!("John"));
}

#[rstest]
fn matches_combines_all_criteria(seeded_users: Vec<User>) {
    let filter = UserFilter::default()
        .with_search("rossi")
        .with_hobbies(["Music"])
        .with_nationalities(["Italian"]);
    let matched: Vec<_> = seeded_users.iter().filter(|u| filter.matches(u)).collect();
    assert_eq!(matched.len(), 1);
}
