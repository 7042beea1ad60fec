//! Directory queries against the three-user fixture.

use actix_web::{App, test as actix_test, web};
use rstest::rstest;
use serde_json::Value;
use showcase_backend::inbound::http::api_scope;
use showcase_backend::inbound::http::state::{HttpState, HttpStatePorts, StreamSettings};

async fn query(uri: &str) -> Value {
    let state = HttpState::new(HttpStatePorts::default(), StreamSettings::default());
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .service(api_scope()),
    )
    .await;
    actix_test::call_and_read_body_json(&app, actix_test::TestRequest::get().uri(uri).to_request())
        .await
}

fn full_names(body: &Value) -> Vec<String> {
    body["data"]
        .as_array()
        .expect("data array")
        .iter()
        .map(|user| {
            format!(
                "{} {}",
                user["first_name"].as_str().unwrap_or_default(),
                user["last_name"].as_str().unwrap_or_default()
            )
        })
        .collect()
}

#[rstest]
#[case("/api/users?search=mario", &["Mario Rossi"])]
#[case("/api/users?search=rossi%20mario", &["Mario Rossi"])]
#[case("/api/users?nationalities=Italian", &["Jane Smith", "Mario Rossi"])]
#[case("/api/users?hobbies=Gaming", &["John Doe", "Mario Rossi"])]
#[case("/api/users?hobbies=Gaming,Music", &["Mario Rossi"])]
#[case("/api/users?search=zzz", &[])]
#[actix_web::test]
async fn filters_select_expected_users(#[case] uri: &str, #[case] expected: &[&str]) {
    let body = query(uri).await;
    assert_eq!(full_names(&body), expected);
    assert_eq!(body["total"], expected.len());
}

#[rstest]
#[actix_web::test]
async fn facets_describe_the_filtered_set() {
    let body = query("/api/users?nationalities=Italian").await;
    let nationalities = body["filters"]["nationalities"]
        .as_array()
        .expect("nationality facets");
    assert_eq!(nationalities.len(), 1);
    assert_eq!(nationalities[0]["label"], "Italian");
    assert_eq!(nationalities[0]["count"], 2);
}

#[rstest]
#[case(1, 2, 2)]
#[case(2, 2, 1)]
#[case(3, 2, 0)]
#[case(1, 5, 3)]
#[actix_web::test]
async fn page_length_follows_limit(
    #[case] page: usize,
    #[case] limit: usize,
    #[case] expected_len: usize,
) {
    let body = query(&format!("/api/users?page={page}&limit={limit}")).await;
    assert_eq!(body["data"].as_array().map(Vec::len), Some(expected_len));
    assert_eq!(body["total"], 3);
    assert_eq!(body["totalPages"], 3_usize.div_ceil(limit));
}
