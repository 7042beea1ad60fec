//! Users API handlers.
//!
//! ```text
//! GET /api/users?page=2&limit=20&search=mario&hobbies=Gaming,Music&nationalities=Italian
//! GET /api/users?filter={"nationality":"Italian","hobbies":["Gaming"]}
//! ```

use actix_web::{get, web};
use serde::Deserialize;
use serde_json::json;

use crate::domain::{
    DEFAULT_LIMIT, DEFAULT_PAGE, Error, PageRequest, UserFilter, UserPage, UserQuery,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Raw query string for `GET /api/users`.
///
/// Every field is kept as text so malformed numbers fall back to defaults
/// instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct UsersQueryParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub search: Option<String>,
    /// Comma-separated hobby labels; all must match.
    pub hobbies: Option<String>,
    /// Comma-separated nationality labels; any may match.
    pub nationalities: Option<String>,
    /// Legacy JSON filter: `{"nationality": "...", "hobbies": ["..."]}`.
    pub filter: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct LegacyFilter {
    #[serde(default)]
    nationality: Option<String>,
    #[serde(default)]
    hobbies: Vec<String>,
}

fn parse_positive(raw: Option<&str>, default: usize) -> usize {
    match raw.map(str::trim).map(str::parse::<i64>) {
        Some(Ok(value)) => usize::try_from(value.max(1)).unwrap_or(default),
        _ => default,
    }
}

fn split_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .map(str::to_owned)
            .collect()
    })
    .unwrap_or_default()
}

fn parse_legacy_filter(raw: Option<&str>) -> Result<LegacyFilter, Error> {
    match raw.map(str::trim).filter(|value| !value.is_empty()) {
        None => Ok(LegacyFilter::default()),
        Some(value) => serde_json::from_str(value).map_err(|err| {
            Error::invalid_request("filter must be a JSON object")
                .with_details(json!({ "field": "filter", "reason": err.to_string() }))
        }),
    }
}

impl UsersQueryParams {
    /// Translate raw parameters into a domain query.
    ///
    /// # Examples
    /// ```
    /// use showcase_backend::inbound::http::users::UsersQueryParams;
    ///
    /// let params = UsersQueryParams {
    ///     page: Some("0".into()),
    ///     limit: Some("abc".into()),
    ///     ..UsersQueryParams::default()
    /// };
    /// let query = params.into_query().expect("valid query");
    /// assert_eq!(query.page.page(), 1);
    /// assert_eq!(query.page.limit(), 20);
    /// ```
    pub fn into_query(self) -> Result<UserQuery, Error> {
        let legacy = parse_legacy_filter(self.filter.as_deref())?;

        let mut hobbies = split_list(self.hobbies.as_deref());
        hobbies.extend(legacy.hobbies);
        let mut nationalities = split_list(self.nationalities.as_deref());
        nationalities.extend(legacy.nationality);

        let filter = UserFilter::default()
            .with_search(self.search.unwrap_or_default())
            .with_hobbies(hobbies)
            .with_nationalities(nationalities);
        let page = PageRequest::new(
            parse_positive(self.page.as_deref(), DEFAULT_PAGE),
            parse_positive(self.limit.as_deref(), DEFAULT_LIMIT),
        );
        Ok(UserQuery { filter, page })
    }
}

/// List one page of the directory with facet counts.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use showcase_backend::inbound::http::users::list_users;
///
/// let app = App::new().service(web::scope("/api").service(list_users));
/// ```
#[get("/users")]
pub async fn list_users(
    state: web::Data<HttpState>,
    params: web::Query<UsersQueryParams>,
) -> ApiResult<web::Json<UserPage>> {
    let query = params.into_inner().into_query()?;
    let page = state.users.query_users(&query).await?;
    Ok(web::Json(page))
}
