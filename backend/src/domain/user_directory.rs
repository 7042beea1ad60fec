//! Filter and paginate engine for the user directory.
//!
//! [`query_users`] is a pure function over the generated collection. Filters
//! apply in a fixed order (search, hobbies, nationalities), facet counts are
//! computed over the survivors, and only then is the page sliced. Results keep
//! generation order, so pagination is stable for the lifetime of the process.

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::User;

/// Page used when the request omits or garbles `page`.
pub const DEFAULT_PAGE: usize = 1;

/// Page size used when the request omits or garbles `limit`.
pub const DEFAULT_LIMIT: usize = 20;

/// Filter criteria for the directory.
///
/// # Examples
/// ```
/// use showcase_backend::domain::UserFilter;
///
/// let filter = UserFilter::default()
///     .with_search("mario rossi")
///     .with_nationalities(["Italian"]);
/// assert_eq!(filter.search_tokens(), vec!["mario", "rossi"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilter {
    search: String,
    hobbies: Vec<String>,
    nationalities: Vec<String>,
}

impl UserFilter {
    /// Set the free-text search term.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Require every listed hobby. Blank labels are dropped.
    pub fn with_hobbies<I, S>(mut self, hobbies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hobbies = non_blank(hobbies);
        self
    }

    /// Accept any of the listed nationalities. Blank labels are dropped.
    pub fn with_nationalities<I, S>(mut self, nationalities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.nationalities = non_blank(nationalities);
        self
    }

    pub fn hobbies(&self) -> &[String] {
        &self.hobbies
    }

    pub fn nationalities(&self) -> &[String] {
        &self.nationalities
    }

    /// Lower-cased, whitespace-separated search tokens.
    pub fn search_tokens(&self) -> Vec<String> {
        self.search
            .split_whitespace()
            .map(str::to_lowercase)
            .collect()
    }

    /// Whether `user` survives every active criterion.
    pub fn matches(&self, user: &User) -> bool {
        self.matches_search(user, &self.search_tokens())
            && self.matches_hobbies(user)
            && self.matches_nationality(user)
    }

    fn matches_search(&self, user: &User, tokens: &[String]) -> bool {
        if tokens.is_empty() {
            return true;
        }
        let name = user.full_name().to_lowercase();
        tokens.iter().all(|token| name.contains(token.as_str()))
    }

    fn matches_hobbies(&self, user: &User) -> bool {
        self.hobbies.iter().all(|hobby| user.has_hobby(hobby))
    }

    fn matches_nationality(&self, user: &User) -> bool {
        self.nationalities.is_empty()
            || self
                .nationalities
                .iter()
                .any(|nationality| nationality == user.nationality())
    }
}

fn non_blank<I, S>(labels: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    labels
        .into_iter()
        .map(Into::into)
        .map(|label| label.trim().to_owned())
        .filter(|label| !label.is_empty())
        .collect()
}

/// One-based page selection; both values are at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    limit: usize,
}

impl PageRequest {
    /// Build a page request, clamping zero values up to one.
    pub fn new(page: usize, limit: usize) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_LIMIT)
    }
}

/// A full directory query: filter criteria plus page selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserQuery {
    pub filter: UserFilter,
    pub page: PageRequest,
}

/// Number of filtered users carrying a label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetCount {
    pub label: String,
    pub count: usize,
}

/// Facet counts over the filtered set, labels in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Facets {
    pub hobbies: Vec<FacetCount>,
    pub nationalities: Vec<FacetCount>,
}

/// One page of directory results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPage {
    pub data: Vec<User>,
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub total_pages: usize,
    pub filters: Facets,
}

/// Ordered label counter preserving first-seen order.
#[derive(Default)]
struct FacetCounter {
    counts: Vec<FacetCount>,
    index: HashMap<String, usize>,
}

impl FacetCounter {
    fn record(&mut self, label: &str) {
        let next = self.counts.len();
        let position = *self.index.entry(label.to_owned()).or_insert(next);
        match self.counts.get_mut(position) {
            Some(entry) => entry.count += 1,
            None => self.counts.push(FacetCount {
                label: label.to_owned(),
                count: 1,
            }),
        }
    }

    fn finish(self) -> Vec<FacetCount> {
        self.counts
    }
}

fn facets_for(users: &[&User]) -> Facets {
    let mut hobbies = FacetCounter::default();
    let mut nationalities = FacetCounter::default();
    for user in users {
        for hobby in user.hobbies() {
            hobbies.record(hobby);
        }
        nationalities.record(user.nationality());
    }
    Facets {
        hobbies: hobbies.finish(),
        nationalities: nationalities.finish(),
    }
}

/// Filter, count, and paginate `users`.
///
/// # Examples
/// ```
/// use showcase_backend::domain::{PageRequest, User, UserFilter, UserQuery, query_users};
/// use uuid::Uuid;
///
/// let users = vec![
///     User::new(Uuid::nil(), "Jane", "Smith").with_nationality("Italian"),
///     User::new(Uuid::nil(), "John", "Doe").with_nationality("USA"),
/// ];
/// let query = UserQuery {
///     filter: UserFilter::default().with_nationalities(["Italian"]),
///     page: PageRequest::new(1, 10),
/// };
/// let page = query_users(&users, &query);
/// assert_eq!(page.total, 1);
/// assert_eq!(page.total_pages, 1);
/// ```
pub fn query_users(users: &[User], query: &UserQuery) -> UserPage {
    let tokens = query.filter.search_tokens();
    let matching: Vec<&User> = users
        .iter()
        .filter(|user| query.filter.matches_search(user, &tokens))
        .filter(|user| query.filter.matches_hobbies(user))
        .filter(|user| query.filter.matches_nationality(user))
        .collect();

    let total = matching.len();
    let filters = facets_for(&matching);
    let data = matching
        .into_iter()
        .skip(query.page.offset())
        .take(query.page.limit())
        .cloned()
        .collect();

    UserPage {
        data,
        total,
        page: query.page.page(),
        limit: query.page.limit(),
        total_pages: total.div_ceil(query.page.limit()),
        filters,
    }
}

#[cfg(test)]
mod tests;
