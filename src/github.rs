//! GitHub user data access.
//!
//! Builds the request URL for the two supported listings (default users vs.
//! search-by-term), performs the request and normalizes the response shape:
//! `GET /users` returns a top-level JSON array while `GET /search/users`
//! wraps the users in an `items` field. All failures are converted to
//! [`FetchError`] here; nothing transport-specific leaves this module.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::FetchError;

/// Default API root of the public GitHub REST API.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Read-only projection of an upstream user record. Field names follow the
/// GitHub API; the numeric `id` is the only identity.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub id: u64,
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    items: Vec<User>,
}

/// HTTP client bound to an API base URL.
///
/// Cloning is cheap (`reqwest::Client` is reference-counted), which lets the
/// event loop hand a copy to every spawned request.
#[derive(Clone)]
pub struct GithubClient {
    http: reqwest::Client,
    base: String,
}

impl GithubClient {
    /// Build a client with the headers GitHub expects and an optional bearer
    /// token to raise the rate limit.
    pub fn new(base: impl Into<String>, token: Option<&str>) -> Result<Self, FetchError> {
        use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("ghuser-search"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        if let Some(token) = token {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| FetchError::Network(format!("invalid token value: {e}")))?;
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self { http, base: base.into() })
    }

    /// URL for a query: the default listing when the term is empty, the
    /// search endpoint (with the term percent-encoded) otherwise.
    pub fn endpoint_for(&self, query: &str) -> String {
        if query.is_empty() {
            format!("{}/users", self.base)
        } else {
            format!("{}/search/users?q={}", self.base, urlencoding::encode(query))
        }
    }

    /// Issue one request for `query` and return the normalized user list.
    pub async fn fetch_users(&self, query: &str) -> Result<Vec<User>, FetchError> {
        let url = self.endpoint_for(query);
        debug!(%url, "issuing user request");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "user request failed");
            return Err(FetchError::Http {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;

        let users = extract_users(!query.is_empty(), body)?;
        debug!(%url, count = users.len(), "user request succeeded");
        Ok(users)
    }
}

/// Pull the user array out of a response body: search results are wrapped in
/// `items`, the default listing is the array itself.
pub fn extract_users(is_search: bool, body: serde_json::Value) -> Result<Vec<User>, FetchError> {
    if is_search {
        let response: SearchResponse =
            serde_json::from_value(body).map_err(|e| FetchError::Decode(e.to_string()))?;
        Ok(response.items)
    } else {
        serde_json::from_value(body).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client() -> GithubClient {
        GithubClient::new(DEFAULT_API_BASE, None).unwrap()
    }

    #[test]
    fn empty_query_targets_the_default_listing() {
        assert_eq!(client().endpoint_for(""), "https://api.github.com/users");
    }

    #[test]
    fn nonempty_query_targets_the_search_endpoint() {
        assert_eq!(
            client().endpoint_for("octo"),
            "https://api.github.com/search/users?q=octo"
        );
    }

    #[test]
    fn search_terms_are_percent_encoded() {
        assert_eq!(
            client().endpoint_for("mona lisa"),
            "https://api.github.com/search/users?q=mona%20lisa"
        );
    }

    #[test]
    fn default_listing_is_a_top_level_array() {
        let body = json!([
            { "id": 1, "login": "mojombo", "avatar_url": "a", "html_url": "h" },
            { "id": 2, "login": "defunkt", "avatar_url": "a", "html_url": "h" }
        ]);
        let users = extract_users(false, body).unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].login, "mojombo");
    }

    #[test]
    fn search_results_are_wrapped_in_items() {
        let body = json!({
            "total_count": 1,
            "items": [
                { "id": 583231, "login": "octocat", "avatar_url": "a", "html_url": "h" }
            ]
        });
        let users = extract_users(true, body).unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id, 583231);
    }

    #[test]
    fn search_body_without_items_is_a_decode_error() {
        let err = extract_users(true, json!({ "message": "Validation Failed" })).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }
}
