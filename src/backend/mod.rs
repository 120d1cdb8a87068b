//! Backend API client
//!
//! Typed wrappers around the backend HTTP service. One method per resource:
//! each issues a single GET against a fixed path, normalizes the response
//! envelope and, for storefront list reads, honors the revalidation window
//! through the in-process cache. There are no retries; transport failures
//! are classified and propagate to the caller.

pub mod envelope;

use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::cache::{CacheLayer, MemoryCache};
use crate::config::BackendConfig;
use crate::models::{ArticleSummary, SessionUser, Supplier, SupplierStatus, TourSearchResult, TourSummary};

pub use envelope::{Envelope, ListPayload};

/// Default number of trending divisions requested for the top page
const DEFAULT_TRENDING_LIMIT: u32 = 6;

/// Default number of latest articles requested for the top page
const DEFAULT_ARTICLE_LIMIT: u32 = 5;

/// Error types for backend requests
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The request exceeded the configured timeout
    #[error("backend request timed out")]
    Timeout,

    /// The backend could not be reached
    #[error("backend service is unreachable")]
    Unavailable,

    /// Any other transport-level failure
    #[error("backend request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-success status
    #[error("backend returned HTTP {status} for {path}")]
    Status { status: u16, path: String },

    /// The response body could not be decoded
    #[error("backend returned an undecodable body: {0}")]
    Decode(String),
}

/// Search parameters for the tour search endpoint
#[derive(Debug, Clone)]
pub struct TourSearchQuery {
    /// Free-text keyword, empty meaning "all tours"
    pub keyword: String,
    /// Page number (1-indexed)
    pub page: u32,
    /// Page size
    pub per_page: u32,
}

/// Client for the backend HTTP service
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: Client,
    base_url: String,
    cache: Arc<MemoryCache>,
    revalidate: Duration,
}

impl BackendClient {
    /// Create a new backend client
    pub fn new(config: &BackendConfig, cache: Arc<MemoryCache>) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("tourhub/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build backend HTTP client")?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            cache,
            revalidate: Duration::from_secs(config.revalidate_seconds),
        })
    }

    /// GET /user/division/trending - trending tour divisions for the top page
    ///
    /// Requests exactly one page with the given limit (default 6). May be
    /// answered from cache for up to the revalidation window.
    pub async fn trending_divisions(
        &self,
        limit: Option<u32>,
    ) -> Result<Vec<TourSummary>, BackendError> {
        let limit = limit.unwrap_or(DEFAULT_TRENDING_LIMIT);
        self.cached_list("/user/division/trending", &[("limit", limit.to_string())])
            .await
    }

    /// GET /user/article/latest - latest travel articles for the top page
    pub async fn latest_articles(
        &self,
        limit: Option<u32>,
    ) -> Result<Vec<ArticleSummary>, BackendError> {
        let limit = limit.unwrap_or(DEFAULT_ARTICLE_LIMIT);
        self.cached_list("/user/article/latest", &[("limit", limit.to_string())])
            .await
    }

    /// GET /user/tour/search - keyword search with pagination
    ///
    /// Search is never cached; each request reflects the live index.
    pub async fn search_tours(
        &self,
        query: &TourSearchQuery,
    ) -> Result<TourSearchResult, BackendError> {
        let params = [
            ("keyword", query.keyword.clone()),
            ("page", query.page.to_string()),
            ("per_page", query.per_page.to_string()),
        ];
        let payload: Envelope<TourSearchResult> =
            self.get_json("/user/tour/search", &params).await?;
        Ok(payload.into_inner())
    }

    /// GET /user/booking - bookings of the signed-in user
    pub async fn user_bookings(&self, user_id: i64) -> Result<Vec<TourSummary>, BackendError> {
        let payload: ListPayload<TourSummary> = self
            .get_json("/user/booking", &[("user_id", user_id.to_string())])
            .await?;
        Ok(payload.into_items())
    }

    /// GET /admin/supplier - supplier listing for the admin screens
    ///
    /// Never cached; admin screens must reflect live state.
    pub async fn suppliers(
        &self,
        status: Option<SupplierStatus>,
    ) -> Result<Vec<Supplier>, BackendError> {
        let params: Vec<(&str, String)> = match status {
            Some(status) => vec![("status", status.to_string())],
            None => Vec::new(),
        };
        let payload: ListPayload<Supplier> = self.get_json("/admin/supplier", &params).await?;
        Ok(payload.into_items())
    }

    /// POST /auth/login - verify credentials against the backend
    ///
    /// Returns the account profile on success and `None` when the backend
    /// rejects the credentials.
    pub async fn verify_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<SessionUser>, BackendError> {
        let url = format!("{}/auth/login", self.base_url);
        debug!(email = %email, "Verifying credentials against backend");

        let response = self
            .http
            .post(&url)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(classify_transport)?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Ok(None),
            status if status.is_success() => {
                let payload: Envelope<SessionUser> = response
                    .json()
                    .await
                    .map_err(|e| BackendError::Decode(e.to_string()))?;
                Ok(Some(payload.into_inner()))
            }
            status => Err(BackendError::Status {
                status: status.as_u16(),
                path: "/auth/login".to_string(),
            }),
        }
    }

    /// Fetch a list resource through the revalidation cache.
    ///
    /// Within the revalidation window a repeated read for the same
    /// path+query is served from cache and issues no backend request.
    async fn cached_list<T>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<Vec<T>, BackendError>
    where
        T: DeserializeOwned + Serialize + Send + Sync,
    {
        let key = cache_key(path, params);

        match self.cache.get::<Vec<T>>(&key).await {
            Ok(Some(hit)) => {
                debug!(key = %key, "Serving backend list from revalidation cache");
                return Ok(hit);
            }
            Ok(None) => {}
            Err(e) => warn!(key = %key, error = %e, "Revalidation cache read failed"),
        }

        let payload: ListPayload<T> = self.get_json(path, params).await?;
        let items = payload.into_items();

        if let Err(e) = self.cache.set(&key, &items, self.revalidate).await {
            warn!(key = %key, error = %e, "Revalidation cache write failed");
        }

        Ok(items)
    }

    /// Issue a single GET and decode the JSON body
    async fn get_json<P: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<P, BackendError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "Requesting backend resource");

        let response = self
            .http
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(classify_transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }

        response
            .json::<P>()
            .await
            .map_err(|e| BackendError::Decode(e.to_string()))
    }
}

/// Build the cache key for a list read
fn cache_key(path: &str, params: &[(&str, String)]) -> String {
    let mut key = String::from(path);
    for (i, (name, value)) in params.iter().enumerate() {
        key.push(if i == 0 { '?' } else { '&' });
        key.push_str(name);
        key.push('=');
        key.push_str(value);
    }
    key
}

/// Classify a reqwest transport error
fn classify_transport(err: reqwest::Error) -> BackendError {
    if err.is_timeout() {
        BackendError::Timeout
    } else if err.is_connect() {
        BackendError::Unavailable
    } else {
        BackendError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> BackendClient {
        let config = BackendConfig {
            base_url: server.uri(),
            timeout_seconds: 5,
            revalidate_seconds: 3600,
        };
        let cache = Arc::new(MemoryCache::with_capacity_and_ttl(
            100,
            Duration::from_secs(3600),
        ));
        BackendClient::new(&config, cache).unwrap()
    }

    fn tour(id: i64, title: &str) -> serde_json::Value {
        json!({
            "id": id,
            "title": title,
            "rating": 4.5,
            "review_count": 10,
            "original_price": 8000,
            "current_price": 6000,
            "tags": ["outdoor"],
            "slug": format!("tour-{}", id),
        })
    }

    #[tokio::test]
    async fn trending_uses_default_limit_of_six() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user/division/trending"))
            .and(query_param("limit", "6"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([tour(1, "A"), tour(2, "B")])))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let tours = client.trending_divisions(None).await.unwrap();

        assert_eq!(tours.len(), 2);
        assert_eq!(tours[0].title, "A");
        assert_eq!(tours[1].title, "B");
    }

    #[tokio::test]
    async fn trending_passes_explicit_limit() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user/division/trending"))
            .and(query_param("limit", "12"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let tours = client.trending_divisions(Some(12)).await.unwrap();
        assert!(tours.is_empty());
    }

    #[tokio::test]
    async fn trending_unwraps_data_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user/division/trending"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"data": [tour(3, "C")]})),
            )
            .mount(&server)
            .await;

        let client = client_for(&server);
        let tours = client.trending_divisions(None).await.unwrap();
        assert_eq!(tours.len(), 1);
        assert_eq!(tours[0].title, "C");
    }

    #[tokio::test]
    async fn trending_normalizes_unknown_shape_to_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user/division/trending"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let tours = client.trending_divisions(None).await.unwrap();
        assert!(tours.is_empty());
    }

    #[tokio::test]
    async fn repeated_read_within_window_hits_cache() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user/division/trending"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([tour(1, "A")])))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let first = client.trending_divisions(None).await.unwrap();
        let second = client.trending_divisions(None).await.unwrap();

        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 1);
        // expect(1) on the mock verifies no second request was issued
    }

    #[tokio::test]
    async fn different_limits_are_cached_separately() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user/division/trending"))
            .and(query_param("limit", "6"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([tour(1, "A")])))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/user/division/trending"))
            .and(query_param("limit", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        assert_eq!(client.trending_divisions(None).await.unwrap().len(), 1);
        assert_eq!(client.trending_divisions(Some(3)).await.unwrap().len(), 0);
    }

    #[tokio::test]
    async fn server_error_propagates() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user/division/trending"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.trending_divisions(None).await.unwrap_err();
        assert!(matches!(err, BackendError::Status { status: 500, .. }));
    }

    #[tokio::test]
    async fn search_accepts_bare_and_enveloped_results() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user/tour/search"))
            .and(query_param("keyword", "kayak"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"tours": [tour(1, "Kayak")], "total": 41})),
            )
            .mount(&server)
            .await;

        let client = client_for(&server);
        let query = TourSearchQuery {
            keyword: "kayak".to_string(),
            page: 1,
            per_page: 20,
        };
        let result = client.search_tours(&query).await.unwrap();
        assert_eq!(result.total, 41);
        assert_eq!(result.tours.len(), 1);
    }

    #[tokio::test]
    async fn suppliers_filter_by_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/admin/supplier"))
            .and(query_param("status", "inactive"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [{
                "id": 4,
                "name": "Dormant Tours",
                "email": "old@example.com",
                "status": "inactive",
                "created_at": "2024-01-01T00:00:00Z",
                "updated_at": "2024-06-01T00:00:00Z"
            }]})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let suppliers = client
            .suppliers(Some(SupplierStatus::Inactive))
            .await
            .unwrap();
        assert_eq!(suppliers.len(), 1);
        assert!(!suppliers[0].is_active());
    }

    #[tokio::test]
    async fn verify_credentials_returns_profile_on_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {
                "id": 9,
                "email": "traveler@example.com",
                "is_admin": false
            }})))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let user = client
            .verify_credentials("traveler@example.com", "hunter2")
            .await
            .unwrap();
        assert_eq!(user.map(|u| u.id), Some(9));
    }

    #[tokio::test]
    async fn verify_credentials_returns_none_when_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let user = client
            .verify_credentials("traveler@example.com", "wrong")
            .await
            .unwrap();
        assert!(user.is_none());
    }

    #[test]
    fn cache_key_includes_query() {
        assert_eq!(cache_key("/a", &[]), "/a");
        assert_eq!(
            cache_key("/a", &[("limit", "6".to_string())]),
            "/a?limit=6"
        );
        assert_eq!(
            cache_key("/a", &[("x", "1".to_string()), ("y", "2".to_string())]),
            "/a?x=1&y=2"
        );
    }
}
