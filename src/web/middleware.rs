//! Web middleware
//!
//! Application state, session extraction, and the authentication /
//! authorization layers for the page shells. Request context (cookies,
//! session) is resolved here once and handed to handlers as explicit
//! values, never read through ambient globals.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use std::convert::Infallible;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use crate::backend::BackendClient;
use crate::config::Config;
use crate::models::Session;
use crate::session::SessionStore;
use crate::view::Renderer;
use crate::web::error::PageError;
use crate::web::locale::cookie_value;

// ============================================================================
// Request Statistics
// ============================================================================

/// Lightweight request statistics using atomic operations (no locks)
pub struct RequestStats {
    /// Total number of requests processed
    total_requests: AtomicU64,
    /// Total response time in microseconds (for calculating average)
    total_response_time_us: AtomicU64,
    /// Application start time
    start_time: Instant,
}

impl RequestStats {
    /// Create new stats tracker
    pub fn new() -> Self {
        Self {
            total_requests: AtomicU64::new(0),
            total_response_time_us: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Record a request with its response time
    pub fn record(&self, duration_us: u64) {
        self.total_requests.fetch_add(1, Ordering::Relaxed);
        self.total_response_time_us
            .fetch_add(duration_us, Ordering::Relaxed);
    }

    /// Get total request count
    pub fn total_requests(&self) -> u64 {
        self.total_requests.load(Ordering::Relaxed)
    }

    /// Get average response time in microseconds
    pub fn avg_response_time_us(&self) -> f64 {
        let total = self.total_requests.load(Ordering::Relaxed);
        if total == 0 {
            return 0.0;
        }
        let total_time = self.total_response_time_us.load(Ordering::Relaxed);
        total_time as f64 / total as f64
    }

    /// Get uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

impl Default for RequestStats {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Application State
// ============================================================================

/// Application state containing shared services
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub backend: Arc<BackendClient>,
    pub sessions: Arc<SessionStore>,
    pub renderer: Arc<Renderer>,
    pub request_stats: Arc<RequestStats>,
}

/// Session of the signed-in user, extracted from request extensions.
///
/// Present on routes behind `require_auth`; extraction fails elsewhere.
#[derive(Debug, Clone)]
pub struct CurrentSession(pub Session);

/// Optional session for public routes behind `optional_auth`
#[derive(Debug, Clone)]
pub struct OptionalSession(pub Option<Session>);

impl<S> FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = PageError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentSession>()
            .cloned()
            .ok_or(PageError::Unauthorized)
    }
}

impl<S> FromRequestParts<S> for OptionalSession
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(
            parts
                .extensions
                .get::<CurrentSession>()
                .map(|current| current.0.clone()),
        ))
    }
}

// ============================================================================
// Authentication / Authorization
// ============================================================================

/// Extract the session token from request headers.
///
/// `Authorization: Bearer` takes priority over the session cookie.
pub fn extract_session_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    if let Some(auth_header) = headers.get(header::AUTHORIZATION) {
        if let Ok(auth_str) = auth_header.to_str() {
            if let Some(token) = auth_str.strip_prefix("Bearer ") {
                return Some(token.to_string());
            }
        }
    }

    headers
        .get(header::COOKIE)
        .and_then(|h| h.to_str().ok())
        .and_then(|cookies| cookie_value(cookies, cookie_name))
        .map(str::to_string)
}

/// Authentication middleware for page routes.
///
/// Requests without a valid session are redirected to the sign-in page.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = extract_session_token(request.headers(), &state.config.session.cookie_name);

    let session = match token {
        Some(token) => state.sessions.get(&token).await,
        None => None,
    };

    match session {
        Some(session) => {
            request.extensions_mut().insert(CurrentSession(session));
            next.run(request).await
        }
        None => Redirect::to("/login").into_response(),
    }
}

/// Optional authentication middleware for public routes.
///
/// Attaches the session when a valid token is present; never rejects.
pub async fn optional_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    if let Some(token) =
        extract_session_token(request.headers(), &state.config.session.cookie_name)
    {
        if let Some(session) = state.sessions.get(&token).await {
            request.extensions_mut().insert(CurrentSession(session));
        }
    }
    next.run(request).await
}

/// Admin authorization middleware; expects `require_auth` to have run
pub async fn require_admin(request: Request, next: Next) -> Result<Response, PageError> {
    let session = request
        .extensions()
        .get::<CurrentSession>()
        .ok_or(PageError::Unauthorized)?;

    if !session.0.user.is_admin {
        return Err(PageError::Forbidden);
    }

    Ok(next.run(request).await)
}

/// Request statistics middleware
///
/// Records request count and response time for the admin dashboard.
pub async fn request_stats_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();

    let response = next.run(request).await;

    let duration_us = start.elapsed().as_micros() as u64;
    state.request_stats.record(duration_us);

    response
}
