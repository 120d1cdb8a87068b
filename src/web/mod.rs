//! Web layer - page shells and routing
//!
//! This module contains the routed screens of the Tourhub frontend:
//! - Storefront pages (top page, tour search)
//! - Auth pages (sign-in, sign-out)
//! - My-page section (redirecting index, profile, bookings)
//! - Admin dashboard shell and supplier listing
//! - JSON endpoints for on-demand fetches

pub mod admin;
pub mod api;
pub mod auth;
pub mod error;
pub mod locale;
pub mod middleware;
pub mod mypage;
pub mod pages;

use anyhow::{Context, Result};
use axum::{
    http::{header, HeaderValue, Method},
    middleware as axum_middleware,
    routing::get,
    Router,
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub use error::{ApiError, PageError};
pub use middleware::{AppState, CurrentSession, OptionalSession, RequestStats};

use crate::models::SessionUser;

/// Base template context shared by every page shell
pub(crate) fn base_context(
    state: &AppState,
    locale: &str,
    user: Option<&SessionUser>,
) -> tera::Context {
    let mut ctx = tera::Context::new();
    ctx.insert("site_name", &state.config.site.name);
    ctx.insert("locale", locale);
    ctx.insert("current_user", &user);
    ctx
}

/// Build the complete router with middleware
pub fn build_router(state: AppState, cors_origin: &str) -> Result<Router> {
    // CORS for the JSON endpoints; cookies ride along
    let cors = CorsLayer::new()
        .allow_origin(
            cors_origin
                .parse::<HeaderValue>()
                .context("Invalid CORS origin")?,
        )
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::COOKIE])
        .allow_credentials(true);

    // Admin routes (need admin role)
    let admin_routes = Router::new()
        .route("/admin", get(admin::dashboard))
        .route("/admin/suppliers", get(admin::suppliers))
        .route_layer(axum_middleware::from_fn(middleware::require_admin))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::require_auth,
        ));

    // My-page routes (need a session)
    let account_routes = Router::new()
        .route("/mypage/profile", get(mypage::profile))
        .route("/mypage/bookings", get(mypage::bookings))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::require_auth,
        ));

    // Public routes; session attached when present
    let public_routes = Router::new()
        .route("/", get(pages::top))
        .route("/tours", get(pages::tours))
        .route("/login", get(auth::login_form).post(auth::login))
        .route("/logout", get(auth::logout).post(auth::logout))
        // The section index redirects unconditionally; auth is enforced
        // on the sub-routes it lands on.
        .route("/mypage", get(mypage::index))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::optional_auth,
        ));

    let api_routes = Router::new()
        .route("/api/trending", get(api::trending))
        .route("/api/tours/search", get(api::search));

    let router = Router::new()
        .merge(public_routes)
        .merge(account_routes)
        .merge(admin_routes)
        .merge(api_routes)
        .nest_service("/assets", ServeDir::new("assets"))
        .fallback(pages::not_found)
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        // Request stats middleware (outermost layer, runs for all requests)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::request_stats_middleware,
        ))
        .with_state(state);

    Ok(router)
}
