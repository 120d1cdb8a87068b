//! Storefront page shells
//!
//! Handlers for the public screens: the top page and the tour search page.
//! Each resolves its inputs (session, locale, backend data) explicitly and
//! delegates rendering to a template.

use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::response::Html;
use serde::Deserialize;

use crate::backend::TourSearchQuery;
use crate::view::PageHeader;
use crate::web::error::PageError;
use crate::web::locale::locale_from_headers;
use crate::web::middleware::{AppState, OptionalSession};

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    20
}

/// Query parameters for the tour search page
#[derive(Debug, Deserialize)]
pub struct TourSearchParams {
    #[serde(default)]
    pub keyword: String,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

/// GET / - top page
///
/// Trending divisions and the latest articles are fetched concurrently;
/// both may come from the revalidation cache.
pub async fn top(
    State(state): State<AppState>,
    OptionalSession(session): OptionalSession,
    headers: HeaderMap,
) -> Result<Html<String>, PageError> {
    let locale = locale_from_headers(&headers, &state.config.site);

    let (tours, articles) = futures::try_join!(
        state.backend.trending_divisions(None),
        state.backend.latest_articles(None),
    )?;

    let mut ctx = super::base_context(&state, &locale, session.as_ref().map(|s| &s.user));
    ctx.insert(
        "header",
        &PageHeader::new("Find your next tour").with_lead("Trending experiences and fresh travel stories"),
    );
    ctx.insert("tours", &tours);
    ctx.insert("articles", &articles);

    Ok(Html(state.renderer.render("index.html", &ctx)?))
}

/// GET /tours - keyword search with pagination
pub async fn tours(
    State(state): State<AppState>,
    OptionalSession(session): OptionalSession,
    Query(params): Query<TourSearchParams>,
    headers: HeaderMap,
) -> Result<Html<String>, PageError> {
    let locale = locale_from_headers(&headers, &state.config.site);

    let query = TourSearchQuery {
        keyword: params.keyword.clone(),
        page: params.page.max(1),
        per_page: params.per_page.clamp(1, 100),
    };
    let result = state.backend.search_tours(&query).await?;

    let total_pages = result.total_pages(query.per_page);

    let mut ctx = super::base_context(&state, &locale, session.as_ref().map(|s| &s.user));
    ctx.insert("header", &PageHeader::new("Search tours"));
    ctx.insert("keyword", &params.keyword);
    ctx.insert("page", &query.page);
    ctx.insert("total", &result.total);
    ctx.insert("total_pages", &total_pages);
    ctx.insert("pages", &(1..=total_pages).collect::<Vec<u32>>());
    ctx.insert("tours", &result.tours);

    Ok(Html(state.renderer.render("tours.html", &ctx)?))
}

/// Fallback handler for unknown routes
pub async fn not_found() -> PageError {
    PageError::NotFound
}
