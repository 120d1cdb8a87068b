//! JSON endpoints
//!
//! Thin proxies over the backend wrappers for screens that fetch on
//! demand. Errors use the structured envelope from [`super::error`].

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::backend::TourSearchQuery;
use crate::models::{TourSearchResult, TourSummary};
use crate::web::error::ApiError;
use crate::web::middleware::AppState;
use crate::web::pages::TourSearchParams;

/// Query parameters for the trending endpoint
#[derive(Debug, Deserialize)]
pub struct TrendingQuery {
    pub limit: Option<u32>,
}

/// GET /api/trending - trending tour divisions
pub async fn trending(
    State(state): State<AppState>,
    Query(query): Query<TrendingQuery>,
) -> Result<Json<Vec<TourSummary>>, ApiError> {
    let tours = state.backend.trending_divisions(query.limit).await?;
    Ok(Json(tours))
}

/// GET /api/tours/search - keyword search
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<TourSearchParams>,
) -> Result<Json<TourSearchResult>, ApiError> {
    if params.per_page == 0 || params.per_page > 100 {
        return Err(ApiError::validation_error(
            "per_page must be between 1 and 100",
        ));
    }

    let query = TourSearchQuery {
        keyword: params.keyword,
        page: params.page.max(1),
        per_page: params.per_page,
    };
    let result = state.backend.search_tours(&query).await?;
    Ok(Json(result))
}
