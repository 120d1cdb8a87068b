//! Admin dashboard shells
//!
//! The dashboard shows request statistics; the supplier screen lists
//! suppliers from the backend with an optional status filter and drives
//! its edit drawer with a disclosure keyed by the `edit` query parameter.

use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::response::Html;
use serde::Deserialize;

use crate::models::{Supplier, SupplierStatus};
use crate::ui::Disclosure;
use crate::view::PageHeader;
use crate::web::error::PageError;
use crate::web::locale::locale_from_headers;
use crate::web::middleware::{AppState, CurrentSession};

/// Query parameters for the supplier listing
#[derive(Debug, Deserialize)]
pub struct SupplierListQuery {
    /// Restrict to one status
    pub status: Option<SupplierStatus>,
    /// Supplier id whose edit drawer should be open
    pub edit: Option<i64>,
}

/// GET /admin - dashboard shell
pub async fn dashboard(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    headers: HeaderMap,
) -> Result<Html<String>, PageError> {
    let locale = locale_from_headers(&headers, &state.config.site);

    let mut ctx = super::base_context(&state, &locale, Some(&session.user));
    ctx.insert("header", &PageHeader::new("Dashboard"));
    ctx.insert("total_requests", &state.request_stats.total_requests());
    ctx.insert(
        "avg_response_ms",
        &(state.request_stats.avg_response_time_us() / 1000.0),
    );
    ctx.insert("uptime_seconds", &state.request_stats.uptime_seconds());
    ctx.insert("active_sessions", &state.sessions.len().await);

    Ok(Html(state.renderer.render("admin/dashboard.html", &ctx)?))
}

/// GET /admin/suppliers - supplier listing with edit drawer
///
/// An `edit` id pointing at a record absent from the listing leaves the
/// drawer closed.
pub async fn suppliers(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Query(query): Query<SupplierListQuery>,
    headers: HeaderMap,
) -> Result<Html<String>, PageError> {
    let locale = locale_from_headers(&headers, &state.config.site);

    let suppliers = state.backend.suppliers(query.status).await?;

    let mut editor: Disclosure<Supplier> = Disclosure::new();
    if let Some(id) = query.edit {
        if let Some(supplier) = suppliers.iter().find(|s| s.id == id) {
            editor.open_with(supplier.clone());
        }
    }

    let active_count = suppliers.iter().filter(|s| s.is_active()).count();

    let mut ctx = super::base_context(&state, &locale, Some(&session.user));
    ctx.insert("header", &PageHeader::new("Suppliers"));
    ctx.insert("suppliers", &suppliers);
    ctx.insert("active_count", &active_count);
    ctx.insert("inactive_count", &(suppliers.len() - active_count));
    ctx.insert("status_filter", &query.status.map(|s| s.to_string()));
    ctx.insert("editor", &editor);

    Ok(Html(state.renderer.render("admin/suppliers.html", &ctx)?))
}
