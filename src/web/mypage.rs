//! My-page section shells
//!
//! The section index unconditionally redirects to the profile sub-route;
//! the profile and bookings screens require a session and receive the
//! resolved locale as an explicit parameter.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{Html, Redirect};

use crate::view::{gravatar_url, PageHeader};
use crate::web::error::PageError;
use crate::web::locale::locale_from_headers;
use crate::web::middleware::{AppState, CurrentSession};

/// GET /mypage - unconditional redirect to the default sub-route
pub async fn index() -> Redirect {
    Redirect::to("/mypage/profile")
}

/// GET /mypage/profile - account profile
pub async fn profile(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    headers: HeaderMap,
) -> Result<Html<String>, PageError> {
    let locale = locale_from_headers(&headers, &state.config.site);

    let mut ctx = super::base_context(&state, &locale, Some(&session.user));
    ctx.insert("header", &PageHeader::new("My Page"));
    ctx.insert("avatar_url", &gravatar_url(&session.user.email, 128));
    ctx.insert("member_since", &session.created_at.to_rfc3339());

    Ok(Html(state.renderer.render("mypage/profile.html", &ctx)?))
}

/// GET /mypage/bookings - bookings of the signed-in user
pub async fn bookings(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    headers: HeaderMap,
) -> Result<Html<String>, PageError> {
    let locale = locale_from_headers(&headers, &state.config.site);

    let bookings = state.backend.user_bookings(session.user.id).await?;

    let mut ctx = super::base_context(&state, &locale, Some(&session.user));
    ctx.insert("header", &PageHeader::new("My Bookings"));
    ctx.insert("bookings", &bookings);

    Ok(Html(state.renderer.render("mypage/bookings.html", &ctx)?))
}
