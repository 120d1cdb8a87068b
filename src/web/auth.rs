//! Authentication page shells
//!
//! Sign-in and sign-out flows. Credentials are verified by the backend
//! service; on success a session is created in the in-process store and
//! its token travels in an HttpOnly cookie. Sign-out destroys the session,
//! clears the cookie and redirects to the site root in one server-side
//! step, so there is no dangling loading state to manage.

use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, HeaderValue};
use axum::response::{Html, IntoResponse, Redirect};
use serde::Deserialize;
use tracing::{debug, info};

use crate::view::PageHeader;
use crate::web::error::PageError;
use crate::web::locale::locale_from_headers;
use crate::web::middleware::{extract_session_token, AppState};

/// Query parameters for the sign-in form
#[derive(Debug, Deserialize)]
pub struct LoginFormQuery {
    /// Set after a rejected sign-in attempt
    #[serde(default)]
    pub failed: bool,
}

/// Form body for the sign-in submission
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// GET /login - sign-in form
pub async fn login_form(
    State(state): State<AppState>,
    Query(query): Query<LoginFormQuery>,
    headers: HeaderMap,
) -> Result<Html<String>, PageError> {
    let locale = locale_from_headers(&headers, &state.config.site);

    let mut ctx = super::base_context(&state, &locale, None);
    ctx.insert("header", &PageHeader::new("Sign in"));
    ctx.insert("failed", &query.failed);

    Ok(Html(state.renderer.render("auth/login.html", &ctx)?))
}

/// POST /login - verify credentials and establish a session
///
/// Rejected credentials redirect back to the form; verified ones set the
/// session cookie and land on the my-page default sub-route.
pub async fn login(
    State(state): State<AppState>,
    axum::Form(form): axum::Form<LoginForm>,
) -> Result<axum::response::Response, PageError> {
    let user = state
        .backend
        .verify_credentials(&form.email, &form.password)
        .await?;

    let Some(user) = user else {
        debug!(email = %form.email, "Sign-in rejected by backend");
        return Ok(Redirect::to("/login?failed=true").into_response());
    };

    let session = state.sessions.create(user).await;
    info!(user_id = session.user.id, "User signed in");

    let cookie = format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        state.config.session.cookie_name,
        session.id,
        state.sessions.lifetime_seconds(),
    );

    let mut response_headers = HeaderMap::new();
    response_headers.insert(header::SET_COOKIE, HeaderValue::from_str(&cookie).unwrap());

    Ok((response_headers, Redirect::to("/mypage/profile")).into_response())
}

/// GET|POST /logout - sign out and redirect to the site root
///
/// Single-shot and idempotent: a request without a live session still
/// clears the cookie and redirects.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    let cookie_name = &state.config.session.cookie_name;

    if let Some(token) = extract_session_token(&headers, cookie_name) {
        if state.sessions.destroy(&token).await {
            debug!("Session destroyed on sign-out");
        }
    }

    let clear_cookie = format!(
        "{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0",
        cookie_name
    );
    let mut response_headers = HeaderMap::new();
    response_headers.insert(
        header::SET_COOKIE,
        HeaderValue::from_str(&clear_cookie).unwrap(),
    );

    (response_headers, Redirect::to("/"))
}
