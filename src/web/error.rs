//! Web layer error surface
//!
//! Two shapes: `PageError` renders an explicit error page for the
//! server-rendered routes, `ApiError` is the JSON error envelope for the
//! `/api` endpoints. Backend transport failures surface through both
//! instead of propagating unstyled.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::backend::BackendError;

/// Error type for server-rendered page routes
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// No route or record matches the request
    #[error("page not found")]
    NotFound,

    /// Authentication required
    #[error("authentication required")]
    Unauthorized,

    /// Admin privileges required
    #[error("admin privileges required")]
    Forbidden,

    /// The backend service failed
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// Template rendering failed
    #[error("template rendering failed: {0}")]
    Template(#[from] tera::Error),
}

impl PageError {
    fn status(&self) -> StatusCode {
        match self {
            PageError::NotFound => StatusCode::NOT_FOUND,
            PageError::Unauthorized => StatusCode::UNAUTHORIZED,
            PageError::Forbidden => StatusCode::FORBIDDEN,
            PageError::Backend(_) => StatusCode::BAD_GATEWAY,
            PageError::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn user_message(&self) -> &'static str {
        match self {
            PageError::NotFound => "The page you are looking for does not exist.",
            PageError::Unauthorized => "Please sign in to continue.",
            PageError::Forbidden => "You do not have access to this page.",
            PageError::Backend(_) => "The service is temporarily unavailable. Please try again shortly.",
            PageError::Template(_) => "Something went wrong while rendering this page.",
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Page request failed");
        } else {
            tracing::debug!(error = %self, "Page request rejected");
        }

        let body = format!(
            concat!(
                "<!DOCTYPE html>\n",
                "<html lang=\"en\">\n",
                "<head><meta charset=\"utf-8\"><title>{status}</title>",
                "<link rel=\"stylesheet\" href=\"/assets/app.css\"></head>\n",
                "<body class=\"error-page\">\n",
                "<main><h1>{status}</h1><p>{message}</p>",
                "<p><a href=\"/\">Back to the top page</a></p></main>\n",
                "</body>\n</html>\n",
            ),
            status = status,
            message = self.user_message(),
        );

        (status, Html(body)).into_response()
    }
}

/// JSON error envelope for the `/api` endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ApiErrorDetail {
                code: code.into(),
                message: message.into(),
                details: None,
            },
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new("UNAUTHORIZED", message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new("NOT_FOUND", message)
    }

    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }
}

impl From<BackendError> for ApiError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Timeout | BackendError::Unavailable => {
                Self::new("BACKEND_UNAVAILABLE", err.to_string())
            }
            _ => Self::new("BACKEND_ERROR", err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.error.code.as_str() {
            "UNAUTHORIZED" => StatusCode::UNAUTHORIZED,
            "NOT_FOUND" => StatusCode::NOT_FOUND,
            "VALIDATION_ERROR" => StatusCode::BAD_REQUEST,
            "BACKEND_UNAVAILABLE" | "BACKEND_ERROR" => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(self)).into_response()
    }
}
