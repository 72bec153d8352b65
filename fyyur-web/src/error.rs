//! Error types for fyyur-web
//!
//! Every error renders the generic HTML error page with its status code.
//! Form validation failures are not errors here: handlers re-render the
//! form instead.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::views;

/// HTTP error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Requested entity or route does not exist (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// A write was rejected and rolled back (400). The message is the
    /// user-facing notice; the cause has already been logged.
    #[error("Persistence failure: {0}")]
    Persistence(String),

    /// Internal server error (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Map a failed write to a response.
    ///
    /// Not-found keeps its meaning; anything else is logged with its cause
    /// and replaced by `notice`.
    pub fn write_failed(err: fyyur_common::Error, notice: impl Into<String>) -> Self {
        match err {
            fyyur_common::Error::NotFound(what) => ApiError::NotFound(what),
            other => {
                let notice = notice.into();
                error!("{} ({})", notice, other);
                ApiError::Persistence(notice)
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Persistence(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<fyyur_common::Error> for ApiError {
    fn from(err: fyyur_common::Error) -> Self {
        match err {
            fyyur_common::Error::NotFound(what) => ApiError::NotFound(what),
            other => {
                error!("Request failed: {}", other);
                ApiError::Internal(other.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ApiError::NotFound(_) => views::errors::not_found_page(),
            ApiError::Persistence(notice) => views::errors::bad_request_page(notice),
            // Internal details stay in the log
            ApiError::Internal(_) => views::errors::server_error_page(),
        };

        (status, Html(body)).into_response()
    }
}

/// Result type for HTTP handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Parse an id path segment; anything that is not a positive integer
/// cannot name a row, so it is a 404 rather than a 400
pub fn parse_id(kind: &str, raw: &str) -> ApiResult<i64> {
    raw.parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| ApiError::NotFound(format!("{} {}", kind, raw)))
}
