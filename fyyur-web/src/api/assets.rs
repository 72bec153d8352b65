//! Stylesheet and script shared by every page

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

const FYYUR_CSS: &str = include_str!("../../ui/fyyur.css");
const FYYUR_JS: &str = include_str!("../../ui/fyyur.js");

/// GET /static/fyyur.css
pub async fn serve_css() -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        FYYUR_CSS,
    )
        .into_response()
}

/// GET /static/fyyur.js
///
/// Wires the venue delete button
pub async fn serve_js() -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/javascript")],
        FYYUR_JS,
    )
        .into_response()
}
