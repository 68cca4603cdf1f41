//! Embedded web client.
//!
//! The signup page ships inside the binary so the service stays a
//! single artifact with no on-disk asset directory.

use axum::{
    extract::Path,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

/// Embedded static assets.
#[derive(RustEmbed)]
#[folder = "src/static/"]
struct StaticAssets;

/// Serve an embedded file.
///
/// GET /static/{*file}
pub async fn serve_static(Path(file): Path<String>) -> Response {
    match StaticAssets::get(&file) {
        Some(content) => (
            [(header::CONTENT_TYPE, content_type_for(&file))],
            content.data.into_owned(),
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    }
}

fn content_type_for(file: &str) -> &'static str {
    match file.rsplit('.').next() {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        _ => "application/octet-stream",
    }
}
