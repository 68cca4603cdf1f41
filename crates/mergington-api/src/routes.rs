//! HTTP route definitions.

use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers::{
    health_check, list_activities, root_redirect, signup_for_activity, unregister_from_activity,
};
use crate::state::AppState;
use crate::static_assets::serve_static;

/// Create the main router.
///
/// ## Route Structure
///
/// ```text
/// GET    /                                    - Redirect to the web client
/// GET    /activities                          - List activities and rosters
/// POST   /activities/{name}/signup?email=     - Sign a student up
/// DELETE /activities/{name}/unregister?email= - Remove a student
/// GET    /health                              - Health check
/// GET    /static/{file}                       - Embedded web client assets
/// ```
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root_redirect))
        .route("/activities", get(list_activities))
        .route("/activities/{name}/signup", post(signup_for_activity))
        .route(
            "/activities/{name}/unregister",
            delete(unregister_from_activity),
        )
        .route("/health", get(health_check))
        .route("/static/{*file}", get(serve_static))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
