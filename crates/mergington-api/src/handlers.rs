//! Activity API handlers.
//!
//! Provides HTTP endpoints for listing activities and managing
//! student enrollment.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use mergington_core::{Activity, RegistryError};

use crate::state::AppState;

/// Query parameters identifying the student.
#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    /// Student email address.
    pub email: String,
}

/// Response for successful signup and unregister requests.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable confirmation.
    pub message: String,
}

/// Error body for failed requests.
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    /// What went wrong. Clients match on phrases in this string.
    pub detail: String,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,

    /// Service version.
    pub version: String,

    /// Uptime in seconds.
    pub uptime_seconds: u64,

    /// Number of activities in the registry.
    pub activities: usize,
}

/// Redirect to the bundled web client.
///
/// GET /
pub async fn root_redirect() -> Redirect {
    Redirect::temporary("/static/index.html")
}

/// List all activities with their rosters.
///
/// GET /activities
pub async fn list_activities(
    State(state): State<Arc<AppState>>,
) -> Json<HashMap<String, Activity>> {
    Json(state.registry.list().await)
}

/// Sign a student up for an activity.
///
/// POST /activities/{name}/signup?email=...
pub async fn signup_for_activity(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Response {
    info!("Signup request: activity={}, email={}", name, query.email);

    match state.registry.enroll(&name, &query.email).await {
        Ok(()) => (
            StatusCode::OK,
            Json(MessageResponse {
                message: format!("Signed up {} for {}", query.email, name),
            }),
        )
            .into_response(),
        Err(e) => {
            warn!("Signup rejected: {}", e);
            registry_error_response(&e)
        }
    }
}

/// Remove a student from an activity.
///
/// DELETE /activities/{name}/unregister?email=...
pub async fn unregister_from_activity(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Response {
    info!("Unregister request: activity={}, email={}", name, query.email);

    match state.registry.withdraw(&name, &query.email).await {
        Ok(()) => (
            StatusCode::OK,
            Json(MessageResponse {
                message: format!("Unregistered {} from {}", query.email, name),
            }),
        )
            .into_response(),
        Err(e) => {
            warn!("Unregister rejected: {}", e);
            registry_error_response(&e)
        }
    }
}

/// Report service health and registry size.
///
/// GET /health
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime().as_secs(),
        activities: state.registry.len().await,
    })
}

/// Map a registry error to its HTTP response.
///
/// An unknown activity is the caller asking for something that does
/// not exist (404); every other rejection is a bad request (400). The
/// error's display string becomes the `detail` field.
fn registry_error_response(err: &RegistryError) -> Response {
    let status = match err {
        RegistryError::ActivityNotFound(_) => StatusCode::NOT_FOUND,
        _ => StatusCode::BAD_REQUEST,
    };
    (
        status,
        Json(ErrorDetail {
            detail: err.to_string(),
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_response_serialize() {
        let resp = MessageResponse {
            message: "Signed up kid@mergington.edu for Basketball".to_string(),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"message\""));
        assert!(json.contains("Signed up"));
    }

    #[test]
    fn test_error_detail_serialize() {
        let resp = ErrorDetail {
            detail: "Activity not found: Chess Club".to_string(),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"detail\""));
        assert!(json.contains("not found"));
    }

    #[test]
    fn test_email_query_deserialize() {
        let query: EmailQuery =
            serde_json::from_str(r#"{"email": "kid@mergington.edu"}"#).unwrap();
        assert_eq!(query.email, "kid@mergington.edu");
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse {
            status: "ok".to_string(),
            version: "0.1.0".to_string(),
            uptime_seconds: 42,
            activities: 3,
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"status\":\"ok\""));
        assert!(json.contains("\"uptime_seconds\":42"));
    }

    #[test]
    fn test_unknown_activity_maps_to_404() {
        let err = RegistryError::ActivityNotFound("Chess Club".to_string());
        let response = registry_error_response(&err);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_enrollment_conflicts_map_to_400() {
        let duplicate = RegistryError::AlreadyEnrolled {
            activity: "Basketball".to_string(),
            email: "alex@mergington.edu".to_string(),
        };
        assert_eq!(
            registry_error_response(&duplicate).status(),
            StatusCode::BAD_REQUEST
        );

        let missing = RegistryError::NotEnrolled {
            activity: "Basketball".to_string(),
            email: "alex@mergington.edu".to_string(),
        };
        assert_eq!(
            registry_error_response(&missing).status(),
            StatusCode::BAD_REQUEST
        );

        let full = RegistryError::ActivityFull("Basketball".to_string());
        assert_eq!(
            registry_error_response(&full).status(),
            StatusCode::BAD_REQUEST
        );
    }
}
