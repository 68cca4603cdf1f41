//! # Mergington API
//!
//! HTTP surface for the Mergington High School activity service.
//!
//! This crate exposes the activity registry over REST and serves the
//! bundled signup web client:
//! - **Activities**: listing, signup, and unregister endpoints
//! - **Static**: the embedded single-page client under `/static`
//! - **Health**: liveness and uptime reporting
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              mergington-api (HTTP layer)        │
//! │  ┌──────────┐  ┌──────────┐  ┌──────────────┐   │
//! │  │ REST     │  │ Static   │  │ Health       │   │
//! │  │ handlers │  │ assets   │  │ check        │   │
//! │  └────┬─────┘  └──────────┘  └──────┬───────┘   │
//! │       └──────────────┬──────────────┘           │
//! └──────────────────────┼──────────────────────────┘
//!                        ▼
//! ┌─────────────────────────────────────────────────┐
//! │        ActivityRegistry (mergington-core)       │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! Handlers never touch shared state directly; everything goes through
//! the [`ActivityRegistry`](mergington_core::ActivityRegistry) handed
//! to [`AppState`].

pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;
pub mod static_assets;

// Re-export core types
pub use handlers::{ErrorDetail, HealthResponse, MessageResponse};
pub use routes::create_router;
pub use server::{ApiConfig, ApiServer};
pub use state::AppState;
