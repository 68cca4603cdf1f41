//! Registry error types.
//!
//! Display strings are part of the service contract: the HTTP layer
//! returns them verbatim in the `detail` field, and the bundled web
//! client matches on phrases such as "not found" and "already signed
//! up".

use thiserror::Error;

/// Registry error types.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// No activity registered under the given name.
    #[error("Activity not found: {0}")]
    ActivityNotFound(String),

    /// The student is already on the roster.
    #[error("{email} is already signed up for {activity}")]
    AlreadyEnrolled { activity: String, email: String },

    /// The student is not on the roster.
    #[error("{email} is not registered for {activity}")]
    NotEnrolled { activity: String, email: String },

    /// The roster is at capacity and enforcement is enabled.
    #[error("Activity is full: {0}")]
    ActivityFull(String),
}
