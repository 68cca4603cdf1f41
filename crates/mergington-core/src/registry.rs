//! Activity registry for managing enrollment.
//!
//! Uses a single `tokio::sync::RwLock` over the activity map. Every
//! check-then-mutate sequence (duplicate detection, capacity checks,
//! roster edits) runs under one write guard, so concurrent signups
//! cannot interleave between the check and the write.

use std::collections::HashMap;

use tokio::sync::RwLock;
use tracing::debug;

use crate::activity::Activity;
use crate::error::RegistryError;

/// Thread-safe store of activities keyed by name.
///
/// The registry has no global instance. Construct one, wrap it in an
/// `Arc`, and hand it to whatever needs it.
pub struct ActivityRegistry {
    activities: RwLock<HashMap<String, Activity>>,
    enforce_capacity: bool,
}

impl ActivityRegistry {
    /// Create a registry over the given activities.
    ///
    /// Capacity enforcement is off by default: rosters may grow past
    /// `max_participants` until [`with_capacity_enforcement`] enables
    /// the check.
    ///
    /// [`with_capacity_enforcement`]: Self::with_capacity_enforcement
    pub fn new(activities: HashMap<String, Activity>) -> Self {
        Self {
            activities: RwLock::new(activities),
            enforce_capacity: false,
        }
    }

    /// Enable or disable the capacity check on enrollment.
    pub fn with_capacity_enforcement(mut self, enforce: bool) -> Self {
        self.enforce_capacity = enforce;
        self
    }

    /// Snapshot of every activity, keyed by name.
    pub async fn list(&self) -> HashMap<String, Activity> {
        let activities = self.activities.read().await;
        activities.clone()
    }

    /// Get a single activity by name.
    pub async fn get(&self, name: &str) -> Option<Activity> {
        let activities = self.activities.read().await;
        activities.get(name).cloned()
    }

    /// Check if an activity with the given name exists.
    pub async fn contains(&self, name: &str) -> bool {
        let activities = self.activities.read().await;
        activities.contains_key(name)
    }

    /// Get the number of activities.
    pub async fn len(&self) -> usize {
        let activities = self.activities.read().await;
        activities.len()
    }

    /// Check if the registry is empty.
    pub async fn is_empty(&self) -> bool {
        let activities = self.activities.read().await;
        activities.is_empty()
    }

    /// Add a student to an activity roster.
    ///
    /// Fails if the activity does not exist, the student is already
    /// enrolled, or the roster is full while capacity enforcement is
    /// enabled.
    pub async fn enroll(&self, name: &str, email: &str) -> Result<(), RegistryError> {
        let mut activities = self.activities.write().await;
        let activity = activities
            .get_mut(name)
            .ok_or_else(|| RegistryError::ActivityNotFound(name.to_string()))?;

        if activity.is_enrolled(email) {
            return Err(RegistryError::AlreadyEnrolled {
                activity: name.to_string(),
                email: email.to_string(),
            });
        }

        if self.enforce_capacity && activity.is_full() {
            return Err(RegistryError::ActivityFull(name.to_string()));
        }

        activity.participants.push(email.to_string());
        debug!(activity = name, email, "enrolled participant");
        Ok(())
    }

    /// Remove a student from an activity roster.
    ///
    /// Fails if the activity does not exist or the student is not
    /// enrolled.
    pub async fn withdraw(&self, name: &str, email: &str) -> Result<(), RegistryError> {
        let mut activities = self.activities.write().await;
        let activity = activities
            .get_mut(name)
            .ok_or_else(|| RegistryError::ActivityNotFound(name.to_string()))?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or_else(|| RegistryError::NotEnrolled {
                activity: name.to_string(),
                email: email.to_string(),
            })?;

        activity.participants.remove(position);
        debug!(activity = name, email, "withdrew participant");
        Ok(())
    }
}

impl Default for ActivityRegistry {
    fn default() -> Self {
        Self::new(HashMap::new())
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
