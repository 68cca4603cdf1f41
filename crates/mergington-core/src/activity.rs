//! Activity definitions.

use serde::{Deserialize, Serialize};

/// An extracurricular activity offered by the school.
///
/// The activity name is not stored here; activities live in the
/// [`ActivityRegistry`](crate::ActivityRegistry) keyed by name, and the
/// wire format keeps the name as the map key as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Human-readable description.
    pub description: String,
    /// Meeting schedule, free-form text.
    pub schedule: String,
    /// Maximum number of participants.
    pub max_participants: u32,
    /// Email addresses of enrolled students, in signup order.
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Create an activity with an empty roster.
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Pre-fill the roster.
    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.participants = participants.into_iter().map(Into::into).collect();
        self
    }

    /// Whether the given email is already on the roster.
    pub fn is_enrolled(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Whether the roster has reached `max_participants`.
    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_activity_has_empty_roster() {
        let activity = Activity::new("Chess strategy", "Fridays, 3:30 PM", 12);
        assert_eq!(activity.description, "Chess strategy");
        assert_eq!(activity.schedule, "Fridays, 3:30 PM");
        assert_eq!(activity.max_participants, 12);
        assert!(activity.participants.is_empty());
        assert!(!activity.is_full());
    }

    #[test]
    fn test_with_participants_preserves_order() {
        let activity = Activity::new("Chess strategy", "Fridays, 3:30 PM", 12)
            .with_participants(["a@mergington.edu", "b@mergington.edu"]);
        assert_eq!(
            activity.participants,
            vec!["a@mergington.edu", "b@mergington.edu"]
        );
        assert!(activity.is_enrolled("a@mergington.edu"));
        assert!(!activity.is_enrolled("c@mergington.edu"));
    }

    #[test]
    fn test_is_full_at_capacity() {
        let activity = Activity::new("Duo club", "Mondays", 2)
            .with_participants(["a@mergington.edu", "b@mergington.edu"]);
        assert!(activity.is_full());
    }

    #[test]
    fn test_deserialize_without_participants_defaults_empty() {
        let activity: Activity = serde_json::from_str(
            r#"{"description": "Chess", "schedule": "Fridays", "max_participants": 12}"#,
        )
        .unwrap();
        assert!(activity.participants.is_empty());
    }
}
