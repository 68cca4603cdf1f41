//! Built-in activity catalog.
//!
//! The service keeps no database; every start begins from this fixed
//! set of activities and their initial rosters.

use std::collections::HashMap;

use crate::activity::Activity;

/// The activities offered at startup.
pub fn default_activities() -> HashMap<String, Activity> {
    HashMap::from([
        (
            "Basketball".to_string(),
            Activity::new(
                "Team sport focusing on basketball skills and competitive play",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                15,
            )
            .with_participants(["alex@mergington.edu"]),
        ),
        (
            "Tennis Club".to_string(),
            Activity::new(
                "Learn tennis techniques and participate in friendly matches",
                "Tuesdays and Thursdays, 3:30 PM - 5:00 PM",
                10,
            )
            .with_participants(["sarah@mergington.edu"]),
        ),
        (
            "Debate Team".to_string(),
            Activity::new(
                "Develop public speaking and critical thinking skills through debate",
                "Wednesdays, 3:30 PM - 5:00 PM",
                16,
            )
            .with_participants(["james@mergington.edu", "rachel@mergington.edu"]),
        ),
    ])
}
