use crate::modules::activities::core::state::Activity;
use serde::Serialize;

/// Read model for one activity, keyed by name in listings.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ActivityView {
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    pub participants: Vec<String>,
}

impl From<&Activity> for ActivityView {
    fn from(activity: &Activity) -> Self {
        Self {
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            max_participants: activity.max_participants,
            participants: activity
                .participants
                .iter()
                .map(|p| p.as_str().to_string())
                .collect(),
        }
    }
}
