use crate::shared::core::email::Email;

#[derive(Debug, Clone, serde::Serialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum ActivityEvent {
    ParticipantSignedUp { activity_name: String, email: Email },
}
