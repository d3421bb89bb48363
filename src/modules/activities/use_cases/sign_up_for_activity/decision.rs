use crate::modules::activities::core::events::ActivityEvent;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    // Clients match on this text.
    #[error("Already signed up for this activity")]
    AlreadySignedUp,

    #[error("Activity is full")]
    ActivityFull,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Decision {
    Accepted { events: Vec<ActivityEvent> },
    Rejected { reason: DecideError },
}
