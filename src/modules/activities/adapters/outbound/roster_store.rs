// Roster store port.
//
// Purpose
// - Describe what the signup use case needs from storage, without implementing it.
//
// Responsibilities
// - Run the signup decision against the current roster of one activity.
// - Apply the accepted events before any other signup for that activity can decide.

use crate::modules::activities::core::state::Activity;
use crate::modules::activities::use_cases::sign_up_for_activity::decision::Decision;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterStoreError {
    #[error("unknown activity: {0}")]
    UnknownActivity(String),

    #[error("backend error: {0}")]
    Backend(String),
}

pub type Decide<'a> = &'a (dyn Fn(&Activity) -> Decision + Send + Sync);

#[async_trait]
pub trait RosterStore: Send + Sync {
    /// Calls `decide` with the current roster and appends the events of an
    /// accepted decision as one atomic step per activity.
    async fn decide_and_append(
        &self,
        activity_name: &str,
        decide: Decide<'_>,
    ) -> Result<Decision, RosterStoreError>;
}
