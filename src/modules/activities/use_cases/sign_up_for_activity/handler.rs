use crate::modules::activities::adapters::outbound::roster_store::{RosterStore, RosterStoreError};
use crate::modules::activities::core::state::Activity;
use crate::modules::activities::use_cases::sign_up_for_activity::command::{
    SignUpConfirmation, SignUpForActivity,
};
use crate::modules::activities::use_cases::sign_up_for_activity::decide::decide_sign_up;
use crate::modules::activities::use_cases::sign_up_for_activity::decision::{
    DecideError, Decision,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error("Activity not found")]
    ActivityNotFound(String),

    #[error(transparent)]
    Domain(#[from] DecideError),

    #[error(transparent)]
    Store(RosterStoreError),
}

impl From<RosterStoreError> for ApplicationError {
    fn from(error: RosterStoreError) -> Self {
        match error {
            RosterStoreError::UnknownActivity(name) => Self::ActivityNotFound(name),
            other => Self::Store(other),
        }
    }
}

pub struct SignUpHandler<TStore>
where
    TStore: RosterStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> SignUpHandler<TStore>
where
    TStore: RosterStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// The store runs the decision against the roster it is about to append
    /// to, so a concurrent signup can neither sneak in a duplicate nor fail a
    /// valid one.
    pub async fn handle(
        &self,
        command: SignUpForActivity,
    ) -> Result<SignUpConfirmation, ApplicationError> {
        let activity_name = command.activity_name.as_str();
        let decision = self
            .store
            .decide_and_append(activity_name, &|activity: &Activity| {
                decide_sign_up(activity, &command)
            })
            .await
            .inspect_err(|e| debug!(activity = activity_name, error = %e, "signup failed"))?;

        match decision {
            Decision::Accepted { .. } => {
                info!(
                    activity = activity_name,
                    email = %command.email,
                    "participant signed up"
                );
                Ok(SignUpConfirmation {
                    activity_name: command.activity_name.clone(),
                    email: command.email.clone(),
                })
            }
            Decision::Rejected { reason } => {
                debug!(
                    activity = activity_name,
                    email = %command.email,
                    %reason,
                    "signup rejected"
                );
                Err(reason.into())
            }
        }
    }
}
