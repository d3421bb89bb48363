use crate::modules::activities::core::events::ActivityEvent;
use crate::modules::activities::core::state::Activity;
use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;
use crate::modules::activities::use_cases::sign_up_for_activity::decision::{
    DecideError, Decision,
};

/// The duplicate check runs before the capacity check, so re-submitting an
/// existing participant to a full activity still reports the duplicate.
pub fn decide_sign_up(activity: &Activity, command: &SignUpForActivity) -> Decision {
    if activity.is_signed_up(&command.email) {
        return Decision::Rejected {
            reason: DecideError::AlreadySignedUp,
        };
    }
    if activity.is_full() {
        return Decision::Rejected {
            reason: DecideError::ActivityFull,
        };
    }
    Decision::Accepted {
        events: vec![ActivityEvent::ParticipantSignedUp {
            activity_name: activity.name.clone(),
            email: command.email.clone(),
        }],
    }
}
