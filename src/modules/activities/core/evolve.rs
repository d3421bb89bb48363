use crate::modules::activities::core::events::ActivityEvent;
use crate::modules::activities::core::state::Activity;

pub fn evolve(mut activity: Activity, event: ActivityEvent) -> Activity {
    match event {
        ActivityEvent::ParticipantSignedUp {
            activity_name,
            email,
        } if activity_name == activity.name => {
            activity.participants.push(email);
            activity
        }
        _ => activity,
    }
}
