use crate::modules::activities::core::state::Activity;
use crate::shared::core::email::{Email, EmailError};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const DEFAULT_SEED: &str = include_str!("../../../seed/activities.json");

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed seed: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("activity {0:?} is seeded more than once")]
    DuplicateActivity(String),

    #[error("activity {activity:?} has an invalid participant: {source}")]
    InvalidParticipant {
        activity: String,
        source: EmailError,
    },

    #[error("activity {activity:?} lists {email:?} more than once")]
    DuplicateParticipant { activity: String, email: String },
}

#[derive(Deserialize)]
struct SeedActivity {
    name: String,
    description: String,
    schedule: String,
    max_participants: usize,
    participants: Vec<String>,
}

/// The compiled-in catalogue.
pub fn default_activities() -> Result<Vec<Activity>, SeedError> {
    parse_activities(DEFAULT_SEED)
}

/// Reads `path` when given, the compiled-in catalogue otherwise.
pub fn load_activities(path: Option<&Path>) -> Result<Vec<Activity>, SeedError> {
    match path {
        Some(path) => {
            let json = fs::read_to_string(path).map_err(|source| SeedError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            parse_activities(&json)
        }
        None => default_activities(),
    }
}

pub fn parse_activities(json: &str) -> Result<Vec<Activity>, SeedError> {
    let seeds: Vec<SeedActivity> = serde_json::from_str(json)?;
    let mut names = HashSet::new();
    let mut activities = Vec::with_capacity(seeds.len());

    for seed in seeds {
        if !names.insert(seed.name.clone()) {
            return Err(SeedError::DuplicateActivity(seed.name));
        }

        let mut participants: Vec<Email> = Vec::with_capacity(seed.participants.len());
        for raw in seed.participants {
            let email = Email::parse(raw).map_err(|source| SeedError::InvalidParticipant {
                activity: seed.name.clone(),
                source,
            })?;
            if participants.iter().any(|p| p.is_same_address(&email)) {
                return Err(SeedError::DuplicateParticipant {
                    activity: seed.name,
                    email: email.into(),
                });
            }
            participants.push(email);
        }

        activities.push(Activity {
            name: seed.name,
            description: seed.description,
            schedule: seed.schedule,
            max_participants: seed.max_participants,
            participants,
        });
    }

    Ok(activities)
}
