// In memory implementation of the RosterStore and ActivityQueries ports.
//
// Purpose
// - Hold every activity for the lifetime of the process.
//
// Responsibilities
// - Decide and append under one write lock per call.
// - Serve listing snapshots under the read lock.

use crate::modules::activities::adapters::outbound::roster_store::{
    Decide, RosterStore, RosterStoreError,
};
use crate::modules::activities::core::evolve::evolve;
use crate::modules::activities::core::state::Activity;
use crate::modules::activities::use_cases::list_activities::projection::ActivityView;
use crate::modules::activities::use_cases::list_activities::queries_port::ActivityQueries;
use crate::modules::activities::use_cases::sign_up_for_activity::decision::Decision;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryRosterStore {
    activities: RwLock<BTreeMap<String, Activity>>,
    delay_apply_ms: AtomicU64,
    is_offline: bool,
}

impl InMemoryRosterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_activities(activities: impl IntoIterator<Item = Activity>) -> Self {
        let activities = activities
            .into_iter()
            .map(|activity| (activity.name.clone(), activity))
            .collect();
        Self {
            activities: RwLock::new(activities),
            ..Self::default()
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Sleeps between deciding and applying, while the write lock is held.
    pub fn set_delay_apply_ms(&self, delay_ms: u64) {
        self.delay_apply_ms.store(delay_ms, Ordering::Relaxed);
    }
}

#[async_trait::async_trait]
impl RosterStore for InMemoryRosterStore {
    async fn decide_and_append(
        &self,
        activity_name: &str,
        decide: Decide<'_>,
    ) -> Result<Decision, RosterStoreError> {
        if self.is_offline {
            return Err(RosterStoreError::Backend("Roster store offline".into()));
        }

        let mut guard = self.activities.write().await;
        let activity = guard
            .get_mut(activity_name)
            .ok_or_else(|| RosterStoreError::UnknownActivity(activity_name.to_string()))?;

        let decision = decide(activity);
        if let Decision::Accepted { events } = &decision {
            let delay_ms = self.delay_apply_ms.load(Ordering::Relaxed);
            if delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            }
            *activity = events.iter().cloned().fold(activity.clone(), evolve);
        }
        Ok(decision)
    }
}

#[async_trait::async_trait]
impl ActivityQueries for InMemoryRosterStore {
    async fn list_activities(&self) -> anyhow::Result<BTreeMap<String, ActivityView>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Roster store offline"));
        }

        let guard = self.activities.read().await;
        Ok(guard
            .iter()
            .map(|(name, activity)| (name.clone(), ActivityView::from(activity)))
            .collect())
    }
}
