use crate::modules::activities::use_cases::list_activities::projection::ActivityView;
use async_trait::async_trait;
use std::collections::BTreeMap;

#[async_trait]
pub trait ActivityQueries {
    /// Snapshot of every activity keyed by name. Never mutates.
    async fn list_activities(&self) -> anyhow::Result<BTreeMap<String, ActivityView>>;
}
