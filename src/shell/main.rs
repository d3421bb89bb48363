use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use activities::modules::activities::adapters::outbound::roster_store_in_memory::InMemoryRosterStore;
use activities::modules::activities::seed::load_activities;
use activities::shell::config::Config;
use activities::shell::http::router;
use activities::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let activities = load_activities(config.seed_path.as_deref())?;
    tracing::info!(count = activities.len(), "seeded activities");

    let store = Arc::new(InMemoryRosterStore::with_activities(activities));
    let state = AppState::new(store);
    let app = router(state, &config.static_dir);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Activities API: http://{}/", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
