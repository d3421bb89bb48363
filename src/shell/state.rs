use crate::modules::activities::adapters::outbound::roster_store_in_memory::InMemoryRosterStore;
use crate::modules::activities::use_cases::list_activities::queries_port::ActivityQueries;
use crate::modules::activities::use_cases::sign_up_for_activity::handler::SignUpHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub queries: Arc<dyn ActivityQueries + Send + Sync>,
    pub sign_up_handler: Arc<SignUpHandler<InMemoryRosterStore>>,
}

impl AppState {
    /// Both the read path and the signup path share the one store.
    pub fn new(store: Arc<InMemoryRosterStore>) -> Self {
        Self {
            queries: store.clone(),
            sign_up_handler: Arc::new(SignUpHandler::new(store)),
        }
    }
}
