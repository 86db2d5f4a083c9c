use std::sync::Arc;

use crate::modules::fsb_events::adapters::inbound::client::FsbClient;
use crate::modules::fsb_events::adapters::outbound::event_catalog_in_memory::InMemoryEventCatalog;
use crate::modules::fsb_events::application::command_handler::EventCommandHandler;
use crate::modules::fsb_events::application::query_handler::EventQueryHandler;

/// One catalog shared by every inbound surface built from this state.
#[derive(Clone)]
pub struct AppState {
    pub commands: Arc<EventCommandHandler<InMemoryEventCatalog>>,
    pub queries: Arc<EventQueryHandler<InMemoryEventCatalog>>,
}

impl AppState {
    pub fn in_memory() -> Self {
        let catalog = Arc::new(InMemoryEventCatalog::new());
        Self {
            commands: Arc::new(EventCommandHandler::new(catalog.clone())),
            queries: Arc::new(EventQueryHandler::new(catalog)),
        }
    }

    /// Direct client over this state's catalog.
    pub fn client(&self) -> FsbClient<InMemoryEventCatalog> {
        FsbClient::new(self.commands.clone(), self.queries.clone())
    }
}
