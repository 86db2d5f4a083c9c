// Direct in-process surface over the event catalog.
//
// Every operation returns normally. Rejections (unknown id, duplicate id,
// tag already present or absent, missing event) are logged by the command
// handler and are otherwise invisible here; inspect the catalog through
// `event` or `len` to observe an effect.

use std::sync::Arc;

use crate::modules::fsb_events::adapters::outbound::event_catalog_in_memory::InMemoryEventCatalog;
use crate::modules::fsb_events::application::command_handler::EventCommandHandler;
use crate::modules::fsb_events::application::query_handler::EventQueryHandler;
use crate::modules::fsb_events::core::event::{Event, EventId};
use crate::modules::fsb_events::core::market_ref_type::MarketRefType;
use crate::modules::fsb_events::core::ports::EventCatalog;
use crate::modules::fsb_events::use_cases::filter_events::query::EventFilter;

pub struct FsbClient<TCatalog = InMemoryEventCatalog>
where
    TCatalog: EventCatalog + 'static,
{
    commands: Arc<EventCommandHandler<TCatalog>>,
    queries: Arc<EventQueryHandler<TCatalog>>,
}

impl<TCatalog> Clone for FsbClient<TCatalog>
where
    TCatalog: EventCatalog + 'static,
{
    fn clone(&self) -> Self {
        Self {
            commands: self.commands.clone(),
            queries: self.queries.clone(),
        }
    }
}

impl FsbClient<InMemoryEventCatalog> {
    /// A client over its own, empty in memory catalog.
    pub fn in_memory() -> Self {
        let catalog = Arc::new(InMemoryEventCatalog::new());
        Self::new(
            Arc::new(EventCommandHandler::new(catalog.clone())),
            Arc::new(EventQueryHandler::new(catalog)),
        )
    }
}

impl<TCatalog> FsbClient<TCatalog>
where
    TCatalog: EventCatalog + 'static,
{
    pub fn new(
        commands: Arc<EventCommandHandler<TCatalog>>,
        queries: Arc<EventQueryHandler<TCatalog>>,
    ) -> Self {
        Self { commands, queries }
    }

    /// Pass `None::<Event>` to model a missing event; it is logged and ignored.
    pub async fn add_event(&self, event: impl Into<Option<Event>>) {
        let _ = self.commands.add_event(event.into()).await;
    }

    pub async fn event_completed(&self, id: EventId) {
        let _ = self.commands.complete_event(id).await;
    }

    pub async fn attach_market_ref_type_to_event(
        &self,
        id: EventId,
        market_ref_type: MarketRefType,
    ) {
        let _ = self
            .commands
            .attach_market_ref_type(id, market_ref_type)
            .await;
    }

    pub async fn remove_market_ref_type_from_event(
        &self,
        id: EventId,
        market_ref_type: MarketRefType,
    ) {
        let _ = self
            .commands
            .remove_market_ref_type(id, market_ref_type)
            .await;
    }

    pub async fn future_event_names_collection(
        &self,
        cat: Option<&str>,
        subcat: Option<&str>,
        market_ref_name: Option<&str>,
    ) -> Vec<String> {
        let filter = EventFilter::new(cat, subcat, market_ref_name);
        self.queries.filter_event_names(&filter).await
    }

    pub async fn dump_full_structure(&self) -> String {
        self.queries.dump_full_structure().await
    }

    pub async fn event(&self, id: EventId) -> Option<Event> {
        self.queries.event(id).await
    }

    pub async fn len(&self) -> usize {
        self.queries.count().await
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
