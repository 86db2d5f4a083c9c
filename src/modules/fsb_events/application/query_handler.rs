use std::sync::Arc;

use crate::modules::fsb_events::core::event::{Event, EventId};
use crate::modules::fsb_events::core::ports::EventCatalog;
use crate::modules::fsb_events::use_cases::dump_full_structure::render::render_dump;
use crate::modules::fsb_events::use_cases::filter_events::query::EventFilter;

pub struct EventQueryHandler<TCatalog>
where
    TCatalog: EventCatalog + 'static,
{
    catalog: Arc<TCatalog>,
}

impl<TCatalog> EventQueryHandler<TCatalog>
where
    TCatalog: EventCatalog + 'static,
{
    pub fn new(catalog: Arc<TCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn filter_event_names(&self, filter: &EventFilter) -> Vec<String> {
        filter.apply(&self.catalog.snapshot().await)
    }

    pub async fn dump_full_structure(&self) -> String {
        render_dump(&self.catalog.snapshot().await)
    }

    pub async fn event(&self, id: EventId) -> Option<Event> {
        self.catalog.get(id).await
    }

    pub async fn count(&self) -> usize {
        self.catalog.count().await
    }
}
