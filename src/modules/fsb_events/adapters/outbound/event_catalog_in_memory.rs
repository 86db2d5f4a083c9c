// In memory implementation of the EventCatalog port.
//
// Responsibilities
// - Store events keyed by id, iterated in ascending id order.
// - Serialize every read-decide-write behind one lock so a decision always
//   sees the value it replaces.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::modules::fsb_events::core::decision::{Change, DecideError, Decision};
use crate::modules::fsb_events::core::event::{Event, EventId};
use crate::modules::fsb_events::core::ports::EventCatalog;

#[derive(Default)]
pub struct InMemoryEventCatalog {
    events: RwLock<BTreeMap<EventId, Event>>,
}

impl InMemoryEventCatalog {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventCatalog for InMemoryEventCatalog {
    async fn apply<F>(&self, id: EventId, decide: F) -> Result<(), DecideError>
    where
        F: FnOnce(Option<&Event>) -> Decision + Send,
    {
        let mut events = self.events.write().await;
        match decide(events.get(&id)) {
            Decision::Accepted { change } => {
                match change {
                    Change::Insert(event) | Change::Replace(event) => {
                        events.insert(id, event);
                    }
                    Change::Remove => {
                        events.remove(&id);
                    }
                }
                Ok(())
            }
            Decision::Rejected { reason } => Err(reason),
        }
    }

    async fn get(&self, id: EventId) -> Option<Event> {
        self.events.read().await.get(&id).cloned()
    }

    async fn snapshot(&self) -> Vec<Event> {
        self.events.read().await.values().cloned().collect()
    }

    async fn count(&self) -> usize {
        self.events.read().await.len()
    }
}
