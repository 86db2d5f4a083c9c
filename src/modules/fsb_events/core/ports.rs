// Ports define what the core needs from the store, without implementing it.
//
// Adapters implement these traits in the adapters layer. The in memory
// catalog is the only implementation for now.

use async_trait::async_trait;

use crate::modules::fsb_events::core::decision::{DecideError, Decision};
use crate::modules::fsb_events::core::event::{Event, EventId};

#[async_trait]
pub trait EventCatalog: Send + Sync {
    /// Runs `decide` against the entry stored under `id` and applies the
    /// accepted change, all inside one critical section.
    async fn apply<F>(&self, id: EventId, decide: F) -> Result<(), DecideError>
    where
        F: FnOnce(Option<&Event>) -> Decision + Send;

    async fn get(&self, id: EventId) -> Option<Event>;

    /// Every stored event in iteration order.
    async fn snapshot(&self) -> Vec<Event>;

    async fn count(&self) -> usize;
}
