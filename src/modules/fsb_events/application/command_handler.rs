use std::sync::Arc;

use crate::modules::fsb_events::application::errors::ApplicationError;
use crate::modules::fsb_events::core::event::{Event, EventId};
use crate::modules::fsb_events::core::market_ref_type::MarketRefType;
use crate::modules::fsb_events::core::ports::EventCatalog;
use crate::modules::fsb_events::use_cases::add_event::decide::decide_add;
use crate::modules::fsb_events::use_cases::attach_market_ref_type::decide::decide_attach;
use crate::modules::fsb_events::use_cases::complete_event::decide::decide_complete;
use crate::modules::fsb_events::use_cases::remove_market_ref_type::decide::decide_remove;

/// Runs the mutation use cases against the catalog and logs every outcome.
/// Inbound adapters discard the returned error: a rejection is a no-op for
/// callers.
pub struct EventCommandHandler<TCatalog>
where
    TCatalog: EventCatalog + 'static,
{
    catalog: Arc<TCatalog>,
}

impl<TCatalog> EventCommandHandler<TCatalog>
where
    TCatalog: EventCatalog + 'static,
{
    pub fn new(catalog: Arc<TCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn add_event(&self, event: Option<Event>) -> Result<(), ApplicationError> {
        let Some(event) = event else {
            tracing::error!("add event process failed, event missing");
            return Err(ApplicationError::MissingEvent);
        };
        let id = event.id;
        match self
            .catalog
            .apply(id, |current| decide_add(current, &event))
            .await
        {
            Ok(()) => {
                tracing::info!(%event, "event added");
                Ok(())
            }
            Err(reason) => {
                tracing::info!(id, %reason, "event not added");
                Err(reason.into())
            }
        }
    }

    pub async fn complete_event(&self, id: EventId) -> Result<(), ApplicationError> {
        self.catalog
            .apply(id, |current| decide_complete(current, id))
            .await
            .inspect(|_| tracing::info!(id, "event removed"))
            .inspect_err(|reason| tracing::info!(id, %reason, "event not removed"))
            .map_err(Into::into)
    }

    pub async fn attach_market_ref_type(
        &self,
        id: EventId,
        market_ref_type: MarketRefType,
    ) -> Result<(), ApplicationError> {
        self.catalog
            .apply(id, |current| decide_attach(current, id, &market_ref_type))
            .await
            .inspect(|_| tracing::info!(id, %market_ref_type, "market ref type attached"))
            .inspect_err(|reason| tracing::info!(id, %reason, "market ref type not attached"))
            .map_err(Into::into)
    }

    pub async fn remove_market_ref_type(
        &self,
        id: EventId,
        market_ref_type: MarketRefType,
    ) -> Result<(), ApplicationError> {
        self.catalog
            .apply(id, |current| decide_remove(current, id, &market_ref_type))
            .await
            .inspect(|_| tracing::info!(id, %market_ref_type, "market ref type removed"))
            .inspect_err(|reason| tracing::info!(id, %reason, "market ref type not removed"))
            .map_err(Into::into)
    }
}
