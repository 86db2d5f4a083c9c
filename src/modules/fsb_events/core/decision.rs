use crate::modules::fsb_events::core::event::{Event, EventId};
use crate::modules::fsb_events::core::market_ref_type::{MarketRefId, MarketRefType};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("event id {id} already present")]
    AlreadyExists { id: EventId },

    #[error("event not found for id {id}")]
    NotFound { id: EventId },

    #[error("{market_ref_type} already present in event {id}")]
    MarketRefTypeAlreadyPresent {
        id: EventId,
        market_ref_type: MarketRefType,
    },

    #[error("{market_ref_type} not present in event {id}")]
    MarketRefTypeNotPresent {
        id: EventId,
        market_ref_type: MarketRefType,
    },

    #[error("event {id} already carries market ref id {market_ref_id} under another name")]
    MarketRefIdConflict {
        id: EventId,
        market_ref_id: MarketRefId,
    },

    #[error("event {id} carries the same market ref id more than once")]
    DuplicateMarketRefIds { id: EventId },
}

/// What an accepted decision does to the stored entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    Insert(Event),
    Replace(Event),
    Remove,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Decision {
    Accepted { change: Change },
    Rejected { reason: DecideError },
}
