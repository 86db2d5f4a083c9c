use crate::modules::fsb_events::core::decision::{Change, DecideError, Decision};
use crate::modules::fsb_events::core::event::{Event, EventId};
use crate::modules::fsb_events::core::market_ref_type::MarketRefType;

pub fn decide_attach(
    current: Option<&Event>,
    id: EventId,
    market_ref_type: &MarketRefType,
) -> Decision {
    let Some(event) = current else {
        return Decision::Rejected {
            reason: DecideError::NotFound { id },
        };
    };
    if event.has_market_ref_type(market_ref_type) {
        return Decision::Rejected {
            reason: DecideError::MarketRefTypeAlreadyPresent {
                id,
                market_ref_type: market_ref_type.clone(),
            },
        };
    }
    // Same id under another name would break id uniqueness within the event.
    if event
        .market_ref_types
        .iter()
        .any(|existing| existing.market_ref_id == market_ref_type.market_ref_id)
    {
        return Decision::Rejected {
            reason: DecideError::MarketRefIdConflict {
                id,
                market_ref_id: market_ref_type.market_ref_id,
            },
        };
    }

    let mut market_ref_types = event.market_ref_types.clone();
    market_ref_types.push(market_ref_type.clone());
    Decision::Accepted {
        change: Change::Replace(event.with_market_ref_types(market_ref_types)),
    }
}
