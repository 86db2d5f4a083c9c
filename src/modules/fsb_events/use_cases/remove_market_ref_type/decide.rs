use crate::modules::fsb_events::core::decision::{Change, DecideError, Decision};
use crate::modules::fsb_events::core::event::{Event, EventId};
use crate::modules::fsb_events::core::market_ref_type::MarketRefType;

pub fn decide_remove(
    current: Option<&Event>,
    id: EventId,
    market_ref_type: &MarketRefType,
) -> Decision {
    let Some(event) = current else {
        return Decision::Rejected {
            reason: DecideError::NotFound { id },
        };
    };
    if !event.has_market_ref_type(market_ref_type) {
        return Decision::Rejected {
            reason: DecideError::MarketRefTypeNotPresent {
                id,
                market_ref_type: market_ref_type.clone(),
            },
        };
    }

    let market_ref_types = event
        .market_ref_types
        .iter()
        .filter(|existing| existing.market_ref_id != market_ref_type.market_ref_id)
        .cloned()
        .collect();
    Decision::Accepted {
        change: Change::Replace(event.with_market_ref_types(market_ref_types)),
    }
}
