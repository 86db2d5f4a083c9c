use crate::modules::fsb_events::core::decision::{Change, DecideError, Decision};
use crate::modules::fsb_events::core::event::Event;

pub fn decide_add(current: Option<&Event>, event: &Event) -> Decision {
    if current.is_some() {
        return Decision::Rejected {
            reason: DecideError::AlreadyExists { id: event.id },
        };
    }
    if !event.has_unique_market_ref_ids() {
        return Decision::Rejected {
            reason: DecideError::DuplicateMarketRefIds { id: event.id },
        };
    }
    Decision::Accepted {
        change: Change::Insert(event.clone()),
    }
}
