use crate::modules::fsb_events::core::decision::{Change, DecideError, Decision};
use crate::modules::fsb_events::core::event::{Event, EventId};

pub fn decide_complete(current: Option<&Event>, id: EventId) -> Decision {
    match current {
        Some(_) => Decision::Accepted {
            change: Change::Remove,
        },
        None => Decision::Rejected {
            reason: DecideError::NotFound { id },
        },
    }
}
