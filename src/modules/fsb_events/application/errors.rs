use thiserror::Error;

use crate::modules::fsb_events::core::decision::DecideError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Rejected(#[from] DecideError),

    #[error("add event process failed: event missing")]
    MissingEvent,
}
