use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::modules::fsb_events::core::event::EventId;
use crate::shell::state::AppState;

/// Always 200, whether or not the id was stored.
pub async fn handle(State(state): State<AppState>, Path(id): Path<EventId>) -> StatusCode {
    let _ = state.commands.complete_event(id).await;
    StatusCode::OK
}
