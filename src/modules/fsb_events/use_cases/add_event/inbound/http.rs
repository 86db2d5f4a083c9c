use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};

use crate::modules::fsb_events::core::event::Event;
use crate::shell::state::AppState;

/// A JSON `null` body is a missing event: logged, ignored, still 200.
pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<Option<Event>>, JsonRejection>,
) -> StatusCode {
    let Json(event) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY,
    };

    let _ = state.commands.add_event(event).await;
    StatusCode::OK
}
