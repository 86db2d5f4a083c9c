use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::modules::fsb_events::core::event::EventId;
use crate::modules::fsb_events::core::market_ref_type::MarketRefType;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<EventId>,
    body: Result<Json<MarketRefType>, JsonRejection>,
) -> StatusCode {
    let Json(market_ref_type) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY,
    };

    let _ = state
        .commands
        .remove_market_ref_type(id, market_ref_type)
        .await;
    StatusCode::OK
}
