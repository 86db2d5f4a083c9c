use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::modules::fsb_events::use_cases::filter_events::query::EventFilter;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterEventsParams {
    pub cat: Option<String>,
    pub subcat: Option<String>,
    pub market_ref_name: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<FilterEventsParams>,
) -> Json<Vec<String>> {
    let filter = EventFilter::new(
        params.cat.as_deref(),
        params.subcat.as_deref(),
        params.market_ref_name.as_deref(),
    );
    Json(state.queries.filter_event_names(&filter).await)
}
