use axum::extract::State;

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> String {
    state.queries.dump_full_structure().await
}
