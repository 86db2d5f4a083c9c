use axum::{
    Extension, Router,
    routing::{get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::fsb_events::use_cases::add_event::inbound::http as add_http;
use crate::modules::fsb_events::use_cases::attach_market_ref_type::inbound::http as attach_http;
use crate::modules::fsb_events::use_cases::complete_event::inbound::http as complete_http;
use crate::modules::fsb_events::use_cases::dump_full_structure::inbound::http as dump_http;
use crate::modules::fsb_events::use_cases::filter_events::inbound::http as filter_http;
use crate::modules::fsb_events::use_cases::remove_market_ref_type::inbound::http as remove_http;
use crate::shell::graphql;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = graphql::schema(state.clone());

    Router::new()
        .route("/fsbEvents/addEvent", post(add_http::handle))
        .route("/fsbEvents/completeEvent/{id}", post(complete_http::handle))
        .route("/fsbEvents/updateMarketRegType/{id}", put(attach_http::handle))
        .route("/fsbEvents/removeMarketRefType/{id}", post(remove_http::handle))
        .route("/fsbEvents/filterEvents", get(filter_http::handle))
        .route("/fsbEvents/dumpFullStructure", get(dump_http::handle))
        .route("/graphql", get(graphql::graphiql).post(graphql::graphql))
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
