use crate::handlers::quotes;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    let quote_routes = Router::new()
        .route("/request", post(quotes::submit_quote))
        .route("/request/:id", get(quotes::get_request))
        .route("/result/:id", get(quotes::get_quote))
        .route("/requests", get(quotes::list_requests))
        .route("/results", get(quotes::list_quotes));

    Router::new()
        .nest("/quotes", quote_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
