use crate::error::AppError;
use crate::models::{SubmitQuoteRequest, SubmitQuoteResponse};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use std::collections::HashMap;
use types::ids::RequestId;
use types::quote::Quote;
use types::request::QuoteRequest;
use uuid::Uuid;

fn parse_request_id(raw: &str) -> Result<RequestId, AppError> {
    Uuid::parse_str(raw)
        .map(RequestId::from_uuid)
        .map_err(|_| AppError::BadRequest(format!("Invalid request id: {}", raw)))
}

/// Submit a new quote request
///
/// Stores the request, fires it at the pricing engine, and returns the
/// correlation identifier the caller will poll with. Never waits for the
/// computation.
pub async fn submit_quote(
    State(state): State<AppState>,
    Json(payload): Json<SubmitQuoteRequest>,
) -> Result<Json<SubmitQuoteResponse>, AppError> {
    if payload.subject.trim().is_empty() {
        return Err(AppError::BadRequest("Subject must not be empty".into()));
    }

    let request_id = state
        .service
        .submit(payload.subject)
        .await
        .map_err(|e| AppError::ServiceUnavailable(format!("Request emission failed: {}", e)))?;

    Ok(Json(SubmitQuoteResponse { request_id }))
}

/// Fetch a previously submitted request by its correlation identifier
pub async fn get_request(
    State(state): State<AppState>,
    Path(request_id): Path<String>,
) -> Result<Json<QuoteRequest>, AppError> {
    let id = parse_request_id(&request_id)?;

    state
        .service
        .lookup_request(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No quote request for id: {}", request_id)))
}

/// Fetch the quote answering a request, if it has arrived
///
/// A quote that has not been computed yet and one that never will be are
/// indistinguishable here; both are 404. Callers poll.
pub async fn get_quote(
    State(state): State<AppState>,
    Path(request_id): Path<String>,
) -> Result<Json<Quote>, AppError> {
    let id = parse_request_id(&request_id)?;

    state
        .service
        .lookup_quote(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No quote for request id: {}", request_id)))
}

/// All pending requests, keyed by correlation identifier (debug)
pub async fn list_requests(
    State(state): State<AppState>,
) -> Json<HashMap<String, QuoteRequest>> {
    Json(
        state
            .service
            .list_requests()
            .into_iter()
            .map(|(id, request)| (id.to_string(), request))
            .collect(),
    )
}

/// All received quotes, keyed by correlation identifier (debug)
pub async fn list_quotes(State(state): State<AppState>) -> Json<HashMap<String, Quote>> {
    Json(
        state
            .service
            .list_quotes()
            .into_iter()
            .map(|(id, quote)| (id.to_string(), quote))
            .collect(),
    )
}
