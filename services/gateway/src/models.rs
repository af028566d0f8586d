use serde::{Deserialize, Serialize};
use types::ids::RequestId;

/// Body of `POST /quotes/request`
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitQuoteRequest {
    pub subject: String,
}

/// Response to a successful submission
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitQuoteResponse {
    pub request_id: RequestId,
}
