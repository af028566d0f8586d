//! Quote types and rounding policy
//!
//! A `Quote` answers exactly one `QuoteRequest`. The `request_id` field is
//! the join key back to the request — a lookup key, not an ownership
//! pointer. Values always carry two fractional digits, rounded half-up.

use crate::ids::{QuoteId, RequestId};
use crate::request::QuoteRequest;
use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Number of fractional digits every quoted value carries
pub const VALUE_SCALE: u32 = 2;

/// Round a raw computed value to the quoting scale, half-up
///
/// `10.005` rounds to `10.01`, `10.004` rounds to `10.00`.
pub fn round_value(raw: Decimal) -> Decimal {
    raw.round_dp_with_strategy(VALUE_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// A computed quote for a previously submitted request
///
/// Wire shape (camelCase): `{ "id", "requestId", "subject", "value",
/// "timestamp" }`. The value travels as a decimal string to survive the
/// wire without floating-point loss; the timestamp is ISO-8601.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// The quote's own identity
    pub id: QuoteId,
    /// Back-reference to the request this quote answers
    pub request_id: RequestId,
    /// Subject copied from the request, not re-fetched
    pub subject: String,
    /// Quoted value, two fractional digits, rounded half-up
    pub value: Decimal,
    /// When the quote was computed
    pub timestamp: DateTime<Utc>,
}

impl Quote {
    /// Build a quote answering `request`, rounding `raw_value` to scale
    ///
    /// Mints a fresh [`QuoteId`], copies the subject, and stamps the
    /// current time.
    pub fn from_request(request: &QuoteRequest, raw_value: Decimal) -> Self {
        Self {
            id: QuoteId::new(),
            request_id: request.id,
            subject: request.subject.clone(),
            value: round_value(raw_value),
            timestamp: Utc::now(),
        }
    }
}
