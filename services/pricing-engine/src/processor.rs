//! Quote processor
//!
//! The computation stage: consume a request message, price it, publish the
//! quote. This service shares no mutable state with the gateway — it talks
//! only through the message it consumes and the message it emits, and it
//! never touches a registry. Registry population on the quote side is the
//! gateway's consumption handler.
//!
//! Malformed inbound messages are logged and dropped: no retry and no
//! escalation, since no response is expected by a caller that never
//! submitted a valid request. A failed quote publish is likewise logged
//! and dropped — fire-and-forget, the request simply never resolves.

use crate::pricing::PriceModel;
use futures::StreamExt;
use messaging::{BusError, MessageBus};
use std::sync::Arc;
use tracing::{error, info, warn};
use types::channels::{QUOTE_CHANNEL, REQUEST_CHANNEL};
use types::quote::Quote;
use types::request::QuoteRequest;

/// Consumes quote requests and publishes priced quotes
pub struct QuoteProcessor {
    bus: Arc<dyn MessageBus>,
    model: Arc<dyn PriceModel>,
}

impl QuoteProcessor {
    /// Create a processor pricing with the given model
    pub fn new(bus: Arc<dyn MessageBus>, model: Arc<dyn PriceModel>) -> Self {
        Self { bus, model }
    }

    /// Price one request into a quote
    ///
    /// The raw model value is rounded to two fractional digits, half-up,
    /// by the quote constructor; the quote back-references the request's
    /// correlation identifier and copies its subject.
    pub fn process(&self, request: &QuoteRequest) -> Quote {
        let raw = self.model.price(&request.subject);
        Quote::from_request(request, raw)
    }

    /// Consume the request channel until the subscription ends
    ///
    /// # Errors
    ///
    /// Returns the bus error if the initial subscribe fails. Per-message
    /// failures never end the loop.
    pub async fn run(&self) -> Result<(), BusError> {
        let mut stream = self.bus.subscribe(REQUEST_CHANNEL).await?;
        info!(channel = REQUEST_CHANNEL, "quote processor subscribed");

        while let Some(message) = stream.next().await {
            let payload = match message {
                Ok(payload) => payload,
                Err(err) => {
                    warn!(error = %err, "request subscription hiccup");
                    continue;
                }
            };

            let request = match serde_json::from_slice::<QuoteRequest>(&payload) {
                Ok(request) => request,
                Err(err) => {
                    error!(error = %err, "malformed request payload dropped");
                    continue;
                }
            };

            let quote = self.process(&request);
            info!(request_id = %request.id, value = %quote.value, "quote computed");

            let encoded = match serde_json::to_vec(&quote) {
                Ok(encoded) => encoded,
                Err(err) => {
                    error!(request_id = %request.id, error = %err, "quote serialization failed");
                    continue;
                }
            };

            if let Err(err) = self.bus.publish(QUOTE_CHANNEL, encoded).await {
                warn!(request_id = %request.id, error = %err, "quote emission failed, dropped");
            }
        }

        Ok(())
    }
}
