//! Submission and lookup stages
//!
//! [`QuoteService`] is the long-lived object owning both registries and the
//! bus handle. It is constructed once at startup and injected into the HTTP
//! handlers and the quote-consumption task; there is no ambient state.

use crate::registry::Registry;
use messaging::{BusError, MessageBus};
use std::sync::Arc;
use tracing::{info, warn};
use types::channels::REQUEST_CHANNEL;
use types::ids::RequestId;
use types::quote::Quote;
use types::request::QuoteRequest;

/// Owns the correlation state on the submitting side
pub struct QuoteService {
    requests: Registry<QuoteRequest>,
    quotes: Registry<Quote>,
    bus: Arc<dyn MessageBus>,
}

impl QuoteService {
    /// Create a service publishing on the given bus
    pub fn new(bus: Arc<dyn MessageBus>) -> Self {
        Self {
            requests: Registry::new(),
            quotes: Registry::new(),
            bus,
        }
    }

    /// Submit a quote request for `subject`
    ///
    /// Mints a fresh correlation identifier, stores the request, then
    /// publishes it on the request channel. The registry write happens
    /// before the publish, so a lookup can never observe an identifier the
    /// registry does not know. Returns immediately — nothing waits for the
    /// pricing engine.
    ///
    /// # Errors
    ///
    /// Returns the bus error when the publish fails. The registry entry is
    /// deliberately not rolled back: the request stays visible as pending
    /// and will simply never resolve. No retry at this layer.
    pub async fn submit(&self, subject: impl Into<String>) -> Result<RequestId, BusError> {
        let request = QuoteRequest::new(subject);
        let id = request.id;

        self.requests.put(id, request.clone());

        let payload = serde_json::to_vec(&request).map_err(|err| BusError::PublishFailed {
            channel: REQUEST_CHANNEL.to_string(),
            reason: err.to_string(),
        })?;

        if let Err(err) = self.bus.publish(REQUEST_CHANNEL, payload).await {
            warn!(request_id = %id, error = %err, "request emission failed, entry stays pending");
            return Err(err);
        }

        info!(request_id = %id, "quote request submitted");
        Ok(id)
    }

    /// Look up a submitted request; `None` means never submitted here
    pub fn lookup_request(&self, id: &RequestId) -> Option<QuoteRequest> {
        self.requests.get(id)
    }

    /// Look up a consumed quote
    ///
    /// `None` covers both "not computed yet" and "never will be" — the two
    /// are indistinguishable on this side. Polling is the caller's job.
    pub fn lookup_quote(&self, id: &RequestId) -> Option<Quote> {
        self.quotes.get(id)
    }

    /// Snapshot of all pending requests (debug)
    pub fn list_requests(&self) -> Vec<(RequestId, QuoteRequest)> {
        self.requests.list_all()
    }

    /// Snapshot of all received quotes (debug)
    pub fn list_quotes(&self) -> Vec<(RequestId, Quote)> {
        self.quotes.list_all()
    }

    /// The quote registry, for the consumption task
    pub(crate) fn quote_registry(&self) -> &Registry<Quote> {
        &self.quotes
    }
}
