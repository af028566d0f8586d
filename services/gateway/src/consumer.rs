//! Quote consumption into the quote registry
//!
//! Symmetric counterpart to the pricing engine's emission: a task
//! subscribed to the quote channel that stores each arriving quote under
//! its back-referenced request identifier. No transformation happens here.
//!
//! Malformed payloads are logged and dropped — there is no synchronous
//! caller to notify and nothing to retry. Broker redelivery of the same
//! quote overwrites the previous entry (last-write-wins).

use crate::service::QuoteService;
use futures::StreamExt;
use messaging::{BusError, MessageBus};
use std::sync::Arc;
use tracing::{error, info, warn};
use types::channels::QUOTE_CHANNEL;
use types::quote::Quote;

/// Consume quotes from the bus until the subscription ends
///
/// Run this as a dedicated task; it only returns when the bus closes the
/// stream or the initial subscribe fails.
pub async fn consume_quotes(
    bus: Arc<dyn MessageBus>,
    service: Arc<QuoteService>,
) -> Result<(), BusError> {
    let mut stream = bus.subscribe(QUOTE_CHANNEL).await?;
    info!(channel = QUOTE_CHANNEL, "quote consumer subscribed");

    while let Some(message) = stream.next().await {
        let payload = match message {
            Ok(payload) => payload,
            Err(err) => {
                warn!(error = %err, "quote subscription hiccup");
                continue;
            }
        };

        match serde_json::from_slice::<Quote>(&payload) {
            Ok(quote) => {
                info!(request_id = %quote.request_id, quote_id = %quote.id, "quote received");
                service.quote_registry().put(quote.request_id, quote);
            }
            Err(err) => {
                error!(error = %err, "malformed quote payload dropped");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use messaging::InMemoryBus;
    use rust_decimal::Decimal;
    use types::request::QuoteRequest;

    async fn wait_for_quote(service: &QuoteService, id: &types::ids::RequestId) -> Quote {
        for _ in 0..100 {
            if let Some(quote) = service.lookup_quote(id) {
                return quote;
            }
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        }
        panic!("quote never arrived in the registry");
    }

    #[tokio::test]
    async fn test_consumed_quote_is_stored_under_its_back_reference() {
        let bus: Arc<dyn MessageBus> = Arc::new(InMemoryBus::new());
        let service = Arc::new(QuoteService::new(Arc::clone(&bus)));
        tokio::spawn(consume_quotes(Arc::clone(&bus), Arc::clone(&service)));
        tokio::task::yield_now().await;

        let request = QuoteRequest::new("Widget");
        let quote = Quote::from_request(&request, Decimal::new(12346, 2));
        bus.publish(QUOTE_CHANNEL, serde_json::to_vec(&quote).unwrap())
            .await
            .unwrap();

        let stored = wait_for_quote(&service, &request.id).await;
        assert_eq!(stored, quote);
    }

    #[tokio::test]
    async fn test_malformed_payload_is_dropped_and_consumption_continues() {
        let bus: Arc<dyn MessageBus> = Arc::new(InMemoryBus::new());
        let service = Arc::new(QuoteService::new(Arc::clone(&bus)));
        tokio::spawn(consume_quotes(Arc::clone(&bus), Arc::clone(&service)));
        tokio::task::yield_now().await;

        bus.publish(QUOTE_CHANNEL, b"not json at all".to_vec())
            .await
            .unwrap();
        bus.publish(QUOTE_CHANNEL, br#"{"id":"missing the rest"}"#.to_vec())
            .await
            .unwrap();

        let request = QuoteRequest::new("Widget");
        let quote = Quote::from_request(&request, Decimal::new(100, 2));
        bus.publish(QUOTE_CHANNEL, serde_json::to_vec(&quote).unwrap())
            .await
            .unwrap();

        let stored = wait_for_quote(&service, &request.id).await;
        assert_eq!(stored, quote);
        assert_eq!(service.list_quotes().len(), 1);
    }

    #[tokio::test]
    async fn test_redelivered_quote_overwrites_last_write_wins() {
        let bus: Arc<dyn MessageBus> = Arc::new(InMemoryBus::new());
        let service = Arc::new(QuoteService::new(Arc::clone(&bus)));
        tokio::spawn(consume_quotes(Arc::clone(&bus), Arc::clone(&service)));
        tokio::task::yield_now().await;

        let request = QuoteRequest::new("Widget");
        let first = Quote::from_request(&request, Decimal::new(100, 2));
        let second = Quote::from_request(&request, Decimal::new(200, 2));

        bus.publish(QUOTE_CHANNEL, serde_json::to_vec(&first).unwrap())
            .await
            .unwrap();
        bus.publish(QUOTE_CHANNEL, serde_json::to_vec(&second).unwrap())
            .await
            .unwrap();

        for _ in 0..100 {
            if service.lookup_quote(&request.id) == Some(second.clone()) {
                return;
            }
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        }
        panic!("second quote never replaced the first");
    }
}
