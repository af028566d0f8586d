//! In-process bus for tests and single-process wiring

use crate::bus::{BusError, MessageBus, MessageStream};
use async_trait::async_trait;
use dashmap::DashMap;
use tokio::sync::broadcast;
use tracing::debug;

/// Buffered messages per channel before a slow subscriber starts lagging
const CHANNEL_CAPACITY: usize = 1024;

/// A [`MessageBus`] backed by tokio broadcast channels
///
/// One broadcast channel per name, created lazily on first publish or
/// subscribe. Messages published while a channel has no subscribers are
/// dropped — the seam is fire-and-forget, and nothing buffers for
/// listeners that do not exist yet. Subscribers that fall behind by more
/// than the channel capacity observe a [`BusError::Lagged`] item and then
/// continue from the oldest retained message.
pub struct InMemoryBus {
    channels: DashMap<String, broadcast::Sender<Vec<u8>>>,
}

impl InMemoryBus {
    /// Create an empty bus
    pub fn new() -> Self {
        Self {
            channels: DashMap::new(),
        }
    }

    fn sender(&self, channel: &str) -> broadcast::Sender<Vec<u8>> {
        self.channels
            .entry(channel.to_string())
            .or_insert_with(|| broadcast::channel(CHANNEL_CAPACITY).0)
            .clone()
    }
}

impl Default for InMemoryBus {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageBus for InMemoryBus {
    async fn publish(&self, channel: &str, payload: Vec<u8>) -> Result<(), BusError> {
        // A send error only means nobody is subscribed right now; the
        // message is dropped, which is the fire-and-forget contract.
        if self.sender(channel).send(payload).is_err() {
            debug!(channel, "message published with no subscribers, dropped");
        }
        Ok(())
    }

    async fn subscribe(&self, channel: &str) -> Result<MessageStream, BusError> {
        let mut receiver = self.sender(channel).subscribe();
        let channel = channel.to_string();

        let stream = async_stream::stream! {
            loop {
                match receiver.recv().await {
                    Ok(payload) => yield Ok(payload),
                    Err(broadcast::error::RecvError::Lagged(missed)) => {
                        yield Err(BusError::Lagged {
                            channel: channel.clone(),
                            missed,
                        });
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        };

        Ok(Box::pin(stream))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    #[tokio::test]
    async fn test_subscriber_receives_published_message() {
        let bus = InMemoryBus::new();
        let mut stream = bus.subscribe("quotes").await.unwrap();

        bus.publish("quotes", b"payload".to_vec()).await.unwrap();

        let received = stream.next().await.unwrap().unwrap();
        assert_eq!(received, b"payload");
    }

    #[tokio::test]
    async fn test_channels_are_isolated() {
        let bus = InMemoryBus::new();
        let mut requests = bus.subscribe("quote-requests").await.unwrap();
        let mut quotes = bus.subscribe("quotes").await.unwrap();

        bus.publish("quote-requests", b"a request".to_vec())
            .await
            .unwrap();
        bus.publish("quotes", b"a quote".to_vec()).await.unwrap();

        assert_eq!(requests.next().await.unwrap().unwrap(), b"a request");
        assert_eq!(quotes.next().await.unwrap().unwrap(), b"a quote");
    }

    #[tokio::test]
    async fn test_publish_without_subscribers_is_not_an_error() {
        let bus = InMemoryBus::new();
        bus.publish("quotes", b"dropped".to_vec()).await.unwrap();
    }

    #[tokio::test]
    async fn test_every_subscriber_sees_every_message() {
        let bus = InMemoryBus::new();
        let mut first = bus.subscribe("quotes").await.unwrap();
        let mut second = bus.subscribe("quotes").await.unwrap();

        bus.publish("quotes", b"broadcast".to_vec()).await.unwrap();

        assert_eq!(first.next().await.unwrap().unwrap(), b"broadcast");
        assert_eq!(second.next().await.unwrap().unwrap(), b"broadcast");
    }

    #[tokio::test]
    async fn test_messages_arrive_in_publish_order() {
        let bus = InMemoryBus::new();
        let mut stream = bus.subscribe("quote-requests").await.unwrap();

        for i in 0u8..10 {
            bus.publish("quote-requests", vec![i]).await.unwrap();
        }
        for i in 0u8..10 {
            assert_eq!(stream.next().await.unwrap().unwrap(), vec![i]);
        }
    }
}
