//! The [`MessageBus`] trait and its error taxonomy

use async_trait::async_trait;
use futures::Stream;
use std::pin::Pin;
use thiserror::Error;

/// Errors that can occur on the bus seam
#[derive(Debug, Clone, Error)]
pub enum BusError {
    /// The broker rejected or lost a publish
    #[error("publish failed on channel '{channel}': {reason}")]
    PublishFailed {
        /// Channel the publish targeted
        channel: String,
        /// Broker-side failure description
        reason: String,
    },

    /// Subscribing to a channel failed
    #[error("subscribe failed on channel '{channel}': {reason}")]
    SubscribeFailed {
        /// Channel the subscription targeted
        channel: String,
        /// Broker-side failure description
        reason: String,
    },

    /// A subscriber fell behind and the broker dropped messages
    #[error("subscriber lagged on channel '{channel}', {missed} messages dropped")]
    Lagged {
        /// Channel the subscription was on
        channel: String,
        /// Number of messages skipped
        missed: u64,
    },
}

/// Stream of raw message payloads from a subscription
pub type MessageStream = Pin<Box<dyn Stream<Item = Result<Vec<u8>, BusError>> + Send>>;

/// Publish/subscribe over named channels
///
/// Payloads are opaque bytes (JSON in this system); the bus moves them
/// without inspecting them. `publish` resolves once the message is handed
/// to the transport — there is no delivery confirmation at this seam.
#[async_trait]
pub trait MessageBus: Send + Sync {
    /// Publish one message on `channel`
    async fn publish(&self, channel: &str, payload: Vec<u8>) -> Result<(), BusError>;

    /// Subscribe to `channel`, receiving every message published after
    /// the subscription is established
    async fn subscribe(&self, channel: &str) -> Result<MessageStream, BusError>;
}
