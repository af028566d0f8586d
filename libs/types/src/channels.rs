//! Broker channel names
//!
//! Both services must agree on these; they are the only addressing the
//! correlation layer uses on the broker.

/// Channel carrying serialized [`crate::request::QuoteRequest`] messages
pub const REQUEST_CHANNEL: &str = "quote-requests";

/// Channel carrying serialized [`crate::quote::Quote`] messages
pub const QUOTE_CHANNEL: &str = "quotes";
