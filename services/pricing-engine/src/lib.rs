//! Pricing Engine Service
//!
//! Worker side of the quoting system: consumes quote requests from the
//! request channel, computes a price with a pluggable model, and publishes
//! the quote on the quote channel.
//!
//! **Key Invariants:**
//! - Every emitted quote back-references the consumed request's identifier
//! - Values carry exactly two fractional digits, rounded half-up
//! - Malformed messages are dropped, never retried or escalated
//! - No shared mutable state with the gateway

pub mod pricing;
pub mod processor;

pub use pricing::{FixedPriceModel, PriceModel, RandomPriceModel};
pub use processor::QuoteProcessor;
