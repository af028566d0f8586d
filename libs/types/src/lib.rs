//! Types library for the quoting system
//!
//! This library provides the type definitions shared by the gateway and the
//! pricing engine: correlation identifiers, the request and quote message
//! shapes, and the value rounding policy. The two services never share
//! memory; these types define the only contract between them — the wire.
//!
//! # Modules
//! - `ids`: Unique identifiers (RequestId, QuoteId)
//! - `request`: Quote request message
//! - `quote`: Quote message and rounding policy
//! - `channels`: Broker channel names

// Public modules
pub mod channels;
pub mod ids;
pub mod quote;
pub mod request;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::channels::*;
    pub use crate::ids::*;
    pub use crate::quote::*;
    pub use crate::request::*;
}
