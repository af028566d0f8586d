//! Gateway Service
//!
//! HTTP-facing side of the quoting system. Accepts quote submissions,
//! fires them at the pricing engine over the request channel, consumes
//! computed quotes from the quote channel, and serves lookups by
//! correlation identifier.
//!
//! **Key Invariants:**
//! - The registry write happens-before the request emission
//! - Every stored quote back-references a submitted request
//! - Lookup misses are a normal outcome, never an internal error
//! - No stage blocks on another; the correlation identifier is the only
//!   synchronization point

pub mod consumer;
pub mod error;
pub mod handlers;
pub mod models;
pub mod registry;
pub mod router;
pub mod service;
pub mod state;

pub use service::QuoteService;
