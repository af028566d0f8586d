//! Broker channel abstraction for the quoting system
//!
//! The gateway and the pricing engine never call each other; they exchange
//! fire-and-forget messages over two named channels. This crate defines
//! that seam: the [`MessageBus`] trait (publish and subscribe over named
//! channels, payloads are raw JSON bytes) and an in-process
//! [`InMemoryBus`] used for tests and single-process wiring.
//!
//! Delivery semantics — at-least-once redelivery, ordering within a
//! channel, consumer-group load balancing — belong to the bus
//! implementation. Callers neither retry nor deduplicate here.

pub mod bus;
pub mod memory;

pub use bus::{BusError, MessageBus, MessageStream};
pub use memory::InMemoryBus;
