//! Price models
//!
//! A price model is a pure function from subject to raw value: no I/O, no
//! side effects, injectable into the processor. Rounding is not the
//! model's job — the quote construction path rounds to scale.

use rand::Rng;
use rust_decimal::prelude::*;
use rust_decimal::Decimal;

/// Computes a raw (unrounded) value for a subject
pub trait PriceModel: Send + Sync {
    /// Price the given subject
    fn price(&self, subject: &str) -> Decimal;
}

/// Length-based price with a random market swing
///
/// Base price is 100 per character of the subject, scaled by a uniform
/// random factor in `[0.5, 1.5)`. A real deployment would price against a
/// catalog or an upstream feed; this model keeps the service self-contained.
pub struct RandomPriceModel;

impl PriceModel for RandomPriceModel {
    fn price(&self, subject: &str) -> Decimal {
        let base = Decimal::from(subject.len() as u64 * 100);
        let swing = rand::thread_rng().gen_range(0.5..1.5);
        // A uniform draw from [0.5, 1.5) always converts; ONE is the
        // no-swing fallback if it ever does not.
        base * Decimal::from_f64(swing).unwrap_or(Decimal::ONE)
    }
}

/// Model returning the same value for every subject, for tests
pub struct FixedPriceModel(pub Decimal);

impl PriceModel for FixedPriceModel {
    fn price(&self, _subject: &str) -> Decimal {
        self.0
    }
}
