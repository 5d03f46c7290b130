//! Identifier providers.
//!
//! Identifier synthesis is modelled as an explicit capability rather than
//! ambient randomness: every wrapper type draws its fresh value from an
//! [`IdSource`], and tests substitute [`SequenceIdSource`] where the
//! process-wide [`RandomIdSource`] would be nondeterministic.

use rand::Rng;
use uuid::Uuid;

/// A provider of fresh identifier values, one method per identifier kind.
pub trait IdSource {
    /// Returns a fresh unique string identifier.
    fn string(&mut self) -> String;

    /// Returns a fresh integer identifier, always at least 1.
    fn integer(&mut self) -> u64;

    /// Returns a fresh value in `[0, 1)`.
    fn double(&mut self) -> f64;

    /// Returns a fresh boolean.
    fn boolean(&mut self) -> bool;

    /// Returns a fresh opaque unique token.
    fn token(&mut self) -> Uuid;
}

/// The process-wide random provider backing `Default` on the wrapper types.
///
/// String and token identifiers are version-4 UUIDs; the numeric kinds draw
/// from the thread-local generator. Stateless: every call is independent.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdSource;

impl IdSource for RandomIdSource {
    fn string(&mut self) -> String {
        let value = Uuid::new_v4().to_string();
        tracing::trace!(id = %value, "generated string identifier");
        value
    }

    fn integer(&mut self) -> u64 {
        let value = rand::rng().random_range(1..=u64::MAX);
        tracing::trace!(id = value, "generated integer identifier");
        value
    }

    fn double(&mut self) -> f64 {
        rand::rng().random()
    }

    fn boolean(&mut self) -> bool {
        rand::rng().random()
    }

    fn token(&mut self) -> Uuid {
        let value = Uuid::new_v4();
        tracing::trace!(id = %value, "generated token identifier");
        value
    }
}

/// A deterministic provider for tests and reproducible fixtures.
///
/// Values are derived from a counter starting at 1: strings render as
/// `id-1`, `id-2`, ..., integers are the counter itself, doubles spread the
/// counter over `[0, 1)`, booleans alternate starting with `true`, and
/// tokens embed the counter in an otherwise-zero UUID.
#[derive(Debug, Clone)]
pub struct SequenceIdSource {
    next: u64,
}

impl SequenceIdSource {
    /// Creates a source whose first draw is numbered 1.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 1 }
    }

    const fn bump(&mut self) -> u64 {
        let value = self.next;
        self.next += 1;
        value
    }
}

impl Default for SequenceIdSource {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for SequenceIdSource {
    fn string(&mut self) -> String {
        format!("id-{}", self.bump())
    }

    fn integer(&mut self) -> u64 {
        self.bump()
    }

    fn double(&mut self) -> f64 {
        f64::from(u32::try_from(self.bump() % 1024).unwrap_or_default()) / 1024.0
    }

    fn boolean(&mut self) -> bool {
        self.bump() % 2 == 1
    }

    fn token(&mut self) -> Uuid {
        Uuid::from_u128(u128::from(self.bump()))
    }
}
