//! Identifier wrapper types injected by `#[identify]`.
//!
//! Each wrapper pairs one identifier kind from the synthesis table with a
//! `Default` implementation drawing a fresh value from [`RandomIdSource`],
//! so a synthesised `id` field is assigned once at construction via
//! `Default::default()` and remains stable for the instance's lifetime.
//! [`generate`](StringId::generate) accepts any [`IdSource`] for
//! deterministic construction in tests.

use core::fmt;

use uuid::Uuid;

use crate::source::{IdSource, RandomIdSource};

/// A string identifier; fresh values are version-4 UUID renderings.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StringId(String);

impl StringId {
    /// Draws a fresh identifier from `source`.
    pub fn generate(source: &mut dyn IdSource) -> Self {
        Self(source.string())
    }

    /// Returns the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for StringId {
    fn default() -> Self {
        Self::generate(&mut RandomIdSource)
    }
}

impl fmt::Display for StringId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for StringId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for StringId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// An integer identifier; fresh values are uniformly random and at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IntId(u64);

impl IntId {
    /// Draws a fresh identifier from `source`.
    pub fn generate(source: &mut dyn IdSource) -> Self {
        Self(source.integer())
    }

    /// Returns the identifier value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Default for IntId {
    fn default() -> Self {
        Self::generate(&mut RandomIdSource)
    }
}

impl fmt::Display for IntId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u64> for IntId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A floating-point identifier; fresh values are uniform in `[0, 1)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatId(f64);

impl FloatId {
    /// Draws a fresh identifier from `source`.
    pub fn generate(source: &mut dyn IdSource) -> Self {
        Self(source.double())
    }

    /// Returns the identifier value.
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl Default for FloatId {
    fn default() -> Self {
        Self::generate(&mut RandomIdSource)
    }
}

impl fmt::Display for FloatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<f64> for FloatId {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

/// A boolean identifier; fresh values are a fair coin flip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoolId(bool);

impl BoolId {
    /// Draws a fresh identifier from `source`.
    pub fn generate(source: &mut dyn IdSource) -> Self {
        Self(source.boolean())
    }

    /// Returns the identifier value.
    #[must_use]
    pub const fn get(self) -> bool {
        self.0
    }
}

impl Default for BoolId {
    fn default() -> Self {
        Self::generate(&mut RandomIdSource)
    }
}

impl fmt::Display for BoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<bool> for BoolId {
    fn from(value: bool) -> Self {
        Self(value)
    }
}

/// An opaque unique token identifier backed by a UUID.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token(Uuid);

impl Token {
    /// Draws a fresh token from `source`.
    pub fn generate(source: &mut dyn IdSource) -> Self {
        Self(source.token())
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn uuid(self) -> Uuid {
        self.0
    }
}

impl Default for Token {
    fn default() -> Self {
        Self::generate(&mut RandomIdSource)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<Uuid> for Token {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for wrapper generation against a deterministic source.

    use super::*;
    use crate::source::SequenceIdSource;
    use rstest::rstest;

    #[rstest]
    fn wrappers_draw_from_the_supplied_source() {
        let mut source = SequenceIdSource::new();
        assert_eq!(StringId::generate(&mut source).as_str(), "id-1");
        assert_eq!(IntId::generate(&mut source).get(), 2);
        assert!(BoolId::generate(&mut source).get(), "the third draw is odd");
        assert_eq!(Token::generate(&mut source).uuid(), Uuid::from_u128(4));
    }

    #[rstest]
    fn default_string_ids_are_distinct() {
        assert_ne!(StringId::default(), StringId::default());
    }

    #[rstest]
    fn default_int_ids_are_positive() {
        for _ in 0..64 {
            assert!(IntId::default().get() >= 1);
        }
    }

    #[rstest]
    fn default_float_ids_stay_in_unit_interval() {
        for _ in 0..64 {
            let value = FloatId::default().get();
            assert!((0.0..1.0).contains(&value), "out of range: {value}");
        }
    }
}
