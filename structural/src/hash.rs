//! Float hashing helpers used by generated `Hash` implementations.
//!
//! Rust floats implement `PartialEq` but not `Hash`, so derived structural
//! hashes feed the bit pattern instead. Negative zero compares equal to
//! positive zero and must therefore hash identically; it is folded onto
//! `+0.0` before the bits are taken. `NaN` never compares equal to
//! anything, so its bit pattern needs no normalisation.

use core::hash::Hasher;

/// Feeds an `f64` member's normalised bit pattern into the hasher.
pub fn float64<H: Hasher>(value: f64, state: &mut H) {
    let normalised = if value == 0.0 { 0.0_f64 } else { value };
    state.write_u64(normalised.to_bits());
}

/// Feeds an `f32` member's normalised bit pattern into the hasher.
pub fn float32<H: Hasher>(value: f32, state: &mut H) {
    let normalised = if value == 0.0 { 0.0_f32 } else { value };
    state.write_u32(normalised.to_bits());
}
