//! Structural equality, hashing, and identity derivation.
//!
//! This crate derives the boilerplate a type's declared fields already
//! determine: a structural `PartialEq`, a consistent `core::hash::Hash`,
//! and a stable per-instance identifier. The macros themselves live in the
//! companion `structural_macros` crate and are re-exported here.
//!
//! ```rust
//! use structural::{Identifiable, StructuralEq, StructuralHash, identify};
//!
//! #[identify]
//! #[derive(StructuralEq, StructuralHash)]
//! struct Point {
//!     x: f64,
//!     y: f64,
//! }
//!
//! let a = Point { x: 1.0, y: 2.0, id: Default::default() };
//! let b = Point { x: 1.0, y: 2.0, id: Default::default() };
//! // Identity is per-instance; equality and hash are purely structural.
//! assert!(a == b);
//! assert!(a.id() != b.id());
//! ```
//!
//! Equality and hashing walk the declared members in declaration order, so
//! any two values the generated equality deems equal feed the hasher the
//! same sequence and hash identically. Fields marked `#[structural(skip)]`
//! are excluded from both routines. Function-typed fields are never
//! comparable and never hashed; interior-mutability cells compare and hash
//! the contained value.

pub use structural_macros::{StructuralEq, StructuralHash, identify};

pub mod hash;
mod id;
mod identity;
mod source;

pub use id::{BoolId, FloatId, IntId, StringId, Token};
pub use identity::Identifiable;
pub use source::{IdSource, RandomIdSource, SequenceIdSource};
