//! Procedural macros for the `structural` crate.
//!
//! Three transformers are provided, each consuming one annotated type
//! declaration and emitting additional declarations alongside it:
//!
//! - [`StructuralEq`](macro@StructuralEq) derives a structural
//!   `PartialEq` implementation from the declared fields or variants.
//! - [`StructuralHash`](macro@StructuralHash) derives a matching
//!   `core::hash::Hash` implementation feeding the same fields, in the same
//!   order, into the supplied hasher.
//! - [`identify`](macro@identify) ensures the declaration carries a stable
//!   per-instance identifier and implements `structural::Identifiable`.
//!
//! Each transformer re-derives the field list independently from the syntax
//! tree it is handed; there is no shared state between expansions. Users
//! normally depend on the `structural` crate, which re-exports all three.

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod derive;

use derive::parse::IdentifyOpts;

/// Derives a structural `PartialEq` implementation.
///
/// Fields are compared in declaration order, short-circuiting at the first
/// mismatch. Enum values are equal only when they carry the same variant and
/// pairwise-equal payload slots. Fields annotated `#[structural(skip)]` are
/// excluded. Function-typed slots are never comparable: a value containing
/// one compares unequal even to itself.
///
/// # Examples
///
/// ```ignore
/// use structural::StructuralEq;
///
/// #[derive(StructuralEq)]
/// struct Point {
///     x: f64,
///     y: f64,
/// }
///
/// assert!(Point { x: 1.0, y: 2.0 } == Point { x: 1.0, y: 2.0 });
/// ```
#[proc_macro_derive(StructuralEq, attributes(structural))]
pub fn derive_structural_eq(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    derive::generate::equality::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Derives a structural `core::hash::Hash` implementation.
///
/// Fields feed the hasher in declaration order. Enum values feed their
/// variant's zero-based declaration index first, then each payload slot.
/// Fields annotated `#[structural(skip)]` and function-typed slots
/// contribute nothing. Float fields are hashed through `structural::hash`
/// helpers so that `PartialEq`-equal values hash identically.
///
/// # Examples
///
/// ```ignore
/// use structural::{StructuralEq, StructuralHash};
///
/// #[derive(StructuralEq, StructuralHash)]
/// enum Status {
///     Ok,
///     Error { code: u32 },
/// }
/// ```
#[proc_macro_derive(StructuralHash, attributes(structural))]
pub fn derive_structural_hash(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    derive::generate::hash::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Ensures the annotated declaration carries a stable identifier.
///
/// Structs with an existing field named `id` only gain an
/// `structural::Identifiable` implementation returning that field. Structs
/// without one have an `id` field appended whose type is selected by the
/// `id_type` option (`"string"`, `"integer"`, `"double"`, `"boolean"`, or
/// `"token"`; default `"string"`); the field's `Default` draws a fresh value
/// from the process random source, so the identifier is assigned once at
/// construction. With `optional`, the field is an `Option` that defaults to
/// absent. Enums without payload-carrying variants are their own identity.
///
/// # Examples
///
/// ```ignore
/// use structural::{Identifiable, identify};
///
/// #[identify(id_type = "integer")]
/// struct Session {
///     user: String,
/// }
///
/// let session = Session { user: "ada".into(), id: Default::default() };
/// assert!(session.id().get() >= 1);
/// ```
#[proc_macro_attribute]
pub fn identify(args: TokenStream, item: TokenStream) -> TokenStream {
    let mut opts = IdentifyOpts::default();
    let opts_parser = syn::meta::parser(|meta| opts.apply(&meta));
    parse_macro_input!(args with opts_parser);
    let item = parse_macro_input!(item as syn::Item);
    derive::generate::identity::expand(&opts, item)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
