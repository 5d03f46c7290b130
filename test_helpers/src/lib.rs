//! Shared test helpers for the structural workspace.
//!
//! Macro expansion tests compare emitted token streams. These helpers keep
//! the comparisons readable: token streams are rendered through
//! `TokenStream::to_string`, whitespace-normalised, and checked either for
//! exact equality or for containment of an expected fragment.

use anyhow::{Result, ensure};
use proc_macro2::TokenStream;

/// Renders a token stream with single-space separation.
///
/// `TokenStream::to_string` already inserts spaces between tokens; this
/// collapses any run of whitespace so comparisons are stable across `quote`
/// and hand-written expectations.
#[must_use]
pub fn normalise(tokens: &TokenStream) -> String {
    tokens
        .to_string()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Asserts that an expansion renders exactly the expected tokens.
///
/// # Errors
///
/// Returns an error describing both renderings when they differ.
pub fn assert_expansion_eq(expansion: &TokenStream, expected: &TokenStream) -> Result<()> {
    let actual = normalise(expansion);
    let wanted = normalise(expected);
    ensure!(
        actual == wanted,
        "expansion mismatch:\n  actual: {actual}\n  wanted: {wanted}"
    );
    Ok(())
}

/// Asserts that an expansion contains the expected fragment.
///
/// # Errors
///
/// Returns an error describing the expansion and the missing fragment.
pub fn assert_expansion_contains(expansion: &TokenStream, fragment: &TokenStream) -> Result<()> {
    let haystack = normalise(expansion);
    let needle = normalise(fragment);
    ensure!(
        haystack.contains(&needle),
        "fragment not found:\n  expansion: {haystack}\n  fragment: {needle}"
    );
    Ok(())
}
