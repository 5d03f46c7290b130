//! Shared machinery for the three transformers.
//!
//! `parse` builds the shape view of a declaration (the ordered member or
//! variant list with per-slot classification) and interprets attribute
//! options. `generate` turns a shape view into the emitted `impl` blocks.
//! Each transformer drives the full pipeline itself; nothing is cached
//! between expansions.

pub(crate) mod crate_path;
pub(crate) mod generate;
pub(crate) mod parse;
