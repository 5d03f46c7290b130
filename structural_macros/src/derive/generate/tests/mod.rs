//! Unit tests for the emitted `impl` blocks.

mod identity;
