//! Unit tests for attribute parsing and shape collection.
