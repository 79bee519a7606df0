//! Storage Module
//!
//! Persists the full comment list as one JSON document on disk.
//!
//! ## Core Concepts
//! - **Whole-document I/O**: every read parses the entire file and every write
//!   replaces it. There are no partial updates and no in-process cache.
//! - **Explicit location**: the document path is handed to `JsonDocument` at
//!   construction and never read from global state.
//! - **No atomicity**: writes truncate and rewrite the file in place. A crash
//!   mid-write can leave a truncated document, which later reads report as
//!   `StoreError::Malformed`.

pub mod document;

pub use document::{JsonDocument, StoreError};
