//! Comment Store REST Service Library
//!
//! Reads, adds, updates and deletes comment records kept in a single JSON
//! document on disk. The binary (`main.rs`) only wires configuration,
//! logging and the listener around what is defined here.
//!
//! ## Modules
//! - **`api`**: The HTTP surface. Routing, the existence guard, body validation,
//!   handlers, and the mapping from failures to status codes.
//! - **`comments`**: The `CommentRecord` model and `CommentService`, which runs each
//!   operation as a serialized read-modify-write against storage.
//! - **`config`**: Port, bind address, data file location and body limit.
//! - **`storage`**: Whole-document JSON load/save for the backing file.

pub mod api;
pub mod comments;
pub mod config;
pub mod storage;
