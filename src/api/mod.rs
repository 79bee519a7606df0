//! HTTP API Module
//!
//! Exposes the comment operations over REST, all under `/api`.
//!
//! ## Request chain
//! Router → existence guard → body validator (mutating routes) → handler.
//! Every failure is turned into a JSON `{ "error": true, "message": ... }`
//! body by `ApiError`, except unknown routes which get a plain-text 404.
//!
//! ## Submodules
//! - **`protocol`**: Route paths and DTOs.
//! - **`validator`**: Exact-field-set body validation and the `ValidComment` extractor.
//! - **`guard`**: Middleware rejecting requests while the backing document is missing.
//! - **`handlers`**: Axum handlers for list/add/update/delete.
//! - **`router`**: Wires everything into an `axum::Router`.
//! - **`error`**: `ApiError` and its status mapping.

pub mod error;
pub mod guard;
pub mod handlers;
pub mod protocol;
pub mod router;
pub mod validator;

pub use router::build_router;
