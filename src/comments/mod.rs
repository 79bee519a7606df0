//! Comments Module
//!
//! The record model and the four record operations (list, add, update, delete).
//!
//! ## Overview
//! `CommentService` composes the storage accessor with a single-writer lock.
//! Every call re-reads the backing document; mutations hold the write side of
//! the lock across the whole load-modify-save cycle so concurrent requests in
//! this process cannot lose each other's updates.
//!
//! ## Submodules
//! - **`types`**: `CommentId` and `CommentRecord`.
//! - **`service`**: `CommentService` and its `CommentError`.

pub mod service;
pub mod types;

#[cfg(test)]
mod tests;
