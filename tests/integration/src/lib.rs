//! Integration test utilities for the Linker API
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API, backed by in-memory repositories.

pub mod helpers;
pub mod memory;

pub use fixtures::*;
pub use helpers::*;
pub use memory::{memory_context, MemoryStore};
