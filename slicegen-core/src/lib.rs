//! Core utilities and types for slicegen.
//!
//! This crate provides the file emitter and the string helpers shared
//! across the slicegen crates.

mod file;
mod utils;

// File operations
pub use file::{EmitError, GeneratedFile, StagedFile, WriteBatch, WriteResult};
// String utilities
pub use utils::{capitalize_first, is_identifier, to_pascal_case, to_snake_case};
