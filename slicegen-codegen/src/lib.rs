//! Shared code generation utilities for slicegen.
//!
//! This crate provides language-agnostic abstractions used by the
//! language-specific generator (`slicegen-codegen-go`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`language`] - Language-specific abstractions (LanguageCodegen, NamingConvention, etc.)

pub mod builder;
pub mod language;

pub use builder::{CodeBuilder, CodeFragment, Renderable};
