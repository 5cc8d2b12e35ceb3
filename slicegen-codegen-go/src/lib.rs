//! Go code generator for slicegen.
//!
//! Renders the ten slice operations, specialized for one element type,
//! plus a chainable wrapper, into a Go source file.
//!
//! # Usage
//!
//! This crate is used internally by the `slicegen` CLI tool. You typically don't need
//! to use it directly.
//!
//! ```ignore
//! use slicegen_codegen_go::{Generator, LanguageCodegen};
//! use slicegen_manifest::Manifest;
//! use std::path::Path;
//!
//! let manifest = Manifest::from_file("slicegen.toml")?;
//! let generator = Generator::new(manifest.targets());
//!
//! // Preview files without writing
//! let files = generator.preview();
//!
//! // Generate files to disk
//! let result = generator.generate(Path::new("."))?;
//! ```
//!
//! # Generated Output
//!
//! Each target produces one file containing, in order:
//!
//! - the `// Code generated ... DO NOT EDIT.` marker and package clause
//! - a dot import of the element type's package, when given
//! - the unexported `chain{Stem}` wrapper, its `New{Stem}Slice` constructor and `Value`
//! - `{Op}{Stem}` free functions and matching wrapper methods

mod generator;
mod go_file;
mod naming;
mod operations;
mod renderer;

pub mod ast;
pub mod files;

pub use ast::{Func, Import, Param, Struct};
pub use generator::Generator;
pub use go_file::{GENERATED_MARKER, GoFile};
pub use naming::{DerivedIdentifiers, GO_NAMING, SymbolCollision, find_collisions};
pub use operations::{EqualitySupport, UNIQ_PANIC_MESSAGE};
pub use renderer::render;
pub use slicegen_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
