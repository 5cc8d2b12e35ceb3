//! Parameter resolution and manifest parsing for slicegen.
//!
//! Raw generation parameters (from CLI flags or a `[[slice]]` entry of
//! `slicegen.toml`) are resolved into an immutable [`GenerationSpec`].

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod element;
mod error;
mod manifest;
mod params;
mod validate;

pub use element::{ElementKind, ElementType, Modifier};
pub use error::{Error, Result};
pub use manifest::{Defaults, Manifest, SliceTarget, SliceToml, parse_manifest};
pub use params::{GenerationSpec, RawParams, UniqPolicy, resolve};
pub use validate::{GO_KEYWORDS, is_go_keyword};

/// Package name used when none is given.
pub const DEFAULT_PACKAGE: &str = "godash";

/// Element type used when none is given.
pub const DEFAULT_ELEMENT_TYPE: &str = "string";

/// Output directory used when none is given.
pub const DEFAULT_OUTPUT_DIR: &str = "go-dash-slice";

/// Manifest file name looked up by default.
pub const MANIFEST_FILE: &str = "slicegen.toml";
