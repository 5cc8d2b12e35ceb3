//! Manifest types and parsing for slicegen.toml files.

mod file;
mod parse;

use std::path::PathBuf;

pub use file::SliceToml;
pub use parse::parse_manifest;
use serde::Deserialize;

use crate::{GenerationSpec, UniqPolicy};

/// Root manifest for slicegen.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Values shared by every target
    #[serde(default)]
    pub defaults: Defaults,

    /// One entry per generated file
    #[serde(default, rename = "slice")]
    pub slices: Vec<SliceTarget>,

    #[serde(skip)]
    targets: Vec<GenerationSpec>,
}

impl Manifest {
    /// Resolved targets, in manifest order.
    pub fn targets(&self) -> &[GenerationSpec] {
        &self.targets
    }
}

/// The `[defaults]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Defaults {
    pub package: Option<String>,
    pub import: Option<String>,
    pub dir: Option<PathBuf>,
    pub uniq: Option<UniqPolicy>,
}

/// A `[[slice]]` entry. Unset keys fall back to `[defaults]`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SliceTarget {
    #[serde(rename = "type")]
    pub element_type: toml::Spanned<String>,
    pub package: Option<String>,
    pub import: Option<String>,
    pub name: Option<String>,
    pub dir: Option<PathBuf>,
    pub out: Option<String>,
    pub uniq: Option<UniqPolicy>,
}
