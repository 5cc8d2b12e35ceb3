//! Language-agnostic code generation traits.

use std::path::{Path, PathBuf};

use eyre::Result;

/// Trait for language-specific code generators.
///
/// Implement this trait to add support for generating slice helpers in a new language.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "go")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "go")
    fn file_extension(&self) -> &'static str;

    /// Preview generated files without writing to disk
    fn preview(&self) -> Vec<PreviewFile>;

    /// Generate all files relative to the given base directory
    fn generate(&self, base_dir: &Path) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files that were (re)written
    pub written: Vec<PathBuf>,
    /// Files whose content was already up to date
    pub unchanged: Vec<PathBuf>,
}

impl GenerateResult {
    /// Total number of files produced, written or not.
    pub fn len(&self) -> usize {
        self.written.len() + self.unchanged.len()
    }

    /// Whether no file was produced.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Path the file would be written to
    pub path: String,
    /// File content
    pub content: String,
}
