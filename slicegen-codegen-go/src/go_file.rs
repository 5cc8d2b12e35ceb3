//! GoFile abstraction for structured Go file generation.
//!
//! Provides a high-level API for generating Go files with a generated-code
//! marker, a package clause, imports and body declarations.

use slicegen_codegen::{CodeBuilder, CodeFragment, Renderable};

use crate::ast::Import;

/// Marker that tells Go tooling the file is generated.
pub const GENERATED_MARKER: &str = "Code generated by slicegen. DO NOT EDIT.";

/// A structured representation of a Go source file.
///
/// Sections are rendered in order, separated by blank lines: the
/// generated-code marker, the package clause, imports, then each body
/// declaration.
///
/// # Example
///
/// ```ignore
/// let file = GoFile::new("godash")
///     .generated()
///     .import(Import::new("example.com/project/customtype").dot())
///     .add(wrapper_struct)
///     .render();
/// ```
pub struct GoFile {
    generated: bool,
    package: String,
    imports: Vec<Import>,
    body: Vec<Vec<CodeFragment>>,
}

impl GoFile {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            generated: false,
            package: package.into(),
            imports: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Start the file with the generated-code marker.
    pub fn generated(mut self) -> Self {
        self.generated = true;
        self
    }

    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    /// Add a body declaration (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Render the file with Go indentation (tabs).
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::go();

        if self.generated {
            builder.push_comment(GENERATED_MARKER);
            builder.push_blank();
        }

        builder.push_line(&format!("package {}", self.package));

        if !self.imports.is_empty() {
            builder.push_blank();
            for import in &self.imports {
                builder.emit(import);
            }
        }

        for fragments in &self.body {
            builder.push_blank();
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }
}
