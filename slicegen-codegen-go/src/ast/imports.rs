//! Go import declaration builder.

use slicegen_codegen::builder::{CodeFragment, Renderable};

/// A single Go import declaration.
#[derive(Debug, Clone)]
pub struct Import {
    path: String,
    alias: Option<String>,
}

impl Import {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            alias: None,
        }
    }

    /// Dot-import, so the package's exported names resolve unqualified.
    pub fn dot(mut self) -> Self {
        self.alias = Some(".".to_string());
        self
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let line = match &self.alias {
            Some(alias) => format!("import {} \"{}\"", alias, self.path),
            None => format!("import \"{}\"", self.path),
        };
        vec![CodeFragment::Line(line)]
    }
}

#[cfg(test)]
mod tests {
    use slicegen_codegen::CodeBuilder;

    use super::*;

    fn render(import: Import) -> String {
        let mut builder = CodeBuilder::go();
        builder.emit(&import);
        builder.build()
    }

    #[test]
    fn test_plain_import() {
        assert_eq!(render(Import::new("fmt")), "import \"fmt\"\n");
    }

    #[test]
    fn test_dot_import() {
        assert_eq!(
            render(Import::new("example.com/project/customtype").dot()),
            "import . \"example.com/project/customtype\"\n"
        );
    }
}
