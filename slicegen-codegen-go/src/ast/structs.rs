//! Go struct type builder.

use slicegen_codegen::builder::{CodeFragment, Renderable};

/// A field in a Go struct.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub ty: String,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// Builder for Go struct type declarations.
#[derive(Debug, Clone)]
pub struct Struct {
    name: String,
    doc: Option<String>,
    fields: Vec<Field>,
}

impl Struct {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            fields: Vec::new(),
        }
    }

    /// Doc comment. The type name is prepended, as godoc expects.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn field(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.fields.push(Field::new(name, ty));
        self
    }
}

impl Renderable for Struct {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::comment(format!("{} {}", self.name, doc)));
        }

        // Align types the way gofmt does
        let width = self.fields.iter().map(|f| f.name.len()).max().unwrap_or(0);
        let body = self
            .fields
            .iter()
            .map(|f| CodeFragment::line(format!("{:width$} {}", f.name, f.ty, width = width)))
            .collect();

        fragments.push(CodeFragment::braced(
            format!("type {} struct {{", self.name),
            body,
        ));
        fragments
    }
}

#[cfg(test)]
mod tests {
    use slicegen_codegen::CodeBuilder;

    use super::*;

    #[test]
    fn test_struct_fields_are_aligned() {
        let node = Struct::new("chainInt")
            .field("isPtr", "bool")
            .field("v", "[]int");

        let mut builder = CodeBuilder::go();
        builder.emit(&node);
        assert_eq!(
            builder.build(),
            "type chainInt struct {\n\tisPtr bool\n\tv     []int\n}\n"
        );
    }

    #[test]
    fn test_struct_with_doc() {
        let mut builder = CodeBuilder::go();
        builder.emit(&Struct::new("empty").doc("holds nothing."));
        assert_eq!(builder.build(), "// empty holds nothing.\ntype empty struct {\n}\n");
    }
}
