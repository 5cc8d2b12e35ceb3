//! Go function and method builder.

use slicegen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A parameter in a Go function.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// Builder for Go functions and methods.
#[derive(Debug, Clone)]
pub struct Func {
    name: String,
    doc: Option<String>,
    receiver: Option<Param>,
    params: Vec<Param>,
    result: Option<String>,
    body: Vec<CodeFragment>,
}

impl Func {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            receiver: None,
            params: Vec::new(),
            result: None,
            body: Vec::new(),
        }
    }

    /// Doc comment. The function name is prepended, as godoc expects.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Make this a method on `ty`.
    pub fn receiver(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.receiver = Some(Param::new(name, ty));
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.result = Some(ty.into());
        self
    }

    /// Add a line to the function body.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(CodeFragment::line(line));
        self
    }

    /// Add a nested block (`if`, `for`) to the function body.
    pub fn body_block(mut self, header: impl Into<String>, body: Vec<CodeFragment>) -> Self {
        self.body.push(CodeFragment::braced(header, body));
        self
    }

    /// Append prebuilt fragments to the function body.
    pub fn body_fragments(mut self, fragments: impl IntoIterator<Item = CodeFragment>) -> Self {
        self.body.extend(fragments);
        self
    }

    /// Build the function as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::go();
        builder.emit(self);
        builder.build()
    }

    fn format_signature(&self) -> String {
        let receiver = self
            .receiver
            .as_ref()
            .map(|r| format!("({} {}) ", r.name, r.ty))
            .unwrap_or_default();

        let params = self
            .params
            .iter()
            .map(|p| format!("{} {}", p.name, p.ty))
            .collect::<Vec<_>>()
            .join(", ");

        match &self.result {
            Some(result) => format!("func {}{}({}) {} {{", receiver, self.name, params, result),
            None => format!("func {}{}({}) {{", receiver, self.name, params),
        }
    }
}

impl Renderable for Func {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::comment(format!("{} {}", self.name, doc)));
        }

        fragments.push(CodeFragment::braced(self.format_signature(), self.body.clone()));
        fragments
    }
}
