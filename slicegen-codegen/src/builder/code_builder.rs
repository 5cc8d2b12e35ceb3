//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Renderable};

/// One level of indentation, as `gofmt` produces.
const INDENT: &str = "\t";

/// Builds tab-indented code line by line.
///
/// # Example
///
/// ```
/// use slicegen_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::go();
/// builder
///     .push_line("func main() {")
///     .push_indent()
///     .push_line("return")
///     .push_dedent()
///     .push_line("}");
/// let code = builder.build();
///
/// assert_eq!(code, "func main() {\n\treturn\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    buffer: String,
}

impl CodeBuilder {
    /// Create an empty builder at indentation level zero.
    pub fn go() -> Self {
        Self {
            indent_level: 0,
            buffer: String::new(),
        }
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a line comment.
    pub fn push_comment(&mut self, text: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str("//");
        if !text.is_empty() {
            self.buffer.push(' ');
            self.buffer.push_str(text);
        }
        self.buffer.push('\n');
        self
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Block { header, body } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                self.push_line("}");
            }
            CodeFragment::Comment(text) => {
                self.push_comment(&text);
            }
        }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indentation() {
        let mut builder = CodeBuilder::go();
        builder
            .push_line("func main() {")
            .push_indent()
            .push_line("return")
            .push_dedent()
            .push_line("}");

        assert_eq!(builder.build(), "func main() {\n\treturn\n}\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::go();
        builder.push_dedent().push_dedent().push_line("x := 1");
        assert_eq!(builder.build(), "x := 1\n");
    }

    #[test]
    fn test_comment() {
        let mut builder = CodeBuilder::go();
        builder
            .push_comment("DO NOT EDIT.")
            .push_comment("")
            .push_blank()
            .push_line("package main");

        assert_eq!(builder.build(), "// DO NOT EDIT.\n//\n\npackage main\n");
    }

    #[test]
    fn test_emit_block_fragment() {
        struct BlockNode;
        impl Renderable for BlockNode {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![
                    CodeFragment::comment("Run does nothing."),
                    CodeFragment::braced(
                        "func Run() {",
                        vec![CodeFragment::braced(
                            "if true {",
                            vec![CodeFragment::line("return")],
                        )],
                    ),
                ]
            }
        }

        let mut builder = CodeBuilder::go();
        builder.emit(&BlockNode);
        assert_eq!(
            builder.build(),
            "// Run does nothing.\nfunc Run() {\n\tif true {\n\t\treturn\n\t}\n}\n"
        );
    }
}
