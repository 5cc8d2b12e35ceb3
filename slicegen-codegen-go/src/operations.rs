//! Go templates for the ten slice operations.
//!
//! Every operation becomes a free function `{Op}{Stem}` over `[]T` and a
//! method on the wrapper that delegates to it and rewraps the result.

use slicegen_codegen::CodeFragment;
use slicegen_manifest::UniqPolicy;
use slicegen_ops::Operation;

use crate::{
    ast::{Func, Param},
    naming::DerivedIdentifiers,
};

/// Message of the panic raised by Uniq on reference element types.
pub const UNIQ_PANIC_MESSAGE: &str = "Uniq() does not support reference element types";

/// How an operation that needs value equality is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EqualitySupport {
    /// The element type compares by value.
    Native,
    /// Emitted, but panics when called.
    Panics,
    /// Not emitted at all.
    Absent,
}

impl EqualitySupport {
    pub fn for_target(ids: &DerivedIdentifiers, uniq: UniqPolicy) -> Self {
        match (ids.element_kind.is_reference(), uniq) {
            (false, _) => Self::Native,
            (true, UniqPolicy::Panic) => Self::Panics,
            (true, UniqPolicy::Omit) => Self::Absent,
        }
    }
}

/// One element type's view of the operation templates.
pub struct Specialization<'a> {
    element_type: &'a str,
    ids: &'a DerivedIdentifiers,
    equality: EqualitySupport,
}

/// The free function and the wrapper method for one operation.
pub struct OperationDecls {
    pub function: Func,
    pub method: Func,
}

impl<'a> Specialization<'a> {
    pub fn new(element_type: &'a str, ids: &'a DerivedIdentifiers, uniq: UniqPolicy) -> Self {
        Self {
            element_type,
            ids,
            equality: EqualitySupport::for_target(ids, uniq),
        }
    }

    pub fn equality(&self) -> EqualitySupport {
        self.equality
    }

    /// Operations emitted for this element type, in catalog order.
    pub fn operations(&self) -> impl Iterator<Item = Operation> + '_ {
        Operation::ALL
            .into_iter()
            .filter(|op| !op.requires_equality() || self.equality != EqualitySupport::Absent)
    }

    /// `[]T`
    pub fn slice_type(&self) -> String {
        format!("[]{}", self.element_type)
    }

    /// `*chain{Stem}`
    pub fn wrapper_ptr(&self) -> String {
        format!("*{}", self.ids.wrapper_type_name)
    }

    /// `{Op}{Stem}`
    pub fn function_name(&self, op: Operation) -> String {
        format!("{}{}", op.name(), self.ids.symbol_stem)
    }

    /// Declarations for `op`, or None when the element type cannot offer it.
    pub fn declare(&self, op: Operation) -> Option<OperationDecls> {
        let panics = op.requires_equality() && self.equality == EqualitySupport::Panics;
        if op.requires_equality() && self.equality == EqualitySupport::Absent {
            return None;
        }

        let doc = if panics {
            format!(
                "panics: {} has no value equality.",
                self.element_type
            )
        } else {
            op.summary().to_string()
        };

        let params = self.params(op);
        let function = params
            .iter()
            .cloned()
            .fold(
                Func::new(self.function_name(op))
                    .doc(doc.clone())
                    .param(Param::new("slice", self.slice_type())),
                Func::param,
            )
            .returns(self.slice_type());
        let function = if panics {
            function.body_line(format!("panic(\"{}\")", UNIQ_PANIC_MESSAGE))
        } else {
            function.body_fragments(self.body(op))
        };

        let args = std::iter::once("c.value".to_string())
            .chain(params.iter().map(|p| p.name.clone()))
            .collect::<Vec<_>>()
            .join(", ");
        let method = params
            .into_iter()
            .fold(
                Func::new(op.name())
                    .doc(doc)
                    .receiver("c", self.wrapper_ptr()),
                Func::param,
            )
            .returns(self.wrapper_ptr());
        let method = if panics {
            method.body_block(
                "if c.isPtr {",
                vec![CodeFragment::line(format!(
                    "panic(\"{}\")",
                    UNIQ_PANIC_MESSAGE
                ))],
            )
        } else {
            method
        };
        let method = method.body_line(self.rewrap(&format!(
            "{}({})",
            self.function_name(op),
            args
        )));

        Some(OperationDecls { function, method })
    }

    /// `return &chain{Stem}{isPtr: c.isPtr, value: <value>}`
    fn rewrap(&self, value: &str) -> String {
        format!(
            "return &{}{{isPtr: c.isPtr, value: {}}}",
            self.ids.wrapper_type_name, value
        )
    }

    /// Parameters after the leading `slice`, shared by function and method.
    fn params(&self, op: Operation) -> Vec<Param> {
        let t = self.element_type;
        match op {
            Operation::Concat => vec![Param::new("slice2", self.slice_type())],
            Operation::Drop | Operation::DropRight => vec![Param::new("n", "int")],
            Operation::Filter => vec![Param::new("fn", format!("func({}, int) bool", t))],
            Operation::Map => vec![Param::new("fn", format!("func({}, int) {}", t, t))],
            Operation::Reduce => vec![
                Param::new("fn", format!("func({}, {}, int) {}", t, t, t)),
                Param::new("initial", t),
            ],
            Operation::First | Operation::Last | Operation::Reverse | Operation::Uniq => {
                Vec::new()
            }
        }
    }

    /// Body of the free function.
    fn body(&self, op: Operation) -> Vec<CodeFragment> {
        fn line(s: impl Into<String>) -> CodeFragment {
            CodeFragment::line(s)
        }
        fn block(header: &str, body: Vec<CodeFragment>) -> CodeFragment {
            CodeFragment::braced(header, body)
        }

        let s = self.slice_type();

        match op {
            Operation::Concat => vec![
                line(format!("res := make({}, 0, len(slice)+len(slice2))", s)),
                line("res = append(res, slice...)"),
                line("res = append(res, slice2...)"),
                line("return res"),
            ],
            Operation::Drop | Operation::DropRight => {
                let window = if op == Operation::Drop {
                    "slice[n:]"
                } else {
                    "slice[:len(slice)-n]"
                };
                vec![
                    block("if n < 0 {", vec![line("n = 0")]),
                    block("if n > len(slice) {", vec![line("n = len(slice)")]),
                    line(format!("res := make({}, len(slice)-n)", s)),
                    line(format!("copy(res, {})", window)),
                    line("return res"),
                ]
            }
            Operation::Filter => vec![
                line(format!("res := make({}, 0, len(slice))", s)),
                block(
                    "for index, entry := range slice {",
                    vec![block(
                        "if fn(entry, index) {",
                        vec![line("res = append(res, entry)")],
                    )],
                ),
                line("return res"),
            ],
            Operation::First | Operation::Last => {
                let index = if op == Operation::First {
                    "0"
                } else {
                    "len(slice)-1"
                };
                vec![
                    block(
                        "if len(slice) == 0 {",
                        vec![line(format!("return {}{{}}", s))],
                    ),
                    line(format!("return {}{{slice[{}]}}", s, index)),
                ]
            }
            Operation::Map => vec![
                line(format!("res := make({}, len(slice))", s)),
                block(
                    "for index, entry := range slice {",
                    vec![line("res[index] = fn(entry, index)")],
                ),
                line("return res"),
            ],
            Operation::Reduce => vec![
                line("acc := initial"),
                block(
                    "for index, entry := range slice {",
                    vec![line("acc = fn(acc, entry, index)")],
                ),
                line(format!("return {}{{acc}}", s)),
            ],
            Operation::Reverse => vec![
                line(format!("res := make({}, len(slice))", s)),
                block(
                    "for index, entry := range slice {",
                    vec![line("res[len(slice)-1-index] = entry")],
                ),
                line("return res"),
            ],
            Operation::Uniq => vec![
                line(format!(
                    "seen := make(map[{}]bool, len(slice))",
                    self.element_type
                )),
                line(format!("res := make({}, 0, len(slice))", s)),
                block(
                    "for _, entry := range slice {",
                    vec![block(
                        "if !seen[entry] {",
                        vec![line("seen[entry] = true"), line("res = append(res, entry)")],
                    )],
                ),
                line("return res"),
            ],
        }
    }
}
