//! Classification of element type expressions.

use std::fmt;

/// Whether values of an element type can be compared by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// Comparable by value (e.g. `string`, `int`, `CustomType`).
    Value,
    /// Pointer, slice, map, func or channel: equality is identity or undefined.
    Reference,
}

impl ElementKind {
    pub fn is_reference(self) -> bool {
        matches!(self, ElementKind::Reference)
    }
}

/// Leading type constructor of an element type expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    /// `*T`
    Pointer,
    /// `[]T`
    Slice,
}

impl Modifier {
    /// Lower-case word used when the modifier is spelled out in a name.
    pub fn word(self) -> &'static str {
        match self {
            Modifier::Pointer => "ptr",
            Modifier::Slice => "slice",
        }
    }
}

/// An element type expression, as written by the user (e.g. `*CustomType`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementType(String);

impl ElementType {
    pub fn new(expr: impl Into<String>) -> Self {
        Self(expr.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Classify the expression by its leading type constructor.
    pub fn kind(&self) -> ElementKind {
        let expr = self.0.as_str();
        let is_keyword_prefix = |keyword: &str| {
            expr.strip_prefix(keyword).is_some_and(|rest| {
                rest.is_empty() || rest.starts_with(['(', ' ', '\t', '<', '['])
            })
        };

        if expr.starts_with('*')
            || expr.starts_with("[]")
            || expr.starts_with("map[")
            || expr.starts_with("<-")
            || is_keyword_prefix("func")
            || is_keyword_prefix("chan")
        {
            ElementKind::Reference
        } else {
            ElementKind::Value
        }
    }

    /// Leading `*` and `[]` constructors, outermost first, and the rest.
    pub fn split_modifiers(&self) -> (Vec<Modifier>, &str) {
        let mut modifiers = Vec::new();
        let mut rest = self.0.as_str();
        loop {
            if let Some(r) = rest.strip_prefix('*') {
                modifiers.push(Modifier::Pointer);
                rest = r;
            } else if let Some(r) = rest.strip_prefix("[]") {
                modifiers.push(Modifier::Slice);
                rest = r;
            } else {
                return (modifiers, rest.trim_start());
            }
        }
    }

    /// Alphanumeric runs of the expression after its leading modifiers
    /// (e.g. `map[string]int` -> `["map", "string", "int"]`).
    pub fn segments(&self) -> Vec<&str> {
        let (_, rest) = self.split_modifiers();
        rest.split(|c: char| !(c.is_alphanumeric() || c == '_'))
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// File stem derived from the expression
    /// (e.g. `*CustomType` -> `custom_type_ptr`).
    pub fn file_stem(&self) -> String {
        let (modifiers, _) = self.split_modifiers();
        let mut parts: Vec<String> = self
            .segments()
            .into_iter()
            .map(slicegen_core::to_snake_case)
            .collect();
        if parts.is_empty() {
            parts.push("value".to_string());
        }
        parts.extend(modifiers.iter().rev().map(|m| m.word().to_string()));
        parts.join("_")
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementType {
    fn from(expr: &str) -> Self {
        Self::new(expr)
    }
}
