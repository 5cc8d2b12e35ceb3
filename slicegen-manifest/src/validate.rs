//! Identifier checks for names that end up in generated Go code.

/// Go reserved keywords that cannot be used as identifiers
/// Source: https://go.dev/ref/spec#Keywords
pub const GO_KEYWORDS: &[&str] = &[
    "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough",
    "for", "func", "go", "goto", "if", "import", "interface", "map", "package", "range",
    "return", "select", "struct", "switch", "type", "var",
];

/// Check if a name is a Go reserved keyword
pub fn is_go_keyword(name: &str) -> bool {
    GO_KEYWORDS.contains(&name)
}

/// Validate a package clause name.
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn package_name_problem(name: &str) -> Option<String> {
    if name.is_empty() {
        return Some("package name cannot be empty".to_string());
    }
    if is_go_keyword(name) {
        return Some(format!("'{}' is a Go keyword", name));
    }
    if name == "_" {
        return Some("the blank identifier cannot name a package".to_string());
    }
    identifier_problem(name)
}

/// Validate an explicit symbol name, which is appended to exported names.
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn symbol_name_problem(name: &str) -> Option<String> {
    if name.is_empty() {
        return Some("symbol name cannot be empty".to_string());
    }
    identifier_problem(name)
}

fn identifier_problem(name: &str) -> Option<String> {
    if slicegen_core::is_identifier(name) {
        return None;
    }
    let first = name.chars().next()?;
    if !(first.is_alphabetic() || first == '_') {
        return Some(format!("must start with a letter or underscore, found '{}'", first));
    }
    let bad: String = name
        .chars()
        .filter(|c| !(c.is_alphanumeric() || *c == '_'))
        .collect();
    Some(format!("contains invalid characters: '{}'", bad))
}
