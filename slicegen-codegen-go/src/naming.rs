//! Go-specific naming conventions and the identifiers derived for one target.

use std::{
    collections::{HashMap, hash_map::Entry},
    fmt,
    path::{Path, PathBuf},
};

use slicegen_codegen::language::NamingConvention;
use slicegen_core::{capitalize_first, is_identifier, to_pascal_case};
use slicegen_manifest::{ElementKind, GenerationSpec};

fn go_constructor(stem: &str) -> String {
    format!("New{}Slice", stem)
}

fn go_wrapper(stem: &str) -> String {
    format!("chain{}", stem)
}

/// Go naming conventions.
pub const GO_NAMING: NamingConvention = NamingConvention {
    // Only the first character is upper-cased ("customType" -> "CustomType")
    type_to_symbol: capitalize_first,
    segment_to_symbol: to_pascal_case,
    stem_to_constructor: go_constructor,
    // Unexported so callers go through the constructor
    stem_to_wrapper: go_wrapper,
    is_identifier,
};

/// Names and capabilities derived from a [`GenerationSpec`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedIdentifiers {
    /// Element type with its first character upper-cased.
    pub capitalized_type_name: String,
    /// Fragment appended to every exported operation name.
    pub symbol_stem: String,
    pub constructor_name: String,
    pub wrapper_type_name: String,
    pub element_kind: ElementKind,
}

impl DerivedIdentifiers {
    pub fn derive(spec: &GenerationSpec) -> Self {
        let element_type = spec.element_type();
        let capitalized_type_name = GO_NAMING.symbol_name(element_type.as_str());

        let symbol_stem = match spec.symbol_name() {
            Some(name) => name.to_string(),
            None if GO_NAMING.is_valid(&capitalized_type_name) => capitalized_type_name.clone(),
            None => sanitized_stem(spec),
        };

        Self {
            constructor_name: GO_NAMING.constructor_name(&symbol_stem),
            wrapper_type_name: GO_NAMING.wrapper_name(&symbol_stem),
            element_kind: element_type.kind(),
            capitalized_type_name,
            symbol_stem,
        }
    }
}

/// Two targets that would declare the same symbols in one Go package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolCollision {
    pub symbol_stem: String,
    pub first: PathBuf,
    pub second: PathBuf,
}

impl fmt::Display for SymbolCollision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} and {} both declare {} symbols in the same package (set `name` on one of them)",
            self.first.display(),
            self.second.display(),
            self.symbol_stem
        )
    }
}

/// Targets sharing an output directory and package whose symbol stems clash.
pub fn find_collisions(targets: &[GenerationSpec]) -> Vec<SymbolCollision> {
    let mut seen: HashMap<(&Path, &str, String), &GenerationSpec> = HashMap::new();
    let mut collisions = Vec::new();

    for spec in targets {
        let stem = DerivedIdentifiers::derive(spec).symbol_stem;
        match seen.entry((spec.output_dir(), spec.package(), stem)) {
            Entry::Occupied(entry) => collisions.push(SymbolCollision {
                symbol_stem: entry.key().2.clone(),
                first: entry.get().output_path(),
                second: spec.output_path(),
            }),
            Entry::Vacant(entry) => {
                entry.insert(spec);
            }
        }
    }

    collisions
}

/// `*CustomType` -> `CustomTypePtr`, `map[string]int` -> `MapStringInt`.
fn sanitized_stem(spec: &GenerationSpec) -> String {
    let element_type = spec.element_type();
    let (modifiers, _) = element_type.split_modifiers();

    let mut stem: String = element_type
        .segments()
        .into_iter()
        .map(|segment| GO_NAMING.segment_name(segment))
        .collect();
    if stem.is_empty() {
        stem.push_str("Value");
    }
    for modifier in modifiers.iter().rev() {
        stem.push_str(&GO_NAMING.segment_name(modifier.word()));
    }
    stem
}
