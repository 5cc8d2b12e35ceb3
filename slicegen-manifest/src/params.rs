//! Raw generation parameters and their resolution into a [`GenerationSpec`].

use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;

use crate::{
    DEFAULT_ELEMENT_TYPE, DEFAULT_OUTPUT_DIR, DEFAULT_PACKAGE, ElementType, Error, Result,
    validate::{package_name_problem, symbol_name_problem},
};

/// What to generate for Uniq when the element type has no value equality.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UniqPolicy {
    /// Leave Uniq out entirely.
    #[default]
    Omit,
    /// Emit a Uniq that panics when called.
    Panic,
}

impl UniqPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            UniqPolicy::Omit => "omit",
            UniqPolicy::Panic => "panic",
        }
    }
}

impl fmt::Display for UniqPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UniqPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "omit" => Ok(UniqPolicy::Omit),
            "panic" => Ok(UniqPolicy::Panic),
            other => Err(format!(
                "unknown uniq policy '{}', expected 'omit' or 'panic'",
                other
            )),
        }
    }
}

/// Unvalidated inputs, as collected from flags or a manifest entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawParams {
    pub package: String,
    pub import: Option<String>,
    pub element_type: String,
    pub name: Option<String>,
    pub dir: PathBuf,
    pub out: Option<String>,
    pub uniq: UniqPolicy,
}

impl Default for RawParams {
    fn default() -> Self {
        Self {
            package: DEFAULT_PACKAGE.to_string(),
            import: None,
            element_type: DEFAULT_ELEMENT_TYPE.to_string(),
            name: None,
            dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            out: None,
            uniq: UniqPolicy::default(),
        }
    }
}

/// A resolved generation request. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSpec {
    package: String,
    import_path: Option<String>,
    element_type: ElementType,
    symbol_name: Option<String>,
    output_dir: PathBuf,
    output_file: String,
    uniq_policy: UniqPolicy,
}

impl GenerationSpec {
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Package to dot-import so the element type resolves unqualified.
    pub fn import_path(&self) -> Option<&str> {
        self.import_path.as_deref()
    }

    pub fn element_type(&self) -> &ElementType {
        &self.element_type
    }

    /// Explicit override for the stem of generated identifiers.
    pub fn symbol_name(&self) -> Option<&str> {
        self.symbol_name.as_deref()
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn output_file(&self) -> &str {
        &self.output_file
    }

    pub fn uniq_policy(&self) -> UniqPolicy {
        self.uniq_policy
    }

    /// Output directory joined with the output file name.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_file)
    }
}

/// Validate raw parameters and fill in derived values.
///
/// An explicit output file name always wins; otherwise it is derived from
/// the element type. A name without an extension gets `.go` appended.
pub fn resolve(raw: RawParams) -> Result<GenerationSpec> {
    let element_type = ElementType::new(raw.element_type);
    if element_type.is_empty() {
        return Err(Box::new(Error::MissingElementType));
    }

    let package = raw.package.trim().to_string();
    if let Some(reason) = package_name_problem(&package) {
        return Err(Error::invalid_package(package, reason));
    }

    let symbol_name = match non_blank(raw.name) {
        Some(name) => match symbol_name_problem(&name) {
            Some(reason) => return Err(Error::invalid_symbol(name, reason)),
            None => Some(name),
        },
        None => None,
    };

    let output_file = match non_blank(raw.out) {
        Some(out) if Path::new(&out).extension().is_some() => out,
        Some(out) => format!("{}.go", out),
        None => format!("{}.go", element_type.file_stem()),
    };

    let spec = GenerationSpec {
        package,
        import_path: non_blank(raw.import),
        element_type,
        symbol_name,
        output_dir: raw.dir,
        output_file,
        uniq_policy: raw.uniq,
    };

    tracing::debug!(
        element_type = %spec.element_type,
        package = %spec.package,
        output = %spec.output_path().display(),
        uniq = %spec.uniq_policy,
        "resolved generation spec"
    );

    Ok(spec)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(element_type: &str) -> RawParams {
        RawParams {
            element_type: element_type.to_string(),
            ..RawParams::default()
        }
    }

    #[test]
    fn test_defaults() {
        let spec = resolve(RawParams::default()).unwrap();
        assert_eq!(spec.package(), "godash");
        assert_eq!(spec.element_type().as_str(), "string");
        assert_eq!(spec.import_path(), None);
        assert_eq!(spec.symbol_name(), None);
        assert_eq!(spec.output_path(), PathBuf::from("go-dash-slice/string.go"));
        assert_eq!(spec.uniq_policy(), UniqPolicy::Omit);
    }

    #[test]
    fn test_missing_element_type() {
        let err = resolve(raw("   ")).unwrap_err();
        assert!(matches!(*err, Error::MissingElementType));
    }

    #[test]
    fn test_output_file_derived_from_type() {
        assert_eq!(resolve(raw("CustomType")).unwrap().output_file(), "custom_type.go");
        assert_eq!(resolve(raw("*CustomType")).unwrap().output_file(), "custom_type_ptr.go");
    }

    #[test]
    fn test_explicit_output_file_wins() {
        let spec = resolve(RawParams {
            element_type: "*CustomType".to_string(),
            out: Some("pointers.go".to_string()),
            ..RawParams::default()
        })
        .unwrap();
        assert_eq!(spec.output_file(), "pointers.go");
    }

    #[test]
    fn test_output_file_gets_go_extension() {
        let spec = resolve(RawParams {
            out: Some("strings".to_string()),
            ..RawParams::default()
        })
        .unwrap();
        assert_eq!(spec.output_file(), "strings.go");
    }

    #[test]
    fn test_blank_import_is_none() {
        let spec = resolve(RawParams {
            import: Some("  ".to_string()),
            ..RawParams::default()
        })
        .unwrap();
        assert_eq!(spec.import_path(), None);
    }

    #[test]
    fn test_invalid_package() {
        for package in ["", "func", "go-dash", "9lives"] {
            let err = resolve(RawParams {
                package: package.to_string(),
                ..RawParams::default()
            })
            .unwrap_err();
            assert!(
                matches!(*err, Error::InvalidPackageName { .. }),
                "expected '{}' to be rejected",
                package
            );
        }
    }

    #[test]
    fn test_invalid_symbol_name() {
        let err = resolve(RawParams {
            name: Some("*Custom".to_string()),
            ..RawParams::default()
        })
        .unwrap_err();
        assert!(matches!(*err, Error::InvalidSymbolName { ref name, .. } if name == "*Custom"));
    }

    #[test]
    fn test_uniq_policy_from_str() {
        assert_eq!("panic".parse::<UniqPolicy>(), Ok(UniqPolicy::Panic));
        assert_eq!("OMIT".parse::<UniqPolicy>(), Ok(UniqPolicy::Omit));
        assert!("ignore".parse::<UniqPolicy>().is_err());
        assert_eq!(UniqPolicy::Panic.to_string(), "panic");
    }

    #[test]
    fn test_resolution_is_repeatable() {
        let a = resolve(raw("*CustomType")).unwrap();
        let b = resolve(raw("*CustomType")).unwrap();
        assert_eq!(a, b);
    }
}
