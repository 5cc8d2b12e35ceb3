//! Manifest parsing from files and strings.

use std::{collections::HashMap, path::Path, str::FromStr};

use super::{Manifest, SliceTarget};
use crate::{Error, MANIFEST_FILE, RawParams, Result, error::SourceContext, resolve};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, MANIFEST_FILE)
    }
}

impl Manifest {
    /// Parse a slicegen.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }
}

/// Parse a manifest and resolve every target, with the given filename for
/// error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let ctx = SourceContext::new(content, filename);
    let mut manifest: Manifest = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;

    let mut targets = Vec::with_capacity(manifest.slices.len());
    let mut seen: HashMap<_, &SliceTarget> = HashMap::new();
    for slice in &manifest.slices {
        let spec = resolve(merge(&manifest, slice))
            .map_err(|e| ctx.target_error(&e, slice.element_type.span()))?;

        if let Some(first) = seen.insert(spec.output_path(), slice) {
            return Err(ctx.duplicate_output_error(
                spec.output_path(),
                first.element_type.span(),
                slice.element_type.span(),
            ));
        }
        targets.push(spec);
    }

    tracing::debug!(filename, targets = targets.len(), "parsed manifest");
    manifest.targets = targets;
    Ok(manifest)
}

/// Layer a `[[slice]]` entry over `[defaults]` and the built-in defaults.
fn merge(manifest: &Manifest, slice: &SliceTarget) -> RawParams {
    let defaults = &manifest.defaults;
    let fallback = RawParams::default();
    RawParams {
        package: slice
            .package
            .clone()
            .or_else(|| defaults.package.clone())
            .unwrap_or(fallback.package),
        import: slice.import.clone().or_else(|| defaults.import.clone()),
        element_type: slice.element_type.get_ref().clone(),
        name: slice.name.clone(),
        dir: slice
            .dir
            .clone()
            .or_else(|| defaults.dir.clone())
            .unwrap_or(fallback.dir),
        out: slice.out.clone(),
        uniq: slice.uniq.or(defaults.uniq).unwrap_or(fallback.uniq),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::UniqPolicy;

    #[test]
    fn test_parse_minimal() {
        let manifest: Manifest = r#"
            [[slice]]
            type = "string"
        "#
        .parse()
        .unwrap();

        let targets = manifest.targets();
        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].package(), "godash");
        assert_eq!(targets[0].output_path(), PathBuf::from("go-dash-slice/string.go"));
    }

    #[test]
    fn test_defaults_apply_and_entries_override() {
        let manifest: Manifest = r#"
            [defaults]
            package = "collections"
            dir = "gen"
            uniq = "panic"

            [[slice]]
            type = "int"

            [[slice]]
            type = "*CustomType"
            import = "example.com/project/customtype"
            package = "custom"
            uniq = "omit"
        "#
        .parse()
        .unwrap();

        let [ints, custom] = manifest.targets() else {
            panic!("expected two targets");
        };
        assert_eq!(ints.package(), "collections");
        assert_eq!(ints.uniq_policy(), UniqPolicy::Panic);
        assert_eq!(ints.output_path(), PathBuf::from("gen/int.go"));

        assert_eq!(custom.package(), "custom");
        assert_eq!(custom.import_path(), Some("example.com/project/customtype"));
        assert_eq!(custom.uniq_policy(), UniqPolicy::Omit);
        assert_eq!(custom.output_path(), PathBuf::from("gen/custom_type_ptr.go"));
    }

    #[test]
    fn test_empty_manifest_has_no_targets() {
        let manifest: Manifest = "".parse().unwrap();
        assert!(manifest.targets().is_empty());
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        let err = r#"
            [[slice]]
            type = "string"
            kind = "value"
        "#
        .parse::<Manifest>()
        .unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_missing_type_is_parse_error() {
        let err = "[[slice]]\nname = \"Foo\"\n".parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_invalid_entry_points_at_type() {
        let content = "[[slice]]\ntype = \"\"\n";
        let err = content.parse::<Manifest>().unwrap_err();
        match *err {
            Error::InvalidTarget { span, ref message, .. } => {
                assert_eq!(message, "no element type given");
                assert_eq!(&content[span.offset()..span.offset() + span.len()], "\"\"");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_output() {
        let err = r#"
            [[slice]]
            type = "string"

            [[slice]]
            type = "int"
            out = "string.go"
        "#
        .parse::<Manifest>()
        .unwrap_err();
        assert!(
            matches!(*err, Error::DuplicateOutput { ref path, .. } if path == &PathBuf::from("go-dash-slice/string.go"))
        );
    }

    #[test]
    fn test_same_file_in_different_dirs_is_allowed() {
        let manifest: Manifest = r#"
            [[slice]]
            type = "string"

            [[slice]]
            type = "string"
            dir = "other"
        "#
        .parse()
        .unwrap();
        assert_eq!(manifest.targets().len(), 2);
    }
}
