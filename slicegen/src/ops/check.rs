//! Check operation - manifest validation.

use std::path::Path;

use slicegen_codegen_go::{DerivedIdentifiers, EqualitySupport, find_collisions};
use slicegen_manifest::GenerationSpec;

use crate::reports::{CheckReport, TargetInfo};

/// Execute the check operation.
///
/// The manifest has already been parsed and resolved; this collects what
/// each target would produce and flags targets that lose Uniq.
pub fn check(targets: &[GenerationSpec], config_path: &Path) -> CheckReport {
    let mut warnings = Vec::new();
    if targets.is_empty() {
        warnings.push("no [[slice]] targets defined".to_string());
    }
    warnings.extend(find_collisions(targets).iter().map(ToString::to_string));

    let targets = targets
        .iter()
        .map(|spec| {
            let ids = DerivedIdentifiers::derive(spec);
            let equality = EqualitySupport::for_target(&ids, spec.uniq_policy());
            TargetInfo {
                element_type: spec.element_type().to_string(),
                output: spec.output_path(),
                constructor: ids.constructor_name,
                wrapper: ids.wrapper_type_name,
                uniq: match equality {
                    EqualitySupport::Native => "yes",
                    EqualitySupport::Panics => "panics",
                    EqualitySupport::Absent => "omitted",
                },
            }
        })
        .collect();

    CheckReport {
        config_path: config_path.to_path_buf(),
        warnings,
        targets,
    }
}

#[cfg(test)]
mod tests {
    use std::{path::PathBuf, str::FromStr};

    use slicegen_manifest::Manifest;

    use super::*;

    #[test]
    fn test_check_warns_on_symbol_collision() {
        let manifest = Manifest::from_str(
            r#"
            [[slice]]
            type = "customType"

            [[slice]]
            type = "CustomType"
            out = "b.go"
            "#,
        )
        .unwrap();

        let report = check(manifest.targets(), Path::new("slicegen.toml"));
        assert_eq!(report.targets.len(), 2);
        assert_eq!(
            report.warnings,
            ["go-dash-slice/custom_type.go and go-dash-slice/b.go both declare CustomType \
              symbols in the same package (set `name` on one of them)"]
        );
    }

    #[test]
    fn test_check_lists_targets() {
        let manifest = Manifest::from_str(
            r#"
            [[slice]]
            type = "string"

            [[slice]]
            type = "*CustomType"
            "#,
        )
        .unwrap();

        let report = check(manifest.targets(), Path::new("slicegen.toml"));
        assert!(report.warnings.is_empty());

        let [strings, pointers] = report.targets.as_slice() else {
            panic!("expected two targets");
        };
        assert_eq!(strings.constructor, "NewStringSlice");
        assert_eq!(strings.uniq, "yes");
        assert_eq!(pointers.output, PathBuf::from("go-dash-slice/custom_type_ptr.go"));
        assert_eq!(pointers.wrapper, "chainCustomTypePtr");
        assert_eq!(pointers.uniq, "omitted");
    }

    #[test]
    fn test_check_empty_manifest() {
        let report = check(&[], Path::new("slicegen.toml"));
        assert_eq!(report.warnings.len(), 1);
        assert!(report.targets.is_empty());
    }
}
