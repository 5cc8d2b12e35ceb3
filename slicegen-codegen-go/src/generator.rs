//! Go code generator over a list of resolved targets.

use std::path::Path;

use eyre::{Result, WrapErr, bail};
use slicegen_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
use slicegen_core::{GeneratedFile, WriteBatch, WriteResult};
use slicegen_manifest::GenerationSpec;

use crate::{files::SliceGo, naming::find_collisions};

/// Go code generator producing one specialized file per target.
pub struct Generator<'a> {
    targets: &'a [GenerationSpec],
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "go"
    }

    fn file_extension(&self) -> &'static str {
        "go"
    }

    fn preview(&self) -> Vec<PreviewFile> {
        self.targets
            .iter()
            .map(|spec| PreviewFile {
                path: spec.output_path().display().to_string(),
                content: SliceGo::new(spec).render(),
            })
            .collect()
    }

    /// Every target is staged before any is committed, so a failing
    /// target leaves none of the others on disk.
    fn generate(&self, base_dir: &Path) -> Result<GenerateResult> {
        if let Some(collision) = find_collisions(self.targets).into_iter().next() {
            bail!("{}", collision);
        }

        let mut batch = WriteBatch::new();
        for spec in self.targets {
            batch
                .stage(&SliceGo::new(spec), base_dir)
                .wrap_err_with(|| format!("failed to generate {}", spec.output_path().display()))?;
        }

        let mut result = GenerateResult::default();
        for (path, outcome) in batch.commit().wrap_err("failed to commit generated files")? {
            tracing::info!(path = %path.display(), ?outcome, "generated");
            match outcome {
                WriteResult::Written => result.written.push(path),
                WriteResult::Unchanged => result.unchanged.push(path),
            }
        }

        Ok(result)
    }
}

impl<'a> Generator<'a> {
    pub fn new(targets: &'a [GenerationSpec]) -> Self {
        Self { targets }
    }
}

#[cfg(test)]
mod tests {
    use slicegen_core::EmitError;
    use slicegen_manifest::{RawParams, resolve};
    use tempfile::TempDir;

    use super::*;

    fn targets() -> Vec<GenerationSpec> {
        ["string", "*CustomType"]
            .into_iter()
            .map(|ty| {
                resolve(RawParams {
                    element_type: ty.to_string(),
                    ..RawParams::default()
                })
                .unwrap()
            })
            .collect()
    }

    #[test]
    fn test_preview() {
        let targets = targets();
        let files = Generator::new(&targets).preview();
        let paths: Vec<_> = files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(
            paths,
            ["go-dash-slice/string.go", "go-dash-slice/custom_type_ptr.go"]
        );
        assert!(files[1].content.contains("NewCustomTypePtrSlice"));
    }

    #[test]
    fn test_generate_then_regenerate() {
        let temp = TempDir::new().unwrap();
        let targets = targets();
        let generator = Generator::new(&targets);

        let first = generator.generate(temp.path()).unwrap();
        assert_eq!(first.written.len(), 2);
        assert!(first.unchanged.is_empty());

        let second = generator.generate(temp.path()).unwrap();
        assert!(second.written.is_empty());
        assert_eq!(second.len(), 2);
    }

    #[test]
    fn test_failed_target_leaves_no_output() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("blocked"), "").unwrap();

        let targets: Vec<_> = [("string", "ok"), ("int", "blocked")]
            .into_iter()
            .map(|(ty, dir)| {
                resolve(RawParams {
                    element_type: ty.to_string(),
                    dir: dir.into(),
                    ..RawParams::default()
                })
                .unwrap()
            })
            .collect();

        let err = Generator::new(&targets).generate(temp.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("failed to generate blocked/int.go"));
        assert!(!temp.path().join("ok").join("string.go").exists());
        assert!(!temp.path().join("ok").exists());
    }

    #[test]
    fn test_symbol_collision_is_rejected_before_writing() {
        let temp = TempDir::new().unwrap();
        let targets: Vec<_> = [("customType", None), ("CustomType", Some("b.go"))]
            .into_iter()
            .map(|(ty, out)| {
                resolve(RawParams {
                    element_type: ty.to_string(),
                    out: out.map(str::to_string),
                    ..RawParams::default()
                })
                .unwrap()
            })
            .collect();

        let err = Generator::new(&targets).generate(temp.path()).unwrap_err();
        assert!(err.to_string().contains("both declare CustomType symbols"));
        assert!(!temp.path().join("go-dash-slice").exists());
    }

    #[test]
    fn test_failure_names_the_step() {
        let temp = TempDir::new().unwrap();
        // A regular file where the output directory should be
        std::fs::write(temp.path().join("go-dash-slice"), "").unwrap();

        let targets = targets();
        let err = Generator::new(&targets).generate(temp.path()).unwrap_err();
        let emit = err.downcast_ref::<EmitError>().unwrap();
        assert_eq!(emit.step(), "mkdir");
        assert!(format!("{:#}", err).contains("failed to generate go-dash-slice/string.go"));
    }
}
