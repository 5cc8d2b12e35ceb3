//! Generate operation - render and write one file per target.

use std::path::Path;

use eyre::{Context, Result};
use slicegen_codegen_go::{Generator, LanguageCodegen, find_collisions};
use slicegen_manifest::GenerationSpec;

use crate::reports::{GenerateReport, GenerationResult, PreviewFile, WrittenResult};

/// Execute the generate operation.
///
/// Targets are processed in order; the first failure aborts the run.
pub fn generate(
    targets: &[GenerationSpec],
    base_dir: &Path,
    dry_run: bool,
) -> Result<GenerateReport> {
    tracing::info!(
        targets = targets.len(),
        base_dir = %base_dir.display(),
        dry_run,
        "generating"
    );

    let generator = Generator::new(targets);
    let mut warnings = Vec::new();
    if targets.is_empty() {
        warnings.push("no [[slice]] targets defined, nothing to generate".to_string());
    }
    if dry_run {
        warnings.extend(find_collisions(targets).iter().map(ToString::to_string));
    }

    let result = if dry_run {
        let files = generator
            .preview()
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path,
                content: f.content,
            })
            .collect();
        GenerationResult::Preview(files)
    } else {
        let gen_result = generator
            .generate(base_dir)
            .wrap_err("Failed to generate code")?;

        GenerationResult::Written(WrittenResult {
            written: gen_result.written,
            unchanged: gen_result.unchanged,
        })
    };

    Ok(GenerateReport { warnings, result })
}
