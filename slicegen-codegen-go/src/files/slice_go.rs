//! The specialized slice helper file.

use std::path::{Path, PathBuf};

use slicegen_core::GeneratedFile;
use slicegen_manifest::GenerationSpec;

use crate::renderer::render;

/// One generated `.go` file holding the helpers for a single element type.
pub struct SliceGo<'a> {
    spec: &'a GenerationSpec,
}

impl<'a> SliceGo<'a> {
    pub fn new(spec: &'a GenerationSpec) -> Self {
        Self { spec }
    }
}

impl GeneratedFile for SliceGo<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.spec.output_path())
    }

    fn render(&self) -> String {
        render(self.spec)
    }
}

#[cfg(test)]
mod tests {
    use slicegen_core::WriteResult;
    use slicegen_manifest::{RawParams, resolve};
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_creates_output_dir() {
        let temp = TempDir::new().unwrap();
        let spec = resolve(RawParams::default()).unwrap();
        let file = SliceGo::new(&spec);

        assert_eq!(file.write(temp.path()).unwrap(), WriteResult::Written);

        let path = temp.path().join("go-dash-slice").join("string.go");
        assert_eq!(file.path(temp.path()), path);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), file.render());
    }

    #[test]
    fn test_regeneration_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let spec = resolve(RawParams::default()).unwrap();
        let file = SliceGo::new(&spec);

        file.write(temp.path()).unwrap();
        let first = std::fs::read(file.path(temp.path())).unwrap();

        assert_eq!(file.write(temp.path()).unwrap(), WriteResult::Unchanged);
        assert_eq!(std::fs::read(file.path(temp.path())).unwrap(), first);
    }

    #[test]
    fn test_stale_content_is_replaced() {
        let temp = TempDir::new().unwrap();
        let spec = resolve(RawParams::default()).unwrap();
        let file = SliceGo::new(&spec);

        let path = file.path(temp.path());
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "package stale\n").unwrap();

        assert_eq!(file.write(temp.path()).unwrap(), WriteResult::Written);
        assert!(std::fs::read_to_string(&path).unwrap().contains("package godash"));
    }
}
