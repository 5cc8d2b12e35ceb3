use std::path::{Path, PathBuf};

use super::{Manifest, parse_manifest};
use crate::{GenerationSpec, Result};

/// A slicegen.toml file with both raw content and parsed manifest.
pub struct SliceToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl SliceToml {
    /// Open and parse a slicegen.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let manifest = parse_manifest(&content, &path.display().to_string())?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Resolved targets, in manifest order.
    pub fn targets(&self) -> &[GenerationSpec] {
        self.manifest.targets()
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::Error;

    #[test]
    fn test_open() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("slicegen.toml");
        std::fs::write(&path, "[[slice]]\ntype = \"int\"\n").unwrap();

        let file = SliceToml::open(&path).unwrap();
        assert_eq!(file.path(), path);
        assert!(file.content().contains("int"));
        assert_eq!(file.targets()[0].output_file(), "int.go");
    }

    #[test]
    fn test_open_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = SliceToml::open(dir.path().join("slicegen.toml")).err().unwrap();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
