use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;
use thiserror::Error;

/// Failure while emitting a generated file, tagged with the step that failed.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("mkdir {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl EmitError {
    /// Name of the step that failed (`mkdir`, `open` or `write`).
    pub fn step(&self) -> &'static str {
        match self {
            Self::CreateDir { .. } => "mkdir",
            Self::Open { .. } => "open",
            Self::Write { .. } => "write",
        }
    }
}

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// Render the file into a temporary file next to its target.
    fn stage(&self, base: &Path) -> Result<StagedFile, EmitError> {
        stage_file(&self.path(base), &self.render())
    }

    /// Write the file to disk
    fn write(&self, base: &Path) -> Result<WriteResult, EmitError> {
        self.stage(base)?.commit()
    }
}

/// Content written next to its target but not yet visible under the
/// target's name.
///
/// Dropping a staged file without committing it removes the temporary
/// file along with any directories created while staging it.
#[must_use = "a staged file is discarded unless committed"]
#[derive(Debug)]
pub struct StagedFile {
    path: PathBuf,
    /// `None` when the target already holds the content.
    tmp: Option<NamedTempFile>,
    /// Directories created for this file, deepest first.
    created_dirs: Vec<PathBuf>,
}

impl StagedFile {
    /// Final location of the file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rename the staged content over the target.
    pub fn commit(mut self) -> Result<WriteResult, EmitError> {
        self.created_dirs.clear();
        let Some(tmp) = self.tmp.take() else {
            tracing::debug!(path = %self.path.display(), "content unchanged, skipping write");
            return Ok(WriteResult::Unchanged);
        };

        tmp.persist(&self.path).map_err(|e| EmitError::Write {
            path: self.path.clone(),
            source: e.error,
        })?;

        tracing::debug!(path = %self.path.display(), "wrote file");
        Ok(WriteResult::Written)
    }
}

impl Drop for StagedFile {
    fn drop(&mut self) {
        drop(self.tmp.take());
        remove_created(&self.created_dirs);
    }
}

/// A set of staged files that become visible together.
///
/// Nothing reaches its target until every file has staged successfully
/// and [`WriteBatch::commit`] is called. Dropping an uncommitted batch
/// discards every staged file.
#[derive(Debug, Default)]
pub struct WriteBatch {
    staged: Vec<StagedFile>,
}

impl WriteBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&mut self, file: &impl GeneratedFile, base: &Path) -> Result<(), EmitError> {
        self.staged.push(file.stage(base)?);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.staged.len()
    }

    pub fn is_empty(&self) -> bool {
        self.staged.is_empty()
    }

    /// Commit every staged file in staging order.
    pub fn commit(mut self) -> Result<Vec<(PathBuf, WriteResult)>, EmitError> {
        let staged = std::mem::take(&mut self.staged);
        let mut results = Vec::with_capacity(staged.len());
        for file in staged {
            let path = file.path().to_path_buf();
            results.push((path, file.commit()?));
        }
        Ok(results)
    }
}

impl Drop for WriteBatch {
    fn drop(&mut self) {
        // Later files may share directories created by earlier ones
        while let Some(file) = self.staged.pop() {
            drop(file);
        }
    }
}

/// Write `content` to `path` atomically.
///
/// The content goes to a temporary file next to the target which is then
/// renamed over it, so readers never observe a half-written file. A target
/// that already holds `content` is left untouched.
#[cfg(test)]
fn write_file(path: &Path, content: &str) -> Result<WriteResult, EmitError> {
    stage_file(path, content)?.commit()
}

/// Stage `content` for `path` in a temporary file in the target directory.
fn stage_file(path: &Path, content: &str) -> Result<StagedFile, EmitError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let created_dirs: Vec<PathBuf> = parent
        .ancestors()
        .take_while(|dir| !dir.as_os_str().is_empty() && !dir.exists())
        .map(Path::to_path_buf)
        .collect();

    let mut staged = StagedFile {
        path: path.to_path_buf(),
        tmp: None,
        created_dirs,
    };

    fs::create_dir_all(parent).map_err(|source| EmitError::CreateDir {
        path: parent.to_path_buf(),
        source,
    })?;

    if let Ok(existing) = fs::read(path)
        && existing == content.as_bytes()
    {
        return Ok(staged);
    }

    let mut tmp = NamedTempFile::new_in(parent).map_err(|source| EmitError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(fs::Permissions::from_mode(0o644))
            .map_err(|source| EmitError::Open {
                path: path.to_path_buf(),
                source,
            })?;
    }

    tmp.write_all(content.as_bytes())
        .and_then(|_| tmp.flush())
        .map_err(|source| EmitError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "staged file");
    staged.tmp = Some(tmp);
    Ok(staged)
}

/// Remove directories deepest first; non-empty ones stay.
fn remove_created(dirs: &[PathBuf]) {
    for dir in dirs {
        if fs::remove_dir(dir).is_err() {
            break;
        }
    }
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already had the same content
    Unchanged,
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct Greeting;

    impl GeneratedFile for Greeting {
        fn path(&self, base: &Path) -> PathBuf {
            base.join("out").join("greeting.go")
        }

        fn render(&self) -> String {
            "package greeting\n".to_string()
        }
    }

    #[test]
    fn test_write_file_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        let result = write_file(&path, "hello").unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("c").join("test.txt");

        write_file(&path, "nested").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_write_file_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        write_file(&path, "a much longer first version").unwrap();
        write_file(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_write_file_same_content_is_unchanged() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        assert_eq!(write_file(&path, "same").unwrap(), WriteResult::Written);
        assert_eq!(write_file(&path, "same").unwrap(), WriteResult::Unchanged);
        assert_eq!(fs::read_to_string(&path).unwrap(), "same");
    }

    #[test]
    fn test_write_file_leaves_no_temp_files() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("only.txt");

        write_file(&path, "content").unwrap();

        let entries: Vec<_> = fs::read_dir(temp.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_write_file_mkdir_failure_names_step() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let err = write_file(&blocker.join("child.txt"), "x").unwrap_err();

        assert_eq!(err.step(), "mkdir");
        assert!(err.to_string().starts_with("mkdir "));
    }

    #[test]
    fn test_dropped_stage_leaves_nothing_behind() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("test.txt");

        let staged = stage_file(&path, "content").unwrap();
        assert!(temp.path().join("a/b").is_dir());
        drop(staged);

        assert!(!path.exists());
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_stage_keeps_existing_directories() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("out");
        fs::create_dir(&dir).unwrap();

        drop(stage_file(&dir.join("test.txt"), "content").unwrap());

        assert!(dir.is_dir());
        assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);
    }

    #[test]
    fn test_failed_batch_discards_earlier_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("blocked"), "not a directory").unwrap();

        struct At(&'static str);
        impl GeneratedFile for At {
            fn path(&self, base: &Path) -> PathBuf {
                base.join(self.0)
            }
            fn render(&self) -> String {
                self.0.to_string()
            }
        }

        let mut batch = WriteBatch::new();
        batch.stage(&At("out/first.go"), temp.path()).unwrap();
        batch.stage(&At("out/second.go"), temp.path()).unwrap();
        let err = batch
            .stage(&At("blocked/third.go"), temp.path())
            .unwrap_err();
        assert_eq!(err.step(), "mkdir");
        assert_eq!(batch.len(), 2);
        drop(batch);

        assert!(!temp.path().join("out/first.go").exists());
        assert!(!temp.path().join("out").exists());
    }

    #[test]
    fn test_batch_commit() {
        let temp = TempDir::new().unwrap();
        Greeting.write(temp.path()).unwrap();

        let mut batch = WriteBatch::new();
        batch.stage(&Greeting, temp.path()).unwrap();
        let results = batch.commit().unwrap();

        assert_eq!(
            results,
            vec![(temp.path().join("out/greeting.go"), WriteResult::Unchanged)]
        );
    }

    #[test]
    fn test_generated_file_write() {
        let temp = TempDir::new().unwrap();

        let result = Greeting.write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Written);
        let written = fs::read_to_string(temp.path().join("out/greeting.go")).unwrap();
        assert_eq!(written, "package greeting\n");
    }
}
