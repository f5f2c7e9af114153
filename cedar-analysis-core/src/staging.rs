//! Staging of untrusted policy/schema text as ephemeral temp files.
//!
//! The external engine only accepts file paths, so each operation writes its
//! inputs to uniquely named files in the system temp directory and removes
//! them before returning. Removal is best-effort: a failed cleanup is logged
//! and never alters the operation's result.

use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::StagingError;

/// The kind of content being staged, selecting the file suffix the engine
/// expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// A Cedar policy set (`.cedar`).
    Policy,
    /// A Cedar schema (`.cedarschema`).
    Schema,
}

impl ArtifactKind {
    const fn suffix(self) -> &'static str {
        match self {
            Self::Policy => ".cedar",
            Self::Schema => ".cedarschema",
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Policy => "policy",
            Self::Schema => "schema",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A staged policy or schema file, owned exclusively by the operation that
/// created it.
///
/// The file is removed when [`StagedFile::release`] is called or when the
/// value is dropped, whichever comes first, so every exit path of the owning
/// operation releases the artifact. Temp file names are randomized by
/// `tempfile`, so concurrent operations in the same process never collide.
#[derive(Debug)]
pub struct StagedFile {
    path: PathBuf,
    kind: ArtifactKind,
    file: Option<NamedTempFile>,
}

impl StagedFile {
    /// Write `content` to a fresh uniquely named temp file.
    ///
    /// No validation of the content is performed; the engine is the authority
    /// on well-formedness.
    ///
    /// # Errors
    ///
    /// Returns [`StagingError`] if the file cannot be created or written.
    pub fn stage(content: &str, kind: ArtifactKind) -> Result<Self, StagingError> {
        let stage_err = |source| StagingError { kind, source };

        let mut file = tempfile::Builder::new()
            .prefix("cedar-")
            .suffix(kind.suffix())
            .tempfile()
            .map_err(stage_err)?;
        file.write_all(content.as_bytes()).map_err(stage_err)?;
        file.flush().map_err(stage_err)?;

        let path = file.path().to_path_buf();
        log::debug!("staged {kind} content at {}", path.display());

        Ok(Self {
            path,
            kind,
            file: Some(file),
        })
    }

    /// Location of the staged file on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the staged file now rather than at end of scope.
    pub fn release(mut self) {
        self.remove();
    }

    fn remove(&mut self) {
        if let Some(file) = self.file.take() {
            if let Err(err) = file.close() {
                // Cleanup must never block or alter the operation's result.
                log::warn!(
                    "failed to remove staged {} file {}: {err}",
                    self.kind,
                    self.path.display()
                );
            }
        }
    }
}

impl Drop for StagedFile {
    fn drop(&mut self) {
        self.remove();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[serial_test::parallel]
    fn stage_writes_content_with_expected_suffix() {
        let staged = StagedFile::stage("permit(principal, action, resource);", ArtifactKind::Policy)
            .expect("staging should succeed");

        let path = staged.path().to_path_buf();
        assert!(path.extension().is_some_and(|ext| ext == "cedar"));

        let on_disk = std::fs::read_to_string(&path).expect("staged file should be readable");
        assert_eq!(on_disk, "permit(principal, action, resource);");

        staged.release();
        assert!(!path.exists());
    }

    #[test]
    #[serial_test::parallel]
    fn schema_artifacts_use_schema_suffix() {
        let staged =
            StagedFile::stage("entity User;", ArtifactKind::Schema).expect("staging should succeed");
        assert!(staged
            .path()
            .to_string_lossy()
            .ends_with(".cedarschema"));
    }

    #[test]
    #[serial_test::parallel]
    fn drop_removes_file() {
        let path;
        {
            let staged =
                StagedFile::stage("forbid(principal, action, resource);", ArtifactKind::Policy)
                    .expect("staging should succeed");
            path = staged.path().to_path_buf();
            assert!(path.exists());
        }
        assert!(!path.exists(), "drop should remove the staged file");
    }

    #[test]
    #[serial_test::parallel]
    fn concurrent_stagings_never_collide() {
        let a = StagedFile::stage("a", ArtifactKind::Policy).expect("staging should succeed");
        let b = StagedFile::stage("b", ArtifactKind::Policy).expect("staging should succeed");
        assert_ne!(a.path(), b.path());
    }

    #[test]
    #[serial_test::parallel]
    fn release_tolerates_file_removed_out_of_band() {
        let staged = StagedFile::stage("permit(principal, action, resource);", ArtifactKind::Policy)
            .expect("staging should succeed");
        let path = staged.path().to_path_buf();

        std::fs::remove_file(&path).expect("out-of-band removal should succeed");

        // The already-gone file makes cleanup fail; release must only log.
        staged.release();
        assert!(!path.exists());
    }
}
