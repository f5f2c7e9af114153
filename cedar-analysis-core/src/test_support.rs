//! Helpers for tests that substitute a fake analysis engine.
//!
//! Available to other workspace crates via the `integ-test` feature.

use std::path::{Path, PathBuf};

/// Write an executable shell script into `dir` and return its path.
///
/// The script stands in for `cedar-lean-cli` so tests can control the
/// engine's output, exit status, and timing without a real Lean toolchain.
#[cfg(unix)]
pub fn fake_engine(dir: &Path, script: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("fake-cedar-lean-cli");
    std::fs::write(&path, script).expect("failed to write fake engine script");

    let mut perms = std::fs::metadata(&path)
        .expect("failed to stat fake engine script")
        .permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).expect("failed to mark fake engine executable");

    path
}
