//! Invocation of the external `cedar-lean-cli` analysis engine.
//!
//! The engine is executed directly with an argument vector (no shell), with
//! piped stdio and a bounded timeout. The invoker holds no state between
//! invocations; every call is independent and never retried.

use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tokio::time::timeout;

use crate::error::EngineError;

/// Environment variable that overrides the engine binary path.
pub const CEDAR_CLI_PATH_VAR: &str = "CEDAR_CLI_PATH";

/// Default engine binary name, resolved through PATH.
pub const DEFAULT_CEDAR_CLI: &str = "cedar-lean-cli";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Handle to the external Cedar analysis engine.
///
/// The binary path is injected at construction so tests can substitute a fake
/// engine; [`CedarEngine::from_env`] is the single place the
/// `CEDAR_CLI_PATH` environment variable is consulted.
#[derive(Debug, Clone)]
pub struct CedarEngine {
    program: PathBuf,
    timeout: Duration,
}

impl CedarEngine {
    /// Create an engine handle for the given binary path.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Create an engine handle from `CEDAR_CLI_PATH`, falling back to
    /// `cedar-lean-cli` on PATH.
    pub fn from_env() -> Self {
        let program =
            std::env::var_os(CEDAR_CLI_PATH_VAR).unwrap_or_else(|| DEFAULT_CEDAR_CLI.into());
        Self::new(PathBuf::from(program))
    }

    /// Override the invocation timeout. A hung engine process fails the
    /// owning operation with [`EngineError::Timeout`] once this elapses.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Run the engine with the given arguments and capture its stdout.
    ///
    /// Stderr content alongside a zero exit status is treated as a non-fatal
    /// warning (logged) and never suppresses the result; non-zero exit is a
    /// tooling failure, not an analysis finding.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] if the process cannot be launched, exits with
    /// a non-zero status, or does not complete within the timeout.
    pub async fn invoke<I, S>(&self, args: I) -> Result<String, EngineError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut command = Command::new(&self.program);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        log::debug!("invoking Cedar CLI: {command:?}");

        let output = timeout(self.timeout, command.output())
            .await
            .map_err(|_| EngineError::Timeout(self.timeout))?
            .map_err(|err| {
                if err.kind() == std::io::ErrorKind::NotFound {
                    EngineError::NotFound(self.program.display().to_string())
                } else {
                    EngineError::Spawn(err)
                }
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr);

        if !output.status.success() {
            let message = if stderr.trim().is_empty() {
                stdout.trim().to_string()
            } else {
                stderr.trim().to_string()
            };
            return Err(EngineError::Failed {
                status: output.status,
                message,
            });
        }

        if !stderr.trim().is_empty() {
            log::warn!("Cedar CLI warning: {}", stderr.trim());
        }

        Ok(stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_binary_is_not_found() {
        let engine = CedarEngine::new("/nonexistent/cedar-lean-cli");
        let err = engine
            .invoke(["analyze", "policies"])
            .await
            .expect_err("invoking a missing binary should fail");
        assert!(matches!(err, EngineError::NotFound(_)), "got {err:?}");
        assert!(err.to_string().contains("/nonexistent/cedar-lean-cli"));
    }

    #[test]
    #[serial_test::serial]
    fn from_env_honors_override() {
        std::env::set_var(CEDAR_CLI_PATH_VAR, "/opt/cedar/bin/cedar-lean-cli");
        let engine = CedarEngine::from_env();
        std::env::remove_var(CEDAR_CLI_PATH_VAR);
        assert_eq!(
            engine.program,
            PathBuf::from("/opt/cedar/bin/cedar-lean-cli")
        );
    }

    #[test]
    #[serial_test::serial]
    fn from_env_defaults_to_path_lookup() {
        std::env::remove_var(CEDAR_CLI_PATH_VAR);
        let engine = CedarEngine::from_env();
        assert_eq!(engine.program, PathBuf::from(DEFAULT_CEDAR_CLI));
    }

    #[cfg(unix)]
    mod unix {
        use super::*;
        use crate::test_support::fake_engine;

        #[tokio::test]
        #[serial_test::parallel]
        async fn captures_stdout_on_success() {
            let dir = tempfile::tempdir().expect("tempdir");
            let program = fake_engine(dir.path(), "#!/bin/sh\nprintf '{\"issues\":[]}'\n");

            let engine = CedarEngine::new(program);
            let output = engine
                .invoke(["analyze", "policies"])
                .await
                .expect("fake engine should succeed");
            assert_eq!(output, "{\"issues\":[]}");
        }

        #[tokio::test]
        #[serial_test::parallel]
        async fn stderr_with_zero_exit_still_returns_stdout() {
            let dir = tempfile::tempdir().expect("tempdir");
            let program = fake_engine(
                dir.path(),
                "#!/bin/sh\necho 'deprecation warning' >&2\nprintf 'ok'\n",
            );

            let engine = CedarEngine::new(program);
            let output = engine.invoke(["analyze"]).await.expect("warning is non-fatal");
            assert_eq!(output, "ok");
        }

        #[tokio::test]
        #[serial_test::parallel]
        async fn nonzero_exit_preserves_engine_message() {
            let dir = tempfile::tempdir().expect("tempdir");
            let program = fake_engine(
                dir.path(),
                "#!/bin/sh\necho 'parse error at line 3' >&2\nexit 1\n",
            );

            let engine = CedarEngine::new(program);
            let err = engine
                .invoke(["analyze"])
                .await
                .expect_err("non-zero exit should fail");
            match err {
                EngineError::Failed { status, message } => {
                    assert_eq!(status.code(), Some(1));
                    assert_eq!(message, "parse error at line 3");
                }
                other => panic!("expected Failed, got {other:?}"),
            }
        }

        #[tokio::test]
        #[serial_test::parallel]
        async fn nonzero_exit_falls_back_to_stdout_message() {
            let dir = tempfile::tempdir().expect("tempdir");
            let program = fake_engine(dir.path(), "#!/bin/sh\necho 'bad schema'\nexit 2\n");

            let engine = CedarEngine::new(program);
            let err = engine
                .invoke(["analyze"])
                .await
                .expect_err("non-zero exit should fail");
            assert!(err.to_string().contains("bad schema"), "got {err}");
        }

        #[tokio::test]
        #[serial_test::parallel]
        async fn hung_engine_times_out() {
            let dir = tempfile::tempdir().expect("tempdir");
            let program = fake_engine(dir.path(), "#!/bin/sh\nsleep 30\n");

            let engine =
                CedarEngine::new(program).with_timeout(Duration::from_millis(200));
            let err = engine
                .invoke(["analyze"])
                .await
                .expect_err("hung engine should time out");
            assert!(matches!(err, EngineError::Timeout(_)), "got {err:?}");
        }
    }
}
