//! Comparative diffing of two policy sets against a schema.

use std::ffi::OsStr;

use crate::error::AnalysisResult;
use crate::staging::{ArtifactKind, StagedFile};

impl super::service::CedarAnalysisService {
    /// Compare an updated Cedar policy set against a baseline.
    ///
    /// Stages all three texts, runs
    /// `analyze compare <updatedFile> <baselineFile> <schemaFile>
    /// --json-output`, and returns the engine's JSON stdout. The
    /// updated-before-baseline argument order is the order the engine's
    /// compare command expects and must not be swapped.
    pub async fn compare_policy_sets(
        &self,
        baseline_policy_set: &str,
        updated_policy_set: &str,
        schema: &str,
    ) -> AnalysisResult<String> {
        let baseline = StagedFile::stage(baseline_policy_set, ArtifactKind::Policy)?;
        let updated = StagedFile::stage(updated_policy_set, ArtifactKind::Policy)?;
        let schema = StagedFile::stage(schema, ArtifactKind::Schema)?;

        let args: [&OsStr; 6] = [
            OsStr::new("analyze"),
            OsStr::new("compare"),
            updated.path().as_os_str(),
            baseline.path().as_os_str(),
            schema.path().as_os_str(),
            OsStr::new("--json-output"),
        ];
        let result = self.engine.invoke(args).await;

        baseline.release();
        updated.release();
        schema.release();

        Ok(result?)
    }
}
