//! Policy-set analysis against a schema.

use std::ffi::OsStr;

use crate::error::AnalysisResult;
use crate::staging::{ArtifactKind, StagedFile};

impl super::service::CedarAnalysisService {
    /// Validate a Cedar policy set against a schema.
    ///
    /// Stages both texts as temp files, runs
    /// `analyze policies <policyFile> <schemaFile> --json-output`, and
    /// returns the engine's JSON stdout. The staged files are removed before
    /// this returns, whether or not the invocation succeeded.
    ///
    /// A zero engine exit means the analysis ran; findings (if any) are part
    /// of the JSON payload, not an error.
    pub async fn analyze_policies(
        &self,
        policy_set: &str,
        schema: &str,
    ) -> AnalysisResult<String> {
        let policies = StagedFile::stage(policy_set, ArtifactKind::Policy)?;
        let schema = StagedFile::stage(schema, ArtifactKind::Schema)?;

        let args: [&OsStr; 5] = [
            OsStr::new("analyze"),
            OsStr::new("policies"),
            policies.path().as_os_str(),
            schema.path().as_os_str(),
            OsStr::new("--json-output"),
        ];
        let result = self.engine.invoke(args).await;

        policies.release();
        schema.release();

        Ok(result?)
    }
}
