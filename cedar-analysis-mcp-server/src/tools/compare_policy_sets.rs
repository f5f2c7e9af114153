use anyhow::{Context, Error};
use cedar_analysis_core::CedarAnalysisService;
use schemars::JsonSchema;
use serde::Deserialize;

use super::AnalysisOutput;

#[derive(Debug, Deserialize, JsonSchema)]
#[schemars(description = "Input for comparing two Cedar policy sets against a schema.")]
pub struct ComparePolicySetsInput {
    #[schemars(
        description = "Original/baseline Cedar policy set content as a string (in Cedar policy syntax). Provide the actual policy content, not a file path."
    )]
    pub policy_set1: String,

    #[schemars(
        description = "New/modified Cedar policy set content as a string (in Cedar policy syntax) - typically containing your policy changes. Provide the actual policy content, not a file path."
    )]
    pub policy_set2: String,

    #[schemars(
        description = "Cedar schema content as a string (in Cedar schema syntax) - defines entity types and their attributes. Provide the actual schema content, not a file path."
    )]
    pub schema: String,
}

pub async fn compare_policy_sets(
    service: &CedarAnalysisService,
    input: ComparePolicySetsInput,
) -> Result<AnalysisOutput, Error> {
    let output = service
        .compare_policy_sets(&input.policy_set1, &input.policy_set2, &input.schema)
        .await
        .context("Failed to compare Cedar policy sets")?;

    Ok(AnalysisOutput {
        output,
        summary: "Policy comparison completed successfully".to_string(),
    })
}
