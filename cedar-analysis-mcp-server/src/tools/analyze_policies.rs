use anyhow::{Context, Error};
use cedar_analysis_core::CedarAnalysisService;
use schemars::JsonSchema;
use serde::Deserialize;

use super::AnalysisOutput;

#[derive(Debug, Deserialize, JsonSchema)]
#[schemars(description = "Input for analyzing a Cedar policy set against a schema.")]
pub struct AnalyzePoliciesInput {
    #[schemars(
        description = "Cedar policy set content as a string (in Cedar policy syntax). Provide the actual policy content, not a file path."
    )]
    pub policy_set: String,

    #[schemars(
        description = "Cedar schema content as a string (in Cedar schema syntax) - defines entity types and their attributes. Provide the actual schema content, not a file path."
    )]
    pub schema: String,
}

pub async fn analyze_policies(
    service: &CedarAnalysisService,
    input: AnalyzePoliciesInput,
) -> Result<AnalysisOutput, Error> {
    let output = service
        .analyze_policies(&input.policy_set, &input.schema)
        .await
        .context("Failed to analyze Cedar policies")?;

    Ok(AnalysisOutput {
        output,
        summary: "Policy analysis completed successfully".to_string(),
    })
}
