//! Guidance prompts registered alongside the analysis tools.

use rmcp::model::{PromptMessage, PromptMessageRole};
use rmcp::{prompt, prompt_router, ErrorData as McpError};

use crate::CedarAnalysisServer;

pub(crate) const ADD_AND_VERIFY_POLICY_WORKFLOW: &str = r#"# Add and Verify New Policy Workflow

## Overview

Analyzes the impact of adding new Cedar policies to your existing policy set. Shows permission changes, provides authorization examples, and identifies policy issues.

## Parameters

This prompt takes no parameters. You will be asked to provide:
- Path to Cedar schema file
- Path to current Cedar policies file
- Path to new Cedar policy file

## Steps

### 1. Verify Dependencies

- You MUST verify these tools are available: compare-policy-sets, analyze-policies, and a file-read tool
- You MUST inform the user of any missing tools and ask if they want to proceed

### 2. Load Files

- You MUST read all three files with a file-read tool
- You MUST validate that the files exist and contain valid Cedar content
- You MUST combine current policies with the new policy for analysis

### 3. Compare Policy Sets

- You MUST use compare-policy-sets with the current vs the combined policy sets
- You MUST present results in a simple table showing entity, action, and change type
- You MUST focus on meaningful changes (more/less permissive)

### 4. Show Authorization Examples

- You MUST provide one concrete example showing the most significant permission change
- You MUST format the example in JSON with complete principal, action, and resource details
- You MUST include before/after authorization decisions with reasoning
- You MUST use generic identifiers (userA, userB, CompanyX, resource1) so examples are easily adaptable

### 5. Analyze Policy Issues

- You MUST use analyze-policies on the combined policy set
- You MUST check for: shadowed permits, impossible conditions, forbid overrides, complete denials
- You MUST present findings in a table with Issue Type, Description, Impact Level

### 6. Summary

- You MUST provide a concise summary with key findings and recommendations
- You MUST highlight any security concerns
- You MUST indicate whether it is safe to deploy the new policy

## Troubleshooting

- Verify file paths are correct; provide content directly if file access fails
- Review error messages for Cedar syntax problems
- Ensure the schema defines every entity and action the policies reference"#;

#[prompt_router(vis = "pub(crate)")]
impl CedarAnalysisServer {
    #[prompt(
        name = "add-and-verify-new-policy-workflow",
        description = "Analyzes the impact of adding new Cedar policies to your existing policy set. Shows permission changes, provides authorization examples, and identifies policy issues."
    )]
    async fn add_and_verify_new_policy_workflow(&self) -> Result<Vec<PromptMessage>, McpError> {
        Ok(vec![PromptMessage::new_text(
            PromptMessageRole::Assistant,
            ADD_AND_VERIFY_POLICY_WORKFLOW,
        )])
    }
}
