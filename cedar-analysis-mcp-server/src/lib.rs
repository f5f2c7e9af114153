//! Cedar Analysis MCP Server
//!
//! This crate exposes the Cedar analysis operations as MCP tools:
//! - `analyze-policies`: validate a Cedar policy set against a schema and
//!   surface structural issues
//! - `compare-policy-sets`: compare two Cedar policy sets to verify that
//!   policy changes maintain intended authorization behavior
//!
//! Prompts:
//! - `add-and-verify-new-policy-workflow`: guided workflow for analyzing the
//!   impact of adding new Cedar policies to an existing policy set
//!
//! Both stdio and streamable-HTTP transports are supported; see
//! [`serve_stdio`] and [`serve_http`].

mod prompts;
mod response;
mod tools;

use cedar_analysis_core::CedarAnalysisService;
use rmcp::handler::server::router::prompt::PromptRouter;
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, GetPromptRequestParam, GetPromptResult, Implementation, ListPromptsResult,
    PaginatedRequestParam, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::transport::stdio;
use rmcp::transport::streamable_http_server::{
    session::local::LocalSessionManager, StreamableHttpService,
};
use rmcp::{
    tool, tool_handler, tool_router, ErrorData as McpError, RoleServer, ServerHandler, ServiceExt,
};

use tools::{AnalyzePoliciesInput, ComparePolicySetsInput};

/// MCP server handler wrapping a [`CedarAnalysisService`].
#[derive(Clone)]
pub struct CedarAnalysisServer {
    service: CedarAnalysisService,
    tool_router: ToolRouter<Self>,
    prompt_router: PromptRouter<Self>,
}

#[tool_router]
impl CedarAnalysisServer {
    pub fn new(service: CedarAnalysisService) -> Self {
        Self {
            service,
            tool_router: Self::tool_router(),
            prompt_router: Self::prompt_router(),
        }
    }

    #[tool(
        name = "analyze-policies",
        description = "Analyze Cedar policies against a schema to validate policy structure and identify potential issues."
    )]
    async fn analyze_policies(
        &self,
        Parameters(input): Parameters<AnalyzePoliciesInput>,
    ) -> Result<CallToolResult, McpError> {
        Ok(match tools::analyze_policies(&self.service, input).await {
            Ok(output) => response::success(&output),
            Err(err) => response::failure(&err),
        })
    }

    #[tool(
        name = "compare-policy-sets",
        description = "Compare two Cedar policy sets to verify that policy changes maintain intended authorization behavior. This tool identifies if changes make policies more or less permissive, helping developers ensure security is maintained when updating policies."
    )]
    async fn compare_policy_sets(
        &self,
        Parameters(input): Parameters<ComparePolicySetsInput>,
    ) -> Result<CallToolResult, McpError> {
        Ok(match tools::compare_policy_sets(&self.service, input).await {
            Ok(output) => response::success(&output),
            Err(err) => response::failure(&err),
        })
    }
}

#[tool_handler]
#[rmcp::prompt_handler]
impl ServerHandler for CedarAnalysisServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: "cedar-analysis".to_string(),
                title: None,
                version: env!("CARGO_PKG_VERSION").to_string(),
                website_url: None,
                icons: None,
            },
            instructions: Some(
                "Analyze Cedar authorization policies: validate a policy set against a schema \
                 with analyze-policies, or compare two policy sets with compare-policy-sets to \
                 check whether changes make the policies more or less permissive. Inputs are raw \
                 Cedar policy/schema text, not file paths."
                    .to_string(),
            ),
        }
    }
}

/// Serve the MCP server over stdio until the client disconnects.
pub async fn serve_stdio(service: CedarAnalysisService) -> anyhow::Result<()> {
    let server = CedarAnalysisServer::new(service).serve(stdio()).await?;
    server.waiting().await?;
    Ok(())
}

/// Serve the MCP server over streamable HTTP at `/mcp` until ctrl-c.
pub async fn serve_http(service: CedarAnalysisService, port: u16) -> anyhow::Result<()> {
    let http_service = StreamableHttpService::new(
        move || Ok(CedarAnalysisServer::new(service.clone())),
        LocalSessionManager::default().into(),
        Default::default(),
    );

    let router = axum::Router::new().nest_service("/mcp", http_service);
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port)).await?;
    log::info!("Cedar analysis MCP server listening on http://127.0.0.1:{port}/mcp");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(err) = tokio::signal::ctrl_c().await {
                log::warn!("failed to listen for shutdown signal: {err}");
            }
        })
        .await?;
    Ok(())
}
