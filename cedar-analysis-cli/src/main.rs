//! `cedar-analysis` binary: run Cedar policy analysis directly on files, or
//! serve the analysis tools over the Model Context Protocol.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use cedar_analysis_core::{CedarAnalysisService, CedarEngine};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "cedar-analysis", version, about, long_about = None)]
struct Cli {
    /// Path to the cedar-lean-cli binary used for analysis.
    #[arg(long, global = true, env = "CEDAR_CLI_PATH", default_value = "cedar-lean-cli")]
    cedar_cli_path: PathBuf,

    /// Timeout in seconds for a single engine invocation.
    #[arg(long, global = true, default_value_t = 60)]
    engine_timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the analysis tools over the Model Context Protocol.
    McpServer {
        /// Transport to serve on.
        #[arg(long, value_enum, default_value_t = Transport::Stdio)]
        transport: Transport,

        /// Port for the HTTP transport.
        #[arg(long, default_value_t = 8000)]
        port: u16,
    },

    /// Analyze a Cedar policy set against a schema.
    Analyze {
        /// Path to the Cedar policy set file.
        #[arg(long)]
        policies: PathBuf,

        /// Path to the Cedar schema file.
        #[arg(long)]
        schema: PathBuf,
    },

    /// Compare an updated Cedar policy set against a baseline.
    Compare {
        /// Path to the original/baseline policy set file.
        #[arg(long)]
        baseline: PathBuf,

        /// Path to the new/modified policy set file.
        #[arg(long)]
        updated: PathBuf,

        /// Path to the Cedar schema file.
        #[arg(long)]
        schema: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Transport {
    Stdio,
    Http,
}

async fn read_input(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays clean for the stdio MCP transport
    // and for JSON output of the direct subcommands.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    log::debug!("using Cedar CLI at {}", cli.cedar_cli_path.display());
    let engine = CedarEngine::new(cli.cedar_cli_path)
        .with_timeout(Duration::from_secs(cli.engine_timeout));
    let service = CedarAnalysisService::new(engine);

    match cli.command {
        Commands::McpServer { transport, port } => match transport {
            Transport::Stdio => cedar_analysis_mcp_server::serve_stdio(service).await,
            Transport::Http => cedar_analysis_mcp_server::serve_http(service, port).await,
        },
        Commands::Analyze { policies, schema } => {
            let policy_set = read_input(&policies).await?;
            let schema = read_input(&schema).await?;
            let output = service.analyze_policies(&policy_set, &schema).await?;
            println!("{output}");
            Ok(())
        }
        Commands::Compare {
            baseline,
            updated,
            schema,
        } => {
            let baseline = read_input(&baseline).await?;
            let updated = read_input(&updated).await?;
            let schema = read_input(&schema).await?;
            let output = service
                .compare_policy_sets(&baseline, &updated, &schema)
                .await?;
            println!("{output}");
            Ok(())
        }
    }
}
