use anyhow::Result;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod commands;

#[derive(Parser, Debug)]
#[command(
    name = "get-papers-list",
    about = "List PubMed papers with at least one non-academic author",
    long_about = "Searches PubMed, keeps papers with authors affiliated with companies \
                  rather than universities or hospitals, and saves them as CSV"
)]
struct Cli {
    #[command(flatten)]
    report: commands::report::Report,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,

    /// API key for NCBI E-utilities (increases rate limit)
    #[arg(long, env = "NCBI_API_KEY")]
    api_key: Option<String>,

    /// Email for NCBI requests (recommended)
    #[arg(long, env = "NCBI_EMAIL")]
    email: Option<String>,

    /// Tool name for NCBI requests
    #[arg(long, env = "NCBI_TOOL", default_value = "get-papers-list")]
    tool: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    cli.report
        .execute_with_config(cli.api_key.as_deref(), cli.email.as_deref(), &cli.tool)
        .await
}
