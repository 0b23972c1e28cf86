use clap::{Parser, Subcommand};

mod analyze;
mod record;

#[derive(Debug, Parser)]
#[command(name = "fintel-cli")]
#[command(about = "Korean financial threat-intel analysis over collected tweets")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Analyze the latest collected tweets and alert on relevant threats.
    Analyze,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = fintel_core::load_app_config_from_env()?;

    match cli.command {
        Some(Commands::Analyze) | None => analyze::run_analyze(&config).await,
    }
}
