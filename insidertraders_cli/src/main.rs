mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "insidertraders")]
#[command(about = "Daily insider-transactions ETL: Alpha Vantage into Postgres with CSV backups")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the extract-transform-load pipeline once
    Run(commands::run::RunArgs),
}

impl Default for Commands {
    // Bare invocation runs the pipeline; that is how the scheduler calls it.
    fn default() -> Self {
        Self::Run(commands::run::RunArgs::default())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("insidertraders_lib=info".parse().unwrap())
                .add_directive("alphavantage_api=warn".parse().unwrap()),
        )
        .with_target(false)
        .init();

    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Commands::Run(args) => commands::run::run(&args).await?,
    }

    Ok(())
}
