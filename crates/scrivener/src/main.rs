//! Scrivener CLI binary.
//!
//! - `scrivener once`: post once, comment once, exit
//! - `scrivener schedule`: run both jobs daily until interrupted

use clap::Parser;

mod cli;
mod observability;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, run};
    use observability::{ObservabilityConfig, init_observability_with_config};

    // .env is optional
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let mut config = ObservabilityConfig::default().with_json_logs(cli.json_logs);
    if cli.verbose {
        config = config.with_log_level("debug");
    }
    init_observability_with_config(config)?;

    run(cli).await?;

    Ok(())
}
