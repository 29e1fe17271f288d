//! GDP CLI - render the USA GDP chart from the command line.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "gdp-cli",
    version,
    about = "USA GDP bar chart toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: gdp_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("Starting gdp-cli");
    gdp_cmd::run(cli.command).await
}
