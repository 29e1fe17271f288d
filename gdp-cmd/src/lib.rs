//! Command implementations for the GDP chart CLI.
//!
//! Both subcommands fetch the GDP document once, run the same pure render
//! the web app uses, and present the resulting scene natively.

use clap::Subcommand;
use gdp_data::GDP_DATA_URL;

pub mod bars;
pub mod render;

#[derive(Subcommand)]
pub enum Command {
    /// Fetch the GDP series and write the chart as a static SVG file
    Render {
        /// Output path for the SVG document
        #[arg(short = 'o', long)]
        output: String,

        /// Source document URL
        #[arg(long, default_value = GDP_DATA_URL)]
        url: String,
    },

    /// Fetch the GDP series and print the metadata of every rendered bar
    Bars {
        /// Source document URL
        #[arg(long, default_value = GDP_DATA_URL)]
        url: String,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    let client = reqwest::Client::new();
    match command {
        Command::Render { output, url } => render::run_render(&client, &url, &output).await,
        Command::Bars { url } => bars::run_bars(&client, &url).await,
    }
}
