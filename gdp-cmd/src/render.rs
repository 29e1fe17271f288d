//! Static SVG snapshot of the chart.

use gdp_chart::{render, svg, ChartConfig};
use gdp_data::api::fetch_dataset;
use log::info;

/// Fetch the dataset from `url`, render it and write the SVG to `output`.
pub async fn run_render(client: &reqwest::Client, url: &str, output: &str) -> anyhow::Result<()> {
    let dataset = fetch_dataset(client, url).await?;
    if dataset.is_empty() {
        anyhow::bail!("GDP document at {} contained no data points", url);
    }

    let scene = render(&dataset, &ChartConfig::default());
    tokio::fs::write(output, svg::to_svg(&scene)).await?;

    info!("Wrote {} bars to {}", scene.bars.len(), output);
    Ok(())
}
