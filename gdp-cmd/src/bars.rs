//! Tabular dump of rendered bar metadata.

use gdp_chart::{render, Bar, ChartConfig};
use gdp_data::api::fetch_dataset;
use log::info;

/// One tab-separated line per bar: index, date, value, fill, x, height.
pub fn format_bar(bar: &Bar) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{:.2}\t{:.2}",
        bar.index,
        bar.date,
        bar.value_label(),
        bar.fill,
        bar.x,
        bar.height
    )
}

pub async fn run_bars(client: &reqwest::Client, url: &str) -> anyhow::Result<()> {
    let dataset = fetch_dataset(client, url).await?;
    let scene = render(&dataset, &ChartConfig::default());
    info!("Rendered {} bars", scene.bars.len());

    println!("index\tdate\tvalue\tfill\tx\theight");
    for bar in &scene.bars {
        println!("{}", format_bar(bar));
    }
    Ok(())
}
