//! Dataset -> Scene.

use gdp_data::Dataset;
use gdp_utils::dates::format_date;
use gdp_utils::numbers::format_significant;
use log::debug;

use crate::config::ChartConfig;
use crate::scale::{LinearScale, TimeScale};
use crate::scene::{Axis, AxisOrient, AxisTick, Bar, Label, PlotArea, Scene};

/// Build the full chart for `dataset`.
///
/// Scales are derived from scratch on every call and the returned scene
/// replaces whatever was drawn before. An empty dataset yields a scene with
/// no bars and tick-less axes.
pub fn render(dataset: &Dataset, config: &ChartConfig) -> Scene {
    let plot_width = config.plot_width();
    let plot_height = config.plot_height();

    let x_scale = dataset
        .min_date()
        .zip(dataset.max_date())
        .map(|domain| TimeScale::new(domain, (0.0, plot_width)));
    let y_scale = dataset
        .max_value()
        .map(|max| LinearScale::new((0.0, max), (plot_height, 0.0)));

    let x_ticks: Vec<AxisTick> = x_scale
        .map(|scale| {
            scale
                .ticks(config.tick_count)
                .into_iter()
                .map(|date| AxisTick {
                    position: scale.apply(date),
                    label: format_date(&date),
                })
                .collect()
        })
        .unwrap_or_default();
    let y_ticks: Vec<AxisTick> = y_scale
        .map(|scale| {
            scale
                .ticks(config.tick_count)
                .into_iter()
                .map(|value| AxisTick {
                    position: scale.apply(value),
                    label: format_significant(value, config.value_precision),
                })
                .collect()
        })
        .unwrap_or_default();

    let bars: Vec<Bar> = match (x_scale, y_scale) {
        (Some(x_scale), Some(y_scale)) => {
            let bar_width = plot_width / dataset.len() as f64;
            dataset
                .iter()
                .enumerate()
                .map(|(index, point)| {
                    let y = y_scale.apply(point.value());
                    Bar {
                        index,
                        x: x_scale.apply(point.date()),
                        y,
                        width: bar_width,
                        height: plot_height - y,
                        fill: config.bar_fill(index).to_string(),
                        date: point.formatted_date(),
                        value: point.value(),
                    }
                })
                .collect()
        }
        _ => Vec::new(),
    };
    debug!("Rendered {} bars", bars.len());

    Scene {
        width: config.width,
        height: config.height,
        plot: PlotArea {
            x: config.margin.left,
            y: config.margin.top,
            width: plot_width,
            height: plot_height,
        },
        x_axis: Axis {
            id: "x-axis".to_string(),
            orient: AxisOrient::Bottom,
            offset: (0.0, plot_height),
            range: (0.0, plot_width),
            ticks: x_ticks,
        },
        y_axis: Axis {
            id: "y-axis".to_string(),
            orient: AxisOrient::Left,
            offset: (0.0, 0.0),
            range: (plot_height, 0.0),
            ticks: y_ticks,
        },
        bars,
        label: Label {
            text: config.axis_label.clone(),
            x: -plot_height / 2.0,
            y: config.margin.left / 2.0,
            rotate: -90.0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use gdp_data::DataPoint;

    const SAMPLE: &str = include_str!("../../fixtures/gdp_sample.json");

    fn point(y: i32, m: u32, d: u32, value: f64) -> DataPoint {
        DataPoint::new(NaiveDate::from_ymd_opt(y, m, d).unwrap(), value)
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_one_bar_per_point_in_order() {
        let dataset = Dataset::from_json(SAMPLE).unwrap();
        let scene = render(&dataset, &ChartConfig::default());
        assert_eq!(scene.bars.len(), dataset.len());
        assert!(scene.bars.windows(2).all(|w| w[0].x < w[1].x));
        for (bar, point) in scene.bars.iter().zip(dataset.iter()) {
            assert_eq!(bar.date, point.formatted_date());
            assert_eq!(bar.value, point.value());
        }
    }

    #[test]
    fn test_fill_follows_index_not_value() {
        let dataset = Dataset::from_json(SAMPLE).unwrap();
        let config = ChartConfig::default();
        let scene = render(&dataset, &config);
        for bar in &scene.bars {
            assert_eq!(bar.fill, config.palette[bar.index % 4]);
        }
    }

    #[test]
    fn test_bar_heights_are_proportional() {
        let dataset = Dataset::from_json(SAMPLE).unwrap();
        let scene = render(&dataset, &ChartConfig::default());
        let max = dataset.max_value().unwrap();
        for bar in &scene.bars {
            assert!(approx(bar.height, 470.0 * bar.value / max));
            assert!(approx(bar.y + bar.height, 470.0));
        }
        let tallest = scene.bars.iter().find(|b| b.value == max).unwrap();
        assert!(approx(tallest.height, 470.0));
        assert!(approx(tallest.y, 0.0));
    }

    #[test]
    fn test_horizontal_extent() {
        let dataset = Dataset::from_json(SAMPLE).unwrap();
        let scene = render(&dataset, &ChartConfig::default());
        let first = scene.bars.first().unwrap();
        let last = scene.bars.last().unwrap();
        assert!(approx(first.x, 0.0));
        assert!(approx(last.x, 950.0));
        assert!(approx(first.width, 950.0 / 8.0));
        assert!(last.right() - 950.0 <= last.width + 1e-9);
    }

    #[test]
    fn test_axes() {
        let dataset = Dataset::from_json(SAMPLE).unwrap();
        let scene = render(&dataset, &ChartConfig::default());

        assert_eq!(scene.x_axis.offset, (0.0, 470.0));
        assert_eq!(scene.x_axis.ticks.first().unwrap().label, "1947-01-01");
        assert!(scene
            .x_axis
            .ticks
            .iter()
            .all(|t| t.position >= 0.0 && t.position <= 950.0));

        // 0..=280.7 in steps of 20
        let labels: Vec<&str> = scene.y_axis.ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels.first(), Some(&"0.0"));
        assert_eq!(labels[1], "20");
        assert_eq!(labels.last(), Some(&"280"));
        assert!(approx(scene.y_axis.ticks[0].position, 470.0));
    }

    #[test]
    fn test_dense_value_ticks_round_ties_up() {
        let dataset = Dataset::new(vec![point(1947, 1, 1, 65.0), point(1947, 4, 1, 130.0)]);
        let config = ChartConfig {
            tick_count: 20,
            ..ChartConfig::default()
        };
        let scene = render(&dataset, &config);

        // 0..=130 in steps of 5
        let labels: Vec<&str> = scene.y_axis.ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels.len(), 27);
        assert_eq!(
            labels[20..],
            ["100", "110", "110", "120", "120", "130", "130"]
        );
    }

    #[test]
    fn test_static_label() {
        let scene = render(&Dataset::default(), &ChartConfig::default());
        assert_eq!(scene.label.text, "Gross Domestic Product");
        assert_eq!(scene.label.x, -235.0);
        assert_eq!(scene.label.y, 20.0);
        assert_eq!(scene.label.transform(), "rotate(-90)");
    }

    #[test]
    fn test_empty_dataset_renders_nothing() {
        let scene = render(&Dataset::default(), &ChartConfig::default());
        assert!(scene.is_empty());
        assert!(scene.x_axis.ticks.is_empty());
        assert!(scene.y_axis.ticks.is_empty());
        assert_eq!(scene.plot_transform(), "translate(40,10)");
    }

    #[test]
    fn test_single_point() {
        let dataset = Dataset::new(vec![point(1947, 1, 1, 243.1)]);
        let scene = render(&dataset, &ChartConfig::default());
        assert_eq!(scene.bars.len(), 1);
        let bar = &scene.bars[0];
        assert!(approx(bar.x, 475.0));
        assert!(approx(bar.width, 950.0));
        assert!(approx(bar.height, 470.0));
    }

    #[test]
    fn test_render_is_deterministic() {
        let dataset = Dataset::from_json(SAMPLE).unwrap();
        let config = ChartConfig::default();
        assert_eq!(render(&dataset, &config), render(&dataset, &config));
    }
}
