//! Chart factories: turn caller-supplied zone and heart-rate data into
//! declarative [`ChartConfig`] values.
//!
//! - Zone distribution -> pie chart with a right-hand legend and
//!   `"<zone>: <pct>%"` tooltips
//! - Heart-rate time series -> filled line chart with one dashed reference
//!   line per zone threshold, legend reduced to the primary series
//!
//! Both factories are pure: they read their arguments, build data, and hand
//! the result back. Rendering lives in [`crate::render`].

pub mod time;
pub mod types;
pub mod util;

pub use types::{
    AxisOptions, ChartConfig, ChartKind, ChartOptions, Dataset, LegendFilter, LegendOptions,
    LegendPosition, Paint, Scales, TooltipFormat, TooltipOptions,
};

use crate::models::Zone;
use crate::theme::ChartTheme;
use thiserror::Error;

/// Label of the primary series in the heart-rate chart; the only legend entry
/// that survives its filter.
pub const HEART_RATE_SERIES: &str = "Heart Rate";

/// Stroke and fill of the primary heart-rate series.
const HEART_RATE_STROKE: &str = "#FF6384";
const HEART_RATE_FILL: &str = "rgba(255, 99, 132, 0.2)";

/// Dash pattern for zone threshold reference lines.
const ZONE_DASH: [u32; 2] = [5, 5];

/// Suggested Y bounds for the heart-rate axis; the axis expands past them
/// when the data does.
pub const SUGGESTED_BPM_RANGE: (f64, f64) = (60.0, 190.0);

/// Rejected factory inputs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChartConfigError {
    #[error("parallel arrays differ in length: {labels} labels, {values} values, {colors} colors")]
    SliceMismatch {
        labels: usize,
        values: usize,
        colors: usize,
    },
    #[error("time and heart-rate arrays differ in length: {times} vs {values}")]
    SeriesMismatch { times: usize, values: usize },
}

/// Build the zone-distribution pie chart.
///
/// One dataset carries the percentages, one slice color per zone; the legend
/// sits at the right and tooltips read `"<label>: <raw>%"`. The three arrays
/// are parallel and must agree in length.
pub fn zone_pie_chart(
    labels: &[String],
    data: &[f64],
    colors: &[String],
    theme: &ChartTheme,
) -> Result<ChartConfig, ChartConfigError> {
    if labels.len() != data.len() || labels.len() != colors.len() {
        return Err(ChartConfigError::SliceMismatch {
            labels: labels.len(),
            values: data.len(),
            colors: colors.len(),
        });
    }

    let dataset = Dataset {
        background_color: Some(Paint::PerPoint(colors.to_vec())),
        ..Dataset::new("Zones", data.to_vec())
    };

    Ok(ChartConfig {
        kind: ChartKind::Pie,
        labels: labels.to_vec(),
        datasets: vec![dataset],
        options: ChartOptions {
            legend: LegendOptions {
                position: LegendPosition::Right,
                box_width: theme.legend_box_width,
                filter: LegendFilter::All,
            },
            tooltip: TooltipOptions {
                background: theme.tooltip_background.clone(),
                format: TooltipFormat::Percent,
            },
            scales: None,
            font_family: theme.font_family.clone(),
            foreground: theme.foreground.clone(),
            responsive: theme.responsive,
            maintain_aspect_ratio: theme.maintain_aspect_ratio,
        },
    })
}

/// Build the heart-rate time-series line chart.
///
/// `time_data` (elapsed seconds) and `heart_rate` are parallel arrays. Each
/// zone contributes a flat dashed line at its `max` threshold across the full
/// time range; those lines are drawn but filtered out of the legend.
pub fn heart_rate_chart(
    time_data: &[f64],
    heart_rate: &[f64],
    zones: &[Zone],
    theme: &ChartTheme,
) -> Result<ChartConfig, ChartConfigError> {
    if time_data.len() != heart_rate.len() {
        return Err(ChartConfigError::SeriesMismatch {
            times: time_data.len(),
            values: heart_rate.len(),
        });
    }

    let mut datasets = vec![Dataset {
        border_color: Some(HEART_RATE_STROKE.into()),
        background_color: Some(Paint::Solid(HEART_RATE_FILL.into())),
        fill: true,
        tension: 0.1,
        ..Dataset::new(HEART_RATE_SERIES, heart_rate.to_vec())
    }];

    for zone in zones {
        datasets.push(Dataset {
            border_color: Some(zone.color.clone()),
            border_dash: ZONE_DASH.to_vec(),
            point_radius: Some(0.0),
            ..Dataset::new(zone.name.clone(), vec![f64::from(zone.max); time_data.len()])
        });
    }

    Ok(ChartConfig {
        kind: ChartKind::Line,
        labels: time::time_labels(time_data),
        datasets,
        options: ChartOptions {
            legend: LegendOptions {
                position: LegendPosition::Top,
                box_width: theme.legend_box_width,
                filter: LegendFilter::Only(HEART_RATE_SERIES.into()),
            },
            tooltip: TooltipOptions {
                background: theme.tooltip_background.clone(),
                format: TooltipFormat::Plain,
            },
            scales: Some(Scales {
                x: AxisOptions {
                    title: Some("Time".into()),
                    max_ticks: Some(10),
                    ..AxisOptions::default()
                },
                y: AxisOptions {
                    title: Some("Heart Rate (bpm)".into()),
                    suggested_min: Some(SUGGESTED_BPM_RANGE.0),
                    suggested_max: Some(SUGGESTED_BPM_RANGE.1),
                    ..AxisOptions::default()
                },
            }),
            font_family: theme.font_family.clone(),
            foreground: theme.foreground.clone(),
            responsive: theme.responsive,
            maintain_aspect_ratio: theme.maintain_aspect_ratio,
        },
    })
}
