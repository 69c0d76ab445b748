//! Public types for the declarative chart-configuration model.
//!
//! A [`ChartConfig`] is plain data: the factories in the parent module build
//! one, callers serialize it for a host renderer or hand it to
//! [`crate::render`] to draw locally. Nothing here touches a drawing backend.

use serde::{Deserialize, Serialize};

/// Chart kinds produced by the factories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Pie,
    Line,
}

/// Legend placement options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
    Right,
    Bottom,
    Left,
}

/// Which dataset labels appear in the legend.
///
/// The heart-rate chart draws one series per zone threshold but lists only
/// the primary series; `Only` captures that contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LegendFilter {
    #[default]
    All,
    Only(String),
}

impl LegendFilter {
    /// Whether a dataset with this label is listed in the legend.
    pub fn admits(&self, label: &str) -> bool {
        match self {
            LegendFilter::All => true,
            LegendFilter::Only(keep) => keep == label,
        }
    }
}

/// How tooltip lines are produced from a label and its raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TooltipFormat {
    /// `"<label>: <raw>"`
    #[default]
    Plain,
    /// `"<label>: <raw>%"`
    Percent,
}

impl TooltipFormat {
    /// Format one tooltip line, e.g. `("Zone 2", 35.0)` -> `"Zone 2: 35%"`.
    pub fn label(&self, label: &str, raw: f64) -> String {
        match self {
            TooltipFormat::Plain => format!("{label}: {raw}"),
            TooltipFormat::Percent => format!("{label}: {raw}%"),
        }
    }
}

/// Fill paint for a dataset: one color, or one color per data point (pie
/// slices).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Paint {
    Solid(String),
    PerPoint(Vec<String>),
}

/// One series of a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Paint>,
    pub border_width: u32,
    /// Dash pattern as on/off lengths; empty means a solid stroke.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub border_dash: Vec<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_radius: Option<f64>,
    pub fill: bool,
    /// Line smoothing, 0.0 = straight segments.
    pub tension: f64,
}

impl Dataset {
    /// A solid, unfilled series with the defaults the factories start from.
    pub fn new(label: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            data,
            border_color: None,
            background_color: None,
            border_width: 1,
            border_dash: Vec::new(),
            point_radius: None,
            fill: false,
            tension: 0.0,
        }
    }

    pub fn is_dashed(&self) -> bool {
        !self.border_dash.is_empty()
    }
}

/// Legend section of the chart options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendOptions {
    pub position: LegendPosition,
    pub box_width: u32,
    #[serde(default)]
    pub filter: LegendFilter,
}

/// Tooltip section of the chart options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipOptions {
    pub background: String,
    #[serde(default)]
    pub format: TooltipFormat,
}

/// One axis of a cartesian chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AxisOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_max: Option<f64>,
    /// Cap on rendered tick labels; excess labels are skipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_ticks: Option<usize>,
}

/// Both axes of a cartesian chart; absent for pie charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Scales {
    pub x: AxisOptions,
    pub y: AxisOptions,
}

/// Display options shared by every chart kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    pub legend: LegendOptions,
    pub tooltip: TooltipOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scales: Option<Scales>,
    pub font_family: String,
    pub foreground: String,
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
}

/// A complete declarative chart description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub kind: ChartKind,
    /// Category labels: slice names for pies, formatted time labels for the
    /// heart-rate series.
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub options: ChartOptions,
}

impl ChartConfig {
    /// Dataset labels that survive the legend filter, in dataset order.
    pub fn legend_labels(&self) -> Vec<&str> {
        self.datasets
            .iter()
            .map(|d| d.label.as_str())
            .filter(|l| self.options.legend.filter.admits(l))
            .collect()
    }

    /// Tooltip line for the data point at `index` of `dataset`.
    pub fn tooltip_label(&self, dataset: usize, index: usize) -> Option<String> {
        let raw = *self.datasets.get(dataset)?.data.get(index)?;
        let label = match self.kind {
            ChartKind::Pie => self.labels.get(index)?.as_str(),
            ChartKind::Line => self.datasets.get(dataset)?.label.as_str(),
        };
        Some(self.options.tooltip.format.label(label, raw))
    }
}
