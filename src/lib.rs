//! hrviz
//!
//! A lightweight Rust library for building, exporting, and rendering the
//! charts of a heart-rate dashboard. Pairs with the `hrviz` CLI.
//!
//! ### Features
//! - Declarative, serializable chart configurations (no drawing backend
//!   required to build or export them)
//! - Zone-distribution pie chart and heart-rate line chart with dashed zone
//!   threshold overlays
//! - Dashboard view-models: responsive layout rule, loading cue, colored
//!   zone-percentage labels with tooltips
//! - Render any configuration to SVG/PNG via `plotters`
//!
//! ### Example
//! ```no_run
//! use hrviz::{ChartTheme, chart};
//!
//! let theme = ChartTheme::default();
//! let labels = vec!["Zone 1".to_string(), "Zone 2".to_string()];
//! let shares = vec![40.0, 60.0];
//! let colors = vec!["#3A86FF".to_string(), "#4CB944".to_string()];
//! let config = chart::zone_pie_chart(&labels, &shares, &colors, &theme)?;
//! hrviz::storage::save_config_json(&config, "zones.json")?;
//! hrviz::render::render_config(&config, "zones.svg", 1000, 600)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod chart;
pub mod dashboard;
pub mod models;
pub mod render;
pub mod storage;
pub mod theme;

pub use chart::{ChartConfig, heart_rate_chart, zone_pie_chart};
pub use models::{HrSample, Zone, ZoneShare};
pub use theme::ChartTheme;
