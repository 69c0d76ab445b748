//! Shared visual defaults for every chart built by this crate.
//!
//! The dashboard this crate grew out of configured its charting library once,
//! globally, at load time. Here the same defaults live in an explicit
//! [`ChartTheme`] value constructed at application start-up and passed to each
//! factory, so nothing depends on ambient mutable state and applying a theme
//! any number of times yields the same configuration.

use serde::{Deserialize, Serialize};

/// Visual defaults applied to every chart configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartTheme {
    /// CSS-style font stack used for all chart text.
    pub font_family: String,
    /// Foreground (text/tick) color; the default suits a dark page theme.
    pub foreground: String,
    /// Width of the colored box next to each legend entry.
    pub legend_box_width: u32,
    /// Tooltip background color.
    pub tooltip_background: String,
    /// Whether the host should resize the chart with its container.
    pub responsive: bool,
    /// Whether the host should preserve the intrinsic aspect ratio.
    pub maintain_aspect_ratio: bool,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            font_family: "'Helvetica Neue', 'Helvetica', 'Arial', sans-serif".into(),
            foreground: "#e0e0e0".into(),
            legend_box_width: 15,
            tooltip_background: "rgba(0, 0, 0, 0.8)".into(),
            responsive: true,
            maintain_aspect_ratio: false,
        }
    }
}
