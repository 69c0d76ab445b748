//! Dashboard view-models: the responsive layout rule, the loading cue, and
//! the colored zone-percentage label strip.
//!
//! Everything here is a pure function over caller-supplied data returning a
//! serializable description; how a host applies it (DOM, native UI, terminal)
//! is out of scope.

use crate::models::ZoneShare;
use serde::{Deserialize, Serialize};

/// Viewports narrower than this get the compact activity-list height.
pub const NARROW_VIEWPORT_PX: u32 = 768;

/// Max height of the activity list, in logical pixels, for a viewport width.
///
/// `400` below [`NARROW_VIEWPORT_PX`], `500` from it on. Stateless and
/// idempotent; hosts re-evaluate it on every resize.
pub fn activity_list_max_height(viewport_width: u32) -> u32 {
    if viewport_width < NARROW_VIEWPORT_PX {
        400
    } else {
        500
    }
}

/// Style override a host applies to the main container while fresh data
/// loads. There is no restore counterpart: the host replaces the content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoadingCue {
    pub opacity: f64,
    pub transition: String,
}

impl Default for LoadingCue {
    fn default() -> Self {
        Self {
            opacity: 0.7,
            transition: "opacity 0.3s".into(),
        }
    }
}

/// Tooltip placement relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TooltipPlacement {
    Top,
    Bottom,
    Left,
    Right,
}

/// The data a tooltip widget is initialized with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tooltip {
    pub placement: TooltipPlacement,
    pub title: String,
}

/// One colored percentage label in the zone strip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ZoneLabel {
    /// Rounded percentage with a `%` suffix, e.g. `"40%"`.
    pub text: String,
    pub color: String,
    pub bold: bool,
    /// Tooltip carrying the zone name and the exact percentage.
    pub tooltip: Tooltip,
}

/// The zone-percentage strip: one label per zone with time in it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ZoneProgress {
    pub labels: Vec<ZoneLabel>,
}

/// Build the zone strip from per-zone shares.
///
/// Zones at 0% (or below) produce no label; an empty input yields an empty
/// strip. Label text shows the rounded integer percentage, the tooltip the
/// exact value.
pub fn zone_progress(shares: &[ZoneShare]) -> ZoneProgress {
    let labels = shares
        .iter()
        .filter(|s| s.percent > 0.0)
        .map(|s| ZoneLabel {
            text: format!("{}%", s.percent.round()),
            color: s.color.clone(),
            bold: true,
            tooltip: Tooltip {
                placement: TooltipPlacement::Top,
                title: format!("{}: {}%", s.zone, s.percent),
            },
        })
        .collect();
    ZoneProgress { labels }
}
