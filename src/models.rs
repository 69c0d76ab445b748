use serde::{Deserialize, Serialize};

/// A named heart-rate intensity band with its bpm thresholds and display color.
///
/// Zones are display-only inputs: how they were derived (max-HR percentage,
/// Karvonen, manual entry) is the caller's business.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Zone {
    pub name: String,
    /// Lower bpm threshold (inclusive).
    pub min: u32,
    /// Upper bpm threshold; threshold overlays are drawn at this value.
    pub max: u32,
    /// Hex color like `#4CB944`.
    pub color: String,
}

impl Zone {
    pub fn new(name: impl Into<String>, min: u32, max: u32, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            min,
            max,
            color: color.into(),
        }
    }

    /// Human-readable label with the bpm range, e.g. `"Zone 2 - Light (140-160 bpm)"`.
    pub fn display_label(&self) -> String {
        format!("{} ({}-{} bpm)", self.name, self.min, self.max)
    }
}

/// Share of activity time spent inside one zone, as a percentage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ZoneShare {
    pub zone: String,
    pub percent: f64,
    pub color: String,
}

impl ZoneShare {
    pub fn new(zone: impl Into<String>, percent: f64, color: impl Into<String>) -> Self {
        Self {
            zone: zone.into(),
            percent,
            color: color.into(),
        }
    }
}

/// One time-series observation: elapsed seconds since activity start and the
/// heart rate measured there. Consumed once per chart build, never retained.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct HrSample {
    pub seconds: f64,
    pub bpm: f64,
}

impl HrSample {
    pub fn new(seconds: f64, bpm: f64) -> Self {
        Self { seconds, bpm }
    }
}

/// Split samples into the parallel `(seconds, bpm)` vectors the chart
/// factories consume.
pub fn split_samples(samples: &[HrSample]) -> (Vec<f64>, Vec<f64>) {
    samples.iter().map(|s| (s.seconds, s.bpm)).unzip()
}

/// Standard display colors for the five training zones, easy to maximum.
pub const ZONE_PALETTE: [&str; 5] = [
    "#3A86FF", // blue   - very light
    "#4CB944", // green  - light
    "#FFD60A", // yellow - moderate
    "#FF9E0A", // orange - hard
    "#FF0000", // red    - maximum
];

/// Color used for time spent below the first zone.
pub const BELOW_ZONE_COLOR: &str = "#AAAAAA";

/// Build the five standard display zones from a list of ascending bpm cut
/// points (six values: zone 1 lower bound through zone 5 upper bound).
pub fn standard_zones(cut_points: [u32; 6]) -> Vec<Zone> {
    const NAMES: [&str; 5] = [
        "Zone 1 - Very Light",
        "Zone 2 - Light",
        "Zone 3 - Moderate",
        "Zone 4 - Hard",
        "Zone 5 - Maximum",
    ];
    NAMES
        .iter()
        .zip(cut_points.windows(2))
        .zip(ZONE_PALETTE)
        .map(|((name, bounds), color)| Zone::new(*name, bounds[0], bounds[1], color))
        .collect()
}
