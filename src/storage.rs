use crate::chart::ChartConfig;
use crate::models::{HrSample, Zone, ZoneShare};
use anyhow::{Context, Result};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Save heart-rate samples as CSV with a `seconds,bpm` header.
pub fn save_samples_csv<P: AsRef<Path>>(samples: &[HrSample], path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.serialize(("seconds", "bpm"))?;
    for s in samples {
        wtr.serialize((s.seconds, s.bpm))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Load heart-rate samples from a `seconds,bpm` CSV file.
pub fn load_samples_csv<P: AsRef<Path>>(path: P) -> Result<Vec<HrSample>> {
    let path = path.as_ref();
    let mut rdr = ReaderBuilder::new()
        .from_path(path)
        .with_context(|| format!("open {}", path.display()))?;
    let mut out = Vec::new();
    for row in rdr.deserialize() {
        let sample: HrSample = row.with_context(|| format!("parse {}", path.display()))?;
        out.push(sample);
    }
    Ok(out)
}

/// Load zone definitions from a JSON array.
pub fn load_zones_json<P: AsRef<Path>>(path: P) -> Result<Vec<Zone>> {
    let path = path.as_ref();
    let f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    serde_json::from_reader(f).with_context(|| format!("parse {}", path.display()))
}

/// Load per-zone time shares from a JSON array.
pub fn load_shares_json<P: AsRef<Path>>(path: P) -> Result<Vec<ZoneShare>> {
    let path = path.as_ref();
    let f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    serde_json::from_reader(f).with_context(|| format!("parse {}", path.display()))
}

/// Save a chart configuration as pretty JSON, the hand-off artifact for any
/// host renderer.
pub fn save_config_json<P: AsRef<Path>>(config: &ChartConfig, path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(config)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}
