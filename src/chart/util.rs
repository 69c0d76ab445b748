//! Color parsing and axis-range helpers shared by the factories and the
//! plotters adapter.

use anyhow::{Result, anyhow, bail};

/// A parsed color. Alpha is 0..1, matching CSS `rgba()` notation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Parse `#RGB`, `#RRGGBB`, or `rgba(r, g, b, a)` color strings.
pub fn parse_color(s: &str) -> Result<Rgba> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| anyhow!("invalid hex color: {s}"));
    }
    if let Some(body) = s
        .strip_prefix("rgba(")
        .or_else(|| s.strip_prefix("rgb("))
        .and_then(|rest| rest.strip_suffix(')'))
    {
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        if parts.len() != 3 && parts.len() != 4 {
            bail!("invalid rgb()/rgba() color: {s}");
        }
        let chan = |p: &str| -> Result<u8> {
            p.parse::<u8>().map_err(|_| anyhow!("invalid channel {p:?} in color {s}"))
        };
        let a = if parts.len() == 4 {
            let a: f64 = parts[3]
                .parse()
                .map_err(|_| anyhow!("invalid alpha {:?} in color {s}", parts[3]))?;
            a.clamp(0.0, 1.0)
        } else {
            1.0
        };
        return Ok(Rgba {
            r: chan(parts[0])?,
            g: chan(parts[1])?,
            b: chan(parts[2])?,
            a,
        });
    }
    bail!("unsupported color syntax: {s}")
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    match hex.len() {
        3 => {
            let mut chans = [0u8; 3];
            for (i, c) in hex.chars().enumerate() {
                let v = c.to_digit(16)? as u8;
                chans[i] = v * 16 + v;
            }
            Some(Rgba::opaque(chans[0], chans[1], chans[2]))
        }
        6 => {
            let v = u32::from_str_radix(hex, 16).ok()?;
            Some(Rgba::opaque((v >> 16) as u8, (v >> 8) as u8, v as u8))
        }
        _ => None,
    }
}

/// Expand a suggested axis range so it covers the data.
///
/// The suggested bounds hold when the data fits inside them and give way
/// where it does not; with no finite data the suggestion is returned as-is.
pub fn expand_bounds(values: impl IntoIterator<Item = f64>, suggested: (f64, f64)) -> (f64, f64) {
    let (mut lo, mut hi) = suggested;
    for v in values {
        if !v.is_finite() {
            continue;
        }
        lo = lo.min(v);
        hi = hi.max(v);
    }
    (lo, hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_and_rgba() {
        assert_eq!(parse_color("#FF6384").unwrap(), Rgba::opaque(255, 99, 132));
        assert_eq!(parse_color("#fff").unwrap(), Rgba::opaque(255, 255, 255));

        let c = parse_color("rgba(255, 99, 132, 0.2)").unwrap();
        assert_eq!((c.r, c.g, c.b), (255, 99, 132));
        assert_eq!(c.a, 0.2);

        assert_eq!(parse_color("rgb(0, 0, 0)").unwrap(), Rgba::opaque(0, 0, 0));
    }

    #[test]
    fn rejects_malformed_colors() {
        assert!(parse_color("#FF638").is_err());
        assert!(parse_color("rgba(1, 2)").is_err());
        assert!(parse_color("cornflowerblue").is_err());
    }

    #[test]
    fn hex_round_trips() {
        let c = parse_color("#3A86FF").unwrap();
        assert_eq!(c.to_hex(), "#3A86FF");
    }
}
