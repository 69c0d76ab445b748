//! Render a [`ChartConfig`] to **SVG** or **PNG** with the `plotters` crate.
//!
//! The config model stays renderer-agnostic; this adapter maps it onto
//! plotters series and elements. Backend choice follows the output file
//! extension: `.svg` uses the SVG backend, anything else the bitmap backend.

use crate::chart::util::{Rgba, expand_bounds, parse_color};
use crate::chart::{ChartConfig, ChartKind, Dataset, LegendPosition, Paint, SUGGESTED_BPM_RANGE};
use anyhow::{Result, anyhow, bail};
use plotters::coord::Shift;
use plotters::element::Pie;
use plotters::prelude::*;
use plotters::series::{AreaSeries, DashedLineSeries, LineSeries};
use plotters::style::{FontFamily, FontStyle};
use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;
use std::path::{Path, PathBuf};
use std::sync::Once;

/// One-time registration of a fallback "sans-serif" font for the `ab_glyph`
/// text path, which doesn't discover OS fonts on its own. The font file is
/// found at runtime: `HRVIZ_FONT` first, then well-known system locations.
static INIT_FONTS: Once = Once::new();

const FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

fn ensure_fonts_registered() {
    // Safe to call many times; only runs once.
    INIT_FONTS.call_once(|| {
        let mut candidates: Vec<PathBuf> = Vec::new();
        if let Ok(p) = std::env::var("HRVIZ_FONT") {
            candidates.push(PathBuf::from(p));
        }
        candidates.extend(FONT_PATHS.iter().map(PathBuf::from));

        for path in candidates {
            if let Ok(bytes) = std::fs::read(&path) {
                // register_font wants 'static bytes; the font lives for the
                // rest of the process anyway.
                let data: &'static [u8] = Box::leak(bytes.into_boxed_slice());
                if plotters::style::register_font("sans-serif", FontStyle::Normal, data).is_ok() {
                    log::debug!("registered chart font from {}", path.display());
                    return;
                }
            }
        }
        log::warn!(
            "no usable chart font found; set HRVIZ_FONT to a .ttf file before rendering"
        );
    });
}

/// Render `config` into the file at `out_path`.
pub fn render_config<P: AsRef<Path>>(
    config: &ChartConfig,
    out_path: P,
    width: u32,
    height: u32,
) -> Result<()> {
    if config.datasets.is_empty() {
        bail!("no datasets to render");
    }
    ensure_fonts_registered();

    let out_path = out_path.as_ref();
    let path_string = out_path.to_string_lossy().into_owned();

    if out_path.extension().and_then(|s| s.to_str()) == Some("svg") {
        let root = SVGBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw(root, config)?;
    } else {
        let root = BitMapBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw(root, config)?;
    }
    Ok(())
}

fn draw<DB>(root: DrawingArea<DB, Shift>, config: &ChartConfig) -> Result<()>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;
    match config.kind {
        ChartKind::Pie => draw_pie(&root, config),
        ChartKind::Line => draw_line(&root, config),
    }?;
    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}

fn to_rgba(c: Rgba) -> RGBAColor {
    RGBAColor(c.r, c.g, c.b, c.a)
}

fn to_rgb(c: Rgba) -> RGBColor {
    RGBColor(c.r, c.g, c.b)
}

fn draw_pie<DB>(root: &DrawingArea<DB, Shift>, config: &ChartConfig) -> Result<()>
where
    DB: DrawingBackend,
{
    let dataset = &config.datasets[0];
    let sizes: Vec<f64> = dataset.data.iter().map(|v| v.max(0.0)).collect();
    if sizes.iter().sum::<f64>() <= 0.0 {
        bail!("no data to plot");
    }

    // One color per slice; cycle if the config supplies fewer.
    let palette: Vec<Rgba> = match &dataset.background_color {
        Some(Paint::PerPoint(colors)) => {
            colors.iter().map(|c| parse_color(c)).collect::<Result<_>>()?
        }
        Some(Paint::Solid(color)) => vec![parse_color(color)?],
        None => vec![Rgba::opaque(128, 128, 128)],
    };
    let colors: Vec<RGBColor> = (0..sizes.len())
        .map(|i| to_rgb(palette[i % palette.len()]))
        .collect();

    // Reserve a panel for the legend when it sits at the right.
    let (plot, legend_area) = match config.options.legend.position {
        LegendPosition::Right => {
            let (p, l) = root.split_horizontally((75).percent_width());
            (p, Some(l))
        }
        _ => (root.clone(), None),
    };

    let (pw, ph) = plot.dim_in_pixel();
    let center = ((pw / 2) as i32, (ph / 2) as i32);
    let radius = 0.35 * f64::from(pw.min(ph));

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &config.labels);
    pie.label_style((FontFamily::SansSerif, 14).into_font().color(&BLACK));
    plot.draw(&pie).map_err(|e| anyhow!("{:?}", e))?;

    if let Some(area) = legend_area {
        let entries: Vec<(String, RGBColor)> = config
            .labels
            .iter()
            .cloned()
            .zip(colors.iter().copied())
            .collect();
        draw_swatch_legend(&area, &entries, config.options.legend.box_width as i32)?;
    }
    Ok(())
}

/// Simple vertical legend: colored swatch + label per entry.
fn draw_swatch_legend<DB>(
    area: &DrawingArea<DB, Shift>,
    entries: &[(String, RGBColor)],
    box_width: i32,
) -> Result<()>
where
    DB: DrawingBackend,
{
    let x0 = 8;
    let mut y = 24;
    for (label, color) in entries {
        area.draw(&Rectangle::new(
            [(x0, y), (x0 + box_width, y + box_width)],
            color.filled(),
        ))
        .map_err(|e| anyhow!("{:?}", e))?;
        area.draw(&Text::new(
            label.clone(),
            (x0 + box_width + 6, y + 2),
            (FontFamily::SansSerif, 14),
        ))
        .map_err(|e| anyhow!("{:?}", e))?;
        y += box_width + 8;
    }
    Ok(())
}

fn draw_line<DB>(root: &DrawingArea<DB, Shift>, config: &ChartConfig) -> Result<()>
where
    DB: DrawingBackend,
{
    let n = config.labels.len();
    if n == 0 {
        bail!("no data to plot");
    }
    let x_max = (n.saturating_sub(1)).max(1) as f64;

    let scales = config.options.scales.clone().unwrap_or_default();
    let suggested = (
        scales.y.suggested_min.unwrap_or(SUGGESTED_BPM_RANGE.0),
        scales.y.suggested_max.unwrap_or(SUGGESTED_BPM_RANGE.1),
    );
    let (y_lo, y_hi) = expand_bounds(
        config.datasets.iter().flat_map(|d| d.data.iter().copied()),
        suggested,
    );

    let x_label_fmt = |x: &f64| {
        let i = x.round() as usize;
        config.labels.get(i).cloned().unwrap_or_default()
    };
    let y_label_fmt = |v: &f64| format!("{}", v.round());
    let x_label_count = scales.x.max_ticks.unwrap_or(10).min(n);

    let mut chart = ChartBuilder::on(root)
        .margin(16)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 44)
        .build_cartesian_2d(0f64..x_max, y_lo..y_hi)
        .map_err(|e| anyhow!("{:?}", e))?;

    chart
        .configure_mesh()
        .x_desc(scales.x.title.clone().unwrap_or_default())
        .y_desc(scales.y.title.clone().unwrap_or_default())
        .x_labels(x_label_count)
        .y_labels(10)
        .x_label_formatter(&x_label_fmt)
        .y_label_formatter(&y_label_fmt)
        .label_style((FontFamily::SansSerif, 12))
        .axis_desc_style((FontFamily::SansSerif, 16))
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    let mut any_legend = false;
    for dataset in &config.datasets {
        let color = dataset_stroke(dataset)?;
        let points: Vec<(f64, f64)> = dataset
            .data
            .iter()
            .enumerate()
            .map(|(i, v)| (i as f64, *v))
            .collect();
        let stroke = ShapeStyle {
            color,
            filled: false,
            stroke_width: dataset.border_width.max(1),
        };
        let admitted = config.options.legend.filter.admits(&dataset.label);

        if dataset.fill {
            let fill = match &dataset.background_color {
                Some(Paint::Solid(c)) => to_rgba(parse_color(c)?),
                _ => color.mix(0.2),
            };
            let elem = chart
                .draw_series(
                    AreaSeries::new(points.clone(), y_lo, fill.filled()).border_style(stroke),
                )
                .map_err(|e| anyhow!("{:?}", e))?;
            if admitted {
                attach_legend(elem, &dataset.label, color);
                any_legend = true;
            }
        } else if dataset.is_dashed() {
            let size = dataset.border_dash[0] as i32;
            let spacing = dataset.border_dash.get(1).copied().unwrap_or(dataset.border_dash[0]) as i32;
            let elem = chart
                .draw_series(DashedLineSeries::new(points.clone(), size, spacing, stroke))
                .map_err(|e| anyhow!("{:?}", e))?;
            if admitted {
                attach_legend(elem, &dataset.label, color);
                any_legend = true;
            }
        } else {
            let elem = chart
                .draw_series(LineSeries::new(points, stroke))
                .map_err(|e| anyhow!("{:?}", e))?;
            if admitted {
                attach_legend(elem, &dataset.label, color);
                any_legend = true;
            }
        }
    }

    if any_legend {
        let position = match config.options.legend.position {
            LegendPosition::Top => SeriesLabelPosition::UpperMiddle,
            LegendPosition::Right => SeriesLabelPosition::UpperRight,
            LegendPosition::Bottom => SeriesLabelPosition::LowerMiddle,
            LegendPosition::Left => SeriesLabelPosition::UpperLeft,
        };
        chart
            .configure_series_labels()
            .border_style(BLACK)
            .position(position)
            .background_style(WHITE.mix(0.85))
            .label_font((FontFamily::SansSerif, 14))
            .draw()
            .map_err(|e| anyhow!("{:?}", e))?;
    }
    Ok(())
}

fn dataset_stroke(dataset: &Dataset) -> Result<RGBAColor> {
    Ok(match &dataset.border_color {
        Some(c) => to_rgba(parse_color(c)?),
        None => RGBAColor(0, 0, 0, 1.0),
    })
}

fn attach_legend<DB: DrawingBackend>(
    elem: &mut plotters::chart::SeriesAnno<'_, DB>,
    label: &str,
    color: RGBAColor,
) {
    elem.label(label)
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 24, y)], color));
}
