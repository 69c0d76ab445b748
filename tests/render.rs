//! Rasterization smoke tests. Opt-in: they need a usable system font for the
//! ab_glyph text path. Run with: cargo test --features render-tests

#![cfg(feature = "render-tests")]

use hrviz::models::Zone;
use hrviz::theme::ChartTheme;
use hrviz::{chart, render};
use std::fs;
use std::path::PathBuf;

fn write_and_check<F: Fn(&PathBuf)>(maker: F, name: &str) {
    let tmp = std::env::temp_dir();
    let path: PathBuf = tmp.join(format!("hrviz_render_{}.svg", name));
    maker(&path);
    let meta = fs::metadata(&path).expect("file created");
    assert!(meta.len() > 0, "svg has content");
    fs::remove_file(&path).ok();
}

#[test]
fn renders_zone_pie_svg() {
    let theme = ChartTheme::default();
    let labels = vec!["Zone 1".to_string(), "Zone 2".to_string()];
    let colors = vec!["#3A86FF".to_string(), "#4CB944".to_string()];
    let config = chart::zone_pie_chart(&labels, &[40.0, 60.0], &colors, &theme).unwrap();

    write_and_check(
        |path| render::render_config(&config, path, 800, 500).unwrap(),
        "pie",
    );
}

#[test]
fn renders_heart_rate_svg() {
    let theme = ChartTheme::default();
    let time: Vec<f64> = (0..120).map(|i| i as f64 * 5.0).collect();
    let hr: Vec<f64> = (0..120).map(|i| 100.0 + 40.0 * ((i as f64) / 20.0).sin()).collect();
    let zones = vec![
        Zone::new("Zone 1 - Very Light", 120, 140, "#3A86FF"),
        Zone::new("Zone 2 - Light", 140, 160, "#4CB944"),
    ];
    let config = chart::heart_rate_chart(&time, &hr, &zones, &theme).unwrap();

    write_and_check(
        |path| render::render_config(&config, path, 1000, 600).unwrap(),
        "series",
    );
}

#[test]
fn empty_config_is_rejected() {
    let theme = ChartTheme::default();
    let config = chart::heart_rate_chart(&[], &[], &[], &theme).unwrap();
    let err = render::render_config(&config, "/tmp/hrviz_render_empty.svg", 640, 480);
    assert!(err.is_err());
}
