use hrviz::chart;
use hrviz::models::{Zone, ZoneShare};
use hrviz::storage;
use hrviz::theme::ChartTheme;
use tempfile::tempdir;

#[test]
fn samples_csv_parses_header_and_rows() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ride.csv");
    std::fs::write(&path, "seconds,bpm\n0,90\n1,95.5\n2,101\n").unwrap();

    let samples = storage::load_samples_csv(&path).unwrap();
    assert_eq!(samples.len(), 3);
    assert_eq!(samples[1].seconds, 1.0);
    assert_eq!(samples[1].bpm, 95.5);
}

#[test]
fn shares_and_zones_load_from_json_arrays() {
    let dir = tempdir().unwrap();

    let shares_path = dir.path().join("shares.json");
    let shares = vec![
        ZoneShare::new("Zone 1", 40.0, "#3A86FF"),
        ZoneShare::new("Zone 2", 60.0, "#4CB944"),
    ];
    std::fs::write(&shares_path, serde_json::to_string(&shares).unwrap()).unwrap();
    assert_eq!(storage::load_shares_json(&shares_path).unwrap(), shares);

    let zones_path = dir.path().join("zones.json");
    let zones = vec![Zone::new("Zone 1 - Very Light", 120, 140, "#3A86FF")];
    std::fs::write(&zones_path, serde_json::to_string(&zones).unwrap()).unwrap();
    assert_eq!(storage::load_zones_json(&zones_path).unwrap(), zones);
}

#[test]
fn config_json_round_trips() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");

    let theme = ChartTheme::default();
    let labels = vec!["Zone 1".to_string(), "Zone 2".to_string()];
    let colors = vec!["#3A86FF".to_string(), "#4CB944".to_string()];
    let config = chart::zone_pie_chart(&labels, &[40.0, 60.0], &colors, &theme).unwrap();

    storage::save_config_json(&config, &path).unwrap();
    let raw = std::fs::read_to_string(&path).unwrap();
    let back: hrviz::ChartConfig = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, config);
}

#[test]
fn missing_files_surface_their_path() {
    let err = storage::load_shares_json("does/not/exist.json").unwrap_err();
    assert!(format!("{err:#}").contains("does/not/exist.json"));
}
