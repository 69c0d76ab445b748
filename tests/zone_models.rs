use hrviz::dashboard::zone_progress;
use hrviz::models::{
    BELOW_ZONE_COLOR, HrSample, ZONE_PALETTE, ZoneShare, split_samples, standard_zones,
};

#[test]
fn standard_zones_cover_adjacent_bands() {
    let zones = standard_zones([120, 140, 160, 180, 200, 220]);

    assert_eq!(zones.len(), 5);
    assert_eq!(zones[0].display_label(), "Zone 1 - Very Light (120-140 bpm)");
    assert_eq!(zones[4].max, 220);
    for (zone, color) in zones.iter().zip(ZONE_PALETTE) {
        assert_eq!(zone.color, color);
    }
    // Each band starts where the previous one ends.
    for pair in zones.windows(2) {
        assert_eq!(pair[0].max, pair[1].min);
    }
}

#[test]
fn split_samples_preserves_order() {
    let samples = vec![HrSample::new(0.0, 90.0), HrSample::new(5.0, 110.0)];
    let (time, hr) = split_samples(&samples);
    assert_eq!(time, vec![0.0, 5.0]);
    assert_eq!(hr, vec![90.0, 110.0]);
}

#[test]
fn below_zone_time_keeps_its_gray_label() {
    let strip = zone_progress(&[ZoneShare::new("Below Zone 1", 12.0, BELOW_ZONE_COLOR)]);
    assert_eq!(strip.labels.len(), 1);
    assert_eq!(strip.labels[0].color, BELOW_ZONE_COLOR);
    assert_eq!(strip.labels[0].text, "12%");
}
