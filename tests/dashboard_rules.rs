use hrviz::dashboard::{
    LoadingCue, TooltipPlacement, activity_list_max_height, zone_progress,
};
use hrviz::models::ZoneShare;

#[test]
fn activity_list_height_follows_viewport_width() {
    assert_eq!(activity_list_max_height(320), 400);
    assert_eq!(activity_list_max_height(767), 400);
    // The boundary itself counts as wide.
    assert_eq!(activity_list_max_height(768), 500);
    assert_eq!(activity_list_max_height(1920), 500);
}

#[test]
fn loading_cue_dims_without_restore() {
    let cue = LoadingCue::default();
    assert_eq!(cue.opacity, 0.7);
    assert_eq!(cue.transition, "opacity 0.3s");
}

#[test]
fn zone_strip_skips_empty_zones() {
    let shares = vec![
        ZoneShare::new("Zone 1", 40.0, "#3A86FF"),
        ZoneShare::new("Zone 2", 0.0, "#4CB944"),
        ZoneShare::new("Zone 3", 60.0, "#FFD60A"),
    ];
    let strip = zone_progress(&shares);

    assert_eq!(strip.labels.len(), 2);
    assert_eq!(strip.labels[0].text, "40%");
    assert_eq!(strip.labels[0].color, "#3A86FF");
    assert!(strip.labels[0].bold);
    assert_eq!(strip.labels[1].text, "60%");
    assert_eq!(strip.labels[1].color, "#FFD60A");
}

#[test]
fn zone_strip_tooltips_carry_the_exact_percentage() {
    let shares = vec![ZoneShare::new("Zone 3", 35.5, "#FFD60A")];
    let strip = zone_progress(&shares);

    assert_eq!(strip.labels.len(), 1);
    // Label shows the rounded value, the tooltip the exact one.
    assert_eq!(strip.labels[0].text, "36%");
    assert_eq!(strip.labels[0].tooltip.title, "Zone 3: 35.5%");
    assert_eq!(strip.labels[0].tooltip.placement, TooltipPlacement::Top);
}

#[test]
fn zone_strip_from_nothing_is_empty() {
    assert!(zone_progress(&[]).labels.is_empty());
}
