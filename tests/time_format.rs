use hrviz::chart::time::{format_elapsed, time_labels};

#[test]
fn under_an_hour_is_minutes_and_padded_seconds() {
    assert_eq!(format_elapsed(0.0), "0:00");
    assert_eq!(format_elapsed(5.0), "0:05");
    assert_eq!(format_elapsed(65.0), "1:05");
    assert_eq!(format_elapsed(599.0), "9:59");
    assert_eq!(format_elapsed(600.0), "10:00");
    assert_eq!(format_elapsed(3599.0), "59:59");
}

#[test]
fn from_an_hour_on_seconds_are_dropped_and_minutes_padded() {
    assert_eq!(format_elapsed(3600.0), "1h 00m");
    assert_eq!(format_elapsed(3661.0), "1h 01m");
    assert_eq!(format_elapsed(7322.0), "2h 02m");
    assert_eq!(format_elapsed(21540.0), "5h 59m");
}

#[test]
fn fractional_seconds_are_floored() {
    assert_eq!(format_elapsed(65.9), "1:05");
    assert_eq!(format_elapsed(3599.9), "59:59");
}

#[test]
fn labels_follow_sample_order() {
    let labels = time_labels(&[0.0, 65.0, 3661.0]);
    assert_eq!(labels, vec!["0:00", "1:05", "1h 01m"]);
}
