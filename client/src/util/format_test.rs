use chrono::{Local, Utc};

use super::*;

fn at(timestamp: &str) -> DateTime<FixedOffset> {
    parse_timestamp(timestamp).expect("rfc 3339")
}

#[test]
fn utc_timestamp_keeps_its_wall_clock_in_utc() {
    assert_eq!(
        parts_in(&at("2025-03-01T09:30:45.123Z"), &Utc),
        ("2025-03-01".to_owned(), "09:30".to_owned())
    );
}

#[test]
fn offset_timestamp_converts_to_the_viewer_zone() {
    let instant = at("2025-03-01T23:30:00-05:00");
    assert_eq!(parts_in(&instant, &Utc), ("2025-03-02".to_owned(), "04:30".to_owned()));

    let tokyo = FixedOffset::east_opt(9 * 3600).expect("offset");
    assert_eq!(parts_in(&instant, &tokyo), ("2025-03-02".to_owned(), "13:30".to_owned()));
}

#[cfg(not(feature = "csr"))]
#[test]
fn created_parts_renders_in_local_time() {
    let timestamp = "2025-03-01T23:30:00+02:00";
    assert_eq!(created_parts(timestamp), parts_in(&at(timestamp), &Local));
}

#[test]
fn created_parts_keeps_unrecognized_input_as_date() {
    assert_eq!(created_parts("yesterday"), ("yesterday".to_owned(), String::new()));
    assert_eq!(created_parts("2025-03-01T9"), ("2025-03-01T9".to_owned(), String::new()));
    assert_eq!(created_parts(""), (String::new(), String::new()));
}

#[cfg(not(feature = "csr"))]
#[test]
fn created_label_omits_missing_timestamp() {
    let (date, _) = parts_in(&at("2025-03-01T12:00:00Z"), &Local);
    assert_eq!(created_label("2025-03-01T12:00:00Z"), format!("Created {date}"));
    assert_eq!(created_label(""), "");
}

#[test]
fn tasks_heading_includes_count() {
    assert_eq!(tasks_heading(0), "Your Tasks (0)");
    assert_eq!(tasks_heading(12), "Your Tasks (12)");
}
