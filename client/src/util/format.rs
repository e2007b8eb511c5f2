//! Display formatting for task metadata.
//!
//! Timestamps are shown in the viewer's local time. In the browser the date
//! and time come from `Date.toLocaleDateString` / `toLocaleTimeString`;
//! native builds render the same instant through `chrono::Local`. Anything
//! that is not RFC 3339 is shown as sent, with no time.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, FixedOffset};

fn parse_timestamp(timestamp: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(timestamp.trim()).ok()
}

/// `YYYY-MM-DD` and `HH:MM` of `at` as seen in `tz`.
#[cfg(any(test, not(feature = "csr")))]
fn parts_in<Tz: chrono::TimeZone>(at: &DateTime<FixedOffset>, tz: &Tz) -> (String, String)
where
    Tz::Offset: std::fmt::Display,
{
    let local = at.with_timezone(tz);
    (local.format("%Y-%m-%d").to_string(), local.format("%H:%M").to_string())
}

#[cfg(feature = "csr")]
fn browser_parts(at: &DateTime<FixedOffset>) -> (String, String) {
    use wasm_bindgen::JsValue;

    #[allow(clippy::cast_precision_loss)]
    let date = js_sys::Date::new(&JsValue::from_f64(at.timestamp_millis() as f64));
    let locale = web_sys::window()
        .and_then(|w| w.navigator().language())
        .unwrap_or_else(|| "en-US".to_owned());

    let time_options = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&time_options, &"hour".into(), &"2-digit".into());
    let _ = js_sys::Reflect::set(&time_options, &"minute".into(), &"2-digit".into());

    (
        String::from(date.to_locale_date_string(&locale, &JsValue::UNDEFINED)),
        String::from(date.to_locale_time_string_with_options(&locale, &time_options)),
    )
}

/// Local date and time of a server timestamp.
pub fn created_parts(timestamp: &str) -> (String, String) {
    let Some(at) = parse_timestamp(timestamp) else {
        return (timestamp.trim().to_owned(), String::new());
    };
    #[cfg(feature = "csr")]
    {
        browser_parts(&at)
    }
    #[cfg(not(feature = "csr"))]
    {
        parts_in(&at, &chrono::Local)
    }
}

/// "Created <date>", or nothing when the server sent no timestamp.
pub fn created_label(timestamp: &str) -> String {
    let (date, _) = created_parts(timestamp);
    if date.is_empty() {
        String::new()
    } else {
        format!("Created {date}")
    }
}

/// Heading for the task list section.
pub fn tasks_heading(count: usize) -> String {
    format!("Your Tasks ({count})")
}
