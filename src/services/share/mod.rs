//! Shareable event links.
//!
//! An event travels between screens as a URL query string rather than
//! through any backend; the link is the only serialized form of an
//! event. Missing fields decode to the create-form defaults.

use anyhow::{anyhow, Context, Result};

use crate::models::event_details::EventDetails;
use crate::models::time_window::TimeWindow;

/// Build the shareable URL for an event.
pub fn event_url(base: &str, details: &EventDetails) -> String {
    let mut url = format!(
        "{}/event/{}?title={}&startDay={}&endDay={}&startHour={}&endHour={}",
        base.trim_end_matches('/'),
        urlencoding::encode(&details.id),
        urlencoding::encode(&details.title),
        details.window.day_offset_start,
        details.window.day_offset_end,
        details.window.hour_start,
        details.window.hour_end,
    );

    if let Some(description) = &details.description {
        url.push_str("&description=");
        url.push_str(&urlencoding::encode(description));
    }
    if let Some(banner) = &details.banner {
        url.push_str("&banner=");
        url.push_str(&urlencoding::encode(banner));
    }

    url
}

/// Decode an event from its link's query string (the part after `?`).
///
/// Missing fields fall back to the defaults ("Untitled Event", days 0..7,
/// hours 8..22); malformed numbers and invalid windows are errors.
pub fn parse_event_query(id: &str, query: &str) -> Result<EventDetails> {
    let mut title = None;
    let mut description = None;
    let mut banner = None;
    let mut window = TimeWindow::default();

    for pair in query.trim_start_matches('?').split('&') {
        if pair.is_empty() {
            continue;
        }
        let (key, raw) = pair.split_once('=').unwrap_or((pair, ""));
        let value = urlencoding::decode(raw)
            .with_context(|| format!("Invalid percent-encoding in '{key}'"))?
            .into_owned();

        match key {
            "title" => title = Some(value),
            "description" => description = Some(value),
            "banner" => banner = Some(value),
            "startDay" => window.day_offset_start = parse_number(key, &value)?,
            "endDay" => window.day_offset_end = parse_number(key, &value)?,
            "startHour" => window.hour_start = parse_number(key, &value)?,
            "endHour" => window.hour_end = parse_number(key, &value)?,
            _ => {} // unknown params are ignored
        }
    }

    window.validate().map_err(|e| anyhow!(e))?;

    let mut details = EventDetails::new(
        id,
        title.unwrap_or_else(|| "Untitled Event".to_string()),
        window,
    )
    .map_err(|e| anyhow!(e))?;
    details.description = description.filter(|d| !d.trim().is_empty());
    details.banner = banner.filter(|b| !b.trim().is_empty());

    Ok(details)
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| anyhow!("Invalid number '{value}' for '{key}'"))
}
