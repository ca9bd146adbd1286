//! Human relative time ("3 hours ago")

use chrono::{DateTime, Utc};

/// Describe how long before `now` the instant `then` was
///
/// Future instants read as "a few seconds ago".
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds().max(0);
    let minutes = (seconds + 30) / 60;
    let hours = (minutes + 30) / 60;
    let days = (hours + 12) / 24;
    let months = ((days * 10 + 152) / 304).max(2);
    let years = ((days + 182) / 365).max(2);

    if seconds < 45 {
        "a few seconds ago".to_string()
    } else if seconds < 90 {
        "a minute ago".to_string()
    } else if minutes < 45 {
        format!("{minutes} minutes ago")
    } else if minutes < 90 {
        "an hour ago".to_string()
    } else if hours < 22 {
        format!("{hours} hours ago")
    } else if hours < 36 {
        "a day ago".to_string()
    } else if days < 26 {
        format!("{days} days ago")
    } else if days < 45 {
        "a month ago".to_string()
    } else if days < 320 {
        format!("{months} months ago")
    } else if days < 548 {
        "a year ago".to_string()
    } else {
        format!("{years} years ago")
    }
}
