use chrono::{DateTime, Utc};

/// Placeholder shown when `published_at` cannot be parsed.
pub const UNKNOWN_TIME: &str = "some time ago";

/// Human-relative label for a raw RFC 3339 timestamp, measured against the
/// current clock. Malformed input degrades to [`UNKNOWN_TIME`] rather than
/// surfacing an error into the view.
pub fn relative_from_now(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => relative(parsed.with_timezone(&Utc), Utc::now()),
        Err(err) => {
            log::warn!("Unparseable timestamp {:?}: {}", raw, err);
            UNKNOWN_TIME.to_owned()
        }
    }
}

/// Human-relative label for `then` as seen from `now`: "just now" under a
/// minute, then minutes, hours, days, months, years. Future timestamps read
/// as "in ...".
pub fn relative(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds();

    if seconds.abs() < 60 {
        return "just now".to_owned();
    }

    if seconds > 0 {
        format!("{} ago", span(seconds))
    } else {
        format!("in {}", span(-seconds))
    }
}

fn span(seconds: i64) -> String {
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;
    let months = days / 30;
    let years = days / 365;

    if years > 0 {
        counted(years, "year")
    } else if months > 0 {
        counted(months, "month")
    } else if days > 0 {
        counted(days, "day")
    } else if hours > 0 {
        counted(hours, "hour")
    } else {
        counted(minutes, "minute")
    }
}

fn counted(amount: i64, unit: &str) -> String {
    if amount == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", amount, unit)
    }
}
