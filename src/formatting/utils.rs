use chrono::{DateTime, NaiveDateTime, Utc};

pub fn extract_first_name(name: &str) -> &str {
    name.split_whitespace().next().unwrap_or(name)
}

/// Timestamps come as RFC 3339 or as naive SQL datetimes, which are taken as UTC.
pub fn parse_timestamp(timestamp: &str) -> Option<DateTime<Utc>> {
    let trimmed = timestamp.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// "3d ago" style age. Unparseable input is shown as given.
pub fn format_relative_time(timestamp: &str) -> String {
    let Some(parsed) = parse_timestamp(timestamp) else {
        return timestamp.to_string();
    };
    let age = Utc::now().signed_duration_since(parsed);

    match age.num_days() {
        d if d > 365 => format!("{}y ago", d / 365),
        d if d > 30 => format!("{}mo ago", d / 30),
        d if d > 0 => format!("{}d ago", d),
        _ if age.num_hours() > 0 => format!("{}h ago", age.num_hours()),
        _ if age.num_minutes() > 0 => format!("{}m ago", age.num_minutes()),
        _ => "just now".to_string(),
    }
}

/// Shorten to at most `max_len` characters, ending in "..." when cut.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let kept: String = s.chars().take(max_len - 3).collect();
    format!("{}...", kept)
}
