use regex::Regex;
use std::sync::LazyLock;

static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*(min|hour|hr)").expect("time pattern is valid"));

static MIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)mins?").expect("min pattern is valid"));

static HOUR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)hours?").expect("hour pattern is valid"));

/// Parse a free-form time string ("15 mins", "1 hour", "45 min") into
/// minutes. Unparsable strings yield 0, a deliberate permissive default:
/// a recipe whose prep time cannot be read passes any max-time filter
/// rather than silently disappearing.
pub fn parse_time_to_minutes(time: &str) -> u32 {
    let Some(caps) = TIME_RE.captures(time) else {
        return 0;
    };

    let value: u32 = caps[1].parse().unwrap_or(0);
    let unit = caps[2].to_lowercase();

    if unit.starts_with("hour") || unit.starts_with("hr") {
        value * 60
    } else {
        value
    }
}

/// Normalize a time string for display: "mins" -> "min", "hours" -> "hr".
pub fn format_time(time: &str) -> String {
    let out = MIN_RE.replace(time, "min");
    HOUR_RE.replace(&out, "hr").into_owned()
}
