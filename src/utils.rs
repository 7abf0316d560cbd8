/// Utility helpers for Chapterdeck

/// Format a playback position as `M:SS`.
/// Non-finite input renders as `0:00`; minutes are never padded or wrapped into hours.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() {
        return "0:00".to_string();
    }
    let total = seconds.max(0.0).floor() as u64;
    let mins = total / 60;
    let secs = total % 60;
    format!("{}:{:02}", mins, secs)
}

/// A media duration is usable once metadata has loaded and it is a real, non-zero length.
pub fn known_duration(duration: f64) -> Option<f64> {
    if duration.is_finite() && duration > 0.0 {
        Some(duration)
    } else {
        None
    }
}

/// Parse the leading integer of a string, skipping leading whitespace.
/// `" 12abc"` yields 12, `"x1"` yields `None`.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .char_indices()
        .find(|(_, ch)| !ch.is_ascii_digit())
        .map(|(idx, _)| idx)
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}
