//! Formatting helpers for presenting telemetry values.

/// Lap and sector times are reported as this value when no time has been set yet.
pub const NO_TIME_MS: i32 = i32::MAX;

/// Formats an RGB colour as a `#rrggbb` hex string.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Arithmetic mean, `None` for an empty slice.
pub fn average<T: Copy + Into<f64>>(values: &[T]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: f64 = values.iter().map(|&v| v.into()).sum();
    Some(sum / values.len() as f64)
}

/// Formats a time in milliseconds as `MM:SS.mmm`.
///
/// [`NO_TIME_MS`] and negative times render as `00:00.000`.
pub fn string_time_from_ms(time_ms: i32) -> String {
    let time_ms = if time_ms == NO_TIME_MS || time_ms < 0 {
        0
    } else {
        time_ms
    };

    let minutes = time_ms / 60_000;
    let seconds = (time_ms % 60_000) / 1000;
    let millis = time_ms % 1000;

    format!("{:02}:{:02}.{:03}", minutes, seconds, millis)
}
