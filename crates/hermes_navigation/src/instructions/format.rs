/// `"<n> m"` below one kilometer, `"<n.n> km"` from there on.
pub fn format_distance(meters: f64) -> String {
    let meters = if meters.is_finite() { meters.max(0.0) } else { 0.0 };

    if meters < 1000.0 {
        format!("{} m", meters.round() as u64)
    } else {
        format!("{:.1} km", meters / 1000.0)
    }
}

/// Route totals are always shown in kilometers.
pub fn format_total_distance(meters: f64) -> String {
    let meters = if meters.is_finite() { meters.max(0.0) } else { 0.0 };
    format!("{:.1} km", meters / 1000.0)
}

/// Whole minutes, rounded up so travel time is never understated.
pub fn duration_minutes(seconds: f64) -> u32 {
    if !seconds.is_finite() || seconds <= 0.0 {
        return 0;
    }

    (seconds / 60.0).ceil() as u32
}
