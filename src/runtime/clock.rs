use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Current Unix time in whole seconds.
///
/// Flooring keeps listeners that sample within the same second on exactly the
/// same radio state. A clock set before 1970 reads as 0.
pub fn now_secs() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as f64)
        .unwrap_or(0.0)
}

/// Time left until the next multiple of `tick` since the Unix epoch, so
/// redraws land right after the displayed second changes.
pub fn until_next_tick(tick: Duration) -> Duration {
    let tick_ms = tick.as_millis().max(1);
    let now_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    let left = tick_ms - now_ms % tick_ms;
    Duration::from_millis(left as u64)
}
