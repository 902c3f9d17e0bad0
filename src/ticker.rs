use std::time::Duration;

/// Tick interval in milliseconds; the countdown only changes once a second
pub const DEFAULT_TICK_MS: u64 = 1000;

/// Get tick duration
pub fn tick_duration() -> Duration {
    Duration::from_millis(DEFAULT_TICK_MS)
}
