use chrono::{Duration, Local, NaiveDateTime};

/// Time left until the next local midnight
pub fn until_midnight(now: NaiveDateTime) -> Duration {
    let next_midnight = now
        .date()
        .succ_opt()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or(now);
    next_midnight - now
}

/// Format a countdown as "Xh Ym Zs" with whole floor-divided components
/// (e.g., "5h 3m 9s", never "05h 03m 09s")
pub fn format_remaining(remaining: Duration) -> String {
    let total_seconds = remaining.num_seconds().max(0);
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{}h {}m {}s", hours, minutes, seconds)
}

/// Countdown string for the current instant
pub fn remaining_now() -> String {
    format_remaining(until_midnight(Local::now().naive_local()))
}
