//! Rendering rules for derived metrics: stage elapsed times, byte counts,
//! and local timestamps.

use chrono::{DateTime, Local, TimeZone};

/// Elapsed-time rule for one pipeline stage, given its `(start, end)` epoch
/// seconds where 0 means unset:
///
/// - `start > 0` and `end != 0`: the stage counts against wall-clock `now`,
///   yielding `now − start`.
/// - `start > 0` and `end == 0`: yields `end − start`, i.e. `0 − start`, a
///   large negative duration. Kept for output compatibility; see
///   `negative_end_zero_branch` in the tests below before "fixing" it.
/// - `start <= 0`: the stage never started, rendered as the literal `nil`.
pub fn stage_elapsed(now: DateTime<Local>, start: i64, end: i64) -> String {
    if start > 0 && end != 0 {
        format_duration(now.timestamp() - start)
    } else if start > 0 {
        format_duration(end - start)
    } else {
        "nil".to_string()
    }
}

/// Renders a whole-second duration as `H:MM:SS`, hours unpadded, with a
/// `D day[s], ` prefix when the normalized day count is non-zero. Negative
/// durations normalize the day count downward, so `-90` renders as
/// `-1 day, 23:58:30`.
pub fn format_duration(total_secs: i64) -> String {
    let days = total_secs.div_euclid(86_400);
    let rem = total_secs.rem_euclid(86_400);
    let hours = rem / 3_600;
    let minutes = rem % 3_600 / 60;
    let seconds = rem % 60;
    if days == 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        let unit = if days.abs() == 1 { "day" } else { "days" };
        format!("{days} {unit}, {hours}:{minutes:02}:{seconds:02}")
    }
}

/// Renders a byte count (or byte rate) against binary units: the largest of
/// `K M G T P E Z Y` (K = 2^10) whose threshold the value reaches, with one
/// fractional digit. Values below 1024 — including negative ones, which fail
/// every threshold — render as `{:.1}B`.
pub fn bytes_to_human(n: f64) -> String {
    const SYMBOLS: [&str; 8] = ["K", "M", "G", "T", "P", "E", "Z", "Y"];
    for (i, symbol) in SYMBOLS.iter().enumerate().rev() {
        let threshold = (1u128 << ((i + 1) * 10)) as f64;
        if n >= threshold {
            return format!("{:.1}{}", n / threshold, symbol);
        }
    }
    format!("{n:.1}B")
}

/// Renders an epoch-second timestamp as a local `%Y-%m-%d %H:%M:%S` string.
pub fn timestamp_to_local(ts: i64) -> String {
    Local
        .timestamp_opt(ts, 0)
        .single()
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn local(epoch: i64) -> DateTime<Local> {
        Local.timestamp_opt(epoch, 0).single().unwrap()
    }

    #[test]
    fn unset_start_is_nil() {
        let now = local(1_700_000_000);
        assert_eq!(stage_elapsed(now, 0, 0), "nil");
        assert_eq!(stage_elapsed(now, 0, 1_700_000_000), "nil");
        assert_eq!(stage_elapsed(now, -5, 0), "nil");
    }

    #[test]
    fn running_stage_counts_against_now() {
        let now = local(1_700_003_661);
        // 1h 1m 1s ago, end held at a non-zero sentinel.
        assert_eq!(stage_elapsed(now, 1_700_000_000, 1), "1:01:01");
        // The sentinel value is irrelevant as long as it is non-zero.
        assert_eq!(stage_elapsed(now, 1_700_000_000, 999), "1:01:01");
    }

    #[test]
    fn running_stage_spanning_days() {
        let now = local(1_700_000_000 + 2 * 86_400 + 3_600);
        assert_eq!(stage_elapsed(now, 1_700_000_000, 1), "2 days, 1:00:00");
    }

    #[test]
    fn negative_end_zero_branch() {
        // end == 0 computes 0 - start. Locked-in oddity, not a target for
        // correction: the branch is unreachable with real recorder payloads.
        let now = local(1_700_000_000);
        assert_eq!(stage_elapsed(now, 90, 0), "-1 day, 23:58:30");
    }

    #[test]
    fn duration_rendering() {
        assert_eq!(format_duration(0), "0:00:00");
        assert_eq!(format_duration(59), "0:00:59");
        assert_eq!(format_duration(3_661), "1:01:01");
        assert_eq!(format_duration(86_400), "1 day, 0:00:00");
        assert_eq!(format_duration(2 * 86_400 + 2), "2 days, 0:00:02");
        assert_eq!(format_duration(-90), "-1 day, 23:58:30");
        assert_eq!(format_duration(-2 * 86_400), "-2 days, 0:00:00");
    }

    #[test]
    fn byte_humanization() {
        assert_eq!(bytes_to_human(0.0), "0.0B");
        assert_eq!(bytes_to_human(512.0), "512.0B");
        assert_eq!(bytes_to_human(1023.0), "1023.0B");
        assert_eq!(bytes_to_human(1024.0), "1.0K");
        assert_eq!(bytes_to_human(1536.0), "1.5K");
        assert_eq!(bytes_to_human(1024.0 * 1024.0), "1.0M");
        assert_eq!(bytes_to_human(1024.0 * 1024.0 * 1024.0), "1.0G");
    }

    #[test]
    fn byte_humanization_negative_falls_through() {
        // Counter wrap between samples surfaces as a negative rate; it is
        // rendered raw rather than clamped.
        assert_eq!(bytes_to_human(-12.0), "-12.0B");
    }
}
