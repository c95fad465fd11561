//! Countdown and clock renderings of an absolute event time.

use ::time::formatting::Formattable;
use ::time::macros::format_description;
use ::time::{OffsetDateTime, UtcOffset};

/// Rendered in place of a clock if formatting ever fails.
const FALLBACK_CLOCK: &str = "??:??";

/// Every representation templates use for one event time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeParts {
    /// Countdown, `"4m 10s"` below an hour, otherwise `"1h 4m"`.
    pub time_left: String,
    /// `"02:30:16pm"`
    pub time_12h: String,
    /// `"14:30:16"`
    pub time_24h: String,
    /// Countdown without seconds, `"4m"` or `"1h 4m"`.
    pub time_left_no_secs: String,
    pub time_12h_no_secs: String,
    pub time_24h_no_secs: String,
    pub raw_hours: i64,
    pub raw_minutes: i64,
    pub raw_seconds: i64,
}

/// Whole seconds from `now` until `at`; negative once `at` has passed.
#[must_use]
pub fn seconds_remaining(at: OffsetDateTime, now: OffsetDateTime) -> i64 {
    (at - now).whole_seconds()
}

/// Splits the time left until `at` and renders `at` as a wall clock in
/// `offset`. The countdown stops at zero. Clocks the offset would push out
/// of the representable range render as `??:??`.
#[must_use]
pub fn time_parts(at: OffsetDateTime, offset: UtcOffset, now: OffsetDateTime) -> TimeParts {
    let remaining = seconds_remaining(at, now).max(0);
    let (hours, minutes, seconds) = (remaining / 3600, remaining % 3600 / 60, remaining % 60);

    let (time_left, time_left_no_secs) = if hours == 0 {
        (format!("{minutes}m {seconds}s"), format!("{minutes}m"))
    } else {
        let both = format!("{hours}h {minutes}m");
        (both.clone(), both)
    };

    let local = at.checked_to_offset(offset);
    TimeParts {
        time_left,
        time_12h: render_local(
            local,
            format_description!("[hour repr:12]:[minute]:[second][period case:lower]"),
        ),
        time_24h: render_local(local, format_description!("[hour]:[minute]:[second]")),
        time_left_no_secs,
        time_12h_no_secs: render_local(
            local,
            format_description!("[hour repr:12]:[minute][period case:lower]"),
        ),
        time_24h_no_secs: render_local(local, format_description!("[hour]:[minute]")),
        raw_hours: hours,
        raw_minutes: minutes,
        raw_seconds: seconds,
    }
}

/// ISO-8601 UTC with microseconds, e.g. `2023-11-14T22:13:20.000000Z`.
#[must_use]
pub fn utc_micros(at: OffsetDateTime) -> String {
    render_local(
        at.checked_to_offset(UtcOffset::UTC),
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:6]Z"),
    )
}

/// `2023-11-14 22:13:20`, the plain rendering of a raw timestamp.
#[must_use]
pub fn plain_datetime(at: OffsetDateTime) -> String {
    render(
        at,
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
    )
}

fn render(at: OffsetDateTime, format: &(impl Formattable + ?Sized)) -> String {
    at.format(format)
        .unwrap_or_else(|_| FALLBACK_CLOCK.to_string())
}

fn render_local(at: Option<OffsetDateTime>, format: &(impl Formattable + ?Sized)) -> String {
    at.map_or_else(|| FALLBACK_CLOCK.to_string(), |at| render(at, format))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use ::time::macros::{datetime, offset};
    use ::time::Date;

    #[test]
    fn countdown_under_an_hour_shows_seconds() {
        let now = datetime!(2023-11-14 22:00:00 UTC);
        let at = datetime!(2023-11-14 22:04:10 UTC);
        let parts = time_parts(at, UtcOffset::UTC, now);

        assert_eq!(parts.time_left, "4m 10s");
        assert_eq!(parts.time_left_no_secs, "4m");
        assert_eq!(parts.time_24h, "22:04:10");
        assert_eq!(parts.time_24h_no_secs, "22:04");
        assert_eq!(parts.time_12h, "10:04:10pm");
        assert_eq!(parts.time_12h_no_secs, "10:04pm");
        assert_eq!((parts.raw_hours, parts.raw_minutes, parts.raw_seconds), (0, 4, 10));
    }

    #[test]
    fn countdown_over_an_hour_drops_seconds() {
        let now = datetime!(2023-11-14 08:00:00 UTC);
        let at = datetime!(2023-11-14 09:05:30 UTC);
        let parts = time_parts(at, offset!(+2), now);

        assert_eq!(parts.time_left, "1h 5m");
        assert_eq!(parts.time_left_no_secs, "1h 5m");
        assert_eq!(parts.time_24h, "11:05:30");
        assert_eq!(parts.time_12h, "11:05:30am");
        assert_eq!((parts.raw_hours, parts.raw_minutes, parts.raw_seconds), (1, 5, 30));
    }

    #[test]
    fn countdown_stops_at_zero_once_passed() {
        let now = datetime!(2023-11-14 12:00:00 UTC);
        let at = datetime!(2023-11-14 11:59:00 UTC);
        let parts = time_parts(at, UtcOffset::UTC, now);

        assert_eq!(seconds_remaining(at, now), -60);
        assert_eq!(parts.time_left, "0m 0s");
        assert_eq!(parts.time_24h, "11:59:00");
    }

    #[test]
    fn clock_past_the_last_representable_day_falls_back() {
        let at = datetime!(9999-12-31 23:59:59 UTC);
        let now = datetime!(9999-12-31 23:00:00 UTC);
        let parts = time_parts(at, offset!(+1), now);

        assert_eq!(parts.time_left, "59m 59s");
        assert_eq!(parts.time_24h, FALLBACK_CLOCK);
        assert_eq!(parts.time_12h, FALLBACK_CLOCK);
        assert_eq!(parts.time_24h_no_secs, FALLBACK_CLOCK);
        assert_eq!(parts.time_12h_no_secs, FALLBACK_CLOCK);

        let before = time_parts(Date::MIN.midnight().assume_utc(), offset!(-1), now);
        assert_eq!(before.time_24h, FALLBACK_CLOCK);
        assert_eq!(before.time_left, "0m 0s");
    }

    #[test]
    fn utc_micros_has_fixed_precision() {
        let at = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap();
        assert_eq!(utc_micros(at), "2023-11-14T22:13:20.000000Z");
        assert_eq!(plain_datetime(at), "2023-11-14 22:13:20");
    }
}
