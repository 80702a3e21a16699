use chrono::{DateTime, Datelike, Timelike, Utc};

/// Format `then` relative to `now`, e.g. "3 days ago" or "in 2 hours".
/// Uses the largest whole unit and truncates the rest.
pub fn format_relative(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let future = then > now;
    let (earlier, later) = if future { (now, then) } else { (then, now) };
    let (count, unit) = largest_unit(earlier, later);

    let label = if count == 1 {
        unit.to_string()
    } else {
        format!("{}s", unit)
    };

    if future {
        format!("in {} {}", count, label)
    } else {
        format!("{} {} ago", count, label)
    }
}

/// Format `then` relative to the current wall clock.
pub fn format_relative_now(then: DateTime<Utc>) -> String {
    format_relative(then, Utc::now())
}

fn largest_unit(earlier: DateTime<Utc>, later: DateTime<Utc>) -> (i64, &'static str) {
    let months = whole_months(earlier, later);
    if months >= 12 {
        return (months / 12, "year");
    }
    if months >= 1 {
        return (months, "month");
    }

    let elapsed = later - earlier;
    if elapsed.num_days() >= 1 {
        (elapsed.num_days(), "day")
    } else if elapsed.num_hours() >= 1 {
        (elapsed.num_hours(), "hour")
    } else if elapsed.num_minutes() >= 1 {
        (elapsed.num_minutes(), "minute")
    } else {
        (elapsed.num_seconds(), "second")
    }
}

/// Calendar months between two instants, not counting a partial month.
fn whole_months(earlier: DateTime<Utc>, later: DateTime<Utc>) -> i64 {
    let mut months = i64::from(later.year() - earlier.year()) * 12 + i64::from(later.month())
        - i64::from(earlier.month());

    let rest = |dt: DateTime<Utc>| (dt.day(), dt.num_seconds_from_midnight(), dt.nanosecond());
    if rest(later) < rest(earlier) {
        months -= 1;
    }
    months
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_days_ago() {
        assert_eq!(format_relative(now() - Duration::days(3), now()), "3 days ago");
        assert_eq!(format_relative(now() - Duration::days(1), now()), "1 day ago");
    }

    #[test]
    fn test_truncates_to_largest_unit() {
        let then = now() - Duration::hours(1) - Duration::minutes(59);
        assert_eq!(format_relative(then, now()), "1 hour ago");
        assert_eq!(format_relative(now() - Duration::seconds(90), now()), "1 minute ago");
    }

    #[test]
    fn test_just_now() {
        assert_eq!(format_relative(now(), now()), "0 seconds ago");
        assert_eq!(
            format_relative(now() - Duration::milliseconds(400), now()),
            "0 seconds ago"
        );
    }

    #[test]
    fn test_future() {
        assert_eq!(format_relative(now() + Duration::hours(2), now()), "in 2 hours");
    }

    #[test]
    fn test_months_and_years() {
        let then = Utc.with_ymd_and_hms(2024, 4, 15, 12, 0, 0).unwrap();
        assert_eq!(format_relative(then, now()), "2 months ago");

        // One day short of two months
        let then = Utc.with_ymd_and_hms(2024, 4, 16, 12, 0, 0).unwrap();
        assert_eq!(format_relative(then, now()), "1 month ago");

        let then = Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(format_relative(then, now()), "2 years ago");
    }

    #[test]
    fn test_short_month_falls_back_to_days() {
        let then = Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 2, 29, 0, 0, 0).unwrap();
        assert_eq!(format_relative(then, now), "29 days ago");
    }
}
