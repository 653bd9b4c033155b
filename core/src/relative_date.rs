//! Calendar-truncated relative date text ("Today", "3 days ago", ...).

use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Text for `date` relative to `now`, comparing calendar days. `now` is a
/// parameter so callers with a fixed clock (tests) get stable output.
pub fn relative_date_text(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let day = date.date_naive();
    let today = now.date_naive();

    if day >= today {
        return "Today".to_string();
    }

    let (years, months, days) = calendar_diff(day, today);

    if years >= 1 {
        return ago(years as i64, "year");
    }
    if months >= 1 {
        return ago(months as i64, "month");
    }
    if days >= 1 {
        return ago(days, "day");
    }
    "Today".to_string()
}

/// Component difference `from` → `to` for `from < to`: whole years, then
/// months left over, then days (the day count is exact only when the first
/// two are zero, which is the only case the caller reads it).
fn calendar_diff(from: NaiveDate, to: NaiveDate) -> (i32, i32, i64) {
    let mut months =
        (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32;
    if to.day() < from.day() {
        months -= 1;
    }
    (months / 12, months % 12, (to - from).num_days())
}

fn ago(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}
