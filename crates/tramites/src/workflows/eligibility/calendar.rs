use chrono::{Datelike, Duration, NaiveDate};

/// Parse a `YYYY-MM-DD` field component-wise.
///
/// Empty input, missing components, non-numeric components, and values that
/// name no civil day (`2021-02-29`, month 13) all yield `None`. Nothing here
/// panics; absence is the only failure mode.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let mut parts = value.trim().splitn(3, '-');
    let year = parts.next()?.parse::<i32>().ok()?;
    let month = parts.next()?.parse::<u32>().ok()?;
    let day = parts.next()?.parse::<u32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Shift a date by whole calendar years, preserving month and day.
///
/// A Feb-29 anchor rolls forward to Mar-1 when the target year is not a
/// leap year.
pub fn add_years(date: NaiveDate, years: i32) -> NaiveDate {
    let year = date.year() + years;
    NaiveDate::from_ymd_opt(year, date.month(), date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, date.month() + 1, 1))
        .unwrap_or(date)
}

pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date + Duration::days(days)
}

/// Days spanned by `[start, end]` counting both endpoints; 0 when inverted.
pub fn inclusive_day_count(start: NaiveDate, end: NaiveDate) -> u32 {
    if end < start {
        return 0;
    }
    end.signed_duration_since(start).num_days() as u32 + 1
}

/// Whole-day gap from `start` to `end`; 0 when `end` is not strictly later.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> u32 {
    if end <= start {
        return 0;
    }
    end.signed_duration_since(start).num_days() as u32
}

/// Spanish pluralization for the duration vocabulary ("día", "mes", "año").
pub fn pluralize(word: &str, value: u32) -> String {
    if value == 1 {
        return word.to_string();
    }
    if word.ends_with(|c: char| "aeiouáéíóú".contains(c)) {
        format!("{word}s")
    } else {
        format!("{word}es")
    }
}

/// Render the gap between two dates as whole calendar units.
///
/// Day components are subtracted first, borrowing the true length of the
/// month preceding `end` when negative, then months, borrowing a year when
/// negative. Only the two largest non-zero units appear; a sub-month span
/// falls back to the day remainder.
pub fn describe_duration(start: NaiveDate, end: NaiveDate) -> String {
    let mut years = end.year() - start.year();
    let mut months = end.month() as i32 - start.month() as i32;
    let mut days = end.day() as i32 - start.day() as i32;

    if days < 0 {
        months -= 1;
        let (prev_year, prev_month) = if end.month() == 1 {
            (end.year() - 1, 12)
        } else {
            (end.year(), end.month() - 1)
        };
        days += days_in_month(prev_year, prev_month) as i32;
    }
    if months < 0 {
        years -= 1;
        months += 12;
    }

    let mut parts = Vec::new();
    if years > 0 {
        parts.push(format!("{} {}", years, pluralize("año", years as u32)));
    }
    if months > 0 {
        parts.push(format!("{} {}", months, pluralize("mes", months as u32)));
    }
    if parts.is_empty() {
        let days = days.max(0) as u32;
        parts.push(format!("{} {}", days, pluralize("día", days)));
    }
    parts.join(" y ")
}

/// `DD/MM/YYYY` rendering used by human-facing listings.
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match next {
        Some(first_of_next) => first_of_next.pred_opt().map_or(31, |last| last.day()),
        None => 31,
    }
}
