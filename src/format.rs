// SPDX-License-Identifier: MPL-2.0
//! Display formatting for prices, dates, durations and countdowns.

use crate::domain::{BookingStatus, TravelOption};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

/// Placeholder for absent values.
pub const NOT_AVAILABLE: &str = "N/A";

/// Countdown text once departure has passed.
pub const DEPARTED: &str = "DEPARTED";

/// Rupee amount with Indian digit grouping and no decimals: `₹1,23,457`.
#[must_use]
pub fn format_price_inr(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());
    format!("{sign}₹{}", group_indian(&digits))
}

/// Groups the last three digits, then pairs: `1234567` → `12,34,567`.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{tail}", groups.join(","))
}

/// `18 October 2026, 02:30 pm`, in the timestamp's own offset.
#[must_use]
pub fn format_timestamp<Tz>(timestamp: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    timestamp.format("%-d %B %Y, %I:%M %P").to_string()
}

/// Formats an RFC 3339 timestamp in local time. Unparseable input is
/// returned unchanged.
#[must_use]
pub fn format_date(text: &str) -> String {
    match DateTime::parse_from_rfc3339(text) {
        Ok(timestamp) => format_timestamp(&timestamp.with_timezone(&Local)),
        Err(_) => text.to_string(),
    }
}

/// `18 Oct 2026, 02:30 pm` from a separate date and time of day.
#[must_use]
pub fn format_date_time(date: &str, time: &str) -> String {
    match parse_date_time(date, time) {
        Some(moment) => moment.format("%-d %b %Y, %I:%M %P").to_string(),
        None => format!("{date} {time}").trim().to_string(),
    }
}

/// Combines `YYYY-MM-DD` and `HH:MM[:SS]` into a local wall-clock moment.
#[must_use]
pub fn parse_date_time(date: &str, time: &str) -> Option<NaiveDateTime> {
    let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()?;
    let time = time.trim();
    let time = NaiveTime::parse_from_str(time, "%H:%M:%S%.f")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M"))
        .ok()?;
    Some(date.and_time(time))
}

/// Departure of a travel option as local wall-clock time.
#[must_use]
pub fn departure(option: &TravelOption) -> Option<NaiveDateTime> {
    parse_date_time(&option.departure_date, &option.departure_time)
}

/// `"5h 30m"` from a duration such as `"05:30:00"` or `"1 02:00:00"`.
///
/// Zero hours or minutes are omitted, so `"00:00:00"` gives an empty string.
#[must_use]
pub fn format_duration(duration: Option<&str>) -> String {
    let Some(text) = duration.map(str::trim).filter(|text| !text.is_empty()) else {
        return NOT_AVAILABLE.to_string();
    };

    let (days, clock) = match text.split_once(' ') {
        Some((days, clock)) => (days.parse::<i64>().unwrap_or(0), clock),
        None => (0, text),
    };
    let mut parts = clock.split(':');
    let clock_hours = parts.next().and_then(|h| h.parse::<i64>().ok()).unwrap_or(0);
    let Some(hours) = days
        .checked_mul(24)
        .and_then(|day_hours| day_hours.checked_add(clock_hours))
    else {
        return NOT_AVAILABLE.to_string();
    };
    let minutes = parts.next().and_then(|m| m.parse::<i64>().ok()).unwrap_or(0);

    let mut result = Vec::new();
    if hours > 0 {
        result.push(format!("{hours}h"));
    }
    if minutes > 0 {
        result.push(format!("{minutes}m"));
    }
    result.join(" ")
}

/// Visual tone of a booking status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Success,
    Warning,
    Danger,
    Secondary,
}

#[must_use]
pub fn status_color(status: BookingStatus) -> StatusTone {
    match status {
        BookingStatus::Confirmed => StatusTone::Success,
        BookingStatus::Pending => StatusTone::Warning,
        BookingStatus::Cancelled => StatusTone::Danger,
        BookingStatus::Unknown => StatusTone::Secondary,
    }
}

/// Time left until `departure`: `"2d 3h 4m 5s"`, leading zero days and
/// hours omitted, or [`DEPARTED`].
#[must_use]
pub fn countdown_text(departure: NaiveDateTime, now: NaiveDateTime) -> String {
    let remaining = departure - now;
    if remaining <= chrono::TimeDelta::zero() {
        return DEPARTED.to_string();
    }

    let total = remaining.num_seconds();
    let days = total / 86_400;
    let hours = (total % 86_400) / 3_600;
    let minutes = (total % 3_600) / 60;
    let seconds = total % 60;

    let mut text = String::new();
    if days > 0 {
        text.push_str(&format!("{days}d "));
    }
    if hours > 0 {
        text.push_str(&format!("{hours}h "));
    }
    text.push_str(&format!("{minutes}m {seconds}s"));
    text
}
