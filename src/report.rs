//! Renders the daily status message.

use chrono::{Duration, NaiveDate};

use crate::data::Vaccinations;
use crate::error::Error;

/// Don't mess with locale, just use `.` as thousands separator.
pub fn format_number(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, d) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(d);
    }
    out
}

/// Percentage change with a directional indicator. The thresholds are
/// fixed: a move under one percent counts as sideways, ten percent
/// either way gets the strong arrow.
fn format_percentage(change: f64) -> String {
    let indicator = if change >= 10.0 {
        "⬆️"
    } else if change >= 1.0 {
        "↗️"
    } else if change > -1.0 {
        "➡️"
    } else if change > -10.0 {
        "↘️"
    } else {
        "⬇️"
    };
    format!("{:.2}% {}", change, indicator)
}

/// Builds the message for `today`: yesterday's doses against the same
/// weekday one week prior, plus the trailing 7-day averages of both.
/// Averages are truncated to whole doses for display. With
/// `with_trend` the two percentage changes (computed on the
/// untruncated values) are appended to the respective lines.
///
/// Pure: reads nothing but `data` and `today`, so the same inputs
/// always render the same bytes.
pub fn generate(data: &Vaccinations, today: NaiveDate, with_trend: bool) -> Result<String, Error> {
    let yesterday = today - Duration::days(1);
    let prior_week = yesterday - Duration::days(7);

    let latest = data.get(yesterday)?;
    let week_before = data.get(prior_week)?;

    let average = data.seven_day_average(yesterday)?;
    let average_week_before = data.seven_day_average(prior_week)?;

    let trend_doses = if with_trend {
        let change = (latest.doses_new as f64 / week_before.doses_new as f64 - 1.0) * 100.0;
        format!(" ({})", format_percentage(change))
    } else {
        String::new()
    };
    let trend_average = if with_trend {
        let change = (average / average_week_before - 1.0) * 100.0;
        format!(" ({})", format_percentage(change))
    } else {
        String::new()
    };

    Ok(format!(
        "Impfungen gestern ({}): {}{}\n\
         Impfungen eine Woche zuvor: {}\n\
         \n\
         7-Tage-Durchschnitt gestern: {}{}\n\
         7-Tage-Durchschnitt eine Woche zuvor: {}",
        yesterday,
        format_number(latest.doses_new),
        trend_doses,
        format_number(week_before.doses_new),
        format_number(average as i64),
        trend_average,
        format_number(average_week_before as i64),
    ))
}
