/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use super::numbers::ordinal;
use bibformat_core::options::{DateOptions, DateOrder, DayFormat, MonthFormat};

const LONG_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const SHORT_MONTHS: [&str; 12] = [
    "Jan.", "Feb.", "Mar.", "Apr.", "May", "June", "July", "Aug.", "Sept.", "Oct.", "Nov.", "Dec.",
];

/// Render a day and month.
///
/// Returns `None` without a valid month (1-12); a day on its own means
/// nothing.
pub fn format_date(day: Option<&str>, month: Option<&str>, options: &DateOptions) -> Option<String> {
    let month: usize = month?.trim().parse().ok().filter(|m| (1..=12).contains(m))?;
    let month_text = match options.month {
        MonthFormat::Long => LONG_MONTHS[month - 1].to_string(),
        MonthFormat::Short => SHORT_MONTHS[month - 1].to_string(),
        MonthFormat::Numeric => month.to_string(),
        MonthFormat::User => options
            .month_names
            .get(month - 1)
            .filter(|_| options.month_names.len() == 12)
            .cloned()
            .unwrap_or_else(|| LONG_MONTHS[month - 1].to_string()),
    };

    let day = day
        .and_then(|d| d.trim().parse::<u32>().ok())
        .filter(|d| (1..=31).contains(d));
    let Some(day) = day else {
        return Some(month_text);
    };
    let day_text = match options.day {
        DayFormat::Plain if options.day_leading_zero => format!("{:02}", day),
        DayFormat::Plain => day.to_string(),
        DayFormat::Ordinal => ordinal(day),
    };

    Some(match options.order {
        DateOrder::DayMonth => format!("{}{}{}", day_text, options.separator, month_text),
        DateOrder::MonthDay => format!("{}{}{}", month_text, options.separator, day_text),
    })
}
