/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use bibformat_core::options::{EditionFormat, RunningTimeFormat};

const ORDINAL_WORDS: [&str; 20] = [
    "first",
    "second",
    "third",
    "fourth",
    "fifth",
    "sixth",
    "seventh",
    "eighth",
    "ninth",
    "tenth",
    "eleventh",
    "twelfth",
    "thirteenth",
    "fourteenth",
    "fifteenth",
    "sixteenth",
    "seventeenth",
    "eighteenth",
    "nineteenth",
    "twentieth",
];

/// English ordinal: 1st, 2nd, 3rd, 4th, 11th, 12th, 13th, 21st.
pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

/// Format an edition. Values that are not plain numbers pass through.
pub fn format_edition(edition: &str, format: EditionFormat) -> String {
    let Ok(n) = edition.trim().parse::<u32>() else {
        return edition.to_string();
    };
    match format {
        EditionFormat::Cardinal => n.to_string(),
        EditionFormat::Ordinal => ordinal(n),
        EditionFormat::Words => match n {
            1..=20 => ORDINAL_WORDS[n as usize - 1].to_string(),
            _ => ordinal(n),
        },
    }
}

/// Format a running time given in minutes. Values that are not plain
/// numbers pass through.
pub fn format_running_time(minutes: &str, format: RunningTimeFormat) -> String {
    let Ok(total) = minutes.trim().parse::<u32>() else {
        return minutes.to_string();
    };
    let (hours, mins) = (total / 60, total % 60);
    match format {
        RunningTimeFormat::Apostrophe => format!("{}'{:02}\"", hours, mins),
        RunningTimeFormat::Colon => format!("{}:{:02}", hours, mins),
        RunningTimeFormat::Comma => format!("{},{:02}", hours, mins),
        RunningTimeFormat::Words => duration_words(hours, mins, ", "),
        RunningTimeFormat::WordsAnd => duration_words(hours, mins, " and "),
    }
}

fn duration_words(hours: u32, mins: u32, joiner: &str) -> String {
    let unit = |n: u32, word: &str| {
        if n == 1 {
            format!("1 {}", word)
        } else {
            format!("{} {}s", n, word)
        }
    };
    match (hours, mins) {
        (0, m) => unit(m, "minute"),
        (h, 0) => unit(h, "hour"),
        (h, m) => format!("{}{}{}", unit(h, "hour"), joiner, unit(m, "minute")),
    }
}
