/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Page ranges.
//!
//! Ranges are joined with the en-dash placeholder; the output format
//! decides what an en-dash looks like.

use bibformat_core::options::PageFormat;
use bibformat_core::NDASH_PLACEHOLDER;

/// A formatted page locator and whether it covers more than one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedPages {
    pub text: String,
    pub is_plural: bool,
}

/// Format a range from its start and optional end page.
pub fn format_page_range(start: &str, end: Option<&str>, format: PageFormat) -> FormattedPages {
    let start = start.trim();
    let end = end.map(str::trim).filter(|e| !e.is_empty() && *e != start);
    let Some(end) = end else {
        return FormattedPages {
            text: start.to_string(),
            is_plural: false,
        };
    };
    FormattedPages {
        text: format!("{}{}{}", start, NDASH_PLACEHOLDER, format_end(start, end, format)),
        is_plural: true,
    }
}

/// Format a locator typed as one string, such as `"20-29"`, `"20–29"` or
/// `"xii"`.
pub fn format_page_string(pages: &str, format: PageFormat) -> FormattedPages {
    let pages = pages.trim();
    let split = [NDASH_PLACEHOLDER, "\u{2013}", "--", "-"]
        .iter()
        .find_map(|sep| pages.split_once(sep));
    if let Some((start, end)) = split {
        return format_page_range(start, Some(end), format);
    }
    FormattedPages {
        text: pages.to_string(),
        is_plural: pages.contains(',') || pages.contains('&'),
    }
}

fn format_end(start: &str, end: &str, format: PageFormat) -> String {
    let numeric = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
    if !numeric(start) || !numeric(end) {
        return end.to_string();
    }
    match format {
        PageFormat::AsEntered => end.to_string(),
        PageFormat::Abbreviated => format_minimal(start, &expand(start, end), 1),
        PageFormat::TwoDigit => format_minimal(start, &expand(start, end), 2),
        PageFormat::Expanded => expand(start, end),
    }
}

/// Restore the digits an abbreviated end page shares with the start page:
/// `132`, `9` becomes `139`.
fn expand(start: &str, end: &str) -> String {
    if end.len() >= start.len() {
        return end.to_string();
    }
    format!("{}{}", &start[..start.len() - end.len()], end)
}

/// Drop the leading digits `end` shares with `start`, keeping at least
/// `min_digits`. Ranges of different length keep every digit.
fn format_minimal(start: &str, end: &str, min_digits: usize) -> String {
    let start_chars: Vec<char> = start.chars().collect();
    let end_chars: Vec<char> = end.chars().collect();

    if start_chars.len() != end_chars.len() {
        return end.to_string();
    }

    let first_diff = start_chars
        .iter()
        .zip(end_chars.iter())
        .position(|(s, e)| s != e)
        .unwrap_or(end_chars.len());

    let keep_from = first_diff.min(end_chars.len().saturating_sub(min_digits));
    end_chars[keep_from..].iter().collect()
}
