/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use bibformat_core::options::TitleCapitalization;

/// Join a title and subtitle and apply the capitalization rule.
///
/// Braces protect their contents from case changes and are removed.
pub fn format_title(
    title: &str,
    subtitle: Option<&str>,
    capitalization: TitleCapitalization,
) -> String {
    let main = apply_case(title.trim(), capitalization);
    match subtitle.map(str::trim).filter(|s| !s.is_empty()) {
        None => main,
        Some(sub) => {
            let joiner = if main.ends_with(['?', '!', ':']) { " " } else { ": " };
            format!("{}{}{}", main, joiner, apply_case(sub, capitalization))
        }
    }
}

fn apply_case(text: &str, capitalization: TitleCapitalization) -> String {
    match capitalization {
        TitleCapitalization::AsEntered => text.replace(['{', '}'], ""),
        TitleCapitalization::SentenceCase => sentence_case(text),
    }
}

/// Lower-case everything outside braces except the first letter.
pub fn sentence_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut depth = 0usize;
    let mut seen_letter = false;
    for c in text.chars() {
        match c {
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            _ if depth > 0 => {
                seen_letter |= c.is_alphabetic();
                out.push(c);
            }
            _ if c.is_alphabetic() && !seen_letter => {
                seen_letter = true;
                out.extend(c.to_uppercase());
            }
            _ => out.extend(c.to_lowercase()),
        }
    }
    out
}
