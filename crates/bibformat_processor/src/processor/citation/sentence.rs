/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Same-sentence heuristics for in-text citations.

use regex::Regex;
use std::ops::Range;

/// Byte offset where the last sentence of `prose` starts.
///
/// A sentence ends at `.`, `?` or `!` followed by whitespace, except for
/// the full stop of "et al.".
pub fn sentence_start(prose: &str) -> usize {
    for (index, _) in prose.rmatch_indices(|c| matches!(c, '.' | '?' | '!')) {
        let after = &prose[index + 1..];
        if !after.starts_with(char::is_whitespace) {
            continue;
        }
        if prose[..index].ends_with("et al") {
            continue;
        }
        return index + 1;
    }
    0
}

/// The last mention of `surname` in `sentence`, including a following
/// "et al." and a possessive suffix.
pub fn find_mention(sentence: &str, surname: &str) -> Option<Range<usize>> {
    let surname = surname.trim();
    if surname.is_empty() {
        return None;
    }
    let pattern = format!(
        r"\b{}\b(?:\s+et\s+al\.)?(?:'s|'|’s|’)?",
        regex::escape(surname)
    );
    let re = Regex::new(&pattern).ok()?;
    re.find_iter(sentence).last().map(|m| m.range())
}
