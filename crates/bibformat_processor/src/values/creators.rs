/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Creator list formatting.
//!
//! One [`CreatorStyle`] bundle controls name order, initials, list
//! separators and truncation. Repeat suppression across bibliography
//! entries is layered on top by [`suppress_repeat`], using the session's
//! [`RepeatState`].

use crate::session::RepeatState;
use bibformat_core::options::{
    CreatorRewrite, CreatorRole, CreatorStyle, FirstNameForm, InitialsStyle, NameOrder,
    RepeatPolicy,
};
use bibformat_core::{CreatorList, CreatorName};

/// A rendered creator list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormattedCreators {
    pub text: String,
    /// More than one creator, or truncated with an abbreviation.
    pub is_plural: bool,
    /// Number of creators in the source list.
    pub count: usize,
}

/// Format a creator list with the bundle selected for `role`.
pub fn format_creators(
    creators: &CreatorList,
    role: CreatorRole,
    style: &CreatorStyle,
) -> FormattedCreators {
    format_creators_with_rewrite(creators, role, style, None)
}

/// Format a creator list, decorating names with a per-type rewrite rule.
pub fn format_creators_with_rewrite(
    creators: &CreatorList,
    role: CreatorRole,
    style: &CreatorStyle,
    rewrite: Option<&CreatorRewrite>,
) -> FormattedCreators {
    let count = creators.len();
    if count == 0 {
        return FormattedCreators::default();
    }

    let truncation = style.list.as_ref().filter(|list| count > list.more_than);
    let kept = match truncation {
        Some(list) => list.limit.clamp(1, count),
        None => count,
    };

    let mut names: Vec<String> = creators
        .iter()
        .take(kept)
        .enumerate()
        .map(|(i, name)| {
            let order = if i == 0 { style.first_order } else { style.other_order };
            format_name(name, order, style)
        })
        .collect();

    if let Some(rewrite) = rewrite {
        apply_rewrite(&mut names, rewrite);
    }

    let mut text = match truncation {
        Some(_) => join_truncated(&names, style),
        None => join_all(&names, style),
    };
    if let Some(list) = truncation {
        if list.abbreviation_italic {
            let trimmed = list.abbreviation.trim_start();
            let space = &list.abbreviation[..list.abbreviation.len() - trimmed.len()];
            text.push_str(&format!("{}[i]{}[/i]", space, trimmed));
        } else {
            text.push_str(&list.abbreviation);
        }
    }

    tracing::trace!(?role, count, kept, "formatted creators");
    FormattedCreators {
        text,
        is_plural: count > 1 || truncation.is_some(),
        count,
    }
}

/// Apply the bundle's repeat policy when the previous bibliography entry
/// printed the same creators, then remember these creators.
///
/// Roles outside the bibliography are returned untouched.
pub fn suppress_repeat(
    formatted: FormattedCreators,
    role: CreatorRole,
    style: &CreatorStyle,
    repeat: &mut RepeatState,
) -> FormattedCreators {
    if !role.is_bibliographic() || formatted.text.is_empty() {
        return formatted;
    }
    let repeated = repeat.last_creators() == Some(formatted.text.as_str());
    repeat.set_last_creators(&formatted.text);
    if !repeated {
        return formatted;
    }
    match style.repeat {
        RepeatPolicy::Print => formatted,
        RepeatPolicy::Replace => FormattedCreators {
            text: style.repeat_string.clone(),
            ..formatted
        },
        RepeatPolicy::Omit => FormattedCreators {
            text: String::new(),
            ..formatted
        },
    }
}

/// Lay out a single name.
pub fn format_name(name: &CreatorName, order: NameOrder, style: &CreatorStyle) -> String {
    let (prefix, surname) = split_particle(name);
    let surname = if style.uppercase {
        surname.to_uppercase()
    } else {
        surname
    };
    let family = match prefix {
        Some(prefix) => format!("{} {}", prefix, surname),
        None => surname,
    };
    let given = given_names(name, style);

    if given.is_empty() {
        return family;
    }
    match order {
        NameOrder::FirstLast => format!("{} {}", given, family),
        NameOrder::LastCommaFirst => format!("{}, {}", family, given),
        NameOrder::LastFirst => format!("{} {}", family, given),
        NameOrder::LastOnly => family,
    }
}

/// The explicit prefix, or lower-case leading words of the surname
/// ("van der Berg").
fn split_particle(name: &CreatorName) -> (Option<String>, String) {
    let prefix = name.prefix.trim();
    if !prefix.is_empty() {
        return (Some(prefix.to_string()), name.surname.trim().to_string());
    }
    let words: Vec<&str> = name.surname.split_whitespace().collect();
    let particles = words
        .iter()
        .take(words.len().saturating_sub(1))
        .take_while(|word| word.starts_with(char::is_lowercase))
        .count();
    if particles == 0 {
        return (None, words.join(" "));
    }
    (Some(words[..particles].join(" ")), words[particles..].join(" "))
}

fn given_names(name: &CreatorName, style: &CreatorStyle) -> String {
    let first = name.firstname.trim();
    let extra = initial_groups(&name.initials);
    match style.first_name {
        FirstNameForm::Full => {
            let initials = render_initials(&extra, style.initials);
            match (first.is_empty(), initials.is_empty()) {
                (true, _) => initials,
                (false, true) => first.to_string(),
                (false, false) => format!("{} {}", first, initials),
            }
        }
        FirstNameForm::Initial => {
            let mut groups = first
                .split_whitespace()
                .filter_map(|word| {
                    let parts: Vec<char> = word
                        .split('-')
                        .filter_map(|part| part.chars().find(|c| c.is_alphabetic()))
                        .flat_map(char::to_uppercase)
                        .collect();
                    (!parts.is_empty()).then_some(parts)
                })
                .collect::<Vec<_>>();
            groups.extend(extra);
            render_initials(&groups, style.initials)
        }
    }
}

/// Initials typed by the loader, e.g. `"S. T."` or `"ST"`.
fn initial_groups(initials: &str) -> Vec<Vec<char>> {
    initials
        .chars()
        .filter(|c| c.is_alphabetic())
        .map(|c| c.to_uppercase().collect())
        .collect()
}

/// One group per given name; hyphenated names have several letters.
fn render_initials(groups: &[Vec<char>], style: InitialsStyle) -> String {
    let (after, between) = match style {
        InitialsStyle::DottedSpaced => (".", " "),
        InitialsStyle::Dotted => (".", ""),
        InitialsStyle::Spaced => ("", " "),
        InitialsStyle::Compact => ("", ""),
    };
    groups
        .iter()
        .map(|letters| {
            letters
                .iter()
                .map(|c| format!("{}{}", c, after))
                .collect::<Vec<_>>()
                .join("-")
        })
        .collect::<Vec<_>>()
        .join(between)
}

fn join_all(names: &[String], style: &CreatorStyle) -> String {
    match names {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{}{}{}", first, style.two_creators_sep, second),
        [first, middle @ .., last] => {
            let mut out = first.clone();
            for (i, name) in middle.iter().enumerate() {
                out.push_str(if i == 0 {
                    &style.sep_first_between
                } else {
                    &style.sep_next_between
                });
                out.push_str(name);
            }
            out.push_str(&style.sep_next_last);
            out.push_str(last);
            out
        }
    }
}

/// Kept names before an abbreviation are joined without a final "and".
fn join_truncated(names: &[String], style: &CreatorStyle) -> String {
    let mut out = String::new();
    for (i, name) in names.iter().enumerate() {
        match i {
            0 => {}
            1 => out.push_str(&style.sep_first_between),
            _ => out.push_str(&style.sep_next_between),
        }
        out.push_str(name);
    }
    out
}

fn apply_rewrite(names: &mut [String], rewrite: &CreatorRewrite) {
    let attach = |name: &mut String, text: &str, before: bool| {
        if before {
            name.insert_str(0, text);
        } else {
            name.push_str(text);
        }
    };
    let Some((first, rest)) = names.split_first_mut() else {
        return;
    };
    if let Some(text) = &rewrite.first {
        attach(first, text, rewrite.first_before);
    }
    let Some(text) = &rewrite.remainder else {
        return;
    };
    if rewrite.remainder_each {
        for name in rest.iter_mut() {
            attach(name, text, rewrite.remainder_before);
        }
    } else if rewrite.remainder_before {
        if let Some(name) = rest.first_mut() {
            attach(name, text, true);
        }
    } else if let Some(name) = rest.last_mut() {
        attach(name, text, false);
    }
}
