/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! The field mapper: one compiled template applied to one item.
//!
//! Rendering is a pure function of its inputs. Missing fields contribute
//! nothing; there are no render errors.

use super::format::parse_marker;
use bibformat_core::template::{CompiledTemplate, FieldSpec};
use bibformat_core::{Item, PluralFlags};

const PUNCTUATION: &[char] = &['.', ',', ';', ':', '?', '!'];
const TERMINAL: &[char] = &['.', '?', '!'];

/// Render `item` through `template`.
pub fn render(template: &CompiledTemplate, item: &Item, plural: &PluralFlags) -> String {
    let specs: Vec<(&str, &FieldSpec)> = template.fields().collect();
    let exists: Vec<bool> = specs.iter().map(|(name, _)| item.has(name)).collect();
    let mut slots: Vec<Option<String>> = vec![None; specs.len()];
    let mut previous_existed = false;

    for (index, (name, spec)) in specs.iter().enumerate() {
        let Some(value) = item.get(name) else {
            previous_existed = false;
            continue;
        };
        let next_exists = exists.get(index + 1).copied().unwrap_or(false);
        let plural_text = spec.plural_text(plural.is_plural(name));
        let mut pre = spec
            .pre
            .resolve(spec.dependent_pre_text(previous_existed), plural_text);
        let mut post = spec
            .post
            .resolve(spec.dependent_post_text(next_exists), plural_text);
        let mut value = value.to_string();
        let previous = slots[..index].iter().rev().find_map(|slot| slot.as_deref());

        if let Some(last) = previous.and_then(last_visible) {
            drop_repeated_lead(&mut pre, last);
        }
        let before = if pre.is_empty() {
            previous.and_then(last_visible)
        } else {
            last_visible(&pre)
        };
        if let Some(c) = before.filter(|c| PUNCTUATION.contains(c)) {
            if value.starts_with(c) {
                value.remove(0);
            }
        }
        if let Some(end) = last_visible(&value).filter(|c| TERMINAL.contains(c)) {
            drop_repeated_lead(&mut post, end);
        }

        slots[index] = Some(format!("{}{}{}", pre, value, post));
        previous_existed = true;
    }

    apply_independent_pairs(template, &mut slots);

    let body: String = slots.into_iter().flatten().collect();
    let mut text = match (&template.preliminary_text, body.is_empty()) {
        (None, true) => return String::new(),
        (Some(preliminary), true) => preliminary.clone(),
        (preliminary, false) => format!("{}{}", preliminary.as_deref().unwrap_or_default(), body),
    };
    if let Some(ultimate) = &template.ultimate {
        append_ultimate(&mut text, ultimate);
    }
    collapse_spaces(&text).trim().to_string()
}

/// Attach each pair to the first and last rendered slot it encloses, or
/// its alternative to the nearest rendered neighbour.
fn apply_independent_pairs(template: &CompiledTemplate, slots: &mut [Option<String>]) {
    for pair in &template.independent_pairs {
        let end = pair.end.min(slots.len());
        let first = pair.first.min(end);
        let mut rendered = (first..end).filter(|&i| slots[i].is_some());
        let opening = rendered.next();
        let closing = rendered.last().or(opening);

        if let (Some(a), Some(b)) = (opening, closing) {
            if let Some(slot) = slots[a].as_mut() {
                slot.insert_str(0, &pair.open);
            }
            if let Some(slot) = slots[b].as_mut() {
                slot.push_str(&pair.close);
            }
            continue;
        }

        let Some(alternative) = pair.alternative() else {
            continue;
        };
        if let Some(i) = (0..first).rev().find(|&i| slots[i].is_some()) {
            if let Some(slot) = slots[i].as_mut() {
                slot.push_str(&alternative);
            }
        } else if let Some(i) = (end..slots.len()).find(|&i| slots[i].is_some()) {
            if let Some(slot) = slots[i].as_mut() {
                slot.insert_str(0, &alternative);
            }
        }
    }
}

/// Drop the first visible character of `text` when it repeats `previous`
/// punctuation, or is a full stop after `?` or `!`.
fn drop_repeated_lead(text: &mut String, previous: char) {
    let Some((index, lead)) = first_visible(text) else {
        return;
    };
    let repeats = PUNCTUATION.contains(&previous) && lead == previous;
    let absorbed = matches!(previous, '?' | '!') && lead == '.';
    if repeats || absorbed {
        text.remove(index);
    }
}

fn append_ultimate(text: &mut String, ultimate: &str) {
    let lead = ultimate.trim_start().chars().next();
    let last = last_visible(text.trim_end());
    let redundant = match (last, lead) {
        (Some(last), Some(lead)) => {
            (PUNCTUATION.contains(&lead) && last == lead)
                || (lead == '.' && matches!(last, '?' | '!'))
        }
        _ => false,
    };
    if !redundant {
        text.push_str(ultimate);
    }
}

/// First character that is not part of an inline marker, with its index.
fn first_visible(text: &str) -> Option<(usize, char)> {
    let mut pos = 0;
    while let Some((_, _, len)) = parse_marker(&text[pos..]) {
        pos += len;
    }
    text[pos..].chars().next().map(|c| (pos, c))
}

/// Last character that is not part of an inline marker.
fn last_visible(text: &str) -> Option<char> {
    let mut end = text.len();
    while text[..end].ends_with(']') {
        let Some(open) = text[..end].rfind('[') else {
            break;
        };
        match parse_marker(&text[open..end]) {
            Some((_, _, len)) if open + len == end => end = open,
            _ => break,
        }
    }
    text[..end].chars().next_back()
}

fn collapse_spaces(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c == ' ' && out.ends_with(' ') {
            continue;
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use bibformat_core::template::{compile, FieldSet};

    fn fields() -> FieldSet {
        FieldSet::new([
            "creator1",
            "title",
            "year1",
            "edition",
            "pages",
            "publisherName",
            "publisherLocation",
        ])
    }

    fn item(values: &[(&str, &str)]) -> Item {
        values.iter().copied().collect()
    }

    #[test]
    fn renders_fields_in_order() {
        let template = compile("creator1. |year1. |title.", &fields());
        let item = item(&[
            ("title", "Sapiens"),
            ("creator1", "Harari, Y. N."),
            ("year1", "2014"),
        ]);
        assert_eq!(
            render(&template, &item, &PluralFlags::new()),
            "Harari, Y. N. 2014. Sapiens."
        );
    }

    #[test]
    fn missing_field_contributes_nothing() {
        let template = compile("creator1. |year1. |title.", &fields());
        let item = item(&[("creator1", "Smith"), ("title", "Notes")]);
        assert_eq!(render(&template, &item, &PluralFlags::new()), "Smith. Notes.");
    }

    #[test]
    fn plural_marker_follows_flag() {
        let template = compile("^p.^pp.^pages|", &fields());
        let plural: PluralFlags = [("pages", true)].into_iter().collect();
        assert_eq!(
            render(&template, &item(&[("pages", "20-29")]), &plural),
            "pp.20-29"
        );
        assert_eq!(
            render(&template, &item(&[("pages", "20")]), &PluralFlags::new()),
            "p.20"
        );
    }

    #[test]
    fn dependent_text_looks_at_neighbours() {
        let template = compile("publisherLocation%: %. %|publisherName|.", &fields());
        let both = item(&[("publisherLocation", "London"), ("publisherName", "Verso")]);
        let alone = item(&[("publisherLocation", "London")]);
        assert_eq!(render(&template, &both, &PluralFlags::new()), "London: Verso.");
        assert_eq!(render(&template, &alone, &PluralFlags::new()), "London.");
    }

    #[test]
    fn dependent_pre_uses_alternative_without_previous_field() {
        let template = compile("creator1|%%In %title", &fields());
        let with = item(&[("creator1", "Smith"), ("title", "Essays")]);
        let without = item(&[("title", "Essays")]);
        assert_eq!(render(&template, &with, &PluralFlags::new()), "SmithEssays");
        assert_eq!(render(&template, &without, &PluralFlags::new()), "In Essays");
    }

    #[test]
    fn empty_pair_prints_no_brackets() {
        let template = compile("title| (|publisherName|year1|)|.", &fields());
        let bare = item(&[("title", "Essays")]);
        assert_eq!(render(&template, &bare, &PluralFlags::new()), "Essays.");

        let full = item(&[("title", "Essays"), ("year1", "1990")]);
        assert_eq!(render(&template, &full, &PluralFlags::new()), "Essays (1990).");
    }

    #[test]
    fn pair_alternative_attaches_to_neighbour() {
        let template = compile("title|%(%, n.d.%|year1|)|.", &fields());
        let bare = item(&[("title", "Essays")]);
        assert_eq!(render(&template, &bare, &PluralFlags::new()), "Essays, n.d.");
    }

    #[test]
    fn value_punctuation_absorbs_post() {
        let template = compile("creator1. |title.", &fields());
        let item = item(&[("creator1", "Smith, J."), ("title", "Why?")]);
        assert_eq!(render(&template, &item, &PluralFlags::new()), "Smith, J. Why?");
    }

    #[test]
    fn previous_punctuation_absorbs_pre() {
        let template = compile("[i]title[/i]|. edition edn", &fields());
        let item = item(&[("title", "What now?"), ("edition", "2nd")]);
        assert_eq!(
            render(&template, &item, &PluralFlags::new()),
            "[i]What now?[/i] 2nd edn"
        );
    }

    #[test]
    fn preliminary_text_without_fields() {
        let template = compile("Ibid|., pages|.", &fields());
        assert_eq!(render(&template, &Item::new(), &PluralFlags::new()), "Ibid.");
        assert_eq!(
            render(&template, &item(&[("pages", "4")]), &PluralFlags::new()),
            "Ibid., 4."
        );
    }

    #[test]
    fn nothing_rendered_is_empty() {
        let template = compile("creator1. |title|.", &fields());
        assert_eq!(render(&template, &Item::new(), &PluralFlags::new()), "");
    }

    #[test]
    fn rendering_is_repeatable() {
        let template = compile("creator1|%, %%year1", &fields());
        let item = item(&[("creator1", "Smith"), ("year1", "2001")]);
        let first = render(&template, &item, &PluralFlags::new());
        assert_eq!(first, render(&template, &item, &PluralFlags::new()));
        assert_eq!(first, "Smith, 2001");
    }
}
