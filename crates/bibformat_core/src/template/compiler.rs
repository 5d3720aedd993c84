/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use super::lexer::{lex, LexMode, Token, TokenKind};
use super::{AffixPart, CompiledTemplate, FieldSet, FieldSpec, IndependentPair};
use crate::error::CompileError;
use std::ops::Range;

/// A segment with no field in it, remembered with the number of fields
/// compiled before it.
#[derive(Debug)]
struct Independent {
    position: usize,
    text: String,
    alt: Option<String>,
}

impl Independent {
    /// A segment that is exactly `%A%B%` carries `B` as the text to use when
    /// nothing it brackets renders.
    fn parse(segment: &str, position: usize) -> Self {
        let tokens = lex(segment, LexMode::Affix);
        if let [Token {
            kind: TokenKind::Dependent {
                primary,
                alternative,
            },
            ..
        }] = tokens.as_slice()
        {
            return Self {
                position,
                text: unescape(primary),
                alt: alternative.as_deref().map(unescape),
            };
        }
        Self {
            position,
            text: unescape(segment),
            alt: None,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Side {
    Pre,
    Post,
}

/// Compile one template string against the fields valid for its resource
/// type.
///
/// Never fails: anomalies are recorded in
/// [`CompiledTemplate::diagnostics`] and the offending text is kept
/// literally.
pub fn compile(template: &str, valid_fields: &FieldSet) -> CompiledTemplate {
    let mut compiled = CompiledTemplate::default();
    if template.trim().is_empty() {
        return compiled;
    }

    let segments: Vec<&str> = template.split('|').filter(|s| !s.is_empty()).collect();
    let last_index = segments.len().saturating_sub(1);
    let mut leading: Option<Independent> = None;
    let mut queue: Vec<Independent> = Vec::new();
    let mut trailing: Option<String> = None;

    for (index, segment) in segments.iter().enumerate() {
        let position = compiled.fields.len();
        let Some((range, name)) = find_field(segment, valid_fields) else {
            let independent = Independent::parse(segment, position);
            if position == 0 {
                if leading.is_none() {
                    leading = Some(independent);
                } else {
                    compiled
                        .diagnostics
                        .push(CompileError::IgnoredLeadingText(independent.text));
                }
            } else if index == last_index && queue.len() % 2 == 0 {
                trailing = Some(independent.text);
            } else {
                queue.push(independent);
            }
            continue;
        };

        let spec = build_field_spec(segment, range, &name, &mut compiled.diagnostics);
        if compiled.fields.contains_key(&name) {
            compiled
                .diagnostics
                .push(CompileError::DuplicateField(name.clone()));
        }
        compiled.fields.insert(name, spec);
    }

    if compiled.fields.is_empty() {
        compiled.diagnostics.push(CompileError::NoRecognizedField);
        let text: String = segments.iter().map(|s| unescape(s)).collect();
        compiled.preliminary_text = (!text.is_empty()).then_some(text);
        return compiled;
    }

    resolve_independent(&mut compiled, leading, queue, trailing);

    for diagnostic in &compiled.diagnostics {
        tracing::debug!(template, %diagnostic, "template compiled with anomaly");
    }
    compiled
}

/// Decide which independent segments are preliminary text, which are the
/// ultimate punctuation and which bracket fields.
///
/// The branches follow the legacy style format: three segments with one at
/// the very start make that one preliminary; three with one at the very end
/// make the last one ultimate; an even count touching both ends gives up
/// both ends; any odd remainder gives up its first segment if that is at
/// the start, otherwise its last.
fn resolve_independent(
    compiled: &mut CompiledTemplate,
    leading: Option<Independent>,
    mut queue: Vec<Independent>,
    trailing: Option<String>,
) {
    let field_count = compiled.fields.len();
    let mut preliminary: Option<String> = None;
    let mut ultimate: Option<String> = None;

    if let Some(lead) = leading {
        if queue.is_empty() {
            preliminary = Some(lead.text);
        } else {
            queue.insert(0, lead);
        }
    }

    if queue.len() == 3 && queue[0].position == 0 {
        preliminary = Some(queue.remove(0).text);
    } else if queue.len() == 3 && at(&queue, field_count) {
        ultimate = queue.pop().map(|i| i.text);
    } else if !queue.is_empty()
        && queue.len() % 2 == 0
        && at(&queue, 0)
        && at(&queue, field_count)
    {
        preliminary = Some(queue.remove(0).text);
        ultimate = queue.pop().map(|i| i.text);
    }

    if queue.len() % 2 == 1 {
        if at(&queue, 0) {
            preliminary = Some(queue.remove(0).text);
        } else {
            ultimate = queue.pop().map(|i| i.text);
        }
    }

    if let Some(text) = trailing {
        if ultimate.is_none() {
            ultimate = Some(text);
        } else {
            compiled
                .diagnostics
                .push(CompileError::DiscardedIndependent(text));
        }
    }

    let mut pending = queue.into_iter();
    while let (Some(open), Some(close)) = (pending.next(), pending.next()) {
        if close.position <= open.position {
            compiled.diagnostics.push(CompileError::EmptyIndependentPair {
                open: open.text.clone(),
                close: close.text.clone(),
            });
        }
        compiled.independent_pairs.push(IndependentPair {
            first: open.position,
            end: close.position,
            open: open.text,
            open_alt: open.alt,
            close: close.text,
            close_alt: close.alt,
        });
    }

    compiled.preliminary_text = preliminary.filter(|t| !t.is_empty());
    compiled.ultimate = ultimate.filter(|t| !t.is_empty());
}

fn at(queue: &[Independent], position: usize) -> bool {
    queue.iter().any(|i| i.position == position)
}

/// Leftmost valid field name outside escapes and plural markers, not
/// touching a letter or backtick on either side. At a given position the
/// longest name wins.
fn find_field(segment: &str, fields: &FieldSet) -> Option<(Range<usize>, String)> {
    for token in lex(segment, LexMode::Segment).iter().filter(|t| t.is_text()) {
        let TokenKind::Text(text) = &token.kind else {
            continue;
        };
        for (offset, _) in text.char_indices() {
            let rest = &text[offset..];
            for name in fields.names() {
                if !rest.starts_with(name) {
                    continue;
                }
                let start = token.span.start + offset;
                let end = start + name.len();
                if is_boundary(segment[..start].chars().next_back())
                    && is_boundary(segment[end..].chars().next())
                {
                    return Some((start..end, name.to_string()));
                }
            }
        }
    }
    None
}

fn is_boundary(neighbour: Option<char>) -> bool {
    neighbour.map_or(true, |c| !c.is_alphabetic() && c != '`')
}

fn build_field_spec(
    segment: &str,
    range: Range<usize>,
    name: &str,
    diagnostics: &mut Vec<CompileError>,
) -> FieldSpec {
    let mut spec = FieldSpec::default();
    build_affix(&segment[..range.start], Side::Pre, name, &mut spec, diagnostics);
    build_affix(&segment[range.end..], Side::Post, name, &mut spec, diagnostics);
    spec
}

fn build_affix(
    raw: &str,
    side: Side,
    name: &str,
    spec: &mut FieldSpec,
    diagnostics: &mut Vec<CompileError>,
) {
    let mut affix = super::Affix::default();
    for token in lex(raw, LexMode::Affix) {
        match token.kind {
            TokenKind::Text(text) | TokenKind::Escaped(text) => affix.push_text(&text),
            TokenKind::Unterminated(marker) => {
                affix.push_text(&marker.to_string());
                diagnostics.push(if marker == '%' {
                    CompileError::UnterminatedDependent(raw.to_string())
                } else {
                    CompileError::UnterminatedPlural(raw.to_string())
                });
            }
            TokenKind::Dependent {
                primary,
                alternative,
            } => {
                let (slot, alt_slot) = match side {
                    Side::Pre => (&mut spec.dependent_pre, &mut spec.dependent_pre_alt),
                    Side::Post => (&mut spec.dependent_post, &mut spec.dependent_post_alt),
                };
                if slot.is_none() {
                    *slot = Some(unescape(&primary));
                    *alt_slot = alternative.as_deref().map(unescape);
                    affix.push_marker(AffixPart::Dependent);
                } else {
                    affix.push_text(&unescape(&raw[token.span]));
                    diagnostics.push(CompileError::DuplicateMarker {
                        field: name.to_string(),
                        marker: "dependent",
                    });
                }
            }
            TokenKind::Plural { singular, plural } => {
                if spec.singular.is_none() && spec.plural.is_none() {
                    spec.singular = Some(unescape(&singular));
                    spec.plural = Some(unescape(&plural));
                    affix.push_marker(AffixPart::Plural);
                } else {
                    affix.push_text(&unescape(&raw[token.span]));
                    diagnostics.push(CompileError::DuplicateMarker {
                        field: name.to_string(),
                        marker: "singular/plural",
                    });
                }
            }
        }
    }
    match side {
        Side::Pre => spec.pre = affix,
        Side::Post => spec.post = affix,
    }
}

fn unescape(text: &str) -> String {
    text.replace('`', "")
}
