/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! In-text citations: `(Smith 2004: 12; Doe 2010)`.

use super::sentence::{find_mention, sentence_start};
use super::{
    resource_type, with_affixes, CitationSequencer, CitationVariant, DocumentOutput,
    RenderedCitation,
};
use crate::render::{render, OutputFormat};
use crate::session::RenderSession;
use bibformat_core::options::AmbiguityStrategy;
use bibformat_core::{CitationOccurrence, Resource};

/// One rendered member of a citation group.
struct Member {
    text: String,
    lead: Option<String>,
}

pub(super) fn render_document<F: OutputFormat>(
    sequencer: &CitationSequencer<'_>,
    occurrences: &[CitationOccurrence],
    tail: &str,
    session: &mut RenderSession,
) -> DocumentOutput {
    let filter = F::default();
    let options = &sequencer.style.citation;
    let mut output = DocumentOutput::default();
    let mut text = String::new();
    // Prose only, citations left out, for the same-sentence search.
    let mut prose = String::new();

    let mut start = 0;
    while start < occurrences.len() {
        let mut end = start + 1;
        while end < occurrences.len() && occurrences[end].text_before.trim().is_empty() {
            end += 1;
        }
        let group = &occurrences[start..end];
        start = end;

        // Blank text before later members is not written out.
        let text_before = &group[0].text_before;
        text.push_str(text_before);
        prose.push_str(text_before);
        let sentence_from = sentence_start(&prose);
        let current_from = prose.len() - text_before.len();

        let mut members: Vec<Member> = Vec::new();
        // Locators moved next to a mention, keyed by prose offset.
        let mut splits: Vec<(usize, String)> = Vec::new();
        for occurrence in group {
            let Some(resource) = sequencer.resource(occurrence, &mut output.errors) else {
                continue;
            };
            let lead = lead_creators(occurrence, resource);
            let mention = lead_surname(resource)
                .and_then(|surname| find_mention(&prose[sentence_from..], surname))
                .map(|range| sentence_from + range.end);

            let previous_lead = members.last().and_then(|m| m.lead.as_deref());
            let consecutive = lead.is_some() && previous_lead == lead.as_deref();
            let variant = choose_variant(
                sequencer,
                occurrence,
                resource,
                session,
                consecutive,
                mention.is_some(),
            );

            let mut prepared = sequencer.prepare(resource, occurrence, session);
            if variant == CitationVariant::FollowCreator && options.follow_creator_page_split {
                if let Some(at) = mention.filter(|at| *at >= current_from) {
                    if let Some(pages) = prepared.item.remove("pages") {
                        let split =
                            format!(" {}{}{}", options.first_chars, pages, options.last_chars);
                        splits.push((at, filter.format(&split)));
                    }
                }
            }

            let template = sequencer.template(variant, resource_type(occurrence, resource));
            let rendered = render(template, &prepared.item, &prepared.plural);
            let rendered = with_affixes(rendered, occurrence);
            session
                .repeat_mut()
                .record_citation(&occurrence.id, occurrence.pages());
            tracing::trace!(id = %occurrence.id, ?variant, "in-text citation");

            output.citations.push(RenderedCitation {
                resource_id: occurrence.id.clone(),
                text: filter.format(&rendered),
                variant,
                endnote_id: None,
            });
            if !rendered.trim().is_empty() {
                members.push(Member { text: rendered, lead });
            }
        }

        // This group's prose ends both strings, so offsets map by a constant
        // shift. Insert right to left.
        let shift = text.len() - prose.len();
        splits.sort_by_key(|(at, _)| *at);
        for (at, split) in splits.into_iter().rev() {
            text.insert_str(shift + at, &split);
        }

        if members.is_empty() {
            continue;
        }
        let mut joined = String::new();
        for (index, member) in members.iter().enumerate() {
            if index > 0 {
                let same_lead =
                    member.lead.is_some() && member.lead == members[index - 1].lead;
                joined.push_str(if same_lead {
                    &options.consecutive_creator_sep
                } else {
                    &options.consecutive_citation_sep
                });
            }
            joined.push_str(&member.text);
        }
        let group_text = format!("{}{}{}", options.first_chars, joined, options.last_chars);
        text.push_str(&filter.format(&group_text));
    }

    text.push_str(tail);
    output.text = text;
    output
}

/// Variant precedence: ambiguous, per-type replacement, consecutive
/// creator, follow creator, subsequent, base. A variant applies only when
/// the style defines its template.
fn choose_variant(
    sequencer: &CitationSequencer<'_>,
    occurrence: &CitationOccurrence,
    resource: &Resource,
    session: &RenderSession,
    consecutive: bool,
    mentioned: bool,
) -> CitationVariant {
    let options = &sequencer.style.citation;
    let templates = sequencer.compiled.citation();
    let id = occurrence.id.as_str();

    if options.ambiguity == AmbiguityStrategy::Template
        && session.disambiguation().is_ambiguous(id)
        && templates.ambiguous.is_some()
    {
        CitationVariant::Ambiguous
    } else if templates
        .for_type(resource_type(occurrence, resource))
        .is_some()
    {
        CitationVariant::TypeReplacement
    } else if consecutive && templates.consecutive_creator.is_some() {
        CitationVariant::ConsecutiveCreator
    } else if mentioned && templates.follow_creator.is_some() {
        CitationVariant::FollowCreator
    } else if session.repeat().was_cited(id) && templates.subsequent.is_some() {
        CitationVariant::Subsequent
    } else {
        CitationVariant::Base
    }
}

/// Identity of the lead creators, used to detect consecutive citations of
/// the same creators.
fn lead_creators(occurrence: &CitationOccurrence, resource: &Resource) -> Option<String> {
    if !occurrence.creator_ids.is_empty() {
        return Some(occurrence.creator_ids.clone());
    }
    resource
        .primary_creators()
        .map(|creators| creators.ids_key())
        .filter(|key| !key.is_empty())
}

fn lead_surname(resource: &Resource) -> Option<&str> {
    resource
        .primary_creators()
        .and_then(|creators| creators.first())
        .map(|creator| creator.surname.as_str())
}
