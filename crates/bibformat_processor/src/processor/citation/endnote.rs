/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Endnote and footnote citations: a marker in the text, the citation in a
//! collated note.

use super::{
    resource_type, with_affixes, CitationSequencer, CitationVariant, DocumentOutput, Endnote,
    RenderedCitation,
};
use crate::render::{render, OutputFormat};
use crate::session::RenderSession;
use crate::values::{apply_occurrence, prepare_item, RenderContext};
use bibformat_core::options::{AmbiguityStrategy, EndnoteStyle, SameIdOrder};
use bibformat_core::{CitationOccurrence, Resource};

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

    for occurrence in occurrences {
        text.push_str(&occurrence.text_before);
        let Some(resource) = sequencer.resource(occurrence, &mut output.errors) else {
            session.repeat_mut().clear_last_citation();
            continue;
        };

        let variant = choose_variant(sequencer, occurrence, resource, session);
        let (id, new_note) = match options.endnote_style {
            EndnoteStyle::Incrementing | EndnoteStyle::Footnote => {
                (session.repeat_mut().next_endnote_id(), true)
            }
            EndnoteStyle::SameId => match options.same_id_order {
                SameIdOrder::FirstCitation => session.repeat_mut().endnote_id_for(&occurrence.id),
                SameIdOrder::Bibliography => {
                    let number = sequencer
                        .library
                        .position(&occurrence.id)
                        .map_or(0, |position| position + 1);
                    session
                        .repeat_mut()
                        .fixed_endnote_id(&occurrence.id, number)
                }
            },
        };

        let note = note_text(sequencer, occurrence, resource, variant, session);
        let note = filter.format(&with_affixes(note, occurrence));
        session
            .repeat_mut()
            .record_citation(&occurrence.id, occurrence.pages());
        tracing::trace!(id = %occurrence.id, note = id, ?variant, "endnote citation");

        text.push_str(&filter.format(&marker(sequencer, id)));
        if new_note {
            output.endnotes.push(Endnote {
                id,
                text: note.clone(),
            });
        }
        output.citations.push(RenderedCitation {
            resource_id: occurrence.id.clone(),
            text: note,
            variant,
            endnote_id: Some(id),
        });
    }

    output.endnotes.sort_by_key(|note| note.id);
    text.push_str(tail);
    if !output.endnotes.is_empty() {
        text.push_str("\n\n");
        let lines: Vec<String> = output
            .endnotes
            .iter()
            .map(|note| format!("{}. {}", note.id, note.text))
            .collect();
        text.push_str(&lines.join("\n"));
    }
    output.text = text;
    output
}

/// Ibid for the same resource and locator as the previous citation, idem
/// for the same resource with another locator, op. cit. for a resource
/// cited earlier. Incrementing notes never abbreviate. Otherwise the
/// ambiguous template, then a per-type replacement, then the base note.
fn choose_variant(
    sequencer: &CitationSequencer<'_>,
    occurrence: &CitationOccurrence,
    resource: &Resource,
    session: &RenderSession,
) -> CitationVariant {
    let templates = sequencer.compiled.citation();
    if sequencer.style.citation.endnote_style != EndnoteStyle::Incrementing {
        let repeat = session.repeat();
        let id = occurrence.id.as_str();
        let abbreviated = match repeat.repeats_last(id, occurrence.pages()) {
            Some(true) if templates.ibid.is_some() => Some(CitationVariant::Ibid),
            Some(false) if templates.idem.is_some() => Some(CitationVariant::Idem),
            None if repeat.was_cited(id) && templates.op_cit.is_some() => {
                Some(CitationVariant::OpCit)
            }
            _ => None,
        };
        if let Some(variant) = abbreviated {
            return variant;
        }
    }

    let ty = resource_type(occurrence, resource);
    if sequencer.style.citation.ambiguity == AmbiguityStrategy::Template
        && session.disambiguation().is_ambiguous(&occurrence.id)
        && templates.ambiguous.is_some()
    {
        CitationVariant::Ambiguous
    } else if sequencer.compiled.footnote_template(ty).is_none() && templates.for_type(ty).is_some()
    {
        CitationVariant::TypeReplacement
    } else {
        CitationVariant::Base
    }
}

/// The note for one citation. A base note uses the footnote template for
/// the resource type when the style has one.
fn note_text(
    sequencer: &CitationSequencer<'_>,
    occurrence: &CitationOccurrence,
    resource: &Resource,
    variant: CitationVariant,
    session: &RenderSession,
) -> String {
    let ty = resource_type(occurrence, resource);
    if variant == CitationVariant::Base {
        if let Some(template) = sequencer.compiled.footnote_template(ty) {
            let mut prepared = prepare_item(
                resource,
                sequencer.style,
                sequencer.compiled,
                RenderContext::Footnote,
            );
            apply_occurrence(
                &mut prepared,
                &occurrence.item,
                sequencer.style.citation.page_format,
            );
            if let Some(letter) = session.disambiguation().letter(&resource.id) {
                if let Some(year) = prepared.item.get("year1") {
                    let year = format!("{}{}", year, letter);
                    prepared.item.insert("year1", year);
                }
            }
            return render(template, &prepared.item, &prepared.plural);
        }
    }
    let prepared = sequencer.prepare(resource, occurrence, session);
    render(
        sequencer.template(variant, ty),
        &prepared.item,
        &prepared.plural,
    )
}

/// The in-text marker pointing at note `id`.
fn marker(sequencer: &CitationSequencer<'_>, id: usize) -> String {
    let marker = &sequencer.style.citation.endnote_marker;
    let text = format!("{}{}{}", marker.first_chars, id, marker.last_chars);
    if marker.superscript {
        format!("[sup]{}[/sup]", text)
    } else {
        text
    }
}
