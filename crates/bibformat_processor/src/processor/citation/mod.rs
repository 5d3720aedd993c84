/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! The citation sequencer.
//!
//! Walks the citations of one document in order and decides, for each,
//! which template variant to render: the base template, or one of the
//! ambiguous, per-type, consecutive-creator, follow-creator, subsequent,
//! ibid, idem or op. cit. variants. State lives in the caller's
//! [`RenderSession`].

pub mod disambiguation;
mod endnote;
mod in_text;
pub mod sentence;

pub use disambiguation::{int_to_letter, DisambiguationState, Disambiguator};

use crate::error::SequencerError;
use crate::render::{OutputFormat, PlainText};
use crate::session::RenderSession;
use crate::values::{prepare_citation_item, PreparedItem};
use bibformat_core::options::CitationMode;
use bibformat_core::{
    CitationOccurrence, CompiledStyle, CompiledTemplate, Library, Resource, Style,
};

/// Which template a citation was rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CitationVariant {
    Base,
    Ambiguous,
    TypeReplacement,
    FollowCreator,
    ConsecutiveCreator,
    Subsequent,
    Ibid,
    Idem,
    OpCit,
}

/// One occurrence as rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCitation {
    pub resource_id: String,
    /// The citation text (in-text mode) or the note text (endnote mode).
    pub text: String,
    pub variant: CitationVariant,
    pub endnote_id: Option<usize>,
}

/// A collated endnote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endnote {
    pub id: usize,
    pub text: String,
}

/// A rendered document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentOutput {
    /// Prose with citations spliced in, followed by the endnotes if any.
    pub text: String,
    pub citations: Vec<RenderedCitation>,
    /// In collation order.
    pub endnotes: Vec<Endnote>,
    pub errors: Vec<SequencerError>,
}

/// Renders the citations of a document against a library.
pub struct CitationSequencer<'a> {
    style: &'a Style,
    compiled: &'a CompiledStyle,
    library: &'a Library,
}

impl<'a> CitationSequencer<'a> {
    pub fn new(style: &'a Style, compiled: &'a CompiledStyle, library: &'a Library) -> Self {
        Self {
            style,
            compiled,
            library,
        }
    }

    /// Render a document as plain text.
    ///
    /// Starts a new document in `session`; the disambiguation it computes
    /// stays in the session for a following bibliography.
    pub fn render(
        &self,
        occurrences: &[CitationOccurrence],
        tail: &str,
        session: &mut RenderSession,
    ) -> DocumentOutput {
        self.render_with_format::<PlainText>(occurrences, tail, session)
    }

    /// Render a document, converting citations and notes with `F`.
    ///
    /// Prose passes through untouched.
    pub fn render_with_format<F: OutputFormat>(
        &self,
        occurrences: &[CitationOccurrence],
        tail: &str,
        session: &mut RenderSession,
    ) -> DocumentOutput {
        session.new_document();
        let state = Disambiguator::new(self.library, &self.style.citation).calculate(occurrences);
        session.set_disambiguation(state);

        let mode = self.style.citation.mode;
        tracing::debug!(?mode, citations = occurrences.len(), "rendering document");
        match mode {
            CitationMode::InText => {
                in_text::render_document::<F>(self, occurrences, tail, session)
            }
            CitationMode::Endnote => {
                endnote::render_document::<F>(self, occurrences, tail, session)
            }
        }
    }

    /// Look up the cited resource, recording an error if there is none.
    fn resource(
        &self,
        occurrence: &CitationOccurrence,
        errors: &mut Vec<SequencerError>,
    ) -> Option<&'a Resource> {
        let resource = self.library.get(&occurrence.id);
        if resource.is_none() {
            tracing::warn!(id = %occurrence.id, "citation refers to unknown resource");
            errors.push(SequencerError::UnknownResource(occurrence.id.clone()));
        }
        resource
    }

    /// The citation item, with the disambiguation letter on its year.
    fn prepare(
        &self,
        resource: &Resource,
        occurrence: &CitationOccurrence,
        session: &RenderSession,
    ) -> PreparedItem {
        let mut prepared =
            prepare_citation_item(resource, &occurrence.item, self.style, self.compiled);
        if let Some(letter) = session.disambiguation().letter(&resource.id) {
            if let Some(year) = prepared.item.get("year") {
                let year = format!("{}{}", year, letter);
                prepared.item.insert("year", year);
            }
        }
        prepared
    }

    /// The template for `variant`, falling back to the base template.
    fn template(&self, variant: CitationVariant, resource_type: &str) -> &'a CompiledTemplate {
        let citation = self.compiled.citation();
        let chosen = match variant {
            CitationVariant::Base => None,
            CitationVariant::Ambiguous => citation.ambiguous.as_ref(),
            CitationVariant::TypeReplacement => citation.for_type(resource_type),
            CitationVariant::FollowCreator => citation.follow_creator.as_ref(),
            CitationVariant::ConsecutiveCreator => citation.consecutive_creator.as_ref(),
            CitationVariant::Subsequent => citation.subsequent.as_ref(),
            CitationVariant::Ibid => citation.ibid.as_ref(),
            CitationVariant::Idem => citation.idem.as_ref(),
            CitationVariant::OpCit => citation.op_cit.as_ref(),
        };
        chosen.unwrap_or(&citation.base)
    }
}

/// Resource type of an occurrence, preferring the occurrence's own.
fn resource_type<'r>(occurrence: &'r CitationOccurrence, resource: &'r Resource) -> &'r str {
    if occurrence.resource_type.is_empty() {
        &resource.resource_type
    } else {
        &occurrence.resource_type
    }
}

/// Attach the occurrence's pre- and post-text around a rendered citation.
fn with_affixes(text: String, occurrence: &CitationOccurrence) -> String {
    let mut out = text;
    if let Some(pre) = occurrence.pre_text.as_deref().filter(|t| !t.trim().is_empty()) {
        out = join_words(pre, &out);
    }
    if let Some(post) = occurrence.post_text.as_deref().filter(|t| !t.trim().is_empty()) {
        out = join_words(&out, post);
    }
    out
}

fn join_words(left: &str, right: &str) -> String {
    if left.is_empty() || right.is_empty() {
        return format!("{}{}", left, right);
    }
    if left.ends_with(char::is_whitespace) || right.starts_with(char::is_whitespace) {
        format!("{}{}", left, right)
    } else {
        format!("{} {}", left, right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn affixes_are_joined_with_a_space() {
        let occurrence = CitationOccurrence::new("a")
            .with_pre_text("see")
            .with_post_text("for details");
        assert_eq!(
            with_affixes("Smith 2004".to_string(), &occurrence),
            "see Smith 2004 for details"
        );

        let spaced = CitationOccurrence::new("a").with_pre_text("cf. ");
        assert_eq!(with_affixes("Smith".to_string(), &spaced), "cf. Smith");
    }

    #[test]
    fn empty_citation_text_takes_affixes_verbatim() {
        let occurrence = CitationOccurrence::new("a").with_pre_text("see");
        assert_eq!(with_affixes(String::new(), &occurrence), "see");
    }
}
