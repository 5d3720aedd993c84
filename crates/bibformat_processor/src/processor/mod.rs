/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! The bibformat processor for rendering citations and bibliographies.
//!
//! ## Architecture
//!
//! The processor applies the style as written. Everything a style author
//! can express lives in the templates and options; the processor only
//! decides which template applies and feeds it prepared values.
//!
//! A document render is one pass: the [`CitationSequencer`] walks the
//! citations in order, then the [`BibliographyProcessor`] renders the
//! entries, reusing the disambiguation the sequencer left in the
//! [`RenderSession`].

pub mod bibliography;
pub mod citation;

#[cfg(test)]
mod tests;

pub use bibliography::{BibliographyProcessor, RenderedEntry};
pub use citation::{
    CitationSequencer, CitationVariant, DisambiguationState, Disambiguator, DocumentOutput,
    Endnote, RenderedCitation,
};

use crate::render::{OutputFormat, PlainText};
use crate::session::RenderSession;
use bibformat_core::{CitationDocument, CompiledStyle, Library, Style};

/// A style compiled once and bound to a library.
#[derive(Debug, Clone)]
pub struct Processor {
    pub style: Style,
    pub compiled: CompiledStyle,
    pub library: Library,
}

impl Processor {
    pub fn new(style: Style, library: Library) -> Self {
        let compiled = CompiledStyle::compile(&style);
        Self {
            style,
            compiled,
            library,
        }
    }

    pub fn bibliography(&self) -> BibliographyProcessor<'_> {
        BibliographyProcessor::new(&self.style, &self.compiled)
    }

    pub fn sequencer(&self) -> CitationSequencer<'_> {
        CitationSequencer::new(&self.style, &self.compiled, &self.library)
    }

    /// Render a document's citations as plain text.
    pub fn render_document(
        &self,
        document: &CitationDocument,
        session: &mut RenderSession,
    ) -> DocumentOutput {
        self.render_document_with_format::<PlainText>(document, session)
    }

    pub fn render_document_with_format<F: OutputFormat>(
        &self,
        document: &CitationDocument,
        session: &mut RenderSession,
    ) -> DocumentOutput {
        self.sequencer()
            .render_with_format::<F>(&document.citations, &document.tail, session)
    }

    /// Render the whole library, in library order, as plain text.
    pub fn render_bibliography(&self, session: &mut RenderSession) -> Vec<RenderedEntry> {
        self.render_bibliography_with_format::<PlainText>(session)
    }

    /// Render the whole library with `F`.
    ///
    /// A session that has seen no citations gets the library's own
    /// disambiguation, so works sharing creators and year still get
    /// letters.
    pub fn render_bibliography_with_format<F: OutputFormat>(
        &self,
        session: &mut RenderSession,
    ) -> Vec<RenderedEntry> {
        if session.disambiguation().is_empty() && !session.repeat().has_citations() {
            let state =
                Disambiguator::new(&self.library, &self.style.citation).calculate_library();
            session.set_disambiguation(state);
        }
        self.bibliography()
            .render_bibliography_with_format::<F, _>(self.library.iter(), session)
    }
}
