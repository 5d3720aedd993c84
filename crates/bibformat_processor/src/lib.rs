/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! bibformat processor
//!
//! Renders bibliographies and citations from a [`Style`](bibformat_core::Style)
//! and a [`Library`](bibformat_core::Library). Values are prepared per
//! render context, mapped onto compiled templates, and converted to an
//! output medium at the very end.
//!
//! # Example
//!
//! ```rust
//! use bibformat_core::{CitationDocument, CitationOccurrence, CreatorList, CreatorName, Library, Resource, Style};
//! use bibformat_processor::{Processor, RenderSession};
//!
//! let style_yaml = r#"
//! bibliography:
//!   primary:
//!     first-order: last-comma-first
//!   templates:
//!     book: "creator1. |year1. |title|."
//! citation:
//!   template: "creator |year"
//! "#;
//! let style = Style::from_yaml_str(style_yaml).unwrap();
//!
//! let library = Library::from(vec![Resource::new("kuhn1962", "book")
//!     .with_creators("creator1", CreatorList::from(vec![CreatorName::new("Kuhn", "Thomas")]))
//!     .with_field("year1", "1962")
//!     .with_field("title", "The Structure of Scientific Revolutions")]);
//!
//! let processor = Processor::new(style, library);
//! let mut session = RenderSession::new();
//!
//! let document = CitationDocument {
//!     citations: vec![CitationOccurrence::new("kuhn1962").with_text_before("See ")],
//!     tail: ".".to_string(),
//! };
//! let output = processor.render_document(&document, &mut session);
//! assert_eq!(output.text, "See (Kuhn 1962).");
//!
//! let entries = processor.render_bibliography(&mut session);
//! assert_eq!(entries[0].text, "Kuhn, Thomas. 1962. The Structure of Scientific Revolutions.");
//! ```

pub mod error;
pub mod io;
pub mod processor;
pub mod render;
pub mod session;
pub mod values;

pub use error::{ProcessorError, SequencerError};
pub use processor::{
    BibliographyProcessor, CitationSequencer, CitationVariant, DisambiguationState, Disambiguator,
    DocumentOutput, Endnote, Processor, RenderedCitation, RenderedEntry,
};
pub use render::{render, Html, OutputFormat, PlainText, Raw, Rtf};
pub use session::{RenderSession, RepeatState};
pub use values::{PreparedItem, RenderContext};
