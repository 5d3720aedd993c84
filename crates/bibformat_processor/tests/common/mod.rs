/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

#![allow(dead_code)]

use bibformat_core::{
    embedded::get_embedded_style, CitationDocument, CitationOccurrence, CreatorList, CreatorName,
    Library, Resource, Style,
};
use bibformat_processor::Processor;

// --- Helper Functions for Test Data Construction ---

/// A book with one author.
pub fn make_book(id: &str, surname: &str, firstname: &str, year: &str, title: &str) -> Resource {
    make_book_multi_author(id, vec![(surname, firstname)], year, title)
}

/// A book with several authors, in order.
pub fn make_book_multi_author(
    id: &str,
    authors: Vec<(&str, &str)>,
    year: &str,
    title: &str,
) -> Resource {
    let creators: CreatorList = authors
        .into_iter()
        .map(|(surname, firstname)| CreatorName::new(surname, firstname))
        .collect();
    Resource::new(id, "book")
        .with_creators("creator1", creators)
        .with_field("year1", year)
        .with_field("title", title)
}

/// A journal article with page range.
pub fn make_article(
    id: &str,
    surname: &str,
    firstname: &str,
    year: &str,
    title: &str,
    journal: &str,
) -> Resource {
    Resource::new(id, "journal_article")
        .with_creators(
            "creator1",
            CreatorList::from(vec![CreatorName::new(surname, firstname)]),
        )
        .with_field("year1", year)
        .with_field("title", title)
        .with_field("collection", journal)
        .with_field("volume", "12")
        .with_field("issue", "3")
        .with_field("pageStart", "101")
        .with_field("pageEnd", "9")
}

/// Parse a style from inline YAML.
pub fn style_from_yaml(yaml: &str) -> Style {
    Style::from_yaml_str(yaml).expect("test style parses")
}

/// One of the styles shipped with the binary.
pub fn embedded_style(name: &str) -> Style {
    get_embedded_style(name)
        .expect("style is embedded")
        .expect("embedded style parses")
}

pub fn processor(style: Style, resources: Vec<Resource>) -> Processor {
    Processor::new(style, Library::from(resources))
}

/// A citation of `id` following `text_before`.
pub fn cite(id: &str, text_before: &str) -> CitationOccurrence {
    CitationOccurrence::new(id).with_text_before(text_before)
}

pub fn document(citations: Vec<CitationOccurrence>, tail: &str) -> CitationDocument {
    CitationDocument {
        citations,
        tail: tail.to_string(),
    }
}
