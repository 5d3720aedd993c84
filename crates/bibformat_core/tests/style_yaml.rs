/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Golden tests over the embedded styles: how each shipped template
//! compiles, including which independent text becomes preliminary,
//! ultimate or a bracketing pair.

use bibformat_core::embedded::get_embedded_style;
use bibformat_core::options::{CitationMode, EndnoteStyle, NameOrder, PageFormat, RepeatPolicy};
use bibformat_core::{CompiledStyle, Style};

fn load(name: &str) -> Style {
    get_embedded_style(name).unwrap().unwrap()
}

fn names(style: &CompiledStyle, resource_type: &str) -> Vec<String> {
    style
        .bibliography_template(resource_type)
        .unwrap()
        .field_names()
        .map(str::to_string)
        .collect()
}

#[test]
fn author_date_options_deserialize() {
    let style = load("author-date");
    assert_eq!(style.citation.mode, CitationMode::InText);
    assert_eq!(style.bibliography.page_format, PageFormat::Expanded);
    assert_eq!(style.bibliography.primary.first_order, NameOrder::LastCommaFirst);
    assert_eq!(style.bibliography.primary.repeat, RepeatPolicy::Replace);
    assert_eq!(
        style.bibliography.primary.list.as_ref().map(|l| l.more_than),
        Some(5)
    );
    assert_eq!(style.citation.creators.first_order, NameOrder::LastOnly);
    assert_eq!(style.bibliography.fallback.as_deref(), Some("book"));
}

#[test]
fn author_date_templates_compile_cleanly() {
    let compiled = CompiledStyle::compile(&load("author-date"));
    assert_eq!(compiled.diagnostics().count(), 0);

    assert_eq!(
        names(&compiled, "book"),
        vec!["creator1", "year1", "title", "edition", "publisherLocation", "publisherName"]
    );
    let book = compiled.bibliography_template("book").unwrap();
    assert_eq!(book.ultimate.as_deref(), Some("."));
    assert_eq!(book.preliminary_text, None);
    assert!(book.independent_pairs.is_empty());

    let publisher = book.field("publisherName").unwrap();
    assert_eq!(publisher.dependent_pre.as_deref(), Some(": "));
    assert_eq!(publisher.dependent_pre_alt.as_deref(), Some(". "));
}

#[test]
fn author_date_chapter_markers() {
    let compiled = CompiledStyle::compile(&load("author-date"));
    let chapter = compiled.bibliography_template("book_chapter").unwrap();

    let editors = chapter.field("creator2").unwrap();
    assert_eq!(editors.pre.literal(), "In ");
    assert_eq!(editors.singular.as_deref(), Some("(ed.)"));

    let collection = chapter.field("collection").unwrap();
    assert_eq!(collection.dependent_pre.as_deref(), Some(""));
    assert_eq!(collection.dependent_pre_alt.as_deref(), Some("In "));

    let pages = chapter.field("pages").unwrap();
    assert_eq!(pages.plural.as_deref(), Some("pp."));
    assert_eq!(pages.pre.resolve("", "pp."), ", pp. ");
}

#[test]
fn unknown_types_fall_back_to_book() {
    let compiled = CompiledStyle::compile(&load("author-date"));
    assert_eq!(names(&compiled, "thesis"), names(&compiled, "book"));
}

#[test]
fn footnote_style_pairs_publication_details() {
    let style = load("footnote");
    assert_eq!(style.citation.mode, CitationMode::Endnote);
    assert_eq!(style.citation.endnote_style, EndnoteStyle::Footnote);

    let compiled = CompiledStyle::compile(&style);
    assert_eq!(compiled.diagnostics().count(), 0);

    let book = compiled.footnote_template("book").unwrap();
    assert_eq!(book.independent_pairs.len(), 1);
    let pair = &book.independent_pairs[0];
    assert_eq!((pair.open.as_str(), pair.close.as_str()), (" (", ")"));
    assert_eq!((pair.first, pair.end), (2, 5));
    assert_eq!(book.ultimate.as_deref(), Some("."));
}

#[test]
fn footnote_ibid_is_preliminary_text() {
    let compiled = CompiledStyle::compile(&load("footnote"));
    let ibid = compiled.citation().ibid.as_ref().unwrap();
    assert_eq!(ibid.preliminary_text.as_deref(), Some("Ibid"));
    assert_eq!(ibid.field_names().collect::<Vec<_>>(), vec!["pages"]);
    assert_eq!(ibid.ultimate.as_deref(), Some("."));
}

#[test]
fn styles_round_trip_through_json() {
    let style = load("footnote");
    let json = serde_json::to_string(&style).unwrap();
    assert_eq!(Style::from_json_str(&json).unwrap(), style);
}
