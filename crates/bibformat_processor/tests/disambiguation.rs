/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

mod common;
use common::*;

use bibformat_core::{Library, Resource, Style};
use bibformat_processor::processor::citation::int_to_letter;
use bibformat_processor::{CitationVariant, Disambiguator, RenderSession};

// --- Helper Functions ---

fn build_style(ambiguity: &str, includes_title: bool) -> Style {
    style_from_yaml(&format!(
        r#"
bibliography:
  templates:
    book: "creator1. |year1. |title|."
citation:
  template: "creator |year"
  ambiguous-template: "creator, |title|, year"
  ambiguity: {ambiguity}
  ambiguity-includes-title: {includes_title}
"#
    ))
}

fn smith_library() -> Vec<Resource> {
    vec![
        make_book("alpha", "Smith", "Jane", "2004", "Alpha"),
        make_book("beta", "Smith", "Jane", "2004", "Beta"),
        make_book("gamma", "Smith", "Jane", "2005", "Gamma"),
    ]
}

// --- Year Letters ---

/// Test year suffix disambiguation in first-seen order.
#[test]
fn test_disambiguate_year_letters() {
    let processor = processor(build_style("year-letter", false), smith_library());
    let doc = document(
        vec![
            cite("beta", "First "),
            cite("alpha", ", then "),
            cite("gamma", ", finally "),
        ],
        ".",
    );
    let output = processor.render_document(&doc, &mut RenderSession::new());
    assert_eq!(
        output.text,
        "First (Smith 2004a), then (Smith 2004b), finally (Smith 2005)."
    );
}

/// Test that only cited works take part.
#[test]
fn test_disambiguate_uncited_work_is_ignored() {
    let processor = processor(build_style("year-letter", false), smith_library());
    let doc = document(vec![cite("alpha", "See ")], ".");
    let output = processor.render_document(&doc, &mut RenderSession::new());
    assert_eq!(output.text, "See (Smith 2004).");
}

/// Test that the title can tell works apart.
#[test]
fn test_disambiguate_title_in_identity() {
    let processor = processor(build_style("year-letter", true), smith_library());
    let doc = document(vec![cite("alpha", "See "), cite("beta", " and ")], ".");
    let output = processor.render_document(&doc, &mut RenderSession::new());
    assert_eq!(output.text, "See (Smith 2004) and (Smith 2004).");
}

/// Test the ambiguous template strategy.
#[test]
fn test_disambiguate_with_template() {
    let processor = processor(build_style("template", false), smith_library());
    let doc = document(
        vec![
            cite("alpha", "See "),
            cite("beta", " and "),
            cite("gamma", " but not "),
        ],
        ".",
    );
    let output = processor.render_document(&doc, &mut RenderSession::new());
    assert_eq!(
        output.text,
        "See (Smith, Alpha, 2004) and (Smith, Beta, 2004) but not (Smith 2005)."
    );
    assert_eq!(output.citations[0].variant, CitationVariant::Ambiguous);
    assert_eq!(output.citations[2].variant, CitationVariant::Base);
}

/// Test that the bibliography carries the letters of the document.
#[test]
fn test_disambiguate_bibliography_letters() {
    let processor = processor(build_style("year-letter", false), smith_library());
    let mut session = RenderSession::new();
    let doc = document(vec![cite("beta", "See "), cite("alpha", " and ")], ".");
    processor.render_document(&doc, &mut session);

    let entries = processor.render_bibliography(&mut session);
    let texts: Vec<&str> = entries.iter().map(|e| e.text.as_str()).collect();
    assert_eq!(
        texts,
        [
            "Smith, Jane. 2004b. Alpha.",
            "Smith, Jane. 2004a. Beta.",
            "Smith, Jane. 2005. Gamma.",
        ]
    );
}

/// Test library-wide disambiguation.
#[test]
fn test_disambiguate_library() {
    let style = build_style("year-letter", false);
    let library = Library::from(smith_library());
    let state = Disambiguator::new(&library, &style.citation).calculate_library();
    assert_eq!(state.letter("alpha"), Some("a"));
    assert_eq!(state.letter("beta"), Some("b"));
    assert_eq!(state.letter("gamma"), None);
    assert!(state.is_ambiguous("alpha"));
    assert!(!state.is_ambiguous("gamma"));
}

/// Test letters beyond z.
#[test]
fn test_letters_after_z() {
    assert_eq!(int_to_letter(26).as_deref(), Some("z"));
    assert_eq!(int_to_letter(27).as_deref(), Some("aa"));
    assert_eq!(int_to_letter(52).as_deref(), Some("az"));
    assert_eq!(int_to_letter(53).as_deref(), Some("ba"));
}
