/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

mod common;
use common::*;

use bibformat_core::{CitationOccurrence, Resource, Style};
use bibformat_processor::{CitationVariant, Html, RenderSession};

// --- Helper Functions ---

fn build_in_text_style() -> Style {
    style_from_yaml(
        r#"
info:
  name: In-text test
citation:
  mode: in-text
  template: "creator |year|: pages"
  follow-creator-template: "year|: pages"
  follow-creator-page-split: true
  consecutive-creator-template: "year|: pages"
  subsequent-template: "creator|: pages"
  type-templates:
    film: "[i]title[/i] |year"
"#,
    )
}

fn library() -> Vec<Resource> {
    vec![
        make_book("kuhn", "Kuhn", "Thomas", "1962", "Revolutions"),
        make_book("doe", "Doe", "John", "2010", "Gamma"),
        make_book("doe-b", "Doe", "John", "2012", "Delta"),
        Resource::new("metropolis", "film")
            .with_field("title", "Metropolis")
            .with_field("year1", "1927"),
    ]
}

// --- Basic Citations ---

/// Test a single citation with a page locator.
#[test]
fn test_basic_citation() {
    let processor = processor(build_in_text_style(), library());
    let doc = document(
        vec![cite("kuhn", "As argued elsewhere ").with_pages("12")],
        ".",
    );
    let output = processor.render_document(&doc, &mut RenderSession::new());
    assert_eq!(output.text, "As argued elsewhere (Kuhn 1962: 12).");
    assert_eq!(output.citations[0].text, "Kuhn 1962: 12");
    assert_eq!(output.citations[0].variant, CitationVariant::Base);
}

/// Test that pre- and post-text surround the citation inside the brackets.
#[test]
fn test_pre_and_post_text() {
    let processor = processor(build_in_text_style(), library());
    let doc = document(
        vec![cite("doe", "This holds ")
            .with_pre_text("see")
            .with_post_text("passim")],
        ".",
    );
    let output = processor.render_document(&doc, &mut RenderSession::new());
    assert_eq!(output.text, "This holds (see Doe 2010 passim).");
}

/// Test that per-type templates replace the base template.
#[test]
fn test_type_replacement() {
    let processor = processor(build_in_text_style(), library());
    let doc = document(vec![cite("metropolis", "The film ")], " is silent.");
    let output = processor.render_document(&doc, &mut RenderSession::new());
    assert_eq!(output.text, "The film (Metropolis 1927) is silent.");
    assert_eq!(output.citations[0].variant, CitationVariant::TypeReplacement);
}

// --- Grouping ---

/// Test that adjacent citations share one pair of brackets.
#[test]
fn test_grouped_citations() {
    let processor = processor(build_in_text_style(), library());
    let doc = document(
        vec![
            cite("kuhn", "Several authors agree "),
            cite("doe", ""),
            cite("doe-b", " "),
        ],
        ".",
    );
    let output = processor.render_document(&doc, &mut RenderSession::new());
    assert_eq!(
        output.text,
        "Several authors agree (Kuhn 1962; Doe 2010, 2012)."
    );
    assert_eq!(
        output.citations[2].variant,
        CitationVariant::ConsecutiveCreator
    );
}

// --- Same-Sentence Creators ---

/// Test that a creator named in the sentence is not repeated, and the
/// locator moves next to the name.
#[test]
fn test_follow_creator_page_split() {
    let processor = processor(build_in_text_style(), library());
    let doc = document(
        vec![cite("kuhn", "As Kuhn argues, science shifts ").with_pages("12")],
        ".",
    );
    let output = processor.render_document(&doc, &mut RenderSession::new());
    assert_eq!(output.text, "As Kuhn (12) argues, science shifts (1962).");
    assert_eq!(output.citations[0].variant, CitationVariant::FollowCreator);
}

/// Test that each locator lands after its own creator when one group
/// splits several, including around non-ASCII names.
#[test]
fn test_page_split_for_several_creators() {
    let processor = processor(
        build_in_text_style(),
        vec![
            make_book("muller", "Müller", "Anna", "2004", "Alpha"),
            make_book("jones", "Jones", "Beth", "2010", "Beta"),
        ],
    );
    let doc = document(
        vec![
            cite("jones", "Müller and Jones argue ").with_pages("5"),
            cite("muller", "").with_pages("7"),
        ],
        ".",
    );
    let output = processor.render_document(&doc, &mut RenderSession::new());
    assert_eq!(output.text, "Müller (7) and Jones (5) argue (2010; 2004).");
    assert_eq!(output.citations[1].variant, CitationVariant::FollowCreator);
}

/// Test that whitespace-only text before a grouped citation is not
/// written out; the group's brackets and separators take its place.
#[test]
fn test_group_drops_whitespace_text_before() {
    let processor = processor(build_in_text_style(), library());
    let doc = document(
        vec![cite("kuhn", "Compare "), cite("metropolis", "  \n")],
        ".",
    );
    let output = processor.render_document(&doc, &mut RenderSession::new());
    assert_eq!(output.text, "Compare (Kuhn 1962; Metropolis 1927).");
}

/// Test that a name in an earlier sentence does not count.
#[test]
fn test_creator_in_previous_sentence() {
    let processor = processor(build_in_text_style(), library());
    let doc = document(
        vec![cite("kuhn", "Kuhn was right. Later work agrees ")],
        ".",
    );
    let output = processor.render_document(&doc, &mut RenderSession::new());
    assert_eq!(output.text, "Kuhn was right. Later work agrees (Kuhn 1962).");
}

/// Test that a possessive name counts as a mention.
#[test]
fn test_possessive_mention() {
    let processor = processor(build_in_text_style(), library());
    let doc = document(vec![cite("doe", "In Doe's view ")], ".");
    let output = processor.render_document(&doc, &mut RenderSession::new());
    assert_eq!(output.text, "In Doe's view (2010).");
}

// --- Subsequent Citations ---

/// Test the subsequent template for a resource already cited.
#[test]
fn test_subsequent_citation() {
    let processor = processor(build_in_text_style(), library());
    let doc = document(
        vec![
            cite("kuhn", "First ").with_pages("1"),
            cite("doe", ", then "),
            cite("kuhn", ", and again ").with_pages("30"),
        ],
        ".",
    );
    let output = processor.render_document(&doc, &mut RenderSession::new());
    assert_eq!(
        output.text,
        "First (Kuhn 1962: 1), then (Doe 2010), and again (Kuhn: 30)."
    );
    assert_eq!(output.citations[2].variant, CitationVariant::Subsequent);
}

/// Test that a new document forgets earlier citations.
#[test]
fn test_session_resets_between_documents() {
    let processor = processor(build_in_text_style(), library());
    let doc = document(vec![cite("kuhn", "See ")], ".");
    let mut session = RenderSession::new();

    let first = processor.render_document(&doc, &mut session);
    let second = processor.render_document(&doc, &mut session);
    assert_eq!(first.text, "See (Kuhn 1962).");
    assert_eq!(first, second);
}

// --- Output Formats ---

/// Test that citations are converted but prose passes through.
#[test]
fn test_html_citation() {
    let processor = processor(build_in_text_style(), library());
    let doc = document(
        vec![
            CitationOccurrence::new("metropolis").with_text_before("<p>Lang's film "),
        ],
        "</p>",
    );
    let output = processor.render_document_with_format::<Html>(&doc, &mut RenderSession::new());
    assert_eq!(
        output.text,
        "<p>Lang's film (<em>Metropolis</em> 1927)</p>"
    );
}
