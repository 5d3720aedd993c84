use super::*;
use crate::error::SequencerError;
use crate::render::Raw;
use bibformat_core::embedded::get_embedded_style;
use bibformat_core::{CitationOccurrence, CreatorList, CreatorName, Resource};

fn embedded(name: &str) -> Style {
    get_embedded_style(name)
        .expect("style is embedded")
        .expect("embedded style parses")
}

fn book(id: &str, surname: &str, firstname: &str, year: &str, title: &str) -> Resource {
    Resource::new(id, "book")
        .with_creators(
            "creator1",
            CreatorList::from(vec![CreatorName::new(surname, firstname)]),
        )
        .with_field("year1", year)
        .with_field("title", title)
        .with_field("publisherLocation", "Chicago")
        .with_field("publisherName", "University of Chicago Press")
}

fn library() -> Library {
    Library::from(vec![
        book(
            "kuhn",
            "Kuhn",
            "Thomas",
            "1962",
            "The Structure of Scientific Revolutions",
        ),
        book("smith-a", "Smith", "Jane", "2004", "Alpha"),
        book("smith-b", "Smith", "Jane", "2004", "Beta"),
        book("doe", "Doe", "John", "2010", "Gamma"),
    ])
}

#[test]
fn author_date_bibliography_entry() {
    let processor = Processor::new(embedded("author-date"), library());
    let mut session = RenderSession::new();
    let kuhn = processor.library.get("kuhn").unwrap();

    let entry = processor
        .bibliography()
        .render_entry_with_format::<Raw>(kuhn, &mut session)
        .unwrap();
    assert_eq!(
        entry,
        "Kuhn, T. 1962. [i]The structure of scientific revolutions[/i]. Chicago: University of Chicago Press."
    );
}

#[test]
fn bibliography_without_document_disambiguates_library() {
    let processor = Processor::new(embedded("author-date"), library());
    let mut session = RenderSession::new();
    let entries = processor.render_bibliography(&mut session);

    let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["kuhn", "smith-a", "smith-b", "doe"]);
    assert!(entries[1].text.contains("2004a"));
    assert!(entries[2].text.contains("2004b"));
    assert!(!entries[3].text.contains("2010a"));
}

#[test]
fn repeated_creators_are_replaced() {
    let processor = Processor::new(embedded("author-date"), library());
    let mut session = RenderSession::new();
    let entries = processor.render_bibliography(&mut session);

    assert!(entries[1].text.starts_with("Smith, J. 2004a."));
    assert!(entries[2].text.starts_with("---. 2004b."));
}

#[test]
fn in_text_document() {
    let processor = Processor::new(embedded("author-date"), library());
    let mut session = RenderSession::new();
    let document = CitationDocument {
        citations: vec![
            CitationOccurrence::new("kuhn")
                .with_text_before("As argued ")
                .with_pages("12"),
            CitationOccurrence::new("smith-a").with_text_before(" and elsewhere "),
            CitationOccurrence::new("smith-b"),
            CitationOccurrence::new("doe"),
        ],
        tail: ".".to_string(),
    };

    let output = processor.render_document(&document, &mut session);
    assert_eq!(
        output.text,
        "As argued (Kuhn 1962: 12) and elsewhere (Smith 2004a, 2004b; Doe 2010)."
    );
    assert!(output.errors.is_empty());
    assert_eq!(output.citations.len(), 4);
    assert_eq!(output.citations[2].variant, CitationVariant::ConsecutiveCreator);
}

#[test]
fn bibliography_reuses_document_letters() {
    let processor = Processor::new(embedded("author-date"), library());
    let mut session = RenderSession::new();
    let document = CitationDocument {
        citations: vec![
            CitationOccurrence::new("smith-b").with_text_before("See "),
            CitationOccurrence::new("smith-a").with_text_before(" and "),
        ],
        tail: String::new(),
    };
    processor.render_document(&document, &mut session);

    let entries = processor.render_bibliography(&mut session);
    assert!(entries[1].text.contains("2004b"), "{}", entries[1].text);
    assert!(entries[2].text.contains("2004a"), "{}", entries[2].text);
}

#[test]
fn follow_creator_drops_the_name() {
    let processor = Processor::new(embedded("author-date"), library());
    let mut session = RenderSession::new();
    let document = CitationDocument {
        citations: vec![CitationOccurrence::new("kuhn")
            .with_text_before("Kuhn argues ")
            .with_pages("12")],
        tail: " that science shifts.".to_string(),
    };

    let output = processor.render_document(&document, &mut session);
    assert_eq!(output.text, "Kuhn argues (1962: 12) that science shifts.");
    assert_eq!(output.citations[0].variant, CitationVariant::FollowCreator);
}

#[test]
fn footnotes_abbreviate_repeated_citations() {
    let processor = Processor::new(embedded("footnote"), library());
    let mut session = RenderSession::new();
    let document = CitationDocument {
        citations: vec![
            CitationOccurrence::new("kuhn")
                .with_text_before("First.")
                .with_pages("12"),
            CitationOccurrence::new("kuhn")
                .with_text_before(" Same page.")
                .with_pages("12"),
            CitationOccurrence::new("kuhn")
                .with_text_before(" Other page.")
                .with_pages("15"),
            CitationOccurrence::new("doe").with_text_before(" Another work."),
            CitationOccurrence::new("kuhn")
                .with_text_before(" Back again.")
                .with_pages("20"),
        ],
        tail: String::new(),
    };

    let output = processor.render_document(&document, &mut session);
    let variants: Vec<CitationVariant> = output.citations.iter().map(|c| c.variant).collect();
    assert_eq!(
        variants,
        [
            CitationVariant::Base,
            CitationVariant::Ibid,
            CitationVariant::Idem,
            CitationVariant::Base,
            CitationVariant::OpCit,
        ]
    );

    let notes: Vec<&str> = output.endnotes.iter().map(|n| n.text.as_str()).collect();
    assert_eq!(
        notes[0],
        "Thomas Kuhn, The Structure of Scientific Revolutions (Chicago: University of Chicago Press, 1962), 12."
    );
    assert_eq!(notes[1], "Ibid., 12.");
    assert_eq!(notes[2], "Ibid., 15.");
    assert_eq!(notes[4], "Kuhn, op. cit., 20.");

    assert!(output.text.starts_with("First.1 Same page.2 Other page.3"));
    assert!(output.text.contains("\n\n1. Thomas Kuhn,"));
    assert!(output.text.ends_with("5. Kuhn, op. cit., 20."));
}

#[test]
fn unknown_resource_is_reported_and_skipped() {
    let processor = Processor::new(embedded("author-date"), library());
    let mut session = RenderSession::new();
    let document = CitationDocument {
        citations: vec![
            CitationOccurrence::new("missing").with_text_before("See "),
            CitationOccurrence::new("doe").with_text_before(" and "),
        ],
        tail: ".".to_string(),
    };

    let output = processor.render_document(&document, &mut session);
    assert_eq!(
        output.errors,
        [SequencerError::UnknownResource("missing".to_string())]
    );
    assert_eq!(output.text, "See  and (Doe 2010).");
}
