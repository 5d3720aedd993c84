/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Compiled field templates.
//!
//! A template is a `|`-delimited string. Each segment holds at most one
//! field name with the literal text printed before (`pre`) and after
//! (`post`) it. Within `pre` and `post`:
//!
//! - `%A%` prints `A` only if the adjacent field exists (the previous field
//!   for `pre`, the next field for `post`); `%A%B%` prints `B` otherwise.
//! - `^S^P^` prints `S` or `P` depending on the field's plural flag.
//! - Backticks escape text that would otherwise be read as a field name and
//!   are removed.
//!
//! Segments with no field name are independent text: a leading one is
//! preliminary text, a trailing one is the ultimate punctuation, and the
//! rest bracket the fields between them and print only if one of those
//! fields does.

mod compiler;
mod lexer;


pub use compiler::compile;
pub use lexer::{lex, LexMode, Token, TokenKind};

use crate::error::CompileError;
use indexmap::IndexMap;
use std::collections::HashSet;

/// The field names a template may reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSet {
    /// Longest first, so that a longer name wins over its prefix.
    names: Vec<String>,
    lookup: HashSet<String>,
}

/// Fields understood by bibliography and footnote templates.
pub const BIBLIOGRAPHY_FIELDS: &[&str] = &[
    "creator1",
    "creator2",
    "creator3",
    "creator4",
    "creator5",
    "title",
    "shortTitle",
    "transTitle",
    "year1",
    "year2",
    "year3",
    "date",
    "pages",
    "edition",
    "volume",
    "issue",
    "number",
    "series",
    "seriesNumber",
    "collection",
    "collectionVolume",
    "publisherName",
    "publisherLocation",
    "institution",
    "medium",
    "genre",
    "runningTime",
    "isbn",
    "doi",
    "URL",
    "note",
    "id",
];

/// Fields understood by citation templates, on top of the resource's own.
pub const CITATION_FIELDS: &[&str] = &["creator", "year", "title", "shortTitle", "pages", "id"];

impl FieldSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = FieldSet::default();
        set.extend(names);
        set
    }

    /// The standard bibliographic field set.
    pub fn bibliography() -> Self {
        Self::new(BIBLIOGRAPHY_FIELDS.iter().copied())
    }

    /// Citation fields plus the bibliographic ones, so that per-type
    /// citation templates can reach any resource field.
    pub fn citation() -> Self {
        let mut set = Self::new(CITATION_FIELDS.iter().copied());
        set.extend(BIBLIOGRAPHY_FIELDS.iter().copied());
        set
    }

    pub fn extend<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            let name = name.into();
            if !name.is_empty() && self.lookup.insert(name.clone()) {
                self.names.push(name);
            }
        }
        self.names
            .sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup.contains(name)
    }

    /// Names, longest first.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// A piece of `pre` or `post` text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AffixPart {
    Text(String),
    /// Resolved from the field's dependent slot.
    Dependent,
    /// Resolved from the field's singular/plural slots.
    Plural,
}

/// Literal text around a field, with marker positions kept structurally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Affix(Vec<AffixPart>);

impl Affix {
    pub fn parts(&self) -> &[AffixPart] {
        &self.0
    }

    pub(crate) fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(AffixPart::Text(last)) = self.0.last_mut() {
            last.push_str(text);
        } else {
            self.0.push(AffixPart::Text(text.to_string()));
        }
    }

    pub(crate) fn push_marker(&mut self, part: AffixPart) {
        self.0.push(part);
    }

    /// The literal text alone, markers dropped.
    pub fn literal(&self) -> String {
        self.0
            .iter()
            .filter_map(|part| match part {
                AffixPart::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn has_marker(&self, marker: &AffixPart) -> bool {
        self.0.iter().any(|part| part == marker)
    }

    /// Substitute the markers with the chosen texts.
    pub fn resolve(&self, dependent: &str, plural: &str) -> String {
        let mut out = String::new();
        for part in &self.0 {
            match part {
                AffixPart::Text(text) => out.push_str(text),
                AffixPart::Dependent => out.push_str(dependent),
                AffixPart::Plural => out.push_str(plural),
            }
        }
        out
    }
}

/// Compiled form of one template segment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSpec {
    pub pre: Affix,
    pub post: Affix,
    /// Printed in `pre` when the previous field exists.
    pub dependent_pre: Option<String>,
    /// Printed in `pre` when the previous field is missing.
    pub dependent_pre_alt: Option<String>,
    /// Printed in `post` when the next field exists.
    pub dependent_post: Option<String>,
    /// Printed in `post` when the next field is missing.
    pub dependent_post_alt: Option<String>,
    pub singular: Option<String>,
    pub plural: Option<String>,
}

impl FieldSpec {
    /// Text for the dependent marker in `pre`.
    pub fn dependent_pre_text(&self, previous_exists: bool) -> &str {
        let chosen = if previous_exists {
            self.dependent_pre.as_deref()
        } else {
            self.dependent_pre_alt.as_deref()
        };
        chosen.unwrap_or_default()
    }

    /// Text for the dependent marker in `post`.
    pub fn dependent_post_text(&self, next_exists: bool) -> &str {
        let chosen = if next_exists {
            self.dependent_post.as_deref()
        } else {
            self.dependent_post_alt.as_deref()
        };
        chosen.unwrap_or_default()
    }

    /// Text for the singular/plural marker.
    pub fn plural_text(&self, plural: bool) -> &str {
        let chosen = if plural {
            self.plural.as_deref()
        } else {
            self.singular.as_deref()
        };
        chosen.unwrap_or_default()
    }
}

/// A bracketing pair of independent text.
///
/// `open` is attached before the first and `close` after the last rendered
/// field with an index in `first..end`. When none of them render, the
/// alternatives (if any) are attached to the nearest rendered neighbour.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndependentPair {
    pub open: String,
    pub open_alt: Option<String>,
    pub close: String,
    pub close_alt: Option<String>,
    /// Index of the first enclosed field.
    pub first: usize,
    /// One past the index of the last enclosed field.
    pub end: usize,
}

impl IndependentPair {
    /// The combined fallback text used when nothing inside renders.
    pub fn alternative(&self) -> Option<String> {
        let alt = format!(
            "{}{}",
            self.open_alt.as_deref().unwrap_or_default(),
            self.close_alt.as_deref().unwrap_or_default()
        );
        (!alt.is_empty()).then_some(alt)
    }
}

/// A template compiled against a field set.
///
/// Immutable once built; share it freely between renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompiledTemplate {
    /// Insertion order is template order.
    fields: IndexMap<String, FieldSpec>,
    pub preliminary_text: Option<String>,
    pub ultimate: Option<String>,
    pub independent_pairs: Vec<IndependentPair>,
    /// Anomalies found while compiling, all non-fatal.
    pub diagnostics: Vec<CompileError>,
}

impl CompiledTemplate {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.get(name)
    }

    /// Fields in template order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldSpec)> {
        self.fields.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.preliminary_text.is_none() && self.ultimate.is_none()
    }
}
