/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Core types for bibformat.
//!
//! This crate holds everything that is pure data: the style model that a
//! style author writes (per-type templates plus global formatting options),
//! the resource data model fed in by loaders, and the compiler that turns a
//! `|`-delimited template string into a [`CompiledTemplate`].
//!
//! Rendering lives in `bibformat_processor`.
//!
//! # Example
//!
//! ```rust
//! use bibformat_core::template::{compile, FieldSet};
//!
//! let fields = FieldSet::new(["author", "publicationYear", "title"]);
//! let template = compile("author. |publicationYear. |title.", &fields);
//! assert_eq!(template.len(), 3);
//! assert_eq!(template.field("author").unwrap().post.literal(), ". ");
//! ```

pub mod citation;
pub mod compiled;
pub mod embedded;
pub mod error;
pub mod item;
pub mod options;
pub mod template;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub use citation::{CitationDocument, CitationOccurrence};
pub use compiled::{CitationTemplates, CompiledStyle};
pub use error::StyleError;
pub use item::{CreatorList, CreatorName, Item, Library, PluralFlags, Resource};
pub use options::{BibliographyOptions, CitationOptions, CreatorRole, FootnoteOptions};
pub use template::{compile, CompiledTemplate, FieldSet, FieldSpec};

/// Reserved token standing in for an en-dash.
///
/// The core never emits medium-specific characters; output formats replace
/// this token with whatever their medium uses.
pub const NDASH_PLACEHOLDER: &str = "[ndash]";

/// Descriptive metadata for a style.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct StyleInfo {
    /// Human-readable style name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A complete style definition.
///
/// Styles are authored as YAML (or JSON) and deserialized as plain data;
/// templates stay raw strings until [`CompiledStyle::compile`] runs.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Style {
    #[serde(default)]
    pub info: StyleInfo,
    /// Bibliography templates and options.
    #[serde(default)]
    pub bibliography: BibliographyOptions,
    /// Footnote templates and creator bundles.
    #[serde(default)]
    pub footnote: FootnoteOptions,
    /// Citation templates and options.
    #[serde(default)]
    pub citation: CitationOptions,
}

impl Style {
    /// Parse a style from YAML.
    pub fn from_yaml_str(source: &str) -> Result<Self, StyleError> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Parse a style from JSON.
    pub fn from_json_str(source: &str) -> Result<Self, StyleError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Borrow the creator bundles keyed by [`CreatorRole`].
    pub fn creator_styles(&self) -> options::CreatorStyles<'_> {
        options::CreatorStyles {
            primary: &self.bibliography.primary,
            other: &self.bibliography.other,
            footnote_primary: &self.footnote.primary,
            footnote_other: &self.footnote.other,
            citation: &self.citation.creators,
        }
    }

    /// Per-type templates for the bibliography, in declaration order.
    pub fn bibliography_templates(&self) -> &IndexMap<String, String> {
        &self.bibliography.templates
    }
}
