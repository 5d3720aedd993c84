/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use super::creators::CreatorStyle;
use super::numbers::PageFormat;
use super::titles::TitleCapitalization;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum CitationMode {
    #[default]
    InText,
    Endnote,
}

/// How endnote ids are assigned.
#[derive(Debug, Default, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum EndnoteStyle {
    /// Every citation gets the next id.
    #[default]
    Incrementing,
    /// Every resource keeps the id of its first citation.
    SameId,
    /// Every citation gets its own note, with ibid/idem/op. cit. handling.
    Footnote,
}

/// Order of endnotes under [`EndnoteStyle::SameId`].
#[derive(Debug, Default, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SameIdOrder {
    #[default]
    FirstCitation,
    /// Order of the library.
    Bibliography,
}

/// How works sharing creators and year are told apart.
#[derive(Debug, Default, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum AmbiguityStrategy {
    /// Append a, b, c, ... to the year.
    #[default]
    YearLetter,
    /// Use `ambiguous-template`.
    Template,
}

/// The in-text marker pointing at an endnote.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct EndnoteMarker {
    pub first_chars: String,
    pub last_chars: String,
    pub superscript: bool,
}

impl Default for EndnoteMarker {
    fn default() -> Self {
        Self {
            first_chars: String::new(),
            last_chars: String::new(),
            superscript: true,
        }
    }
}

/// Citation templates and options.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CitationOptions {
    pub mode: CitationMode,
    pub endnote_style: EndnoteStyle,
    pub same_id_order: SameIdOrder,
    pub creators: CreatorStyle,
    pub title_capitalization: TitleCapitalization,
    pub page_format: PageFormat,

    /// Base template.
    pub template: String,
    /// Used when the lead creator is already named in the same sentence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_creator_template: Option<String>,
    /// Move the page locator next to the creator named in the sentence.
    pub follow_creator_page_split: bool,
    /// Used for the second of two grouped citations with the same creator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consecutive_creator_template: Option<String>,
    /// Used for later citations of a resource already cited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subsequent_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ambiguous_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ibid_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idem_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub op_cit_template: Option<String>,
    /// Replacement templates per resource type.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub type_templates: IndexMap<String, String>,

    pub first_chars: String,
    pub last_chars: String,
    /// Between grouped citations.
    pub consecutive_citation_sep: String,
    /// Between grouped citations sharing the lead creator.
    pub consecutive_creator_sep: String,

    pub ambiguity: AmbiguityStrategy,
    /// Include the title in the ambiguity identity.
    pub ambiguity_includes_title: bool,

    pub endnote_marker: EndnoteMarker,
}

impl Default for CitationOptions {
    fn default() -> Self {
        Self {
            mode: CitationMode::InText,
            endnote_style: EndnoteStyle::Incrementing,
            same_id_order: SameIdOrder::FirstCitation,
            creators: CreatorStyle {
                first_order: super::creators::NameOrder::LastOnly,
                other_order: super::creators::NameOrder::LastOnly,
                sep_next_last: " and ".to_string(),
                ..Default::default()
            },
            title_capitalization: TitleCapitalization::AsEntered,
            page_format: PageFormat::AsEntered,
            template: "creator |year|: pages".to_string(),
            follow_creator_template: None,
            follow_creator_page_split: false,
            consecutive_creator_template: None,
            subsequent_template: None,
            ambiguous_template: None,
            ibid_template: None,
            idem_template: None,
            op_cit_template: None,
            type_templates: IndexMap::new(),
            first_chars: "(".to_string(),
            last_chars: ")".to_string(),
            consecutive_citation_sep: "; ".to_string(),
            consecutive_creator_sep: ", ".to_string(),
            ambiguity: AmbiguityStrategy::YearLetter,
            ambiguity_includes_title: false,
            endnote_marker: EndnoteMarker::default(),
        }
    }
}
