/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use super::creators::{CreatorRewrite, CreatorStyle};
use super::dates::DateOptions;
use super::numbers::{EditionFormat, PageFormat, RunningTimeFormat};
use super::titles::TitleCapitalization;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Moves editors into the author position when a resource has no authors.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct EditorSwitch {
    /// A template over the single field `editor`, e.g.
    /// `"editor ^(ed.)^(eds.)^"`.
    pub template: String,
}

impl Default for EditorSwitch {
    fn default() -> Self {
        Self {
            template: "editor ^(ed.)^(eds.)^".to_string(),
        }
    }
}

/// Bibliography templates and global formatting options.
#[derive(Debug, Default, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct BibliographyOptions {
    /// Bundle for the `creator1` field.
    pub primary: CreatorStyle,
    /// Bundle for `creator2` .. `creator5`.
    pub other: CreatorStyle,
    pub title_capitalization: TitleCapitalization,
    pub dates: DateOptions,
    pub edition_format: EditionFormat,
    pub page_format: PageFormat,
    pub running_time_format: RunningTimeFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editor_switch: Option<EditorSwitch>,
    /// Raw template per resource type.
    pub templates: IndexMap<String, String>,
    /// Resource type whose template is used when a type has none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,
    /// Creator rewrites: resource type -> creator field -> rewrite.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub rewrites: IndexMap<String, IndexMap<String, CreatorRewrite>>,
    /// Valid field names per resource type; types not listed use the
    /// standard bibliographic field set.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub fields: IndexMap<String, Vec<String>>,
}

impl BibliographyOptions {
    /// Rewrite rule for one creator field of one resource type.
    pub fn rewrite(&self, resource_type: &str, field: &str) -> Option<&CreatorRewrite> {
        self.rewrites.get(resource_type)?.get(field)
    }
}

/// Footnote templates, used by the footnote endnote style.
#[derive(Debug, Default, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct FootnoteOptions {
    pub primary: CreatorStyle,
    pub other: CreatorStyle,
    pub templates: IndexMap<String, String>,
}
