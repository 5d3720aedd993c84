/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Citation occurrences as found in a document.

use crate::item::Item;
use serde::{Deserialize, Serialize};

/// One citation marker in a document, in document order.
///
/// `text_before` is the prose between the previous citation (or the start
/// of the document) and this one. `item` carries citation-local values,
/// most importantly the `pages` locator; everything else about the cited
/// resource is looked up in the library by `id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CitationOccurrence {
    pub id: String,
    pub item: Item,
    /// Prose between the previous citation and this one. A blank value
    /// joins this citation to the previous one's group and is not written
    /// out.
    pub text_before: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_text: Option<String>,
    /// Resource type; taken from the library when empty.
    pub resource_type: String,
    /// Comma-joined creator ids; derived from the library when empty.
    pub creator_ids: String,
}

impl CitationOccurrence {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_text_before(mut self, text: impl Into<String>) -> Self {
        self.text_before = text.into();
        self
    }

    pub fn with_pages(mut self, pages: impl Into<String>) -> Self {
        self.item.insert("pages", pages);
        self
    }

    pub fn with_pre_text(mut self, text: impl Into<String>) -> Self {
        self.pre_text = Some(text.into());
        self
    }

    pub fn with_post_text(mut self, text: impl Into<String>) -> Self {
        self.post_text = Some(text.into());
        self
    }

    /// The page locator, if any.
    pub fn pages(&self) -> Option<&str> {
        self.item.get("pages")
    }
}

/// A document to render: its citations plus the prose after the last one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CitationDocument {
    pub citations: Vec<CitationOccurrence>,
    pub tail: String,
}
