/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use serde::{Deserialize, Serialize};

/// Title capitalization.
///
/// Text inside `{braces}` is always kept as entered and the braces are
/// dropped, so acronyms and proper nouns survive sentence casing.
#[derive(Debug, Default, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TitleCapitalization {
    #[default]
    AsEntered,
    /// Only the first word (and the first word of a subtitle) capitalized.
    SentenceCase,
}
