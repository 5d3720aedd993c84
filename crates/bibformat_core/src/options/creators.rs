/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use serde::{Deserialize, Serialize};

/// How a single name is laid out.
#[derive(Debug, Default, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum NameOrder {
    /// "Joe Bloggs"
    FirstLast,
    /// "Bloggs, Joe"
    #[default]
    LastCommaFirst,
    /// "Bloggs Joe"
    LastFirst,
    /// "Bloggs"
    LastOnly,
}

/// How initials are punctuated.
#[derive(Debug, Default, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum InitialsStyle {
    /// "T. U."
    #[default]
    DottedSpaced,
    /// "T.U."
    Dotted,
    /// "T U"
    Spaced,
    /// "TU"
    Compact,
}

/// Whether given names are spelled out or reduced to initials.
#[derive(Debug, Default, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum FirstNameForm {
    #[default]
    Full,
    Initial,
}

/// What to print when a bibliography entry has the same creators as the
/// entry immediately before it.
#[derive(Debug, Default, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum RepeatPolicy {
    #[default]
    Print,
    /// Print `repeat-string` instead of the names.
    Replace,
    Omit,
}

/// List truncation ("et al.") settings.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ListTruncation {
    /// Truncate when there are more than this many creators.
    pub more_than: usize,
    /// Number of creators kept when truncating.
    pub limit: usize,
    /// Appended after the kept creators.
    pub abbreviation: String,
    pub abbreviation_italic: bool,
}

impl Default for ListTruncation {
    fn default() -> Self {
        Self {
            more_than: 3,
            limit: 1,
            abbreviation: " et al.".to_string(),
            abbreviation_italic: false,
        }
    }
}

/// One creator formatting bundle.
///
/// A style carries five of these, selected by [`CreatorRole`].
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CreatorStyle {
    /// Name order for the first creator in a list.
    pub first_order: NameOrder,
    /// Name order for the remaining creators.
    pub other_order: NameOrder,
    pub initials: InitialsStyle,
    pub first_name: FirstNameForm,
    /// Upper-case surnames.
    pub uppercase: bool,
    /// Separator when there are exactly two creators.
    pub two_creators_sep: String,
    /// Between the first and second of three or more creators.
    pub sep_first_between: String,
    /// Between later creators of three or more.
    pub sep_next_between: String,
    /// Before the last of three or more creators.
    pub sep_next_last: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list: Option<ListTruncation>,
    pub repeat: RepeatPolicy,
    pub repeat_string: String,
}

impl Default for CreatorStyle {
    fn default() -> Self {
        Self {
            first_order: NameOrder::LastCommaFirst,
            other_order: NameOrder::FirstLast,
            initials: InitialsStyle::DottedSpaced,
            first_name: FirstNameForm::Full,
            uppercase: false,
            two_creators_sep: " and ".to_string(),
            sep_first_between: ", ".to_string(),
            sep_next_between: ", ".to_string(),
            sep_next_last: ", and ".to_string(),
            list: None,
            repeat: RepeatPolicy::Print,
            repeat_string: String::new(),
        }
    }
}

/// Extra decoration attached to creators of one field for one resource
/// type, for styles whose needs the field template cannot express.
#[derive(Debug, Default, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CreatorRewrite {
    /// Text attached to the first creator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    /// Put `first` before the name instead of after it.
    pub first_before: bool,
    /// Text attached to the remaining creators.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remainder: Option<String>,
    pub remainder_before: bool,
    /// Attach `remainder` to every remaining creator instead of once.
    pub remainder_each: bool,
}

/// Which creator bundle applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CreatorRole {
    /// First creator field of a bibliography entry.
    Primary,
    /// Any other creator field of a bibliography entry.
    Other,
    FootnotePrimary,
    FootnoteOther,
    /// Creators inside an in-text citation.
    Citation,
}

impl CreatorRole {
    /// The bibliography role for a creator field name.
    pub fn for_field(field: &str) -> Self {
        if field == "creator1" {
            CreatorRole::Primary
        } else {
            CreatorRole::Other
        }
    }

    /// The footnote role for a creator field name.
    pub fn footnote_for_field(field: &str) -> Self {
        if field == "creator1" {
            CreatorRole::FootnotePrimary
        } else {
            CreatorRole::FootnoteOther
        }
    }

    /// Repeat suppression applies to bibliography entries only.
    pub fn is_bibliographic(&self) -> bool {
        matches!(self, CreatorRole::Primary | CreatorRole::Other)
    }
}

/// Borrowed view of all creator bundles in a style.
#[derive(Debug, Clone, Copy)]
pub struct CreatorStyles<'a> {
    pub primary: &'a CreatorStyle,
    pub other: &'a CreatorStyle,
    pub footnote_primary: &'a CreatorStyle,
    pub footnote_other: &'a CreatorStyle,
    pub citation: &'a CreatorStyle,
}

impl<'a> CreatorStyles<'a> {
    pub fn get(&self, role: CreatorRole) -> &'a CreatorStyle {
        match role {
            CreatorRole::Primary => self.primary,
            CreatorRole::Other => self.other,
            CreatorRole::FootnotePrimary => self.footnote_primary,
            CreatorRole::FootnoteOther => self.footnote_other,
            CreatorRole::Citation => self.citation,
        }
    }
}
