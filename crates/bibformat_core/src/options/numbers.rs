/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum EditionFormat {
    /// "3"
    #[default]
    Cardinal,
    /// "3rd"
    Ordinal,
    /// "third"
    Words,
}

/// Page range format.
#[derive(Debug, Default, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PageFormat {
    /// "132-139", or whatever the loader supplied.
    #[default]
    AsEntered,
    /// "132-9"
    Abbreviated,
    /// "132-39"
    TwoDigit,
    /// "132-9" becomes "132-139"
    Expanded,
}

/// Running time (film, broadcast) format. Input is in minutes.
#[derive(Debug, Default, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum RunningTimeFormat {
    /// `3'45"`
    #[default]
    Apostrophe,
    /// "3:45"
    Colon,
    /// "3,45"
    Comma,
    /// "3 hours, 45 minutes"
    Words,
    /// "3 hours and 45 minutes"
    WordsAnd,
}
