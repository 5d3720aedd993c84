/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Plain text output format.

use super::format::{InlineTag, OutputFormat};

/// Drops inline markers and prints a real en-dash.
#[derive(Debug, Default, Clone)]
pub struct PlainText;

impl OutputFormat for PlainText {
    fn text(&self, s: &str) -> String {
        s.to_string()
    }

    fn open(&self, _tag: InlineTag) -> String {
        String::new()
    }

    fn close(&self, _tag: InlineTag) -> String {
        String::new()
    }

    fn ndash(&self) -> String {
        "\u{2013}".to_string()
    }
}

/// Leaves rendered text untouched, markers and placeholder included.
///
/// For callers that run their own export filter.
#[derive(Debug, Default, Clone)]
pub struct Raw;

impl OutputFormat for Raw {
    fn text(&self, s: &str) -> String {
        s.to_string()
    }

    fn open(&self, tag: InlineTag) -> String {
        format!("[{}]", tag_name(tag))
    }

    fn close(&self, tag: InlineTag) -> String {
        format!("[/{}]", tag_name(tag))
    }

    fn ndash(&self) -> String {
        bibformat_core::NDASH_PLACEHOLDER.to_string()
    }

    fn format(&self, text: &str) -> String {
        text.to_string()
    }
}

fn tag_name(tag: InlineTag) -> &'static str {
    match tag {
        InlineTag::Bold => "b",
        InlineTag::Italic => "i",
        InlineTag::Underline => "u",
        InlineTag::Superscript => "sup",
        InlineTag::Subscript => "sub",
    }
}
