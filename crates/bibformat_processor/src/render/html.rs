/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! HTML output format.

use super::format::{InlineTag, OutputFormat};

#[derive(Debug, Default, Clone)]
pub struct Html;

impl OutputFormat for Html {
    fn text(&self, s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        for c in s.chars() {
            match c {
                '&' => out.push_str("&amp;"),
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '"' => out.push_str("&quot;"),
                _ => out.push(c),
            }
        }
        out
    }

    fn open(&self, tag: InlineTag) -> String {
        match tag {
            InlineTag::Bold => "<strong>",
            InlineTag::Italic => "<em>",
            InlineTag::Underline => r#"<span style="text-decoration: underline;">"#,
            InlineTag::Superscript => "<sup>",
            InlineTag::Subscript => "<sub>",
        }
        .to_string()
    }

    fn close(&self, tag: InlineTag) -> String {
        match tag {
            InlineTag::Bold => "</strong>",
            InlineTag::Italic => "</em>",
            InlineTag::Underline => "</span>",
            InlineTag::Superscript => "</sup>",
            InlineTag::Subscript => "</sub>",
        }
        .to_string()
    }

    fn ndash(&self) -> String {
        "&ndash;".to_string()
    }
}
