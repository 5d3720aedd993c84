/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Output format trait for pluggable export filters.

use bibformat_core::NDASH_PLACEHOLDER;

/// Inline markers the renderer may emit, written `[b]...[/b]` and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineTag {
    Bold,
    Italic,
    Underline,
    Superscript,
    Subscript,
}

impl InlineTag {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "b" => Some(InlineTag::Bold),
            "i" => Some(InlineTag::Italic),
            "u" => Some(InlineTag::Underline),
            "sup" => Some(InlineTag::Superscript),
            "sub" => Some(InlineTag::Subscript),
            _ => None,
        }
    }
}

/// A marker found at the start of some text: the tag, whether it closes,
/// and its length in bytes.
pub fn parse_marker(text: &str) -> Option<(InlineTag, bool, usize)> {
    let rest = text.strip_prefix('[')?;
    let end = rest.find(']')?;
    let name = &rest[..end];
    let (closing, name) = match name.strip_prefix('/') {
        Some(name) => (true, name),
        None => (false, name),
    };
    InlineTag::from_name(name).map(|tag| (tag, closing, end + 2))
}

/// Trait for defining how rendered text is converted for one medium.
///
/// Rendered text is plain Unicode carrying inline markers and the en-dash
/// placeholder. Implementations escape text runs for their medium and
/// translate markers; [`OutputFormat::format`] drives the conversion.
pub trait OutputFormat: Default + Clone {
    /// Escape a run of text that contains no markers.
    fn text(&self, s: &str) -> String;

    /// Markup opening an inline tag.
    fn open(&self, tag: InlineTag) -> String;

    /// Markup closing an inline tag.
    fn close(&self, tag: InlineTag) -> String;

    /// The medium's en-dash.
    fn ndash(&self) -> String;

    /// Wrap a whole converted fragment. Called once per `format`.
    fn finish(&self, output: String) -> String {
        output
    }

    /// Convert rendered text for this medium.
    fn format(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut run_start = 0;
        let mut pos = 0;
        while pos < text.len() {
            let rest = &text[pos..];
            if rest.starts_with(NDASH_PLACEHOLDER) {
                out.push_str(&self.text(&text[run_start..pos]));
                out.push_str(&self.ndash());
                pos += NDASH_PLACEHOLDER.len();
                run_start = pos;
            } else if let Some((tag, closing, len)) = parse_marker(rest) {
                out.push_str(&self.text(&text[run_start..pos]));
                out.push_str(&if closing { self.close(tag) } else { self.open(tag) });
                pos += len;
                run_start = pos;
            } else {
                pos += rest.chars().next().map_or(1, char::len_utf8);
            }
        }
        out.push_str(&self.text(&text[run_start..]));
        self.finish(out)
    }
}
