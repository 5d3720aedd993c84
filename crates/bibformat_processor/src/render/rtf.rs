/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! RTF output format.

use super::format::{InlineTag, OutputFormat};

#[derive(Debug, Default, Clone)]
pub struct Rtf;

impl OutputFormat for Rtf {
    fn text(&self, s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        for c in s.chars() {
            match c {
                '\\' => out.push_str("\\\\"),
                '{' => out.push_str("\\{"),
                '}' => out.push_str("\\}"),
                c if c.is_ascii() => out.push(c),
                c => {
                    // RTF wants signed 16-bit code units.
                    let mut units = [0u16; 2];
                    for unit in c.encode_utf16(&mut units) {
                        out.push_str(&format!("\\u{}?", *unit as i16));
                    }
                }
            }
        }
        out
    }

    fn open(&self, tag: InlineTag) -> String {
        match tag {
            InlineTag::Bold => "{\\b ",
            InlineTag::Italic => "{\\i ",
            InlineTag::Underline => "{\\ul ",
            InlineTag::Superscript => "{\\super ",
            InlineTag::Subscript => "{\\sub ",
        }
        .to_string()
    }

    fn close(&self, _tag: InlineTag) -> String {
        "}".to_string()
    }

    fn ndash(&self) -> String {
        "\\endash ".to_string()
    }
}
