/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Demonstration styles baked into the binary.
//!
//! The YAML sources live in the workspace `styles/` directory and are
//! embedded with `include_str!`, so the CLI can render without a style file.

use crate::{Style, StyleError};

/// Style used when no other is named.
pub const DEFAULT_STYLE_NAME: &str = "author-date";

/// All embedded style names.
pub const EMBEDDED_STYLE_NAMES: &[&str] = &["author-date", "footnote"];

fn style_source(name: &str) -> Option<&'static str> {
    match name {
        "author-date" => Some(include_str!("../../../styles/author-date.yaml")),
        "footnote" => Some(include_str!("../../../styles/footnote.yaml")),
        _ => None,
    }
}

/// Parse an embedded style by name.
///
/// Returns `None` if `name` is not embedded.
pub fn get_embedded_style(name: &str) -> Option<Result<Style, StyleError>> {
    style_source(name).map(Style::from_yaml_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_embedded_style_parses() {
        for name in EMBEDDED_STYLE_NAMES {
            let style = get_embedded_style(name)
                .expect("listed style is embedded")
                .expect("embedded style parses");
            assert!(style.info.name.is_some(), "{name} has a name");
        }
    }

    #[test]
    fn unknown_name_is_none() {
        assert!(get_embedded_style("chicago").is_none());
    }
}
