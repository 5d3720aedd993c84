/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Template rendering and output formats.
//!
//! [`mapper::render`] produces medium-neutral text with inline markers and
//! the en-dash placeholder; an [`OutputFormat`] converts that text for one
//! medium.

pub mod format;
pub mod html;
pub mod mapper;
pub mod plain;
pub mod rtf;

#[cfg(test)]
mod test_formats;

pub use format::{InlineTag, OutputFormat};
pub use html::Html;
pub use mapper::render;
pub use plain::{PlainText, Raw};
pub use rtf::Rtf;

use bibformat_core::{CompiledTemplate, Item, PluralFlags};

/// Render and convert in one step.
pub fn render_with_format<F: OutputFormat>(
    template: &CompiledTemplate,
    item: &Item,
    plural: &PluralFlags,
) -> String {
    F::default().format(&render(template, item, plural))
}
