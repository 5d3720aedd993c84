/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Value preparation.
//!
//! Turns a raw [`Resource`] into the flat [`Item`] a template renders
//! against: creators laid out, titles joined and cased, dates, editions,
//! page ranges and running times formatted.

pub mod creators;
pub mod dates;
pub mod numbers;
pub mod pages;
pub mod title;


pub use creators::{
    format_creators, format_creators_with_rewrite, format_name, suppress_repeat, FormattedCreators,
};
pub use dates::format_date;
pub use numbers::{format_edition, format_running_time, ordinal};
pub use pages::{format_page_range, format_page_string, FormattedPages};
pub use title::{format_title, sentence_case};

use crate::render::render;
use bibformat_core::options::{CreatorRole, PageFormat};
use bibformat_core::{CompiledStyle, Item, PluralFlags, Resource, Style};

/// Raw fields that only feed other fields.
const CONSUMED_FIELDS: &[&str] = &["subtitle", "day", "month", "pageStart", "pageEnd"];

/// Where a prepared item will be rendered; selects creator bundles and
/// formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderContext {
    Bibliography,
    Footnote,
    Citation,
}

impl RenderContext {
    pub fn creator_role(self, field: &str) -> CreatorRole {
        match self {
            RenderContext::Bibliography => CreatorRole::for_field(field),
            RenderContext::Footnote => CreatorRole::footnote_for_field(field),
            RenderContext::Citation => CreatorRole::Citation,
        }
    }
}

/// An item ready for the mapper, with its plural flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreparedItem {
    pub item: Item,
    pub plural: PluralFlags,
}

/// Format every value of `resource` for `context`.
pub fn prepare_item(
    resource: &Resource,
    style: &Style,
    compiled: &CompiledStyle,
    context: RenderContext,
) -> PreparedItem {
    let bib = &style.bibliography;
    let styles = style.creator_styles();
    let fields = &resource.fields;
    let mut prepared = PreparedItem::default();

    for (field, value) in fields.iter() {
        if !CONSUMED_FIELDS.contains(&field) {
            prepared.item.insert(field, value);
        }
    }

    for (field, list) in &resource.creators {
        if list.is_empty() {
            continue;
        }
        let role = context.creator_role(field);
        let rewrite = match context {
            RenderContext::Bibliography => bib.rewrite(&resource.resource_type, field),
            _ => None,
        };
        let formatted = format_creators_with_rewrite(list, role, styles.get(role), rewrite);
        prepared.plural.set(field.as_str(), formatted.is_plural);
        prepared.item.insert(field.as_str(), formatted.text);
    }

    if context == RenderContext::Bibliography {
        switch_editors(resource, style, compiled, &mut prepared);
    }

    let (capitalization, page_format) = match context {
        RenderContext::Citation => (
            style.citation.title_capitalization,
            style.citation.page_format,
        ),
        _ => (bib.title_capitalization, bib.page_format),
    };
    if let Some(title) = fields.get("title") {
        let text = format_title(title, fields.get("subtitle"), capitalization);
        prepared.item.insert("title", text);
    }
    if let Some(short) = fields.get("shortTitle") {
        prepared
            .item
            .insert("shortTitle", format_title(short, None, capitalization));
    }
    if let Some(date) = format_date(fields.get("day"), fields.get("month"), &bib.dates) {
        prepared.item.insert("date", date);
    }
    if let Some(edition) = fields.get("edition") {
        prepared
            .item
            .insert("edition", format_edition(edition, bib.edition_format));
    }
    let pages = match fields.get("pageStart") {
        Some(start) => Some(format_page_range(start, fields.get("pageEnd"), page_format)),
        None => fields
            .get("pages")
            .map(|pages| format_page_string(pages, page_format)),
    };
    if let Some(pages) = pages {
        prepared.plural.set("pages", pages.is_plural);
        prepared.item.insert("pages", pages.text);
    }
    if let Some(minutes) = fields.get("runningTime") {
        prepared.item.insert(
            "runningTime",
            format_running_time(minutes, bib.running_time_format),
        );
    }

    if context == RenderContext::Citation {
        if let Some(creators) = resource.primary_creators() {
            let formatted = format_creators(creators, CreatorRole::Citation, styles.citation);
            prepared.plural.set("creator", formatted.is_plural);
            prepared.item.insert("creator", formatted.text);
        }
        if let Some(year) = resource.year() {
            prepared.item.insert("year", year);
        }
        prepared.item.insert("id", resource.id.as_str());
    }

    prepared
}

/// Prepare `resource` for a citation, with the occurrence's own values
/// (most importantly its page locator) taking precedence.
pub fn prepare_citation_item(
    resource: &Resource,
    occurrence: &Item,
    style: &Style,
    compiled: &CompiledStyle,
) -> PreparedItem {
    let mut prepared = prepare_item(resource, style, compiled, RenderContext::Citation);
    apply_occurrence(&mut prepared, occurrence, style.citation.page_format);
    prepared
}

/// Replace the resource's page range with the occurrence's locator and
/// copy over any other occurrence values.
pub fn apply_occurrence(prepared: &mut PreparedItem, occurrence: &Item, page_format: PageFormat) {
    prepared.item.remove("pages");
    prepared.plural.set("pages", false);
    prepared.item.merge(occurrence);
    if let Some(value) = occurrence.get("pages") {
        let pages = format_page_string(value, page_format);
        prepared.plural.set("pages", pages.is_plural);
        prepared.item.insert("pages", pages.text);
    }
}

/// Move editors into the author slot of a resource without authors.
fn switch_editors(
    resource: &Resource,
    style: &Style,
    compiled: &CompiledStyle,
    prepared: &mut PreparedItem,
) {
    if prepared.item.has("creator1") {
        return;
    }
    let (Some(editors), Some(switch)) = (resource.creators("creator2"), compiled.editor_switch())
    else {
        return;
    };

    let formatted = format_creators(editors, CreatorRole::Primary, &style.bibliography.primary);
    let editor: Item = [("editor", formatted.text.as_str())].into_iter().collect();
    let plural: PluralFlags = [("editor", formatted.is_plural)].into_iter().collect();
    let text = render(switch, &editor, &plural);
    tracing::debug!(resource = %resource.id, "editors moved to creator1");

    prepared.item.remove("creator2");
    prepared.plural.set("creator2", false);
    prepared.plural.set("creator1", formatted.is_plural);
    prepared.item.insert("creator1", text);
}
