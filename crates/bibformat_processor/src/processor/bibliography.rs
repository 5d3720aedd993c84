/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use crate::error::ProcessorError;
use crate::render::{render, OutputFormat, PlainText};
use crate::session::RenderSession;
use crate::values::{prepare_item, suppress_repeat, FormattedCreators, RenderContext};
use bibformat_core::options::CreatorRole;
use bibformat_core::{CompiledStyle, Resource, Style};

/// One rendered bibliography entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEntry {
    pub id: String,
    pub text: String,
}

/// Renders bibliography entries.
///
/// Repeat suppression and disambiguation letters come from the
/// [`RenderSession`]; render the citations of a document first to get the
/// letters they assigned.
pub struct BibliographyProcessor<'a> {
    style: &'a Style,
    compiled: &'a CompiledStyle,
}

impl<'a> BibliographyProcessor<'a> {
    pub fn new(style: &'a Style, compiled: &'a CompiledStyle) -> Self {
        Self { style, compiled }
    }

    /// Render one entry as plain text.
    pub fn render_entry(
        &self,
        resource: &Resource,
        session: &mut RenderSession,
    ) -> Result<String, ProcessorError> {
        self.render_entry_with_format::<PlainText>(resource, session)
    }

    /// Render one entry and convert it with `F`.
    ///
    /// Fails with [`ProcessorError::NoTemplate`] when neither the resource
    /// type nor the fallback type has a template.
    pub fn render_entry_with_format<F: OutputFormat>(
        &self,
        resource: &Resource,
        session: &mut RenderSession,
    ) -> Result<String, ProcessorError> {
        let template = self
            .compiled
            .bibliography_template(&resource.resource_type)
            .ok_or_else(|| ProcessorError::NoTemplate(resource.resource_type.clone()))?;

        let mut prepared = prepare_item(
            resource,
            self.style,
            self.compiled,
            RenderContext::Bibliography,
        );

        match prepared.item.get("creator1") {
            Some(text) => {
                let formatted = FormattedCreators {
                    text: text.to_string(),
                    is_plural: prepared.plural.is_plural("creator1"),
                    count: resource.creators("creator1").map_or(0, |list| list.len()),
                };
                let shown = suppress_repeat(
                    formatted,
                    CreatorRole::Primary,
                    &self.style.bibliography.primary,
                    session.repeat_mut(),
                );
                prepared.item.insert("creator1", shown.text);
            }
            None => session.repeat_mut().reset_creators(),
        }

        if let Some(letter) = session.disambiguation().letter(&resource.id) {
            if let Some(year) = prepared.item.get("year1") {
                let year = format!("{}{}", year, letter);
                prepared.item.insert("year1", year);
            }
        }

        let text = render(template, &prepared.item, &prepared.plural);
        tracing::trace!(id = %resource.id, "rendered bibliography entry");
        Ok(F::default().format(&text))
    }

    /// Render entries in the given order as plain text.
    pub fn render_bibliography<'r, I>(
        &self,
        resources: I,
        session: &mut RenderSession,
    ) -> Vec<RenderedEntry>
    where
        I: IntoIterator<Item = &'r Resource>,
    {
        self.render_bibliography_with_format::<PlainText, I>(resources, session)
    }

    /// Render entries in the given order, skipping (and logging) those
    /// without a template.
    pub fn render_bibliography_with_format<'r, F, I>(
        &self,
        resources: I,
        session: &mut RenderSession,
    ) -> Vec<RenderedEntry>
    where
        F: OutputFormat,
        I: IntoIterator<Item = &'r Resource>,
    {
        session.repeat_mut().reset_creators();
        let mut entries = Vec::new();
        for resource in resources {
            match self.render_entry_with_format::<F>(resource, session) {
                Ok(text) => entries.push(RenderedEntry {
                    id: resource.id.clone(),
                    text,
                }),
                Err(error) => tracing::warn!(id = %resource.id, %error, "skipping entry"),
            }
        }
        entries
    }
}
