/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! A style with every template compiled once.

use crate::error::CompileError;
use crate::template::{compile, CompiledTemplate, FieldSet};
use crate::Style;
use std::collections::HashMap;

/// Compiled citation templates, one per citation context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CitationTemplates {
    pub base: CompiledTemplate,
    pub follow_creator: Option<CompiledTemplate>,
    pub consecutive_creator: Option<CompiledTemplate>,
    pub subsequent: Option<CompiledTemplate>,
    pub ambiguous: Option<CompiledTemplate>,
    pub ibid: Option<CompiledTemplate>,
    pub idem: Option<CompiledTemplate>,
    pub op_cit: Option<CompiledTemplate>,
    /// Replacement templates keyed by resource type.
    pub by_type: HashMap<String, CompiledTemplate>,
}

impl CitationTemplates {
    pub fn for_type(&self, resource_type: &str) -> Option<&CompiledTemplate> {
        self.by_type.get(resource_type)
    }
}

/// Every template of a [`Style`], compiled.
///
/// Built once per style and read-only afterwards, so one instance can serve
/// any number of renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompiledStyle {
    bibliography: HashMap<String, CompiledTemplate>,
    fallback: Option<String>,
    footnote: HashMap<String, CompiledTemplate>,
    citation: CitationTemplates,
    editor_switch: Option<CompiledTemplate>,
}

impl CompiledStyle {
    pub fn compile(style: &Style) -> Self {
        let bib = &style.bibliography;
        let fields_for = |resource_type: &str| match bib.fields.get(resource_type) {
            Some(names) => FieldSet::new(names.iter().cloned()),
            None => FieldSet::bibliography(),
        };

        let bibliography: HashMap<String, CompiledTemplate> = bib
            .templates
            .iter()
            .map(|(ty, raw)| (ty.clone(), compile(raw, &fields_for(ty.as_str()))))
            .collect();
        let footnote = style
            .footnote
            .templates
            .iter()
            .map(|(ty, raw)| (ty.clone(), compile(raw, &fields_for(ty.as_str()))))
            .collect();

        let options = &style.citation;
        let citation_fields = FieldSet::citation();
        let optional = |raw: &Option<String>| raw.as_deref().map(|t| compile(t, &citation_fields));
        let citation = CitationTemplates {
            base: compile(&options.template, &citation_fields),
            follow_creator: optional(&options.follow_creator_template),
            consecutive_creator: optional(&options.consecutive_creator_template),
            subsequent: optional(&options.subsequent_template),
            ambiguous: optional(&options.ambiguous_template),
            ibid: optional(&options.ibid_template),
            idem: optional(&options.idem_template),
            op_cit: optional(&options.op_cit_template),
            by_type: options
                .type_templates
                .iter()
                .map(|(ty, raw)| {
                    let mut fields = citation_fields.clone();
                    if let Some(names) = bib.fields.get(ty) {
                        fields.extend(names.iter().cloned());
                    }
                    (ty.clone(), compile(raw, &fields))
                })
                .collect(),
        };

        let editor_switch = bib
            .editor_switch
            .as_ref()
            .map(|switch| compile(&switch.template, &FieldSet::new(["editor"])));

        let fallback = bib.fallback.clone().filter(|ty| {
            let known = bibliography.contains_key(ty);
            if !known {
                tracing::warn!(fallback = %ty, "fallback type has no bibliography template");
            }
            known
        });

        let compiled = Self {
            bibliography,
            fallback,
            footnote,
            citation,
            editor_switch,
        };
        for (context, diagnostic) in compiled.diagnostics() {
            tracing::warn!(%context, %diagnostic, "template compiled with anomaly");
        }
        compiled
    }

    /// The bibliography template for `resource_type`, or the fallback
    /// type's template.
    pub fn bibliography_template(&self, resource_type: &str) -> Option<&CompiledTemplate> {
        self.bibliography.get(resource_type).or_else(|| {
            self.fallback
                .as_deref()
                .and_then(|ty| self.bibliography.get(ty))
        })
    }

    pub fn footnote_template(&self, resource_type: &str) -> Option<&CompiledTemplate> {
        self.footnote.get(resource_type)
    }

    pub fn citation(&self) -> &CitationTemplates {
        &self.citation
    }

    pub fn editor_switch(&self) -> Option<&CompiledTemplate> {
        self.editor_switch.as_ref()
    }

    /// Every compile anomaly, labelled with where it came from.
    pub fn diagnostics(&self) -> impl Iterator<Item = (String, &CompileError)> {
        let citation = &self.citation;
        let named = [
            ("citation.template", Some(&citation.base)),
            ("citation.follow-creator-template", citation.follow_creator.as_ref()),
            (
                "citation.consecutive-creator-template",
                citation.consecutive_creator.as_ref(),
            ),
            ("citation.subsequent-template", citation.subsequent.as_ref()),
            ("citation.ambiguous-template", citation.ambiguous.as_ref()),
            ("citation.ibid-template", citation.ibid.as_ref()),
            ("citation.idem-template", citation.idem.as_ref()),
            ("citation.op-cit-template", citation.op_cit.as_ref()),
            ("bibliography.editor-switch", self.editor_switch.as_ref()),
        ];

        labelled("bibliography.templates", &self.bibliography)
            .chain(labelled("footnote.templates", &self.footnote))
            .chain(labelled("citation.type-templates", &citation.by_type))
            .chain(named.into_iter().flat_map(|(context, template)| {
                template
                    .into_iter()
                    .flat_map(|t| t.diagnostics.iter())
                    .map(move |d| (context.to_string(), d))
            }))
    }
}

fn labelled<'a>(
    section: &'static str,
    templates: &'a HashMap<String, CompiledTemplate>,
) -> impl Iterator<Item = (String, &'a CompileError)> + 'a {
    templates.iter().flat_map(move |(ty, template)| {
        template
            .diagnostics
            .iter()
            .map(move |d| (format!("{section}.{ty}"), d))
    })
}
