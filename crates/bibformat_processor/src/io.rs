/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Loading styles, libraries and citation documents from files.
//!
//! YAML is the default; a `.json` extension selects JSON.

use std::fs;
use std::path::Path;

use bibformat_core::{CitationDocument, Library, Style};
use serde::de::DeserializeOwned;

use crate::ProcessorError;

fn load<T: DeserializeOwned>(path: &Path) -> Result<T, ProcessorError> {
    let content = fs::read_to_string(path)?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");
    match ext {
        "json" => serde_json::from_str(&content)
            .map_err(|e| ProcessorError::ParseError("JSON".to_string(), e.to_string())),
        _ => serde_yaml::from_str(&content)
            .map_err(|e| ProcessorError::ParseError("YAML".to_string(), e.to_string())),
    }
}

/// Load a style file.
pub fn load_style(path: &Path) -> Result<Style, ProcessorError> {
    load(path)
}

/// Load a library: a list of resources.
pub fn load_library(path: &Path) -> Result<Library, ProcessorError> {
    let library: Library = load(path)?;
    tracing::debug!(path = %path.display(), resources = library.len(), "loaded library");
    Ok(library)
}

/// Load a citation document.
///
/// Accepts either a full document (`citations` plus `tail`) or a bare list
/// of citations.
pub fn load_document(path: &Path) -> Result<CitationDocument, ProcessorError> {
    let content = fs::read_to_string(path)?;
    let is_json = path.extension().and_then(|e| e.to_str()) == Some("json");
    let (format, document) = if is_json {
        let value: serde_json::Value = serde_json::from_str(&content)
            .map_err(|e| ProcessorError::ParseError("JSON".to_string(), e.to_string()))?;
        ("JSON", from_json_value(value))
    } else {
        let value: serde_yaml::Value = serde_yaml::from_str(&content)
            .map_err(|e| ProcessorError::ParseError("YAML".to_string(), e.to_string()))?;
        ("YAML", from_yaml_value(value))
    };
    document.map_err(|e| ProcessorError::ParseError(format.to_string(), e))
}

fn from_json_value(value: serde_json::Value) -> Result<CitationDocument, String> {
    if value.is_array() {
        let citations = serde_json::from_value(value).map_err(|e| e.to_string())?;
        return Ok(CitationDocument {
            citations,
            tail: String::new(),
        });
    }
    serde_json::from_value(value).map_err(|e| e.to_string())
}

fn from_yaml_value(value: serde_yaml::Value) -> Result<CitationDocument, String> {
    if value.is_sequence() {
        let citations = serde_yaml::from_value(value).map_err(|e| e.to_string())?;
        return Ok(CitationDocument {
            citations,
            tail: String::new(),
        });
    }
    serde_yaml::from_value(value).map_err(|e| e.to_string())
}
