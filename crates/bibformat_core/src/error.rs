/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use thiserror::Error;

/// Failures while loading a style or a library.
#[derive(Debug, Error)]
pub enum StyleError {
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Anomalies found while compiling a template.
///
/// None of these abort compilation. The compiler falls back to treating the
/// offending text literally and records the problem on the
/// [`CompiledTemplate`](crate::template::CompiledTemplate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("template references no recognized field")]
    NoRecognizedField,

    #[error("unterminated dependent marker in {0:?}")]
    UnterminatedDependent(String),

    #[error("unterminated singular/plural marker in {0:?}")]
    UnterminatedPlural(String),

    #[error("field {field} has more than one {marker} marker; extra marker kept as text")]
    DuplicateMarker { field: String, marker: &'static str },

    #[error("field {0} appears more than once; the last definition wins")]
    DuplicateField(String),

    #[error("text {0:?} before the first field was ignored")]
    IgnoredLeadingText(String),

    #[error("independent text {0:?} was discarded")]
    DiscardedIndependent(String),

    #[error("independent pair {open:?}/{close:?} encloses no field")]
    EmptyIndependentPair { open: String, close: String },
}
