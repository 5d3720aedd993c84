/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use bibformat_core::StyleError;
use thiserror::Error;

/// Failures loading inputs or looking up resources.
#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse {0}: {1}")]
    ParseError(String, String),

    #[error(transparent)]
    Style(#[from] StyleError),

    #[error("resource not found: {0}")]
    ResourceNotFound(String),

    #[error("no bibliography template for resource type {0}")]
    NoTemplate(String),
}

/// Problems found while sequencing the citations of a document.
///
/// These never stop the document from rendering: the sequencer collects
/// them and carries on with the next citation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequencerError {
    #[error("citation refers to unknown resource {0}")]
    UnknownResource(String),
}
