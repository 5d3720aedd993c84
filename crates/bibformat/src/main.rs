/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use anyhow::{anyhow, Context, Result};
use bibformat_core::embedded::{get_embedded_style, DEFAULT_STYLE_NAME, EMBEDDED_STYLE_NAMES};
use bibformat_core::{CitationDocument, CitationOccurrence, CompiledStyle, Style};
use bibformat_processor::io::{load_document, load_library, load_style};
use bibformat_processor::{
    DocumentOutput, Html, OutputFormat, PlainText, Processor, Raw, RenderSession, Rtf,
};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Render a bibliography and citations with a bibformat style.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Style file (YAML or JSON), or the name of an embedded style
    #[arg(short, long)]
    style: Option<String>,

    /// Library file: a list of resources (YAML or JSON)
    #[arg(short, long)]
    library: PathBuf,

    /// Citation document to render (YAML or JSON)
    #[arg(short, long)]
    document: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Plain)]
    format: Format,

    /// Show bibliography (default if neither --bib nor --cite is specified)
    #[arg(long)]
    bib: bool,

    /// Show citations
    #[arg(long)]
    cite: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Report template anomalies and exit
    #[arg(long)]
    check: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
enum Format {
    Plain,
    Html,
    Rtf,
    Raw,
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Plain => write!(f, "plain"),
            Format::Html => write!(f, "html"),
            Format::Rtf => write!(f, "rtf"),
            Format::Raw => write!(f, "raw"),
        }
    }
}

#[derive(Serialize)]
struct JsonEntry<'a> {
    id: &'a str,
    text: &'a str,
}

#[derive(Serialize)]
struct JsonCitation<'a> {
    id: &'a str,
    text: &'a str,
    variant: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<usize>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bibformat=info,bibformat_processor=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut cli = Cli::parse();
    if !cli.bib && !cli.cite {
        cli.bib = true;
        cli.cite = true;
    }

    let (style_name, style) = resolve_style(cli.style.as_deref())?;

    if cli.check {
        return check_style(&style_name, &style);
    }

    let library = load_library(&cli.library)
        .with_context(|| format!("failed to load library {}", cli.library.display()))?;
    let document = cli
        .document
        .as_deref()
        .map(|path| {
            load_document(path)
                .with_context(|| format!("failed to load document {}", path.display()))
        })
        .transpose()?;

    let processor = Processor::new(style, library);
    tracing::info!(style = %style_name, resources = processor.library.len(), "loaded inputs");

    if cli.json {
        print_json(&processor, &style_name, document.as_ref(), &cli)
    } else {
        let document = document.as_ref();
        match cli.format {
            Format::Plain => print_human::<PlainText>(&processor, &style_name, document, &cli),
            Format::Html => print_human::<Html>(&processor, &style_name, document, &cli),
            Format::Rtf => print_human::<Rtf>(&processor, &style_name, document, &cli),
            Format::Raw => print_human::<Raw>(&processor, &style_name, document, &cli),
        }
        Ok(())
    }
}

/// Load the style at `arg`, or the embedded style of that name, or the
/// default embedded style.
fn resolve_style(arg: Option<&str>) -> Result<(String, Style)> {
    let name = arg.unwrap_or(DEFAULT_STYLE_NAME);
    let path = Path::new(name);
    if arg.is_some() && path.exists() {
        let style = load_style(path)
            .with_context(|| format!("failed to load style {}", path.display()))?;
        let label = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| name.to_string());
        return Ok((label, style));
    }

    let style = get_embedded_style(name)
        .ok_or_else(|| {
            anyhow!(
                "no style file or embedded style named {:?} (embedded: {})",
                name,
                EMBEDDED_STYLE_NAMES.join(", ")
            )
        })?
        .with_context(|| format!("embedded style {} is invalid", name))?;
    Ok((name.to_string(), style))
}

fn check_style(style_name: &str, style: &Style) -> Result<()> {
    let compiled = CompiledStyle::compile(style);
    let diagnostics: Vec<_> = compiled.diagnostics().collect();
    if diagnostics.is_empty() {
        println!("{}: all templates compiled cleanly.", style_name);
        return Ok(());
    }
    for (context, diagnostic) in &diagnostics {
        println!("{}: {}: {}", style_name, context, diagnostic);
    }
    Err(anyhow!("{} template anomalies", diagnostics.len()))
}

/// The citations to render: the document's, or one citation per resource.
fn citations_for(processor: &Processor, document: Option<&CitationDocument>) -> CitationDocument {
    match document {
        Some(document) => document.clone(),
        None => CitationDocument {
            citations: processor
                .library
                .iter()
                .map(|resource| CitationOccurrence::new(resource.id.clone()))
                .collect(),
            tail: String::new(),
        },
    }
}

fn report_errors(output: &DocumentOutput) {
    for error in &output.errors {
        tracing::warn!(%error, "invalid citation");
    }
}

fn print_human<F: OutputFormat>(
    processor: &Processor,
    style_name: &str,
    document: Option<&CitationDocument>,
    cli: &Cli,
) {
    println!("\n=== {} ===\n", style_name);
    let mut session = RenderSession::new();

    if cli.cite {
        let citations = citations_for(processor, document);
        let output = processor.render_document_with_format::<F>(&citations, &mut session);
        report_errors(&output);
        if document.is_some() {
            println!("DOCUMENT:");
            for line in output.text.lines() {
                println!("  {}", line);
            }
        } else {
            println!("CITATIONS:");
            for citation in &output.citations {
                println!("  [{}] {}", citation.resource_id, citation.text);
            }
        }
        println!();
    }

    if cli.bib {
        println!("BIBLIOGRAPHY:");
        for entry in processor.render_bibliography_with_format::<F>(&mut session) {
            println!("  {}", entry.text);
        }
    }
}

fn print_json(
    processor: &Processor,
    style_name: &str,
    document: Option<&CitationDocument>,
    cli: &Cli,
) -> Result<()> {
    use serde_json::json;

    let mut session = RenderSession::new();
    let mut result = json!({
        "style": style_name,
        "items": processor.library.len(),
    });

    if cli.cite {
        let citations = citations_for(processor, document);
        let output = processor.render_document(&citations, &mut session);
        report_errors(&output);
        let rendered: Vec<JsonCitation> = output
            .citations
            .iter()
            .map(|c| JsonCitation {
                id: &c.resource_id,
                text: &c.text,
                variant: format!("{:?}", c.variant),
                note: c.endnote_id,
            })
            .collect();
        let errors: Vec<String> = output.errors.iter().map(ToString::to_string).collect();
        result["citations"] = serde_json::to_value(&rendered)?;
        result["errors"] = json!(errors);
        if document.is_some() {
            result["text"] = json!(output.text);
        }
    }

    if cli.bib {
        let entries = processor.render_bibliography(&mut session);
        let entries: Vec<JsonEntry> = entries
            .iter()
            .map(|e| JsonEntry {
                id: &e.id,
                text: &e.text,
            })
            .collect();
        result["bibliography"] = json!({ "entries": entries });
    }

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
