//! Document loading and orchestration
//!
//! This module turns a .docx file into the ordered paragraph stream the
//! question parser consumes, and wires the two together into `load_bank()`.

use std::io::Cursor;
use std::path::Path;

use tracing::{debug, info};

use super::io::{MediaResolver, validate_docx_file};
use super::models::*;
use super::parsing::formatting::{extract_paragraph_text, first_image_relationship};
use crate::error::BankError;
use crate::parser::{QuestionBank, parse_paragraphs};

/// Main loading function: validate, read and parse a .docx exam document
///
/// Any failure to open or read the container is reported as
/// `BankError::DocumentUnavailable`; malformed questions inside a readable
/// document are dropped silently by the parser.
pub async fn load_bank(file_path: &Path, options: &LoadOptions) -> Result<QuestionBank, BankError> {
    let paragraphs = load_paragraphs(file_path, options).await?;
    debug!(path = %file_path.display(), paragraphs = paragraphs.len(), "document read");

    let bank = parse_paragraphs(paragraphs);
    info!(path = %file_path.display(), questions = bank.len(), "question bank loaded");
    Ok(bank)
}

/// Load a bank, reporting whole-document failure as an empty bank plus a
/// human-readable message
pub async fn load_bank_or_message(
    file_path: &Path,
    options: &LoadOptions,
) -> (QuestionBank, Option<String>) {
    match load_bank(file_path, options).await {
        Ok(bank) => (bank, None),
        Err(e) => (QuestionBank::default(), Some(e.to_string())),
    }
}

/// Read the paragraph stream of a .docx file
pub async fn load_paragraphs(
    file_path: &Path,
    options: &LoadOptions,
) -> Result<Vec<RawParagraph>, BankError> {
    validate_docx_file(file_path).map_err(|e| BankError::unavailable(file_path, format!("{e:#}")))?;

    let file_data = tokio::fs::read(file_path)
        .await
        .map_err(|e| BankError::unavailable(file_path, e))?;

    paragraphs_from_bytes(&file_data, options)
        .map_err(|e| BankError::unavailable(file_path, format!("{e:#}")))
}

/// Read the paragraph stream from in-memory .docx bytes
pub fn paragraphs_from_bytes(
    file_data: &[u8],
    options: &LoadOptions,
) -> anyhow::Result<Vec<RawParagraph>> {
    let docx = docx_rs::read_docx(file_data)?;
    let mut media = MediaResolver::new(Cursor::new(file_data))?;

    let mut paragraphs = Vec::new();
    for child in &docx.document.children {
        if let docx_rs::DocumentChild::Paragraph(para) = child {
            let text = extract_paragraph_text(para, options.bold_runs_as_emphasis);
            let image = first_image_relationship(para).and_then(|rel_id| media.resolve(&rel_id));
            paragraphs.push(RawParagraph { text, image });
        }
    }

    Ok(paragraphs)
}
