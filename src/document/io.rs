//! Container validation and embedded media access
//!
//! This module checks that a path is a readable .docx container and
//! resolves image relationship ids to the bytes stored in the archive.

use anyhow::{Context, Result, bail};
use quick_xml::Reader;
use quick_xml::events::Event;
use std::collections::HashMap;
use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;
use zip::ZipArchive;

const RELATIONSHIPS_PATH: &str = "word/_rels/document.xml.rels";

/// Validates that the file is a legitimate .docx file
pub(crate) fn validate_docx_file(file_path: &Path) -> Result<()> {
    if !file_path.exists() {
        bail!("File not found: {}", file_path.display());
    }

    let extension = file_path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");

    if !extension.eq_ignore_ascii_case("docx") {
        bail!(
            "Invalid file format. Expected .docx file, got .{}\n\
            Note: only Word .docx exam documents are supported (not .doc, .pdf, .zip, etc.)",
            extension
        );
    }

    let file = File::open(file_path)?;
    let mut archive = ZipArchive::new(file).context("not a valid .docx (ZIP) container")?;

    if archive.by_name("word/document.xml").is_err() {
        if archive.by_name("xl/workbook.xml").is_ok() {
            bail!(
                "This appears to be an Excel file (.xlsx).\n\
                Only Word documents (.docx) contain exam questions."
            );
        }

        bail!(
            "Invalid .docx file: missing word/document.xml\n\
            This file may be corrupted or is not a valid Word document."
        );
    }

    Ok(())
}

/// Resolves image relationship ids (`rId7`) to media bytes inside a container
pub(crate) struct MediaResolver<R> {
    archive: ZipArchive<R>,
    relationships: HashMap<String, String>,
}

impl<R: Read + Seek> MediaResolver<R> {
    pub(crate) fn new(reader: R) -> Result<Self> {
        let mut archive = ZipArchive::new(reader)?;
        let relationships = parse_relationships(&mut archive)?;
        Ok(Self {
            archive,
            relationships,
        })
    }

    /// Read the bytes behind a relationship id.
    ///
    /// Returns `None` for unknown ids and missing archive entries.
    pub(crate) fn resolve(&mut self, rel_id: &str) -> Option<Vec<u8>> {
        let target = self.relationships.get(rel_id)?;
        let full_path = media_path(target);

        let mut entry = match self.archive.by_name(&full_path) {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(rel_id, path = %full_path, "image entry not found: {e}");
                return None;
            }
        };

        let mut bytes = Vec::new();
        if let Err(e) = entry.read_to_end(&mut bytes) {
            tracing::warn!(rel_id, path = %full_path, "failed to read image: {e}");
            return None;
        }
        Some(bytes)
    }
}

/// Relationship targets are relative to `word/` unless they start with `/`
fn media_path(target: &str) -> String {
    match target.strip_prefix('/') {
        Some(absolute) => absolute.to_string(),
        None => format!("word/{target}"),
    }
}

/// Parse `word/_rels/document.xml.rels` into an id -> target map
fn parse_relationships<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
) -> Result<HashMap<String, String>> {
    let xml_content = {
        let Ok(mut rels_file) = archive.by_name(RELATIONSHIPS_PATH) else {
            return Ok(HashMap::new());
        };
        let mut content = String::new();
        rels_file.read_to_string(&mut content)?;
        content
    };

    let mut relationships = HashMap::new();
    let mut reader = Reader::from_str(&xml_content);
    reader.trim_text(true);

    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Empty(e)) | Ok(Event::Start(e))
                if e.local_name().as_ref() == b"Relationship" =>
            {
                let mut rel_id = None;
                let mut target = None;

                for attr in e.attributes() {
                    let attr = attr.context("invalid relationship attribute")?;
                    match attr.key.as_ref() {
                        b"Id" => rel_id = Some(String::from_utf8_lossy(&attr.value).to_string()),
                        b"Target" => {
                            target = Some(String::from_utf8_lossy(&attr.value).to_string())
                        }
                        _ => {}
                    }
                }

                if let (Some(id), Some(tgt)) = (rel_id, target) {
                    relationships.insert(id, tgt);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => bail!("error parsing relationships: {e}"),
            _ => {}
        }
        buf.clear();
    }

    Ok(relationships)
}
