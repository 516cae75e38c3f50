//! Text and image extraction from docx-rs paragraphs
//!
//! This module flattens a docx-rs paragraph into the plain text the question
//! parser classifies, and finds the relationship id of its first picture.

/// A stretch of paragraph text sharing the same weight
#[derive(Debug, Clone, PartialEq)]
struct TextSegment {
    text: String,
    bold: bool,
}

/// Extract plain text from a paragraph, handling various child elements.
///
/// With `bold_as_emphasis` set, bold stretches are wrapped in `**` unless the
/// author already typed the markers.
pub(crate) fn extract_paragraph_text(para: &docx_rs::Paragraph, bold_as_emphasis: bool) -> String {
    let mut segments = Vec::new();

    for child in &para.children {
        match child {
            docx_rs::ParagraphChild::Run(run) => push_run(&mut segments, run),
            docx_rs::ParagraphChild::Insert(insert) => {
                for child in &insert.children {
                    if let docx_rs::InsertChild::Run(run) = child {
                        push_run(&mut segments, run);
                    }
                }
            }
            docx_rs::ParagraphChild::Delete(_) => {
                // Skip deletions (track changes)
            }
            _ => {}
        }
    }

    let text: String = consolidate_segments(segments)
        .into_iter()
        .map(|segment| {
            let trimmed = segment.text.trim();
            if bold_as_emphasis && segment.bold && !trimmed.is_empty() && !trimmed.contains("**") {
                segment.text.replacen(trimmed, &format!("**{trimmed}**"), 1)
            } else {
                segment.text
            }
        })
        .collect();

    text.trim().to_string()
}

fn push_run(segments: &mut Vec<TextSegment>, run: &docx_rs::Run) {
    let text = extract_run_text(run);
    if !text.is_empty() {
        segments.push(TextSegment {
            text,
            bold: is_bold(run),
        });
    }
}

/// `<w:b w:val="0"/>` parses to a disabled `Bold`, which is not bold
fn is_bold(run: &docx_rs::Run) -> bool {
    run.run_property
        .bold
        .as_ref()
        .is_some_and(|bold| *bold != docx_rs::Bold::new().disable())
}

/// Extract text from a run using docx-rs features
pub(crate) fn extract_run_text(run: &docx_rs::Run) -> String {
    let mut text = String::new();

    for child in &run.children {
        match child {
            docx_rs::RunChild::Text(text_elem) => {
                text.push_str(&text_elem.text);
            }
            docx_rs::RunChild::Tab(_) => {
                text.push('\t');
            }
            docx_rs::RunChild::Break(_) => {
                text.push('\n');
            }
            _ => {}
        }
    }

    text
}

/// Merge adjacent segments with the same weight
fn consolidate_segments(segments: Vec<TextSegment>) -> Vec<TextSegment> {
    let mut consolidated: Vec<TextSegment> = Vec::new();

    for segment in segments {
        match consolidated.last_mut() {
            Some(current) if current.bold == segment.bold => current.text.push_str(&segment.text),
            _ => consolidated.push(segment),
        }
    }

    consolidated
}

/// Relationship id of the first picture embedded in the paragraph
pub(crate) fn first_image_relationship(para: &docx_rs::Paragraph) -> Option<String> {
    para.children.iter().find_map(|child| match child {
        docx_rs::ParagraphChild::Run(run) => run_image_relationship(run),
        docx_rs::ParagraphChild::Insert(insert) => {
            insert.children.iter().find_map(|child| match child {
                docx_rs::InsertChild::Run(run) => run_image_relationship(run),
                _ => None,
            })
        }
        _ => None,
    })
}

fn run_image_relationship(run: &docx_rs::Run) -> Option<String> {
    run.children.iter().find_map(|child| match child {
        docx_rs::RunChild::Drawing(drawing) => match &drawing.data {
            Some(docx_rs::DrawingData::Pic(pic)) if !pic.id.is_empty() => Some(pic.id.clone()),
            _ => None,
        },
        _ => None,
    })
}
