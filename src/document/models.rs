//! Core data structures for question bank representation
//!
//! This module defines the public types shared by the docx loader, the
//! question parser and the exporters: raw paragraphs coming out of a
//! document, finished questions, and the JSON interchange records.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::error::BankError;

/// Labels assigned to imported options, in order
const OPTION_LABELS: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Options controlling how a .docx file is turned into paragraphs
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Wrap bold runs in `**` markers so real bold formatting follows the
    /// same textual convention as literal asterisks.
    pub bold_runs_as_emphasis: bool,
}

/// One paragraph of the source document, with its first embedded image
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawParagraph {
    pub text: String,
    pub image: Option<Vec<u8>>,
}

impl RawParagraph {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            image: None,
        }
    }

    pub fn with_image(text: impl Into<String>, image: Vec<u8>) -> Self {
        Self {
            text: text.into(),
            image: Some(image),
        }
    }

    /// A paragraph with no text and no image carries nothing for the parser
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty() && self.image.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOption {
    pub text: String,
    pub is_correct: bool,
    pub original_label: char,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub options: Vec<AnswerOption>,
    pub is_multichoice: bool,
    pub image: Option<Vec<u8>>,
}

impl Question {
    /// Indices of the options flagged correct, in option order
    pub fn correct_indices(&self) -> Vec<usize> {
        self.options
            .iter()
            .enumerate()
            .filter(|(_, option)| option.is_correct)
            .map(|(index, _)| index)
            .collect()
    }

    /// Convert into the pre-extracted JSON record shape
    pub fn to_record(&self) -> QuestionRecord {
        QuestionRecord {
            id: self.id,
            text: self.text.clone(),
            options: self
                .options
                .iter()
                .map(|option| OptionRecord {
                    text: option.text.clone(),
                    is_correct: option.is_correct,
                })
                .collect(),
            is_multichoice: self.is_multichoice,
            image_base64: self.image.as_ref().map(|bytes| STANDARD.encode(bytes)),
        }
    }

    /// Build a question from a pre-extracted record.
    ///
    /// Records carry no option labels, so labels are assigned by position.
    pub fn from_record(record: QuestionRecord) -> Result<Self, BankError> {
        let image = match record.image_base64 {
            Some(encoded) => Some(
                STANDARD
                    .decode(encoded.as_bytes())
                    .map_err(|source| BankError::InvalidImage {
                        id: record.id,
                        source,
                    })?,
            ),
            None => None,
        };

        let options = record
            .options
            .into_iter()
            .enumerate()
            .map(|(index, option)| AnswerOption {
                text: option.text,
                is_correct: option.is_correct,
                original_label: OPTION_LABELS.get(index).copied().unwrap_or('?'),
            })
            .collect();

        Ok(Self {
            id: record.id,
            text: record.text,
            options,
            is_multichoice: record.is_multichoice,
            image,
        })
    }
}

/// Pre-extracted question record, the JSON contract shared with quiz engines
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub id: u32,
    pub text: String,
    pub options: Vec<OptionRecord>,
    pub is_multichoice: bool,
    pub image_base64: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionRecord {
    pub text: String,
    pub is_correct: bool,
}
