//! quizdoc: question bank extraction for .docx exam documents
//!
//! This library reads Word documents that encode multiple-choice questions
//! with a loose textual convention (bold numbered stems, lettered options,
//! a "Correct Answer" line, optional images) and turns them into validated,
//! id-ordered question records.

pub mod config;
pub mod document;
pub mod error;
pub mod exam;
pub mod export;
pub mod logging;
pub mod parser;

/// Export format options
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Text,
    Markdown,
}

// Re-export commonly used types
pub use config::Config;
pub use document::{
    AnswerOption, LoadOptions, Question, QuestionRecord, RawParagraph, load_bank,
    load_bank_or_message,
};
pub use error::BankError;
pub use exam::{Exam, ExamOptions};
pub use parser::{QuestionBank, QuestionParser, parse_paragraphs};
