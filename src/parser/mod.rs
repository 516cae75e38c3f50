//! Question extraction from a classified paragraph stream
//!
//! This module holds the core of the crate: line classification, image
//! association, the question state machine, normalization, and bank
//! assembly. It knows nothing about .docx containers.

pub mod assembler;
pub mod classify;
pub mod image;
pub mod machine;
pub mod normalize;
pub mod pending;

pub use assembler::{BankBuilder, QuestionBank};
pub use classify::{Line, classify};
pub use machine::{QuestionParser, parse_paragraphs};
pub use normalize::Rejection;
pub use pending::PendingQuestion;
