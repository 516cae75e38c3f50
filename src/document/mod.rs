//! Document loading and data structures module
//!
//! This module reads Microsoft Word (.docx) exam documents into the
//! paragraph stream consumed by the question parser, and defines the
//! question types shared across the crate.

pub(crate) mod io;
pub mod loader;
pub mod models;
pub(crate) mod parsing;

pub use loader::{load_bank, load_bank_or_message, load_paragraphs, paragraphs_from_bytes};
pub use models::*;
