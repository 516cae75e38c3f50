//! Document parsing utilities
//!
//! Helpers that flatten docx-rs structures into plain paragraph data.

pub(crate) mod formatting;
