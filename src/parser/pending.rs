//! The in-progress question accumulator

use std::collections::{BTreeMap, BTreeSet};

/// A question being built up across paragraphs until the next boundary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingQuestion {
    pub id: u32,
    pub text_lines: Vec<String>,
    /// Keyed by label so iteration is always in ascending label order
    pub options: BTreeMap<char, String>,
    pub last_label: Option<char>,
    pub correct_labels: BTreeSet<String>,
    pub image: Option<Vec<u8>>,
}

impl PendingQuestion {
    pub fn open(id: u32, inline_text: String) -> Self {
        let text_lines = if inline_text.is_empty() {
            Vec::new()
        } else {
            vec![inline_text]
        };
        Self {
            id,
            text_lines,
            ..Self::default()
        }
    }

    pub fn set_correct_labels(&mut self, labels: Vec<String>) {
        self.correct_labels = labels.into_iter().collect();
    }

    /// Declaring a label again overwrites its text
    pub fn add_option(&mut self, label: char, text: String) {
        self.options.insert(label, text);
        self.last_label = Some(label);
    }

    /// Free text belongs to the stem until the first option, and to the most
    /// recent option afterwards.
    pub fn add_free_text(&mut self, line: String) {
        match self.last_label {
            Some(label) if !self.options.is_empty() => {
                if let Some(text) = self.options.get_mut(&label) {
                    text.push('\n');
                    text.push_str(&line);
                }
            }
            _ => self.text_lines.push(line),
        }
    }
}
