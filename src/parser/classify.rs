//! Paragraph classification
//!
//! Maps the text of one paragraph to the kind of line it is in the exam
//! convention. Rules are tried in order and the first match wins.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// `**12. Stem text**`
    QuestionStart { id: u32, text: String },
    /// `**Correct Answer:** A, C`
    CorrectAnswer { labels: Vec<String> },
    /// `A. Option text`, optionally preceded by a checkbox glyph
    Option { label: char, text: String },
    /// Anything else
    Other(String),
}

type Constructor = fn(&Captures) -> Option<Line>;

// Precedence is the order of this table
static RULES: Lazy<Vec<(Regex, Constructor)>> = Lazy::new(|| {
    vec![
        (
            Regex::new(r"(?s)^\s*\*\*(\d+)\.\s*(.*)$").unwrap(),
            question_start as Constructor,
        ),
        (
            Regex::new(r"(?is)^\s*(?:\*\*)?correct answer:(?:\*\*)?\s*(.*)$").unwrap(),
            correct_answer as Constructor,
        ),
        (
            Regex::new(r"(?s)^\s*(?:□\s*)?([A-E])\.\s*(.*)$").unwrap(),
            option_line as Constructor,
        ),
    ]
});

static LABEL_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[,\s]+").unwrap());

/// Classify a single paragraph's text.
///
/// Multi-line paragraph text is matched as a whole; `.` in the trailing
/// capture spans line breaks.
pub fn classify(text: &str) -> Line {
    let text = text.trim();
    for (pattern, construct) in RULES.iter() {
        if let Some(line) = pattern.captures(text).and_then(|caps| construct(&caps)) {
            return line;
        }
    }
    Line::Other(text.to_string())
}

fn question_start(caps: &Captures) -> Option<Line> {
    let id = caps[1].parse::<u32>().ok()?;
    let text = caps[2].trim().trim_matches('*').trim().to_string();
    Some(Line::QuestionStart { id, text })
}

fn correct_answer(caps: &Captures) -> Option<Line> {
    let labels = LABEL_SEPARATOR
        .split(&caps[1])
        .map(|token| token.trim().trim_matches('*'))
        .filter(|token| !token.is_empty())
        .map(str::to_uppercase)
        .collect();
    Some(Line::CorrectAnswer { labels })
}

fn option_line(caps: &Captures) -> Option<Line> {
    let label = caps[1].chars().next()?;
    Some(Line::Option {
        label,
        text: caps[2].trim().to_string(),
    })
}
