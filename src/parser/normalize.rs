//! Validation and normalization of finished accumulators

use thiserror::Error;

use super::pending::PendingQuestion;
use crate::document::{AnswerOption, Question};

/// Why an accumulator was dropped instead of becoming a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("no options")]
    NoOptions,
    #[error("no correct answer declared")]
    NoCorrectLabels,
}

pub fn normalize(pending: PendingQuestion) -> Result<Question, Rejection> {
    if pending.options.is_empty() {
        return Err(Rejection::NoOptions);
    }
    if pending.correct_labels.is_empty() {
        return Err(Rejection::NoCorrectLabels);
    }

    // Counted from the declared labels, matched or not
    let is_multichoice = pending.correct_labels.len() > 1;

    let correct = &pending.correct_labels;
    let options = pending
        .options
        .into_iter()
        .map(|(label, text)| AnswerOption {
            text: text.trim().to_string(),
            is_correct: correct.contains(label.to_string().as_str()),
            original_label: label,
        })
        .collect();

    Ok(Question {
        id: pending.id,
        text: pending.text_lines.join("\n").trim().to_string(),
        options,
        is_multichoice,
        image: pending.image,
    })
}
