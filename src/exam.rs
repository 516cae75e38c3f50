//! Exam selection and answer tracking
//!
//! An `Exam` is a working copy of part of a question bank: questions in an
//! id range, optionally shuffled, with per-question answer state and a
//! running score. All randomness comes from the caller's RNG.

use std::collections::BTreeSet;

use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

use crate::document::Question;
use crate::parser::QuestionBank;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExamOptions {
    /// Lowest question id included
    pub start_id: u32,
    /// Highest question id included
    pub end_id: u32,
    pub shuffle_questions: bool,
    pub shuffle_answers: bool,
}

impl Default for ExamOptions {
    fn default() -> Self {
        Self {
            start_id: 0,
            end_id: u32::MAX,
            shuffle_questions: false,
            shuffle_answers: false,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExamError {
    #[error("no questions with ids in {start}..={end}")]
    EmptyRange { start: u32, end: u32 },
}

#[derive(Debug, Clone)]
pub struct ExamQuestion {
    question: Question,
    selected: BTreeSet<usize>,
    locked: bool,
}

impl ExamQuestion {
    fn new(question: Question) -> Self {
        Self {
            question,
            selected: BTreeSet::new(),
            locked: false,
        }
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    /// Selected option indices, ascending
    pub fn selected(&self) -> Vec<usize> {
        self.selected.iter().copied().collect()
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Right only when exactly the correct options are selected
    pub fn is_correct(&self) -> bool {
        let correct: BTreeSet<usize> = self.question.correct_indices().into_iter().collect();
        self.selected == correct
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExamStats {
    pub total: usize,
    pub answered: usize,
    pub correct: usize,
}

impl ExamStats {
    pub fn wrong(&self) -> usize {
        self.answered - self.correct
    }

    /// Share of answered questions that were right, 0 when nothing is answered
    pub fn percentage(&self) -> f64 {
        if self.answered == 0 {
            0.0
        } else {
            self.correct as f64 / self.answered as f64 * 100.0
        }
    }
}

#[derive(Debug, Clone)]
pub struct Exam {
    questions: Vec<ExamQuestion>,
    current: usize,
    answered: usize,
    correct: usize,
}

impl Exam {
    pub fn start<R: Rng + ?Sized>(
        bank: &QuestionBank,
        options: &ExamOptions,
        rng: &mut R,
    ) -> Result<Self, ExamError> {
        let mut selection: Vec<Question> = bank
            .iter()
            .filter(|question| (options.start_id..=options.end_id).contains(&question.id))
            .cloned()
            .collect();

        if selection.is_empty() {
            return Err(ExamError::EmptyRange {
                start: options.start_id,
                end: options.end_id,
            });
        }

        if options.shuffle_answers {
            for question in &mut selection {
                question.options.shuffle(rng);
            }
        }
        if options.shuffle_questions {
            selection.shuffle(rng);
        }

        Ok(Self {
            questions: selection.into_iter().map(ExamQuestion::new).collect(),
            current: 0,
            answered: 0,
            correct: 0,
        })
    }

    pub fn questions(&self) -> &[ExamQuestion] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The question being answered, `None` once past the last one
    pub fn current(&self) -> Option<&ExamQuestion> {
        self.questions.get(self.current)
    }

    pub fn is_finished(&self) -> bool {
        self.current >= self.questions.len()
    }

    /// Answer the current question with option `index`.
    ///
    /// Single-choice questions are locked and scored immediately; on
    /// multi-choice questions the option is toggled. Locked questions and
    /// out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        let Some(entry) = self.questions.get_mut(self.current) else {
            return;
        };
        if entry.locked || index >= entry.question.options.len() {
            return;
        }

        if entry.question.is_multichoice {
            if !entry.selected.remove(&index) {
                entry.selected.insert(index);
            }
        } else {
            entry.selected = BTreeSet::from([index]);
            self.lock();
        }
    }

    /// Lock the current question and score it; no-op when already locked.
    /// A question locked without any selection counts as wrong.
    pub fn lock(&mut self) {
        let Some(entry) = self.questions.get_mut(self.current) else {
            return;
        };
        if entry.locked {
            return;
        }
        entry.locked = true;
        self.answered += 1;
        if !entry.selected.is_empty() && entry.is_correct() {
            self.correct += 1;
        }
    }

    /// Move to the next question; may step past the last one
    pub fn advance(&mut self) {
        if self.current < self.questions.len() {
            self.current += 1;
        }
    }

    /// Move back one question; returns false at the first question
    pub fn previous(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.current -= 1;
        true
    }

    pub fn stats(&self) -> ExamStats {
        ExamStats {
            total: self.questions.len(),
            answered: self.answered,
            correct: self.correct,
        }
    }
}
