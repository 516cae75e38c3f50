//! Question bank assembly
//!
//! Questions are appended in finalization order while parsing and exposed
//! sorted by id once parsing is done.

use crate::document::Question;

/// Append-only collector used while parsing
#[derive(Debug, Default)]
pub struct BankBuilder {
    questions: Vec<Question>,
}

impl BankBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, question: Question) {
        self.questions.push(question);
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn build(self) -> QuestionBank {
        QuestionBank::from_questions(self.questions)
    }
}

/// Immutable question bank, ordered ascending by id.
///
/// Duplicate ids are kept and stay in the order they were finalized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn from_questions(mut questions: Vec<Question>) -> Self {
        // sort_by_key is stable
        questions.sort_by_key(|question| question.id);
        Self { questions }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    pub fn into_questions(self) -> Vec<Question> {
        self.questions
    }
}

impl<'a> IntoIterator for &'a QuestionBank {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}
