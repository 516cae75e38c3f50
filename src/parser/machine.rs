//! The paragraph-driven question state machine
//!
//! One forward pass over the paragraph stream. At most one question is open
//! at a time; it is finalized when the next question starts or the stream
//! ends.

use tracing::debug;

use super::assembler::{BankBuilder, QuestionBank};
use super::classify::{Line, classify};
use super::image::associate_image;
use super::normalize::normalize;
use super::pending::PendingQuestion;
use crate::document::RawParagraph;

#[derive(Debug, Default)]
enum ParserState {
    #[default]
    Idle,
    Collecting(PendingQuestion),
}

impl ParserState {
    fn pending_mut(&mut self) -> Option<&mut PendingQuestion> {
        match self {
            ParserState::Idle => None,
            ParserState::Collecting(pending) => Some(pending),
        }
    }
}

#[derive(Debug, Default)]
pub struct QuestionParser {
    state: ParserState,
    bank: BankBuilder,
}

impl QuestionParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a question is currently open
    pub fn is_collecting(&self) -> bool {
        matches!(self.state, ParserState::Collecting(_))
    }

    /// Consume one paragraph
    pub fn feed(&mut self, paragraph: RawParagraph) {
        if paragraph.is_blank() {
            return;
        }

        // The image is judged against the question open before this
        // paragraph's own text takes effect.
        associate_image(self.state.pending_mut(), paragraph.image);

        match classify(&paragraph.text) {
            Line::QuestionStart { id, text } => {
                self.finalize();
                self.state = ParserState::Collecting(PendingQuestion::open(id, text));
            }
            line => {
                let Some(pending) = self.state.pending_mut() else {
                    return;
                };
                match line {
                    Line::CorrectAnswer { labels } => pending.set_correct_labels(labels),
                    Line::Option { label, text } => pending.add_option(label, text),
                    Line::Other(text) => pending.add_free_text(text),
                    Line::QuestionStart { .. } => {}
                }
            }
        }
    }

    /// Close the stream and return the assembled bank
    pub fn finish(mut self) -> QuestionBank {
        self.finalize();
        self.bank.build()
    }

    fn finalize(&mut self) {
        let ParserState::Collecting(pending) = std::mem::take(&mut self.state) else {
            return;
        };
        let id = pending.id;
        match normalize(pending) {
            Ok(question) => self.bank.push(question),
            Err(reason) => debug!(id, %reason, "dropping question"),
        }
    }
}

/// Parse a complete paragraph stream into a question bank
pub fn parse_paragraphs<I>(paragraphs: I) -> QuestionBank
where
    I: IntoIterator<Item = RawParagraph>,
{
    let mut parser = QuestionParser::new();
    for paragraph in paragraphs {
        parser.feed(paragraph);
    }
    parser.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paragraphs(lines: &[&str]) -> Vec<RawParagraph> {
        lines.iter().map(|line| RawParagraph::text(*line)).collect()
    }

    #[test]
    fn test_idle_ignores_preamble() {
        let bank = parse_paragraphs(paragraphs(&[
            "Exam preparation notes",
            "A. stray option",
            "**Correct Answer:** A",
        ]));
        assert!(bank.is_empty());
    }

    #[test]
    fn test_blank_paragraph_is_skipped() {
        let mut parser = QuestionParser::new();
        parser.feed(RawParagraph::text("**1. Stem**"));
        parser.feed(RawParagraph::text("   "));
        parser.feed(RawParagraph::text("A. x"));
        parser.feed(RawParagraph::text("**Correct Answer:** A"));
        assert!(parser.is_collecting());

        let bank = parser.finish();
        assert_eq!(bank.questions()[0].text, "Stem");
    }

    #[test]
    fn test_answer_line_does_not_close_question() {
        let bank = parse_paragraphs(paragraphs(&[
            "**1. Stem**",
            "A. first",
            "**Correct Answer:** B",
            "B. second",
            "Explanation text",
        ]));
        let question = &bank.questions()[0];
        assert_eq!(question.options.len(), 2);
        assert_eq!(question.options[1].text, "second\nExplanation text");
        assert!(question.options[1].is_correct);
    }

    #[test]
    fn test_later_answer_line_replaces_earlier() {
        let bank = parse_paragraphs(paragraphs(&[
            "**1. Stem**",
            "A. a",
            "B. b",
            "**Correct Answer:** A",
            "**Correct Answer:** B",
        ]));
        assert_eq!(bank.questions()[0].correct_indices(), vec![1]);
    }

    #[test]
    fn test_malformed_question_does_not_affect_neighbours() {
        let bank = parse_paragraphs(paragraphs(&[
            "**1. No options**",
            "**Correct Answer:** A",
            "**2. No answer**",
            "A. a",
            "**3. Fine**",
            "A. a",
            "**Correct Answer:** A",
        ]));
        let ids: Vec<u32> = bank.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn test_image_only_paragraph_adds_empty_line() {
        let bank = parse_paragraphs(vec![
            RawParagraph::text("**1. Look**"),
            RawParagraph::with_image("", vec![0xAB]),
            RawParagraph::text("at this"),
            RawParagraph::text("A. a"),
            RawParagraph::text("**Correct Answer:** A"),
        ]);
        let question = &bank.questions()[0];
        assert_eq!(question.text, "Look\n\nat this");
        assert_eq!(question.image, Some(vec![0xAB]));
    }

    #[test]
    fn test_image_on_question_start_belongs_to_previous_question() {
        let bank = parse_paragraphs(vec![
            RawParagraph::text("**1. First**"),
            RawParagraph::text("A. a"),
            RawParagraph::with_image("**2. Second**", vec![7]),
            RawParagraph::text("A. a"),
            RawParagraph::text("**Correct Answer:** A"),
        ]);
        // Question 1 has no answer and is dropped along with the image
        assert_eq!(bank.len(), 1);
        assert_eq!(bank.questions()[0].id, 2);
        assert!(bank.questions()[0].image.is_none());
    }
}
