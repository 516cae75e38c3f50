//! Bank export and JSON import
//!
//! JSON output follows the pre-extracted record schema, so a bank written
//! here can be read back by `load_records()` or by any quiz engine that
//! accepts pre-extracted questions.

use anyhow::Result;
use std::fmt::Write;
use std::path::Path;

use crate::document::{Question, QuestionRecord};
use crate::error::BankError;
use crate::parser::QuestionBank;

pub fn export_to_json(questions: &[Question]) -> Result<String> {
    let records: Vec<QuestionRecord> = questions.iter().map(Question::to_record).collect();
    Ok(serde_json::to_string_pretty(&records)?)
}

/// Parse a JSON array of question records into a bank
pub fn parse_records(json: &str) -> Result<QuestionBank, BankError> {
    let records: Vec<QuestionRecord> = serde_json::from_str(json)?;
    let questions = records
        .into_iter()
        .map(Question::from_record)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(QuestionBank::from_questions(questions))
}

/// Read a JSON record file into a bank
pub fn load_records(path: &Path) -> Result<QuestionBank, BankError> {
    let json = std::fs::read_to_string(path).map_err(|e| BankError::unavailable(path, e))?;
    parse_records(&json)
}

fn kind_label(question: &Question) -> &'static str {
    if question.is_multichoice {
        "Multiple Choice"
    } else {
        "Single Choice"
    }
}

pub fn export_to_text(questions: &[Question]) -> Result<String> {
    let mut output = String::new();

    for question in questions {
        writeln!(output, "ID: {}  ({})", question.id, kind_label(question))?;
        writeln!(output, "{}", question.text)?;
        if let Some(image) = &question.image {
            writeln!(output, "[Image: {} bytes]", image.len())?;
        }
        for option in &question.options {
            let marker = if option.is_correct { "*" } else { " " };
            writeln!(output, "  {marker} {}. {}", option.original_label, option.text)?;
        }
        output.push('\n');
    }

    Ok(output)
}

pub fn export_to_markdown(questions: &[Question]) -> Result<String> {
    let mut output = String::new();

    for question in questions {
        writeln!(output, "## Question {}", question.id)?;
        output.push('\n');
        writeln!(output, "*{}*", kind_label(question))?;
        output.push('\n');
        writeln!(output, "{}", question.text)?;
        output.push('\n');
        if question.image.is_some() {
            writeln!(output, "*(image)*")?;
            output.push('\n');
        }
        for option in &question.options {
            let checkbox = if option.is_correct { "[x]" } else { "[ ]" };
            // Keep wrapped option lines inside the list item
            let text = option.text.replace('\n', "\n  ");
            writeln!(output, "- {checkbox} **{}.** {text}", option.original_label)?;
        }
        output.push('\n');
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::AnswerOption;

    fn sample() -> Vec<Question> {
        vec![Question {
            id: 4,
            text: "Pick one".to_string(),
            options: vec![
                AnswerOption {
                    text: "first".to_string(),
                    is_correct: false,
                    original_label: 'A',
                },
                AnswerOption {
                    text: "second".to_string(),
                    is_correct: true,
                    original_label: 'B',
                },
            ],
            is_multichoice: false,
            image: Some(vec![0x89, 0x50, 0x4E, 0x47]),
        }]
    }

    #[test]
    fn test_json_uses_record_schema() {
        let json = export_to_json(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let record = &value[0];

        assert_eq!(record["id"], 4);
        assert_eq!(record["text"], "Pick one");
        assert_eq!(record["is_multichoice"], false);
        assert_eq!(record["image_base64"], "iVBORw==");
        assert_eq!(record["options"][1]["text"], "second");
        assert_eq!(record["options"][1]["is_correct"], true);
        assert!(record["options"][0].get("original_label").is_none());
    }

    #[test]
    fn test_parse_records_sorts_and_decodes() {
        let json = r#"[
            {"id": 9, "text": "late", "options": [{"text": "x", "is_correct": true}],
             "is_multichoice": false, "image_base64": null},
            {"id": 2, "text": "early", "options": [{"text": "y", "is_correct": false},
             {"text": "z", "is_correct": true}], "is_multichoice": false, "image_base64": "AQID"}
        ]"#;
        let bank = parse_records(json).unwrap();
        let questions = bank.questions();

        assert_eq!(questions[0].id, 2);
        assert_eq!(questions[0].image, Some(vec![1, 2, 3]));
        assert_eq!(questions[0].options[1].original_label, 'B');
        assert_eq!(questions[1].image, None);
    }

    #[test]
    fn test_parse_records_rejects_bad_image() {
        let json = r#"[{"id": 1, "text": "t", "options": [], "is_multichoice": false,
                        "image_base64": "not base64!"}]"#;
        assert!(matches!(
            parse_records(json),
            Err(BankError::InvalidImage { id: 1, .. })
        ));
    }

    #[test]
    fn test_parse_records_rejects_bad_json() {
        assert!(matches!(
            parse_records("{"),
            Err(BankError::InvalidRecords(_))
        ));
    }

    #[test]
    fn test_text_export_marks_correct_option() {
        let text = export_to_text(&sample()).unwrap();
        assert!(text.contains("ID: 4  (Single Choice)"));
        assert!(text.contains("  * B. second"));
        assert!(text.contains("    A. first"));
        assert!(text.contains("[Image: 4 bytes]"));
    }

    #[test]
    fn test_markdown_export() {
        let markdown = export_to_markdown(&sample()).unwrap();
        assert!(markdown.contains("## Question 4"));
        assert!(markdown.contains("- [x] **B.** second"));
        assert!(markdown.contains("- [ ] **A.** first"));
    }
}
