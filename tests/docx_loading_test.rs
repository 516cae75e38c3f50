use docx_rs::{Docx, Paragraph, Run};
use quizdoc::document::load_paragraphs;
use quizdoc::{BankError, LoadOptions, export, load_bank, load_bank_or_message};
use std::path::Path;

fn text_paragraph(text: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text))
}

fn write_docx(path: &Path, paragraphs: Vec<Paragraph>) {
    let mut docx = Docx::new();
    for paragraph in paragraphs {
        docx = docx.add_paragraph(paragraph);
    }
    let file = std::fs::File::create(path).expect("Failed to create fixture");
    docx.build().pack(file).expect("Failed to write fixture");
}

fn exam_paragraphs() -> Vec<Paragraph> {
    vec![
        text_paragraph("HCIA Datacom practice exam"),
        text_paragraph("**1. What is 2+2?**"),
        text_paragraph("A. 3"),
        text_paragraph("B. 4"),
        text_paragraph("**Correct Answer:** B"),
        Paragraph::new(),
        text_paragraph("**2. Pick all prime numbers**"),
        text_paragraph("continued clause"),
        text_paragraph("A. 2"),
        text_paragraph("B. 4"),
        text_paragraph("C. 3"),
        text_paragraph("**Correct Answer:** A, C"),
        text_paragraph("**3. Unanswered**"),
        text_paragraph("A. nothing"),
    ]
}

#[tokio::test]
async fn test_load_bank_from_docx() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("exam.docx");
    write_docx(&path, exam_paragraphs());

    let bank = load_bank(&path, &LoadOptions::default())
        .await
        .expect("Failed to load exam document");

    assert_eq!(bank.len(), 2);
    let first = &bank.questions()[0];
    assert_eq!(first.id, 1);
    assert_eq!(first.text, "What is 2+2?");
    assert_eq!(first.correct_indices(), vec![1]);

    let second = &bank.questions()[1];
    assert_eq!(second.text, "Pick all prime numbers\ncontinued clause");
    assert!(second.is_multichoice);
    assert_eq!(second.correct_indices(), vec![0, 2]);
}

#[tokio::test]
async fn test_load_paragraphs_in_document_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("exam.docx");
    write_docx(&path, exam_paragraphs());

    let paragraphs = load_paragraphs(&path, &LoadOptions::default())
        .await
        .expect("Failed to read paragraphs");

    let texts: Vec<&str> = paragraphs.iter().map(|p| p.text.as_str()).collect();
    assert_eq!(texts.len(), 14);
    assert_eq!(texts[0], "HCIA Datacom practice exam");
    assert_eq!(texts[1], "**1. What is 2+2?**");
    assert_eq!(texts[4], "**Correct Answer:** B");
    assert_eq!(texts[5], "");
    assert_eq!(texts[13], "A. nothing");
    assert!(paragraphs.iter().all(|p| p.image.is_none()));

    let missing = dir.path().join("missing.docx");
    let result = load_paragraphs(&missing, &LoadOptions::default()).await;
    assert!(matches!(result, Err(BankError::DocumentUnavailable { .. })));
}

#[tokio::test]
async fn test_bold_runs_as_emphasis() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bold.docx");
    write_docx(
        &path,
        vec![
            Paragraph::new().add_run(Run::new().add_text("7. Which layer routes packets?").bold()),
            text_paragraph("A. Network"),
            text_paragraph("B. Session"),
            Paragraph::new()
                .add_run(Run::new().add_text("Correct Answer:").bold())
                .add_run(Run::new().add_text(" A")),
        ],
    );

    let plain = load_bank(&path, &LoadOptions::default()).await.unwrap();
    assert!(plain.is_empty(), "bold formatting alone is not a question start");

    let options = LoadOptions {
        bold_runs_as_emphasis: true,
    };
    let bank = load_bank(&path, &options).await.unwrap();
    assert_eq!(bank.len(), 1);
    assert_eq!(bank.questions()[0].id, 7);
    assert_eq!(bank.questions()[0].text, "Which layer routes packets?");
}

#[tokio::test]
async fn test_missing_document_is_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.docx");

    let result = load_bank(&path, &LoadOptions::default()).await;
    assert!(matches!(result, Err(BankError::DocumentUnavailable { .. })));

    let (bank, message) = load_bank_or_message(&path, &LoadOptions::default()).await;
    assert!(bank.is_empty());
    let message = message.expect("expected an error message");
    assert!(message.contains("missing.docx"));
}

#[tokio::test]
async fn test_corrupt_document_is_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("corrupt.docx");
    std::fs::write(&path, b"definitely not a zip archive").unwrap();

    let (bank, message) = load_bank_or_message(&path, &LoadOptions::default()).await;
    assert!(bank.is_empty());
    assert!(message.is_some());
}

#[tokio::test]
async fn test_docx_and_json_paths_agree() {
    let dir = tempfile::tempdir().unwrap();
    let docx_path = dir.path().join("exam.docx");
    write_docx(&docx_path, exam_paragraphs());

    let bank = load_bank(&docx_path, &LoadOptions::default()).await.unwrap();
    let json = export::export_to_json(bank.questions()).unwrap();

    let json_path = dir.path().join("exam.json");
    std::fs::write(&json_path, &json).unwrap();
    let reloaded = export::load_records(&json_path).unwrap();

    assert_eq!(reloaded, bank);
}

#[tokio::test]
async fn test_reloading_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("exam.docx");
    write_docx(&path, exam_paragraphs());

    let first = load_bank(&path, &LoadOptions::default()).await.unwrap();
    let second = load_bank(&path, &LoadOptions::default()).await.unwrap();
    assert_eq!(first, second);
}
