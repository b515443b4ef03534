use diagrammer_document::{DocumentFormat, DocumentPreprocessor};
use diagrammer_error::DocumentErrorKind;

#[test]
fn plain_text_is_trimmed_and_bom_removed() {
    let doc = DocumentPreprocessor::default()
        .prepare("\u{feff}  Orders flow into a queue.\r\n".as_bytes(), DocumentFormat::Text)
        .unwrap();
    assert_eq!(doc.text(), "Orders flow into a queue.");
    assert!(!doc.truncated());
    assert_eq!(*doc.format(), DocumentFormat::Text);
}

#[test]
fn corrupt_binary_formats_are_unreadable() {
    for format in [DocumentFormat::Pdf, DocumentFormat::Docx] {
        let err = DocumentPreprocessor::default()
            .prepare(b"%PDF-1.7 truncated", format)
            .unwrap_err();
        match err.kind {
            DocumentErrorKind::Unreadable { format: name, .. } => assert_eq!(name, format.to_string()),
            other => panic!("expected unreadable {format}, got {other}"),
        }
    }
}

#[test]
fn invalid_utf8_is_rejected() {
    let err = DocumentPreprocessor::default()
        .prepare(&[0xff, 0xfe, 0x00], DocumentFormat::Text)
        .unwrap_err();
    assert!(matches!(err.kind, DocumentErrorKind::InvalidEncoding(_)));
}

#[test]
fn whitespace_only_is_empty() {
    let err = DocumentPreprocessor::default()
        .prepare(b" \n\t ", DocumentFormat::Text)
        .unwrap_err();
    assert_eq!(err.kind, DocumentErrorKind::Empty);

    let err = DocumentPreprocessor::default()
        .prepare_text("---\n", DocumentFormat::Markdown)
        .unwrap_err();
    assert_eq!(err.kind, DocumentErrorKind::Empty);
}

#[test]
fn long_documents_are_cut_on_char_boundary() {
    let doc = DocumentPreprocessor::new(5)
        .prepare_text("ääääääää", DocumentFormat::Text)
        .unwrap();
    assert_eq!(doc.text(), "äääää");
    assert!(doc.truncated());
}
