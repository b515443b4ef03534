use diagrammer_document::{DocumentFormat, DocumentPreprocessor, docx_to_text, pdf_to_text};
use diagrammer_error::DocumentErrorKind;
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};
use std::io::{Cursor, Write};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// One PDF page per entry, each line drawn with its own `Tj`.
fn pdf_with_pages(pages: &[&[&str]]) -> anyhow::Result<Vec<u8>> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for lines in pages {
        let mut operations = vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 12.into()]),
            Operation::new("Td", vec![72.into(), 720.into()]),
        ];
        for line in lines.iter() {
            operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
            operations.push(Operation::new("Td", vec![0.into(), (-14).into()]));
        }
        operations.push(Operation::new("ET", vec![]));
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    Ok(bytes)
}

/// Minimal DOCX archive around a `word/document.xml` body.
fn docx_with_body(body: &str) -> anyhow::Result<Vec<u8>> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    zip.start_file("[Content_Types].xml", options)?;
    zip.write_all(br#"<?xml version="1.0" encoding="UTF-8"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"/>"#)?;
    zip.start_file("word/document.xml", options)?;
    write!(
        zip,
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}</w:body></w:document>"#
    )?;
    Ok(zip.finish()?.into_inner())
}

#[test]
fn pdf_text_layer_is_extracted_in_page_order() -> anyhow::Result<()> {
    let bytes = pdf_with_pages(&[
        &["Clients call the gateway"],
        &["The gateway reads from Redis"],
    ])?;

    let text = pdf_to_text(&bytes)?;

    let first = text.find("Clients call the gateway").expect("first page text");
    let second = text.find("The gateway reads from Redis").expect("second page text");
    assert!(first < second);
    Ok(())
}

#[test]
fn pdf_document_is_prepared_for_analysis() -> anyhow::Result<()> {
    let bytes = pdf_with_pages(&[&["Orders flow into Kafka", "Workers write to Postgres"]])?;

    let doc = DocumentPreprocessor::default().prepare(&bytes, DocumentFormat::Pdf)?;

    assert_eq!(*doc.format(), DocumentFormat::Pdf);
    assert!(doc.text().contains("Orders flow into Kafka"));
    assert!(doc.text().contains("Workers write to Postgres"));
    assert_eq!(doc.text(), doc.text().trim());
    assert!(!doc.text().contains("\n\n\n"));
    Ok(())
}

#[test]
fn pdf_without_text_is_empty() -> anyhow::Result<()> {
    let bytes = pdf_with_pages(&[&[]])?;

    let err = DocumentPreprocessor::default()
        .prepare(&bytes, DocumentFormat::Pdf)
        .unwrap_err();

    assert_eq!(err.kind, DocumentErrorKind::Empty);
    Ok(())
}

#[test]
fn garbage_pdf_is_unreadable() {
    let err = pdf_to_text(b"%PDF-1.4\nnot really a pdf").unwrap_err();
    assert!(matches!(
        err.kind,
        DocumentErrorKind::Unreadable { ref format, .. } if format == "pdf"
    ));
}

#[test]
fn docx_paragraphs_become_lines() -> anyhow::Result<()> {
    let bytes = docx_with_body(
        r#"<w:p><w:r><w:t>Payments</w:t></w:r><w:r><w:t xml:space="preserve"> service</w:t></w:r></w:p><w:p><w:r><w:t>Talks to Stripe &amp; the ledger</w:t></w:r></w:p>"#,
    )?;

    assert_eq!(docx_to_text(&bytes)?, "Payments service\nTalks to Stripe & the ledger\n");

    let doc = DocumentPreprocessor::default().prepare(&bytes, DocumentFormat::Docx)?;
    assert_eq!(doc.text(), "Payments service\nTalks to Stripe & the ledger");
    assert!(!doc.truncated());
    Ok(())
}

#[test]
fn docx_is_truncated_like_text() -> anyhow::Result<()> {
    let bytes = docx_with_body("<w:p><w:r><w:t>abcdefghij</w:t></w:r></w:p>")?;

    let doc = DocumentPreprocessor::new(4).prepare(&bytes, DocumentFormat::Docx)?;

    assert_eq!(doc.text(), "abcd");
    assert!(doc.truncated());
    Ok(())
}

#[test]
fn docx_without_body_part_is_unreadable() -> anyhow::Result<()> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    zip.start_file("word/styles.xml", SimpleFileOptions::default())?;
    zip.write_all(b"<w:styles/>")?;
    let bytes = zip.finish()?.into_inner();

    let err = docx_to_text(&bytes).unwrap_err();

    match err.kind {
        DocumentErrorKind::Unreadable { format, reason } => {
            assert_eq!(format, "docx");
            assert!(!reason.is_empty());
        }
        other => panic!("expected unreadable, got {other}"),
    }
    Ok(())
}

#[test]
fn plain_bytes_are_not_a_docx() {
    let err = DocumentPreprocessor::default()
        .prepare(b"just some words", DocumentFormat::Docx)
        .unwrap_err();
    assert!(matches!(err.kind, DocumentErrorKind::Unreadable { .. }));
}
