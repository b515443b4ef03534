//! Body text of Office Open XML word processing files.

use diagrammer_error::{DocumentError, DocumentErrorKind};
use quick_xml::Reader;
use quick_xml::events::Event;
use std::io::{Cursor, Read};
use tracing::{debug, instrument};
use zip::ZipArchive;

/// Archive member holding the main document body.
const BODY_PART: &str = "word/document.xml";

/// Upper bound on the decompressed body part.
const MAX_BODY_BYTES: u64 = 32 * 1024 * 1024;

fn unreadable(reason: impl ToString) -> DocumentError {
    DocumentError::new(DocumentErrorKind::Unreadable {
        format: "docx".to_string(),
        reason: reason.to_string(),
    })
}

/// Extract paragraph text from a DOCX archive.
///
/// Each paragraph ends with a newline. Tabs and manual line breaks inside a
/// run are kept; fields, drawings and formatting are dropped.
///
/// # Errors
///
/// Returns [`DocumentErrorKind::Unreadable`] when the bytes are not a zip
/// archive, the body part is missing, or its XML is malformed.
#[instrument(skip(bytes), fields(bytes = bytes.len()))]
pub fn docx_to_text(bytes: &[u8]) -> Result<String, DocumentError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).map_err(unreadable)?;
    let mut xml = String::new();
    archive
        .by_name(BODY_PART)
        .map_err(unreadable)?
        .take(MAX_BODY_BYTES)
        .read_to_string(&mut xml)
        .map_err(unreadable)?;

    let text = body_text(&xml)?;
    debug!(chars = text.len(), "Extracted DOCX text");
    Ok(text)
}

fn body_text(xml: &str) -> Result<String, DocumentError> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_run_text = false;

    loop {
        match reader.read_event().map_err(unreadable)? {
            Event::Start(e) if e.local_name().as_ref() == b"t" => in_run_text = true,
            Event::End(e) => match e.local_name().as_ref() {
                b"t" => in_run_text = false,
                b"p" => text.push('\n'),
                _ => {}
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"tab" => text.push('\t'),
                b"br" | b"cr" | b"p" => text.push('\n'),
                _ => {}
            },
            Event::Text(e) if in_run_text => text.push_str(&e.unescape().map_err(unreadable)?),
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NS: &str = r#"xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main""#;

    #[test]
    fn paragraphs_runs_and_breaks() {
        let xml = format!(
            r#"<w:document {NS}><w:body>
<w:p><w:r><w:t>Gateway</w:t></w:r><w:r><w:t xml:space="preserve"> routes </w:t></w:r><w:r><w:t>traffic</w:t></w:r></w:p>
<w:p><w:r><w:t>a</w:t><w:tab/><w:t>b</w:t><w:br/><w:t>c</w:t></w:r></w:p>
<w:p/>
<w:p><w:r><w:instrText>PAGE</w:instrText><w:t>R&amp;D</w:t></w:r></w:p>
</w:body></w:document>"#
        );
        assert_eq!(
            body_text(&xml).unwrap(),
            "Gateway routes traffic\na\tb\nc\n\nR&D\n"
        );
    }

    #[test]
    fn malformed_xml_is_unreadable() {
        let err = body_text(&format!("<w:document {NS}><w:p></w:r></w:document>")).unwrap_err();
        assert!(matches!(err.kind, DocumentErrorKind::Unreadable { ref format, .. } if format == "docx"));
    }
}
