//! Self-contained HTML page assembly.

use crate::{RenderOptions, extract::wrap_in_container};
use diagrammer_core::DiagramArtifact;
use tracing::{debug, instrument};

const PAGE_STYLE: &str = r#"        body {
            margin: 0;
            padding: 20px;
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            background-color: #f8f9fa;
        }
        .mermaid {
            text-align: center;
            padding: 20px;
            background-color: white;
        }
        .mermaid svg {
            max-width: 100%;
            height: auto;
        }"#;

/// Whether `text` already is a complete HTML document.
///
/// ```
/// use diagrammer_sanitize::is_complete_document;
///
/// assert!(is_complete_document("<!doctype html><html></html>"));
/// assert!(is_complete_document("  <HTML lang=\"en\"></HTML>"));
/// assert!(!is_complete_document("<div class=\"mermaid\">graph TD</div>"));
/// ```
pub fn is_complete_document(text: &str) -> bool {
    let head: String = text
        .trim_start()
        .chars()
        .take(9)
        .collect::<String>()
        .to_ascii_lowercase();
    head.starts_with("<!doctype") || head.starts_with("<html")
}

/// Wrap an artifact into a page that renders on its own.
///
/// Markup becomes a Mermaid container inside the page body. A document that
/// is already complete is returned unchanged; a partial one becomes the body.
#[instrument(skip(artifact, options), fields(document = artifact.is_document(), kind = ?options.kind()))]
pub fn assemble_page(artifact: &DiagramArtifact, options: &RenderOptions) -> String {
    let body = match artifact {
        DiagramArtifact::Document(text) if is_complete_document(text) => {
            debug!("Artifact already is a complete document");
            return text.clone();
        }
        DiagramArtifact::Document(text) => text.trim().to_string(),
        DiagramArtifact::Markup(text) => wrap_in_container(text),
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <script src="{src}"></script>
    <script>
        document.addEventListener('DOMContentLoaded', function() {{
            mermaid.initialize({config});
        }});
    </script>
    <style>
{style}
    </style>
</head>
<body>
{body}
</body>
</html>
"#,
        title = options.title(),
        src = options.script_src(),
        config = options.initialize_config(),
        style = PAGE_STYLE,
        body = body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use diagrammer_core::DiagramKind;

    #[test]
    fn markup_is_placed_in_container() {
        let page = assemble_page(
            &DiagramArtifact::Markup("sequenceDiagram\nA->>B: hi".into()),
            &RenderOptions::for_kind(Some(DiagramKind::Sequence)),
        );
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<meta charset=\"UTF-8\">"));
        assert!(page.contains(crate::MERMAID_SCRIPT_SRC));
        assert!(page.contains("\"showSequenceNumbers\":true"));
        assert!(page.contains("<div class=\"mermaid\">\nsequenceDiagram\nA->>B: hi\n</div>"));
        assert!(page.contains("max-width: 100%"));
    }

    #[test]
    fn existing_container_is_not_wrapped_twice() {
        let snippet = "<div class=\"mermaid\">\ngraph TD\nA-->B\n</div>";
        let page = assemble_page(
            &DiagramArtifact::Markup(snippet.into()),
            &RenderOptions::default(),
        );
        assert_eq!(page.matches("class=\"mermaid\"").count(), 1);
    }

    #[test]
    fn complete_document_passes_through() {
        let doc = "<!DOCTYPE html><html><body>hi</body></html>";
        let page = assemble_page(&DiagramArtifact::Document(doc.into()), &RenderOptions::default());
        assert_eq!(page, doc);
    }

    #[test]
    fn partial_document_becomes_body() {
        let page = assemble_page(
            &DiagramArtifact::Document("<main><h1>Report</h1></main>".into()),
            &RenderOptions::default(),
        );
        assert!(page.contains("<body>\n<main><h1>Report</h1></main>\n</body>"));
    }
}
