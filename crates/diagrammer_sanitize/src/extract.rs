//! Shape-directed extraction.

use crate::fence::strip_code_fences;
use diagrammer_core::{DiagramArtifact, ExpectedShape};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// CSS class marking the element Mermaid renders.
pub const MERMAID_CONTAINER_CLASS: &str = "mermaid";

static CONTAINER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<div\s+class=["']mermaid["'][^>]*>(.*?)</div>"#)
        .expect("Valid container regex")
});

static GRAMMAR_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?ms)^[ \t]*((?:graph|flowchart)[ \t]+[A-Z]+.+|(?:sequenceDiagram|classDiagram|erDiagram)\b.+)",
    )
    .expect("Valid grammar keyword regex")
});

/// Turn raw completion text into an artifact of the requested shape.
///
/// Never fails. For [`ExpectedShape::EmbeddedMarkupBlock`] the result is always
/// a single diagram container, so extracting an already extracted block
/// returns it unchanged.
pub fn extract(raw: &str, shape: ExpectedShape) -> DiagramArtifact {
    let cleaned = strip_code_fences(raw);
    match shape {
        ExpectedShape::DiagramDefinition | ExpectedShape::PlainText => {
            DiagramArtifact::Markup(cleaned)
        }
        ExpectedShape::FullDocument => DiagramArtifact::Document(cleaned),
        ExpectedShape::EmbeddedMarkupBlock => DiagramArtifact::Markup(extract_block(&cleaned)),
    }
}

fn extract_block(cleaned: &str) -> String {
    if let Some(container) = CONTAINER.find(cleaned) {
        debug!("Found diagram container");
        return container.as_str().to_string();
    }
    if let Some(definition) = GRAMMAR_KEYWORD.captures(cleaned).and_then(|c| c.get(1)) {
        debug!(offset = definition.start(), "Found bare diagram definition");
        return wrap_in_container(definition.as_str().trim_end());
    }
    debug!("No diagram structure recognized, wrapping cleaned text");
    wrap_in_container(cleaned)
}

/// Whether an artifact carries anything to render.
///
/// Blank text and a lone container with a blank body both count as empty.
pub fn has_content(artifact: &DiagramArtifact) -> bool {
    let text = artifact.as_str().trim();
    if text.is_empty() {
        return false;
    }
    match CONTAINER.captures(text) {
        Some(caps) if caps[0].len() == text.len() => !caps[1].trim().is_empty(),
        _ => true,
    }
}

/// Place a diagram definition inside a Mermaid container element.
///
/// Content that already is a container is returned unchanged.
pub fn wrap_in_container(definition: &str) -> String {
    let trimmed = definition.trim();
    match CONTAINER.find(trimmed) {
        Some(m) if m.start() == 0 && m.end() == trimmed.len() => trimmed.to_string(),
        _ => format!(
            "<div class=\"{}\">\n{}\n</div>",
            MERMAID_CONTAINER_CLASS, trimmed
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(raw: &str) -> String {
        extract(raw, ExpectedShape::EmbeddedMarkupBlock).into_string()
    }

    #[test]
    fn fenced_definition_yields_bare_code() {
        let artifact = extract(
            "```mermaid\ngraph TD\nA-->B\n```",
            ExpectedShape::DiagramDefinition,
        );
        assert_eq!(artifact, DiagramArtifact::Markup("graph TD\nA-->B".into()));
    }

    #[test]
    fn container_is_lifted_out_of_full_page() {
        let raw = r#"<!DOCTYPE html>
<html>
<head><script src="https://cdn.example/mermaid.js"></script></head>
<body>
<h1>Checkout</h1>
<div class="mermaid">flowchart LR
A-->B</div>
<p>footer</p>
</body>
</html>"#;
        assert_eq!(block(raw), "<div class=\"mermaid\">flowchart LR\nA-->B</div>");
    }

    #[test]
    fn single_quoted_class_and_extra_attributes() {
        let raw = "<div class='mermaid' id=\"d1\">\nsequenceDiagram\nA->>B: hi\n</div>";
        assert_eq!(block(raw), raw);
    }

    #[test]
    fn bare_keyword_takes_the_remainder() {
        let raw = "Sure! Here is the architecture:\ngraph TD\n  A[Web] --> B[API]\n  B --> C[(DB)]";
        assert_eq!(
            block(raw),
            "<div class=\"mermaid\">\ngraph TD\n  A[Web] --> B[API]\n  B --> C[(DB)]\n</div>"
        );
    }

    #[test]
    fn unrecognized_text_is_wrapped_whole() {
        let raw = "I could not draw that, sorry.";
        assert_eq!(
            block(raw),
            "<div class=\"mermaid\">\nI could not draw that, sorry.\n</div>"
        );
    }

    #[test]
    fn keyword_must_start_a_line() {
        let raw = "This paragraph Describes nothing drawable.\nSorry.";
        assert_eq!(
            block(raw),
            "<div class=\"mermaid\">\nThis paragraph Describes nothing drawable.\nSorry.\n</div>"
        );

        let raw = "The classDiagram below is wrong.\n  erDiagram\n  A ||--o{ B : has";
        assert_eq!(
            block(raw),
            "<div class=\"mermaid\">\nerDiagram\n  A ||--o{ B : has\n</div>"
        );
    }

    #[test]
    fn blank_artifacts_have_no_content() {
        assert!(!has_content(&extract("```mermaid\n```", ExpectedShape::DiagramDefinition)));
        assert!(!has_content(&extract("```html\n```", ExpectedShape::EmbeddedMarkupBlock)));
        assert!(!has_content(&extract("   \n", ExpectedShape::FullDocument)));
        assert!(!has_content(&DiagramArtifact::Markup(
            "<div class=\"mermaid\">\n  \n</div>".into()
        )));

        assert!(has_content(&extract("graph TD\nA-->B", ExpectedShape::EmbeddedMarkupBlock)));
        assert!(has_content(&DiagramArtifact::Document(
            "<div class=\"mermaid\"></div><p>legend</p>".into()
        )));
    }

    #[test]
    fn extraction_is_idempotent() {
        let inputs = [
            "graph TD\nA-->B",
            "<div class=\"mermaid\">\nclassDiagram\nA <|-- B\n</div>",
            "plain words only",
            "Intro text\nsequenceDiagram\nAlice->>Bob: Hello",
        ];
        for shape in [
            ExpectedShape::EmbeddedMarkupBlock,
            ExpectedShape::DiagramDefinition,
            ExpectedShape::FullDocument,
            ExpectedShape::PlainText,
        ] {
            for input in inputs {
                let once = extract(input, shape);
                let twice = extract(once.as_str(), shape);
                assert_eq!(once, twice, "shape {shape} input {input:?}");
            }
        }
    }

    #[test]
    fn full_document_skips_extraction() {
        let raw = "```html\n<section><div class=\"mermaid\">graph TD</div></section>\n```";
        assert_eq!(
            extract(raw, ExpectedShape::FullDocument),
            DiagramArtifact::Document(
                "<section><div class=\"mermaid\">graph TD</div></section>".into()
            )
        );
    }

    #[test]
    fn malformed_grammar_passes_through() {
        let raw = "flowchart LR\nA--->>>??";
        assert_eq!(
            extract(raw, ExpectedShape::DiagramDefinition).as_str(),
            "flowchart LR\nA--->>>??"
        );
    }

    #[test]
    fn wrap_does_not_double_wrap() {
        let wrapped = wrap_in_container("graph TD");
        assert_eq!(wrap_in_container(&wrapped), wrapped);
    }
}
