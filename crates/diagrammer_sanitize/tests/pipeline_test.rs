use diagrammer_core::{DiagramArtifact, DiagramKind, ExpectedShape};
use diagrammer_sanitize::{RenderOptions, assemble_page, extract};

fn page(raw: &str, shape: ExpectedShape, kind: Option<DiagramKind>) -> String {
    assemble_page(&extract(raw, shape), &RenderOptions::for_kind(kind))
}

#[test]
fn chatty_model_answer_becomes_single_container() {
    let raw = "Sure! Here is your diagram:\n\n```html\n<html><body><h1>Checkout</h1>\n<div class=\"mermaid\">\nflowchart LR\nCart-->Pay\n</div>\n</body></html>\n```\nLet me know if you need changes.";

    let html = page(raw, ExpectedShape::EmbeddedMarkupBlock, None);

    assert_eq!(html.matches("class=\"mermaid\"").count(), 1);
    assert!(html.contains("flowchart LR\nCart-->Pay"));
    assert!(!html.contains("Checkout"));
    assert!(!html.contains("Let me know"));
}

#[test]
fn typed_definition_gets_kind_options() {
    let raw = "```mermaid\nclassDiagram\nAnimal <|-- Duck\n```";

    let html = page(raw, ExpectedShape::DiagramDefinition, Some(DiagramKind::Class));

    assert!(html.contains("<div class=\"mermaid\">\nclassDiagram\nAnimal <|-- Duck\n</div>"));
    assert!(html.contains("\"class\":{\"useMaxWidth\":false}"));
    assert!(html.contains("<title>class diagram</title>"));
}

#[test]
fn complete_document_passes_through() {
    let raw = "```html\n<!doctype html>\n<html><head><title>Report</title></head><body>Q3</body></html>\n```";

    let artifact = extract(raw, ExpectedShape::FullDocument);
    assert!(artifact.is_document());

    let html = assemble_page(&artifact, &RenderOptions::default());
    assert!(html.starts_with("<!doctype html>"));
    assert_eq!(html.matches("<html>").count(), 1);
}

#[test]
fn partial_document_becomes_body() {
    let html = page(
        "<section><h2>Services</h2><p>Three services.</p></section>",
        ExpectedShape::FullDocument,
        None,
    );

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<body>\n<section><h2>Services</h2>"));
}

#[test]
fn theme_and_script_overrides_reach_the_page() {
    let options = RenderOptions::for_kind(Some(DiagramKind::Sequence))
        .with_theme("forest")
        .with_script_src("/static/mermaid.min.js");
    let artifact = DiagramArtifact::Markup("sequenceDiagram\nA->>B: ping".into());

    let html = assemble_page(&artifact, &options);

    assert!(html.contains("<script src=\"/static/mermaid.min.js\"></script>"));
    assert!(html.contains("\"theme\":\"forest\""));
}
