use diagrammer_core::DiagramKind;
use diagrammer_error::TemplateErrorKind;
use diagrammer_prompts::{PromptRegistry, PromptTemplate, templates};
use strum::IntoEnumIterator;

const DESCRIPTION: &str = "Checkout service calls Payments-7f3a over gRPC";

#[test]
fn defaults_cover_every_kind() {
    let registry = PromptRegistry::with_defaults().unwrap();
    for kind in DiagramKind::iter() {
        assert!(registry.supports(kind), "missing template for {kind}");
    }
    assert_eq!(registry.kinds().len(), DiagramKind::iter().count());
}

#[test]
fn rendered_prompt_contains_description_exactly_once() {
    let registry = PromptRegistry::with_defaults().unwrap();
    for kind in DiagramKind::iter() {
        let prompt = registry.render(kind, DESCRIPTION).unwrap();
        assert_eq!(prompt.matches(DESCRIPTION).count(), 1, "kind {kind}");
        assert!(!prompt.contains("{description}"), "kind {kind}");
    }
}

#[test]
fn rendered_prompt_names_the_grammar_keyword() {
    let registry = PromptRegistry::with_defaults().unwrap();
    let prompt = registry.render(DiagramKind::EntityRelationship, DESCRIPTION).unwrap();
    assert!(prompt.contains("erDiagram"));
    let prompt = registry.render(DiagramKind::Sequence, DESCRIPTION).unwrap();
    assert!(prompt.contains("sequenceDiagram"));
}

#[test]
fn unregistered_kind_is_unsupported() {
    let mut registry = PromptRegistry::empty();
    registry.register_text(DiagramKind::Class, "Classes: {description}").unwrap();

    let err = registry.render(DiagramKind::Flowchart, DESCRIPTION).unwrap_err();
    assert_eq!(err.kind, TemplateErrorKind::UnsupportedKind("flowchart".to_string()));
}

#[test]
fn override_replaces_bundled_template() {
    let mut registry = PromptRegistry::with_defaults().unwrap();
    registry.register_text(DiagramKind::Sequence, "SEQ {description} END").unwrap();

    let prompt = registry.render(DiagramKind::Sequence, "a b").unwrap();
    assert_eq!(prompt, "SEQ a b END");
}

#[test]
fn override_without_placeholder_is_rejected() {
    let mut registry = PromptRegistry::with_defaults().unwrap();
    let err = registry.register_text(DiagramKind::Class, "nothing here").unwrap_err();
    assert_eq!(err.kind, TemplateErrorKind::MissingPlaceholder("class".to_string()));
    // The bundled template is still in place.
    assert!(registry.render(DiagramKind::Class, "x").unwrap().contains("classDiagram"));
}

#[test]
fn auxiliary_templates_are_valid() {
    for (name, text) in [
        ("architecture_page", templates::ARCHITECTURE_PAGE),
        ("document_analysis", templates::DOCUMENT_ANALYSIS),
        ("html_page", templates::HTML_PAGE),
    ] {
        PromptTemplate::new(name, text).unwrap();
    }
}

#[test]
fn invalid_template_text_fails_the_whole_registry() {
    let err = PromptRegistry::from_texts([
        (DiagramKind::Sequence, "Sequence: {description}"),
        (DiagramKind::Class, "Classes without a slot"),
    ])
    .unwrap_err();
    assert_eq!(err.kind, TemplateErrorKind::MissingPlaceholder("class".to_string()));

    let err = PromptRegistry::from_texts([(
        DiagramKind::Flowchart,
        "{description} and again {description}",
    )])
    .unwrap_err();
    assert!(matches!(err.kind, TemplateErrorKind::DuplicatePlaceholder { count: 2, .. }));
}

#[test]
fn registry_from_texts_holds_only_given_kinds() {
    let registry = PromptRegistry::from_texts([(DiagramKind::Usecase, "Actors: {description}")]).unwrap();
    assert_eq!(registry.kinds(), vec![DiagramKind::Usecase]);
    assert_eq!(registry.render(DiagramKind::Usecase, "Library").unwrap(), "Actors: Library");
}
