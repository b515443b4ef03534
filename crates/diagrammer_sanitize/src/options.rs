//! Presentation options for the Mermaid initialization script.

use derive_getters::Getters;
use diagrammer_core::DiagramKind;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

/// Default Mermaid bundle location.
pub const MERMAID_SCRIPT_SRC: &str = "https://cdn.jsdelivr.net/npm/mermaid/dist/mermaid.min.js";

/// How an assembled page loads and configures Mermaid.
///
/// These options only affect rendering in the browser, never the diagram
/// structure.
///
/// # Examples
///
/// ```
/// use diagrammer_core::DiagramKind;
/// use diagrammer_sanitize::RenderOptions;
///
/// let options = RenderOptions::for_kind(Some(DiagramKind::Sequence));
/// let config = options.initialize_config();
/// assert_eq!(config["sequence"]["showSequenceNumbers"], true);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(default, setter(into))]
#[serde(default)]
pub struct RenderOptions {
    /// Mermaid theme name
    theme: String,
    /// Script URL for the Mermaid bundle
    script_src: String,
    /// Diagram kind whose options are emitted; none for architecture pages
    kind: Option<DiagramKind>,
    /// Page title
    title: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            theme: "default".to_string(),
            script_src: MERMAID_SCRIPT_SRC.to_string(),
            kind: None,
            title: "Diagram".to_string(),
        }
    }
}

impl RenderOptions {
    /// Creates a new builder.
    pub fn builder() -> RenderOptionsBuilder {
        RenderOptionsBuilder::default()
    }

    /// Defaults tuned for one diagram kind.
    pub fn for_kind(kind: Option<DiagramKind>) -> Self {
        Self {
            kind,
            title: match kind {
                Some(kind) => format!("{} diagram", kind),
                None => "Architecture diagram".to_string(),
            },
            ..Self::default()
        }
    }

    /// Replace the theme.
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    /// Replace the Mermaid bundle location.
    pub fn with_script_src(mut self, script_src: impl Into<String>) -> Self {
        self.script_src = script_src.into();
        self
    }

    /// Argument passed to `mermaid.initialize`.
    pub fn initialize_config(&self) -> Value {
        let mut config = Map::new();
        config.insert("startOnLoad".into(), json!(true));
        config.insert("theme".into(), json!(self.theme));

        match self.kind {
            Some(DiagramKind::Flowchart) | Some(DiagramKind::Usecase) => {
                config.insert(
                    "flowchart".into(),
                    json!({ "useMaxWidth": false, "htmlLabels": true, "curve": "basis" }),
                );
            }
            Some(DiagramKind::Sequence) => {
                config.insert(
                    "sequence".into(),
                    json!({ "showSequenceNumbers": true, "boxMargin": 5 }),
                );
            }
            Some(DiagramKind::EntityRelationship) => {
                config.insert(
                    "er".into(),
                    json!({ "layoutDirection": "TB", "entityPadding": 15 }),
                );
            }
            Some(DiagramKind::Class) => {
                config.insert("class".into(), json!({ "useMaxWidth": false }));
            }
            Some(DiagramKind::Architecture) | None => {}
        }

        Value::Object(config)
    }
}
