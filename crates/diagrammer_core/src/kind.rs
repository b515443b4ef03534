//! Supported diagram categories.

use serde::{Deserialize, Serialize};

/// Closed set of diagram categories.
///
/// Selects the prompt template and the Mermaid initialization options.
///
/// # Examples
///
/// ```
/// use diagrammer_core::DiagramKind;
/// use std::str::FromStr;
///
/// assert_eq!(DiagramKind::from_str("sequence").unwrap(), DiagramKind::Sequence);
/// assert_eq!(DiagramKind::from_str("entity-relationship").unwrap(), DiagramKind::EntityRelationship);
/// assert_eq!(DiagramKind::EntityRelationship.to_string(), "er");
/// assert!(DiagramKind::from_str("gantt").is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum DiagramKind {
    /// System architecture (rendered as a top-down flowchart)
    #[strum(to_string = "architecture")]
    Architecture,
    /// Interaction over time between participants
    #[strum(to_string = "sequence")]
    Sequence,
    /// Process or decision flow
    #[strum(to_string = "flowchart")]
    Flowchart,
    /// Actors and the use cases they take part in
    #[strum(to_string = "usecase", serialize = "use-case", serialize = "use_case")]
    Usecase,
    /// Entities and their relationships
    #[serde(rename = "er", alias = "entity-relationship")]
    #[strum(
        to_string = "er",
        serialize = "entity-relationship",
        serialize = "entity_relationship"
    )]
    EntityRelationship,
    /// Classes, members and associations
    #[strum(to_string = "class")]
    Class,
}

impl DiagramKind {
    /// Mermaid grammar keyword that opens a definition of this kind.
    pub fn mermaid_keyword(&self) -> &'static str {
        match self {
            DiagramKind::Architecture | DiagramKind::Usecase => "graph TD",
            DiagramKind::Flowchart => "flowchart TD",
            DiagramKind::Sequence => "sequenceDiagram",
            DiagramKind::EntityRelationship => "erDiagram",
            DiagramKind::Class => "classDiagram",
        }
    }
}
