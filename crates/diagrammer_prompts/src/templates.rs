//! Bundled instruction texts.
//!
//! Each per-kind template embeds the structural requirements for its
//! Mermaid grammar. Every template carries exactly one `{description}`.

use diagrammer_core::DiagramKind;

/// System instruction for per-kind Mermaid generation.
pub const DIAGRAM_SYSTEM: &str = "You are an expert at creating diagrams using Mermaid.js. \
Always generate clean, valid Mermaid.js code without any HTML tags or markdown formatting.";

/// System instruction for the architecture page variant.
pub const ARCHITECTURE_PAGE_SYSTEM: &str =
    "You are a helpful assistant that generates architecture diagrams using mermaid.js.";

/// System instruction for document analysis.
pub const DOCUMENT_ANALYSIS_SYSTEM: &str = "You are a meticulous technical analyst. You read \
documents and extract the components, actors, data stores and interactions they describe.";

/// System instruction for free-form HTML generation.
pub const HTML_PAGE_SYSTEM: &str = "You are a front-end developer who produces complete, \
self-contained, well-styled HTML pages.";

/// Architecture page prompt: asks for an HTML snippet with a mermaid container.
pub const ARCHITECTURE_PAGE: &str = r#"Generate HTML code for a clean, modern architecture diagram of the system described below.
Use mermaid.js syntax.

System architecture description:
{description}

Return only HTML that can be embedded directly in a web page, containing:
1. a CDN reference to mermaid.js
2. a div element with the class 'mermaid' holding the diagram definition
3. a script that initializes mermaid

Example format:
```html
<script src="https://cdn.jsdelivr.net/npm/mermaid/dist/mermaid.min.js"></script>
<script>
  mermaid.initialize({ startOnLoad: true, theme: 'default' });
</script>
<div class="mermaid">
  graph TD
    A[Frontend] --> B[Backend]
    B --> C[Database]
</div>
```

Do not include any explanation or other text, only the HTML code."#;

/// Document analysis prompt: condenses a document into a system description.
pub const DOCUMENT_ANALYSIS: &str = r#"Analyze the following document and write a concise description of the system it describes, suitable as input for drawing a diagram.

Cover:
- the main components, services or modules
- external actors and systems
- data stores
- the key interactions and data flows between them, in order where order matters

Write plain prose and short bullet points. Do not produce diagram code.

Document:
{description}"#;

/// Free-form styled HTML page prompt.
pub const HTML_PAGE: &str = r#"Create a complete, self-contained HTML page that visually presents the following content.

Content:
{description}

Requirements:
- a single HTML document starting with <!DOCTYPE html>
- embedded CSS in a <style> element, no external stylesheets except fonts
- responsive layout that is readable on narrow screens
- if a diagram helps, include it as a Mermaid block in <div class="mermaid"> and load mermaid.js from https://cdn.jsdelivr.net/npm/mermaid/dist/mermaid.min.js

Return only the HTML document without explanations or markdown fences."#;

const ARCHITECTURE: &str = r#"Generate Mermaid.js code for an architecture diagram of the system described below.

Requirements:
- start with `graph TD` (top-down layout)
- group related components with `subgraph` blocks (for example clients, services, data)
- use [] for services, [( )] for databases and (( )) for external systems
- label edges with the protocol or data exchanged, e.g. `A -->|HTTPS| B`
- keep node ids short and alphanumeric

System description:
{description}

Return only the Mermaid code."#;

const SEQUENCE: &str = r#"Generate Mermaid.js code for a sequence diagram of the interaction described below.

Requirements:
- start with `sequenceDiagram`
- declare every participant up front with `participant` or `actor`
- use `->>` for requests and `-->>` for responses
- use `alt`/`else`, `opt` and `loop` blocks for conditional or repeated steps
- add `activate`/`deactivate` where a participant does processing

Interaction description:
{description}

Return only the Mermaid code."#;

const FLOWCHART: &str = r#"Generate Mermaid.js code for a flowchart of the process described below.

Requirements:
- start with `flowchart TD`
- use ([ ]) for start and end, [ ] for steps and { } for decisions
- label every decision branch, e.g. `B -->|yes| C`
- keep the flow top to bottom and avoid crossing edges where possible

Process description:
{description}

Return only the Mermaid code."#;

const USECASE: &str = r#"Generate Mermaid.js code for a use case diagram of the system described below.

Mermaid has no native use case grammar, so:
- start with `graph LR`
- draw actors as `Actor((Name))` on the left
- put the use cases inside `subgraph System` as `UC1([Use case name])`
- connect actors to the use cases they take part in
- mark include/extend relations with dotted edges labelled `include` or `extend`

System description:
{description}

Return only the Mermaid code."#;

const ENTITY_RELATIONSHIP: &str = r#"Generate Mermaid.js code for an entity-relationship diagram of the data model described below.

Requirements:
- start with `erDiagram`
- list every entity with typed attributes and mark keys with PK / FK
- use crow's foot cardinality, e.g. `CUSTOMER ||--o{ ORDER : places`
- entity names in UPPER_SNAKE_CASE

Data model description:
{description}

Return only the Mermaid code."#;

const CLASS: &str = r#"Generate Mermaid.js code for a class diagram of the design described below.

Requirements:
- start with `classDiagram`
- declare classes with attributes and methods, using + - # for visibility
- use <|-- for inheritance, *-- for composition, o-- for aggregation and --> for association
- add multiplicities on associations where they are known

Design description:
{description}

Return only the Mermaid code."#;

/// Bundled template text for a diagram kind.
pub fn for_kind(kind: DiagramKind) -> &'static str {
    match kind {
        DiagramKind::Architecture => ARCHITECTURE,
        DiagramKind::Sequence => SEQUENCE,
        DiagramKind::Flowchart => FLOWCHART,
        DiagramKind::Usecase => USECASE,
        DiagramKind::EntityRelationship => ENTITY_RELATIONSHIP,
        DiagramKind::Class => CLASS,
    }
}
