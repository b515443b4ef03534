use regex::Regex;
use std::sync::LazyLock;

// Opening fences may carry a language tag (```mermaid, ```html); the newline
// after a marker belongs to the marker.
static FENCE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```[A-Za-z0-9_+.-]*[ \t]*\r?\n?").expect("Valid fence regex"));

/// Remove markdown code-fence markers and surrounding whitespace.
///
/// Both bare and language-tagged fences are removed wherever they occur, so
/// prose around a fenced block survives for the later extraction pass.
///
/// ```
/// use diagrammer_sanitize::strip_code_fences;
///
/// assert_eq!(strip_code_fences("```mermaid\ngraph TD\nA-->B\n```"), "graph TD\nA-->B");
/// assert_eq!(strip_code_fences("  sequenceDiagram  "), "sequenceDiagram");
/// ```
pub fn strip_code_fences(raw: &str) -> String {
    FENCE_MARKER.replace_all(raw, "").trim().to_string()
}
