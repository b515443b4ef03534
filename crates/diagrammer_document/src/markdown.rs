use regex::Regex;
use std::sync::LazyLock;

static FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*(```|~~~).*$\n?").expect("Valid fence regex"));
static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]{0,3}#{1,6}[ \t]+(.*?)[ \t]*#*[ \t]*$").expect("Valid heading regex"));
static RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]{0,3}([-*_][ \t]*){3,}$").expect("Valid rule regex"));
static QUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]{0,3}>[ \t]?").expect("Valid quote regex"));
static IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\([^)]*\)").expect("Valid image regex"));
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\([^)]*\)").expect("Valid link regex"));
static STRONG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\*\*|__)(\S(?:.*?\S)?)(\*\*|__)").expect("Valid strong regex"));
static EMPHASIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|[^\w*])[*_](\S(?:[^*_]*?\S)?)[*_]").expect("Valid emphasis regex"));
static INLINE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("Valid inline code regex"));
static BLANK_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("Valid blank line regex"));

/// Reduce Markdown to readable plain text.
///
/// Structure that carries meaning for a system description (list items,
/// code block contents, link text) is kept; markup is dropped.
///
/// ```
/// use diagrammer_document::markdown_to_text;
///
/// let text = markdown_to_text("# Gateway\n\nRoutes to **auth** and [billing](http://b).");
/// assert_eq!(text, "Gateway\n\nRoutes to auth and billing.");
/// ```
pub fn markdown_to_text(markdown: &str) -> String {
    let text = markdown.replace("\r\n", "\n");
    let text = FENCE.replace_all(&text, "");
    let text = HEADING.replace_all(&text, "$1");
    let text = RULE.replace_all(&text, "");
    let text = QUOTE.replace_all(&text, "");
    let text = IMAGE.replace_all(&text, "$1");
    let text = LINK.replace_all(&text, "$1");
    let text = STRONG.replace_all(&text, "$2");
    let text = EMPHASIS.replace_all(&text, "$1$2");
    let text = INLINE_CODE.replace_all(&text, "$1");
    let text = BLANK_RUNS.replace_all(&text, "\n\n");
    text.trim().to_string()
}
