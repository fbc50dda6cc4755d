//! Chat message renderer. Constrained markdown -> HTML string.
//!
//! Supports bold, italic, `- ` list items, `> ` quotes and line breaks. Output is injected
//! verbatim into the transcript view; text comes from the advisor backend or the mock
//! generator and is not escaped.

use once_cell::sync::Lazy;
use regex::Regex;

/// Presentational class carried by every `<ul>` container.
pub const LIST_CLASS: &str = "list-disc pl-4 space-y-1";
/// Presentational class carried by every `<blockquote>`.
pub const QUOTE_CLASS: &str = "border-l-2 border-navy-light pl-3 italic opacity-80";

const LINE_BREAK: &str = "<br/>";

// A line never runs past `\r`, `\n`, U+2028 or U+2029, and `(?R)` makes a lone `\r` end a line.
static BOLD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*([^\r\n\x{2028}\x{2029}]*?)\*\*").unwrap());
static ITALIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*([^\r\n\x{2028}\x{2029}]*?)\*").unwrap());
/// Non-empty body, so a stray `**` never collapses into `<em></em>`.
static ITALIC_STRICT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*([^\r\n\x{2028}\x{2029}]+?)\*").unwrap());
/// Group 1 keeps a U+2028/U+2029 separator, which `^` does not recognise on its own.
static LIST_ITEM_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?mR)(^|[\x{2028}\x{2029}])- ([^\r\n\x{2028}\x{2029}]*)").unwrap()
});
/// Greedy and dot-all: spans from the first `<li>` to the last `</li>` in the text.
static LIST_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)(<li>.*</li>)").unwrap());
static QUOTE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?mR)(^|[\x{2028}\x{2029}])> ([^\r\n\x{2028}\x{2029}]*)").unwrap()
});

/// Which rendering pipeline to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Line tokenizer: every disjoint list gets its own `<ul>`.
    #[default]
    Structured,
    /// Chained substitutions. Byte-compatible with the legacy web UI, including the
    /// single-shot list wrapping.
    Compat,
}

impl std::str::FromStr for RenderMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "structured" => Ok(Self::Structured),
            "compat" => Ok(Self::Compat),
            other => Err(format!("unknown render mode: {}", other)),
        }
    }
}

/// Render a chat message with the default (structured) pipeline. Never fails.
pub fn render(text: &str) -> String {
    render_with(text, RenderMode::Structured)
}

/// Render a chat message with the given pipeline.
pub fn render_with(text: &str, mode: RenderMode) -> String {
    match mode {
        RenderMode::Structured => render_structured(text),
        RenderMode::Compat => render_compat(text),
    }
}

/// Legacy substitution pipeline. Order matters: each rule sees the previous rule's output.
pub fn render_compat(text: &str) -> String {
    let out = BOLD_RE.replace_all(text, "<strong>${1}</strong>");
    let out = ITALIC_RE.replace_all(&out, "<em>${1}</em>");
    let out = LIST_ITEM_RE.replace_all(&out, "${1}<li>${2}</li>");
    let out = LIST_RUN_RE.replace(&out, format!("<ul class='{}'>${{1}}</ul>", LIST_CLASS));
    let out = QUOTE_RE.replace_all(
        &out,
        format!("${{1}}<blockquote class='{}'>${{2}}</blockquote>", QUOTE_CLASS),
    );
    out.replace('\n', LINE_BREAK)
}

/// One line-level unit of a message.
#[derive(Debug, PartialEq, Eq)]
enum Block<'a> {
    Text(&'a str),
    List(Vec<&'a str>),
    Quote(&'a str),
}

fn tokenize(text: &str) -> Vec<Block<'_>> {
    let mut blocks: Vec<Block<'_>> = Vec::new();
    for line in text.split('\n') {
        if let Some(item) = line.strip_prefix("- ") {
            match blocks.last_mut() {
                Some(Block::List(items)) => items.push(item),
                _ => blocks.push(Block::List(vec![item])),
            }
        } else if let Some(quote) = line.strip_prefix("> ") {
            blocks.push(Block::Quote(quote));
        } else {
            blocks.push(Block::Text(line));
        }
    }
    blocks
}

/// Bold before italic, so leftover single asterisks never pair with half of a `**`.
fn render_inline(line: &str) -> String {
    let out = BOLD_RE.replace_all(line, "<strong>${1}</strong>");
    ITALIC_STRICT_RE.replace_all(&out, "<em>${1}</em>").into_owned()
}

fn render_structured(text: &str) -> String {
    tokenize(text)
        .into_iter()
        .map(|block| match block {
            Block::Text(line) => render_inline(line),
            Block::Quote(line) => format!(
                "<blockquote class='{}'>{}</blockquote>",
                QUOTE_CLASS,
                render_inline(line)
            ),
            Block::List(items) => {
                let body: String = items
                    .iter()
                    .map(|item| format!("<li>{}</li>", render_inline(item)))
                    .collect();
                format!("<ul class='{}'>{}</ul>", LIST_CLASS, body)
            }
        })
        .collect::<Vec<_>>()
        .join(LINE_BREAK)
}
