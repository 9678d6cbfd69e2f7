//! Readable-text extraction from article HTML.
//!
//! News pages bury the story under navigation, scripts, and boilerplate.
//! Extraction tries a list of known content containers in priority order,
//! walks the winning subtree while skipping noise tags, and falls back to
//! bare paragraphs when no container matches.

use ego_tree::NodeRef;
use once_cell::sync::Lazy;
use scraper::{Html, Node, Selector};

use super::Article;
use crate::errors::SummarizeError;
use crate::utils::text::{collapse_whitespace, truncate_chars, word_count};

/// Minimum words for text to count as an article rather than boilerplate.
const MIN_ARTICLE_WORDS: usize = 50;

/// Article text is capped before summarization; provider models truncate
/// long inputs anyway.
const MAX_ARTICLE_CHARS: usize = 5000;

const DEFAULT_TITLE: &str = "Article";

/// Tags whose subtrees never hold article prose.
const NOISE_TAGS: &[&str] = &["script", "style", "nav", "footer", "header", "aside"];

// Static selectors to avoid recompiling them on every invocation
static TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("title").expect("Failed to parse title selector"));

static PARAGRAPH_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("p").expect("Failed to parse paragraph selector"));

// Known content containers, most specific first
static CONTENT_SELECTORS: Lazy<Vec<Selector>> = Lazy::new(|| {
    ["article", ".article-body", ".story-content", "main", "#content"]
        .iter()
        .map(|s| Selector::parse(s).expect("Failed to parse content selector"))
        .collect()
});

/// Extracts the title and readable text from raw article HTML.
///
/// # Errors
///
/// Returns [`SummarizeError::ExtractError`] when the page yields fewer
/// than [`MIN_ARTICLE_WORDS`] words of readable text.
pub fn extract_article(html: &str) -> Result<Article, SummarizeError> {
    let document = Html::parse_document(html);

    let title = document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|el| collapse_whitespace(&el.text().collect::<String>()))
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    let mut buf = String::new();
    for selector in CONTENT_SELECTORS.iter() {
        let mut matched = false;
        for element in document.select(selector) {
            if has_noise_ancestor(*element) {
                continue;
            }
            matched = true;
            collect_visible_text(*element, &mut buf);
        }
        if matched {
            break;
        }
    }

    // No recognized container: gather bare paragraphs instead. The walk
    // only skips noise tags below its start node, so selected elements
    // are checked against their ancestors before collecting.
    if buf.trim().is_empty() {
        for element in document.select(&PARAGRAPH_SELECTOR) {
            if has_noise_ancestor(*element) {
                continue;
            }
            collect_visible_text(*element, &mut buf);
        }
    }

    let text = collapse_whitespace(&buf);
    let words = word_count(&text);
    if words < MIN_ARTICLE_WORDS {
        return Err(SummarizeError::ExtractError(format!(
            "page yielded only {words} words of readable text"
        )));
    }

    Ok(Article {
        title,
        text: truncate_chars(&text, MAX_ARTICLE_CHARS),
    })
}

/// True when `node` sits inside a noise-tag subtree.
fn has_noise_ancestor(node: NodeRef<'_, Node>) -> bool {
    node.ancestors().any(|ancestor| {
        matches!(ancestor.value(), Node::Element(element) if NOISE_TAGS.contains(&element.name()))
    })
}

/// Appends the text beneath `node`, skipping subtrees rooted at noise tags.
fn collect_visible_text(node: NodeRef<'_, Node>, out: &mut String) {
    for child in node.children() {
        match child.value() {
            Node::Text(text) => {
                out.push_str(&text.text);
                out.push(' ');
            }
            Node::Element(element) => {
                if !NOISE_TAGS.contains(&element.name()) {
                    collect_visible_text(child, out);
                }
            }
            _ => {}
        }
    }
}
