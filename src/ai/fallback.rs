//! Local extractive summarizer used when the provider fails.
//!
//! Scores sentences by length weighted toward the top of the article,
//! where news writing front-loads the substance, then reassembles the
//! winners in their original order.

/// Sentences kept in a fallback summary.
pub const DEFAULT_SENTENCE_COUNT: usize = 3;

/// Sentences at or below this many words are fragments, not prose.
const MIN_SENTENCE_WORDS: usize = 5;

/// Splits on `.`, `!`, or `?` when followed by whitespace or end of text.
/// Terminators stay attached to their sentence.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((idx, ch)) = chars.next() {
        if matches!(ch, '.' | '!' | '?') {
            let at_boundary = chars
                .peek()
                .is_none_or(|(_, next)| next.is_whitespace());
            if at_boundary {
                let end = idx + ch.len_utf8();
                if end > start {
                    sentences.push(&text[start..end]);
                }
                start = end;
            }
        }
    }
    if start < text.len() {
        sentences.push(&text[start..]);
    }
    sentences
}

/// Builds a summary from the `max_sentences` highest-scoring sentences.
/// Texts short enough to need no trimming come back whole.
#[must_use]
pub fn extractive_summary(text: &str, max_sentences: usize) -> String {
    let sentences: Vec<&str> = split_sentences(text)
        .into_iter()
        .map(str::trim)
        .filter(|s| s.split_whitespace().count() > MIN_SENTENCE_WORDS)
        .collect();

    if sentences.len() <= max_sentences {
        return sentences.join(" ");
    }

    let mut scored: Vec<(f64, usize)> = sentences
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let words = s.split_whitespace().count() as f64;
            let position_weight = 1.0 - i as f64 / sentences.len() as f64;
            (words * position_weight, i)
        })
        .collect();
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

    let mut picked: Vec<usize> = scored
        .into_iter()
        .take(max_sentences)
        .map(|(_, i)| i)
        .collect();
    picked.sort_unstable();

    picked
        .into_iter()
        .map(|i| sentences[i])
        .collect::<Vec<_>>()
        .join(" ")
}
