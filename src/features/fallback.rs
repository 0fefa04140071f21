//! Local extractive summarizer used when the provider cannot be reached.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{info, warn};

use crate::core::models::SummaryResult;
use crate::errors::SummarizeError;

/// Longest summary the fallback will produce, in characters.
pub const MAX_SUMMARY_CHARS: usize = 300;

const ELLIPSIS: &str = "...";

/// Returned when nothing can be extracted from the input.
pub const GENERIC_SUMMARY: &str =
    "This note contains important information. Review the full content for details.";

static SENTENCE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("static regex compile"));

/// Splits on runs of terminal punctuation, dropping blank fragments.
#[must_use]
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_BOUNDARY
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Builds the extractive summary.
///
/// Up to three sentences yield the first one; longer texts yield the first,
/// middle and last sentences. Input without any sentence fragment is used
/// whole.
///
/// # Errors
///
/// Returns `FallbackInternalFault` when the input has no non-blank content.
pub fn extract_summary(text: &str) -> Result<String, SummarizeError> {
    let mut sentences = split_sentences(text);
    if sentences.is_empty() {
        let whole = text.trim();
        if whole.is_empty() {
            return Err(SummarizeError::FallbackInternalFault(
                "input contains no sentences".to_string(),
            ));
        }
        sentences.push(whole);
    }

    let count = sentences.len();
    let summary = if count <= 3 {
        sentences[0].to_string()
    } else {
        let first = sentences[0];
        let middle = sentences[count / 2];
        let last = sentences[count - 1];
        format!("{first}. {middle}. {last}.")
    };

    Ok(truncate_summary(summary))
}

/// Caps `summary` at [`MAX_SUMMARY_CHARS`], ending truncated text with `...`.
#[must_use]
pub fn truncate_summary(summary: String) -> String {
    if summary.chars().count() <= MAX_SUMMARY_CHARS {
        return summary;
    }

    let mut truncated: String = summary
        .chars()
        .take(MAX_SUMMARY_CHARS - ELLIPSIS.len())
        .collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

/// Never fails: any extraction fault degrades to [`GENERIC_SUMMARY`].
#[must_use]
pub fn fallback_summary(text: &str) -> SummaryResult {
    match extract_summary(text) {
        Ok(summary) => {
            info!(
                summary_chars = summary.chars().count(),
                "Generated fallback summary"
            );
            SummaryResult::new(summary)
        }
        Err(e) => {
            warn!(error = %e, "Fallback summary generation failed, using generic summary");
            SummaryResult::new(GENERIC_SUMMARY)
        }
    }
}
