//! Content filtering for CRF sequence labeling
//!
//! Blank lines act as context resets in a linear-chain CRF, so they are
//! removed before decoding and reinserted afterwards. This module performs
//! the split and records everything the reconstructor needs.

use crate::normalizer::NormalizedEmail;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A non-blank line with its whitespace context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentLine {
    /// The line text, never empty or whitespace-only
    pub text: String,

    /// Position in the original document
    pub original_index: usize,

    /// Count of blank lines immediately before this line
    pub blank_lines_before: usize,

    /// Count of blank lines immediately after this line; for the final
    /// content line this counts trailing blanks to end of document
    pub blank_lines_after: usize,
}

/// Mapping from content line indices back to original line indices
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhitespaceMap {
    /// content line index -> original line index, strictly increasing
    pub content_to_original: Vec<usize>,

    /// Original indices that hold blank lines
    pub blank_positions: BTreeSet<usize>,

    /// Total number of lines in the original document
    pub original_line_count: usize,
}

/// Result of content filtering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilteredContent {
    /// Non-blank lines only, in document order
    pub content_lines: Vec<ContentLine>,

    /// Mapping for reconstruction
    pub whitespace_map: WhitespaceMap,

    /// All original lines, for reconstruction
    pub original_lines: Vec<String>,
}

/// Split normalized lines into content lines and blank positions.
#[must_use]
pub fn filter(normalized: &NormalizedEmail) -> FilteredContent {
    let mut content_lines: Vec<ContentLine> = Vec::new();
    let mut blank_positions = BTreeSet::new();
    let mut content_to_original = Vec::new();

    let mut pending_blanks = 0;
    for (orig_idx, text) in normalized.lines.iter().enumerate() {
        if text.trim().is_empty() {
            blank_positions.insert(orig_idx);
            pending_blanks += 1;
        } else {
            content_lines.push(ContentLine {
                text: text.clone(),
                original_index: orig_idx,
                blank_lines_before: pending_blanks,
                blank_lines_after: 0,
            });
            content_to_original.push(orig_idx);
            pending_blanks = 0;
        }
    }

    // Second pass: blanks between consecutive content lines, and trailing
    // blanks after the last one.
    let count = content_lines.len();
    for i in 0..count {
        let next_boundary = if i + 1 < count {
            content_lines[i + 1].original_index
        } else {
            normalized.lines.len()
        };
        content_lines[i].blank_lines_after = next_boundary - content_lines[i].original_index - 1;
    }

    FilteredContent {
        content_lines,
        whitespace_map: WhitespaceMap {
            content_to_original,
            blank_positions,
            original_line_count: normalized.lines.len(),
        },
        original_lines: normalized.lines.clone(),
    }
}
