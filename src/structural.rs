//! Structural analysis of email content lines
//!
//! Operates on content lines only (blanks were filtered): quote depth from
//! leading markers, forward/reply attribution headers, and visual delimiter
//! flags.

use crate::content_filter::{ContentLine, FilteredContent};
use crate::patterns::is_separator_line;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// A content line with structural annotations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedLine {
    /// The underlying content line
    pub content: ContentLine,

    /// Nesting level of quoting, 0 when not quoted
    pub quote_depth: usize,

    /// Line is a forward/reply attribution header
    pub is_forward_reply_header: bool,

    /// The previous content line is a visual delimiter
    pub preceded_by_delimiter: bool,

    /// Line itself is a visual delimiter
    pub is_delimiter: bool,
}

impl AnnotatedLine {
    /// The line text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.content.text
    }
}

/// Result of structural analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuralAnalysis {
    /// Annotated content lines in document order
    pub lines: Vec<AnnotatedLine>,

    /// Whether any line is quoted
    pub has_quotes: bool,

    /// Whether any forward/reply header was detected
    pub has_forward_reply: bool,

    /// Content index of the first quoted line
    pub first_quote_index: Option<usize>,

    /// Content index of the last quoted line
    pub last_quote_index: Option<usize>,
}

// After NFKC, ＞ is > and ｜ is |; the full-width bar is kept for lines that
// bypassed folding.
const QUOTE_MARKERS: [char; 3] = ['>', '|', '｜'];

static FORWARD_REPLY_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // English attribution
        r"(?i)^-{3,}\s*Original\s+Message\s*-{3,}$",
        r"(?i)^-{3,}\s*Forwarded\s+message\s*-{3,}$",
        r"(?i)^On\s+\d{4}[/-]\d{1,2}[/-]\d{1,2}.*wrote:?\s*$",
        r"(?i)^On\s+.+wrote:?\s*$",
        // Japanese attribution
        r"^\d{4}年\d{1,2}月\d{1,2}日.*wrote:?\s*$",
        r"^\d{4}年\d{1,2}月\d{1,2}日.*:$",
        r"^.+さんからのメール:?\s*$",
        r"^.+さんは.*に書きました:?\s*$",
        r"^転送:",
        r"^返信:",
        r"(?i)^Fwd:",
        r"(?i)^Re:",
        // Outlook-style quoted headers
        r"^差出人:\s*.+$",
        r"^送信者:\s*.+$",
        r"^件名:\s*.+$",
        r"(?i)^From:\s+.+$",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Annotate content lines with quote depth, header, and delimiter flags.
#[must_use]
pub fn analyze(filtered: &FilteredContent) -> StructuralAnalysis {
    let mut lines = Vec::with_capacity(filtered.content_lines.len());
    let mut first_quote_index = None;
    let mut last_quote_index = None;
    let mut has_forward_reply = false;
    let mut previous_is_delimiter = false;

    for (index, content) in filtered.content_lines.iter().enumerate() {
        let depth = quote_depth(&content.text);
        let is_delimiter = is_separator_line(&content.text);
        let is_header = is_forward_reply_header(&content.text);

        if is_header {
            has_forward_reply = true;
        }
        if depth > 0 {
            if first_quote_index.is_none() {
                first_quote_index = Some(index);
            }
            last_quote_index = Some(index);
        }

        lines.push(AnnotatedLine {
            content: content.clone(),
            quote_depth: depth,
            is_forward_reply_header: is_header,
            preceded_by_delimiter: previous_is_delimiter,
            is_delimiter,
        });

        previous_is_delimiter = is_delimiter;
    }

    StructuralAnalysis {
        lines,
        has_quotes: first_quote_index.is_some(),
        has_forward_reply,
        first_quote_index,
        last_quote_index,
    }
}

/// Count leading quote markers, allowing single spaces between them.
#[must_use]
pub fn quote_depth(line: &str) -> usize {
    let mut depth = 0;
    let mut pending_space = false;

    for c in line.trim_start_matches([' ', '\t']).chars() {
        if QUOTE_MARKERS.contains(&c) {
            depth += 1;
            pending_space = false;
        } else if c == ' ' && !pending_space {
            pending_space = true;
        } else {
            break;
        }
    }

    depth
}

/// Check whether a line is a forward/reply attribution header.
#[must_use]
pub fn is_forward_reply_header(line: &str) -> bool {
    let stripped = line.trim();
    if stripped.is_empty() {
        return false;
    }
    FORWARD_REPLY_PATTERNS.iter().any(|p| p.is_match(stripped))
}
