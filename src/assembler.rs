//! Body assembly from the reconstructed, labeled document
//!
//! Scans the document for the signature boundary, classifies quoted runs as
//! inline or leading/trailing, groups the remaining lines into content
//! blocks with OTHER and blank lines acting as neutral filler, and selects
//! the final body span.

use crate::label::Label;
use crate::reconstructor::{ReconstructedDocument, ReconstructedLine};
use crate::structural::StructuralAnalysis;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Result of body assembly
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssembledBody {
    /// The extracted body text; empty when nothing was selected
    pub body_text: String,

    /// Original indices of the lines included in the body, in order
    pub body_lines: Vec<usize>,

    /// Original index of the first signature line, if any
    pub signature_index: Option<usize>,

    /// Number of inline quote lines included in the body
    pub inline_quote_count: usize,

    /// True iff `body_text` is non-empty
    pub success: bool,
}

/// Assemble the final body from the reconstructed document.
///
/// The structural analysis supplies forward/reply header positions, which
/// act as hard breaks between blocks.
#[must_use]
pub fn assemble(doc: &ReconstructedDocument, analysis: &StructuralAnalysis) -> AssembledBody {
    let lines = &doc.lines;

    if lines.is_empty() {
        return AssembledBody {
            body_text: String::new(),
            body_lines: Vec::new(),
            signature_index: None,
            inline_quote_count: 0,
            success: false,
        };
    }

    let signature_index = lines
        .iter()
        .find(|l| !l.is_blank && l.label == Some(Label::Signature))
        .map(|l| l.original_index);
    let limit = signature_index.unwrap_or(lines.len());

    let runs = quote_runs(&lines[..limit]);
    let (inline_quotes, hard_breaks) = classify_runs(lines, &runs, limit, analysis);

    let blocks = build_blocks(lines, limit, &inline_quotes, &hard_breaks);
    let selected = select_body(blocks, signature_index.is_some());

    let body_text = selected
        .iter()
        .map(|&i| lines[i].text.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    let inline_quote_count = selected
        .iter()
        .filter(|&&i| !lines[i].is_blank && lines[i].label == Some(Label::Quote))
        .count();
    let success = !body_text.trim().is_empty();

    AssembledBody {
        body_text,
        body_lines: selected,
        signature_index,
        inline_quote_count,
        success,
    }
}

/// Maximal runs of QUOTE-labeled content lines. Blank lines between two
/// quote lines do not break a run; run extents span quote lines only.
fn quote_runs(lines: &[ReconstructedLine]) -> Vec<(usize, usize)> {
    let mut runs: Vec<(usize, usize)> = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        if line.is_blank || line.label != Some(Label::Quote) {
            continue;
        }
        match runs.last_mut() {
            Some((_, end)) if only_blanks_between(lines, *end, idx) => *end = idx,
            _ => runs.push((idx, idx)),
        }
    }

    runs
}

fn only_blanks_between(lines: &[ReconstructedLine], from: usize, to: usize) -> bool {
    lines[from + 1..to].iter().all(|l| l.is_blank)
}

/// Split quote runs into inline quotes (kept) and leading/trailing runs
/// (hard breaks), and collect forward/reply header breaks.
fn classify_runs(
    lines: &[ReconstructedLine],
    runs: &[(usize, usize)],
    limit: usize,
    analysis: &StructuralAnalysis,
) -> (BTreeSet<usize>, BTreeSet<usize>) {
    let mut inline_quotes = BTreeSet::new();
    let mut hard_breaks = BTreeSet::new();

    for &(start, end) in runs {
        let before = lines[..start]
            .iter()
            .any(|l| !l.is_blank && is_author_content(l));
        let after = lines[end + 1..limit]
            .iter()
            .any(|l| !l.is_blank && is_author_content(l));

        if before && after {
            for (idx, line) in lines.iter().enumerate().take(end + 1).skip(start) {
                if !line.is_blank && line.label == Some(Label::Quote) {
                    inline_quotes.insert(idx);
                }
            }
        } else {
            hard_breaks.extend(start..=end);
        }
    }

    for annotated in &analysis.lines {
        let idx = annotated.content.original_index;
        if annotated.is_forward_reply_header && idx < limit {
            hard_breaks.insert(idx);
        }
    }

    (inline_quotes, hard_breaks)
}

/// A non-quote, non-signature content line written by the author
fn is_author_content(line: &ReconstructedLine) -> bool {
    !matches!(line.label, Some(Label::Quote) | Some(Label::Signature) | None)
}

/// Group lines into blocks. In-set lines (GREETING/BODY/CLOSING and inline
/// quotes) accumulate; OTHER and blank lines are buffered and only absorbed
/// when another in-set line follows; hard breaks flush the current block.
fn build_blocks(
    lines: &[ReconstructedLine],
    limit: usize,
    inline_quotes: &BTreeSet<usize>,
    hard_breaks: &BTreeSet<usize>,
) -> Vec<Vec<usize>> {
    let mut blocks: Vec<Vec<usize>> = Vec::new();
    let mut current: Vec<usize> = Vec::new();
    let mut pending: Vec<usize> = Vec::new();

    for (idx, line) in lines.iter().enumerate().take(limit) {
        if hard_breaks.contains(&idx) {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
            pending.clear();
        } else if is_in_set(line, idx, inline_quotes) {
            current.append(&mut pending);
            current.push(idx);
        } else if !current.is_empty() {
            pending.push(idx);
        }
    }

    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}

fn is_in_set(line: &ReconstructedLine, idx: usize, inline_quotes: &BTreeSet<usize>) -> bool {
    if line.is_blank {
        return false;
    }
    match line.label {
        Some(Label::Greeting | Label::Body | Label::Closing) => true,
        Some(Label::Quote) => inline_quotes.contains(&idx),
        _ => false,
    }
}

/// With a signature present, the body is every block before it; otherwise
/// the largest block wins, first one on ties.
fn select_body(blocks: Vec<Vec<usize>>, has_signature: bool) -> Vec<usize> {
    if has_signature {
        return blocks.into_iter().flatten().collect();
    }

    let mut best: Vec<usize> = Vec::new();
    for block in blocks {
        if block.len() > best.len() {
            best = block;
        }
    }
    best
}
