//! Document reconstruction after CRF labeling
//!
//! Blank lines were removed before decoding; this stage reinserts them at
//! their original positions. Each blank inherits the label, confidence, and
//! probabilities of the nearest preceding content line so that downstream
//! block logic can treat a blank inside a quoted run as part of the run.

use crate::content_filter::WhitespaceMap;
use crate::crf::SequenceLabelingResult;
use crate::label::Label;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A line in the reconstructed document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconstructedLine {
    /// Line text
    pub text: String,

    /// Position in the original document
    pub original_index: usize,

    /// True if this was a blank line filtered before decoding
    pub is_blank: bool,

    /// Assigned or inherited label; None only for blanks at document start
    pub label: Option<Label>,

    /// Marginal probability of the label; None alongside a None label
    pub confidence: Option<f64>,

    /// Marginal probabilities for all labels; None alongside a None label
    pub probabilities: Option<BTreeMap<Label, f64>>,
}

/// Full document restored to original line order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconstructedDocument {
    /// All lines, content and blank, in original order
    pub lines: Vec<ReconstructedLine>,

    /// Sequence probability carried over from labeling
    pub sequence_probability: f64,
}

/// Reinsert blank lines into the labeled sequence.
#[must_use]
pub fn reconstruct(
    labeling: &SequenceLabelingResult,
    whitespace_map: &WhitespaceMap,
    original_lines: &[String],
) -> ReconstructedDocument {
    let mut lines = Vec::with_capacity(whitespace_map.original_line_count);
    let mut content_idx = 0;
    let mut inherited: Option<(Label, f64, BTreeMap<Label, f64>)> = None;

    for orig_idx in 0..whitespace_map.original_line_count {
        if whitespace_map.blank_positions.contains(&orig_idx) {
            let (label, confidence, probabilities) = match &inherited {
                Some((label, confidence, probabilities)) => {
                    (Some(*label), Some(*confidence), Some(probabilities.clone()))
                }
                None => (None, None, None),
            };
            lines.push(ReconstructedLine {
                text: original_lines[orig_idx].clone(),
                original_index: orig_idx,
                is_blank: true,
                label,
                confidence,
                probabilities,
            });
        } else {
            let labeled = &labeling.labeled_lines[content_idx];
            content_idx += 1;
            inherited = Some((
                labeled.label,
                labeled.confidence,
                labeled.probabilities.clone(),
            ));
            lines.push(ReconstructedLine {
                text: labeled.text().to_string(),
                original_index: orig_idx,
                is_blank: false,
                label: Some(labeled.label),
                confidence: Some(labeled.confidence),
                probabilities: Some(labeled.probabilities.clone()),
            });
        }
    }

    ReconstructedDocument {
        lines,
        sequence_probability: labeling.sequence_probability,
    }
}
