//! CRF sequence labeling for email line classification
//!
//! Wraps a CRFsuite model: feature vectors become attribute lists (with a few
//! derived categorical attributes), Viterbi decoding assigns one [`Label`] per
//! content line, and marginals provide per-label confidence. Two deterministic
//! post-processing passes then repair label sequences the linear-chain model
//! cannot rule out on its own.
//!
//! The underlying tagger handle is not thread-safe; decoding is serialized
//! behind an internal mutex, so a loaded labeler can be shared for concurrent
//! prediction as long as the handle itself never crosses threads.

use crate::error::ModelError;
use crate::features::{BracketBlock, ExtractedFeatures, LineFeatures};
use crate::label::{LABELS, Label};
use crate::structural::AnnotatedLine;
use crfsuite::{Attribute, Item, Model};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tracing::{debug, warn};

/// A content line with its predicted label and confidence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledLine {
    /// The annotated line the label applies to
    pub line: AnnotatedLine,

    /// Predicted label
    pub label: Label,

    /// Marginal probability of the predicted label
    pub confidence: f64,

    /// Marginal probabilities for all labels at this position
    pub probabilities: BTreeMap<Label, f64>,
}

impl LabeledLine {
    /// The line text
    #[must_use]
    pub fn text(&self) -> &str {
        self.line.text()
    }
}

/// Result of CRF sequence labeling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceLabelingResult {
    /// One labeled line per content line
    pub labeled_lines: Vec<LabeledLine>,

    /// Joint probability of the Viterbi path, reported pre-repair
    pub sequence_probability: f64,
}

/// CRF-based line labeler
pub struct CrfSequenceLabeler {
    model: Option<Model>,
    model_path: Option<PathBuf>,
    decode_lock: Mutex<()>,
}

impl CrfSequenceLabeler {
    /// Create a labeler with no model loaded.
    #[must_use]
    pub fn new() -> Self {
        Self {
            model: None,
            model_path: None,
            decode_lock: Mutex::new(()),
        }
    }

    /// Create a labeler from a model file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ModelError> {
        let mut labeler = Self::new();
        labeler.load_model(path)?;
        Ok(labeler)
    }

    /// Create a labeler from in-memory model bytes.
    pub fn from_memory(bytes: &[u8]) -> Result<Self, ModelError> {
        let model = Model::from_memory(bytes).map_err(|e| ModelError::Load(e.to_string()))?;
        Ok(Self {
            model: Some(model),
            model_path: None,
            decode_lock: Mutex::new(()),
        })
    }

    /// Load a trained model, replacing any previously loaded one.
    pub fn load_model<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ModelError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ModelError::NotFound(path.to_path_buf()));
        }
        let model = Model::from_file(&path.to_string_lossy())
            .map_err(|e| ModelError::Load(e.to_string()))?;
        self.model = Some(model);
        self.model_path = Some(path.to_path_buf());
        debug!(path = %path.display(), "loaded CRF model");
        Ok(())
    }

    /// Whether a model is currently loaded
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.model.is_some()
    }

    /// Path of the currently loaded model file, if it came from disk
    #[must_use]
    pub fn model_path(&self) -> Option<&Path> {
        self.model_path.as_deref()
    }

    /// Predict labels for the content lines of an email.
    ///
    /// Runs Viterbi decoding, collects per-position marginals, then applies
    /// the two post-processing passes. The reported sequence probability is
    /// the pre-repair Viterbi probability.
    pub fn predict(
        &self,
        features: &ExtractedFeatures,
        lines: &[AnnotatedLine],
    ) -> Result<SequenceLabelingResult, ModelError> {
        let model = self.model.as_ref().ok_or(ModelError::NotLoaded)?;

        if features.total_lines == 0 {
            return Ok(SequenceLabelingResult {
                labeled_lines: Vec::new(),
                sequence_probability: 0.0,
            });
        }

        let items = features_to_items(features);

        let _guard = self
            .decode_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let mut tagger = model.tagger().map_err(|e| ModelError::Load(e.to_string()))?;

        let predicted = tagger
            .tag(&items)
            .map_err(|e| ModelError::Decode(e.to_string()))?;
        let sequence_probability = tagger
            .probability(&predicted)
            .map_err(|e| ModelError::Decode(e.to_string()))?;

        let mut labeled_lines = Vec::with_capacity(lines.len());
        for (idx, (line, name)) in lines.iter().zip(predicted.iter()).enumerate() {
            let mut probabilities = BTreeMap::new();
            for label in LABELS {
                let marginal = tagger
                    .marginal(label.as_str(), idx as i32)
                    .unwrap_or(0.0);
                probabilities.insert(label, marginal);
            }

            let (label, confidence) = match Label::parse(name) {
                Some(label) => (label, probabilities.get(&label).copied().unwrap_or(0.0)),
                None => {
                    warn!(position = idx, label = %name, "unknown label from model, defaulting to OTHER");
                    (Label::Other, 0.0)
                }
            };

            labeled_lines.push(LabeledLine {
                line: line.clone(),
                label,
                confidence,
                probabilities,
            });
        }

        repair_forbidden_transitions(&mut labeled_lines);
        unify_bracket_blocks(&mut labeled_lines, &features.bracket_blocks);

        debug!(
            lines = labeled_lines.len(),
            sequence_probability, "labeled email lines"
        );

        Ok(SequenceLabelingResult {
            labeled_lines,
            sequence_probability,
        })
    }
}

impl Default for CrfSequenceLabeler {
    fn default() -> Self {
        Self::new()
    }
}

/// Repair label transitions the linear-chain model cannot forbid on its own.
///
/// Once any line has been labeled SIGNATURE, a later CLOSING is part of the
/// signature block and is relabeled SIGNATURE. A visual delimiter can never
/// be a closing formula; such a CLOSING becomes OTHER.
pub fn repair_forbidden_transitions(lines: &mut [LabeledLine]) {
    let mut signature_seen = false;
    for labeled in lines.iter_mut() {
        if labeled.label == Label::Signature {
            signature_seen = true;
        } else if labeled.label == Label::Closing {
            if signature_seen {
                labeled.label = Label::Signature;
            } else if labeled.line.is_delimiter {
                labeled.label = Label::Other;
            }
        }
    }
}

/// Unify the labels of bracketed blocks.
///
/// Decorative brackets confuse the labeler because the bounding separators
/// look like signature delimiters. When a clear majority of the interior
/// lines agree on BODY or SIGNATURE, the whole block (boundaries included)
/// takes that label.
pub fn unify_bracket_blocks(lines: &mut [LabeledLine], blocks: &[BracketBlock]) {
    for block in blocks {
        if block.end >= lines.len() || block.end <= block.start + 1 {
            continue;
        }
        let interior = &lines[block.start + 1..block.end];
        let total = interior.len();
        let body = interior.iter().filter(|l| l.label == Label::Body).count();
        let signature = interior
            .iter()
            .filter(|l| l.label == Label::Signature)
            .count();

        let unified = if body * 2 > total {
            Label::Body
        } else if signature * 2 > total {
            Label::Signature
        } else {
            continue;
        };

        for labeled in &mut lines[block.start..=block.end] {
            labeled.label = unified;
        }
    }
}

/// Convert feature vectors into CRFsuite attribute sequences.
///
/// Shared between inference and training so both sides see identical
/// attributes.
pub(crate) fn features_to_items(features: &ExtractedFeatures) -> Vec<Item> {
    features
        .line_features
        .iter()
        .enumerate()
        .map(|(idx, f)| line_attributes(f, idx, features.total_lines))
        .collect()
}

fn line_attributes(f: &LineFeatures, idx: usize, total: usize) -> Item {
    let mut item = Item::new();

    if idx == 0 {
        item.push(Attribute::new("BOS", 1.0));
    }
    if idx + 1 == total {
        item.push(Attribute::new("EOS", 1.0));
    }

    // Positional
    item.push(Attribute::new("pos_norm", f.position_normalized));
    item.push(Attribute::new("pos_rev", f.position_reverse));
    item.push(Attribute::new("lines_from_start", f.lines_from_start as f64));
    item.push(Attribute::new("lines_from_end", f.lines_from_end as f64));
    item.push(Attribute::new("pos_rel_first_quote", f.position_rel_first_quote));
    item.push(Attribute::new("pos_rel_last_quote", f.position_rel_last_quote));

    // Content
    item.push(Attribute::new("line_length", f.line_length as f64));
    item.push(Attribute::new("kanji_ratio", f.kanji_ratio));
    item.push(Attribute::new("hiragana_ratio", f.hiragana_ratio));
    item.push(Attribute::new("katakana_ratio", f.katakana_ratio));
    item.push(Attribute::new("ascii_ratio", f.ascii_ratio));
    item.push(Attribute::new("digit_ratio", f.digit_ratio));
    item.push(Attribute::new("symbol_ratio", f.symbol_ratio));
    item.push(Attribute::new("leading_ws", f.leading_whitespace as f64));
    item.push(Attribute::new("trailing_ws", f.trailing_whitespace as f64));

    // Whitespace context
    item.push(Attribute::new("blank_lines_before", f.blank_lines_before as f64));
    item.push(Attribute::new("blank_lines_after", f.blank_lines_after as f64));

    // Structural
    item.push(Attribute::new("quote_depth", f.quote_depth as f64));
    item.push(bool_attribute("is_forward_reply_header", f.is_forward_reply_header));
    item.push(bool_attribute("preceded_by_delimiter", f.preceded_by_delimiter));
    item.push(bool_attribute("is_delimiter", f.is_delimiter));

    // Pattern flags
    item.push(bool_attribute("is_greeting", f.is_greeting));
    item.push(bool_attribute("is_closing", f.is_closing));
    item.push(bool_attribute("has_contact_info", f.has_contact_info));
    item.push(bool_attribute("has_company_pattern", f.has_company_pattern));
    item.push(bool_attribute("has_position_pattern", f.has_position_pattern));
    item.push(bool_attribute("has_name_pattern", f.has_name_pattern));
    item.push(bool_attribute("is_visual_separator", f.is_visual_separator));
    item.push(bool_attribute("has_meta_discussion", f.has_meta_discussion));
    item.push(bool_attribute("is_inside_quotation_marks", f.is_inside_quotation_marks));

    // Contextual window
    item.push(Attribute::new("ctx_greeting_count", f.context_greeting_count as f64));
    item.push(Attribute::new("ctx_closing_count", f.context_closing_count as f64));
    item.push(Attribute::new("ctx_contact_count", f.context_contact_count as f64));
    item.push(Attribute::new("ctx_quote_count", f.context_quote_count as f64));
    item.push(Attribute::new("ctx_separator_count", f.context_separator_count as f64));

    // Bracket block
    item.push(bool_attribute("in_bracketed_section", f.in_bracketed_section));
    item.push(bool_attribute(
        "bracket_has_signature_patterns",
        f.bracket_has_signature_patterns,
    ));

    // Derived categoricals for stronger signal
    let quote_cat = if f.quote_depth > 0 { "quoted" } else { "unquoted" };
    item.push(Attribute::new(format!("quote_depth_cat={quote_cat}"), 1.0));

    let pos_bucket = if f.position_normalized < 0.1 {
        "start"
    } else if f.position_normalized < 0.3 {
        "early"
    } else if f.position_normalized < 0.7 {
        "middle"
    } else if f.position_normalized < 0.9 {
        "late"
    } else {
        "end"
    };
    item.push(Attribute::new(format!("pos_bucket={pos_bucket}"), 1.0));

    let char_type = if f.ascii_ratio > 0.7 {
        "ascii_heavy"
    } else if f.ascii_ratio < 0.3 {
        "japanese_heavy"
    } else {
        "mixed"
    };
    item.push(Attribute::new(format!("char_type={char_type}"), 1.0));

    let bracket_cat = if f.in_bracketed_section {
        "bracketed"
    } else {
        "unbracketed"
    };
    item.push(Attribute::new(format!("bracket_cat={bracket_cat}"), 1.0));

    item
}

fn bool_attribute(name: &str, value: bool) -> Attribute {
    Attribute::new(name, if value { 1.0 } else { 0.0 })
}
