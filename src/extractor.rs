//! The public extraction interface
//!
//! [`EmailBodyExtractor`] wires the pipeline together: normalize, filter,
//! analyze, featurize, decode, reconstruct, assemble, then gate the result on
//! the CRF sequence probability.

use crate::assembler::{self, AssembledBody};
use crate::content_filter;
use crate::crf::{CrfSequenceLabeler, LabeledLine};
use crate::error::{ExtractionError, ModelError, Result};
use crate::features;
use crate::normalizer;
use crate::reconstructor;
use crate::structural;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Minimum sequence probability accepted by default
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.5;

/// Location of the bundled model, trained by `CrfTrainer`
const BUNDLED_MODEL_PATH: &str =
    concat!(env!("CARGO_MANIFEST_DIR"), "/models/email-body.crfsuite");

/// Full extraction result with diagnostics
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Extracted body text; populated whenever assembly found one, even if
    /// the confidence gate subsequently rejected it
    pub body: Option<String>,

    /// Sequence probability of the Viterbi path
    pub confidence: f64,

    /// Whether extraction succeeded
    pub success: bool,

    /// The failure, when `success` is false
    pub error: Option<ExtractionError>,

    /// All content lines with their labels, for inspection
    pub labeled_lines: Vec<LabeledLine>,

    /// Whether a signature block was found
    pub signature_detected: bool,

    /// Number of inline quote lines included in the body
    pub inline_quotes_included: usize,
}

impl ExtractionResult {
    fn failure(error: ExtractionError) -> Self {
        Self {
            body: None,
            confidence: 0.0,
            success: false,
            error: Some(error),
            labeled_lines: Vec::new(),
            signature_detected: false,
            inline_quotes_included: 0,
        }
    }
}

/// Extracts the human-authored body from Japanese business emails.
///
/// Immutable after construction apart from [`load_model`](Self::load_model);
/// every extraction call runs to completion synchronously with no I/O.
pub struct EmailBodyExtractor {
    labeler: CrfSequenceLabeler,
    confidence_threshold: f64,
}

impl EmailBodyExtractor {
    /// Construct with the bundled model and the default threshold.
    pub fn new() -> std::result::Result<Self, ModelError> {
        Self::with_options(None::<&Path>, DEFAULT_CONFIDENCE_THRESHOLD)
    }

    /// Construct with an explicit model path and confidence threshold.
    /// Passing `None` selects the bundled model.
    pub fn with_options<P: AsRef<Path>>(
        model_path: Option<P>,
        confidence_threshold: f64,
    ) -> std::result::Result<Self, ModelError> {
        let path: PathBuf = match model_path {
            Some(p) => p.as_ref().to_path_buf(),
            None => PathBuf::from(BUNDLED_MODEL_PATH),
        };
        let labeler = CrfSequenceLabeler::from_file(&path)?;
        Ok(Self {
            labeler,
            confidence_threshold,
        })
    }

    /// Construct from in-memory model bytes.
    pub fn from_model_bytes(
        bytes: &[u8],
        confidence_threshold: f64,
    ) -> std::result::Result<Self, ModelError> {
        Ok(Self {
            labeler: CrfSequenceLabeler::from_memory(bytes)?,
            confidence_threshold,
        })
    }

    /// Replace the loaded model.
    pub fn load_model<P: AsRef<Path>>(&mut self, path: P) -> std::result::Result<(), ModelError> {
        self.labeler.load_model(path.as_ref())
    }

    /// Whether a model is currently loaded
    #[must_use]
    pub fn is_model_loaded(&self) -> bool {
        self.labeler.is_loaded()
    }

    /// The configured confidence threshold
    #[must_use]
    pub fn confidence_threshold(&self) -> f64 {
        self.confidence_threshold
    }

    /// Extract the body text, failing with a typed error.
    pub fn extract(&self, email_text: &str) -> Result<String> {
        let result = self.extract_with_metadata(email_text);
        match result.error {
            Some(error) => Err(error),
            None => result.body.ok_or_else(|| {
                ExtractionError::NoBodyDetected("no body content extracted".into())
            }),
        }
    }

    /// Extract the body text, mapping every failure to `None`.
    #[must_use]
    pub fn extract_safe(&self, email_text: &str) -> Option<String> {
        let result = self.extract_with_metadata(email_text);
        if result.success { result.body } else { None }
    }

    /// Run the full pipeline and report everything it saw. Expected failure
    /// conditions are returned in the `error` field, never panicked or
    /// propagated.
    #[must_use]
    pub fn extract_with_metadata(&self, email_text: &str) -> ExtractionResult {
        let normalized = match normalizer::normalize(email_text) {
            Ok(normalized) => normalized,
            Err(error) => return ExtractionResult::failure(error),
        };

        let filtered = content_filter::filter(&normalized);
        let analysis = structural::analyze(&filtered);
        let features = features::extract(&analysis);

        let labeling = match self.labeler.predict(&features, &analysis.lines) {
            Ok(labeling) => labeling,
            // Model-level failures surface as InvalidInput: the input cannot
            // be processed in the extractor's current state.
            Err(error) => {
                return ExtractionResult::failure(ExtractionError::InvalidInput(
                    error.to_string(),
                ));
            }
        };

        let reconstructed =
            reconstructor::reconstruct(&labeling, &filtered.whitespace_map, &filtered.original_lines);
        let assembled = assembler::assemble(&reconstructed, &analysis);

        debug!(
            content_lines = labeling.labeled_lines.len(),
            body_lines = assembled.body_lines.len(),
            signature = ?assembled.signature_index,
            confidence = labeling.sequence_probability,
            "pipeline complete"
        );

        self.gate(assembled, labeling.sequence_probability, labeling.labeled_lines)
    }

    /// Apply the confidence gate to the assembled body.
    fn gate(
        &self,
        assembled: AssembledBody,
        confidence: f64,
        labeled_lines: Vec<LabeledLine>,
    ) -> ExtractionResult {
        let signature_detected = assembled.signature_index.is_some();
        let inline_quotes_included = assembled.inline_quote_count;

        let (success, error, body) = if !assembled.success {
            (
                false,
                Some(ExtractionError::NoBodyDetected(
                    "no body content found".into(),
                )),
                None,
            )
        } else if confidence < self.confidence_threshold {
            (
                false,
                Some(ExtractionError::LowConfidence {
                    message: "extraction confidence below threshold".into(),
                    confidence,
                    threshold: self.confidence_threshold,
                }),
                Some(assembled.body_text),
            )
        } else {
            (true, None, Some(assembled.body_text))
        };

        ExtractionResult {
            body,
            confidence,
            success,
            error,
            labeled_lines,
            signature_detected,
            inline_quotes_included,
        }
    }
}
