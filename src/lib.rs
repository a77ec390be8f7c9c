//! Extract the human-authored body from Japanese business emails.
//!
//! honbun takes a plain-text email and returns the message its author wrote
//! (greeting + body + closing, plus inline quoted fragments), discarding
//! signature blocks, leading/trailing quoted threads, forwarded headers, and
//! decorative noise.
//!
//! The pipeline normalizes the text, filters blank lines out of the model's
//! view, annotates structure (quote depth, delimiters, attribution headers),
//! extracts 37 per-line features, labels every content line with a
//! linear-chain CRF, reinserts the blanks, and assembles the final body span.
//! Results are gated on the Viterbi sequence probability.
//!
//! # Example
//!
//! ```no_run
//! use honbun::EmailBodyExtractor;
//!
//! let extractor = EmailBodyExtractor::new().unwrap();
//!
//! let body = extractor.extract(
//!     "お世話になっております。\n\n資料を添付いたします。\n\n--\n山田太郎\nTEL: 03-1234-5678",
//! ).unwrap();
//!
//! assert!(body.contains("資料を添付いたします。"));
//! assert!(!body.contains("TEL"));
//! ```
//!
//! # Failure modes
//!
//! Extraction fails with exactly one of three typed errors: empty or
//! whitespace-only input ([`ExtractionError::InvalidInput`]), a pipeline run
//! that found no body ([`ExtractionError::NoBodyDetected`]), or a label
//! sequence below the confidence threshold
//! ([`ExtractionError::LowConfidence`]). `extract_safe` folds all three into
//! `None`; `extract_with_metadata` reports the error as a field alongside
//! everything the pipeline saw.

pub mod assembler;
pub mod content_filter;
pub mod crf;
pub mod error;
pub mod extractor;
pub mod features;
pub mod label;
pub mod normalizer;
pub mod patterns;
pub mod reconstructor;
pub mod structural;
pub mod training;

pub use assembler::AssembledBody;
pub use content_filter::{ContentLine, FilteredContent, WhitespaceMap};
pub use crf::{CrfSequenceLabeler, LabeledLine, SequenceLabelingResult};
pub use error::{ExtractionError, ModelError, Result};
pub use extractor::{DEFAULT_CONFIDENCE_THRESHOLD, EmailBodyExtractor, ExtractionResult};
pub use features::{BracketBlock, ExtractedFeatures, LineFeatures};
pub use label::{LABELS, Label};
pub use normalizer::NormalizedEmail;
pub use reconstructor::{ReconstructedDocument, ReconstructedLine};
pub use structural::{AnnotatedLine, StructuralAnalysis};
pub use training::{
    CrfTrainer, TrainingAlgorithm, TrainingConfig, TrainingExample, TrainingLine,
    read_training_data,
};
