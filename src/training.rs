//! Training interface for CRF models
//!
//! Wraps the CRFsuite trainer with the same featurization the inference path
//! uses, and reads the JSONL training-data format: one record per line with
//! `email_text`, `lines` (text + label), and free-form `metadata`.

use crate::content_filter;
use crate::crf;
use crate::error::ModelError;
use crate::features::{self, ExtractedFeatures};
use crate::label::Label;
use crate::normalizer;
use crate::structural;
use crfsuite::{Algorithm, GraphicalModel, Trainer};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Optimization algorithm used for training
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainingAlgorithm {
    /// L-BFGS with elastic-net regularization (the default)
    Lbfgs,
    /// Stochastic gradient descent with L2 regularization
    L2Sgd,
    /// Averaged perceptron
    #[serde(rename = "ap")]
    AveragedPerceptron,
    /// Passive-aggressive
    #[serde(rename = "pa")]
    PassiveAggressive,
    /// Adaptive regularization of weights
    Arow,
}

impl TrainingAlgorithm {
    /// Parse the short names used by CRFsuite tooling.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "lbfgs" => Some(Self::Lbfgs),
            "l2sgd" => Some(Self::L2Sgd),
            "ap" => Some(Self::AveragedPerceptron),
            "pa" => Some(Self::PassiveAggressive),
            "arow" => Some(Self::Arow),
            _ => None,
        }
    }

    fn to_crfsuite(self) -> Algorithm {
        match self {
            Self::Lbfgs => Algorithm::LBFGS,
            Self::L2Sgd => Algorithm::L2SGD,
            Self::AveragedPerceptron => Algorithm::AP,
            Self::PassiveAggressive => Algorithm::PA,
            Self::Arow => Algorithm::AROW,
        }
    }
}

/// Training hyperparameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Optimization algorithm
    pub algorithm: TrainingAlgorithm,

    /// L1 regularization coefficient (L-BFGS only)
    pub c1: f64,

    /// L2 regularization coefficient
    pub c2: f64,

    /// Maximum optimizer iterations
    pub max_iterations: u32,

    /// Learn transitions absent from the training data, so the model can
    /// still score them at inference time
    pub all_possible_transitions: bool,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            algorithm: TrainingAlgorithm::Lbfgs,
            c1: 0.1,
            c2: 0.1,
            max_iterations: 100,
            all_possible_transitions: true,
        }
    }
}

/// One line of a training record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingLine {
    /// Line text
    pub text: String,

    /// Wire label name, one of the six symbols
    pub label: String,
}

/// One JSONL training record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingExample {
    /// The raw email text
    pub email_text: String,

    /// Per-line annotations, blanks included
    pub lines: Vec<TrainingLine>,

    /// Free-form record metadata
    #[serde(default)]
    pub metadata: serde_json::Value,
}

/// Trainer for email line labeling models
pub struct CrfTrainer {
    trainer: Trainer,
    sequences: usize,
}

impl CrfTrainer {
    /// Create a trainer with the given hyperparameters.
    pub fn new(config: TrainingConfig) -> Result<Self, ModelError> {
        let mut trainer = Trainer::new(false);
        trainer
            .select(config.algorithm.to_crfsuite(), GraphicalModel::CRF1D)
            .map_err(|e| ModelError::Train(e.to_string()))?;

        // c1 switches L-BFGS to elastic net; other optimizers reject it.
        if config.algorithm == TrainingAlgorithm::Lbfgs {
            trainer
                .set("c1", &config.c1.to_string())
                .map_err(|e| ModelError::Train(e.to_string()))?;
        }
        trainer
            .set("c2", &config.c2.to_string())
            .map_err(|e| ModelError::Train(e.to_string()))?;
        trainer
            .set("max_iterations", &config.max_iterations.to_string())
            .map_err(|e| ModelError::Train(e.to_string()))?;
        trainer
            .set(
                "feature.possible_transitions",
                if config.all_possible_transitions { "1" } else { "0" },
            )
            .map_err(|e| ModelError::Train(e.to_string()))?;

        Ok(Self {
            trainer,
            sequences: 0,
        })
    }

    /// Add one training sequence from already-extracted features.
    ///
    /// `labels` must carry exactly one label per content line.
    pub fn add_sequence(
        &mut self,
        features: &ExtractedFeatures,
        labels: &[Label],
    ) -> Result<(), ModelError> {
        if labels.len() != features.total_lines {
            return Err(ModelError::LabelMismatch {
                expected: features.total_lines,
                actual: labels.len(),
            });
        }

        let items = crf::features_to_items(features);
        let yseq: Vec<String> = labels.iter().map(|l| l.as_str().to_string()).collect();
        self.trainer
            .append(&items, &yseq, 0)
            .map_err(|e| ModelError::Train(e.to_string()))?;
        self.sequences += 1;
        Ok(())
    }

    /// Add one training example, running the inference featurization over
    /// its email text. Blank lines are dropped from the label sequence.
    pub fn add_example(&mut self, example: &TrainingExample) -> Result<(), ModelError> {
        let normalized = normalizer::normalize(&example.email_text)
            .map_err(|e| ModelError::InvalidData(e.to_string()))?;
        let filtered = content_filter::filter(&normalized);
        let analysis = structural::analyze(&filtered);
        let features = features::extract(&analysis);

        let labels = example
            .lines
            .iter()
            .filter(|l| !l.text.trim().is_empty())
            .map(|l| {
                Label::parse(&l.label)
                    .ok_or_else(|| ModelError::InvalidData(format!("unknown label: {}", l.label)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.add_sequence(&features, &labels)
    }

    /// Number of sequences added so far
    #[must_use]
    pub fn sequence_count(&self) -> usize {
        self.sequences
    }

    /// Train the model and write it to `output_path`.
    pub fn train<P: AsRef<Path>>(&mut self, output_path: P) -> Result<(), ModelError> {
        let path = output_path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        self.trainer
            .train(&path.to_string_lossy(), -1)
            .map_err(|e| ModelError::Train(e.to_string()))?;
        debug!(sequences = self.sequences, path = %path.display(), "trained CRF model");
        Ok(())
    }
}

/// Read JSONL training records from a file.
pub fn read_training_data<P: AsRef<Path>>(path: P) -> Result<Vec<TrainingExample>, ModelError> {
    let file = File::open(path.as_ref())?;
    let reader = BufReader::new(file);

    let mut examples = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let example: TrainingExample = serde_json::from_str(&line)
            .map_err(|e| ModelError::InvalidData(format!("record {}: {e}", number + 1)))?;
        examples.push(example);
    }

    Ok(examples)
}
