//! Growth Record Module
//! The validated, read-only measurement set for one plant.

use super::loader::GrowthCandidate;
use super::processor::DataProcessor;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(
        "all input lists must have the same number of values \
         (height: {heights}, leaf_count: {leaf_counts}, dry_weight: {dry_weights})"
    )]
    LengthMismatch {
        heights: usize,
        leaf_counts: usize,
        dry_weights: usize,
    },
    #[error("at least one reading per measurement is required")]
    NoReadings,
}

/// Measurements for a single plant. Index `i` of every sequence is week `i + 1`.
///
/// The only way to obtain a record is through [`GrowthRecord::validate`] or
/// [`GrowthRecord::new`], so all three sequences always have the same,
/// non-zero length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthRecord {
    plant_name: String,
    heights: Vec<f64>,
    leaf_counts: Vec<i64>,
    dry_weights: Vec<f64>,
}

impl GrowthRecord {
    pub fn new(
        plant_name: impl Into<String>,
        heights: Vec<f64>,
        leaf_counts: Vec<i64>,
        dry_weights: Vec<f64>,
    ) -> Result<Self, ValidationError> {
        Self::validate(GrowthCandidate {
            plant_name: plant_name.into(),
            heights,
            leaf_counts,
            dry_weights,
        })
    }

    /// Check that the three sequences line up and freeze the candidate.
    pub fn validate(candidate: GrowthCandidate) -> Result<Self, ValidationError> {
        let heights = candidate.heights.len();
        let leaf_counts = candidate.leaf_counts.len();
        let dry_weights = candidate.dry_weights.len();

        if heights != leaf_counts || leaf_counts != dry_weights {
            return Err(ValidationError::LengthMismatch {
                heights,
                leaf_counts,
                dry_weights,
            });
        }
        if heights == 0 {
            return Err(ValidationError::NoReadings);
        }

        Ok(Self {
            plant_name: candidate.plant_name,
            heights: candidate.heights,
            leaf_counts: candidate.leaf_counts,
            dry_weights: candidate.dry_weights,
        })
    }

    pub fn plant_name(&self) -> &str {
        &self.plant_name
    }

    pub fn heights(&self) -> &[f64] {
        &self.heights
    }

    pub fn leaf_counts(&self) -> &[i64] {
        &self.leaf_counts
    }

    pub fn dry_weights(&self) -> &[f64] {
        &self.dry_weights
    }

    /// Number of time steps.
    pub fn len(&self) -> usize {
        self.heights.len()
    }

    /// Always false for a validated record.
    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    /// (height, leaf count) pairs in week order.
    pub fn height_leaf_pairs(&self) -> impl Iterator<Item = (f64, i64)> + '_ {
        self.heights
            .iter()
            .copied()
            .zip(self.leaf_counts.iter().copied())
    }

    pub fn week_labels(&self) -> Vec<String> {
        DataProcessor::week_labels(self.len())
    }
}
