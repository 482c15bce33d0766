//! Face feature vectors: fixed-length embeddings compared by Euclidean
//! distance. Components carry no individual meaning.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Dimensionality of every enrolled template and every probe.
pub const FEATURE_DIM: usize = 128;

/// A 128-float face embedding, validated at construction and immutable
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f32>", into = "Vec<f32>")]
pub struct FeatureVector(Vec<f32>);

impl FeatureVector {
    /// Build a feature vector, rejecting wrong dimensionality and
    /// non-finite components.
    pub fn new(values: Vec<f32>) -> AppResult<Self> {
        if values.len() != FEATURE_DIM {
            return Err(AppError::InvalidFeatureVector(format!(
                "expected {} components, got {}",
                FEATURE_DIM,
                values.len()
            )));
        }

        if let Some(pos) = values.iter().position(|v| !v.is_finite()) {
            return Err(AppError::InvalidFeatureVector(format!(
                "non-finite component at index {}",
                pos
            )));
        }

        Ok(Self(values))
    }

    /// Euclidean distance to another vector. Symmetric by construction.
    pub fn distance(&self, other: &FeatureVector) -> f32 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f32>()
            .sqrt()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    /// Parse the on-disk / on-wire representation: a bare JSON array of
    /// 128 numbers.
    pub fn from_json(raw: &str) -> AppResult<Self> {
        let values: Vec<f32> = serde_json::from_str(raw)
            .map_err(|e| AppError::InvalidFeatureVector(format!("not a JSON number array: {e}")))?;
        Self::new(values)
    }

    pub fn to_json(&self) -> String {
        // Vec<f32> serialization cannot fail
        serde_json::to_string(&self.0).unwrap_or_default()
    }
}

impl TryFrom<Vec<f32>> for FeatureVector {
    type Error = AppError;

    fn try_from(values: Vec<f32>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl From<FeatureVector> for Vec<f32> {
    fn from(v: FeatureVector) -> Self {
        v.0
    }
}
