use serde::{Deserialize, Serialize};

/// A fixed-length feature vector produced by the encoder.
///
/// Immutable once constructed: a profile change requires re-encoding,
/// never in-place mutation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureVector {
    data: Vec<f32>,
}

impl FeatureVector {
    #[inline]
    #[must_use]
    pub fn new(data: Vec<f32>) -> Self {
        Self { data }
    }

    #[inline]
    #[must_use]
    pub fn from_slice(data: &[f32]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.data.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Compute cosine similarity with another vector.
    ///
    /// Returns 0.0 for mismatched dimensions or zero-magnitude vectors.
    #[inline]
    pub fn cosine_similarity(&self, other: &FeatureVector) -> f32 {
        if self.dim() != other.dim() {
            return 0.0;
        }

        let dot_product = dot(&self.data, &other.data);
        let norm_a = norm(&self.data);
        let norm_b = norm(&other.data);

        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }

        dot_product / (norm_a * norm_b)
    }

    /// Cosine distance: `1 - cosine_similarity`, clamped at zero so
    /// rounding never produces a negative distance.
    #[inline]
    pub fn cosine_distance(&self, other: &FeatureVector) -> f32 {
        (1.0 - self.cosine_similarity(other)).max(0.0)
    }
}

#[inline]
fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

#[inline]
fn norm(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}
