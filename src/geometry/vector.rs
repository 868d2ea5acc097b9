//! Vector type.

use serde::{Deserialize, Serialize};

/// An immutable displacement in n-dimensional space.
///
/// Usually obtained from [`vector_between`](super::vector_between).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector {
    components: Vec<f64>,
}

impl Vector {
    /// Creates a vector from its components.
    pub fn new(components: impl Into<Vec<f64>>) -> Self {
        Self {
            components: components.into(),
        }
    }

    /// Number of components.
    pub fn dimension(&self) -> usize {
        self.components.len()
    }

    /// All components in order.
    pub fn components(&self) -> &[f64] {
        &self.components
    }

    /// Squared Euclidean length.
    pub fn length_squared(&self) -> f64 {
        self.components.iter().map(|c| c * c).sum()
    }

    /// Euclidean length.
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Cosine of the angle between this vector and `other`.
    ///
    /// Returns `None` on a dimension mismatch or when either vector has zero
    /// length.
    pub fn cos_angle(&self, other: &Vector) -> Option<f64> {
        let d = super::dot(self, other).ok()?;
        let denom = self.length() * other.length();
        if denom == 0.0 {
            return None;
        }
        Some(d / denom)
    }
}
