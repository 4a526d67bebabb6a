//! Fixed-length vector indexed by the aspect taxonomy.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::{Aspect, ASPECT_COUNT};

/// One `f64` per aspect, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AspectVector([f64; ASPECT_COUNT]);

impl AspectVector {
    /// The all-zero vector.
    pub const ZERO: Self = Self([0.0; ASPECT_COUNT]);

    /// Wraps a raw array.
    pub fn new(values: [f64; ASPECT_COUNT]) -> Self {
        Self(values)
    }

    /// Builds a vector from a slice, returning `None` unless it has exactly
    /// [`ASPECT_COUNT`] elements.
    pub fn from_slice(values: &[f64]) -> Option<Self> {
        let array: [f64; ASPECT_COUNT] = values.try_into().ok()?;
        Some(Self(array))
    }

    pub fn get(&self, aspect: Aspect) -> f64 {
        self.0[aspect.index()]
    }

    pub fn set(&mut self, aspect: Aspect, value: f64) {
        self.0[aspect.index()] = value;
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn as_array(&self) -> &[f64; ASPECT_COUNT] {
        &self.0
    }

    /// Iterates `(aspect, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Aspect, f64)> + '_ {
        Aspect::ALL.iter().map(move |a| (*a, self.0[a.index()]))
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &AspectVector) -> f64 {
        self.0.iter().zip(other.0.iter()).map(|(a, b)| a * b).sum()
    }

    /// Squared Euclidean norm.
    pub fn norm_squared(&self) -> f64 {
        self.0.iter().map(|v| v * v).sum()
    }

    /// Arithmetic mean of the components.
    pub fn mean(&self) -> f64 {
        self.0.iter().sum::<f64>() / ASPECT_COUNT as f64
    }

    /// Returns a copy with every component clipped to `[min, max]`.
    pub fn clipped(&self, min: f64, max: f64) -> Self {
        Self(self.0.map(|v| v.clamp(min, max)))
    }

    /// Returns true if every component is finite.
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|v| v.is_finite())
    }
}

impl Index<usize> for AspectVector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl IndexMut<usize> for AspectVector {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.0[index]
    }
}

impl Index<Aspect> for AspectVector {
    type Output = f64;

    fn index(&self, aspect: Aspect) -> &f64 {
        &self.0[aspect.index()]
    }
}

impl IndexMut<Aspect> for AspectVector {
    fn index_mut(&mut self, aspect: Aspect) -> &mut f64 {
        &mut self.0[aspect.index()]
    }
}

impl From<[f64; ASPECT_COUNT]> for AspectVector {
    fn from(values: [f64; ASPECT_COUNT]) -> Self {
        Self(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_vector_has_all_zero_components() {
        assert!(AspectVector::ZERO.iter().all(|(_, v)| v == 0.0));
    }

    #[test]
    fn from_slice_requires_exact_length() {
        assert!(AspectVector::from_slice(&[1.0; 9]).is_none());
        assert!(AspectVector::from_slice(&[1.0; 11]).is_none());
        assert!(AspectVector::from_slice(&[1.0; 10]).is_some());
    }

    #[test]
    fn aspect_indexing_matches_usize_indexing() {
        let mut v = AspectVector::ZERO;
        v[Aspect::Teamwork] = 0.5;
        assert_eq!(v[8], 0.5);
        assert_eq!(v.get(Aspect::Teamwork), 0.5);
    }

    #[test]
    fn dot_product() {
        let a = AspectVector::new([1.0; ASPECT_COUNT]);
        let mut b = AspectVector::ZERO;
        b[0] = 2.0;
        b[9] = -0.5;
        assert!((a.dot(&b) - 1.5).abs() < 1e-12);
    }

    #[test]
    fn clipped_bounds_components() {
        let mut v = AspectVector::ZERO;
        v[0] = 3.0;
        v[1] = -3.0;
        let c = v.clipped(-1.0, 1.0);
        assert_eq!(c[0], 1.0);
        assert_eq!(c[1], -1.0);
    }

    #[test]
    fn serializes_as_plain_array() {
        let json = serde_json::to_string(&AspectVector::ZERO).unwrap();
        assert_eq!(json, "[0.0,0.0,0.0,0.0,0.0,0.0,0.0,0.0,0.0,0.0]");
    }
}
