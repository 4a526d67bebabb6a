//! Profession feature matrix.

use rand::Rng;
use serde::Serialize;
use std::collections::HashSet;

use crate::domain::foundation::{AspectVector, ValidationError, ASPECT_COUNT};

/// Professions used when the real feature table cannot be loaded.
pub const FALLBACK_PROFESSIONS: [&str; 5] = [
    "Software Engineer",
    "Data Scientist",
    "Manager",
    "Designer",
    "Analyst",
];

/// Rows keyed by unique profession name, one weight per aspect.
///
/// Shape is fixed after construction; the matrix is shared read-only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfessionMatrix {
    names: Vec<String>,
    rows: Vec<AspectVector>,
}

impl ProfessionMatrix {
    /// Creates a matrix. Names are trimmed and must be non-empty and unique;
    /// every weight must be finite.
    pub fn new(names: Vec<String>, rows: Vec<AspectVector>) -> Result<Self, ValidationError> {
        if names.len() != rows.len() {
            return Err(ValidationError::invalid_format(
                "profession_matrix",
                format!("{} names but {} weight rows", names.len(), rows.len()),
            ));
        }

        let mut seen = HashSet::with_capacity(names.len());
        let mut trimmed = Vec::with_capacity(names.len());
        for (name, row) in names.into_iter().zip(&rows) {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(ValidationError::empty_field("profession"));
            }
            if !row.is_finite() {
                return Err(ValidationError::invalid_format(
                    "profession_matrix",
                    format!("non-finite weight in row '{}'", name),
                ));
            }
            if !seen.insert(name.clone()) {
                return Err(ValidationError::duplicate("profession", name));
            }
            trimmed.push(name);
        }

        Ok(Self {
            names: trimmed,
            rows,
        })
    }

    /// The fallback set with uniformly random `[0, 1)` weights.
    pub fn synthetic<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let names = FALLBACK_PROFESSIONS.iter().map(|n| n.to_string()).collect();
        let rows = FALLBACK_PROFESSIONS
            .iter()
            .map(|_| {
                let mut row = [0.0; ASPECT_COUNT];
                for w in row.iter_mut() {
                    *w = rng.gen::<f64>();
                }
                AspectVector::new(row)
            })
            .collect();
        Self { names, rows }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn rows(&self) -> &[AspectVector] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Weight row for a profession.
    pub fn row(&self, name: &str) -> Option<&AspectVector> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| &self.rows[i])
    }

    /// Matrix-vector product: one raw score per profession, in row order.
    pub fn scores(&self, weights: &AspectVector) -> Vec<f64> {
        self.rows.iter().map(|row| row.dot(weights)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn row(v: f64) -> AspectVector {
        AspectVector::new([v; ASPECT_COUNT])
    }

    #[test]
    fn new_trims_names() {
        let m = ProfessionMatrix::new(vec!["  Nurse ".to_string()], vec![row(0.1)]).unwrap();
        assert_eq!(m.names(), &["Nurse".to_string()]);
        assert!(m.row("Nurse").is_some());
    }

    #[test]
    fn new_rejects_duplicates_after_trim() {
        let result = ProfessionMatrix::new(
            vec!["Nurse".to_string(), " Nurse".to_string()],
            vec![row(0.1), row(0.2)],
        );
        assert_eq!(result, Err(ValidationError::duplicate("profession", "Nurse")));
    }

    #[test]
    fn new_rejects_blank_names() {
        let result = ProfessionMatrix::new(vec!["  ".to_string()], vec![row(0.1)]);
        assert!(matches!(result, Err(ValidationError::EmptyField { .. })));
    }

    #[test]
    fn new_rejects_shape_mismatch() {
        let result = ProfessionMatrix::new(vec!["A".to_string()], vec![]);
        assert!(matches!(result, Err(ValidationError::InvalidFormat { .. })));
    }

    #[test]
    fn new_rejects_non_finite_weights() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let mut weights = [0.2; ASPECT_COUNT];
            weights[3] = bad;
            let result = ProfessionMatrix::new(
                vec!["Good".to_string(), "Bad".to_string()],
                vec![row(0.1), AspectVector::new(weights)],
            );
            assert!(matches!(result, Err(ValidationError::InvalidFormat { .. })));
        }
    }

    #[test]
    fn synthetic_has_fallback_shape() {
        let m = ProfessionMatrix::synthetic(&mut StdRng::seed_from_u64(1));
        assert_eq!(m.len(), FALLBACK_PROFESSIONS.len());
        assert!(m
            .rows()
            .iter()
            .all(|r| r.as_slice().iter().all(|w| (0.0..1.0).contains(w))));
    }

    #[test]
    fn scores_are_dot_products_in_row_order() {
        let m = ProfessionMatrix::new(
            vec!["A".to_string(), "B".to_string()],
            vec![row(1.0), row(-1.0)],
        )
        .unwrap();
        let mut w = AspectVector::ZERO;
        w[0] = 0.5;
        assert_eq!(m.scores(&w), vec![0.5, -0.5]);
    }
}
