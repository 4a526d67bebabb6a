//! In-memory profession source for tests and embedding.

use crate::domain::prediction::ProfessionMatrix;
use crate::ports::{ProfessionSource, ProfessionSourceError};

/// Hands out a clone of a prepared matrix, or a prepared failure.
#[derive(Debug, Clone)]
pub struct InMemoryProfessionSource {
    matrix: Option<ProfessionMatrix>,
}

impl InMemoryProfessionSource {
    pub fn new(matrix: ProfessionMatrix) -> Self {
        Self {
            matrix: Some(matrix),
        }
    }

    /// A source whose `load` always fails with `Empty`.
    pub fn failing() -> Self {
        Self { matrix: None }
    }
}

impl ProfessionSource for InMemoryProfessionSource {
    fn load(&self) -> Result<ProfessionMatrix, ProfessionSourceError> {
        self.matrix.clone().ok_or(ProfessionSourceError::Empty)
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
