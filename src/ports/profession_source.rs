//! Profession Source Port - Loading the profession feature table.

use crate::domain::foundation::ValidationError;
use crate::domain::prediction::ProfessionMatrix;

/// Errors from loading a profession table.
#[derive(Debug, thiserror::Error)]
pub enum ProfessionSourceError {
    #[error("profession table not found: {0}")]
    NotFound(String),

    #[error("failed to read profession table: {0}")]
    Io(String),

    #[error("malformed profession table at line {line}: {reason}")]
    Parse { line: u64, reason: String },

    #[error("profession table has no rows")]
    Empty,

    #[error("invalid profession table: {0}")]
    Invalid(#[from] ValidationError),
}

impl ProfessionSourceError {
    pub fn parse(line: u64, reason: impl Into<String>) -> Self {
        Self::Parse {
            line,
            reason: reason.into(),
        }
    }
}

/// Port for obtaining the profession matrix.
///
/// # Contract
///
/// Implementations must:
/// - Return at least one row on success
/// - Return unique, non-empty profession names
/// - Return one weight per aspect, in taxonomy order
pub trait ProfessionSource: Send + Sync {
    fn load(&self) -> Result<ProfessionMatrix, ProfessionSourceError>;

    /// Human-readable origin, used in log messages.
    fn describe(&self) -> String;
}
