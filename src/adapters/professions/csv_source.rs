//! CSV profession table.
//!
//! Layout: a header row, then one row per profession. The first column is the
//! profession name and the next ten are the aspect weights in taxonomy order.

use std::path::{Path, PathBuf};

use crate::domain::foundation::{AspectVector, ASPECT_COUNT};
use crate::domain::prediction::ProfessionMatrix;
use crate::ports::{ProfessionSource, ProfessionSourceError};

/// Reads the profession matrix from a CSV file on every `load`.
#[derive(Debug, Clone)]
pub struct CsvProfessionSource {
    path: PathBuf,
}

impl CsvProfessionSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parses CSV from any reader. Used by `load` and handy for in-memory data.
    pub fn parse<R: std::io::Read>(reader: R) -> Result<ProfessionMatrix, ProfessionSourceError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let expected = ASPECT_COUNT + 1;

        let headers = reader.headers().map_err(csv_error)?;
        if headers.len() != expected {
            return Err(ProfessionSourceError::parse(
                1,
                format!("expected {} header columns, found {}", expected, headers.len()),
            ));
        }

        let mut names = Vec::new();
        let mut rows = Vec::new();

        for record in reader.records() {
            let record = record.map_err(csv_error)?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);

            if record.len() != expected {
                return Err(ProfessionSourceError::parse(
                    line,
                    format!("expected {} columns, found {}", expected, record.len()),
                ));
            }

            let mut weights = [0.0; ASPECT_COUNT];
            for (i, field) in record.iter().skip(1).enumerate() {
                let weight = field.parse::<f64>().map_err(|_| {
                    ProfessionSourceError::parse(line, format!("non-numeric weight '{}'", field))
                })?;
                if !weight.is_finite() {
                    return Err(ProfessionSourceError::parse(
                        line,
                        format!("non-finite weight '{}'", field),
                    ));
                }
                weights[i] = weight;
            }

            names.push(record[0].to_string());
            rows.push(AspectVector::new(weights));
        }

        if names.is_empty() {
            return Err(ProfessionSourceError::Empty);
        }

        Ok(ProfessionMatrix::new(names, rows)?)
    }
}

fn csv_error(err: csv::Error) -> ProfessionSourceError {
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    match err.kind() {
        csv::ErrorKind::Io(e) => ProfessionSourceError::Io(e.to_string()),
        _ => ProfessionSourceError::parse(line, err.to_string()),
    }
}

impl ProfessionSource for CsvProfessionSource {
    fn load(&self) -> Result<ProfessionMatrix, ProfessionSourceError> {
        let file = std::fs::File::open(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ProfessionSourceError::NotFound(self.path.display().to_string())
            } else {
                ProfessionSourceError::Io(format!("{}: {}", self.path.display(), e))
            }
        })?;
        Self::parse(file)
    }

    fn describe(&self) -> String {
        format!("csv:{}", self.path.display())
    }
}
