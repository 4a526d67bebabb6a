//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Text Oracles
//!
//! - `SimilarityOracle` - Closeness of text to each aspect description
//! - `SentimentOracle` - Polarity of text
//!
//! ## Data Sources
//!
//! - `ProfessionSource` - Loads the profession feature matrix

mod profession_source;
mod sentiment_oracle;
mod similarity_oracle;

pub use profession_source::{ProfessionSource, ProfessionSourceError};
pub use sentiment_oracle::SentimentOracle;
pub use similarity_oracle::{OracleError, SimilarityOracle};
