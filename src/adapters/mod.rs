//! Adapters - Implementations of port interfaces.
//!
//! - `oracles` - Similarity and sentiment oracles (lexical, mock)
//! - `professions` - Profession table sources (CSV, in-memory)

pub mod oracles;
pub mod professions;

pub use oracles::{FixedSentiment, FixedSimilarity, LexicalSimilarity, LexiconSentiment};
pub use professions::{CsvProfessionSource, InMemoryProfessionSource};
