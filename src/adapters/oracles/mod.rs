//! Text oracle adapters.

mod lexical;
mod mock;

pub use lexical::{LexicalSimilarity, LexiconSentiment};
pub use mock::{FixedSimilarity, FixedSentiment};
