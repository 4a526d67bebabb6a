//! Lexical oracles.
//!
//! Small, model-free stand-ins for an embedding similarity model and a
//! sentiment model. Good enough to drive the binary and to exercise the
//! pipeline with realistic text; not a substitute for the real models.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

use crate::ports::{OracleError, SentimentOracle, SimilarityOracle};

/// Tokens sharing at least this many leading characters are treated as the
/// same word ("maths" / "mathematical").
const MIN_SHARED_PREFIX: usize = 4;

/// Longest suffix still counted as a form of a lexicon word.
const MAX_INFLECTION: usize = 3;

/// Normalisation constant for the compound sentiment score.
const SENTIMENT_ALPHA: f64 = 15.0;

/// Number of following tokens a negation word flips.
const NEGATION_SCOPE: usize = 3;

static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "an", "and", "the", "of", "to", "in", "on", "at", "for", "with", "i", "im", "me",
        "my", "it", "is", "am", "are", "was", "be", "been", "that", "this", "so", "very",
        "really", "do", "does", "skills", "skill", "ability", "abilities",
    ]
    .into_iter()
    .collect()
});

static NEGATIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "not", "no", "never", "dont", "don't", "cant", "can't", "cannot", "isnt", "isn't",
        "wont", "won't", "hardly",
    ]
    .into_iter()
    .collect()
});

static LEXICON: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    [
        ("love", 3.2),
        ("enjoy", 2.2),
        ("like", 1.5),
        ("good", 1.9),
        ("great", 3.1),
        ("excellent", 3.2),
        ("passionate", 2.6),
        ("happy", 2.7),
        ("fun", 2.3),
        ("strong", 1.8),
        ("confident", 2.2),
        ("interested", 1.7),
        ("fascinated", 2.3),
        ("hate", -2.7),
        ("dislike", -1.6),
        ("bad", -2.5),
        ("terrible", -2.1),
        ("awful", -2.0),
        ("boring", -1.3),
        ("bored", -1.1),
        ("struggle", -1.6),
        ("difficult", -1.2),
        ("hard", -0.4),
        ("weak", -1.9),
        ("afraid", -1.9),
        ("anxious", -1.0),
        ("stressful", -1.5),
        ("tired", -1.4),
    ]
    .into_iter()
    .collect()
});

/// Lower-cased word tokens, apostrophes kept inside words.
fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .map(|t| t.trim_matches('\'').to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

fn content_tokens(text: &str) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(|t| !STOPWORDS.contains(t.as_str()))
        .collect()
}

fn same_word(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }
    let shared = a.chars().zip(b.chars()).take_while(|(x, y)| x == y).count();
    shared >= MIN_SHARED_PREFIX
}

/// Valence of a token, allowing short inflection suffixes ("loved", "enjoys").
fn valence_of(token: &str) -> f64 {
    LEXICON
        .iter()
        .filter(|(word, _)| {
            token.starts_with(**word) && token.len() - word.len() <= MAX_INFLECTION
        })
        .max_by_key(|(word, _)| word.len())
        .map(|(_, v)| *v)
        .unwrap_or(0.0)
}

/// Token-overlap similarity.
///
/// For each candidate, the share of its content words that appear in the
/// text, in `[0, 1]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexicalSimilarity;

impl LexicalSimilarity {
    pub fn new() -> Self {
        Self
    }

    fn overlap(text_tokens: &[String], candidate: &str) -> f64 {
        let wanted = content_tokens(candidate);
        if wanted.is_empty() {
            return 0.0;
        }
        let hits = wanted
            .iter()
            .filter(|w| text_tokens.iter().any(|t| same_word(t, w)))
            .count();
        hits as f64 / wanted.len() as f64
    }
}

impl SimilarityOracle for LexicalSimilarity {
    fn similarities(&self, text: &str, candidates: &[&str]) -> Result<Vec<f64>, OracleError> {
        let tokens = content_tokens(text);
        Ok(candidates
            .iter()
            .map(|c| Self::overlap(&tokens, c))
            .collect())
    }
}

/// Word-list sentiment with simple negation.
///
/// Sums the valence of known words, flipping words that follow a negation,
/// then squashes the total into `(-1, 1)` with `x / sqrt(x^2 + 15)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconSentiment;

impl LexiconSentiment {
    pub fn new() -> Self {
        Self
    }
}

impl SentimentOracle for LexiconSentiment {
    fn polarity(&self, text: &str) -> Result<f64, OracleError> {
        let mut total = 0.0;
        let mut negated_for = 0usize;

        for token in tokenize(text) {
            if NEGATIONS.contains(token.as_str()) {
                negated_for = NEGATION_SCOPE;
                continue;
            }

            let valence = valence_of(&token);

            total += if negated_for > 0 { -valence } else { valence };
            negated_for = negated_for.saturating_sub(1);
        }

        if total == 0.0 {
            return Ok(0.0);
        }
        Ok(total / (total * total + SENTIMENT_ALPHA).sqrt())
    }
}
