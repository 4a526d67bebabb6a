//! Profession scoring and ranking.
//!
//! Raw scores are the projection of each profession row onto the posterior
//! weights. They are min-max normalised to `[0, 1]` and the top entries are
//! returned in descending order.

use serde::{Deserialize, Serialize};

use super::professions::ProfessionMatrix;
use crate::domain::foundation::AspectVector;

/// Default number of professions returned.
pub const DEFAULT_TOP_K: usize = 10;

/// Score given to every profession when the raw scores cannot be spread.
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Raw score ranges at or below this are treated as constant.
const RANGE_EPSILON: f64 = 1e-10;

/// One ranked entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfessionScore {
    pub name: String,
    pub score: f64,
}

impl ProfessionScore {
    pub fn new(name: impl Into<String>, score: f64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// Professions in descending score order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankedProfessions(Vec<ProfessionScore>);

impl RankedProfessions {
    pub fn new(entries: Vec<ProfessionScore>) -> Self {
        Self(entries)
    }

    /// The first `k` professions in table order, all with the same score.
    pub fn uniform(matrix: &ProfessionMatrix, score: f64, k: usize) -> Self {
        Self(
            matrix
                .names()
                .iter()
                .take(k)
                .map(|name| ProfessionScore::new(name.clone(), score))
                .collect(),
        )
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProfessionScore> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn entries(&self) -> &[ProfessionScore] {
        &self.0
    }

    /// Score of a named profession, if it made the cut.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.iter().find(|e| e.name == name).map(|e| e.score)
    }

    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(|e| e.name.as_str()).collect()
    }

    pub fn into_inner(self) -> Vec<ProfessionScore> {
        self.0
    }
}

impl IntoIterator for RankedProfessions {
    type Item = ProfessionScore;
    type IntoIter = std::vec::IntoIter<ProfessionScore>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Min-max normalisation. Single values and flat inputs map to
/// [`NEUTRAL_SCORE`].
pub fn normalize(raw: &[f64]) -> Vec<f64> {
    if raw.len() <= 1 {
        return vec![NEUTRAL_SCORE; raw.len()];
    }

    let min = raw.iter().copied().fold(f64::INFINITY, f64::min);
    let max = raw.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    if !range.is_finite() || range <= RANGE_EPSILON {
        return vec![NEUTRAL_SCORE; raw.len()];
    }

    raw.iter().map(|v| (v - min) / range).collect()
}

/// Ranks professions against a posterior weight vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfessionScorer {
    top_k: usize,
}

impl Default for ProfessionScorer {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl ProfessionScorer {
    pub fn new(top_k: usize) -> Self {
        Self { top_k }
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// Scores every row, normalises, and keeps the best `min(top_k, rows)`.
    ///
    /// Ties keep table order.
    pub fn score(&self, matrix: &ProfessionMatrix, posterior: &AspectVector) -> RankedProfessions {
        let normalized = normalize(&matrix.scores(posterior));

        let mut entries: Vec<ProfessionScore> = matrix
            .names()
            .iter()
            .zip(normalized)
            .map(|(name, score)| ProfessionScore::new(name.clone(), score))
            .collect();

        entries.sort_by(|a, b| b.score.total_cmp(&a.score));
        entries.truncate(self.top_k);

        RankedProfessions(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ASPECT_COUNT;
    use proptest::prelude::*;

    fn matrix(rows: &[[f64; ASPECT_COUNT]]) -> ProfessionMatrix {
        let names = (0..rows.len()).map(|i| format!("P{}", i)).collect();
        let rows = rows.iter().map(|r| AspectVector::new(*r)).collect();
        ProfessionMatrix::new(names, rows).unwrap()
    }

    fn unit(index: usize) -> [f64; ASPECT_COUNT] {
        let mut r = [0.0; ASPECT_COUNT];
        r[index] = 1.0;
        r
    }

    #[test]
    fn ranks_by_projection_onto_posterior() {
        let m = matrix(&[unit(0), unit(1), unit(2)]);
        let mut w = AspectVector::ZERO;
        w[1] = 0.9;
        w[2] = 0.3;

        let ranked = ProfessionScorer::default().score(&m, &w);

        assert_eq!(ranked.names(), vec!["P1", "P2", "P0"]);
        assert_eq!(ranked.get("P1"), Some(1.0));
        assert_eq!(ranked.get("P0"), Some(0.0));
    }

    #[test]
    fn identical_rows_all_score_neutral() {
        let m = matrix(&[[0.3; ASPECT_COUNT]; 4]);
        let mut w = AspectVector::ZERO;
        w[0] = 1.0;

        let ranked = ProfessionScorer::default().score(&m, &w);

        assert_eq!(ranked.len(), 4);
        assert!(ranked.iter().all(|e| e.score == NEUTRAL_SCORE));
        assert_eq!(ranked.names(), vec!["P0", "P1", "P2", "P3"]);
    }

    #[test]
    fn single_profession_scores_neutral() {
        let m = matrix(&[unit(0)]);
        let mut w = AspectVector::ZERO;
        w[0] = 2.0;

        let ranked = ProfessionScorer::default().score(&m, &w);

        assert_eq!(ranked.entries(), &[ProfessionScore::new("P0", NEUTRAL_SCORE)]);
    }

    #[test]
    fn zero_posterior_scores_neutral() {
        let m = matrix(&[unit(0), unit(1)]);
        let ranked = ProfessionScorer::default().score(&m, &AspectVector::ZERO);
        assert!(ranked.iter().all(|e| e.score == NEUTRAL_SCORE));
    }

    #[test]
    fn keeps_at_most_top_k() {
        let rows: Vec<[f64; ASPECT_COUNT]> = (0..15).map(|i| [i as f64; ASPECT_COUNT]).collect();
        let m = matrix(&rows);
        let mut w = AspectVector::ZERO;
        w[0] = 1.0;

        let ranked = ProfessionScorer::default().score(&m, &w);
        assert_eq!(ranked.len(), DEFAULT_TOP_K);
        assert_eq!(ranked.names()[0], "P14");

        let ranked = ProfessionScorer::new(3).score(&m, &w);
        assert_eq!(ranked.len(), 3);
    }

    #[test]
    fn uniform_takes_table_order() {
        let m = matrix(&[unit(0), unit(1), unit(2)]);
        let ranked = RankedProfessions::uniform(&m, 0.1, 2);
        assert_eq!(ranked.names(), vec!["P0", "P1"]);
        assert!(ranked.iter().all(|e| e.score == 0.1));
    }

    #[test]
    fn normalize_handles_edge_inputs() {
        assert!(normalize(&[]).is_empty());
        assert_eq!(normalize(&[7.0]), vec![NEUTRAL_SCORE]);
        assert_eq!(normalize(&[1.0, 1.0]), vec![NEUTRAL_SCORE; 2]);
        assert_eq!(normalize(&[0.0, 2.0, 1.0]), vec![0.0, 1.0, 0.5]);
    }

    proptest! {
        #[test]
        fn scores_are_bounded_and_descending(
            weights in prop::collection::vec(-2.0f64..2.0, ASPECT_COUNT),
            rows in prop::collection::vec(prop::collection::vec(0.0f64..1.0, ASPECT_COUNT), 1..20),
        ) {
            let rows: Vec<[f64; ASPECT_COUNT]> = rows
                .iter()
                .map(|r| {
                    let mut a = [0.0; ASPECT_COUNT];
                    a.copy_from_slice(r);
                    a
                })
                .collect();
            let m = matrix(&rows);
            let w = AspectVector::from_slice(&weights).unwrap();

            let ranked = ProfessionScorer::default().score(&m, &w);

            prop_assert_eq!(ranked.len(), rows.len().min(DEFAULT_TOP_K));
            prop_assert!(ranked.iter().all(|e| (0.0..=1.0).contains(&e.score)));
            let scores: Vec<f64> = ranked.iter().map(|e| e.score).collect();
            prop_assert!(scores.windows(2).all(|p| p[0] >= p[1]));
        }
    }
}
