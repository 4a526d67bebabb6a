//! Tendency samples derived from free text.
//!
//! The oracle calls live in the application layer; this module holds the
//! pure parts: sentence segmentation and the signal arithmetic that turns a
//! similarity and a sentiment polarity into a bounded per-aspect score.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ASPECT_COUNT;

/// Absolute bound of a tendency score.
pub const TENDENCY_BOUND: f64 = 2.0;

/// Characters that end a sentence-like segment.
const SEGMENT_DELIMITERS: [char; 4] = ['.', ';', '!', '?'];

/// A single `(aspect index, signed strength)` observation.
///
/// Indices outside the taxonomy are tolerated and ignored by the estimator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TendencySample {
    pub aspect_index: usize,
    pub score: f64,
}

impl TendencySample {
    pub fn new(aspect_index: usize, score: f64) -> Self {
        Self { aspect_index, score }
    }

    /// True when the index names an aspect.
    pub fn in_range(&self) -> bool {
        self.aspect_index < ASPECT_COUNT
    }
}

impl From<(usize, f64)> for TendencySample {
    fn from((aspect_index, score): (usize, f64)) -> Self {
        Self::new(aspect_index, score)
    }
}

/// Splits text on `. ; ! ?`, trimming whitespace and dropping empty segments.
pub fn segment_text(text: &str) -> Vec<&str> {
    text.split(&SEGMENT_DELIMITERS[..])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Rescales a raw signal: clamp to `[-1, 1]`, then `sign(x) * |x|^gamma * 2`,
/// then clamp to `[-2, 2]`.
///
/// With `gamma == 1` this is a plain doubling of the clamped value.
pub fn rescale(raw: f64, gamma: f64) -> f64 {
    let clamped = raw.clamp(-1.0, 1.0);
    let scaled = (clamped.abs().powf(gamma) * 2.0).copysign(raw);
    scaled.clamp(-TENDENCY_BOUND, TENDENCY_BOUND)
}

/// Builds one sample per aspect from similarity values and a polarity.
///
/// Negative similarities are floored at zero, so the sign of every score is
/// the sign of the polarity.
pub fn samples_from_signals(similarities: &[f64], polarity: f64, gamma: f64) -> Vec<TendencySample> {
    similarities
        .iter()
        .enumerate()
        .map(|(i, sim)| {
            let weight = sim.max(0.0);
            TendencySample::new(i, rescale(weight * polarity, gamma))
        })
        .collect()
}
