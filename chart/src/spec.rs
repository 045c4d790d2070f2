//! Chart specs: which bars a sector's chart shows and how they are colored.
//!
//! A spec is built once per sector from the two optional scores the server
//! returns. Coloring is pure sign thresholding — each series carries its own
//! threshold, so the LLM and lexicon bars classify independently.

use crate::consts::{
    LLM_SIGN_THRESHOLD, NEGATIVE_FILL, NEGATIVE_STROKE, NEUTRAL_FILL, NEUTRAL_STROKE,
    POSITIVE_FILL, POSITIVE_STROKE, VADER_SIGN_THRESHOLD,
};

#[cfg(test)]
#[path = "spec_test.rs"]
mod spec_test;

/// Sign classification of a score against a series threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BarColor {
    Positive,
    Negative,
    Neutral,
}

impl BarColor {
    /// Classify a score: above `threshold` is positive, below `-threshold`
    /// is negative, anything in between (inclusive) is neutral.
    #[must_use]
    pub fn classify(value: f64, threshold: f64) -> Self {
        if value > threshold {
            Self::Positive
        } else if value < -threshold {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    #[must_use]
    pub fn fill(self) -> &'static str {
        match self {
            Self::Positive => POSITIVE_FILL,
            Self::Negative => NEGATIVE_FILL,
            Self::Neutral => NEUTRAL_FILL,
        }
    }

    #[must_use]
    pub fn stroke(self) -> &'static str {
        match self {
            Self::Positive => POSITIVE_STROKE,
            Self::Negative => NEGATIVE_STROKE,
            Self::Neutral => NEUTRAL_STROKE,
        }
    }
}

/// One bar in a sentiment chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub label: String,
    pub value: f64,
    pub color: BarColor,
}

/// Specification for one sector's sentiment bar chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSpec {
    pub series: Vec<Series>,
}

impl ChartSpec {
    /// Build the spec for a sector from its optional LLM and lexicon scores.
    ///
    /// Non-finite scores are treated as absent. Returns `None` when neither
    /// score is usable — the caller shows a "scores not available" message
    /// instead of mounting a chart.
    #[must_use]
    pub fn from_scores(llm_score: Option<f64>, vader_score: Option<f64>) -> Option<Self> {
        let mut series = Vec::new();
        if let Some(value) = llm_score.filter(|v| v.is_finite()) {
            series.push(Series {
                label: "LLM".to_owned(),
                value,
                color: BarColor::classify(value, LLM_SIGN_THRESHOLD),
            });
        }
        if let Some(value) = vader_score.filter(|v| v.is_finite()) {
            series.push(Series {
                label: "VADER".to_owned(),
                value,
                color: BarColor::classify(value, VADER_SIGN_THRESHOLD),
            });
        }
        if series.is_empty() { None } else { Some(Self { series }) }
    }
}
