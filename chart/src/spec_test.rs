use super::*;

// =============================================================
// BarColor::classify
// =============================================================

#[test]
fn classify_above_threshold_is_positive() {
    assert_eq!(BarColor::classify(0.11, LLM_SIGN_THRESHOLD), BarColor::Positive);
    assert_eq!(BarColor::classify(1.0, LLM_SIGN_THRESHOLD), BarColor::Positive);
}

#[test]
fn classify_below_mirror_threshold_is_negative() {
    assert_eq!(BarColor::classify(-0.11, LLM_SIGN_THRESHOLD), BarColor::Negative);
    assert_eq!(BarColor::classify(-1.0, LLM_SIGN_THRESHOLD), BarColor::Negative);
}

#[test]
fn classify_band_is_neutral_inclusive() {
    assert_eq!(BarColor::classify(0.1, LLM_SIGN_THRESHOLD), BarColor::Neutral);
    assert_eq!(BarColor::classify(-0.1, LLM_SIGN_THRESHOLD), BarColor::Neutral);
    assert_eq!(BarColor::classify(0.0, LLM_SIGN_THRESHOLD), BarColor::Neutral);
}

#[test]
fn classify_secondary_threshold_is_tighter() {
    // -0.2 is negative for the lexicon series at its 0.05 threshold.
    assert_eq!(BarColor::classify(-0.2, VADER_SIGN_THRESHOLD), BarColor::Negative);
    assert_eq!(BarColor::classify(0.06, VADER_SIGN_THRESHOLD), BarColor::Positive);
    assert_eq!(BarColor::classify(0.05, VADER_SIGN_THRESHOLD), BarColor::Neutral);
}

#[test]
fn palette_is_distinct_per_classification() {
    assert_ne!(BarColor::Positive.fill(), BarColor::Negative.fill());
    assert_ne!(BarColor::Positive.fill(), BarColor::Neutral.fill());
    assert_ne!(BarColor::Negative.stroke(), BarColor::Neutral.stroke());
}

// =============================================================
// ChartSpec::from_scores
// =============================================================

#[test]
fn both_scores_yield_two_series_in_order() {
    let spec = ChartSpec::from_scores(Some(0.5), Some(-0.2)).unwrap();
    assert_eq!(spec.series.len(), 2);
    assert_eq!(spec.series[0].label, "LLM");
    assert_eq!(spec.series[0].color, BarColor::Positive);
    assert_eq!(spec.series[1].label, "VADER");
    assert_eq!(spec.series[1].color, BarColor::Negative);
}

#[test]
fn missing_scores_yield_no_spec() {
    assert!(ChartSpec::from_scores(None, None).is_none());
}

#[test]
fn single_score_yields_single_series() {
    let spec = ChartSpec::from_scores(Some(0.0), None).unwrap();
    assert_eq!(spec.series.len(), 1);
    assert_eq!(spec.series[0].color, BarColor::Neutral);

    let spec = ChartSpec::from_scores(None, Some(0.3)).unwrap();
    assert_eq!(spec.series.len(), 1);
    assert_eq!(spec.series[0].label, "VADER");
}

#[test]
fn non_finite_scores_are_treated_as_absent() {
    assert!(ChartSpec::from_scores(Some(f64::NAN), None).is_none());
    let spec = ChartSpec::from_scores(Some(f64::INFINITY), Some(0.1)).unwrap();
    assert_eq!(spec.series.len(), 1);
    assert_eq!(spec.series[0].label, "VADER");
}
