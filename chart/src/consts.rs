//! Shared numeric constants and the bar color palette.

// ── Sign thresholds ─────────────────────────────────────────────

/// Scores above this are positive (below its mirror, negative) for the
/// primary LLM series.
pub const LLM_SIGN_THRESHOLD: f64 = 0.1;

/// Sign threshold for the secondary lexicon (VADER) series.
pub const VADER_SIGN_THRESHOLD: f64 = 0.05;

// ── Axis ────────────────────────────────────────────────────────

/// Fixed y-axis range for sentiment scores.
pub const Y_MIN: f64 = -1.0;
pub const Y_MAX: f64 = 1.0;

// ── Canvas geometry (CSS pixels) ────────────────────────────────

pub const CHART_WIDTH: f64 = 360.0;
pub const CHART_HEIGHT: f64 = 220.0;

pub const MARGIN_TOP: f64 = 12.0;
pub const MARGIN_BOTTOM: f64 = 28.0;
pub const MARGIN_LEFT: f64 = 36.0;
pub const MARGIN_RIGHT: f64 = 12.0;

/// Fraction of a bar slot occupied by the bar itself.
pub const BAR_SLOT_FILL: f64 = 0.5;

// ── Palette ─────────────────────────────────────────────────────

pub const POSITIVE_FILL: &str = "rgba(75, 192, 192, 0.6)";
pub const POSITIVE_STROKE: &str = "rgba(75, 192, 192, 1)";
pub const NEGATIVE_FILL: &str = "rgba(255, 99, 132, 0.6)";
pub const NEGATIVE_STROKE: &str = "rgba(255, 99, 132, 1)";
pub const NEUTRAL_FILL: &str = "rgba(201, 203, 207, 0.6)";
pub const NEUTRAL_STROKE: &str = "rgba(201, 203, 207, 1)";

pub const AXIS_COLOR: &str = "#9aa3ad";
pub const ZERO_LINE_COLOR: &str = "#d4d8dd";
pub const LABEL_COLOR: &str = "#4a5158";
pub const LABEL_FONT: &str = "11px sans-serif";
