//! Value-to-pixel bar geometry for a fixed `[-1, 1]` axis.
//!
//! Pure math over a [`ChartSpec`]: no canvas types here, so the geometry is
//! fully testable on the host. Bars grow from the zero line, so a rect's
//! vertical extent always has the zero line as one edge.

use crate::consts::{
    BAR_SLOT_FILL, MARGIN_BOTTOM, MARGIN_LEFT, MARGIN_RIGHT, MARGIN_TOP, Y_MAX, Y_MIN,
};
use crate::spec::{BarColor, ChartSpec};

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

/// A bar positioned in CSS pixel space, ready to draw.
#[derive(Clone, Debug, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: BarColor,
    pub label: String,
}

/// Plot area bounds inside the chart margins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

/// Full pixel layout for one chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub plot: PlotArea,
    pub zero_y: f64,
    pub bars: Vec<BarRect>,
}

/// Map a score to a y pixel inside the plot area, clamping to the axis range.
fn value_to_y(value: f64, plot: PlotArea) -> f64 {
    let clamped = value.clamp(Y_MIN, Y_MAX);
    plot.top + (Y_MAX - clamped) / (Y_MAX - Y_MIN) * (plot.bottom - plot.top)
}

/// Lay out the spec's bars for a canvas of `width` x `height` CSS pixels.
#[must_use]
pub fn layout(spec: &ChartSpec, width: f64, height: f64) -> Layout {
    let plot = PlotArea {
        left: MARGIN_LEFT,
        top: MARGIN_TOP,
        right: width - MARGIN_RIGHT,
        bottom: height - MARGIN_BOTTOM,
    };
    let zero_y = value_to_y(0.0, plot);

    let slot_count = spec.series.len().max(1);
    #[allow(clippy::cast_precision_loss)]
    let slot_width = (plot.right - plot.left) / slot_count as f64;
    let bar_width = slot_width * BAR_SLOT_FILL;

    let bars = spec
        .series
        .iter()
        .enumerate()
        .map(|(index, series)| {
            #[allow(clippy::cast_precision_loss)]
            let slot_left = plot.left + slot_width * index as f64;
            let value_y = value_to_y(series.value, plot);
            BarRect {
                x: slot_left + (slot_width - bar_width) / 2.0,
                y: value_y.min(zero_y),
                width: bar_width,
                height: (value_y - zero_y).abs(),
                color: series.color,
                label: series.label.clone(),
            }
        })
        .collect();

    Layout { plot, zero_y, bars }
}
