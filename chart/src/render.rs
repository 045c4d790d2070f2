//! Rendering: draws one sentiment chart onto a 2D context.
//!
//! This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. It receives a read-only spec and
//! produces pixels; it does not mutate any application state.
//!
//! All fallible Canvas2D calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::registry::Chart::mount`]) handles the
//! result.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{AXIS_COLOR, LABEL_COLOR, LABEL_FONT, ZERO_LINE_COLOR};
use crate::layout::{Layout, layout};
use crate::spec::ChartSpec;

/// Vertical gap between the plot bottom and the bar labels, in CSS pixels.
const LABEL_BASELINE_OFFSET: f64 = 14.0;

/// Draw the full chart: axis, zero line, bars, and labels.
///
/// `width` and `height` are in CSS pixels. `dpr` is the device pixel ratio;
/// the canvas backing store is assumed to be `width * dpr` by `height * dpr`.
///
/// # Errors
///
/// Returns `Err` if any Canvas2D call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    spec: &ChartSpec,
    width: f64,
    height: f64,
    dpr: f64,
) -> Result<(), JsValue> {
    let l = layout(spec, width, height);

    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, width, height);

    draw_axis(ctx, &l)?;
    draw_bars(ctx, &l);
    draw_labels(ctx, &l)?;

    Ok(())
}

fn draw_axis(ctx: &CanvasRenderingContext2d, l: &Layout) -> Result<(), JsValue> {
    // Left axis line.
    ctx.set_stroke_style_str(AXIS_COLOR);
    ctx.set_line_width(1.0);
    ctx.begin_path();
    ctx.move_to(l.plot.left, l.plot.top);
    ctx.line_to(l.plot.left, l.plot.bottom);
    ctx.stroke();

    // Zero line across the plot.
    ctx.set_stroke_style_str(ZERO_LINE_COLOR);
    ctx.begin_path();
    ctx.move_to(l.plot.left, l.zero_y);
    ctx.line_to(l.plot.right, l.zero_y);
    ctx.stroke();

    // Axis tick labels at -1, 0, 1.
    ctx.set_fill_style_str(LABEL_COLOR);
    ctx.set_font(LABEL_FONT);
    ctx.set_text_align("right");
    ctx.fill_text("1", l.plot.left - 6.0, l.plot.top + 4.0)?;
    ctx.fill_text("0", l.plot.left - 6.0, l.zero_y + 4.0)?;
    ctx.fill_text("-1", l.plot.left - 6.0, l.plot.bottom + 4.0)?;

    Ok(())
}

fn draw_bars(ctx: &CanvasRenderingContext2d, l: &Layout) {
    for bar in &l.bars {
        ctx.set_fill_style_str(bar.color.fill());
        ctx.fill_rect(bar.x, bar.y, bar.width, bar.height);
        ctx.set_stroke_style_str(bar.color.stroke());
        ctx.set_line_width(1.0);
        ctx.stroke_rect(bar.x, bar.y, bar.width, bar.height);
    }
}

fn draw_labels(ctx: &CanvasRenderingContext2d, l: &Layout) -> Result<(), JsValue> {
    ctx.set_fill_style_str(LABEL_COLOR);
    ctx.set_font(LABEL_FONT);
    ctx.set_text_align("center");
    for bar in &l.bars {
        ctx.fill_text(
            &bar.label,
            bar.x + bar.width / 2.0,
            l.plot.bottom + LABEL_BASELINE_OFFSET,
        )?;
    }
    Ok(())
}
