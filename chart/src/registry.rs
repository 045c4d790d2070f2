//! Chart handles and the per-pass handle registry.
//!
//! Every mounted chart is owned by exactly one [`ChartRegistry`]. A render
//! pass begins by tearing the whole registry down, so handles never survive
//! into (or accumulate across) later passes.

use std::collections::HashMap;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::{CHART_HEIGHT, CHART_WIDTH};
use crate::render;
use crate::spec::ChartSpec;

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

/// Identifier a chart is registered under; generated by the host per mount.
pub type ChartId = String;

/// A rendered sentiment chart bound to its canvas element.
///
/// `destroy` is idempotent: a handle whose canvas was already taken (or that
/// never had one, as in host tests) is a no-op.
#[derive(Debug, Default)]
pub struct Chart {
    canvas: Option<HtmlCanvasElement>,
}

impl Chart {
    /// Size the canvas backing store, render `spec` onto it, and take
    /// ownership of the element.
    ///
    /// # Errors
    ///
    /// Returns `Err` when the 2D context is unavailable or a Canvas2D call
    /// fails. The canvas is left untouched by the registry in that case.
    pub fn mount(canvas: HtmlCanvasElement, spec: &ChartSpec, dpr: f64) -> Result<Self, JsValue> {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            canvas.set_width((CHART_WIDTH * dpr) as u32);
            canvas.set_height((CHART_HEIGHT * dpr) as u32);
        }
        let ctx = context_2d(&canvas)?;
        render::draw(&ctx, spec, CHART_WIDTH, CHART_HEIGHT, dpr)?;
        Ok(Self { canvas: Some(canvas) })
    }

    /// Release the canvas: reset the transform and wipe the backing store.
    pub fn destroy(&mut self) {
        if let Some(canvas) = self.canvas.take() {
            if let Ok(ctx) = context_2d(&canvas) {
                if ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0).is_ok() {
                    ctx.clear_rect(0.0, 0.0, f64::from(canvas.width()), f64::from(canvas.height()));
                }
            }
        }
    }

    /// A handle with no canvas, for host-side registry tests.
    #[cfg(test)]
    fn detached() -> Self {
        Self::default()
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| JsValue::from_str("context is not CanvasRenderingContext2d"))
}

/// Owns every chart created during one render pass.
#[derive(Debug, Default)]
pub struct ChartRegistry {
    charts: HashMap<ChartId, Chart>,
}

impl ChartRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a mounted chart under `id`, destroying any chart that was
    /// already registered there.
    pub fn insert(&mut self, id: ChartId, chart: Chart) {
        if let Some(mut previous) = self.charts.insert(id, chart) {
            previous.destroy();
        }
    }

    /// Destroy every chart and empty the registry. Safe to call when empty.
    pub fn teardown_all(&mut self) {
        for chart in self.charts.values_mut() {
            chart.destroy();
        }
        self.charts.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.charts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }
}
