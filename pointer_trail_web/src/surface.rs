// Copyright 2026 the Pointer Trail Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The overlay `<canvas>`.
//!
//! [`OverlaySurface`] owns a canvas appended to `<body>`, styled with
//! [`OVERLAY_STYLE`] so it covers the viewport without intercepting input.

use core::f64::consts::TAU;

use kurbo::{Circle, Size};
use pointer_trail_core::style::{Color, OVERLAY_STYLE};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

/// A full-viewport canvas and its 2D context.
pub(crate) struct OverlaySurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl core::fmt::Debug for OverlaySurface {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("OverlaySurface")
            .field("width", &self.canvas.width())
            .field("height", &self.canvas.height())
            .finish_non_exhaustive()
    }
}

impl OverlaySurface {
    /// Creates the canvas at `size` and appends it to the document body.
    pub(crate) fn attach(document: &Document, size: Size) -> Result<Self, JsValue> {
        let canvas: HtmlCanvasElement = document.create_element("canvas")?.unchecked_into();
        let context: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d canvas context unavailable"))?
            .unchecked_into();

        let s = canvas.style();
        for (property, value) in OVERLAY_STYLE {
            s.set_property(property, value)?;
        }
        set_canvas_size(&canvas, size);

        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;
        body.append_child(&canvas)?;

        Ok(Self { canvas, context })
    }

    /// Resizes the drawable area. Resizing also resets the canvas contents.
    pub(crate) fn resize(&self, size: Size) {
        set_canvas_size(&self.canvas, size);
    }

    pub(crate) fn clear(&self, size: Size) {
        self.context.clear_rect(0.0, 0.0, size.width, size.height);
    }

    pub(crate) fn fill_circle(&self, circle: Circle, color: Color) {
        let ctx = &self.context;
        ctx.set_fill_style_str(&color.to_css());
        ctx.begin_path();
        if let Err(err) = ctx.arc(circle.center.x, circle.center.y, circle.radius, 0.0, TAU) {
            log::warn!("failed to trace dot: {err:?}");
        }
        ctx.fill();
        ctx.close_path();
    }

    /// Detaches the canvas from the document.
    pub(crate) fn remove(self) {
        self.canvas.remove();
    }
}

fn set_canvas_size(canvas: &HtmlCanvasElement, size: Size) {
    let (width, height) = canvas_dimensions(size);
    canvas.set_width(width);
    canvas.set_height(height);
}

/// Converts a viewport size to whole canvas pixels.
///
/// Fractions are truncated and negative or NaN extents become zero.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "viewport extents are small non-negative f64; `as` saturates"
)]
fn canvas_dimensions(size: Size) -> (u32, u32) {
    (size.width as u32, size.height as u32)
}
