// Copyright 2026 the Pointer Trail Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `requestAnimationFrame` frame requests.
//!
//! [`FrameRequest`] schedules a single callback for the next display refresh.
//! It does not loop on its own: the frame step asks for the next frame
//! explicitly, so a torn-down effect simply stops asking.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::Cell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

// Global bindings, so rescheduling from inside a frame needs no Window lookup.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = "requestAnimationFrame")]
    fn request_animation_frame(callback: &JsValue) -> i32;

    #[wasm_bindgen(js_name = "cancelAnimationFrame")]
    fn cancel_animation_frame(id: i32);
}

type RafClosure = Closure<dyn FnMut(f64)>;

/// A reusable one-shot `requestAnimationFrame` registration.
pub(crate) struct FrameRequest {
    /// The JS closure handed to `requestAnimationFrame`.
    closure: RafClosure,

    /// The ID of the outstanding request, cleared when the callback fires.
    pending: Rc<Cell<Option<i32>>>,
}

impl FrameRequest {
    /// Creates a frame request that runs `callback` when it fires.
    ///
    /// Nothing is scheduled until [`request`](Self::request) is called.
    pub(crate) fn new(mut callback: impl FnMut() + 'static) -> Self {
        let pending = Rc::new(Cell::new(None));
        let fired = Rc::clone(&pending);
        let closure = Closure::wrap(Box::new(move |_timestamp_ms: f64| {
            // Clear first so the callback can request the next frame.
            fired.set(None);
            callback();
        }) as Box<dyn FnMut(f64)>);
        Self { closure, pending }
    }

    /// Schedules the callback for the next display refresh.
    ///
    /// If a request is already outstanding, this is a no-op.
    pub(crate) fn request(&self) {
        if self.pending.get().is_some() {
            return;
        }
        let id = request_animation_frame(self.closure.as_ref().unchecked_ref());
        self.pending.set(Some(id));
    }

    /// Cancels the outstanding request, if any.
    pub(crate) fn cancel(&self) {
        if let Some(id) = self.pending.take() {
            cancel_animation_frame(id);
        }
    }

    /// Returns `true` while a request is outstanding.
    pub(crate) fn is_pending(&self) -> bool {
        self.pending.get().is_some()
    }
}

impl Drop for FrameRequest {
    fn drop(&mut self) {
        // The closure is freed with `self`; make sure the browser can no
        // longer call it.
        self.cancel();
    }
}

impl core::fmt::Debug for FrameRequest {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FrameRequest")
            .field("pending", &self.pending.get())
            .finish_non_exhaustive()
    }
}
