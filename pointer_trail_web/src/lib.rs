// Copyright 2026 the Pointer Trail Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser backend for `pointer_trail_core`.
//!
//! This crate wires a [`TrailEffect`] to the page:
//!
//! - [`WebHost`]: the [`Host`] implementation (overlay `<canvas>`,
//!   `mousemove`/`resize` listeners, `requestAnimationFrame`, and the
//!   `(prefers-reduced-motion: reduce)` subscription)
//! - [`install`]: the page bootstrap. Activates on document ready and
//!   deactivates on `beforeunload`.
//!
//! Build with: `wasm-pack build --target web pointer_trail_web`
//!
//! Then load the generated module from any page; the `start` entry point
//! installs the effect on its own.
//!
//! [`Host`]: pointer_trail_core::host::Host

#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

mod host;
mod raf;
mod surface;

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::RefCell;

use pointer_trail_core::effect::TrailEffect;
use pointer_trail_core::gate::REDUCED_MOTION_QUERY;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, Window};

pub use host::{SharedEffect, WebHost};

use host::with_effect;

/// An installed effect and the page-lifecycle listeners that drive it.
///
/// Dropping the handle (or calling [`uninstall`](Self::uninstall)) removes
/// the listeners and shuts the effect down.
pub struct TrailHandle {
    window: Window,
    document: Document,
    effect: SharedEffect,
    on_ready: Closure<dyn FnMut(Event)>,
    on_unload: Closure<dyn FnMut(Event)>,
}

impl core::fmt::Debug for TrailHandle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TrailHandle")
            .field("effect", &self.effect)
            .finish_non_exhaustive()
    }
}

impl TrailHandle {
    /// Returns the shared effect.
    #[must_use]
    pub fn effect(&self) -> &SharedEffect {
        &self.effect
    }

    /// Returns `true` while the overlay is attached and animating.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.effect
            .try_borrow()
            .is_ok_and(|effect| effect.is_active())
    }

    /// Removes the page-lifecycle listeners and shuts the effect down.
    pub fn uninstall(self) {
        drop(self);
    }
}

impl Drop for TrailHandle {
    fn drop(&mut self) {
        let _ = self.document.remove_event_listener_with_callback(
            "DOMContentLoaded",
            self.on_ready.as_ref().unchecked_ref(),
        );
        let _ = self.window.remove_event_listener_with_callback(
            "beforeunload",
            self.on_unload.as_ref().unchecked_ref(),
        );
        match self.effect.try_borrow_mut() {
            Ok(mut effect) => effect.shutdown(),
            Err(_) => log::warn!("pointer trail busy during uninstall"),
        }
    }
}

/// Creates the effect and hooks it to the page lifecycle.
///
/// The effect activates immediately if the document has finished loading,
/// otherwise on `DOMContentLoaded`. It deactivates on `beforeunload` and
/// follows the reduced-motion preference for as long as the handle lives.
pub fn install() -> Result<TrailHandle, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let motion_query = window.match_media(REDUCED_MOTION_QUERY)?;

    let effect: SharedEffect = Rc::new_cyclic(|weak| {
        let host = WebHost::new(window.clone(), document.clone(), motion_query, weak);
        RefCell::new(TrailEffect::new(host))
    });

    let on_ready = {
        let effect = Rc::downgrade(&effect);
        Closure::wrap(Box::new(move |_: Event| with_effect(&effect, TrailEffect::activate))
            as Box<dyn FnMut(Event)>)
    };
    let on_unload = {
        let effect = Rc::downgrade(&effect);
        Closure::wrap(Box::new(move |_: Event| with_effect(&effect, TrailEffect::deactivate))
            as Box<dyn FnMut(Event)>)
    };

    window.add_event_listener_with_callback("beforeunload", on_unload.as_ref().unchecked_ref())?;
    if document.ready_state() == "loading" {
        document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
    } else {
        effect.borrow_mut().activate();
    }

    Ok(TrailHandle {
        window,
        document,
        effect,
        on_ready,
        on_unload,
    })
}

/// Entry point: sets up logging and installs the effect for the page lifetime.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();

    let handle = install()?;
    log::debug!("pointer trail installed");

    // Keep the handle alive: the page never uninstalls the effect.
    core::mem::forget(handle);

    Ok(())
}
