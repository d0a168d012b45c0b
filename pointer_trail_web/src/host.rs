// Copyright 2026 the Pointer Trail Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser implementation of [`Host`].
//!
//! [`WebHost`] lives inside the shared effect it serves. Its JS closures hold
//! a [`Weak`] reference back to that effect, so events that arrive after the
//! effect is gone are ignored instead of keeping it alive.

use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use core::cell::RefCell;

use kurbo::{Circle, Point, Size};
use pointer_trail_core::effect::TrailEffect;
use pointer_trail_core::gate::{Environment, TouchProbe};
use pointer_trail_core::host::Host;
use pointer_trail_core::style::Color;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, MediaQueryList, MediaQueryListEvent, MouseEvent, Window};

use crate::raf::FrameRequest;
use crate::surface::OverlaySurface;

/// The effect as shared between the page bootstrap and its own callbacks.
pub type SharedEffect = Rc<RefCell<TrailEffect<WebHost>>>;

pub(crate) type WeakEffect = Weak<RefCell<TrailEffect<WebHost>>>;

/// Runs `f` on the effect if it is still alive and not already borrowed.
pub(crate) fn with_effect(effect: &WeakEffect, f: impl FnOnce(&mut TrailEffect<WebHost>)) {
    let Some(effect) = effect.upgrade() else {
        return;
    };
    match effect.try_borrow_mut() {
        Ok(mut effect) => f(&mut effect),
        Err(_) => log::warn!("pointer trail busy, dropping re-entrant event"),
    }
}

/// Reads `innerWidth` × `innerHeight`, falling back to zero.
pub(crate) fn viewport_size(window: &Window) -> Size {
    let extent = |value: Result<JsValue, JsValue>| value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Size::new(extent(window.inner_width()), extent(window.inner_height()))
}

/// A [`Host`] backed by the browser window, document, and a `<canvas>`.
pub struct WebHost {
    window: Window,
    document: Document,
    /// `(prefers-reduced-motion: reduce)`; `None` if the browser has no
    /// `matchMedia` result for it.
    motion_query: Option<MediaQueryList>,
    surface: Option<OverlaySurface>,
    on_pointer_move: Closure<dyn FnMut(MouseEvent)>,
    on_resize: Closure<dyn FnMut(Event)>,
    on_motion_change: Closure<dyn FnMut(MediaQueryListEvent)>,
    frames: FrameRequest,
    listening: bool,
    watching: bool,
}

impl core::fmt::Debug for WebHost {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WebHost")
            .field("surface", &self.surface)
            .field("frame_pending", &self.frames.is_pending())
            .field("listening", &self.listening)
            .field("watching", &self.watching)
            .finish_non_exhaustive()
    }
}

impl WebHost {
    /// Creates a host whose callbacks forward to `effect`.
    ///
    /// No listeners are registered and no surface exists until the effect
    /// asks for them.
    pub(crate) fn new(
        window: Window,
        document: Document,
        motion_query: Option<MediaQueryList>,
        effect: &WeakEffect,
    ) -> Self {
        let on_pointer_move = {
            let effect = effect.clone();
            Closure::wrap(Box::new(move |event: MouseEvent| {
                let position = Point::new(f64::from(event.client_x()), f64::from(event.client_y()));
                with_effect(&effect, |e| e.on_pointer_move(position));
            }) as Box<dyn FnMut(MouseEvent)>)
        };

        let on_resize = {
            let effect = effect.clone();
            let window = window.clone();
            Closure::wrap(Box::new(move |_: Event| {
                let size = viewport_size(&window);
                with_effect(&effect, |e| e.on_resize(size));
            }) as Box<dyn FnMut(Event)>)
        };

        let on_motion_change = {
            let effect = effect.clone();
            Closure::wrap(Box::new(move |event: MediaQueryListEvent| {
                let reduced = event.matches();
                with_effect(&effect, |e| e.on_motion_preference_change(reduced));
            }) as Box<dyn FnMut(MediaQueryListEvent)>)
        };

        let frames = {
            let effect = effect.clone();
            FrameRequest::new(move || with_effect(&effect, TrailEffect::frame))
        };

        Self {
            window,
            document,
            motion_query,
            surface: None,
            on_pointer_move,
            on_resize,
            on_motion_change,
            frames,
            listening: false,
            watching: false,
        }
    }

    fn touch_probe(&self) -> TouchProbe {
        let navigator = self.window.navigator();
        let touch_start =
            js_sys::Reflect::has(&self.window, &JsValue::from_str("ontouchstart")).unwrap_or(false);
        TouchProbe {
            touch_start,
            max_touch_points: u32::try_from(navigator.max_touch_points()).unwrap_or(0),
            user_agent: navigator.user_agent().unwrap_or_default(),
        }
    }
}

impl Host for WebHost {
    fn environment(&self) -> Environment {
        Environment {
            reduced_motion: self
                .motion_query
                .as_ref()
                .is_some_and(MediaQueryList::matches),
            touch: self.touch_probe(),
        }
    }

    fn viewport(&self) -> Size {
        viewport_size(&self.window)
    }

    fn attach_surface(&mut self, size: Size) {
        if self.surface.is_some() {
            return;
        }
        match OverlaySurface::attach(&self.document, size) {
            Ok(surface) => self.surface = Some(surface),
            Err(err) => log::warn!("failed to attach pointer trail overlay: {err:?}"),
        }
    }

    fn resize_surface(&mut self, size: Size) {
        if let Some(surface) = &self.surface {
            surface.resize(size);
        }
    }

    fn detach_surface(&mut self) {
        if let Some(surface) = self.surface.take() {
            surface.remove();
        }
    }

    fn listen(&mut self) {
        if self.listening {
            return;
        }
        let added = self
            .window
            .add_event_listener_with_callback(
                "mousemove",
                self.on_pointer_move.as_ref().unchecked_ref(),
            )
            .and_then(|()| {
                self.window
                    .add_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref())
            });
        if let Err(err) = added {
            log::warn!("failed to register pointer trail listeners: {err:?}");
        }
        self.listening = true;
    }

    fn unlisten(&mut self) {
        if !self.listening {
            return;
        }
        self.listening = false;
        let _ = self.window.remove_event_listener_with_callback(
            "mousemove",
            self.on_pointer_move.as_ref().unchecked_ref(),
        );
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref());
    }

    fn request_frame(&mut self) {
        self.frames.request();
    }

    fn cancel_frame(&mut self) {
        self.frames.cancel();
    }

    fn clear(&mut self, size: Size) {
        if let Some(surface) = &self.surface {
            surface.clear(size);
        }
    }

    fn fill_circle(&mut self, circle: Circle, color: Color) {
        if let Some(surface) = &self.surface {
            surface.fill_circle(circle, color);
        }
    }

    fn watch_motion_preference(&mut self) {
        if self.watching {
            return;
        }
        let Some(query) = &self.motion_query else {
            return;
        };
        match query
            .add_event_listener_with_callback("change", self.on_motion_change.as_ref().unchecked_ref())
        {
            Ok(()) => self.watching = true,
            Err(err) => log::warn!("failed to watch motion preference: {err:?}"),
        }
    }

    fn unwatch_motion_preference(&mut self) {
        if !self.watching {
            return;
        }
        self.watching = false;
        if let Some(query) = &self.motion_query {
            let _ = query.remove_event_listener_with_callback(
                "change",
                self.on_motion_change.as_ref().unchecked_ref(),
            );
        }
    }
}
