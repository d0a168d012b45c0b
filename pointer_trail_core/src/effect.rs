// Copyright 2026 the Pointer Trail Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Activation lifecycle and the per-frame loop.
//!
//! [`TrailEffect`] is either *active* (surface attached, listeners registered,
//! a frame pending) or *inactive* (none of those). It moves between the two
//! only through [`activate`](TrailEffect::activate) and
//! [`deactivate`](TrailEffect::deactivate); the motion-preference
//! subscription calls exactly those two methods.

use kurbo::{Point, Size};

use crate::dot::Dot;
use crate::host::Host;
use crate::style::{COLOR, DOT_RADIUS, LAG};

/// A single dot trailing the pointer across a full-viewport overlay.
///
/// Create with [`TrailEffect::new`], which subscribes to motion-preference
/// changes. Activation is normally driven by the backend's bootstrap (document
/// ready, page unload) and by that subscription.
#[derive(Debug)]
pub struct TrailEffect<H: Host> {
    host: H,
    dot: Dot,
    /// Latest pointer position, written verbatim by pointer-move events.
    pointer: Point,
    viewport: Size,
    active: bool,
    watching: bool,
}

impl<H: Host> TrailEffect<H> {
    /// Creates an inactive effect and subscribes to motion-preference changes.
    ///
    /// The pointer and the dot both start at the viewport center.
    pub fn new(mut host: H) -> Self {
        let viewport = host.viewport();
        let center = viewport.to_rect().center();
        host.watch_motion_preference();
        Self {
            host,
            dot: Dot::new(center, DOT_RADIUS, LAG),
            pointer: center,
            viewport,
            active: false,
            watching: true,
        }
    }

    /// Attaches the overlay, registers listeners, and starts the frame loop.
    ///
    /// Does nothing (apart from an informational log) when the host reports
    /// reduced motion or a touch/mobile environment. Calling this while
    /// already active is also a no-op.
    pub fn activate(&mut self) {
        if self.active {
            log::debug!("pointer trail already active");
            return;
        }
        if let Some(reason) = self.host.environment().skip_reason() {
            log::info!("{reason}");
            return;
        }

        self.viewport = self.host.viewport();
        self.host.attach_surface(self.viewport);
        self.host.listen();
        self.active = true;
        log::debug!(
            "pointer trail activated at {}x{}",
            self.viewport.width,
            self.viewport.height
        );

        self.frame();
    }

    /// Removes the overlay, cancels the pending frame, and unregisters
    /// listeners.
    ///
    /// Safe to call repeatedly or without a prior activation.
    pub fn deactivate(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        self.host.detach_surface();
        self.host.cancel_frame();
        self.host.unlisten();
        log::debug!("pointer trail deactivated");
    }

    /// Runs one frame: clear, ease the dot toward the pointer, paint, and
    /// request the next frame.
    ///
    /// A frame that fires after deactivation does nothing and does not
    /// reschedule.
    pub fn frame(&mut self) {
        if !self.active {
            return;
        }
        self.host.clear(self.viewport);
        self.dot.step_toward(self.pointer);
        self.host.fill_circle(self.dot.circle(), COLOR);
        if self.active {
            self.host.request_frame();
        }
    }

    /// Records the latest pointer position.
    pub fn on_pointer_move(&mut self, position: Point) {
        self.pointer = position;
    }

    /// Stores the new viewport size and resizes the surface to match.
    pub fn on_resize(&mut self, viewport: Size) {
        self.viewport = viewport;
        if self.active {
            self.host.resize_surface(viewport);
        }
    }

    /// Reacts to a motion-preference change notification.
    pub fn on_motion_preference_change(&mut self, reduced: bool) {
        if reduced {
            self.deactivate();
        } else {
            self.activate();
        }
    }

    /// Deactivates and drops the motion-preference subscription.
    ///
    /// Also run when the effect is dropped.
    pub fn shutdown(&mut self) {
        self.deactivate();
        if self.watching {
            self.watching = false;
            self.host.unwatch_motion_preference();
        }
    }

    /// Returns `true` while the surface is attached and the loop is running.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Latest recorded pointer position.
    #[must_use]
    pub fn pointer(&self) -> Point {
        self.pointer
    }

    /// The trailing dot.
    #[must_use]
    pub fn dot(&self) -> &Dot {
        &self.dot
    }

    /// Last known viewport size.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Returns a reference to the host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Returns a mutable reference to the host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

impl<H: Host> Drop for TrailEffect<H> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
