// Copyright 2026 the Pointer Trail Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host contract for platform integrations.
//!
//! A backend provides everything the effect reads from or writes to its
//! environment through the [`Host`] trait:
//!
//! - **Signals**: the gating [`Environment`] snapshot and the current
//!   viewport size.
//! - **Surface**: a full-viewport overlay that can be attached, resized,
//!   cleared, painted, and detached.
//! - **Listeners**: pointer-move and resize handlers that call back into
//!   [`TrailEffect::on_pointer_move`] and [`TrailEffect::on_resize`].
//! - **Frames**: a "run once per display refresh" request that calls back
//!   into [`TrailEffect::frame`].
//! - **Subscription**: a motion-preference watch that calls back into
//!   [`TrailEffect::on_motion_preference_change`].
//!
//! How callbacks reach the effect is backend-specific and not abstracted
//! here, because ownership of the effect differs between a browser event
//! loop and a test harness.
//!
//! [`TrailEffect::on_pointer_move`]: crate::effect::TrailEffect::on_pointer_move
//! [`TrailEffect::on_resize`]: crate::effect::TrailEffect::on_resize
//! [`TrailEffect::frame`]: crate::effect::TrailEffect::frame
//! [`TrailEffect::on_motion_preference_change`]: crate::effect::TrailEffect::on_motion_preference_change

use kurbo::{Circle, Size};

use crate::gate::Environment;
use crate::style::Color;

/// The environment a [`TrailEffect`](crate::effect::TrailEffect) runs in.
///
/// Every mutating method must be a no-op when its target does not exist:
/// detaching without a surface, unlistening without listeners, cancelling
/// without a pending frame, and drawing without a surface are all silent.
pub trait Host {
    /// Reads the current gating signals.
    fn environment(&self) -> Environment;

    /// Reads the current viewport size.
    fn viewport(&self) -> Size;

    /// Creates the overlay surface at `size` and attaches it above page
    /// content.
    fn attach_surface(&mut self, size: Size);

    /// Resizes the drawable area of the attached surface.
    fn resize_surface(&mut self, size: Size);

    /// Removes the overlay surface.
    fn detach_surface(&mut self);

    /// Registers the pointer-move and resize listeners.
    fn listen(&mut self);

    /// Unregisters the pointer-move and resize listeners.
    fn unlisten(&mut self);

    /// Schedules one call of the frame step at the next display refresh.
    fn request_frame(&mut self);

    /// Cancels the pending frame request.
    fn cancel_frame(&mut self);

    /// Clears the rectangle from the origin to `size`.
    fn clear(&mut self, size: Size);

    /// Fills `circle` with `color`.
    fn fill_circle(&mut self, circle: Circle, color: Color);

    /// Subscribes to motion-preference change notifications.
    fn watch_motion_preference(&mut self);

    /// Unsubscribes from motion-preference change notifications.
    fn unwatch_motion_preference(&mut self);
}
