// Copyright 2026 the Pointer Trail Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easing, environment gating, and lifecycle for a pointer-trailing dot.
//!
//! `pointer_trail_core` holds everything about the effect that does not touch
//! a browser. It is `no_std` compatible (with `alloc`) so that the lifecycle
//! can be driven by the web backend and by native test doubles alike.
//!
//! # Architecture
//!
//! ```text
//!   Host events (pointer move, resize, motion preference)
//!       │
//!       ▼
//!   TrailEffect ──► activate() / deactivate()
//!       │
//!       ▼
//!   frame() ──► Host::clear() ──► Dot::step_toward() ──► Host::fill_circle()
//!       │
//!       └──► Host::request_frame() ──► frame() ...
//! ```
//!
//! **[`style`]**: Fixed paint color, dot radius, lag divisor, and the overlay
//! style properties.
//!
//! **[`dot`]**: The trailing [`Dot`](dot::Dot) and its exponential easing
//! step.
//!
//! **[`gate`]**: Reduced-motion and mobile detection that decide whether the
//! effect may activate at all.
//!
//! **[`host`]**: The [`Host`](host::Host) trait that platform backends
//! implement.
//!
//! **[`effect`]**: [`TrailEffect`](effect::TrailEffect), the lifecycle state
//! machine and per-frame loop.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod dot;
pub mod effect;
pub mod gate;
pub mod host;
pub mod style;
