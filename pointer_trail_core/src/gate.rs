// Copyright 2026 the Pointer Trail Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Environment gating.
//!
//! The effect never activates when the user asks for reduced motion or when
//! the runtime looks like a touch/mobile device. Neither case is an error:
//! the effect simply stays inactive and logs why.
//!
//! Mobile detection is a heuristic. It treats *any* touch capability as
//! mobile, so touch-capable laptops are classified as mobile too.

use alloc::string::String;
use core::fmt;

/// Media query reporting the user's reduced-motion preference.
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// User-agent substrings that identify a mobile platform.
///
/// Matched case-insensitively anywhere in the user-agent string.
pub const MOBILE_USER_AGENT_TOKENS: [&str; 8] = [
    "Android",
    "webOS",
    "iPhone",
    "iPad",
    "iPod",
    "BlackBerry",
    "IEMobile",
    "Opera Mini",
];

/// Returns `true` if `user_agent` contains any of
/// [`MOBILE_USER_AGENT_TOKENS`], ignoring ASCII case.
#[must_use]
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    let haystack = user_agent.to_ascii_lowercase();
    MOBILE_USER_AGENT_TOKENS
        .iter()
        .any(|token| haystack.contains(token.to_ascii_lowercase().as_str()))
}

/// Touch-capability probes read from the host.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TouchProbe {
    /// Whether the host exposes a touch-start capability.
    pub touch_start: bool,
    /// Maximum simultaneous touch points the host reports.
    pub max_touch_points: u32,
    /// The host's user-agent string.
    pub user_agent: String,
}

impl TouchProbe {
    /// Returns `true` if any probe indicates a touch/mobile environment.
    #[must_use]
    pub fn is_mobile(&self) -> bool {
        self.touch_start || self.max_touch_points > 0 || is_mobile_user_agent(&self.user_agent)
    }
}

/// A snapshot of the host signals that gate activation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Environment {
    /// Whether the reduced-motion preference is currently set.
    pub reduced_motion: bool,
    /// Touch-capability probes.
    pub touch: TouchProbe,
}

impl Environment {
    /// Returns why the effect must not activate, or `None` if it may.
    ///
    /// Reduced motion takes precedence over mobile detection.
    #[must_use]
    pub fn skip_reason(&self) -> Option<SkipReason> {
        if self.reduced_motion {
            Some(SkipReason::ReducedMotion)
        } else if self.touch.is_mobile() {
            Some(SkipReason::Mobile)
        } else {
            None
        }
    }
}

/// Why activation was skipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// The user prefers reduced motion.
    ReducedMotion,
    /// The runtime looks like a touch/mobile device.
    Mobile,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReducedMotion => f.write_str("reduced motion enabled, pointer trail skipped"),
            Self::Mobile => f.write_str("mobile device detected, pointer trail skipped"),
        }
    }
}
