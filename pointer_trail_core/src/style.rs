// Copyright 2026 the Pointer Trail Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed appearance of the trail.
//!
//! None of these values are runtime-configurable. Backends read them when
//! painting and when styling the overlay surface.

use alloc::format;
use alloc::string::String;
use core::fmt;

/// An 8-bit-per-channel RGBA color.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl Color {
    /// Creates a color from 8-bit red, green, blue, and alpha channels.
    #[must_use]
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Returns the `[r, g, b, a]` channels.
    #[must_use]
    pub const fn to_rgba8(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Returns the alpha channel as a fraction in `0.0..=1.0`.
    #[must_use]
    pub fn alpha(self) -> f64 {
        f64::from(self.a) / 255.0
    }

    /// Serializes the color as a CSS `#rrggbbaa` hex string.
    #[must_use]
    pub fn to_css(self) -> String {
        format!("{self}")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({self})")
    }
}

/// Paint color of the dot: dark gray at roughly 65% opacity.
pub const COLOR: Color = Color::from_rgba8(0x32, 0x32, 0x32, 0xa6);

/// Radius of the dot, in CSS pixels.
pub const DOT_RADIUS: f64 = 10.0;

/// Easing divisor. Each frame the dot covers `1 / LAG` of the remaining
/// distance to the pointer.
pub const LAG: f64 = 10.0;

const _: () = assert!(LAG > 1.0, "LAG must exceed 1 for non-oscillating easing");

/// Stacking order of the overlay, above ordinary page content.
pub const OVERLAY_Z_INDEX: i32 = 9999;

/// CSS properties applied to the overlay surface, as `(property, value)`.
///
/// The overlay is fixed to the viewport origin and ignores pointer input so
/// the page underneath stays interactive.
pub const OVERLAY_STYLE: [(&str, &str); 5] = [
    ("position", "fixed"),
    ("top", "0"),
    ("left", "0"),
    ("pointer-events", "none"),
    ("z-index", "9999"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_serializes_as_hex_with_alpha() {
        assert_eq!(COLOR.to_css(), "#323232a6");
        assert_eq!(Color::from_rgba8(0, 255, 16, 1).to_css(), "#00ff1001");
    }

    #[test]
    fn color_alpha_fraction() {
        assert!((COLOR.alpha() - 166.0 / 255.0).abs() < 1e-12);
        assert_eq!(COLOR.to_rgba8(), [0x32, 0x32, 0x32, 0xa6]);
    }

    #[test]
    fn overlay_style_matches_z_index() {
        let (_, z) = OVERLAY_STYLE
            .iter()
            .find(|(prop, _)| *prop == "z-index")
            .expect("z-index present");
        assert_eq!(*z, format!("{OVERLAY_Z_INDEX}"));
    }

    #[test]
    fn overlay_ignores_pointer_events() {
        assert!(
            OVERLAY_STYLE.contains(&("pointer-events", "none")),
            "overlay must not intercept pointer input"
        );
        assert!(
            OVERLAY_STYLE.contains(&("position", "fixed")),
            "overlay must be pinned to the viewport"
        );
    }
}
