// Copyright 2026 the Pointer Trail Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The trailing dot and its easing step.
//!
//! Each step moves the dot a fixed fraction of the way toward its target:
//!
//! ```text
//! P' = P + (T - P) / L
//! ```
//!
//! With a stationary target the remaining distance shrinks by a factor of
//! `1 - 1/L` per step, so for `L > 1` the dot approaches the target
//! monotonically on each axis and never overshoots.

use kurbo::{Circle, Point};

/// A single dot that eases toward a moving target.
///
/// Radius and lag are fixed at construction; only the position changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dot {
    position: Point,
    radius: f64,
    lag: f64,
}

impl Dot {
    /// Creates a dot at `position`.
    ///
    /// `lag` is the easing divisor and must be greater than 1.
    #[must_use]
    pub fn new(position: Point, radius: f64, lag: f64) -> Self {
        debug_assert!(lag > 1.0, "lag must exceed 1, got {lag}");
        Self {
            position,
            radius,
            lag,
        }
    }

    /// Current center of the dot.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Radius of the dot.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Easing divisor.
    #[must_use]
    pub fn lag(&self) -> f64 {
        self.lag
    }

    /// Advances the dot one step toward `target` and returns the new position.
    pub fn step_toward(&mut self, target: Point) -> Point {
        self.position += (target - self.position) / self.lag;
        self.position
    }

    /// The circle to paint for the dot's current position.
    #[must_use]
    pub fn circle(&self) -> Circle {
        Circle::new(self.position, self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn first_steps_from_zero_to_hundred() {
        let mut dot = Dot::new(Point::ZERO, 10.0, 10.0);
        let target = Point::new(100.0, 0.0);

        assert!((dot.step_toward(target).x - 10.0).abs() < EPS);
        assert!((dot.step_toward(target).x - 19.0).abs() < EPS);
        for _ in 2..10 {
            dot.step_toward(target);
        }
        let x = dot.position().x;
        assert!((x - 65.132_155_9).abs() < 1e-6, "expected ~65.13, got {x}");
    }

    #[test]
    fn residual_decays_geometrically() {
        for lag in [1.5, 2.0, 4.0, 10.0, 37.0] {
            let start = Point::new(-40.0, 250.0);
            let target = Point::new(300.0, -12.5);
            let mut dot = Dot::new(start, 5.0, lag);
            let mut factor = 1.0;
            for _ in 0..50 {
                dot.step_toward(target);
                factor *= 1.0 - 1.0 / lag;
                let p = dot.position();
                let expected_x = (start.x - target.x).abs() * factor;
                let expected_y = (start.y - target.y).abs() * factor;
                assert!(
                    ((p.x - target.x).abs() - expected_x).abs() < 1e-6,
                    "x residual mismatch at lag {lag}"
                );
                assert!(
                    ((p.y - target.y).abs() - expected_y).abs() < 1e-6,
                    "y residual mismatch at lag {lag}"
                );
            }
        }
    }

    #[test]
    fn approach_is_monotonic_without_overshoot() {
        let target = Point::new(10.0, -10.0);
        let mut dot = Dot::new(Point::new(-500.0, 500.0), 10.0, 3.0);
        let mut prev = dot.position();
        for _ in 0..200 {
            let p = dot.step_toward(target);
            assert!(p.x >= prev.x && p.x <= target.x, "x overshot: {}", p.x);
            assert!(p.y <= prev.y && p.y >= target.y, "y overshot: {}", p.y);
            prev = p;
        }
    }

    #[test]
    fn converges_to_stationary_target() {
        let target = Point::new(640.0, 360.0);
        let mut dot = Dot::new(Point::ZERO, 10.0, 10.0);
        for _ in 0..1000 {
            dot.step_toward(target);
        }
        assert!(dot.position().distance(target) < 1e-6, "dot did not converge");
    }

    #[test]
    fn retargets_when_target_moves() {
        let mut dot = Dot::new(Point::ZERO, 10.0, 10.0);
        dot.step_toward(Point::new(100.0, 0.0));
        let p = dot.step_toward(Point::new(0.0, 100.0));
        assert!((p.x - 9.0).abs() < EPS, "x eased back toward 0: {}", p.x);
        assert!((p.y - 10.0).abs() < EPS, "y eased toward 100: {}", p.y);
    }

    #[test]
    fn circle_tracks_position_and_radius() {
        let mut dot = Dot::new(Point::new(5.0, 5.0), 7.0, 2.0);
        dot.step_toward(Point::new(15.0, 25.0));
        let c = dot.circle();
        assert_eq!(c.center, Point::new(10.0, 15.0));
        assert!((c.radius - 7.0).abs() < EPS);
        assert!((dot.radius() - 7.0).abs() < EPS);
        assert!((dot.lag() - 2.0).abs() < EPS);
    }
}
