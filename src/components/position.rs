//! Integer pixel position backed by a sub-pixel accumulator.
//!
//! [`Position`] stores the raw floating point location of an entity and the
//! rounded integer coordinates derived from it. Everything that queries
//! positions (collision, adjacency, bounds checks) reads the integer `x`/`y`;
//! integration adds to the raw accumulator so slow movers still advance.
//!
//! Rounding is round-half-to-even, so `0.5` rounds to `0` and `1.5` to `2`.

use std::ops::{Add, Sub};

use bevy_ecs::prelude::Component;
use glam::Vec2;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Position {
    raw: Vec2,
    /// Rounded X coordinate in pixels.
    pub x: i32,
    /// Rounded Y coordinate in pixels.
    pub y: i32,
}

impl Position {
    /// Create a position from float coordinates, rounding to whole pixels.
    pub fn new(x: f32, y: f32) -> Self {
        Self::from_vec(Vec2::new(x, y))
    }

    /// Create a position that sits exactly on a pixel.
    pub fn from_ints(x: i32, y: i32) -> Self {
        Self {
            raw: Vec2::new(x as f32, y as f32),
            x,
            y,
        }
    }

    pub fn from_vec(raw: Vec2) -> Self {
        Self {
            raw,
            x: raw.x.round_ties_even() as i32,
            y: raw.y.round_ties_even() as i32,
        }
    }

    /// Sub-pixel location this position was rounded from.
    pub fn raw(&self) -> Vec2 {
        self.raw
    }

    /// Replace the X axis with a whole pixel value, keeping the raw Y.
    pub fn with_x(&self, x: i32) -> Self {
        Self::new(x as f32, self.raw.y)
    }

    /// Replace the Y axis with a whole pixel value, keeping the raw X.
    pub fn with_y(&self, y: i32) -> Self {
        Self::new(self.raw.x, y as f32)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::from_ints(0, 0)
    }
}

impl Add<Vec2> for Position {
    type Output = Position;

    fn add(self, rhs: Vec2) -> Self::Output {
        Position::from_vec(self.raw + rhs)
    }
}

impl Sub for Position {
    type Output = Vec2;

    fn sub(self, rhs: Position) -> Self::Output {
        self.raw - rhs.raw
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_half_to_even() {
        let p = Position::new(0.5, 1.5);
        assert_eq!((p.x, p.y), (0, 2));
        let p = Position::new(-2.5, 2.6);
        assert_eq!((p.x, p.y), (-2, 3));
    }

    #[test]
    fn test_accumulates_sub_pixel_movement() {
        let mut p = Position::from_ints(0, 0);
        for _ in 0..4 {
            p = p + Vec2::new(0.3, 0.0);
        }
        assert_eq!(p.x, 1);
        assert!((p.raw().x - 1.2).abs() < 1e-5);
    }

    #[test]
    fn test_with_x_keeps_raw_y() {
        let p = Position::new(3.4, 7.25).with_x(10);
        assert_eq!(p.x, 10);
        assert!((p.raw().x - 10.0).abs() < f32::EPSILON);
        assert!((p.raw().y - 7.25).abs() < f32::EPSILON);
    }

    #[test]
    fn test_difference_uses_raw_values() {
        let a = Position::new(2.25, 0.0);
        let b = Position::new(1.0, 1.0);
        let d = a - b;
        assert!((d.x - 1.25).abs() < f32::EPSILON);
        assert!((d.y + 1.0).abs() < f32::EPSILON);
    }
}
