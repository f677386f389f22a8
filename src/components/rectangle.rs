//! Axis-aligned integer rectangle.
//!
//! As a component, [`Rectangle`] is the local-space bounding box of an entity,
//! offset from its [`Position`]. The same type is used for world rects, which
//! are produced with [`Rectangle::translated`].

use bevy_ecs::prelude::Component;

use crate::components::position::Position;

#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rectangle {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rectangle {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Strict overlap test. Rects that only share an edge do not intersect,
    /// and a rect with zero width or height never intersects anything.
    pub fn intersects(&self, other: &Rectangle) -> bool {
        if self.w <= 0 || self.h <= 0 || other.w <= 0 || other.h <= 0 {
            return false;
        }
        other.left() < self.right()
            && self.left() < other.right()
            && other.top() < self.bottom()
            && self.top() < other.bottom()
    }

    /// World rect of this local rect for an entity at `position`.
    pub fn translated(&self, position: Position) -> Rectangle {
        Rectangle {
            x: position.x + self.x,
            y: position.y + self.y,
            ..*self
        }
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Rectangle {
        Rectangle {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }
}
