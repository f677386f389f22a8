//! Playfield resource.
//!
//! Describes the rectangular area the simulation runs in: the domain of the
//! solid index (origin, size, cell size) and the margin beyond which entities
//! flagged [`DestroyWhenOutOfBounds`](crate::components::motionflags::DestroyWhenOutOfBounds)
//! are reported as out of bounds.

use bevy_ecs::prelude::Resource;

use crate::components::position::Position;

pub const DEFAULT_OUT_OF_BOUNDS_MARGIN: i32 = 100;

#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Playfield {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// Side of one spatial index cell, in pixels. Must be at least 1.
    pub cell_size: i32,
    /// How far past the left/right edges an entity may travel.
    pub margin_x: i32,
    /// How far past the top/bottom edges an entity may travel.
    pub margin_y: i32,
}

impl Playfield {
    /// Playfield at `(x, y)` with the default out-of-bounds margin.
    pub fn new(x: i32, y: i32, width: i32, height: i32, cell_size: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            cell_size,
            margin_x: DEFAULT_OUT_OF_BOUNDS_MARGIN,
            margin_y: DEFAULT_OUT_OF_BOUNDS_MARGIN,
        }
    }

    pub fn with_margin(mut self, margin_x: i32, margin_y: i32) -> Self {
        self.margin_x = margin_x;
        self.margin_y = margin_y;
        self
    }

    /// True when `position` lies more than the margin outside the playfield
    /// on any side. Positions exactly on the margin are still in bounds.
    pub fn is_out_of_bounds(&self, position: Position) -> bool {
        position.x < self.x - self.margin_x
            || position.x > self.x + self.width + self.margin_x
            || position.y < self.y - self.margin_y
            || position.y > self.y + self.height + self.margin_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_margin_edges_are_inclusive() {
        let field = Playfield::new(0, 0, 320, 180, 32);
        assert!(!field.is_out_of_bounds(Position::from_ints(-100, 0)));
        assert!(field.is_out_of_bounds(Position::from_ints(-101, 0)));
        assert!(!field.is_out_of_bounds(Position::from_ints(420, 280)));
        assert!(field.is_out_of_bounds(Position::from_ints(421, 0)));
        assert!(field.is_out_of_bounds(Position::from_ints(0, 281)));
        assert!(field.is_out_of_bounds(Position::from_ints(0, -101)));
    }

    #[test]
    fn test_margin_follows_origin() {
        let field = Playfield::new(50, 50, 100, 100, 10).with_margin(5, 0);
        assert!(!field.is_out_of_bounds(Position::from_ints(45, 50)));
        assert!(field.is_out_of_bounds(Position::from_ints(44, 50)));
        assert!(field.is_out_of_bounds(Position::from_ints(60, 49)));
    }
}
