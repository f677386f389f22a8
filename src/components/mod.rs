//! ECS components for entities.
//!
//! This module groups all component types the motion systems read and write.
//!
//! Submodules overview:
//! - [`motionflags`] – per-entity markers: don't move, integer movement, out-of-bounds destruction
//! - [`motionmodifiers`] – fall speed, damping and accelerate-to-position easing
//! - [`position`] – integer pixel position with a sub-pixel accumulator
//! - [`rectangle`] – local bounding box, also used for world rects
//! - [`solid`] – solid marker and the per-tick touching list
//! - [`velocity`] – velocity in units per second

pub mod motionflags;
pub mod motionmodifiers;
pub mod position;
pub mod rectangle;
pub mod solid;
pub mod velocity;
