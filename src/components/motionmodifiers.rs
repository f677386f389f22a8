//! Velocity modifiers applied by the motion systems.
//!
//! [`FallSpeed`] and [`MotionDamp`] are applied right after an entity moves,
//! in that order, so damping sees the velocity including this tick's fall
//! speed. [`AccelerateToPosition`] is applied at the end of the tick, after
//! adjacency has been rebuilt.

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Added to `velocity.y` every tick.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct FallSpeed(pub f32);

/// Subtracted from the speed (velocity magnitude) every tick, never below zero.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MotionDamp(pub f32);

/// Eases the velocity toward a target point.
///
/// Each tick the velocity is divided by `damp_factor * (1 + dt)` and then
/// pushed toward `target` by `acceleration * dt`.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct AccelerateToPosition {
    pub target: Vec2,
    pub acceleration: f32,
    pub damp_factor: f32,
}

impl AccelerateToPosition {
    pub fn new(target: Vec2, acceleration: f32, damp_factor: f32) -> Self {
        Self {
            target,
            acceleration,
            damp_factor,
        }
    }
}
