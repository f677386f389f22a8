use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Velocity in world units per second.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct Velocity(pub Vec2);

impl Velocity {
    pub const ZERO: Velocity = Velocity(Vec2::ZERO);

    pub fn new(x: f32, y: f32) -> Self {
        Velocity(Vec2::new(x, y))
    }

    pub fn x(&self) -> f32 {
        self.0.x
    }

    pub fn y(&self) -> f32 {
        self.0.y
    }
}

impl From<Velocity> for Vec2 {
    fn from(v: Velocity) -> Self {
        v.0
    }
}
