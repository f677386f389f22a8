//! JSON scene description for seeding a motion world.
//!
//! A scene is a list of bodies. Every field except the position has a
//! default, so a minimal body is `{ "x": 10, "y": 20 }`.
//!
//! ```json
//! {
//!   "bodies": [
//!     { "x": 0, "y": 0, "rect": [-8, -8, 16, 16], "velocity": [100, 0], "solid": true },
//!     { "x": 20, "y": 0, "rect": [-8, -8, 16, 16], "solid": true, "dont_move": true },
//!     { "x": 40, "y": 40, "velocity": [0, 0],
//!       "accelerate_to": { "target": [200, 90], "acceleration": 300, "damp_factor": 1.05 } }
//!   ]
//! }
//! ```

use bevy_ecs::prelude::*;
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::components::motionflags::{DestroyWhenOutOfBounds, DontMove, ForceIntegerMovement};
use crate::components::motionmodifiers::{AccelerateToPosition, FallSpeed, MotionDamp};
use crate::components::position::Position;
use crate::components::rectangle::Rectangle;
use crate::components::solid::Solid;
use crate::components::velocity::Velocity;

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct SceneData {
    #[serde(default)]
    pub bodies: Vec<BodyData>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AccelerateToData {
    pub target: [f32; 2],
    pub acceleration: f32,
    pub damp_factor: f32,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BodyData {
    pub x: f32,
    pub y: f32,
    /// Local bounding box `[x, y, w, h]`.
    #[serde(default)]
    pub rect: Option<[i32; 4]>,
    /// Omit for bodies that never move.
    #[serde(default)]
    pub velocity: Option<[f32; 2]>,
    #[serde(default)]
    pub solid: bool,
    #[serde(default)]
    pub dont_move: bool,
    #[serde(default)]
    pub force_integer: bool,
    #[serde(default)]
    pub fall_speed: Option<f32>,
    #[serde(default)]
    pub motion_damp: Option<f32>,
    #[serde(default)]
    pub destroy_out_of_bounds: bool,
    #[serde(default)]
    pub accelerate_to: Option<AccelerateToData>,
}

impl SceneData {
    /// Loads scene data from a JSON file at the specified path.
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let file_content = std::fs::read_to_string(path)?;
        let scene: SceneData = serde_json::from_str(&file_content)?;
        Ok(scene)
    }

    /// Spawn every body into `world`, returning the new entities in order.
    pub fn spawn_into(&self, world: &mut World) -> Vec<Entity> {
        self.bodies.iter().map(|body| body.spawn_into(world)).collect()
    }
}

impl BodyData {
    pub fn spawn_into(&self, world: &mut World) -> Entity {
        let mut entity = world.spawn(Position::new(self.x, self.y));

        if let Some([x, y, w, h]) = self.rect {
            entity.insert(Rectangle::new(x, y, w, h));
        }
        if let Some([vx, vy]) = self.velocity {
            entity.insert(Velocity::new(vx, vy));
        }
        if self.solid {
            entity.insert(Solid);
        }
        if self.dont_move {
            entity.insert(DontMove);
        }
        if self.force_integer {
            entity.insert(ForceIntegerMovement);
        }
        if let Some(rate) = self.fall_speed {
            entity.insert(FallSpeed(rate));
        }
        if let Some(rate) = self.motion_damp {
            entity.insert(MotionDamp(rate));
        }
        if self.destroy_out_of_bounds {
            entity.insert(DestroyWhenOutOfBounds);
        }
        if let Some(accel) = &self.accelerate_to {
            entity.insert(AccelerateToPosition::new(
                Vec2::from(accel.target),
                accel.acceleration,
                accel.damp_factor,
            ));
        }

        entity.id()
    }
}
