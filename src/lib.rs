//! Gridsweep library.
//!
//! Grid-indexed, sweep-resolved 2D motion for `bevy_ecs` worlds: solid bodies
//! move pixel by pixel without tunneling through each other, velocity
//! modifiers are applied in a fixed order, and touching solids are published
//! every tick.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod scene;
pub mod spatial;
pub mod systems;
