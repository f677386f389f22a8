//! Spatial index of solid bodies.
//!
//! [`SolidIndex`] is rebuilt from scratch every motion tick by
//! [`rebuild_solid_index`](crate::systems::motion::rebuild_solid_index) and
//! updated in place as solid movers resolve. It carries no meaningful state
//! between ticks.

use std::ops::{Deref, DerefMut};

use bevy_ecs::prelude::{Entity, Resource};
use log::warn;

use crate::resources::playfield::Playfield;
use crate::spatial::hash::SpatialHash;

#[derive(Resource, Debug)]
pub struct SolidIndex(SpatialHash<Entity>);

impl SolidIndex {
    pub fn new(playfield: &Playfield) -> Self {
        if playfield.cell_size > playfield.width.min(playfield.height) {
            warn!(
                "Cell size {} exceeds playfield {}x{}; solid index degenerates to a single cell per axis",
                playfield.cell_size, playfield.width, playfield.height
            );
        }
        SolidIndex(SpatialHash::new(
            playfield.x,
            playfield.y,
            playfield.width,
            playfield.height,
            playfield.cell_size,
        ))
    }
}

impl Deref for SolidIndex {
    type Target = SpatialHash<Entity>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for SolidIndex {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
