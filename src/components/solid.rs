//! Solid bodies and their per-tick adjacency.
//!
//! An entity with [`Solid`], a [`Position`](super::position::Position) and a
//! [`Rectangle`](super::rectangle::Rectangle) blocks the movement of other
//! solid entities. Blocking only happens when both participants are solid;
//! a non-solid mover passes through solid bodies freely.
//!
//! Every solid entity also carries a [`TouchingSolid`] list (inserted
//! automatically as a required component). The
//! [`update_touching_solids`](crate::systems::motion::update_touching_solids)
//! system clears and rebuilds it every tick with the solid bodies that lie
//! within one pixel of contact along some axis.

use bevy_ecs::prelude::{Component, Entity};
use smallvec::SmallVec;

/// Marker: this entity's rectangle blocks other solid movers.
#[derive(Component, Clone, Copy, Debug, Default)]
#[require(TouchingSolid)]
pub struct Solid;

/// Solid entities touching this one as of the last motion tick.
///
/// The relation is symmetric: if `a` lists `b`, `b` lists `a`. It is never
/// carried across ticks.
#[derive(Component, Clone, Debug, Default)]
pub struct TouchingSolid {
    entities: SmallVec<[Entity; 4]>,
}

impl TouchingSolid {
    /// Record `other` as touching. Duplicates are ignored.
    pub fn insert(&mut self, other: Entity) {
        if !self.entities.contains(&other) {
            self.entities.push(other);
        }
    }

    pub fn contains(&self, other: Entity) -> bool {
        self.entities.contains(&other)
    }

    pub fn clear(&mut self) {
        self.entities.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.entities.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::world::World;

    #[test]
    fn test_solid_requires_touching_list() {
        let mut world = World::new();
        let e = world.spawn(Solid).id();
        let touching = world.get::<TouchingSolid>(e).unwrap();
        assert!(touching.is_empty());
    }

    #[test]
    fn test_insert_ignores_duplicates() {
        let mut world = World::new();
        let other = world.spawn_empty().id();
        let mut touching = TouchingSolid::default();
        touching.insert(other);
        touching.insert(other);
        assert_eq!(touching.len(), 1);
        assert!(touching.contains(other));
        touching.clear();
        assert!(touching.is_empty());
    }
}
