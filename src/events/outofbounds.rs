//! Out-of-bounds destruction signal.
//!
//! The motion system never despawns anything itself. When an entity flagged
//! [`DestroyWhenOutOfBounds`](crate::components::motionflags::DestroyWhenOutOfBounds)
//! ends its move beyond the playfield margin, the system triggers an
//! [`OutOfBoundsEvent`] and leaves the decision to observers.
//!
//! [`observe_despawn_out_of_bounds`] is the default observer: it despawns the
//! entity. Register it (or your own observer) when setting up the world.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

/// Event fired when an entity leaves the playfield by more than the margin.
#[derive(Event, Debug, Clone, Copy)]
pub struct OutOfBoundsEvent {
    pub entity: Entity,
}

/// Global observer that despawns the entity named by an [`OutOfBoundsEvent`].
///
/// Uses `try_despawn`, so an entity already removed by another observer in
/// the same flush is ignored.
pub fn observe_despawn_out_of_bounds(trigger: On<OutOfBoundsEvent>, mut commands: Commands) {
    let entity = trigger.event().entity;
    debug!("Despawning out-of-bounds entity {:?}", entity);
    commands.entity(entity).try_despawn();
}
