//! World and schedule setup for the motion simulation.
//!
//! [`setup_world`] inserts the resources the motion systems read and
//! registers the default out-of-bounds observer. [`add_motion_systems`] adds
//! the four motion systems to a schedule in their required order, and
//! [`run_tick`] advances the clock and runs a schedule once.
//! [`spawn_playfield_borders`] walls the playfield in with solid bodies.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::position::Position;
use crate::components::rectangle::Rectangle;
use crate::components::solid::Solid;
use crate::events::outofbounds::observe_despawn_out_of_bounds;
use crate::resources::playfield::Playfield;
use crate::resources::solidindex::SolidIndex;
use crate::resources::worldtime::WorldTime;
use crate::systems::motion::{
    accelerate_to_position, rebuild_solid_index, resolve_motion, update_touching_solids,
};
use crate::systems::time::update_world_time;

/// Insert motion resources for `playfield` and register the default
/// out-of-bounds observer (despawn).
pub fn setup_world(world: &mut World, playfield: Playfield) {
    world.insert_resource(WorldTime::default());
    world.insert_resource(SolidIndex::new(&playfield));
    world.insert_resource(playfield);
    world.spawn(Observer::new(observe_despawn_out_of_bounds));
    // Ensure the observer is registered before any system triggers events.
    world.flush();

    info!(
        "Motion world ready: playfield ({}, {}) {}x{}, cell size {}",
        playfield.x, playfield.y, playfield.width, playfield.height, playfield.cell_size
    );
}

/// Thickness of the walls spawned by [`spawn_playfield_borders`].
pub const BORDER_THICKNESS: i32 = 10;

/// Spawn four solid walls just outside `playfield` (top, left, right,
/// bottom) so solid movers stay inside it. Returns the wall entities.
pub fn spawn_playfield_borders(world: &mut World, playfield: &Playfield) -> Vec<Entity> {
    let (x, y, w, h) = (playfield.x, playfield.y, playfield.width, playfield.height);
    let walls = [
        (Position::from_ints(x, y - BORDER_THICKNESS), Rectangle::new(0, 0, w, BORDER_THICKNESS)),
        (Position::from_ints(x - BORDER_THICKNESS, y), Rectangle::new(0, 0, BORDER_THICKNESS, h)),
        (Position::from_ints(x + w, y), Rectangle::new(0, 0, BORDER_THICKNESS, h)),
        (Position::from_ints(x, y + h), Rectangle::new(0, 0, w, BORDER_THICKNESS)),
    ];
    let entities = walls
        .into_iter()
        .map(|(position, rect)| world.spawn((position, rect, Solid)).id())
        .collect();
    debug!("Spawned playfield borders around {}x{}", w, h);
    entities
}

/// Add the motion systems to `schedule`, chained in tick order.
pub fn add_motion_systems(schedule: &mut Schedule) {
    schedule.add_systems(
        (
            rebuild_solid_index,
            resolve_motion,
            update_touching_solids,
            accelerate_to_position,
        )
            .chain(),
    );
}

/// A schedule running one motion tick.
pub fn motion_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    add_motion_systems(&mut schedule);
    schedule
}

/// Advance [`WorldTime`] by `dt` seconds and run `schedule` once.
pub fn run_tick(world: &mut World, schedule: &mut Schedule, dt: f32) {
    update_world_time(world, dt);
    schedule.run(world);
}
