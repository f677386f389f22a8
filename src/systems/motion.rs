//! Motion systems: sweep-resolved movement, velocity modifiers and adjacency.
//!
//! One motion tick is four systems that must run in this order (see
//! [`crate::game::add_motion_systems`]):
//!
//! 1. [`rebuild_solid_index`] – clear the [`SolidIndex`] and insert the world
//!    rect of every solid body.
//! 2. [`resolve_motion`] – move every entity with a velocity. Solid bodies
//!    with a rectangle are moved with [`sweep_test`] so they never tunnel into
//!    other solid bodies; everything else integrates directly. Then fall speed
//!    and damping are applied, out-of-bounds entities are reported and solid
//!    movers are re-inserted into the index.
//! 3. [`update_touching_solids`] – rebuild every [`TouchingSolid`] list by
//!    probing one pixel around each solid body.
//! 4. [`accelerate_to_position`] – ease velocities toward their targets.
//!
//! # Same-tick ordering
//!
//! A solid mover is re-inserted into the index as soon as it has moved, not at
//! the end of the tick. Movers resolved later in the same tick collide with
//! its new rect, while movers resolved earlier saw its old one. Results
//! therefore depend on query iteration order.

use std::hash::Hash;

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::{debug, trace};

use crate::components::motionflags::{DestroyWhenOutOfBounds, DontMove, ForceIntegerMovement};
use crate::components::motionmodifiers::{AccelerateToPosition, FallSpeed, MotionDamp};
use crate::components::position::Position;
use crate::components::rectangle::Rectangle;
use crate::components::solid::{Solid, TouchingSolid};
use crate::components::velocity::Velocity;
use crate::events::outofbounds::OutOfBoundsEvent;
use crate::resources::playfield::Playfield;
use crate::resources::solidindex::SolidIndex;
use crate::resources::worldtime::WorldTime;
use crate::spatial::hash::SpatialHash;
use crate::spatial::steps::integers_between;

/// Left, right, up, down.
const PROBE_OFFSETS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Move a solid body from `position` by `velocity * dt` without entering any
/// rect in `index` that `blocks` accepts.
///
/// The X axis is resolved first, one pixel at a time at the current Y. The Y
/// axis is then resolved the same way at the X reached by the first pass. On
/// an axis that gets blocked the body stops at the last free pixel; on an
/// unblocked axis the full displacement, fraction included, is kept.
pub fn sweep_test<T: Copy + Eq + Hash>(
    index: &mut SpatialHash<T>,
    id: T,
    position: Position,
    rect: Rectangle,
    velocity: Vec2,
    dt: f32,
    mut blocks: impl FnMut(T) -> bool,
) -> Position {
    let mut movement = velocity * dt;
    let target = position + movement;
    let mut position = position;
    let mut valid_x = position.x;
    let mut valid_y = position.y;

    for x in integers_between(position.x, target.x) {
        let candidate = rect.translated(Position::from_ints(x, position.y));
        if index.first_overlap(id, candidate, &mut blocks).is_some() {
            movement.x = (valid_x - position.x) as f32;
            position = position.with_x(position.x);
            break;
        }
        valid_x = x;
    }

    for y in integers_between(position.y, target.y) {
        let candidate = rect.translated(Position::from_ints(valid_x, y));
        if index.first_overlap(id, candidate, &mut blocks).is_some() {
            movement.y = (valid_y - position.y) as f32;
            position = position.with_y(position.y);
            break;
        }
        valid_y = y;
    }

    position + movement
}

/// Clear the solid index and insert the current world rect of every solid.
pub fn rebuild_solid_index(
    mut index: ResMut<SolidIndex>,
    solids: Query<(Entity, &Position, &Rectangle), With<Solid>>,
) {
    index.clear();
    for (entity, position, rect) in solids.iter() {
        index.insert(entity, rect.translated(*position));
    }
    trace!("Solid index rebuilt with {} bodies", index.len());
}

type MoverData = (
    Entity,
    &'static mut Position,
    &'static mut Velocity,
    Option<&'static Rectangle>,
    Has<Solid>,
    Has<ForceIntegerMovement>,
    Option<&'static FallSpeed>,
    Option<&'static MotionDamp>,
    Has<DestroyWhenOutOfBounds>,
);

/// Advance every movable entity by one tick.
///
/// Entities flagged [`DontMove`] are skipped entirely. For each remaining
/// entity, in order:
///
/// 1. Move: [`sweep_test`] for solid bodies with a [`Rectangle`], otherwise
///    `position += velocity * dt` (truncated to whole pixels with
///    [`ForceIntegerMovement`]).
/// 2. [`FallSpeed`] is added to `velocity.y`.
/// 3. [`MotionDamp`] is subtracted from the speed, clamped at zero.
/// 4. With [`DestroyWhenOutOfBounds`], an [`OutOfBoundsEvent`] is triggered
///    if the new position is past the [`Playfield`] margin.
/// 5. Solid bodies are re-inserted into the [`SolidIndex`] at their new rect.
pub fn resolve_motion(
    time: Res<WorldTime>,
    playfield: Res<Playfield>,
    mut index: ResMut<SolidIndex>,
    mut movers: Query<MoverData, Without<DontMove>>,
    solids: Query<(), With<Solid>>,
    mut commands: Commands,
) {
    let dt = time.delta;

    for (
        entity,
        mut position,
        mut velocity,
        rect,
        is_solid,
        force_integer,
        fall_speed,
        motion_damp,
        destroy_out_of_bounds,
    ) in movers.iter_mut()
    {
        let mut vel = velocity.0;

        match rect {
            Some(rect) if is_solid => {
                let resolved = sweep_test(
                    &mut **index,
                    entity,
                    *position,
                    *rect,
                    vel,
                    dt,
                    |other| solids.contains(other),
                );
                trace!("{:?} swept {} -> {}", entity, *position, resolved);
                *position = resolved;
            }
            _ => {
                let mut scaled = vel * dt;
                if force_integer {
                    scaled = scaled.trunc();
                }
                *position = *position + scaled;
            }
        }

        if let Some(fall_speed) = fall_speed {
            vel.y += fall_speed.0;
        }
        if let Some(damp) = motion_damp {
            let speed = (vel.length() - damp.0).max(0.0);
            vel = vel.normalize_or_zero() * speed;
        }
        velocity.0 = vel;

        if destroy_out_of_bounds && playfield.is_out_of_bounds(*position) {
            debug!("{:?} left the playfield at {}", entity, *position);
            commands.trigger(OutOfBoundsEvent { entity });
        }

        if is_solid && let Some(rect) = rect {
            index.insert(entity, rect.translated(*position));
        }
    }
}

/// Rebuild the [`TouchingSolid`] lists of all solid bodies.
///
/// Every solid body's world rect is shifted one pixel left, right, up and
/// down; each other solid body overlapping one of those probes is recorded as
/// touching, on both sides.
pub fn update_touching_solids(
    mut index: ResMut<SolidIndex>,
    solids: Query<(Entity, &Position, &Rectangle), With<Solid>>,
    mut touching: Query<&mut TouchingSolid>,
    mut pairs: Local<Vec<(Entity, Entity)>>,
) {
    for mut list in touching.iter_mut() {
        list.clear();
    }

    pairs.clear();
    for (entity, position, rect) in solids.iter() {
        let world_rect = rect.translated(*position);
        for (dx, dy) in PROBE_OFFSETS {
            let probe = world_rect.offset(dx, dy);
            for (other, other_rect) in index.retrieve_excluding(entity, probe) {
                if probe.intersects(&other_rect) && solids.contains(other) {
                    pairs.push((entity, other));
                }
            }
        }
    }

    for &(a, b) in pairs.iter() {
        if let Ok(mut list) = touching.get_mut(a) {
            list.insert(b);
        }
        if let Ok(mut list) = touching.get_mut(b) {
            list.insert(a);
        }
    }
    trace!("{} touching contacts this tick", pairs.len());
}

/// Ease velocities toward [`AccelerateToPosition`] targets.
///
/// `velocity /= damp_factor * (1 + dt)`, then
/// `velocity += normalize(target - position) * acceleration * dt`.
pub fn accelerate_to_position(
    time: Res<WorldTime>,
    mut query: Query<(&Position, &AccelerateToPosition, &mut Velocity)>,
) {
    let dt = time.delta;
    for (position, accel, mut velocity) in query.iter_mut() {
        let difference = accel.target - position.raw();
        let mut vel = velocity.0 / (accel.damp_factor * (1.0 + dt));
        vel += difference.normalize_or_zero() * accel.acceleration * dt;
        velocity.0 = vel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hash_with(obstacles: &[(u32, Rectangle)]) -> SpatialHash<u32> {
        let mut hash = SpatialHash::new(0, 0, 320, 320, 32);
        for (id, rect) in obstacles {
            hash.insert(*id, *rect);
        }
        hash
    }

    #[test]
    fn test_sweep_stops_at_last_free_pixel() {
        // stationary body at (20, 0) with a centered 16x16 box spans x 12..28
        let mut hash = hash_with(&[(2, Rectangle::new(12, -8, 16, 16))]);
        let rect = Rectangle::new(-8, -8, 16, 16);
        let resolved = sweep_test(
            &mut hash,
            1,
            Position::from_ints(0, 0),
            rect,
            Vec2::new(100.0, 0.0),
            1.0,
            |_| true,
        );
        assert_eq!((resolved.x, resolved.y), (4, 0));
        assert!(!rect.translated(resolved).intersects(&Rectangle::new(12, -8, 16, 16)));
    }

    #[test]
    fn test_sweep_moving_left_and_up() {
        let mut hash = hash_with(&[
            (2, Rectangle::new(0, 50, 10, 10)),
            (3, Rectangle::new(40, 0, 10, 10)),
        ]);
        let rect = Rectangle::new(0, 0, 10, 10);
        let left = sweep_test(
            &mut hash,
            1,
            Position::from_ints(30, 50),
            rect,
            Vec2::new(-50.0, 0.0),
            1.0,
            |_| true,
        );
        assert_eq!((left.x, left.y), (10, 50));
        let up = sweep_test(
            &mut hash,
            1,
            Position::from_ints(40, 30),
            rect,
            Vec2::new(0.0, -50.0),
            1.0,
            |_| true,
        );
        assert_eq!((up.x, up.y), (40, 10));
    }

    #[test]
    fn test_sweep_keeps_fraction_on_free_axis() {
        let mut hash = hash_with(&[]);
        let resolved = sweep_test(
            &mut hash,
            1,
            Position::from_ints(0, 0),
            Rectangle::new(0, 0, 8, 8),
            Vec2::new(10.25, -3.5),
            1.0,
            |_| true,
        );
        assert!((resolved.raw().x - 10.25).abs() < 1e-5);
        assert!((resolved.raw().y + 3.5).abs() < 1e-5);
        assert_eq!((resolved.x, resolved.y), (10, -4));
    }

    #[test]
    fn test_sweep_ignores_rejected_bodies() {
        let mut hash = hash_with(&[(2, Rectangle::new(12, -8, 16, 16))]);
        let resolved = sweep_test(
            &mut hash,
            1,
            Position::from_ints(0, 0),
            Rectangle::new(-8, -8, 16, 16),
            Vec2::new(100.0, 0.0),
            1.0,
            |_| false,
        );
        assert_eq!(resolved.x, 100);
    }

    #[test]
    fn test_zero_extent_body_is_never_blocked() {
        let mut hash = hash_with(&[(2, Rectangle::new(12, -8, 16, 16))]);
        let resolved = sweep_test(
            &mut hash,
            1,
            Position::from_ints(0, 0),
            Rectangle::new(0, 0, 0, 0),
            Vec2::new(100.0, 0.0),
            1.0,
            |_| true,
        );
        assert_eq!(resolved.x, 100);
    }

    #[test]
    fn test_x_is_resolved_before_y() {
        // A blocks the horizontal pass at x = 5. D sits below and only
        // overlaps the body's columns once X has been corrected to 5.
        let a = Rectangle::new(15, 0, 10, 10);
        let d = Rectangle::new(12, 25, 10, 10);
        let mut hash = hash_with(&[(2, a), (3, d)]);
        let rect = Rectangle::new(0, 0, 10, 10);
        let resolved = sweep_test(
            &mut hash,
            1,
            Position::from_ints(0, 0),
            rect,
            Vec2::new(20.0, 20.0),
            1.0,
            |_| true,
        );
        assert_eq!((resolved.x, resolved.y), (5, 15));
        let world = rect.translated(resolved);
        assert!(!world.intersects(&a));
        assert!(!world.intersects(&d));
    }
}
