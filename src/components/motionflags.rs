//! Per-entity motion flags.
//!
//! These markers are toggled often at runtime (a body is pinned in place, a
//! projectile leaves the screen), so they live in sparse-set storage to keep
//! archetype moves cheap.

use bevy_ecs::prelude::Component;

/// The motion system skips this entity entirely: no integration, no modifiers.
#[derive(Component, Clone, Copy, Debug, Default)]
#[component(storage = "SparseSet")]
pub struct DontMove;

/// Truncate each tick's displacement to whole pixels before applying it.
///
/// Only affects entities integrated directly (not solid sweepers).
#[derive(Component, Clone, Copy, Debug, Default)]
#[component(storage = "SparseSet")]
pub struct ForceIntegerMovement;

/// Fire an [`OutOfBoundsEvent`](crate::events::outofbounds::OutOfBoundsEvent)
/// when the entity ends a tick beyond the playfield margin.
#[derive(Component, Clone, Copy, Debug, Default)]
#[component(storage = "SparseSet")]
pub struct DestroyWhenOutOfBounds;
