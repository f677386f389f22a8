//! ECS resources made available to systems.
//!
//! Overview
//! - `motionconfig` – INI-backed playfield and tick settings
//! - `playfield` – simulation area, index cell size and out-of-bounds margins
//! - `solidindex` – spatial index of solid bodies, rebuilt every tick
//! - `worldtime` – simulation time and delta
pub mod motionconfig;
pub mod playfield;
pub mod solidindex;
pub mod worldtime;
