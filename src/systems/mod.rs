//! Engine systems.
//!
//! Submodules overview
//! - [`motion`] – rebuild the solid index, sweep-resolve movement, update adjacency
//! - [`time`] – update simulation time and delta

pub mod motion;
pub mod time;
