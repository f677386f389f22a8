//! Grid-based spatial partitioning.
//!
//! - [`hash`] – uniform grid over a fixed domain with deduplicated queries
//! - [`pool`] – reusable scratch sets handed out under a drop guard
//! - [`steps`] – integer stepping used by the sweep test

pub mod hash;
pub mod pool;
pub mod steps;
