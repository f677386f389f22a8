//! Event types and observers used by the motion systems.
//!
//! Submodules:
//! - [`outofbounds`] – raised when an entity leaves the playfield margin
pub mod outofbounds;
