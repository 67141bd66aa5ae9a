//! Material property records and the id registry for Cellforge.
//!
//! This crate is the data side of the simulation: material definitions
//! ([`Material`], [`MaterialState`]), the name↔id registry ([`MaterialRegistry`]),
//! and the default material catalogue ([`register_default_catalogue`]). It has no
//! notion of a grid, movement, or time; that lives in [`cellforge_sim`](../cellforge_sim).

mod catalogue;
mod material;
mod registry;

pub use catalogue::register_default_catalogue;
pub use material::{Material, MaterialState};
pub use registry::{MaterialRegistry, AIR_ID};
