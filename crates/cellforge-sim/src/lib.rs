//! Grid store, movement kernels, thermal/combustion/reaction systems, and the
//! scheduler that drives them, wired together behind a single [`Simulation`]
//! handle.

mod combustion;
mod config;
mod error;
mod grid;
mod movement;
mod reactions;
mod rng;
mod simulation;
mod stats;
mod thermal;

pub use cellforge_materials::{Material, MaterialState, AIR_ID};
pub use config::SimConfig;
pub use error::{SimError, SimResult};
pub use simulation::Simulation;
pub use stats::{NoopStats, SimStats};
