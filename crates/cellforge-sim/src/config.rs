//! Tunable constants for a [`crate::simulation::Simulation`] instance.

/// A cell is tracked as an active heat source once it exceeds `ambient +
/// HEAT_SOURCE_PROMOTION_DELTA`. It is only dropped back out of the working set
/// once it relaxes within `HEAT_SOURCE_RETIRE_DELTA` of ambient, so a cooling
/// source keeps getting diffused every tick right up until it's
/// indistinguishable from ambient, rather than stalling partway down once it
/// crosses some intermediate threshold.
pub const HEAT_SOURCE_PROMOTION_DELTA: f32 = 50.0;
pub const HEAT_SOURCE_RETIRE_DELTA: f32 = 1.0;

/// Fraction of the temperature difference exchanged between two orthogonal
/// neighbors per tick, before scaling by the pair's average thermal conductivity.
pub const DIFFUSION_RATE: f32 = 0.5;

/// Fraction of the gap to ambient a non-heat-source cell relaxes per tick.
pub const AMBIENT_RELAXATION_RATE: f32 = 0.02;

#[derive(Clone, Debug)]
pub struct SimConfig {
    /// Grid width in pixels; divided by `cell_size` to get cell-grid width.
    pub width_px: u32,
    pub height_px: u32,
    pub cell_size: u32,
    /// Ambient air temperature, °C, new cells and diffusion relax toward.
    pub ambient: f32,
    /// Seed for the simulation's deterministic RNG.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width_px: 640,
            height_px: 360,
            cell_size: 4,
            ambient: 20.0,
            seed: 0,
        }
    }
}
