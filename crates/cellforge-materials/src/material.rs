//! Material property record and the physical phase it belongs to.

use serde::{Deserialize, Serialize};

/// Physical phase of a material, selecting the movement kernel used to update it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaterialState {
    /// Doesn't move on its own; may still melt, burn, or be displaced by an explosion.
    Solid,
    /// Flows, seeks its own level (water, oil, lava).
    Liquid,
    /// Rises or sinks depending on density sign, disperses (smoke, steam, fire).
    Gas,
    /// Falls, piles up, disperses diagonally when blocked (sand, gunpowder, ash).
    Powder,
}

/// A single material definition. Identified by a stable id assigned on first
/// registration (see [`crate::registry::MaterialRegistry`]); every other field can be
/// updated in place by re-registering the same name.
///
/// Fields default to physically inert values (see [`Default`]) so callers only need
/// to set the properties that make a material interesting.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Material {
    pub name: String,
    pub state: MaterialState,

    /// Signed density. Negative values mark a buoyant gas that rises rather than
    /// sinks; density sign is the single axis movement kernels compare on in
    /// both directions.
    pub density: f32,
    /// Equilibrium temperature new cells of this material are seeded with, °C.
    pub temperature: f32,

    pub melting_point: Option<f32>,
    pub boiling_point: Option<f32>,
    pub ignition_point: Option<f32>,

    pub thermal_conductivity: f32,
    pub specific_heat: f32,

    /// Probability-like weight in [0, 1] used by the ignition test and reaction
    /// engine; 0 means fireproof/inert.
    pub flammability: f32,
    pub hardness: f32,
    pub electric_conductivity: f32,
    pub ph: Option<f32>,
    pub reactivity: f32,
    pub solubility: Option<String>,

    /// Dispersal resistance for liquids, in [0, 1]. 0 flows freely, 1 barely flows.
    pub viscosity: f32,
    /// Dispersal resistance for powders, in [0, 1]. 0 spreads eagerly into a wide
    /// pile, 1 falls in a near-vertical column.
    pub friction: f32,

    /// Non-empty list of RGBA colors a cell of this material is rendered with; a
    /// host picks one per cell (deterministically or at random) for visual
    /// variation. Validated non-empty by the registry.
    pub color: Vec<[u8; 4]>,
    pub alpha: Option<u8>,

    /// Remaining-lifetime range in seconds. `None` means the material is permanent.
    pub lifetime: Option<(f32, f32)>,
    /// Material spawned in place when lifetime reaches zero; air if `None`.
    pub produces: Option<String>,

    pub solid_form: Option<String>,
    pub liquid_form: Option<String>,
    pub gas_form: Option<String>,

    pub supports_combustion: bool,
    pub combustion_products: Option<String>,
    pub combustion_energy: f32,

    pub explosive: bool,
    pub explosion_radius: f32,
    pub explosion_power: f32,

    /// °C injected into each orthogonal neighbor per second of simulated time.
    pub heat_emission: f32,

    /// Solids that never participate in movement swaps.
    pub immovable: bool,
    /// Participates in the acid/metal reaction predicate.
    pub metal: bool,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: "unknown".to_string(),
            state: MaterialState::Solid,
            density: 1.0,
            temperature: 20.0,
            melting_point: None,
            boiling_point: None,
            ignition_point: None,
            thermal_conductivity: 0.5,
            specific_heat: 1.0,
            flammability: 0.0,
            hardness: 1.0,
            electric_conductivity: 0.0,
            ph: None,
            reactivity: 0.0,
            solubility: None,
            viscosity: 0.5,
            friction: 0.5,
            color: vec![[255, 0, 255, 255]],
            alpha: None,
            lifetime: None,
            produces: None,
            solid_form: None,
            liquid_form: None,
            gas_form: None,
            supports_combustion: false,
            combustion_products: None,
            combustion_energy: 0.0,
            explosive: false,
            explosion_radius: 0.0,
            explosion_power: 0.0,
            heat_emission: 0.0,
            immovable: false,
            metal: false,
        }
    }
}

impl Material {
    /// `solid_form`/`liquid_form`/`gas_form` carry target *names*, not ids, because
    /// they're set up before the target material may have been registered
    /// (forward references like `ice -> water -> steam`). Resolve to ids lazily
    /// through the registry rather than here.
    pub fn is_gas_buoyant(&self) -> bool {
        self.density < 0.0
    }
}
