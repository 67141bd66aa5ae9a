//! The top-level simulator. Owns the grid, material registry, heat-source working
//! set, reaction registry, and RNG; exposes the query/mutation API a host needs
//! and no rendering/entity/networking surface.
//!
//! Each tick runs a clear-flags-free pipeline: thermal pass to completion, then a
//! single bottom-to-top row sweep with alternating column scan direction, so no
//! column is structurally favored tick after tick.

use cellforge_materials::{register_default_catalogue, Material, MaterialRegistry, AIR_ID};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::combustion::{explode, try_ignite};
use crate::config::SimConfig;
use crate::error::{SimError, SimResult};
use crate::grid::Grid;
use crate::movement::step_cell;
use crate::reactions::{ReactionContext, ReactionRegistry};
use crate::rng::{seeded, SimRng};
use crate::stats::{NoopStats, SimStats};
use crate::thermal::{self, HeatSources};

const NEIGHBOR_OFFSETS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Owns every piece of simulator state: grid, registry, heat sources, reaction
/// rules, RNG, and the rendering-intent flag flipped by [`Simulation::toggle_heat_view`].
pub struct Simulation {
    grid: Grid,
    registry: MaterialRegistry,
    heat_sources: HeatSources,
    reactions: ReactionRegistry,
    rng: Xoshiro256PlusPlus,
    scan_direction: i32,
    heat_view: bool,
    ambient: f32,
}

impl Simulation {
    /// Construct and initialize in one step, panicking only on allocation
    /// failure inside [`Simulation::try_new`] (use that directly if the host
    /// wants to handle `SimError` itself).
    pub fn new(config: SimConfig) -> Self {
        Self::try_new(config).expect("cellforge-sim: failed to allocate grid")
    }

    pub fn try_new(config: SimConfig) -> SimResult<Self> {
        if config.width_px == 0 || config.height_px == 0 {
            log::warn!("refusing to allocate a {}x{} grid", config.width_px, config.height_px);
            return Err(SimError::AllocationFailed {
                width: config.width_px,
                height: config.height_px,
            });
        }
        let mut registry = MaterialRegistry::new();
        register_default_catalogue(&mut registry);
        let grid = Grid::new(config.width_px, config.height_px, config.cell_size, config.ambient);
        log::debug!(
            "simulation allocated: {}x{} px at {} px/cell, seed {}",
            config.width_px, config.height_px, config.cell_size, config.seed
        );
        Ok(Self {
            grid,
            registry,
            heat_sources: HeatSources::new(),
            reactions: ReactionRegistry::default(),
            rng: seeded(config.seed),
            scan_direction: 1,
            heat_view: false,
            ambient: config.ambient,
        })
    }

    /// Reallocate the grid to a new size, as if freshly constructed. Idempotent.
    pub fn init(&mut self, width_px: u32, height_px: u32, cell_size: u32) {
        log::debug!("reinitializing simulation to {width_px}x{height_px} px at {cell_size} px/cell");
        self.grid.reinit(width_px, height_px, cell_size);
        self.heat_sources = HeatSources::new();
    }

    /// Register or update a material, returning its stable id.
    pub fn material(&mut self, name: &str, props: Material) -> u8 {
        self.registry.material(name, props)
    }

    pub fn set(&mut self, x: i32, y: i32, name: &str, temp: Option<f32>) {
        let id = self.registry.id_of(name);
        self.grid.set_with_material(&self.registry, x, y, id, temp, &mut self.rng);
        let set_temp = self.grid.get_temp(x, y);
        if set_temp > self.ambient + 50.0 {
            self.heat_sources.register(x, y);
        }
    }

    pub fn get(&self, x: i32, y: i32) -> &str {
        &self.registry.get_by_id(self.grid.get(x, y)).name
    }

    pub fn get_temp(&self, x: i32, y: i32) -> f32 {
        self.grid.get_temp(x, y)
    }

    pub fn is_empty(&self, x: i32, y: i32) -> bool {
        self.grid.is_empty_cell(x, y)
    }

    pub fn fill(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, name: &str) {
        let id = self.registry.id_of(name);
        self.grid.fill(&self.registry, x1, y1, x2, y2, id);
    }

    pub fn clear(&mut self, x: i32, y: i32) {
        self.grid.clear_cell(x, y);
    }

    pub fn clear_area(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.grid.clear_area(x1, y1, x2, y2);
    }

    pub fn circle(&mut self, cx: i32, cy: i32, r: f32, name: &str) {
        let id = self.registry.id_of(name);
        self.grid.circle(&self.registry, cx, cy, r, id);
    }

    pub fn explode(&mut self, x: i32, y: i32, radius: f32, power: f32) {
        let mut stats = NoopStats;
        explode(&mut self.grid, &self.registry, &mut self.heat_sources, x, y, radius, power, &mut self.rng, &mut stats);
    }

    pub fn toggle_heat_view(&mut self) {
        self.heat_view = !self.heat_view;
    }

    pub fn heat_view(&self) -> bool {
        self.heat_view
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Advance one tick: thermal pass to completion, then a single bottom-to-top
    /// row sweep with alternating column scan direction, each non-air cell
    /// handled in lifetime → ignition → movement order.
    pub fn update(&mut self, dt: f32) {
        self.update_with_stats(dt, &mut NoopStats);
    }

    pub fn update_with_stats(&mut self, dt: f32, stats: &mut dyn SimStats) {
        thermal::step(&mut self.grid, &self.registry, &mut self.heat_sources, dt, stats);

        let height = self.grid.height() as i32;
        let width = self.grid.width() as i32;
        for y in (0..height).rev() {
            let xs: Box<dyn Iterator<Item = i32>> = if self.scan_direction > 0 {
                Box::new(0..width)
            } else {
                Box::new((0..width).rev())
            };
            for x in xs {
                self.step_one_cell(x, y, dt, stats);
            }
        }
        self.scan_direction = -self.scan_direction;
    }

    fn step_one_cell(&mut self, x: i32, y: i32, dt: f32, stats: &mut dyn SimStats) {
        if self.grid.get(x, y) == AIR_ID {
            return;
        }

        if self.apply_lifetime_decay(x, y, dt, stats) {
            return;
        }
        if try_ignite(&mut self.grid, &self.registry, &mut self.heat_sources, x, y, &mut self.rng, stats) {
            return;
        }

        let material = self.registry.get_by_id(self.grid.get(x, y)).clone();
        if material.state == cellforge_materials::MaterialState::Solid {
            self.react_with_neighbors(x, y, stats);
            return;
        }
        step_cell(&mut self.grid, &self.registry, x, y, &mut self.rng, stats);
        self.react_with_neighbors(x, y, stats);
    }

    /// Decrement a cell's remaining lifetime; on expiry, transition to its
    /// `produces` material (or air) seeding fresh lifetime/temperature. Returns
    /// `true` if the cell was consumed this tick.
    fn apply_lifetime_decay(&mut self, x: i32, y: i32, dt: f32, stats: &mut dyn SimStats) -> bool {
        let lifetime = self.grid.get_lifetime(x, y);
        if lifetime <= 0.0 {
            return false;
        }
        let remaining = lifetime - dt;
        if remaining > 0.0 {
            self.grid.set_lifetime(x, y, remaining);
            return false;
        }

        let material = self.registry.get_by_id(self.grid.get(x, y)).clone();
        let next_id = self.registry.resolve(material.produces.as_deref());
        let next_material = self.registry.get_by_id(next_id);
        let next_lifetime = next_material
            .lifetime
            .map(|(min, max)| min + SimRng::gen_f32(&mut self.rng) * (max - min))
            .unwrap_or(0.0);
        let next_temp = next_material.temperature;
        self.grid.set_cell(x, y, next_id, next_temp, next_lifetime);
        stats.record_state_change();
        true
    }

    fn react_with_neighbors(&mut self, x: i32, y: i32, stats: &mut dyn SimStats) {
        for (dx, dy) in NEIGHBOR_OFFSETS {
            let (nx, ny) = (x + dx, y + dy);
            if self.grid.get(nx, ny) == AIR_ID {
                continue;
            }
            let mut ctx = ReactionContext {
                grid: &mut self.grid,
                registry: &self.registry,
                heat_sources: &mut self.heat_sources,
                rng: &mut self.rng,
                stats,
            };
            if self.reactions.try_react(&mut ctx, x, y, nx, ny) {
                return;
            }
        }
    }
}
