//! Heat diffusion, ambient relaxation, and state-transition dispatch.
//!
//! A deterministic 4-neighbor symmetric exchange runs over a tracked heat-source
//! working set, applied through a double temperature buffer so no cell sees
//! another cell's already-updated-this-tick value.

use std::collections::HashSet;

use cellforge_materials::{MaterialRegistry, MaterialState};

use crate::config::{AMBIENT_RELAXATION_RATE, DIFFUSION_RATE, HEAT_SOURCE_PROMOTION_DELTA, HEAT_SOURCE_RETIRE_DELTA};
use crate::grid::Grid;
use crate::stats::SimStats;

const NEIGHBOR_OFFSETS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Indices of cells hot enough to need targeted diffusion work, carried between
/// ticks so cooling regions drop out of the working set instead of the whole grid
/// being rescanned.
#[derive(Default)]
pub struct HeatSources {
    cells: HashSet<(i32, i32)>,
}

impl HeatSources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, x: i32, y: i32) {
        self.cells.insert((x, y));
    }

    pub fn unregister(&mut self, x: i32, y: i32) {
        self.cells.remove(&(x, y));
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Run one thermal tick: seed the to-process set with every heat source and its
/// 5x5 neighborhood, diffuse, relax non-sources toward ambient, then dispatch
/// state transitions with the freshly diffused temperature.
pub fn step(grid: &mut Grid, registry: &MaterialRegistry, heat_sources: &mut HeatSources, dt: f32, stats: &mut dyn SimStats) {
    let mut working_set: HashSet<(i32, i32)> = HashSet::new();
    for &(sx, sy) in &heat_sources.cells {
        for dy in -2..=2 {
            for dx in -2..=2 {
                let (x, y) = (sx + dx, sy + dy);
                if grid.in_bounds(x, y) {
                    working_set.insert((x, y));
                }
            }
        }
    }

    let mut next_temps: Vec<(i32, i32, f32)> = Vec::with_capacity(working_set.len());

    for &(x, y) in &working_set {
        let id = grid.get(x, y);
        let material = registry.get_by_id(id);
        let mut temp = grid.get_temp(x, y);

        if material.heat_emission > 0.0 {
            let cap = material.temperature + 200.0;
            temp = (temp + material.heat_emission * dt * 0.1).min(cap);
        }

        let mut delta = 0.0f32;
        for (dx, dy) in NEIGHBOR_OFFSETS {
            let (nx, ny) = (x + dx, y + dy);
            let neighbor_temp = grid.get_temp(nx, ny);
            let neighbor_material = registry.get_by_id(grid.get(nx, ny));
            let avg_conductivity = (material.thermal_conductivity + neighbor_material.thermal_conductivity) * 0.5;
            delta += (temp - neighbor_temp) * avg_conductivity * dt * DIFFUSION_RATE * 0.25;
        }
        temp -= delta;
        temp += -(temp - grid.ambient()) * dt * AMBIENT_RELAXATION_RATE;

        next_temps.push((x, y, temp));
    }

    for &(x, y, temp) in &next_temps {
        grid.set_temp(x, y, temp);
        if temp >= grid.ambient() + HEAT_SOURCE_PROMOTION_DELTA {
            heat_sources.register(x, y);
        } else if temp < grid.ambient() + HEAT_SOURCE_RETIRE_DELTA {
            heat_sources.unregister(x, y);
        }
    }

    for &(x, y, temp) in &next_temps {
        dispatch_state_change(grid, registry, x, y, temp, stats);
    }
}

/// Evaluate the boil/melt/solidify/condense ladder for one cell, first match
/// wins.
fn dispatch_state_change(grid: &mut Grid, registry: &MaterialRegistry, x: i32, y: i32, temp: f32, stats: &mut dyn SimStats) {
    let id = grid.get(x, y);
    let material = registry.get_by_id(id).clone();

    if let (Some(boiling), Some(gas_name)) = (material.boiling_point, material.gas_form.as_deref()) {
        if temp >= boiling {
            let target = registry.id_of(gas_name);
            log::debug!("{} boils into {} at ({x}, {y})", material.name, gas_name);
            grid.set_cell(x, y, target, boiling, 0.0);
            stats.record_state_change();
            return;
        }
    }
    if let (Some(melting), Some(liquid_name)) = (material.melting_point, material.liquid_form.as_deref()) {
        if temp >= melting && material.state == MaterialState::Solid {
            let target = registry.id_of(liquid_name);
            log::debug!("{} melts into {} at ({x}, {y})", material.name, liquid_name);
            grid.set_cell(x, y, target, melting, 0.0);
            stats.record_state_change();
            return;
        }
    }
    if let (Some(melting), Some(solid_name)) = (material.melting_point, material.solid_form.as_deref()) {
        if temp < melting && material.state == MaterialState::Liquid {
            let target = registry.id_of(solid_name);
            log::debug!("{} solidifies into {} at ({x}, {y})", material.name, solid_name);
            grid.set_cell(x, y, target, melting, 0.0);
            stats.record_state_change();
            return;
        }
    }
    if let (Some(boiling), Some(liquid_name)) = (material.boiling_point, material.liquid_form.as_deref()) {
        if temp < boiling && material.state == MaterialState::Gas {
            let target = registry.id_of(liquid_name);
            log::debug!("{} condenses into {} at ({x}, {y})", material.name, liquid_name);
            grid.set_cell(x, y, target, boiling, 0.0);
            stats.record_state_change();
        }
    }
}
