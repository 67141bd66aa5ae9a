//! Ignition test and explosive detonation.
//!
//! Ignition scans a flammable-and-hot-enough cell's 4-neighborhood for an
//! oxidizer before it catches fire. Explosion runs a collect-then-clear-then-
//! scatter three-phase ordering over flat-grid indices, so debris from one
//! explosion is never re-collected within the same call.

use cellforge_materials::{MaterialRegistry, AIR_ID};
use glam::IVec2;

use crate::grid::Grid;
use crate::rng::SimRng;
use crate::stats::SimStats;
use crate::thermal::HeatSources;

const NEIGHBOR_OFFSETS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// The temperature a cell is set to the instant it catches fire.
pub const FIRE_TEMPERATURE: f32 = 800.0;

/// Test ignition for the cell at `(x, y)` and, if it fires, mutate the grid:
/// either trigger an explosion (returns `true`, explosive materials stop all
/// further per-tick processing for this cell) or turn the cell into fire and
/// heat its neighbors. Returns `false` if the cell did not ignite.
pub fn try_ignite(
    grid: &mut Grid,
    registry: &MaterialRegistry,
    heat_sources: &mut HeatSources,
    x: i32,
    y: i32,
    rng: &mut dyn SimRng,
    stats: &mut dyn SimStats,
) -> bool {
    let id = grid.get(x, y);
    let material = registry.get_by_id(id).clone();

    let Some(ignition_point) = material.ignition_point else {
        return false;
    };
    if grid.get_temp(x, y) < ignition_point {
        return false;
    }
    let has_oxidizer = NEIGHBOR_OFFSETS
        .iter()
        .any(|(dx, dy)| registry.get_by_id(grid.get(x + dx, y + dy)).supports_combustion);
    if !has_oxidizer {
        return false;
    }

    stats.record_ignition();

    if material.explosive {
        log::debug!("{} detonates at ({x}, {y})", material.name);
        explode(grid, registry, heat_sources, x, y, material.explosion_radius, material.explosion_power, rng, stats);
        return true;
    }

    log::debug!("{} ignites at ({x}, {y})", material.name);
    let fire_id = registry.id_of("fire");
    let fire_material = registry.get_by_id(fire_id);
    let lifetime = fire_material
        .lifetime
        .map(|(min, max)| rng.gen_f32() * (max - min) + min)
        .unwrap_or(0.0);
    grid.set_cell(x, y, fire_id, FIRE_TEMPERATURE, lifetime);
    heat_sources.register(x, y);

    for (dx, dy) in NEIGHBOR_OFFSETS {
        let (nx, ny) = (x + dx, y + dy);
        if grid.in_bounds(nx, ny) {
            let boosted = grid.get_temp(nx, ny) + material.combustion_energy * 10.0;
            grid.set_temp(nx, ny, boosted);
            heat_sources.register(nx, ny);
        }
    }
    true
}

/// Detonate a disk of radius `radius` centered at `(cx, cy)` with the given
/// `power`: collect every occupied cell's material and outward velocity, clear
/// the whole disk to air at 1000-1500 °C, then scatter debris to its target
/// cell, and finally stamp a radius-`0.4·radius` disk of fire at the center.
pub fn explode(
    grid: &mut Grid,
    registry: &MaterialRegistry,
    heat_sources: &mut HeatSources,
    cx: i32,
    cy: i32,
    radius: f32,
    power: f32,
    rng: &mut dyn SimRng,
    stats: &mut dyn SimStats,
) {
    let center = IVec2::new(cx, cy);
    let cells = grid.cells_in_circle(cx, cy, radius);

    struct Debris {
        material_id: u8,
        temp: f32,
        lifetime: f32,
        target: IVec2,
    }

    let mut debris = Vec::new();
    for &(x, y) in &cells {
        let id = grid.get(x, y);
        if id == AIR_ID {
            continue;
        }
        let cell = IVec2::new(x, y);
        let offset = (cell - center).as_vec2();
        let dist = offset.length();
        let velocity = (1.0 - (dist / radius).min(1.0)) * power * 0.1;
        let target = cell + (offset.normalize_or_zero() * velocity).round().as_ivec2();
        debris.push(Debris {
            material_id: id,
            temp: grid.get_temp(x, y),
            lifetime: grid.get_lifetime(x, y),
            target,
        });
    }

    for &(x, y) in &cells {
        let blast_temp = 1000.0 + rng.gen_f32() * 500.0;
        grid.clear_cell(x, y);
        grid.set_temp(x, y, blast_temp);
        heat_sources.register(x, y);
    }

    for d in &debris {
        if grid.in_bounds(d.target.x, d.target.y) {
            grid.set_cell(d.target.x, d.target.y, d.material_id, d.temp, d.lifetime);
        }
    }

    let fire_id = registry.id_of("fire");
    grid.circle(registry, cx, cy, radius * 0.4, fire_id);
    log::debug!("explosion at ({cx}, {cy}) radius {radius} power {power}, {} cells displaced", debris.len());
    stats.record_explosion();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::seeded;
    use crate::stats::NoopStats;
    use cellforge_materials::{Material, MaterialState};

    fn wood_fire_registry() -> (MaterialRegistry, u8, u8) {
        let mut registry = MaterialRegistry::new();
        registry.material(
            "fire",
            Material {
                state: MaterialState::Gas,
                density: -0.5,
                lifetime: Some((0.2, 0.6)),
                produces: Some("smoke".to_string()),
                supports_combustion: true,
                ..Default::default()
            },
        );
        let wood = registry.material(
            "wood",
            Material {
                state: MaterialState::Solid,
                density: 700.0,
                ignition_point: Some(300.0),
                flammability: 0.6,
                combustion_energy: 2.0,
                ..Default::default()
            },
        );
        let fire_id = registry.id_of("fire");
        (registry, wood, fire_id)
    }

    #[test]
    fn hot_flammable_cell_with_adjacent_air_ignites() {
        let (registry, wood, fire_id) = wood_fire_registry();
        let mut grid = Grid::new(100, 100, 10, 20.0);
        grid.set_cell(5, 5, wood, 400.0, 0.0);
        let mut heat_sources = HeatSources::new();
        let mut rng = seeded(1);
        let mut stats = NoopStats;
        let ignited = try_ignite(&mut grid, &registry, &mut heat_sources, 5, 5, &mut rng, &mut stats);
        assert!(ignited);
        assert_eq!(grid.get(5, 5), fire_id);
        assert_eq!(grid.get_temp(5, 5), FIRE_TEMPERATURE);
    }

    #[test]
    fn below_ignition_point_does_not_ignite() {
        let (registry, wood, _fire_id) = wood_fire_registry();
        let mut grid = Grid::new(100, 100, 10, 20.0);
        grid.set_cell(5, 5, wood, 100.0, 0.0);
        let mut heat_sources = HeatSources::new();
        let mut rng = seeded(1);
        let mut stats = NoopStats;
        let ignited = try_ignite(&mut grid, &registry, &mut heat_sources, 5, 5, &mut rng, &mut stats);
        assert!(!ignited);
        assert_eq!(grid.get(5, 5), wood);
    }

    #[test]
    fn no_oxidizer_neighbor_blocks_ignition() {
        let (mut registry, _wood, _fire_id) = wood_fire_registry();
        let inert_wall = registry.material(
            "inert_wall",
            Material {
                state: MaterialState::Solid,
                density: 5000.0,
                supports_combustion: false,
                immovable: true,
                ..Default::default()
            },
        );
        let wood = registry.id_of("wood");
        let mut grid = Grid::new(100, 100, 10, 20.0);
        grid.set_cell(5, 5, wood, 400.0, 0.0);
        for (dx, dy) in NEIGHBOR_OFFSETS {
            grid.set_cell(5 + dx, 5 + dy, inert_wall, 20.0, 0.0);
        }
        let mut heat_sources = HeatSources::new();
        let mut rng = seeded(1);
        let mut stats = NoopStats;
        let ignited = try_ignite(&mut grid, &registry, &mut heat_sources, 5, 5, &mut rng, &mut stats);
        assert!(!ignited);
    }

    #[test]
    fn explosion_clears_disk_and_stamps_fire_center() {
        let (mut registry, _wood, fire_id) = wood_fire_registry();
        let sand = registry.material(
            "sand",
            Material {
                state: MaterialState::Powder,
                density: 1600.0,
                ..Default::default()
            },
        );
        let mut grid = Grid::new(400, 400, 1, 20.0);
        grid.fill(&registry, 80, 80, 120, 120, sand);
        let mut heat_sources = HeatSources::new();
        let mut rng = seeded(9);
        let mut stats = NoopStats;
        explode(&mut grid, &registry, &mut heat_sources, 100, 100, 20.0, 100.0, &mut rng, &mut stats);
        assert_eq!(grid.get(100, 100), fire_id);
        // debris velocity is bounded by power * 0.1, so nothing lands further than
        // radius + that bound from the center.
        let max_travel = 20.0 + 100.0 * 0.1;
        for y in 0..grid.height() as i32 {
            for x in 0..grid.width() as i32 {
                if grid.is_empty_cell(x, y) {
                    continue;
                }
                let dist = (((x - 100).pow(2) + (y - 100).pow(2)) as f32).sqrt();
                assert!(dist <= max_travel, "debris at ({x},{y}) traveled further than the velocity bound allows");
            }
        }
    }
}
