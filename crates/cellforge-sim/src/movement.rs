//! Density-driven movement kernels, one per [`MaterialState`].
//!
//! Each kernel tries straight first, then a randomly-chosen diagonal, then its
//! mirror, operating on the flat [`Grid`] with `y` increasing downward (row 0 is
//! the top row), with gas direction driven by [`Material::is_gas_buoyant`] rather
//! than always rising.

use cellforge_materials::{MaterialRegistry, MaterialState, AIR_ID};

use crate::grid::Grid;
use crate::rng::SimRng;
use crate::stats::SimStats;

/// Attempt to move `(fx, fy)` into `(tx, ty)`. Succeeds only if the destination is
/// in bounds, not an immovable solid, and on the correct side of the source's
/// density. A destination that is plain air is relocated into rather than
/// swapped, so the vacated source resets to ambient temperature and zero
/// lifetime instead of inheriting the destination's stale values.
///
/// Moves to a strictly smaller `y` (upward) invert the comparison: density sign
/// is the buoyancy axis, so a rising gas must be *lighter* than what it
/// displaces, the mirror image of a falling solid or liquid needing to be
/// *heavier* than what it displaces. Horizontal moves use the same rule as
/// downward ones.
fn try_move(grid: &mut Grid, registry: &MaterialRegistry, fx: i32, fy: i32, tx: i32, ty: i32, stats: &mut dyn SimStats) -> bool {
    if !grid.in_bounds(tx, ty) {
        return false;
    }
    let src_id = grid.get(fx, fy);
    let dst_id = grid.get(tx, ty);
    let src = registry.get_by_id(src_id);
    let dst = registry.get_by_id(dst_id);

    if dst.state == MaterialState::Solid && dst.immovable {
        return false;
    }
    let allowed = if ty < fy {
        dst.density > src.density
    } else {
        src.density > dst.density
    };
    if !allowed {
        return false;
    }

    if dst_id == AIR_ID {
        grid.relocate_cell(fx, fy, tx, ty);
    } else {
        grid.swap_cells(fx, fy, tx, ty);
    }
    stats.record_cell_moved();
    true
}

/// Run one movement attempt for the cell at `(x, y)` according to its material's
/// state. No-op for air, solids, and `immovable` materials.
pub fn step_cell(grid: &mut Grid, registry: &MaterialRegistry, x: i32, y: i32, rng: &mut dyn SimRng, stats: &mut dyn SimStats) {
    let id = grid.get(x, y);
    if id == AIR_ID {
        return;
    }
    let material = registry.get_by_id(id);
    if material.immovable {
        return;
    }
    match material.state {
        MaterialState::Solid => {}
        MaterialState::Powder => step_powder(grid, registry, x, y, rng, stats),
        MaterialState::Liquid => step_liquid(grid, registry, x, y, rng, stats),
        MaterialState::Gas => step_gas(grid, registry, x, y, rng, stats),
    }
}

/// Falls straight down; if blocked, with probability `1 - friction` tries a
/// random horizontal-down diagonal, then its mirror.
fn step_powder(grid: &mut Grid, registry: &MaterialRegistry, x: i32, y: i32, rng: &mut dyn SimRng, stats: &mut dyn SimStats) {
    if try_move(grid, registry, x, y, x, y + 1, stats) {
        return;
    }
    let friction = registry.get_by_id(grid.get(x, y)).friction;
    if !rng.gen_bool((1.0 - friction) as f64) {
        return;
    }
    let first_dx = if rng.coin_flip() { 1 } else { -1 };
    if try_move(grid, registry, x, y, x + first_dx, y + 1, stats) {
        return;
    }
    try_move(grid, registry, x, y, x - first_dx, y + 1, stats);
}

/// Falls, then tries both diagonals below, then with probability `1 -
/// viscosity` spreads horizontally, seeking its own level.
fn step_liquid(grid: &mut Grid, registry: &MaterialRegistry, x: i32, y: i32, rng: &mut dyn SimRng, stats: &mut dyn SimStats) {
    if try_move(grid, registry, x, y, x, y + 1, stats) {
        return;
    }
    let first_dx = if rng.coin_flip() { 1 } else { -1 };
    if try_move(grid, registry, x, y, x + first_dx, y + 1, stats) {
        return;
    }
    if try_move(grid, registry, x, y, x - first_dx, y + 1, stats) {
        return;
    }
    let viscosity = registry.get_by_id(grid.get(x, y)).viscosity;
    if !rng.gen_bool((1.0 - viscosity) as f64) {
        return;
    }
    if try_move(grid, registry, x, y, x + first_dx, y, stats) {
        return;
    }
    try_move(grid, registry, x, y, x - first_dx, y, stats);
}

/// Rises if buoyant (negative density), sinks otherwise, then with probability
/// 0.4 disperses into a random horizontal neighbor.
fn step_gas(grid: &mut Grid, registry: &MaterialRegistry, x: i32, y: i32, rng: &mut dyn SimRng, stats: &mut dyn SimStats) {
    let material = registry.get_by_id(grid.get(x, y));
    if material.is_gas_buoyant() {
        if try_move(grid, registry, x, y, x, y - 1, stats) {
            return;
        }
        let first_dx = if rng.coin_flip() { 1 } else { -1 };
        if try_move(grid, registry, x, y, x + first_dx, y - 1, stats) {
            return;
        }
        if try_move(grid, registry, x, y, x - first_dx, y - 1, stats) {
            return;
        }
    } else if try_move(grid, registry, x, y, x, y + 1, stats) {
        return;
    }

    if !rng.gen_bool(0.4) {
        return;
    }
    let dx = if rng.coin_flip() { 1 } else { -1 };
    try_move(grid, registry, x, y, x + dx, y, stats);
}
