//! The flat-array cell grid.
//!
//! Three parallel `Vec`s hold material id, temperature, and remaining lifetime for
//! every cell, indexed by `y * width + x`. This is deliberately not a chunked
//! `HashMap`-of-chunks store; this grid is meant to size in the low thousands of
//! cells, not an open world, so chunked streaming buys nothing here.

use cellforge_materials::{MaterialRegistry, AIR_ID};

/// A cellular-automaton grid of fixed size. Cells are addressed by integer grid
/// coordinates `(x, y)`, `x` in `[0, width)`, `y` in `[0, height)`, `y` increasing
/// downward (row 0 is the top row).
pub struct Grid {
    width: usize,
    height: usize,
    cell_size: u32,
    ambient: f32,
    material_ids: Vec<u8>,
    temperatures: Vec<f32>,
    lifetimes: Vec<f32>,
}

impl Grid {
    /// Allocate a grid of `width_px x height_px` pixels at `cell_size` pixels per
    /// cell, cleared to air at `ambient` °C. Idempotent: calling again on an
    /// existing grid (via [`Grid::reinit`]) reallocates from scratch.
    pub fn new(width_px: u32, height_px: u32, cell_size: u32, ambient: f32) -> Self {
        let cell_size = cell_size.max(1);
        let width = (width_px / cell_size).max(1) as usize;
        let height = (height_px / cell_size).max(1) as usize;
        let area = width * height;
        Self {
            width,
            height,
            cell_size,
            ambient,
            material_ids: vec![AIR_ID; area],
            temperatures: vec![ambient; area],
            lifetimes: vec![0.0; area],
        }
    }

    /// Reinitialize this grid in place to the given dimensions, as if freshly
    /// constructed. Idempotent.
    pub fn reinit(&mut self, width_px: u32, height_px: u32, cell_size: u32) {
        *self = Self::new(width_px, height_px, cell_size, self.ambient);
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn ambient(&self) -> f32 {
        self.ambient
    }

    pub fn len(&self) -> usize {
        self.material_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.material_ids.is_empty()
    }

    /// World pixel coordinates to grid cell coordinates.
    pub fn pixel_to_cell(&self, px: i32, py: i32) -> (i32, i32) {
        (
            px.div_euclid(self.cell_size as i32),
            py.div_euclid(self.cell_size as i32),
        )
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    #[inline]
    pub fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.in_bounds(x, y) {
            Some(y as usize * self.width + x as usize)
        } else {
            None
        }
    }

    /// Material id at `(x, y)`; air if out of bounds.
    pub fn get(&self, x: i32, y: i32) -> u8 {
        self.index(x, y)
            .map(|i| self.material_ids[i])
            .unwrap_or(AIR_ID)
    }

    /// Temperature at `(x, y)`, °C; ambient if out of bounds.
    pub fn get_temp(&self, x: i32, y: i32) -> f32 {
        self.index(x, y)
            .map(|i| self.temperatures[i])
            .unwrap_or(self.ambient)
    }

    pub fn get_lifetime(&self, x: i32, y: i32) -> f32 {
        self.index(x, y).map(|i| self.lifetimes[i]).unwrap_or(0.0)
    }

    /// True iff the cell is air or out of bounds.
    pub fn is_empty_cell(&self, x: i32, y: i32) -> bool {
        self.get(x, y) == AIR_ID
    }

    pub fn set_temp(&mut self, x: i32, y: i32, temp: f32) {
        if let Some(i) = self.index(x, y) {
            self.temperatures[i] = temp;
        }
    }

    pub fn set_lifetime(&mut self, x: i32, y: i32, lifetime: f32) {
        if let Some(i) = self.index(x, y) {
            self.lifetimes[i] = lifetime;
        }
    }

    /// Raw cell write. Out-of-bounds writes are silently ignored.
    pub fn set_cell(&mut self, x: i32, y: i32, material_id: u8, temp: f32, lifetime: f32) {
        if let Some(i) = self.index(x, y) {
            self.material_ids[i] = material_id;
            self.temperatures[i] = temp;
            self.lifetimes[i] = lifetime;
        }
    }

    pub fn clear_cell(&mut self, x: i32, y: i32) {
        self.set_cell(x, y, AIR_ID, self.ambient, 0.0);
    }

    /// Seed a cell's lifetime uniformly at random from `material.lifetime`, if any.
    pub fn set_with_material(
        &mut self,
        registry: &MaterialRegistry,
        x: i32,
        y: i32,
        material_id: u8,
        temp: Option<f32>,
        rng: &mut impl rand::Rng,
    ) {
        let material = registry.get_by_id(material_id);
        let temp = temp.unwrap_or(material.temperature);
        let lifetime = material
            .lifetime
            .map(|(min, max)| rng.gen_range(min..=max))
            .unwrap_or(0.0);
        self.set_cell(x, y, material_id, temp, lifetime);
    }

    /// Swap two cells wholesale (material, temperature, lifetime all move).
    pub fn swap_cells(&mut self, ax: i32, ay: i32, bx: i32, by: i32) {
        let (Some(a), Some(b)) = (self.index(ax, ay), self.index(bx, by)) else {
            return;
        };
        self.material_ids.swap(a, b);
        self.temperatures.swap(a, b);
        self.lifetimes.swap(a, b);
    }

    /// Move the contents of `(sx, sy)` into `(dx, dy)`, leaving the source cell air
    /// at ambient temperature with no lifetime remaining.
    pub fn relocate_cell(&mut self, sx: i32, sy: i32, dx: i32, dy: i32) {
        let (Some(s), Some(d)) = (self.index(sx, sy), self.index(dx, dy)) else {
            return;
        };
        self.material_ids[d] = self.material_ids[s];
        self.temperatures[d] = self.temperatures[s];
        self.lifetimes[d] = self.lifetimes[s];
        self.material_ids[s] = AIR_ID;
        self.temperatures[s] = self.ambient;
        self.lifetimes[s] = 0.0;
    }

    /// Bulk-fill an inclusive rectangle with a single material at its equilibrium
    /// temperature.
    pub fn fill(&mut self, registry: &MaterialRegistry, x1: i32, y1: i32, x2: i32, y2: i32, material_id: u8) {
        let (min_x, max_x) = (x1.min(x2), x1.max(x2));
        let (min_y, max_y) = (y1.min(y2), y1.max(y2));
        let temp = registry.get_by_id(material_id).temperature;
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                self.set_cell(x, y, material_id, temp, 0.0);
            }
        }
    }

    pub fn clear_area(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        let (min_x, max_x) = (x1.min(x2), x1.max(x2));
        let (min_y, max_y) = (y1.min(y2), y1.max(y2));
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                self.clear_cell(x, y);
            }
        }
    }

    /// Fill every cell whose grid-center lies within Euclidean radius `r` of
    /// `(cx, cy)` with `material_id`.
    pub fn circle(&mut self, registry: &MaterialRegistry, cx: i32, cy: i32, r: f32, material_id: u8) {
        let temp = registry.get_by_id(material_id).temperature;
        let ri = r.ceil() as i32;
        let r2 = r * r;
        for dy in -ri..=ri {
            for dx in -ri..=ri {
                if (dx * dx + dy * dy) as f32 <= r2 {
                    self.set_cell(cx + dx, cy + dy, material_id, temp, 0.0);
                }
            }
        }
    }

    /// All `(x, y)` cells whose grid-center lies within Euclidean radius `r` of
    /// `(cx, cy)`, used by [`crate::combustion`] for explosion scatter.
    pub fn cells_in_circle(&self, cx: i32, cy: i32, r: f32) -> Vec<(i32, i32)> {
        let ri = r.ceil() as i32;
        let r2 = r * r;
        let mut out = Vec::new();
        for dy in -ri..=ri {
            for dx in -ri..=ri {
                if (dx * dx + dy * dy) as f32 <= r2 {
                    out.push((cx + dx, cy + dy));
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellforge_materials::Material;

    #[test]
    fn new_grid_is_all_air_at_ambient() {
        let grid = Grid::new(200, 100, 10, 20.0);
        assert_eq!(grid.width(), 20);
        assert_eq!(grid.height(), 10);
        for y in 0..grid.height() as i32 {
            for x in 0..grid.width() as i32 {
                assert_eq!(grid.get(x, y), AIR_ID);
                assert_eq!(grid.get_temp(x, y), 20.0);
            }
        }
    }

    #[test]
    fn out_of_bounds_reads_return_safe_defaults() {
        let grid = Grid::new(100, 100, 10, 20.0);
        assert_eq!(grid.get(-1, 0), AIR_ID);
        assert_eq!(grid.get(1000, 1000), AIR_ID);
        assert_eq!(grid.get_temp(-1, -1), 20.0);
        assert!(grid.is_empty_cell(-5, -5));
    }

    #[test]
    fn out_of_bounds_writes_are_ignored() {
        let mut grid = Grid::new(100, 100, 10, 20.0);
        grid.set_cell(-1, -1, 5, 500.0, 1.0);
        grid.set_temp(1000, 1000, 999.0);
        // no panic, nothing observable changed inside bounds
        assert_eq!(grid.get(0, 0), AIR_ID);
    }

    #[test]
    fn fill_covers_inclusive_rectangle() {
        let mut registry = MaterialRegistry::new();
        let sand = registry.material("sand", Material { density: 1600.0, ..Default::default() });
        let mut grid = Grid::new(100, 100, 10, 20.0);
        grid.fill(&registry, 2, 2, 4, 4, sand);
        for y in 2..=4 {
            for x in 2..=4 {
                assert_eq!(grid.get(x, y), sand);
            }
        }
        assert_eq!(grid.get(1, 2), AIR_ID);
        assert_eq!(grid.get(5, 4), AIR_ID);
    }

    #[test]
    fn circle_fills_euclidean_disk() {
        let mut registry = MaterialRegistry::new();
        let stone = registry.material("stone", Material::default());
        let mut grid = Grid::new(200, 200, 10, 20.0);
        grid.circle(&registry, 10, 10, 3.0, stone);
        assert_eq!(grid.get(10, 10), stone);
        assert_eq!(grid.get(13, 10), stone);
        assert_eq!(grid.get(10, 13), stone);
        // corner further than radius 3 from center stays air
        assert_eq!(grid.get(13, 13), AIR_ID);
    }

    #[test]
    fn relocate_cell_leaves_source_as_air_at_ambient() {
        let mut grid = Grid::new(100, 100, 10, 20.0);
        grid.set_cell(1, 1, 7, 55.0, 2.0);
        grid.relocate_cell(1, 1, 1, 2);
        assert_eq!(grid.get(1, 2), 7);
        assert_eq!(grid.get_temp(1, 2), 55.0);
        assert_eq!(grid.get_lifetime(1, 2), 2.0);
        assert_eq!(grid.get(1, 1), AIR_ID);
        assert_eq!(grid.get_temp(1, 1), 20.0);
        assert_eq!(grid.get_lifetime(1, 1), 0.0);
    }

    #[test]
    fn swap_cells_exchanges_both_sides() {
        let mut grid = Grid::new(100, 100, 10, 20.0);
        grid.set_cell(0, 0, 3, 10.0, 0.0);
        grid.set_cell(0, 1, 9, 90.0, 0.0);
        grid.swap_cells(0, 0, 0, 1);
        assert_eq!(grid.get(0, 0), 9);
        assert_eq!(grid.get_temp(0, 0), 90.0);
        assert_eq!(grid.get(0, 1), 3);
        assert_eq!(grid.get_temp(0, 1), 10.0);
    }
}
