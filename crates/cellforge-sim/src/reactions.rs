//! Property-predicate reaction rules applied to neighbor pairs.
//!
//! Rules are a `{predicate, apply}` pair stored as plain `fn` pointers in
//! registration order and evaluated first-match-wins per adjacency, so
//! registering a new rule never changes an existing one's behavior.

use cellforge_materials::Material;

use crate::combustion::explode;
use crate::grid::Grid;
use crate::rng::SimRng;
use crate::stats::SimStats;
use crate::thermal::HeatSources;

/// A pair's material and current cell temperature, as seen by a predicate.
#[derive(Clone, Copy)]
pub struct Side<'a> {
    pub material: &'a Material,
    pub temp: f32,
}

type Predicate = fn(Side, Side) -> bool;
type Apply = fn(&mut ReactionContext, i32, i32, i32, i32);

/// Mutable state a rule's `apply` function needs: the grid, registry, RNG, stats,
/// and heat-source set, bundled so `Apply` stays a plain `fn` pointer rather than
/// a boxed closure.
pub struct ReactionContext<'a> {
    pub grid: &'a mut Grid,
    pub registry: &'a cellforge_materials::MaterialRegistry,
    pub heat_sources: &'a mut HeatSources,
    pub rng: &'a mut dyn SimRng,
    pub stats: &'a mut dyn SimStats,
}

struct Rule {
    predicate: Predicate,
    apply: Apply,
}

/// Ordered, additive collection of reaction rules. [`ReactionRegistry::default`]
/// seeds two built-ins; a host may register more without disturbing those.
pub struct ReactionRegistry {
    rules: Vec<Rule>,
}

impl Default for ReactionRegistry {
    fn default() -> Self {
        let mut registry = Self { rules: Vec::new() };
        registry.register(acid_metal_predicate, acid_metal_apply);
        registry.register(hydrogen_combustion_predicate, hydrogen_combustion_apply);
        registry
    }
}

impl ReactionRegistry {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn register(&mut self, predicate: Predicate, apply: Apply) {
        self.rules.push(Rule { predicate, apply });
    }

    /// Check the ordered pair `(ax, ay)`-`(bx, by)` against every rule, applying
    /// and stopping at the first match. Bounds work to at most one reaction per
    /// adjacency per tick.
    pub fn try_react(&self, ctx: &mut ReactionContext, ax: i32, ay: i32, bx: i32, by: i32) -> bool {
        let side_a = Side {
            material: ctx.registry.get_by_id(ctx.grid.get(ax, ay)),
            temp: ctx.grid.get_temp(ax, ay),
        };
        let side_b = Side {
            material: ctx.registry.get_by_id(ctx.grid.get(bx, by)),
            temp: ctx.grid.get_temp(bx, by),
        };
        for rule in &self.rules {
            if (rule.predicate)(side_a, side_b) {
                log::debug!(
                    "reaction between {} at ({ax}, {ay}) and {} at ({bx}, {by})",
                    side_a.material.name, side_b.material.name
                );
                (rule.apply)(ctx, ax, ay, bx, by);
                ctx.stats.record_reaction();
                return true;
            }
        }
        false
    }
}

fn is_acid(material: &Material) -> bool {
    material.ph.map(|ph| ph < 3.0).unwrap_or(false)
}

fn acid_metal_predicate(a: Side, b: Side) -> bool {
    (is_acid(a.material) && b.material.metal) || (is_acid(b.material) && a.material.metal)
}

/// With 5% probability, the acid side of the pair turns to hydrogen at +10 °C;
/// the metal is untouched.
fn acid_metal_apply(ctx: &mut ReactionContext, ax: i32, ay: i32, bx: i32, by: i32) {
    if !ctx.rng.gen_bool(0.05) {
        return;
    }
    let (acid_x, acid_y) = if is_acid(ctx.registry.get_by_id(ctx.grid.get(ax, ay))) {
        (ax, ay)
    } else {
        (bx, by)
    };
    let hydrogen_id = ctx.registry.id_of("hydrogen");
    let temp = ctx.grid.get_temp(acid_x, acid_y) + 10.0;
    ctx.grid.set_cell(acid_x, acid_y, hydrogen_id, temp, 0.0);
}

fn hydrogen_combustion_predicate(a: Side, b: Side) -> bool {
    let (hydrogen, other) = if a.material.name == "hydrogen" {
        (a, b)
    } else if b.material.name == "hydrogen" {
        (b, a)
    } else {
        return false;
    };
    other.material.supports_combustion && (hydrogen.temp >= 500.0 || other.temp >= 500.0)
}

/// With 30% probability, detonate at the hydrogen cell (radius 30px, power 100)
/// and leave steam at 100 °C.
fn hydrogen_combustion_apply(ctx: &mut ReactionContext, ax: i32, ay: i32, bx: i32, by: i32) {
    if !ctx.rng.gen_bool(0.3) {
        return;
    }
    let (hx, hy) = if ctx.registry.get_by_id(ctx.grid.get(ax, ay)).name == "hydrogen" {
        (ax, ay)
    } else {
        (bx, by)
    };
    explode(ctx.grid, ctx.registry, ctx.heat_sources, hx, hy, 30.0, 100.0, ctx.rng, ctx.stats);
    let steam_id = ctx.registry.id_of("steam");
    ctx.grid.set_cell(hx, hy, steam_id, 100.0, 0.0);
}
