//! Name ↔ id registry over [`Material`] records.

use std::collections::HashMap;

use crate::material::{Material, MaterialState};

/// Material id reserved for empty space. Every grid cell that has never been
/// written to, or whose material has decayed without a `produces` target, holds
/// this id.
pub const AIR_ID: u8 = 0;

/// Registry of all known materials, indexed by a small stable id.
///
/// Ids are assigned on first registration in the order names are seen, starting
/// with `air` at id 0. Re-registering an existing name updates its properties in
/// place and keeps the original id.
pub struct MaterialRegistry {
    materials: Vec<Material>,
    ids_by_name: HashMap<String, u8>,
}

impl Default for MaterialRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl MaterialRegistry {
    /// Empty registry except for the mandatory `air` entry at id 0.
    pub fn new() -> Self {
        let mut registry = Self {
            materials: Vec::new(),
            ids_by_name: HashMap::new(),
        };
        registry.material(
            "air",
            Material {
                name: "air".to_string(),
                state: MaterialState::Gas,
                density: -0.001,
                color: vec![[0, 0, 0, 0]],
                hardness: 0.0,
                supports_combustion: true,
                ..Default::default()
            },
        );
        registry
    }

    /// Registry with no materials at all, not even air. Only useful for testing
    /// the id-assignment contract itself; [`MaterialRegistry::new`] is what a real
    /// host should use.
    pub fn empty() -> Self {
        Self {
            materials: Vec::new(),
            ids_by_name: HashMap::new(),
        }
    }

    /// Register a new material or update an existing one in place, preserving its
    /// id. Returns the assigned id.
    pub fn material(&mut self, name: &str, mut props: Material) -> u8 {
        assert!(!props.color.is_empty(), "material color list must be non-empty");
        props.name = name.to_string();

        if let Some(&id) = self.ids_by_name.get(name) {
            log::debug!("material '{name}' updated in place at id {id}");
            self.materials[id as usize] = props;
            return id;
        }

        let id = self.materials.len() as u8;
        log::debug!("material '{name}' registered at id {id}");
        self.materials.push(props);
        self.ids_by_name.insert(name.to_string(), id);
        id
    }

    /// Look up a material by id. Unknown ids (including an out-of-range id found
    /// in a corrupted cell) resolve to air rather than panicking, so movement and
    /// thermal passes stay robust to it.
    pub fn get_by_id(&self, id: u8) -> &Material {
        self.materials.get(id as usize).unwrap_or_else(|| {
            log::warn!("unknown material id {id} resolved to air");
            &self.materials[AIR_ID as usize]
        })
    }

    /// Resolve a material name to its id, or `AIR_ID` if unknown.
    pub fn id_of(&self, name: &str) -> u8 {
        self.ids_by_name.get(name).copied().unwrap_or(AIR_ID)
    }

    /// Resolve an optional transition-target name (`solid_form`/`produces`/…) to an
    /// id, falling back to air if the name is absent or unregistered.
    pub fn resolve(&self, name: Option<&str>) -> u8 {
        name.map(|n| self.id_of(n)).unwrap_or(AIR_ID)
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn air_is_always_id_zero() {
        let registry = MaterialRegistry::new();
        assert_eq!(registry.id_of("air"), AIR_ID);
        assert_eq!(registry.get_by_id(AIR_ID).name, "air");
    }

    #[test]
    fn unknown_id_resolves_to_air() {
        let registry = MaterialRegistry::new();
        assert_eq!(registry.get_by_id(200).name, "air");
    }

    #[test]
    fn unknown_name_resolves_to_air_id() {
        let registry = MaterialRegistry::new();
        assert_eq!(registry.id_of("unobtainium"), AIR_ID);
    }

    #[test]
    fn re_registering_preserves_id() {
        let mut registry = MaterialRegistry::new();
        let id = registry.material(
            "sand",
            Material {
                density: 1600.0,
                ..Default::default()
            },
        );
        let id_again = registry.material(
            "sand",
            Material {
                density: 1601.0,
                ..Default::default()
            },
        );
        assert_eq!(id, id_again);
        assert_eq!(registry.get_by_id(id).density, 1601.0);
    }

    #[test]
    fn first_registration_order_assigns_ids() {
        let mut registry = MaterialRegistry::new();
        let sand_id = registry.material("sand", Material::default());
        let water_id = registry.material("water", Material::default());
        assert_ne!(sand_id, water_id);
        assert_eq!(registry.id_of("sand"), sand_id);
        assert_eq!(registry.id_of("water"), water_id);
    }
}
