//! The default material catalogue.
//!
//! Registers air plus twenty-six materials with physically plausible property
//! values, in the same order of magnitude as reference material tables for a
//! falling-sand simulator. A host is free to call [`MaterialRegistry::material`]
//! afterwards to add more or override any of these.

use crate::material::{Material, MaterialState};
use crate::registry::MaterialRegistry;

/// Populate `registry` with the default catalogue. Safe to call more than once;
/// every entry here updates in place rather than duplicating.
pub fn register_default_catalogue(registry: &mut MaterialRegistry) {
    registry.material(
        "air",
        Material {
            state: MaterialState::Gas,
            density: -0.001,
            temperature: 20.0,
            thermal_conductivity: 0.3,
            specific_heat: 1.0,
            color: vec![[0, 0, 0, 0]],
            hardness: 0.0,
            supports_combustion: true,
            ..Material::default()
        },
    );

    registry.material(
        "water",
        Material {
            state: MaterialState::Liquid,
            density: 1000.0,
            temperature: 20.0,
            melting_point: Some(0.0),
            boiling_point: Some(100.0),
            gas_form: Some("steam".to_string()),
            solid_form: Some("ice".to_string()),
            thermal_conductivity: 0.6,
            specific_heat: 4.18,
            viscosity: 0.1,
            color: vec![[64, 164, 223, 200], [54, 150, 210, 200]],
            hardness: 0.0,
            ..Material::default()
        },
    );

    registry.material(
        "ice",
        Material {
            state: MaterialState::Solid,
            density: 917.0,
            temperature: -5.0,
            melting_point: Some(0.0),
            liquid_form: Some("water".to_string()),
            thermal_conductivity: 0.4,
            specific_heat: 2.1,
            color: vec![[200, 230, 250, 230]],
            hardness: 2.0,
            ..Material::default()
        },
    );

    registry.material(
        "steam",
        Material {
            state: MaterialState::Gas,
            density: -0.6,
            temperature: 110.0,
            boiling_point: Some(100.0),
            liquid_form: Some("water".to_string()),
            thermal_conductivity: 0.2,
            specific_heat: 2.0,
            color: vec![[230, 230, 230, 120]],
            hardness: 0.0,
            ..Material::default()
        },
    );

    registry.material(
        "sand",
        Material {
            state: MaterialState::Powder,
            density: 1600.0,
            temperature: 20.0,
            melting_point: Some(1700.0),
            liquid_form: Some("glass".to_string()),
            thermal_conductivity: 0.3,
            specific_heat: 0.83,
            friction: 0.3,
            color: vec![[194, 178, 128, 255], [210, 190, 140, 255]],
            hardness: 2.0,
            ..Material::default()
        },
    );

    registry.material(
        "glass",
        Material {
            state: MaterialState::Solid,
            density: 2500.0,
            temperature: 1700.0,
            solid_form: Some("sand".to_string()),
            thermal_conductivity: 0.3,
            specific_heat: 0.84,
            color: vec![[210, 235, 235, 140]],
            hardness: 4.0,
            ..Material::default()
        },
    );

    registry.material(
        "stone",
        Material {
            state: MaterialState::Solid,
            density: 2700.0,
            temperature: 20.0,
            melting_point: Some(1200.0),
            liquid_form: Some("lava".to_string()),
            thermal_conductivity: 0.4,
            specific_heat: 0.84,
            immovable: true,
            color: vec![[128, 128, 128, 255], [118, 118, 118, 255]],
            hardness: 5.0,
            ..Material::default()
        },
    );

    registry.material(
        "lava",
        Material {
            state: MaterialState::Liquid,
            density: 3100.0,
            temperature: 1300.0,
            melting_point: Some(900.0),
            solid_form: Some("obsidian".to_string()),
            thermal_conductivity: 0.9,
            specific_heat: 1.5,
            viscosity: 0.8,
            heat_emission: 40.0,
            color: vec![[255, 80, 0, 255], [255, 140, 0, 255]],
            hardness: 0.0,
            ..Material::default()
        },
    );

    registry.material(
        "obsidian",
        Material {
            state: MaterialState::Solid,
            density: 2600.0,
            temperature: 400.0,
            liquid_form: Some("lava".to_string()),
            melting_point: Some(900.0),
            thermal_conductivity: 0.5,
            specific_heat: 0.84,
            immovable: true,
            color: vec![[20, 16, 22, 255]],
            hardness: 6.0,
            ..Material::default()
        },
    );

    registry.material(
        "dirt",
        Material {
            state: MaterialState::Powder,
            density: 1300.0,
            temperature: 20.0,
            thermal_conductivity: 0.3,
            specific_heat: 0.8,
            friction: 0.5,
            color: vec![[101, 67, 33, 255]],
            hardness: 1.0,
            ..Material::default()
        },
    );

    registry.material(
        "mud",
        Material {
            state: MaterialState::Liquid,
            density: 1400.0,
            temperature: 20.0,
            boiling_point: Some(100.0),
            gas_form: Some("steam".to_string()),
            thermal_conductivity: 0.4,
            specific_heat: 1.5,
            viscosity: 0.9,
            color: vec![[80, 55, 30, 255]],
            hardness: 0.0,
            ..Material::default()
        },
    );

    registry.material(
        "clay",
        Material {
            state: MaterialState::Solid,
            density: 1900.0,
            temperature: 20.0,
            melting_point: Some(1000.0),
            liquid_form: Some("lava".to_string()),
            thermal_conductivity: 0.3,
            specific_heat: 0.9,
            color: vec![[150, 110, 90, 255]],
            hardness: 2.0,
            ..Material::default()
        },
    );

    registry.material(
        "iron",
        Material {
            state: MaterialState::Solid,
            density: 7870.0,
            temperature: 20.0,
            melting_point: Some(1538.0),
            liquid_form: Some("lava".to_string()),
            thermal_conductivity: 0.9,
            specific_heat: 0.45,
            electric_conductivity: 0.9,
            metal: true,
            color: vec![[180, 180, 190, 255]],
            hardness: 6.0,
            ..Material::default()
        },
    );

    registry.material(
        "wood",
        Material {
            state: MaterialState::Solid,
            density: 600.0,
            temperature: 20.0,
            ignition_point: Some(300.0),
            flammability: 0.6,
            thermal_conductivity: 0.15,
            specific_heat: 1.7,
            combustion_products: Some("ash".to_string()),
            combustion_energy: 15.0,
            color: vec![[139, 90, 43, 255], [120, 78, 38, 255]],
            hardness: 2.0,
            ..Material::default()
        },
    );

    registry.material(
        "coal",
        Material {
            state: MaterialState::Solid,
            density: 1350.0,
            temperature: 20.0,
            ignition_point: Some(400.0),
            flammability: 0.8,
            thermal_conductivity: 0.2,
            specific_heat: 1.0,
            combustion_products: Some("ash".to_string()),
            combustion_energy: 24.0,
            color: vec![[30, 30, 30, 255]],
            hardness: 3.0,
            ..Material::default()
        },
    );

    registry.material(
        "oil",
        Material {
            state: MaterialState::Liquid,
            density: 900.0,
            temperature: 20.0,
            ignition_point: Some(250.0),
            flammability: 0.9,
            thermal_conductivity: 0.15,
            specific_heat: 2.0,
            viscosity: 0.3,
            combustion_products: Some("smoke".to_string()),
            combustion_energy: 42.0,
            color: vec![[50, 40, 30, 255]],
            hardness: 0.0,
            ..Material::default()
        },
    );

    registry.material(
        "gunpowder",
        Material {
            state: MaterialState::Powder,
            density: 1700.0,
            temperature: 20.0,
            ignition_point: Some(170.0),
            flammability: 1.0,
            thermal_conductivity: 0.2,
            specific_heat: 1.0,
            friction: 0.2,
            combustion_products: Some("smoke".to_string()),
            combustion_energy: 3.0,
            explosive: true,
            explosion_radius: 18.0,
            explosion_power: 60.0,
            color: vec![[60, 60, 55, 255]],
            hardness: 1.0,
            ..Material::default()
        },
    );

    registry.material(
        "fire",
        Material {
            state: MaterialState::Gas,
            density: -0.5,
            temperature: 800.0,
            lifetime: Some((0.2, 0.6)),
            produces: Some("smoke".to_string()),
            thermal_conductivity: 0.8,
            specific_heat: 1.0,
            heat_emission: 60.0,
            color: vec![[255, 120, 0, 255], [255, 200, 0, 255]],
            hardness: 0.0,
            ..Material::default()
        },
    );

    registry.material(
        "smoke",
        Material {
            state: MaterialState::Gas,
            density: -0.2,
            temperature: 80.0,
            lifetime: Some((1.5, 3.0)),
            produces: None,
            thermal_conductivity: 0.2,
            specific_heat: 1.0,
            color: vec![[80, 80, 80, 160]],
            hardness: 0.0,
            ..Material::default()
        },
    );

    registry.material(
        "oxygen",
        Material {
            state: MaterialState::Gas,
            density: -0.05,
            temperature: 20.0,
            thermal_conductivity: 0.1,
            specific_heat: 0.9,
            supports_combustion: true,
            color: vec![[220, 235, 255, 40]],
            hardness: 0.0,
            ..Material::default()
        },
    );

    registry.material(
        "hydrogen",
        Material {
            state: MaterialState::Gas,
            density: -0.9,
            temperature: 20.0,
            ignition_point: Some(500.0),
            flammability: 1.0,
            thermal_conductivity: 0.7,
            specific_heat: 14.3,
            combustion_products: Some("steam".to_string()),
            combustion_energy: 120.0,
            explosive: true,
            explosion_radius: 30.0,
            explosion_power: 100.0,
            color: vec![[230, 245, 255, 40]],
            hardness: 0.0,
            ..Material::default()
        },
    );

    registry.material(
        "methane",
        Material {
            state: MaterialState::Gas,
            density: -0.45,
            temperature: 20.0,
            ignition_point: Some(580.0),
            flammability: 0.9,
            thermal_conductivity: 0.3,
            specific_heat: 2.2,
            combustion_products: Some("co2".to_string()),
            combustion_energy: 55.0,
            color: vec![[210, 230, 210, 40]],
            hardness: 0.0,
            ..Material::default()
        },
    );

    registry.material(
        "co2",
        Material {
            state: MaterialState::Gas,
            density: 0.4,
            temperature: 20.0,
            thermal_conductivity: 0.1,
            specific_heat: 0.84,
            color: vec![[200, 200, 200, 30]],
            hardness: 0.0,
            ..Material::default()
        },
    );

    registry.material(
        "acid",
        Material {
            state: MaterialState::Liquid,
            density: 1100.0,
            temperature: 20.0,
            boiling_point: Some(120.0),
            gas_form: Some("smoke".to_string()),
            thermal_conductivity: 0.4,
            specific_heat: 2.5,
            viscosity: 0.15,
            ph: Some(1.0),
            reactivity: 0.8,
            color: vec![[140, 230, 40, 220]],
            hardness: 0.0,
            ..Material::default()
        },
    );

    registry.material(
        "salt",
        Material {
            state: MaterialState::Powder,
            density: 2160.0,
            temperature: 20.0,
            melting_point: Some(801.0),
            liquid_form: Some("lava".to_string()),
            thermal_conductivity: 0.3,
            specific_heat: 0.88,
            friction: 0.25,
            solubility: Some("water".to_string()),
            color: vec![[245, 245, 245, 255]],
            hardness: 1.5,
            ..Material::default()
        },
    );

    registry.material(
        "sulfur",
        Material {
            state: MaterialState::Powder,
            density: 2070.0,
            temperature: 20.0,
            melting_point: Some(115.0),
            ignition_point: Some(450.0),
            flammability: 0.5,
            liquid_form: Some("lava".to_string()),
            thermal_conductivity: 0.2,
            specific_heat: 0.71,
            friction: 0.4,
            combustion_products: Some("co2".to_string()),
            combustion_energy: 9.0,
            color: vec![[220, 200, 40, 255]],
            hardness: 1.0,
            ..Material::default()
        },
    );

    registry.material(
        "ash",
        Material {
            state: MaterialState::Powder,
            density: 700.0,
            temperature: 20.0,
            thermal_conductivity: 0.2,
            specific_heat: 0.9,
            friction: 0.6,
            color: vec![[90, 90, 90, 255]],
            hardness: 0.5,
            ..Material::default()
        },
    );
}
