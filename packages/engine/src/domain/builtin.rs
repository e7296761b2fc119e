//! Built-in material set
//!
//! The base pack shipped with the game. Hosts that load their own bundle
//! (see `definitions/elements.json`) never touch this table.

use super::elements::{
    Comparison, ElementDefinition, ElementId, ElementType, Rule, EL_ANY, EL_EMPTY,
};

pub const EL_STONE: ElementId = 1;
pub const EL_SAND: ElementId = 2;
pub const EL_WATER: ElementId = 3;
pub const EL_ICE: ElementId = 4;
pub const EL_STEAM: ElementId = 5;
pub const EL_LAVA: ElementId = 6;
pub const EL_WOOD: ElementId = 7;
pub const EL_FIRE: ElementId = 8;
pub const EL_SMOKE: ElementId = 9;
pub const EL_ASH: ElementId = 10;
pub const EL_ACID: ElementId = 11;
pub const EL_OIL: ElementId = 12;
pub const EL_GLASS: ElementId = 13;

pub const BUILTIN_ELEMENT_COUNT: usize = 14;

/// Base pack definitions, ordered by id
pub fn builtin_definitions() -> Vec<ElementDefinition> {
    vec![
        ElementDefinition::new(EL_EMPTY, "base:empty", "Empty", ElementType::None)
            .with_conductivity(0.05),
        ElementDefinition::new(EL_STONE, "base:stone", "Stone", ElementType::Solid)
            .with_density(2.5)
            .with_conductivity(0.3)
            .with_colors(&[0xFF80_8080, 0xFF76_7676, 0xFF6C_6C6C, 0xFF62_6262])
            .with_rule(Rule::Temperature {
                op: Comparison::GreaterOrEqual,
                threshold: 1000.0,
                result: EL_LAVA,
            }),
        ElementDefinition::new(EL_SAND, "base:sand", "Sand", ElementType::Powder)
            .with_gravity(1)
            .with_density(1.6)
            .with_conductivity(0.2)
            .with_dispersion(1)
            .dissolvable()
            .with_colors(&[0xFFE6_C88C, 0xFFDC_BE82, 0xFFD2_B478, 0xFFC8_AA6E])
            .with_rule(Rule::Temperature {
                op: Comparison::GreaterOrEqual,
                threshold: 1500.0,
                result: EL_GLASS,
            }),
        ElementDefinition::new(EL_WATER, "base:water", "Water", ElementType::Liquid)
            .with_gravity(1)
            .with_density(1.0)
            .with_conductivity(0.5)
            .with_dispersion(3)
            .with_colors(&[0xFF1E_64DC, 0xFF22_6AE0, 0xFF1A_5ED6])
            .with_rule(Rule::Temperature {
                op: Comparison::GreaterOrEqual,
                threshold: 100.0,
                result: EL_STEAM,
            })
            .with_rule(Rule::Temperature {
                op: Comparison::LessOrEqual,
                threshold: 0.0,
                result: EL_ICE,
            }),
        ElementDefinition::new(EL_ICE, "base:ice", "Ice", ElementType::Solid)
            .with_density(0.9)
            .with_conductivity(0.4)
            .with_temperature(-10.0)
            .with_colors(&[0xFFB4_DCFF, 0xFFAA_D2FA, 0xFFC8_E6FF])
            .with_rule(Rule::Temperature {
                op: Comparison::Greater,
                threshold: 0.0,
                result: EL_WATER,
            }),
        ElementDefinition::new(EL_STEAM, "base:steam", "Steam", ElementType::Gas)
            .with_gravity(-1)
            .with_density(0.3)
            .with_conductivity(0.3)
            .with_dispersion(2)
            .with_temperature(110.0)
            .with_colors(&[0xC8DC_DCE6, 0xB4D2_D2DC])
            .with_rule(Rule::Temperature {
                op: Comparison::Less,
                threshold: 90.0,
                result: EL_WATER,
            }),
        ElementDefinition::new(EL_LAVA, "base:lava", "Lava", ElementType::Liquid)
            .with_gravity(1)
            .with_density(3.0)
            .with_conductivity(0.6)
            .with_dispersion(1)
            .with_temperature(1200.0)
            .with_colors(&[0xFFFF_5000, 0xFFFF_6E00, 0xFFE6_3C00])
            .with_rule(Rule::Neighbor {
                element: EL_WATER,
                neighbor_result: EL_STEAM,
                result: EL_STONE,
            })
            .with_rule(Rule::Temperature {
                op: Comparison::Less,
                threshold: 800.0,
                result: EL_STONE,
            }),
        ElementDefinition::new(EL_WOOD, "base:wood", "Wood", ElementType::Solid)
            .with_density(0.7)
            .with_conductivity(0.1)
            .dissolvable()
            .with_colors(&[0xFF8B_5A2B, 0xFF7D_5026, 0xFF96_6432])
            .with_rule(Rule::Neighbor {
                element: EL_FIRE,
                neighbor_result: EL_FIRE,
                result: EL_FIRE,
            })
            .with_rule(Rule::Temperature {
                op: Comparison::Greater,
                threshold: 300.0,
                result: EL_FIRE,
            }),
        ElementDefinition::new(EL_FIRE, "base:fire", "Fire", ElementType::Gas)
            .with_gravity(-1)
            .with_density(0.1)
            .with_conductivity(0.3)
            .with_dispersion(1)
            .with_temperature(800.0)
            .with_colors(&[0xFFFF_A000, 0xFFFF_7800, 0xFFFF_C828])
            .with_rule(Rule::Temperature {
                op: Comparison::LessOrEqual,
                threshold: 350.0,
                result: EL_SMOKE,
            }),
        ElementDefinition::new(EL_SMOKE, "base:smoke", "Smoke", ElementType::Gas)
            .with_gravity(-1)
            .with_density(0.05)
            .with_conductivity(0.2)
            .with_dispersion(2)
            .with_temperature(60.0)
            .with_colors(&[0xA050_5050, 0x9046_4646, 0xA05A_5A5A])
            .with_rule(Rule::Temperature {
                op: Comparison::Less,
                threshold: 30.0,
                result: EL_EMPTY,
            }),
        ElementDefinition::new(EL_ASH, "base:ash", "Ash", ElementType::Powder)
            .with_gravity(1)
            .with_density(0.5)
            .with_conductivity(0.1)
            .with_dispersion(1)
            .dissolvable()
            .with_colors(&[0xFF5A_5A5A, 0xFF64_6464, 0xFF50_5050]),
        ElementDefinition::new(EL_ACID, "base:acid", "Acid", ElementType::Liquid)
            .with_gravity(1)
            .with_density(1.2)
            .with_conductivity(0.4)
            .with_dispersion(2)
            .with_colors(&[0xFF7C_FC00, 0xFF6E_E600, 0xFF8C_FF14])
            .with_rule(Rule::Dissolve {
                element: EL_ANY,
                result: EL_EMPTY,
            }),
        ElementDefinition::new(EL_OIL, "base:oil", "Oil", ElementType::Liquid)
            .with_gravity(1)
            .with_density(0.8)
            .with_conductivity(0.3)
            .with_dispersion(4)
            .dissolvable()
            .with_colors(&[0xFF3C_2814, 0xFF46_3219, 0xFF32_1E0F])
            .with_rule(Rule::Neighbor {
                element: EL_FIRE,
                neighbor_result: EL_FIRE,
                result: EL_FIRE,
            }),
        ElementDefinition::new(EL_GLASS, "base:glass", "Glass", ElementType::Solid)
            .with_density(2.4)
            .with_conductivity(0.2)
            .with_colors(&[0xB4C8_F0FF, 0xA0BE_E6F5]),
    ]
}
