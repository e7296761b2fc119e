//! Element definitions - the immutable description of every material
//!
//! A definition is looked up by its numeric id through the
//! [`ContentRegistry`](crate::domain::content::ContentRegistry). Cells only
//! store the id; everything physical (type, density, palette, rules) lives here.

use serde::Serialize;

/// Numeric element identifier stored in every cell
pub type ElementId = u16;

/// Reserved id for "no material"
pub const EL_EMPTY: ElementId = 0;

/// Rule-matching sentinel: matches any non-empty element, never a real element
pub const EL_ANY: ElementId = ElementId::MAX;

/// Temperature of a freshly created or cleared cell (°C)
pub const AMBIENT_TEMPERATURE: f32 = 20.0;

/// Movement rule set of an element
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementType {
    None,
    Liquid,
    Powder,
    Solid,
    Gas,
}

impl ElementType {
    /// Liquids and gases share the fluid movement rules
    #[inline]
    pub fn is_fluid(self) -> bool {
        matches!(self, ElementType::Liquid | ElementType::Gas)
    }

    /// Types that can be moved by gravity at all
    #[inline]
    pub fn is_mobile(self) -> bool {
        matches!(self, ElementType::Liquid | ElementType::Gas | ElementType::Powder)
    }
}

/// Threshold comparison of a temperature rule
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Comparison {
    Equal,
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
}

impl Comparison {
    #[inline]
    pub fn holds(self, value: f32, threshold: f32) -> bool {
        match self {
            Comparison::Equal => value == threshold,
            Comparison::Less => value < threshold,
            Comparison::LessOrEqual => value <= threshold,
            Comparison::Greater => value > threshold,
            Comparison::GreaterOrEqual => value >= threshold,
        }
    }
}

/// Declarative transformation rule, evaluated before gravity every tick
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Rule {
    /// Cell becomes `result` when its temperature satisfies `op threshold`
    Temperature {
        op: Comparison,
        threshold: f32,
        result: ElementId,
    },
    /// First matching neighbor becomes `neighbor_result`, the cell becomes `result`
    Neighbor {
        element: ElementId,
        neighbor_result: ElementId,
        result: ElementId,
    },
    /// First matching dissolvable neighbor is erased, the cell becomes `result`
    Dissolve {
        element: ElementId,
        result: ElementId,
    },
}

impl Rule {
    /// Ids this rule may write into the grid
    pub fn results(&self) -> impl Iterator<Item = ElementId> {
        let (a, b) = match *self {
            Rule::Temperature { result, .. } => (result, None),
            Rule::Neighbor { neighbor_result, result, .. } => (result, Some(neighbor_result)),
            Rule::Dissolve { result, .. } => (result, None),
        };
        std::iter::once(a).chain(b)
    }
}

/// Does `id` satisfy a rule target (exact id, or ANY for non-empty)?
#[inline]
pub fn matches_target(target: ElementId, id: ElementId) -> bool {
    if target == EL_ANY {
        id != EL_EMPTY
    } else {
        id == target
    }
}

/// Immutable physical definition of one material
#[derive(Clone, Debug, PartialEq)]
pub struct ElementDefinition {
    pub id: ElementId,
    /// Stable bundle key, e.g. `base:sand`
    pub key: String,
    pub name: String,
    pub element_type: ElementType,
    /// 0 = unaffected, sign = fall direction (+1 is down)
    pub gravity: i8,
    pub density: f32,
    /// Fraction of the neighbor-average temperature blended in per tick, 0..=1
    pub thermal_conductivity: f32,
    /// Horizontal search radius for diagonal landing spots
    pub dispersion: u8,
    pub dissolvable: bool,
    /// Nominal temperature used when spawned "with definition temperature"
    pub temperature: f32,
    /// ABGR packed palette, one entry picked at random on placement
    pub colors: Vec<u32>,
    pub rules: Vec<Rule>,
}

impl ElementDefinition {
    /// Inert definition with no palette and no rules
    pub fn new(id: ElementId, key: &str, name: &str, element_type: ElementType) -> Self {
        Self {
            id,
            key: key.to_string(),
            name: name.to_string(),
            element_type,
            gravity: 0,
            density: 0.0,
            thermal_conductivity: 0.0,
            dispersion: 0,
            dissolvable: false,
            temperature: AMBIENT_TEMPERATURE,
            colors: Vec::new(),
            rules: Vec::new(),
        }
    }

    pub fn with_gravity(mut self, gravity: i8) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }

    pub fn with_conductivity(mut self, conductivity: f32) -> Self {
        self.thermal_conductivity = conductivity;
        self
    }

    pub fn with_dispersion(mut self, dispersion: u8) -> Self {
        self.dispersion = dispersion;
        self
    }

    pub fn dissolvable(mut self) -> Self {
        self.dissolvable = true;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Palette given as 0xAARRGGBB, stored as ABGR
    pub fn with_colors(mut self, argb: &[u32]) -> Self {
        self.colors = argb.iter().map(|&c| argb_to_abgr(c)).collect();
        self
    }

    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Does gravity apply to this element at all?
    #[inline]
    pub fn falls(&self) -> bool {
        self.gravity != 0 && self.element_type.is_mobile()
    }
}

/// 0xAARRGGBB -> 0xAABBGGRR (little-endian RGBA bytes, ready for a canvas)
#[inline]
pub fn argb_to_abgr(argb: u32) -> u32 {
    let a = argb & 0xFF00_0000;
    let r = (argb >> 16) & 0xFF;
    let g = argb & 0x0000_FF00;
    let b = argb & 0xFF;
    a | (b << 16) | g | r
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_never_matches_empty() {
        assert!(!matches_target(EL_ANY, EL_EMPTY));
        assert!(matches_target(EL_ANY, 7));
        assert!(matches_target(EL_EMPTY, EL_EMPTY));
        assert!(!matches_target(3, 4));
    }

    #[test]
    fn comparison_operators() {
        assert!(Comparison::Equal.holds(100.0, 100.0));
        assert!(Comparison::Less.holds(-1.0, 0.0));
        assert!(!Comparison::Less.holds(0.0, 0.0));
        assert!(Comparison::LessOrEqual.holds(0.0, 0.0));
        assert!(Comparison::Greater.holds(101.0, 100.0));
        assert!(!Comparison::GreaterOrEqual.holds(99.9, 100.0));
    }

    #[test]
    fn argb_is_swizzled_to_abgr() {
        assert_eq!(argb_to_abgr(0xFF11_2233), 0xFF33_2211);
        assert_eq!(argb_to_abgr(0x8000_00FF), 0x80FF_0000);
    }

    #[test]
    fn solids_never_fall() {
        let stone = ElementDefinition::new(1, "base:stone", "Stone", ElementType::Solid).with_gravity(1);
        assert!(!stone.falls());
        let sand = ElementDefinition::new(2, "base:sand", "Sand", ElementType::Powder).with_gravity(1);
        assert!(sand.falls());
    }
}
