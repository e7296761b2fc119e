use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::builtin::builtin_definitions;
use super::elements::{
    argb_to_abgr, Comparison, ElementDefinition, ElementId, ElementType, Rule, EL_ANY, EL_EMPTY,
};

/// Material catalog: element id -> definition, immutable once built
#[derive(Clone, Debug)]
pub struct ContentRegistry {
    elements: Vec<Option<ElementDefinition>>,
    element_key_to_id: HashMap<String, ElementId>,
    max_dispersion: u8,
}

impl ContentRegistry {
    /// Base pack shipped with the engine
    pub fn builtin() -> Self {
        // The base pack is authored to pass validation.
        match Self::from_definitions(builtin_definitions()) {
            Ok(registry) => registry,
            Err(e) => {
                log::error!("builtin content rejected: {}", e);
                Self::empty_only()
            }
        }
    }

    pub fn from_bundle_json(json: &str) -> Result<Self, String> {
        let bundle: BundleRoot = serde_json::from_str(json).map_err(|e| e.to_string())?;
        Self::from_bundle(bundle)
    }

    /// Build from fully-resolved definitions (ids need not be contiguous)
    pub fn from_definitions(definitions: Vec<ElementDefinition>) -> Result<Self, String> {
        let mut max_id: ElementId = 0;
        for def in definitions.iter() {
            if def.id == EL_ANY {
                return Err(format!(
                    "element {} uses the reserved 'any' id {}",
                    def.key, EL_ANY
                ));
            }
            max_id = max_id.max(def.id);
        }

        let len = (max_id as usize) + 1;
        let mut elements: Vec<Option<ElementDefinition>> = vec![None; len];
        let mut element_key_to_id = HashMap::new();

        for mut def in definitions.into_iter() {
            let idx = def.id as usize;
            if elements[idx].is_some() {
                return Err(format!("duplicate element id: {}", idx));
            }
            if def.id != EL_EMPTY && def.colors.is_empty() {
                return Err(format!("element {} ({}) has an empty palette", def.id, def.key));
            }
            if !def.density.is_finite() || !def.temperature.is_finite() {
                return Err(format!("element {} ({}) has a non-finite constant", def.id, def.key));
            }
            def.thermal_conductivity = if def.thermal_conductivity.is_finite() {
                def.thermal_conductivity.clamp(0.0, 1.0)
            } else {
                0.0
            };

            if !def.key.is_empty() {
                if let Some(existing) = element_key_to_id.insert(def.key.clone(), def.id) {
                    return Err(format!(
                        "duplicate element key {}: ids {} and {}",
                        def.key, existing, def.id
                    ));
                }
            }
            elements[idx] = Some(def);
        }

        match elements.get(EL_EMPTY as usize).and_then(|d| d.as_ref()) {
            None => return Err("missing element id 0 (empty)".to_string()),
            Some(empty) => {
                if empty.density != 0.0 || empty.gravity != 0 || !empty.rules.is_empty() {
                    return Err(
                        "element id 0 (empty) must have density 0, gravity 0 and no rules"
                            .to_string(),
                    );
                }
            }
        }

        for def in elements.iter().flatten() {
            for rule in def.rules.iter() {
                for result in rule.results() {
                    let known = elements
                        .get(result as usize)
                        .map_or(false, |d| d.is_some());
                    if !known {
                        return Err(format!(
                            "element {} ({}) has a rule producing unknown id {}",
                            def.id, def.key, result
                        ));
                    }
                }
            }
        }

        let max_dispersion = elements
            .iter()
            .flatten()
            .map(|d| d.dispersion)
            .max()
            .unwrap_or(0);

        let registry = Self {
            elements,
            element_key_to_id,
            max_dispersion,
        };
        log::debug!(
            "content registry built: {} elements, max dispersion {}",
            registry.element_count(),
            registry.max_dispersion
        );
        Ok(registry)
    }

    fn empty_only() -> Self {
        let empty = ElementDefinition::new(EL_EMPTY, "base:empty", "Empty", ElementType::None);
        let mut element_key_to_id = HashMap::new();
        element_key_to_id.insert(empty.key.clone(), EL_EMPTY);
        Self {
            elements: vec![Some(empty)],
            element_key_to_id,
            max_dispersion: 0,
        }
    }

    /// Number of defined elements (EMPTY included)
    pub fn element_count(&self) -> usize {
        self.elements.iter().flatten().count()
    }

    pub fn is_valid_element_id(&self, id: ElementId) -> bool {
        self.definition_of(id).is_some()
    }

    #[inline]
    pub fn definition_of(&self, id: ElementId) -> Option<&ElementDefinition> {
        self.elements.get(id as usize)?.as_ref()
    }

    pub fn id_by_key(&self, key: &str) -> Option<ElementId> {
        self.element_key_to_id.get(key).copied()
    }

    pub fn name_of(&self, id: ElementId) -> Option<&str> {
        self.definition_of(id).map(|d| d.name.as_str())
    }

    /// Largest dispersion of any element; bounds the horizontal reach of a cell update
    pub fn max_dispersion(&self) -> u8 {
        self.max_dispersion
    }

    pub fn definitions(&self) -> impl Iterator<Item = &ElementDefinition> {
        self.elements.iter().flatten()
    }

    pub fn manifest_json(&self) -> String {
        let elements: Vec<ContentManifestElement> = self
            .definitions()
            .map(|d| ContentManifestElement {
                id: d.id,
                key: &d.key,
                name: &d.name,
                element_type: d.element_type,
                color: d.colors.first().copied().unwrap_or(0),
                hidden: d.id == EL_EMPTY,
            })
            .collect();
        let out = ContentManifest {
            format_version: 1,
            elements,
        };
        serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
    }

    fn from_bundle(bundle: BundleRoot) -> Result<Self, String> {
        let mut definitions = Vec::with_capacity(bundle.elements.len());
        for el in bundle.elements.into_iter() {
            let element_type = element_type_from_str(&el.element_type)?;
            let mut rules = Vec::with_capacity(el.rules.len());
            for r in el.rules.into_iter() {
                rules.push(rule_from_bundle(r)?);
            }
            let gravity = i8::try_from(el.gravity)
                .map_err(|_| format!("element {} has out-of-range gravity {}", el.key, el.gravity))?;

            definitions.push(ElementDefinition {
                id: el.id,
                name: el.name.unwrap_or_else(|| el.key.clone()),
                key: el.key,
                element_type,
                gravity,
                density: el.density as f32,
                thermal_conductivity: el.thermal_conductivity as f32,
                dispersion: el.dispersion,
                dissolvable: el.dissolvable,
                temperature: el.temperature as f32,
                colors: el.colors.into_iter().map(argb_to_abgr).collect(),
                rules,
            });
        }
        Self::from_definitions(definitions)
    }
}

impl Default for ContentRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ContentManifest<'a> {
    format_version: u32,
    elements: Vec<ContentManifestElement<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ContentManifestElement<'a> {
    id: ElementId,
    key: &'a str,
    name: &'a str,
    #[serde(rename = "type")]
    element_type: ElementType,
    color: u32,
    hidden: bool,
}

fn element_type_from_str(s: &str) -> Result<ElementType, String> {
    match s {
        "none" => Ok(ElementType::None),
        "liquid" => Ok(ElementType::Liquid),
        "powder" => Ok(ElementType::Powder),
        "solid" => Ok(ElementType::Solid),
        "gas" => Ok(ElementType::Gas),
        _ => Err(format!("unknown element type: {}", s)),
    }
}

fn comparison_from_str(s: &str) -> Result<Comparison, String> {
    match s {
        "eq" => Ok(Comparison::Equal),
        "lt" => Ok(Comparison::Less),
        "le" => Ok(Comparison::LessOrEqual),
        "gt" => Ok(Comparison::Greater),
        "ge" => Ok(Comparison::GreaterOrEqual),
        _ => Err(format!("unknown comparison: {}", s)),
    }
}

fn rule_from_bundle(rule: BundleRule) -> Result<Rule, String> {
    match rule {
        BundleRule::Temperature { op, threshold, result } => Ok(Rule::Temperature {
            op: comparison_from_str(&op)?,
            threshold: threshold as f32,
            result,
        }),
        BundleRule::Neighbor {
            element,
            neighbor_result,
            result,
        } => Ok(Rule::Neighbor {
            element,
            neighbor_result,
            result,
        }),
        BundleRule::Dissolve { element, result } => Ok(Rule::Dissolve { element, result }),
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BundleRoot {
    elements: Vec<BundleElement>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BundleElement {
    id: u16,
    key: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(rename = "type")]
    element_type: String,
    #[serde(default)]
    gravity: i32,
    #[serde(default)]
    density: f64,
    #[serde(default)]
    thermal_conductivity: f64,
    #[serde(default)]
    dispersion: u8,
    #[serde(default)]
    dissolvable: bool,
    #[serde(default = "default_temperature")]
    temperature: f64,
    #[serde(default)]
    colors: Vec<u32>,
    #[serde(default)]
    rules: Vec<BundleRule>,
}

fn default_temperature() -> f64 {
    super::elements::AMBIENT_TEMPERATURE as f64
}

#[derive(Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
enum BundleRule {
    Temperature {
        op: String,
        threshold: f64,
        result: u16,
    },
    Neighbor {
        element: u16,
        neighbor_result: u16,
        result: u16,
    },
    Dissolve {
        element: u16,
        result: u16,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::builtin::{BUILTIN_ELEMENT_COUNT, EL_SAND, EL_WATER};

    const MINIMAL: &str = r#"{
        "elements": [
            { "id": 0, "key": "base:empty", "type": "none", "thermalConductivity": 0.1 },
            { "id": 1, "key": "base:sand", "name": "Sand", "type": "powder", "gravity": 1,
              "density": 1.5, "dispersion": 1, "dissolvable": true, "colors": [4294901760],
              "rules": [ { "kind": "temperature", "op": "ge", "threshold": 1500, "result": 2 } ] },
            { "id": 2, "key": "base:glass", "type": "solid", "density": 2.0, "colors": [4278190335],
              "rules": [ { "kind": "neighbor", "element": 65535, "neighborResult": 0, "result": 2 },
                         { "kind": "dissolve", "element": 1, "result": 0 } ] }
        ]
    }"#;

    #[test]
    fn builtin_pack_is_valid() {
        let registry = ContentRegistry::builtin();
        assert_eq!(registry.element_count(), BUILTIN_ELEMENT_COUNT);
        assert_eq!(registry.id_by_key("base:sand"), Some(EL_SAND));
        assert_eq!(registry.name_of(EL_WATER), Some("Water"));
        assert_eq!(registry.max_dispersion(), 4);
    }

    #[test]
    fn bundle_json_parses_rules_and_colors() {
        let registry = ContentRegistry::from_bundle_json(MINIMAL).expect("bundle should parse");
        assert_eq!(registry.element_count(), 3);

        let sand = registry.definition_of(1).expect("sand");
        assert_eq!(sand.element_type, ElementType::Powder);
        assert_eq!(sand.colors, vec![0xFF00_00FF]);
        assert_eq!(
            sand.rules,
            vec![Rule::Temperature {
                op: Comparison::GreaterOrEqual,
                threshold: 1500.0,
                result: 2
            }]
        );

        let glass = registry.definition_of(2).expect("glass");
        assert_eq!(glass.name, "base:glass");
        assert_eq!(glass.rules.len(), 2);
        assert!(matches!(glass.rules[0], Rule::Neighbor { element: EL_ANY, .. }));
    }

    #[test]
    fn missing_empty_is_rejected() {
        let defs = vec![ElementDefinition::new(1, "base:stone", "Stone", ElementType::Solid)
            .with_colors(&[0xFF00_0000])];
        let err = ContentRegistry::from_definitions(defs).unwrap_err();
        assert!(err.contains("empty"));
    }

    #[test]
    fn active_empty_is_rejected() {
        let defs = vec![
            ElementDefinition::new(EL_EMPTY, "base:empty", "Empty", ElementType::None).with_gravity(1),
        ];
        assert!(ContentRegistry::from_definitions(defs).is_err());
    }

    #[test]
    fn any_id_cannot_be_a_real_element() {
        let defs = vec![
            ElementDefinition::new(EL_EMPTY, "base:empty", "Empty", ElementType::None),
            ElementDefinition::new(EL_ANY, "base:any", "Any", ElementType::Solid)
                .with_colors(&[0xFF00_0000]),
        ];
        assert!(ContentRegistry::from_definitions(defs).is_err());
    }

    #[test]
    fn unknown_rule_result_is_rejected() {
        let defs = vec![
            ElementDefinition::new(EL_EMPTY, "base:empty", "Empty", ElementType::None),
            ElementDefinition::new(1, "base:stone", "Stone", ElementType::Solid)
                .with_colors(&[0xFF00_0000])
                .with_rule(Rule::Temperature {
                    op: Comparison::Greater,
                    threshold: 0.0,
                    result: 9,
                }),
        ];
        assert!(ContentRegistry::from_definitions(defs).is_err());
    }

    #[test]
    fn conductivity_is_clamped_and_gaps_are_unknown() {
        let defs = vec![
            ElementDefinition::new(EL_EMPTY, "base:empty", "Empty", ElementType::None),
            ElementDefinition::new(5, "base:metal", "Metal", ElementType::Solid)
                .with_conductivity(3.0)
                .with_colors(&[0xFF00_0000]),
        ];
        let registry = ContentRegistry::from_definitions(defs).expect("valid");
        assert_eq!(registry.definition_of(5).map(|d| d.thermal_conductivity), Some(1.0));
        assert!(registry.definition_of(3).is_none());
        assert!(registry.definition_of(EL_ANY).is_none());
    }

    #[test]
    fn unknown_type_string_is_an_error() {
        let json = r#"{ "elements": [ { "id": 0, "key": "base:empty", "type": "plasma" } ] }"#;
        assert!(ContentRegistry::from_bundle_json(json).is_err());
    }

    #[test]
    fn manifest_lists_every_element() {
        let registry = ContentRegistry::builtin();
        let manifest: serde_json::Value =
            serde_json::from_str(&registry.manifest_json()).expect("manifest is json");
        assert_eq!(manifest["formatVersion"], 1);
        assert_eq!(
            manifest["elements"].as_array().map(|a| a.len()),
            Some(BUILTIN_ELEMENT_COUNT)
        );
        assert_eq!(manifest["elements"][2]["type"], "powder");
    }
}
