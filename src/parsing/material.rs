use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::material::Material;
use crate::math::RGBColor;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MaterialData {
    #[serde(default)]
    pub ambient: RGBColor,
    #[serde(default)]
    pub diffuse: RGBColor,
    #[serde(default)]
    pub mirror: RGBColor,
}

impl From<MaterialData> for Material {
    fn from(data: MaterialData) -> Self {
        Material::new(data.ambient, data.diffuse, data.mirror)
    }
}

/// Scene-defined materials first, then the built-in presets.
pub fn resolve_material(name: &str, materials: &HashMap<String, Material>) -> Result<Material> {
    materials
        .get(name)
        .copied()
        .or_else(|| Material::preset(name))
        .ok_or_else(|| Error::UnknownMaterial(name.to_string()))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_missing_channels_default_to_black() {
        let data: MaterialData = serde_json::from_str(r#"{"diffuse": [0.5, 0.5, 0.5]}"#).unwrap();
        let material = Material::from(data);
        assert_eq!(material.ambient, RGBColor::ZERO);
        assert_eq!(material.mirror, RGBColor::ZERO);
        assert_eq!(material.diffuse, RGBColor::from(0.5));
    }

    #[test]
    fn test_scene_materials_shadow_presets() {
        let mut materials = HashMap::new();
        materials.insert(String::from("red"), Material::BLUE);
        assert_eq!(resolve_material("red", &materials).unwrap(), Material::BLUE);
        assert_eq!(resolve_material("mirror", &materials).unwrap(), Material::MIRROR);
        assert!(matches!(
            resolve_material("velvet", &materials),
            Err(Error::UnknownMaterial(name)) if name == "velvet"
        ));
    }
}
