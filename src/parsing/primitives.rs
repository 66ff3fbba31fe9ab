use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::material::resolve_material;
use crate::error::{Error, Result};
use crate::material::Material;
use crate::math::{Point3, RGBColor};
use crate::scene::{Light, Object};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PrimitiveData {
    Sphere {
        origin: [f32; 3],
        radius: f32,
        material: String,
    },
}

impl PrimitiveData {
    pub fn transform(self, materials: &HashMap<String, Material>) -> Result<Object> {
        match self {
            Self::Sphere {
                origin,
                radius,
                material,
            } => {
                if !(radius.is_finite() && radius > 0.0) {
                    return Err(Error::InvalidRadius(radius));
                }
                let material = resolve_material(&material, materials)?;
                Ok(Object::new(Point3::from(origin), radius, material))
            }
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LightData {
    pub position: [f32; 3],
    pub color: RGBColor,
}

impl From<LightData> for Light {
    fn from(data: LightData) -> Self {
        Light::new(Point3::from(data.position), data.color)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_sphere_with_preset() {
        let data: PrimitiveData = serde_json::from_str(
            r#"{"type": "Sphere", "origin": [1, 2, 3], "radius": 0.5, "material": "yellow"}"#,
        )
        .unwrap();
        let object = data.transform(&HashMap::new()).unwrap();
        assert_eq!(*object.center(), Point3::new(1.0, 2.0, 3.0));
        assert_eq!(object.sphere().radius, 0.5);
        assert_eq!(*object.material(), Material::YELLOW);
    }

    #[test]
    fn test_non_positive_radius_rejected() {
        for radius in [0.0, -1.0, f32::NAN] {
            let data = PrimitiveData::Sphere {
                origin: [0.0, 0.0, 0.0],
                radius,
                material: String::from("white"),
            };
            assert!(matches!(
                data.transform(&HashMap::new()),
                Err(Error::InvalidRadius(_))
            ));
        }
    }
}
