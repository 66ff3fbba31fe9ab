mod material;
mod primitives;

use std::{collections::HashMap, fs::File, io::Read, path::Path};

use serde::{de::DeserializeOwned, Deserialize, Serialize};

pub use material::*;
pub use primitives::*;

use crate::camera::Camera;
use crate::error::Result;
use crate::material::Material;
use crate::math::{Point3, Vec3};
use crate::scene::{Light, Scene, DEFAULT_BIAS};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CameraData {
    pub eye: [f32; 3],
    pub look_at: [f32; 3],
    #[serde(default = "default_up")]
    pub up: [f32; 3],
    #[serde(default = "default_pixel_size")]
    pub pixel_size: f32,
}

fn default_up() -> [f32; 3] {
    [0.0, 1.0, 0.0]
}

fn default_pixel_size() -> f32 {
    0.005
}

fn default_bias() -> f32 {
    DEFAULT_BIAS
}

impl CameraData {
    /// Resolution is not part of the scene file; the renderer sets it.
    pub fn transform(self) -> Result<Camera> {
        let default = Camera::default();
        Camera::new(
            Point3::from(self.eye),
            Point3::from(self.look_at),
            Vec3::from(self.up),
            default.width,
            default.height,
            self.pixel_size,
        )
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SceneData {
    #[serde(default)]
    pub camera: Option<CameraData>,
    #[serde(default = "default_bias")]
    pub bias: f32,
    #[serde(default)]
    pub materials: HashMap<String, MaterialData>,
    pub primitives: Vec<PrimitiveData>,
    #[serde(default)]
    pub lights: Vec<LightData>,
}

pub struct LoadedScene {
    pub scene: Scene,
    pub camera: Camera,
}

impl SceneData {
    pub fn transform(self) -> Result<LoadedScene> {
        let materials: HashMap<String, Material> = self
            .materials
            .into_iter()
            .map(|(name, data)| (name, Material::from(data)))
            .collect();
        log::debug!("{} scene materials", materials.len());

        let mut scene = Scene::new().with_bias(self.bias);
        for primitive in self.primitives {
            scene.add_object(primitive.transform(&materials)?);
        }
        for light in self.lights {
            let light = Light::from(light);
            scene.add_light(light.position, light.color);
        }
        if scene.objects().is_empty() {
            log::warn!("scene has no objects, every pixel will be black");
        }
        if scene.lights().is_empty() {
            log::warn!("scene has no lights, only ambient color will be visible");
        }

        let camera = self
            .camera
            .map(CameraData::transform)
            .transpose()?
            .unwrap_or_default();
        Ok(LoadedScene { scene, camera })
    }
}

pub fn load_json<T, P>(path: P) -> Result<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let mut input = String::new();
    File::open(path.as_ref())?.read_to_string(&mut input)?;
    log::debug!("read {} bytes from {}", input.len(), path.as_ref().display());

    let data: T = serde_json::from_str(&input)?;
    Ok(data)
}

pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<LoadedScene> {
    load_json::<SceneData, _>(path)?.transform()
}
