mod cornell;

pub use cornell::cornell_box;

use ordered_float::OrderedFloat;

use crate::geometry::{Primitive, Sphere};
use crate::material::Material;
use crate::math::{reflect, Point3, RGBColor, Ray, Vec3};

/// Offset along the surface normal applied to the origin of shadow and reflection rays, so
/// they don't immediately hit the surface they start on.
pub const DEFAULT_BIAS: f32 = 0.1;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Light {
    pub position: Point3,
    pub color: RGBColor,
}

impl Light {
    pub const fn new(position: Point3, color: RGBColor) -> Light {
        Light { position, color }
    }
}

/// A sphere with its surface material. The center is cached next to the sphere and is read
/// when computing surface normals; both are set once here and never change.
#[derive(Copy, Clone, Debug)]
pub struct Object {
    sphere: Sphere,
    material: Material,
    center: Point3,
}

impl Object {
    pub fn new(center: Point3, radius: f32, material: Material) -> Object {
        Object {
            sphere: Sphere::new(radius, center),
            material,
            center,
        }
    }

    pub fn intersect(&self, ray: Ray) -> Option<f32> {
        self.sphere
            .intersect(ray, 0.0, f32::INFINITY)
            .filter(|&distance| distance > 0.0)
    }

    pub fn material(&self) -> &Material {
        &self.material
    }
    pub fn center(&self) -> &Point3 {
        &self.center
    }
    pub fn sphere(&self) -> &Sphere {
        &self.sphere
    }
}

#[derive(Copy, Clone, Debug)]
pub struct Hit<'a> {
    pub object: &'a Object,
    pub index: usize,
    pub distance: f32,
}

impl<'a> Hit<'a> {
    pub fn point(&self, ray: Ray) -> Point3 {
        ray.point_at_parameter(self.distance)
    }

    /// Outward surface normal at the hit point, `None` if the point coincides with the
    /// center.
    pub fn normal(&self, ray: Ray) -> Option<Vec3> {
        (self.point(ray) - *self.object.center()).try_normalized()
    }
}

pub struct Scene {
    objects: Vec<Object>,
    lights: Vec<Light>,
    pub bias: f32,
}

impl Default for Scene {
    fn default() -> Self {
        Scene::new()
    }
}

impl Scene {
    pub fn new() -> Scene {
        Scene {
            objects: Vec::new(),
            lights: Vec::new(),
            bias: DEFAULT_BIAS,
        }
    }

    pub fn with_bias(mut self, bias: f32) -> Self {
        self.bias = bias;
        self
    }

    pub fn add_object(&mut self, object: Object) {
        self.objects.push(object);
    }

    pub fn add_light(&mut self, position: Point3, color: RGBColor) {
        self.lights.push(Light::new(position, color));
    }

    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Closest object in front of the ray. Exact ties go to the object added first.
    pub fn find_nearest(&self, ray: Ray) -> Option<Hit<'_>> {
        self.objects
            .iter()
            .enumerate()
            .filter_map(|(index, object)| {
                object.intersect(ray).map(|distance| Hit {
                    object,
                    index,
                    distance,
                })
            })
            .min_by_key(|hit| OrderedFloat(hit.distance))
    }

    /// Direct illumination at a hit: the material's ambient term once, plus the Lambertian
    /// term of every light that is not occluded. Light contributions are summed.
    pub fn shade(&self, ray: Ray, hit: &Hit) -> RGBColor {
        let material = hit.object.material();
        let hit_point = hit.point(ray);
        let normal = match hit.normal(ray) {
            Some(normal) => normal,
            None => return material.ambient,
        };
        let shadow_origin = hit_point + self.bias * normal;

        let mut diffuse_sum = RGBColor::ZERO;
        for light in self.lights.iter() {
            let light_vector = light.position - hit_point;
            let distance_to_light = light_vector.norm();
            let light_direction = match light_vector.try_normalized() {
                Some(direction) => direction,
                None => continue,
            };

            let shadow_ray = Ray::new(shadow_origin, light_direction);
            let in_shadow = self
                .find_nearest(shadow_ray)
                .map_or(false, |blocker| blocker.distance < distance_to_light);
            if in_shadow {
                continue;
            }

            let intensity = normal * light_direction;
            if intensity > 0.0 {
                diffuse_sum += intensity * (material.diffuse * light.color);
            }
        }

        material.ambient + diffuse_sum
    }

    /// Color seen along `ray`, following mirror reflections for at most `depth` surfaces.
    pub fn trace(&self, ray: Ray, depth: i32) -> RGBColor {
        if depth <= 0 {
            return RGBColor::BLACK;
        }
        let hit = match self.find_nearest(ray) {
            Some(hit) => hit,
            None => return RGBColor::BLACK,
        };

        let local_color = self.shade(ray, &hit);
        let material = hit.object.material();
        if !material.is_reflective() {
            return local_color;
        }

        let normal = match hit.normal(ray) {
            Some(normal) => normal,
            None => return local_color,
        };
        let reflected = reflect(ray.direction, normal);
        if !reflected.is_finite() {
            return local_color;
        }
        let reflection_ray = Ray::new(hit.point(ray) + self.bias * normal, reflected);
        let reflected_color = self.trace(reflection_ray, depth - 1);

        local_color + reflected_color * material.mirror
    }
}
