use crate::math::Ray;

mod sphere;

pub use sphere::Sphere;

pub trait Primitive {
    /// Parametric distance to the nearest surface crossing with `t0 < t < t1`.
    fn intersect(&self, r: Ray, t0: f32, t1: f32) -> Option<f32>;
}
