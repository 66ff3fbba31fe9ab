use crate::geometry::Primitive;
use crate::math::{Point3, Ray, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub radius: f32,
    pub origin: Point3,
}

impl Sphere {
    pub fn new(radius: f32, origin: Point3) -> Sphere {
        assert!(
            radius.is_finite() && radius > 0.0,
            "sphere radius must be positive, got {}",
            radius
        );
        Sphere { radius, origin }
    }
}

impl Primitive for Sphere {
    fn intersect(&self, r: Ray, t0: f32, t1: f32) -> Option<f32> {
        let oc: Vec3 = r.origin - self.origin;
        let a = r.direction * r.direction;
        let b = oc * r.direction;
        let c = oc * oc - self.radius * self.radius;
        let discriminant = b * b - a * c;
        if discriminant < 0.0 {
            return None;
        }
        let discriminant_sqrt = discriminant.sqrt();
        // near root first, then the far one for rays starting inside the sphere
        let time = (-b - discriminant_sqrt) / a;
        if time < t1 && time > t0 {
            return Some(time);
        }
        let time = (-b + discriminant_sqrt) / a;
        if time < t1 && time > t0 {
            return Some(time);
        }
        None
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_sphere_ray_intersection() {
        let sphere = Sphere::new(2.0, Point3::new(2.0, 2.0, 2.0));
        let ray = Ray::new(Point3::ORIGIN, Vec3::new(1.0, 1.0, 1.0).normalized());

        let time = sphere
            .intersect(ray, 0.0, f32::INFINITY)
            .expect("ray aimed at the center must hit");
        let expected = (sphere.origin - ray.origin).norm() - sphere.radius;
        assert!((time - expected).abs() < 0.0001, "{} {}", time, expected);
    }

    #[test]
    fn test_parallel_offset_ray_misses() {
        let sphere = Sphere::new(1.0, Point3::new(0.0, 0.0, -5.0));
        let ray = Ray::new(Point3::new(0.0, 1.5, 0.0), -Vec3::Z);
        assert!(sphere.intersect(ray, 0.0, f32::INFINITY).is_none());
    }

    #[test]
    fn test_sphere_behind_ray_misses() {
        let sphere = Sphere::new(1.0, Point3::new(0.0, 0.0, 5.0));
        let ray = Ray::new(Point3::ORIGIN, -Vec3::Z);
        assert!(sphere.intersect(ray, 0.0, f32::INFINITY).is_none());
    }

    #[test]
    fn test_ray_from_inside_hits_far_wall() {
        let sphere = Sphere::new(3.0, Point3::ORIGIN);
        let ray = Ray::new(Point3::new(1.0, 0.0, 0.0), Vec3::X);
        let time = sphere.intersect(ray, 0.0, f32::INFINITY).unwrap();
        assert!((time - 2.0).abs() < 0.0001, "{}", time);
    }

    #[test]
    fn test_interval_bounds_are_exclusive() {
        let sphere = Sphere::new(1.0, Point3::new(0.0, 0.0, -5.0));
        let ray = Ray::new(Point3::ORIGIN, -Vec3::Z);
        // near root is 4.0, far root is 6.0
        assert!(sphere.intersect(ray, 0.0, 4.0).is_none());
        let far = sphere.intersect(ray, 4.5, f32::INFINITY).unwrap();
        assert!((far - 6.0).abs() < 0.0001, "{}", far);
    }

    #[test]
    fn test_random_rays_never_report_hits_behind_origin() {
        let sphere = Sphere::new(1.5, Point3::new(0.3, -0.2, -4.0));
        for _ in 0..1000 {
            let direction = Vec3::new(
                rand::random::<f32>() - 0.5,
                rand::random::<f32>() - 0.5,
                rand::random::<f32>() - 0.5,
            );
            let Some(direction) = direction.try_normalized() else {
                continue;
            };
            let ray = Ray::new(Point3::ORIGIN, direction);
            if let Some(time) = sphere.intersect(ray, 0.0, f32::INFINITY) {
                assert!(time > 0.0);
                let p = ray.point_at_parameter(time);
                let off_surface = ((p - sphere.origin).norm() - sphere.radius).abs();
                assert!(off_surface < 0.001, "{:?} {}", p, off_surface);
            }
        }
    }

    #[test]
    #[should_panic]
    fn test_zero_radius_rejected() {
        let _ = Sphere::new(0.0, Point3::ORIGIN);
    }
}
