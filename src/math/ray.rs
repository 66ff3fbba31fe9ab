use super::{Point3, Vec3};

#[derive(Copy, Clone, Debug)]
pub struct Ray {
    pub origin: Point3,
    pub direction: Vec3,
}

impl Ray {
    /// `direction` must already be unit length, intersection distances are measured in
    /// multiples of it.
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        debug_assert!(
            (direction.norm_squared() - 1.0).abs() < 0.001,
            "ray direction is not normalized: {:?}",
            direction
        );
        Ray { origin, direction }
    }

    pub fn point_at_parameter(self, time: f32) -> Point3 {
        self.origin + self.direction * time
    }
}

impl Default for Ray {
    fn default() -> Self {
        Ray::new(Point3::default(), Vec3::Z)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_point_at_parameter() {
        let ray = Ray::new(Point3::new(1.0, 2.0, 3.0), Vec3::X);
        let p = ray.point_at_parameter(2.5);
        assert_eq!(p, Point3::new(3.5, 2.0, 3.0));
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn test_unnormalized_direction_rejected() {
        let _ = Ray::new(Point3::ORIGIN, Vec3::new(0.0, 0.0, 2.0));
    }
}
