use super::Vec3;

/// Mirror `direction` (pointing toward the surface) about `normal`.
pub fn reflect(direction: Vec3, normal: Vec3) -> Vec3 {
    (direction - 2.0 * (direction * normal) * normal).normalized()
}
