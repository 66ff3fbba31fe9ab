use nalgebra::Vector3;
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

#[derive(Copy, Clone, PartialEq)]
pub struct Vec3(pub Vector3<f32>);

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Vec3 {
        Vec3(Vector3::new(x, y, z))
    }
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    pub const X: Vec3 = Vec3::new(1.0, 0.0, 0.0);
    pub const Y: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    pub const Z: Vec3 = Vec3::new(0.0, 0.0, 1.0);

    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|e| e.is_finite())
    }
}

impl Vec3 {
    #[inline(always)]
    pub fn x(&self) -> f32 {
        self.0.x
    }
    #[inline(always)]
    pub fn y(&self) -> f32 {
        self.0.y
    }
    #[inline(always)]
    pub fn z(&self) -> f32 {
        self.0.z
    }
    pub fn cross(&self, other: Vec3) -> Self {
        Vec3(self.0.cross(&other.0))
    }

    pub fn norm_squared(&self) -> f32 {
        self.0.norm_squared()
    }

    pub fn norm(&self) -> f32 {
        self.0.norm()
    }

    pub fn normalized(&self) -> Self {
        Vec3(self.0 / self.norm())
    }

    /// Unit vector in the same direction, or `None` when the vector is zero-length or not
    /// finite and therefore has no direction.
    pub fn try_normalized(&self) -> Option<Self> {
        if !self.is_finite() {
            return None;
        }
        self.0.try_normalize(f32::EPSILON).map(Vec3)
    }
}

impl Default for Vec3 {
    fn default() -> Self {
        Vec3::ZERO
    }
}

impl fmt::Debug for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Vec3")
            .field(&self.x())
            .field(&self.y())
            .field(&self.z())
            .finish()
    }
}

// dot product
impl Mul for Vec3 {
    type Output = f32;
    fn mul(self, other: Vec3) -> f32 {
        self.0.dot(&other.0)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    fn mul(self, other: f32) -> Vec3 {
        Vec3(self.0 * other)
    }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;
    fn mul(self, other: Vec3) -> Vec3 {
        Vec3(other.0 * self)
    }
}

impl Div<f32> for Vec3 {
    type Output = Vec3;
    fn div(self, other: f32) -> Vec3 {
        Vec3(self.0 / other)
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, other: Vec3) -> Vec3 {
        Vec3(self.0 + other.0)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, other: Vec3) {
        self.0 += other.0
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 {
        Vec3(-self.0)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, other: Vec3) -> Vec3 {
        self + (-other)
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(other: [f32; 3]) -> Vec3 {
        Vec3::new(other[0], other[1], other[2])
    }
}

impl From<Vector3<f32>> for Vec3 {
    fn from(other: Vector3<f32>) -> Vec3 {
        Vec3(other)
    }
}
