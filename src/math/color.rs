use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, Mul};

/// Linear RGB. Channels are nominally in [0, 1] but may exceed 1 when several lights stack;
/// they are only clamped when converted for display.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 3]", into = "[f32; 3]")]
pub struct RGBColor(pub Vector3<f32>);

impl RGBColor {
    pub const fn new(r: f32, g: f32, b: f32) -> RGBColor {
        RGBColor(Vector3::new(r, g, b))
    }
    pub const ZERO: RGBColor = RGBColor::new(0.0, 0.0, 0.0);
    pub const BLACK: RGBColor = RGBColor::new(0.0, 0.0, 0.0);
    pub const WHITE: RGBColor = RGBColor::new(1.0, 1.0, 1.0);
}

impl RGBColor {
    #[inline(always)]
    pub fn r(&self) -> f32 {
        self.0.x
    }
    #[inline(always)]
    pub fn g(&self) -> f32 {
        self.0.y
    }
    #[inline(always)]
    pub fn b(&self) -> f32 {
        self.0.z
    }

    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|e| e.is_finite())
    }

    /// True if any channel is strictly positive.
    pub fn any_positive(&self) -> bool {
        self.0.iter().any(|&e| e > 0.0)
    }

    pub fn max_channel(&self) -> f32 {
        self.0.max()
    }
}

impl Default for RGBColor {
    fn default() -> Self {
        RGBColor::ZERO
    }
}

// component-wise product
impl Mul for RGBColor {
    type Output = Self;
    fn mul(self, other: RGBColor) -> Self {
        RGBColor(self.0.component_mul(&other.0))
    }
}

impl Mul<f32> for RGBColor {
    type Output = RGBColor;
    fn mul(self, other: f32) -> RGBColor {
        RGBColor(self.0 * other)
    }
}

impl Mul<RGBColor> for f32 {
    type Output = RGBColor;
    fn mul(self, other: RGBColor) -> RGBColor {
        RGBColor(other.0 * self)
    }
}

impl Div<f32> for RGBColor {
    type Output = RGBColor;
    fn div(self, other: f32) -> RGBColor {
        RGBColor(self.0 / other)
    }
}

impl Add for RGBColor {
    type Output = RGBColor;
    fn add(self, other: RGBColor) -> RGBColor {
        RGBColor(self.0 + other.0)
    }
}

impl AddAssign for RGBColor {
    fn add_assign(&mut self, other: RGBColor) {
        self.0 += other.0
    }
}

impl From<f32> for RGBColor {
    fn from(s: f32) -> RGBColor {
        RGBColor::new(s, s, s)
    }
}

impl From<[f32; 3]> for RGBColor {
    fn from(other: [f32; 3]) -> RGBColor {
        RGBColor::new(other[0], other[1], other[2])
    }
}

impl From<RGBColor> for [f32; 3] {
    fn from(c: RGBColor) -> [f32; 3] {
        [c.r(), c.g(), c.b()]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_component_mul() {
        let a = RGBColor::new(0.8, 0.8, 0.8);
        let b = RGBColor::new(0.0, 0.5, 0.4);
        let c = a * b;
        assert!((c.r() - 0.0).abs() < 0.000001);
        assert!((c.g() - 0.4).abs() < 0.000001);
        assert!((c.b() - 0.32).abs() < 0.000001);
    }

    #[test]
    fn test_any_positive() {
        assert!(!RGBColor::BLACK.any_positive());
        assert!(!RGBColor::new(-1.0, 0.0, 0.0).any_positive());
        assert!(RGBColor::new(0.0, 0.0, 0.01).any_positive());
    }

    #[test]
    fn test_serde_as_array() {
        let c: RGBColor = serde_json::from_str("[0.1, 0.2, 0.3]").unwrap();
        assert_eq!(c, RGBColor::new(0.1, 0.2, 0.3));
        assert_eq!(serde_json::to_string(&RGBColor::WHITE).unwrap(), "[1.0,1.0,1.0]");
    }
}
