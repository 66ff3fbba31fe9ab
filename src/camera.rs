use crate::error::{Error, Result};
use crate::math::{Point3, Ray, Vec3};

/// Pinhole camera looking from `origin` through an image plane one unit ahead, whose pixels
/// are `pixel_size` units wide.
#[derive(Copy, Clone, Debug)]
pub struct Camera {
    pub origin: Point3,
    pub direction: Vec3,
    pub right: Vec3,
    pub up: Vec3,
    pub width: usize,
    pub height: usize,
    pub pixel_size: f32,
}

impl Camera {
    /// Fails when the eye sits on the look-at point, when `up` is parallel to the view
    /// direction, or when `pixel_size` is not a positive finite number.
    pub fn new(
        look_from: Point3,
        look_at: Point3,
        up: Vec3,
        width: usize,
        height: usize,
        pixel_size: f32,
    ) -> Result<Camera> {
        if !look_from.is_finite() || !look_at.is_finite() {
            return Err(Error::InvalidCamera(format!(
                "eye {:?} and look-at {:?} must be finite",
                look_from, look_at
            )));
        }
        let direction = (look_at - look_from).try_normalized().ok_or_else(|| {
            Error::InvalidCamera(format!("eye and look-at are both {:?}", look_from))
        })?;
        let right = direction.cross(up).try_normalized().ok_or_else(|| {
            Error::InvalidCamera(format!(
                "up {:?} is parallel to the view direction {:?}",
                up, direction
            ))
        })?;
        let real_up = right.cross(direction).normalized();
        Camera {
            origin: look_from,
            direction,
            right,
            up: real_up,
            width,
            height,
            pixel_size: 1.0,
        }
        .with_pixel_size(pixel_size)
    }

    /// Same view, different pixel size.
    pub fn with_pixel_size(mut self, pixel_size: f32) -> Result<Camera> {
        if !pixel_size.is_finite() || pixel_size <= 0.0 {
            return Err(Error::InvalidCamera(format!(
                "pixel size must be positive, got {}",
                pixel_size
            )));
        }
        self.pixel_size = pixel_size;
        Ok(self)
    }

    /// Same view, different resolution.
    pub fn with_resolution(mut self, width: usize, height: usize) -> Camera {
        self.width = width;
        self.height = height;
        self
    }

    pub fn get_ray(&self, x: usize, y: usize) -> Ray {
        let offset_x = (x as f32 - self.width as f32 / 2.0) * self.pixel_size;
        let offset_y = (self.height as f32 / 2.0 - y as f32) * self.pixel_size;

        let direction = self.direction + offset_x * self.right + offset_y * self.up;
        Ray::new(self.origin, direction.normalized())
    }
}

// looking down -z from the origin, the same basis `new` builds for that view
impl Default for Camera {
    fn default() -> Self {
        Camera {
            origin: Point3::ORIGIN,
            direction: -Vec3::Z,
            right: Vec3::X,
            up: Vec3::Y,
            width: 400,
            height: 400,
            pixel_size: 0.005,
        }
    }
}
