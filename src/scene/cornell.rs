use super::{Object, Scene};
use crate::material::Material;
use crate::math::{Point3, RGBColor};

const WALL_RADIUS: f32 = 1e5;

/// Box of five colored walls (huge spheres) holding a mirror ball, a yellow ball and a small
/// shiny red ball, lit by a white ceiling light and a dim blue fill light.
pub fn cornell_box() -> Scene {
    let mut scene = Scene::new();

    // walls
    scene.add_object(Object::new(
        Point3::new(-WALL_RADIUS - 2.0, 0.0, -5.0),
        WALL_RADIUS,
        Material::RED,
    ));
    scene.add_object(Object::new(
        Point3::new(WALL_RADIUS + 2.0, 0.0, -5.0),
        WALL_RADIUS,
        Material::GREEN,
    ));
    scene.add_object(Object::new(
        Point3::new(0.0, 0.0, -WALL_RADIUS - 10.0),
        WALL_RADIUS,
        Material::YELLOW,
    ));
    scene.add_object(Object::new(
        Point3::new(0.0, -WALL_RADIUS - 2.0, -5.0),
        WALL_RADIUS,
        Material::BLUE,
    ));
    scene.add_object(Object::new(
        Point3::new(0.0, WALL_RADIUS + 2.0, -5.0),
        WALL_RADIUS,
        Material::WHITE,
    ));

    scene.add_object(Object::new(Point3::new(-1.0, -1.0, -6.0), 1.0, Material::MIRROR));
    scene.add_object(Object::new(Point3::new(0.8, -1.2, -4.5), 0.8, Material::YELLOW));
    scene.add_object(Object::new(Point3::new(0.0, 0.5, -5.0), 0.5, Material::SHINY_RED));

    scene.add_light(Point3::new(0.0, 1.8, -5.0), RGBColor::new(0.8, 0.8, 0.8));
    scene.add_light(Point3::new(1.5, -1.0, -2.0), RGBColor::new(0.0, 0.0, 0.4));

    scene
}
