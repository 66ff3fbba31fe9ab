use crate::math::RGBColor;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Material {
    pub ambient: RGBColor,
    pub diffuse: RGBColor,
    pub mirror: RGBColor,
}

impl Material {
    pub const fn new(ambient: RGBColor, diffuse: RGBColor, mirror: RGBColor) -> Material {
        Material {
            ambient,
            diffuse,
            mirror,
        }
    }

    pub fn is_reflective(&self) -> bool {
        self.mirror.any_positive()
    }

    pub fn preset(name: &str) -> Option<Material> {
        PRESETS
            .iter()
            .find(|(preset_name, _)| *preset_name == name)
            .map(|(_, material)| *material)
    }

    pub const BLACK: Material = Material::new(RGBColor::ZERO, RGBColor::ZERO, RGBColor::ZERO);
    pub const RED: Material = Material::new(
        RGBColor::new(0.1, 0.0, 0.0),
        RGBColor::new(0.8, 0.0, 0.0),
        RGBColor::ZERO,
    );
    pub const GREEN: Material = Material::new(
        RGBColor::new(0.0, 0.1, 0.0),
        RGBColor::new(0.0, 0.8, 0.0),
        RGBColor::ZERO,
    );
    pub const BLUE: Material = Material::new(
        RGBColor::new(0.0, 0.0, 0.1),
        RGBColor::new(0.0, 0.0, 0.8),
        RGBColor::ZERO,
    );
    pub const WHITE: Material = Material::new(
        RGBColor::new(0.1, 0.1, 0.1),
        RGBColor::new(0.8, 0.8, 0.8),
        RGBColor::ZERO,
    );
    pub const MIRROR: Material = Material::new(
        RGBColor::new(0.1, 0.1, 0.1),
        RGBColor::new(0.1, 0.1, 0.1),
        RGBColor::new(0.9, 0.9, 0.9),
    );
    pub const SHINY_RED: Material = Material::new(
        RGBColor::new(0.1, 0.0, 0.0),
        RGBColor::new(0.6, 0.0, 0.0),
        RGBColor::new(0.4, 0.4, 0.4),
    );
    pub const YELLOW: Material = Material::new(
        RGBColor::new(0.1, 0.1, 0.0),
        RGBColor::new(0.8, 0.8, 0.0),
        RGBColor::new(0.2, 0.2, 0.2),
    );
}

pub const PRESETS: [(&str, Material); 8] = [
    ("black", Material::BLACK),
    ("red", Material::RED),
    ("green", Material::GREEN),
    ("blue", Material::BLUE),
    ("white", Material::WHITE),
    ("mirror", Material::MIRROR),
    ("shiny_red", Material::SHINY_RED),
    ("yellow", Material::YELLOW),
];
