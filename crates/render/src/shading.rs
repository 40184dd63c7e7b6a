use cgmath::InnerSpace;
use strata_mesh::Vector3;

use crate::config::{AMBIENT, DIFFUSE, GRADIENT_SPAN, NORMAL_EPSILON};

/// An 8-bit per channel fill color.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Formats the color as an SVG/CSS `rgb(r,g,b)` paint.
    pub fn to_svg_fill(&self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// Unclamped per-layer color. Layers outside the gradient span leave 0-255.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct BaseColor {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

/// Lambertian intensity with an ambient floor, in `[AMBIENT, AMBIENT + DIFFUSE]`.
pub fn lighting_intensity(normal: Vector3, light_dir: Vector3) -> f32 {
    let n = normal / (normal.magnitude() + NORMAL_EPSILON);
    let l = light_dir / (light_dir.magnitude() + NORMAL_EPSILON);
    n.dot(l).clamp(0.0, 1.0) * DIFFUSE + AMBIENT
}

/// Blue-to-white gradient keyed on the layer number.
pub fn base_color(layer: i32) -> BaseColor {
    base_color_with(layer, GRADIENT_SPAN)
}

pub fn base_color_with(layer: i32, span: f32) -> BaseColor {
    let ratio = f64::from(layer) / f64::from(span);
    let channel = |low: f64, range: f64| (255.0 * (low + range * ratio)) as i32;
    BaseColor {
        r: channel(0.2, 0.8),
        g: channel(0.4, 0.6),
        b: channel(0.6, 0.4),
    }
}

/// Scales a base color by a lighting intensity and clamps into `Rgb`.
pub fn shade(base: BaseColor, intensity: f32) -> Rgb {
    let intensity = f64::from(intensity);
    let channel = |c: i32| (f64::from(c) * intensity).clamp(0.0, 255.0) as u8;
    Rgb {
        r: channel(base.r),
        g: channel(base.g),
        b: channel(base.b),
    }
}
