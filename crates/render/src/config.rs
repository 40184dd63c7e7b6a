use strata_mesh::Vector3;

/// Edge length of the square output canvas, in pixels.
pub const DEFAULT_ICON_SIZE: u32 = 1024;

/// Default tilt for both the forward (x axis) and left (y axis) rotation, in degrees.
pub const DEFAULT_TILT_DEG: f32 = 30.0;

/// Light arriving from the right and slightly above.
pub const DEFAULT_LIGHT_DIR: Vector3 = Vector3 {
    x: 1.0,
    y: 0.0,
    z: 0.3,
};

/// Layer number that maps to the top (white) end of the color gradient.
///
/// This is a fixed reference, not the number of layers in the scene. Layers
/// beyond it are not clamped.
pub const GRADIENT_SPAN: f32 = 11.0;

/// Fraction of the canvas covered by the longer planar side of the scene.
pub const CANVAS_FILL: f32 = 0.8;

/// Intensity floor applied to every face, lit or not.
pub const AMBIENT: f32 = 0.3;

/// Intensity added by a face directly facing the light.
pub const DIFFUSE: f32 = 0.7;

/// Added to vector magnitudes before dividing, so zero vectors stay finite.
pub const NORMAL_EPSILON: f32 = 1e-10;

/// Parameters for a single icon render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    pub icon_size: u32,
    /// Rotation about the x axis, in degrees.
    pub tilt_forward: f32,
    /// Rotation about the y axis, in degrees.
    pub tilt_left: f32,
    pub light_dir: Vector3,
    pub gradient_span: f32,
    pub canvas_fill: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            icon_size: DEFAULT_ICON_SIZE,
            tilt_forward: DEFAULT_TILT_DEG,
            tilt_left: DEFAULT_TILT_DEG,
            light_dir: DEFAULT_LIGHT_DIR,
            gradient_span: GRADIENT_SPAN,
            canvas_fill: CANVAS_FILL,
        }
    }
}
