//! Flat-shaded projection of stacked terrain layers into 2D icon artwork.
//!
//! A [`Scene`] of layer meshes goes through three stages, in order:
//!
//! 1. [`transform`] tilts every point with a fixed two-axis rotation.
//! 2. [`normalize`] fits the scene onto a square canvas.
//! 3. [`render`] culls back faces, shades each face with a single directional
//!    light and emits the polygons back to front.
//!
//! [`generate`] runs all three with the parameters from a [`RenderConfig`].
use std::fmt;

use log::info;

pub mod config;
pub mod normalize;
pub mod projection;
pub mod scene;
pub mod shading;
pub mod transform;

pub use config::RenderConfig;
pub use normalize::{normalize, normalize_with};
pub use projection::{depth_order, render, render_with, Polygon2D, RenderArtifact};
pub use scene::{Layer, Scene};
pub use shading::{base_color, lighting_intensity, shade, BaseColor, Rgb};
pub use transform::{tilt_matrix, transform};

/// The tilted scene has no planar extent to scale, so it can't be fit onto a canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DegenerateScene {
    pub extent: f32,
}

impl fmt::Display for DegenerateScene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "scene has a planar extent of {} after tilting; nothing to scale",
            self.extent
        )
    }
}

impl std::error::Error for DegenerateScene {}

/// Runs the full pipeline on an owned scene.
///
/// A scene without any points yields an empty artifact.
pub fn generate(
    mut scene: Scene,
    config: &RenderConfig,
) -> Result<RenderArtifact, DegenerateScene> {
    info!(
        "Applying transformations: {}° forward, {}° left",
        config.tilt_forward, config.tilt_left
    );
    transform(&mut scene, config.tilt_forward, config.tilt_left);

    if let Some(extent) = scene.planar_extent() {
        // Also rejects NaN.
        if !(extent > 0.0) {
            return Err(DegenerateScene { extent });
        }
    }

    info!("Normalizing mesh coordinates");
    normalize_with(&mut scene, config.icon_size, config.canvas_fill);

    let artifact = render_with(&scene, config);
    info!(
        "Projected {} of {} faces",
        artifact.polygons.len(),
        scene.face_count()
    );
    Ok(artifact)
}
