use strata_mesh::Vector3;

use crate::config::CANVAS_FILL;
use crate::scene::Scene;

/// Fits the scene into an `icon_size` square canvas, filling `CANVAS_FILL` of it.
pub fn normalize(scene: &mut Scene, icon_size: u32) {
    normalize_with(scene, icon_size, CANVAS_FILL);
}

/// Recenters and uniformly rescales every point so the longer planar (x, y) side
/// of the scene's combined bounding box spans `icon_size * fill`, centered on the
/// canvas.
///
/// Z is centered on the origin and scaled but not shifted into canvas space; it
/// only matters for depth ordering. The scene must have a non-zero planar extent.
/// A scene without points is left untouched.
pub fn normalize_with(scene: &mut Scene, icon_size: u32, fill: f32) {
    let Some(bounds) = scene.bounds() else {
        return;
    };
    let extent = bounds.planar_extent();
    debug_assert!(extent > 0.0, "cannot normalize a scene with zero planar extent");

    let size = icon_size as f32;
    let center = bounds.center();
    let scale = size * fill / extent;
    let offset = Vector3 {
        x: size / 2.0,
        y: size / 2.0,
        z: 0.0,
    };
    for layer in scene.layers_mut() {
        for p in layer.mesh.points.iter_mut() {
            *p = (*p - center) * scale + offset;
        }
    }
}
