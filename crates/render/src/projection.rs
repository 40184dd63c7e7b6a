use cgmath::Point2;
use log::debug;
use ordered_float::OrderedFloat;
use strata_mesh::{Triangle, Vector3};

use crate::config::{RenderConfig, NORMAL_EPSILON};
use crate::scene::{Layer, Scene};
use crate::shading::{base_color_with, lighting_intensity, shade, Rgb};

/// A filled, unstroked 2D polygon in canvas coordinates (y down).
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon2D {
    pub points: Vec<Point2<f32>>,
    pub fill: Rgb,
}

/// The output of a render: a square canvas and the polygons to paint on it.
///
/// Polygons must be painted in order; later polygons cover earlier ones.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderArtifact {
    pub canvas_size: u32,
    pub polygons: Vec<Polygon2D>,
}

/// Returns the layers in back to front order.
///
/// Depth is resolved per layer, using the mean z of its points, and not per
/// face. This is only correct while layers don't interpenetrate in depth, which
/// holds for stacked terrain contours. Equal depths fall back to the layer
/// number.
pub fn depth_order(scene: &Scene) -> Vec<&Layer> {
    let mut layers: Vec<&Layer> = scene.layers().iter().collect();
    layers.sort_by_key(|l| (OrderedFloat(l.mesh.mean_z().unwrap_or(0.0)), l.number));
    layers
}

/// Orthographic projection onto the canvas: drop z and flip y.
#[inline(always)]
fn project(p: &Vector3, icon_size: f32) -> Point2<f32> {
    Point2::new(p.x, icon_size - p.y)
}

fn project_triangle(t: &Triangle, icon_size: f32) -> Vec<Point2<f32>> {
    vec![
        project(&t.p0, icon_size),
        project(&t.p1, icon_size),
        project(&t.p2, icon_size),
    ]
}

/// Projects a normalized scene into an ordered list of shaded polygons.
///
/// Layers are painted back to front (see [`depth_order`]); faces within a layer
/// keep their file order. Back faces are culled.
pub fn render(scene: &Scene, icon_size: u32, light_dir: Vector3) -> RenderArtifact {
    render_with(
        scene,
        &RenderConfig {
            icon_size,
            light_dir,
            ..Default::default()
        },
    )
}

/// Like [`render`], taking the canvas size, light and gradient from `config`.
pub fn render_with(scene: &Scene, config: &RenderConfig) -> RenderArtifact {
    let size = config.icon_size as f32;
    let light_dir = config.light_dir;
    let mut polygons = Vec::with_capacity(scene.face_count());

    for layer in depth_order(scene) {
        let base = base_color_with(layer.number, config.gradient_span);
        let mut culled = 0usize;
        for t in layer.mesh.triangles() {
            // The viewer sits on +z looking down the z axis. Flipping this sign
            // inverts which half of every closed surface gets drawn.
            if t.normal().z < 0.0 {
                culled += 1;
                continue;
            }
            let intensity = lighting_intensity(t.unit_normal(NORMAL_EPSILON), light_dir);
            polygons.push(Polygon2D {
                points: project_triangle(&t, size),
                fill: shade(base, intensity),
            });
        }
        debug!(
            "layer {}: {} faces, {} culled",
            layer.number,
            layer.mesh.facets.len(),
            culled
        );
    }

    RenderArtifact {
        canvas_size: config.icon_size,
        polygons,
    }
}
