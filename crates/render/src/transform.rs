use cgmath::{Deg, Matrix3};
use strata_mesh::Vector3;

use crate::scene::Scene;

/// Builds the combined tilt rotation.
///
/// The x axis rotation (forward tilt) is applied first, then the y axis
/// rotation (left tilt).
pub fn tilt_matrix(forward_deg: f32, left_deg: f32) -> Matrix3<f32> {
    let rx = Matrix3::from_angle_x(Deg(forward_deg));
    let ry = Matrix3::from_angle_y(Deg(left_deg));
    ry * rx
}

/// Rotates every point of every layer in place. No scaling or translation.
pub fn transform(scene: &mut Scene, forward_deg: f32, left_deg: f32) {
    let m = tilt_matrix(forward_deg, left_deg);
    for layer in scene.layers_mut() {
        rotate_points(&mut layer.mesh.points, &m);
    }
}

fn rotate_points(points: &mut [Vector3], m: &Matrix3<f32>) {
    for p in points {
        *p = *m * *p;
    }
}
