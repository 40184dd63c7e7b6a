use std::collections::HashMap;

use ordered_float::OrderedFloat;

use crate::geometry::{Bounds, Triangle, Vector3};
use crate::TriangleMesh;

/// Maintains geometry for a single facet.
///
/// This type must be paired with a list of vertices. The points here are only indices into
/// another vector. We do this so we can store each vertex as 4 bytes instead of the 12 bytes
/// required to store the entire Vector3. This has further savings if a vertex is reused.
///
/// As a simple example, consider a simple geometry such as:
///
///    *-------*
///    |\     /|
///    | \   / |
///    |  \ /  |
///    |   *   |
///    |  / \  |
///    | /   \ |
///    |/     \|
///    *-------*
///
/// Here we have 5 points and 4 facets. If we would store every facet as a series of points
/// we would need:
///    3 floats * 4b * 3 points * 4 facets = 144 bytes.
///
/// If instead we store:
///    3 floats * 4b * 5 points  = 60b
///  + 3 indices * 4b * 4 facets = 48b
///                              =======
///                               108b
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Facet {
    pub p0: u32,
    pub p1: u32,
    pub p2: u32,
}

/// A triangle mesh stored as a list of unique points plus facets indexing into them.
///
/// Every facet index must be valid for `points`. The facet order is significant: it's
/// the order triangles are emitted in when the mesh is drawn.
#[derive(Debug, Clone, Default)]
pub struct VertexIndex {
    pub points: Vec<Vector3>,
    pub facets: Vec<Facet>,
}

type PointKey = [OrderedFloat<f32>; 3];

fn point_key(p: &Vector3) -> PointKey {
    [p.x.into(), p.y.into(), p.z.into()]
}

impl VertexIndex {
    /// Resolves a facet into the triangle it describes.
    pub fn triangle(&self, facet: &Facet) -> Triangle {
        Triangle {
            p0: self.points[facet.p0 as usize],
            p1: self.points[facet.p1 as usize],
            p2: self.points[facet.p2 as usize],
        }
    }

    /// Iterates the triangles of this mesh in facet order.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.facets.iter().map(|f| self.triangle(f))
    }

    /// Returns the bounding box of all points, or `None` for an empty mesh.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(&self.points)
    }

    /// The mean z coordinate over the unique points of this mesh.
    pub fn mean_z(&self) -> Option<f32> {
        if self.points.is_empty() {
            return None;
        }
        let sum: f32 = self.points.iter().map(|p| p.z).sum();
        Some(sum / self.points.len() as f32)
    }

    pub fn is_empty(&self) -> bool {
        self.facets.is_empty()
    }
}

impl TriangleMesh for VertexIndex {
    fn from_triangles(triangles: Vec<Triangle>) -> Self {
        // STL style input provides one point for every facet vertex. Points that are
        // bitwise equal (with -0.0 == 0.0) are merged so shared corners are stored once.
        let mut lookup: HashMap<PointKey, u32> = HashMap::with_capacity(triangles.len());
        let mut points = Vec::with_capacity(triangles.len());
        let mut index_of = |p: Vector3| {
            *lookup.entry(point_key(&p)).or_insert_with(|| {
                points.push(p);
                (points.len() - 1) as u32
            })
        };
        let facets = triangles
            .iter()
            .map(|t| Facet {
                p0: index_of(t.p0),
                p1: index_of(t.p1),
                p2: index_of(t.p2),
            })
            .collect();
        VertexIndex { points, facets }
    }

    fn triangle_count(&self) -> usize {
        self.facets.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    fn v(x: f32, y: f32, z: f32) -> Vector3 {
        Vector3 { x, y, z }
    }

    fn quad() -> Vec<Triangle> {
        vec![
            Triangle {
                p0: v(0.0, 0.0, 0.0),
                p1: v(1.0, 0.0, 0.0),
                p2: v(1.0, 1.0, 0.0),
            },
            Triangle {
                p0: v(0.0, 0.0, 0.0),
                p1: v(1.0, 1.0, 0.0),
                p2: v(0.0, 1.0, 2.0),
            },
        ]
    }

    #[test]
    fn shared_points_are_merged() {
        let mesh = VertexIndex::from_triangles(quad());
        assert_eq!(4, mesh.points.len());
        assert_eq!(2, mesh.triangle_count());
        assert_eq!(Facet { p0: 0, p1: 1, p2: 2 }, mesh.facets[0]);
        assert_eq!(Facet { p0: 0, p1: 2, p2: 3 }, mesh.facets[1]);
    }

    #[test]
    fn negative_zero_is_merged() {
        let mut triangles = quad();
        triangles[1].p0 = v(-0.0, 0.0, -0.0);
        let mesh = VertexIndex::from_triangles(triangles);
        assert_eq!(4, mesh.points.len());
    }

    #[test]
    fn triangles_round_trip_in_order() {
        let mesh = VertexIndex::from_triangles(quad());
        let triangles: Vec<_> = mesh.triangles().collect();
        assert_eq!(quad(), triangles);
    }

    #[test]
    fn mean_z_over_unique_points() {
        let mesh = VertexIndex::from_triangles(quad());
        assert_float_eq!(mesh.mean_z().unwrap(), 0.5, abs <= 0.0001);
        assert_eq!(None, VertexIndex::default().mean_z());
    }

    #[test]
    fn bounds_cover_all_points() {
        let mesh = VertexIndex::from_triangles(quad());
        let b = mesh.bounds().unwrap();
        assert_eq!(v(0.0, 0.0, 0.0), b.min);
        assert_eq!(v(1.0, 1.0, 2.0), b.max);
    }
}
