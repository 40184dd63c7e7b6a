use strata_mesh::{Bounds, TriangleMesh, VertexIndex};

/// A mesh tagged with the layer number it was loaded for.
#[derive(Debug, Clone)]
pub struct Layer {
    pub mesh: VertexIndex,
    pub number: i32,
}

/// All meshes destined for one render.
///
/// The scene is owned by a single generation run. Transform stages take it by
/// `&mut` and the renderer only ever borrows it immutably.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    layers: Vec<Layer>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, mesh: VertexIndex, number: i32) {
        self.layers.push(Layer { mesh, number });
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub(crate) fn layers_mut(&mut self) -> &mut [Layer] {
        &mut self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Total number of faces across all layers.
    pub fn face_count(&self) -> usize {
        self.layers.iter().map(|l| l.mesh.triangle_count()).sum()
    }

    /// One bounding box over the points of every layer.
    pub fn bounds(&self) -> Option<Bounds> {
        self.layers
            .iter()
            .filter_map(|l| l.mesh.bounds())
            .reduce(Bounds::union)
    }

    /// The larger of the combined x and y extents, or `None` for a scene without points.
    pub fn planar_extent(&self) -> Option<f32> {
        self.bounds().map(|b| b.planar_extent())
    }
}

impl FromIterator<(VertexIndex, i32)> for Scene {
    fn from_iter<I: IntoIterator<Item = (VertexIndex, i32)>>(iter: I) -> Self {
        Self {
            layers: iter
                .into_iter()
                .map(|(mesh, number)| Layer { mesh, number })
                .collect(),
        }
    }
}
