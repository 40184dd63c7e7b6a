/// An STL fixture embedded into the test binary.
pub struct TestModel {
    pub bytes: &'static [u8],
    pub triangles: usize,
}

/// A unit square on the z=0 plane split into two counter-clockwise triangles.
pub const STL_QUAD: TestModel = TestModel {
    bytes: include_bytes!("../../../res/quad/quad-bin.stl"),
    triangles: 2,
};

/// The same square as `STL_QUAD` in the ASCII encoding.
pub const STL_QUAD_ASCII: TestModel = TestModel {
    bytes: include_bytes!("../../../res/quad/quad-ascii.stl"),
    triangles: 2,
};

/// The bottom terrain slab, a closed box spanning 0-20 on x,y and 0-2 on z.
pub const STL_TERRAIN_LAYER_01: TestModel = TestModel {
    bytes: include_bytes!("../../../res/terrain/layer_01.stl"),
    triangles: 12,
};

/// Directory holding a stack of terrain layers named with mixed conventions.
///
/// Layers 1, 3, 5 and 7 are present. Layer 9 exists but is not a valid STL
/// file, and layer 11 is missing.
pub const TERRAIN_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../res/terrain");
