use strata_mesh::{DefaultMesh, TriangleMesh};
use strata_stl::StlReader;
use strata_test_data::{STL_QUAD, STL_QUAD_ASCII, STL_TERRAIN_LAYER_01, TERRAIN_DIR};

#[test]
fn parse_binary_quad() {
    let mesh = strata_stl::parse_stl::<DefaultMesh>(STL_QUAD.bytes).unwrap();
    assert_eq!(STL_QUAD.triangles, mesh.triangle_count());
}

#[test]
fn ascii_and_binary_agree() {
    let binary = strata_stl::parse_stl::<DefaultMesh>(STL_QUAD.bytes).unwrap();
    let ascii = strata_stl::parse_stl::<DefaultMesh>(STL_QUAD_ASCII.bytes).unwrap();
    assert_eq!(STL_QUAD_ASCII.triangles, ascii.triangle_count());
    assert_eq!(binary.points, ascii.points);
    assert_eq!(binary.facets, ascii.facets);
}

#[test]
fn explicit_ascii_rejects_binary() {
    assert!(strata_stl::parse_ascii_stl::<DefaultMesh>(STL_QUAD.bytes).is_err());
}

#[test]
fn read_from_disk() {
    let path = std::path::Path::new(TERRAIN_DIR).join("layer_01.stl");
    let mesh = strata_stl::read_stl::<DefaultMesh, _>(path).unwrap();
    assert_eq!(STL_TERRAIN_LAYER_01.triangles, mesh.triangle_count());
}

#[test]
fn read_through_reader() {
    let mut reader = std::io::Cursor::new(STL_TERRAIN_LAYER_01.bytes);
    let mesh: DefaultMesh = reader.read_stl().unwrap();
    assert_eq!(STL_TERRAIN_LAYER_01.triangles, mesh.triangle_count());
}

#[test]
fn corrupt_file_on_disk() {
    let path = std::path::Path::new(TERRAIN_DIR).join("layer_09.stl");
    assert!(strata_stl::read_stl::<DefaultMesh, _>(path).is_err());
}
