use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{Read, Seek};
use std::path::Path;
use strata_mesh::{Triangle, TriangleMesh, Vector3};

mod ascii;

fn read_vector<T: Read>(f: &mut T) -> std::io::Result<Vector3> {
    Ok(Vector3 {
        x: f.read_f32::<LittleEndian>()?,
        y: f.read_f32::<LittleEndian>()?,
        z: f.read_f32::<LittleEndian>()?,
    })
}

fn read_binary<M: TriangleMesh, T: Read + Seek>(f: &mut T) -> std::io::Result<M> {
    // Binary files start with an 80 byte header. There is no defined structure for this
    // header but some implementations will stash some metadata in this header. For now
    // we'll just skip the header and load the geometry.
    f.seek(std::io::SeekFrom::Start(80))?;

    // Immediately following the header is an unsigned 32-bit integer that indicates the
    // number of triagles that follow.
    let n_triangles = f.read_u32::<LittleEndian>()? as usize;

    // Don't trust the count for the allocation; a corrupt header could ask for gigabytes.
    let mut data = Vec::<Triangle>::with_capacity(n_triangles.min(1 << 16));
    for _ in 0..n_triangles {
        // Each triangle is specified by a normal vector followed by 3 verticies of the
        // triangle. While the normal vector may be included, it is generally expected
        // that verticies be listed in counter-clockwise order and so the normal vector
        // maybe specified as (0, 0, 0).
        let _normal = read_vector(f)?;
        data.push(Triangle {
            p0: read_vector(f)?,
            p1: read_vector(f)?,
            p2: read_vector(f)?,
        });
        // After the triangle geometry there is a 2-byte unsigned integer called the
        // "attribute byte count". There is no standard structure of this field, but
        // some applications use this for color data.
        let _attribute_byte_count = f.read_u16::<LittleEndian>()?;
    }
    Ok(M::from_triangles(data))
}

/// Returns true if `data` looks like an ASCII STL file.
///
/// Binary headers are free-form and some exporters write `solid` there too, so callers
/// should still fall back to the binary reader if ASCII parsing fails.
pub fn is_ascii(data: &[u8]) -> bool {
    let trimmed = data
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .map_or(&data[..0], |start| &data[start..]);
    trimmed.starts_with(b"solid")
}

/// Reads an STL file from disk, detecting ASCII or binary encoding.
pub fn read_stl<M: TriangleMesh, P: AsRef<Path>>(p: P) -> std::io::Result<M> {
    let data = std::fs::read(p)?;
    parse_stl(&data)
}

/// Parses an in-memory STL file, detecting ASCII or binary encoding.
pub fn parse_stl<M: TriangleMesh>(data: &[u8]) -> std::io::Result<M> {
    if is_ascii(data) {
        if let Ok(triangles) = ascii::parse(data) {
            return Ok(M::from_triangles(triangles));
        }
    }
    let mut c = std::io::Cursor::new(data);
    read_binary(&mut c)
}

/// Parses an ASCII STL file.
pub fn parse_ascii_stl<M: TriangleMesh>(data: &[u8]) -> std::io::Result<M> {
    ascii::parse(data).map(M::from_triangles)
}

pub trait StlReader: Read {
    fn read_stl<M: TriangleMesh>(&mut self) -> std::io::Result<M>;
}

impl<T: Read> StlReader for T {
    fn read_stl<M: TriangleMesh>(&mut self) -> std::io::Result<M> {
        let mut data = Vec::new();
        self.read_to_end(&mut data)?;
        parse_stl(&data)
    }
}
