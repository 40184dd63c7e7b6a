use cgmath::InnerSpace;

pub type Vector3 = cgmath::Vector3<f32>;

#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Triangle {
    pub p0: Vector3,
    pub p1: Vector3,
    pub p2: Vector3,
}

impl Triangle {
    /// Returns the (un-normalized) face normal.
    ///
    /// Vertices are expected in counter-clockwise order when viewed from the
    /// front of the face, so the normal follows the right-hand rule.
    pub fn normal(&self) -> Vector3 {
        (self.p1 - self.p0).cross(self.p2 - self.p0)
    }

    /// Returns the face normal scaled to unit length.
    ///
    /// Degenerate triangles have no direction; `epsilon` is added to the
    /// magnitude so these map to a (near) zero vector instead of NaN.
    pub fn unit_normal(&self, epsilon: f32) -> Vector3 {
        let n = self.normal();
        n / (n.magnitude() + epsilon)
    }
}

impl std::default::Default for Triangle {
    fn default() -> Self {
        let origin = Vector3 {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        };
        Self {
            p0: origin,
            p1: origin,
            p2: origin,
        }
    }
}

/// Axis aligned bounding box.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Bounds {
    pub min: Vector3,
    pub max: Vector3,
}

impl Bounds {
    /// Bounds of a single point.
    pub fn point(p: Vector3) -> Self {
        Self { min: p, max: p }
    }

    /// Computes the bounds of a set of points, or `None` if there are none.
    pub fn from_points<'a, I: IntoIterator<Item = &'a Vector3>>(points: I) -> Option<Self> {
        let mut points = points.into_iter();
        let first = Self::point(*points.next()?);
        Some(points.fold(first, |b, p| b.extend(*p)))
    }

    pub fn extend(self, p: Vector3) -> Self {
        Self {
            min: Vector3 {
                x: self.min.x.min(p.x),
                y: self.min.y.min(p.y),
                z: self.min.z.min(p.z),
            },
            max: Vector3 {
                x: self.max.x.max(p.x),
                y: self.max.y.max(p.y),
                z: self.max.z.max(p.z),
            },
        }
    }

    pub fn union(self, other: Bounds) -> Self {
        self.extend(other.min).extend(other.max)
    }

    pub fn center(&self) -> Vector3 {
        (self.min + self.max) / 2.0
    }

    pub fn size(&self) -> Vector3 {
        self.max - self.min
    }

    /// The larger of the x and y extents. The z extent is ignored.
    pub fn planar_extent(&self) -> f32 {
        let size = self.size();
        size.x.max(size.y)
    }
}
