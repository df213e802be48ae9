//! Mesh primitives emitted by the generator

use glam::DVec3;

/// A mesh vertex. Carries no identity beyond its coordinates; shared corners
/// are repeated per triangle, never deduplicated.
pub type Vertex = DVec3;

/// Three vertices in emission order. The order fixes the facet orientation
/// (right-hand rule over v1 -> v2 -> v3).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub v1: Vertex,
    pub v2: Vertex,
    pub v3: Vertex,
}

impl Triangle {
    /// Create a triangle from three vertices
    pub fn new(v1: Vertex, v2: Vertex, v3: Vertex) -> Self {
        Self { v1, v2, v3 }
    }

    /// Vertices in emission order
    pub fn vertices(&self) -> [Vertex; 3] {
        [self.v1, self.v2, self.v3]
    }

    /// Unit facet normal, or zero for a degenerate triangle
    pub fn normal(&self) -> DVec3 {
        (self.v2 - self.v1)
            .cross(self.v3 - self.v1)
            .normalize_or_zero()
    }
}
