use super::error::{Result, SliceError};
use super::triangle::AttributedTriangle;
use super::vertex::{Attributes, Vertex};
use crate::math::*;

/// An indexed triangle mesh split into submeshes, one index list per material slot.
///
/// Optional attribute buffers are either empty or exactly as long as `positions`; a buffer of any
/// other length is treated as absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    pub positions: Vec<Vec3>,
    pub tex_coords: Vec<Vec2>, // empty if absent
    pub normals: Vec<Vec3>,    // empty if absent
    pub tangents: Vec<Vec4>,   // empty if absent
    pub submeshes: Vec<Vec<u32>>,
}

impl MeshData {
    pub fn has_tex_coords(&self) -> bool {
        !self.positions.is_empty() && self.tex_coords.len() == self.positions.len()
    }

    pub fn has_normals(&self) -> bool {
        !self.positions.is_empty() && self.normals.len() == self.positions.len()
    }

    pub fn has_tangents(&self) -> bool {
        !self.positions.is_empty() && self.tangents.len() == self.positions.len()
    }

    pub fn attributes(&self) -> Attributes {
        Attributes { tex_coord: self.has_tex_coords(), normal: self.has_normals(), tangent: self.has_tangents() }
    }

    pub fn triangle_count(&self) -> usize {
        self.submeshes.iter().map(|s| s.len() / 3).sum()
    }

    pub fn bounds(&self) -> AABB {
        AABB::from_points(&self.positions)
    }

    /// Checks that the mesh has triangles and that every index list describes whole triangles
    /// over existing vertices.
    pub fn validate(&self) -> Result<()> {
        if self.positions.is_empty() || self.submeshes.iter().all(|s| s.is_empty()) {
            return Err(SliceError::EmptyMesh);
        }
        let vertex_count = self.positions.len();
        for (submesh, indices) in self.submeshes.iter().enumerate() {
            if indices.len() % 3 != 0 {
                return Err(SliceError::IncompleteTriangle { submesh, len: indices.len() });
            }
            if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(SliceError::IndexOutOfRange { submesh, index, vertex_count });
            }
        }
        Ok(())
    }

    /// The triangle over three vertex indices, carrying the attributes this mesh has.
    /// Indices must be in range.
    pub fn triangle(&self, [i0, i1, i2]: [u32; 3]) -> AttributedTriangle {
        let attributes = self.attributes();
        let vertex = |i: u32| {
            let i = i as usize;
            Vertex {
                position: self.positions[i],
                tex_coord: if attributes.tex_coord { self.tex_coords[i] } else { Vec2::ZERO },
                normal: if attributes.normal { self.normals[i] } else { Vec3::ZERO },
                tangent: if attributes.tangent { self.tangents[i] } else { Vec4::ZERO },
            }
        };
        AttributedTriangle::from_vertices([vertex(i0), vertex(i1), vertex(i2)], attributes)
    }

    /// Triangles of one submesh. The mesh must be valid.
    pub fn triangles(&self, submesh: usize) -> impl Iterator<Item = AttributedTriangle> + '_ {
        self.submeshes[submesh].chunks_exact(3).map(|t| self.triangle([t[0], t[1], t[2]]))
    }

    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    pub fn tex_coord_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.tex_coords)
    }

    pub fn normal_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.normals)
    }

    pub fn tangent_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.tangents)
    }

    pub fn index_bytes(&self, submesh: usize) -> Option<&[u8]> {
        self.submeshes.get(submesh).map(|s| bytemuck::cast_slice(s.as_slice()))
    }
}

/// Assembles a mesh out of triangles, giving every triangle three vertices of its own.
/// Only the attributes chosen up front get buffers; the rest of each vertex is dropped.
pub struct MeshBuilder {
    mesh: MeshData,
    attributes: Attributes,
}

impl MeshBuilder {
    pub fn new(attributes: Attributes, submesh_count: usize) -> Self {
        Self { mesh: MeshData { submeshes: vec![Vec::new(); submesh_count], ..Default::default() }, attributes }
    }

    pub fn reserve(&mut self, triangles: usize) {
        let vertices = triangles * 3;
        self.mesh.positions.reserve(vertices);
        if self.attributes.tex_coord {
            self.mesh.tex_coords.reserve(vertices);
        }
        if self.attributes.normal {
            self.mesh.normals.reserve(vertices);
        }
        if self.attributes.tangent {
            self.mesh.tangents.reserve(vertices);
        }
    }

    /// Appends `tri` to `submesh`, growing the submesh list when needed.
    pub fn push(&mut self, submesh: usize, tri: &AttributedTriangle) {
        if submesh >= self.mesh.submeshes.len() {
            self.mesh.submeshes.resize(submesh + 1, Vec::new());
        }
        let first = self.mesh.positions.len() as u32;
        for v in tri.vertices() {
            self.mesh.positions.push(v.position);
            if self.attributes.tex_coord {
                self.mesh.tex_coords.push(v.tex_coord);
            }
            if self.attributes.normal {
                self.mesh.normals.push(v.normal);
            }
            if self.attributes.tangent {
                self.mesh.tangents.push(v.tangent);
            }
        }
        self.mesh.submeshes[submesh].extend([first, first + 1, first + 2]);
    }

    pub fn build(self) -> MeshData {
        self.mesh
    }
}
