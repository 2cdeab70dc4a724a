use thiserror::Error;

/// Errors reported by the strict slicing entry points.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SliceError {
    /// Mesh has no positions or no triangles.
    #[error("mesh is empty")]
    EmptyMesh,

    /// A submesh references a vertex that does not exist.
    #[error("submesh {submesh} references vertex {index}, but the mesh has {vertex_count} vertices")]
    IndexOutOfRange { submesh: usize, index: u32, vertex_count: usize },

    /// A submesh index list does not describe whole triangles.
    #[error("submesh {submesh} has {len} indices, which is not a multiple of 3")]
    IncompleteTriangle { submesh: usize, len: usize },

    /// Invalid slice settings.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}

pub type Result<T> = std::result::Result<T, SliceError>;
