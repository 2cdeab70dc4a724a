use super::mesh::MeshData;

/// Turns a mesh into whatever the caller renders or stores, e.g. a scene object or a file.
pub trait MeshSink {
    type Output;

    fn create(&mut self, name: &str, mesh: &MeshData) -> Self::Output;
}

/// The two halves of a sliced mesh. `upper` lies on the side the plane normal points to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlicedHull {
    pub upper: Option<MeshData>,
    pub lower: Option<MeshData>,
}

impl SlicedHull {
    pub const UPPER_NAME: &'static str = "Upper_Hull";
    pub const LOWER_NAME: &'static str = "Lower_Hull";

    pub fn upper_hull(&self) -> Option<&MeshData> {
        self.upper.as_ref()
    }

    pub fn lower_hull(&self) -> Option<&MeshData> {
        self.lower.as_ref()
    }

    /// Hands the upper mesh to `sink` under the name "Upper_Hull".
    pub fn create_upper<S: MeshSink>(&self, sink: &mut S) -> Option<S::Output> {
        self.upper.as_ref().map(|mesh| sink.create(Self::UPPER_NAME, mesh))
    }

    /// Hands the lower mesh to `sink` under the name "Lower_Hull".
    pub fn create_lower<S: MeshSink>(&self, sink: &mut S) -> Option<S::Output> {
        self.lower.as_ref().map(|mesh| sink.create(Self::LOWER_NAME, mesh))
    }
}
