pub mod error;
pub mod hull;
pub mod intersection;
pub mod intersector;
pub mod mesh;
pub mod offload;
pub mod plane;
pub mod settings;
pub mod slicer;
pub mod texture_region;
pub mod triangle;
pub mod triangulator;
pub mod vertex;

pub use error::SliceError;
pub use hull::*;
pub use intersection::*;
pub use intersector::*;
pub use mesh::*;
pub use plane::*;
pub use settings::*;
pub use slicer::*;
pub use texture_region::*;
pub use triangle::*;
pub use triangulator::*;
pub use vertex::*;
