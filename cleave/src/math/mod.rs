pub mod aabb;
pub mod dot;
pub mod mat33;
pub mod mat34;
pub mod vec2;
pub mod vec3;
pub mod vec4;

pub use aabb::*;
pub use dot::*;
pub use mat33::*;
pub use mat34::*;
pub use vec2::*;
pub use vec3::*;
pub use vec4::*;
