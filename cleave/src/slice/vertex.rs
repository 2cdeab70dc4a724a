use crate::math::*;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Vertex {
    pub position: Vec3,
    pub tex_coord: Vec2,
    pub normal: Vec3,
    pub tangent: Vec4,
}

impl Vertex {
    pub fn at(position: Vec3) -> Self {
        Self { position, ..Default::default() }
    }

    /// Zeroes every attribute not present in `attributes`.
    pub fn masked(self, attributes: Attributes) -> Self {
        Self {
            position: self.position,
            tex_coord: if attributes.tex_coord { self.tex_coord } else { Vec2::ZERO },
            normal: if attributes.normal { self.normal } else { Vec3::ZERO },
            tangent: if attributes.tangent { self.tangent } else { Vec4::ZERO },
        }
    }
}

/// Which optional vertex attributes are carried alongside positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Attributes {
    pub tex_coord: bool,
    pub normal: bool,
    pub tangent: bool,
}

impl Attributes {
    pub const NONE: Attributes = Attributes { tex_coord: false, normal: false, tangent: false };
    pub const ALL: Attributes = Attributes { tex_coord: true, normal: true, tangent: true };
}
