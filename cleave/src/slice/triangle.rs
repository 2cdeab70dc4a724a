use super::intersection::IntersectionResult;
use super::intersector::intersect;
use super::plane::Plane;
use super::vertex::{Attributes, Vertex};
use crate::math::*;

/// A triangle whose positions are always set and whose texture coordinates, normals and tangents
/// are optional. Attributes of new points inside the triangle are interpolated barycentrically.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct AttributedTriangle {
    vertices: [Vertex; 3],
    attributes: Attributes,
}

impl AttributedTriangle {
    pub fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self { vertices: [Vertex::at(a), Vertex::at(b), Vertex::at(c)], attributes: Attributes::NONE }
    }

    pub fn from_vertices(vertices: [Vertex; 3], attributes: Attributes) -> Self {
        Self { vertices: vertices.map(|v| v.masked(attributes)), attributes }
    }

    pub fn with_tex_coords(mut self, uv: [Vec2; 3]) -> Self {
        self.set_tex_coords(uv);
        self
    }

    pub fn with_normals(mut self, normals: [Vec3; 3]) -> Self {
        self.set_normals(normals);
        self
    }

    pub fn with_tangents(mut self, tangents: [Vec4; 3]) -> Self {
        self.set_tangents(tangents);
        self
    }

    pub fn set_tex_coords(&mut self, uv: [Vec2; 3]) {
        for (v, uv) in self.vertices.iter_mut().zip(uv) {
            v.tex_coord = uv;
        }
        self.attributes.tex_coord = true;
    }

    pub fn set_normals(&mut self, normals: [Vec3; 3]) {
        for (v, n) in self.vertices.iter_mut().zip(normals) {
            v.normal = n;
        }
        self.attributes.normal = true;
    }

    pub fn set_tangents(&mut self, tangents: [Vec4; 3]) {
        for (v, t) in self.vertices.iter_mut().zip(tangents) {
            v.tangent = t;
        }
        self.attributes.tangent = true;
    }

    pub fn vertices(&self) -> &[Vertex; 3] {
        &self.vertices
    }

    pub fn vertex(&self, i: usize) -> Vertex {
        self.vertices[i]
    }

    pub fn positions(&self) -> [Vec3; 3] {
        self.vertices.map(|v| v.position)
    }

    pub fn attributes(&self) -> Attributes {
        self.attributes
    }

    pub fn has_tex_coords(&self) -> bool {
        self.attributes.tex_coord
    }

    pub fn has_normals(&self) -> bool {
        self.attributes.normal
    }

    pub fn has_tangents(&self) -> bool {
        self.attributes.tangent
    }

    /// Unnormalized `cross(b - a, c - a)`; points to the side the triangle faces.
    pub fn face_normal(&self) -> Vec3 {
        let [a, b, c] = self.positions();
        cross(b - a, c - a)
    }

    pub fn area(&self) -> f32 {
        self.face_normal().length() * 0.5
    }

    pub fn is_degenerate(&self) -> bool {
        self.face_normal().length_squared() <= f32::EPSILON * f32::EPSILON
    }

    /// True when the triangle winds clockwise seen from the tip of `reference`.
    pub fn is_clockwise(&self, reference: Vec3) -> bool {
        dot(self.face_normal(), reference) < 0.0
    }

    /// Barycentric weights of `p` with respect to `(a, b, c)`, computed with 2D areas in the
    /// coordinate plane onto which the triangle has the largest projection.
    pub fn barycentric(&self, p: Vec3) -> Vec3 {
        let [a, b, c] = self.positions();

        // exact at the corners so attributes of original vertices survive bit for bit
        if p == a {
            return Vec3::X;
        } else if p == b {
            return Vec3::Y;
        } else if p == c {
            return Vec3::Z;
        }

        let m = cross(b - a, c - a);
        let am = m.abs();

        let (nu, nv, ood) = if am.x >= am.y && am.x >= am.z {
            (
                tri_area_2d(p.y, p.z, b.y, b.z, c.y, c.z),
                tri_area_2d(p.y, p.z, c.y, c.z, a.y, a.z),
                1.0 / m.x,
            )
        } else if am.y >= am.x && am.y >= am.z {
            (
                tri_area_2d(p.x, p.z, b.x, b.z, c.x, c.z),
                tri_area_2d(p.x, p.z, c.x, c.z, a.x, a.z),
                1.0 / -m.y,
            )
        } else {
            (
                tri_area_2d(p.x, p.y, b.x, b.y, c.x, c.y),
                tri_area_2d(p.x, p.y, c.x, c.y, a.x, a.y),
                1.0 / m.z,
            )
        };

        let u = nu * ood;
        let v = nv * ood;
        Vec3::new(u, v, 1.0 - u - v)
    }

    pub fn generate_tex_coord(&self, p: Vec3) -> Vec2 {
        if !self.attributes.tex_coord {
            return Vec2::ZERO;
        }
        let [a, b, c] = self.vertices.map(|v| v.tex_coord);
        blend(a, b, c, self.barycentric(p))
    }

    pub fn generate_normal(&self, p: Vec3) -> Vec3 {
        if !self.attributes.normal {
            return Vec3::ZERO;
        }
        let [a, b, c] = self.vertices.map(|v| v.normal);
        blend(a, b, c, self.barycentric(p))
    }

    pub fn generate_tangent(&self, p: Vec3) -> Vec4 {
        if !self.attributes.tangent {
            return Vec4::ZERO;
        }
        let [a, b, c] = self.vertices.map(|v| v.tangent);
        blend(a, b, c, self.barycentric(p))
    }

    /// A vertex at `p` carrying every present attribute, interpolated from this triangle.
    pub fn generate_vertex(&self, p: Vec3) -> Vertex {
        let w = self.barycentric(p);
        let [a, b, c] = &self.vertices;
        Vertex {
            position: p,
            tex_coord: blend(a.tex_coord, b.tex_coord, c.tex_coord, w),
            normal: blend(a.normal, b.normal, c.normal, w),
            tangent: blend(a.tangent, b.tangent, c.tangent, w),
        }
        .masked(self.attributes)
    }

    /// A triangle over three vertices of (or interpolated from) this one, with the same attributes.
    pub fn sub_triangle(&self, a: Vertex, b: Vertex, c: Vertex) -> Self {
        Self { vertices: [a, b, c], attributes: self.attributes }
    }

    /// The same triangle seen from the other side: reversed winding, negated normals and
    /// flipped tangent handedness.
    pub fn flipped(&self) -> Self {
        let [a, b, c] = self.vertices;
        let mut vertices = [a, c, b];
        for v in vertices.iter_mut() {
            v.normal = -v.normal;
            v.tangent.w = -v.tangent.w;
        }
        Self { vertices, attributes: self.attributes }
    }

    /// Derives per-vertex tangents from positions and texture coordinates, orthonormalized
    /// against each vertex normal. Needs both texture coordinates and normals; returns false
    /// and leaves the triangle untouched otherwise, or when the UV mapping is degenerate.
    pub fn compute_tangents(&mut self) -> bool {
        if !self.attributes.tex_coord || !self.attributes.normal {
            return false;
        }

        let [v1, v2, v3] = self.positions();
        let [w1, w2, w3] = self.vertices.map(|v| v.tex_coord);

        let e1 = v2 - v1;
        let e2 = v3 - v1;
        let s1 = w2.x - w1.x;
        let s2 = w3.x - w1.x;
        let t1 = w2.y - w1.y;
        let t2 = w3.y - w1.y;

        let r = 1.0 / (s1 * t2 - s2 * t1);
        if !r.is_finite() {
            return false;
        }

        let sdir = (e1 * t2 - e2 * t1) * r;
        let tdir = (e2 * s1 - e1 * s2) * r;

        let mut tangents = [Vec4::ZERO; 3];
        for (tangent, v) in tangents.iter_mut().zip(&self.vertices) {
            let Some(n) = v.normal.try_normalized() else {
                return false;
            };
            let Some(t) = (sdir - n * dot(n, sdir)).try_normalized() else {
                return false;
            };
            let w = if dot(cross(n, t), tdir) < 0.0 { -1.0 } else { 1.0 };
            *tangent = t.extend(w);
        }

        self.set_tangents(tangents);
        true
    }

    /// Splits the triangle by `plane` into `result`. Returns false when the plane does not cut
    /// through the triangle, in which case `result` holds no triangles.
    pub fn split(&self, plane: &Plane, result: &mut IntersectionResult) -> bool {
        intersect(plane, self, result);
        result.is_valid()
    }
}

fn tri_area_2d(x1: f32, y1: f32, x2: f32, y2: f32, x3: f32, y3: f32) -> f32 {
    (x1 - x2) * (y2 - y3) - (x2 - x3) * (y1 - y2)
}
