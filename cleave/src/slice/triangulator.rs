use super::texture_region::TextureRegion;
use super::triangle::AttributedTriangle;
use crate::math::*;

/// Triangulates the convex hull of coplanar points. Keeps its working buffers between calls, so a
/// single instance can serve every cross-section a slicer produces.
#[derive(Debug, Default)]
pub struct Triangulator {
    projected: Vec<(Vec2, Vec3)>,
    hull: Vec<usize>,
}

impl Triangulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Projects `points` onto the plane through the origin with `normal`, builds their convex hull
    /// with the monotone chain algorithm and fans it out from the first hull vertex into `out`.
    ///
    /// The produced triangles face `normal`, carry it normalized as their vertex normal, texture
    /// coordinates spanning the bounds of the projection mapped into `region`, and tangents.
    /// Returns false and leaves `out` untouched for fewer than three points or a hull that
    /// collapses to a line.
    pub fn triangulate(
        &mut self,
        points: &[Vec3],
        normal: Vec3,
        region: TextureRegion,
        out: &mut Vec<AttributedTriangle>,
    ) -> bool {
        if points.len() < 3 {
            return false;
        }
        let Some(normal) = normal.try_normalized() else {
            return false;
        };
        let Some((u, v)) = plane_basis(normal) else {
            return false;
        };

        self.projected.clear();
        self.projected.extend(points.iter().map(|&p| (Vec2::new(dot(p, u), dot(p, v)), p)));

        let mut min = Vec2::new(f32::MAX, f32::MAX);
        let mut max = Vec2::new(f32::MIN, f32::MIN);
        for (p, _) in &self.projected {
            min = min.min(*p);
            max = max.max(*p);
        }

        self.projected.sort_by(|(a, _), (b, _)| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));

        let count = self.projected.len();
        let projected = &self.projected;
        let hull = &mut self.hull;
        hull.clear();
        hull.resize(count + 1, 0);

        let mut k = 0;
        // lower hull
        for i in 0..count {
            while k >= 2 && !turns_left(projected, hull[k - 2], hull[k - 1], i) {
                k -= 1;
            }
            hull[k] = i;
            k += 1;
        }
        // upper hull
        let t = k + 1;
        for i in (0..count - 1).rev() {
            while k >= t && !turns_left(projected, hull[k - 2], hull[k - 1], i) {
                k -= 1;
            }
            hull[k] = i;
            k += 1;
        }

        // the chain ends where it started
        let vert_count = k - 1;
        if vert_count < 3 {
            return false;
        }

        let extent = max - min;
        let to_uv = |p: Vec2| {
            let rel = p - min;
            region.map(Vec2::new(rel.x / extent.x, rel.y / extent.y))
        };

        out.reserve(vert_count - 2);
        let (p0, o0) = projected[hull[0]];
        for w in hull[1..vert_count].windows(2) {
            let (p1, o1) = projected[w[0]];
            let (p2, o2) = projected[w[1]];
            let mut tri = AttributedTriangle::new(o0, o1, o2)
                .with_tex_coords([to_uv(p0), to_uv(p1), to_uv(p2)])
                .with_normals([normal; 3]);
            tri.compute_tangents();
            out.push(tri);
        }
        true
    }
}

fn turns_left(projected: &[(Vec2, Vec3)], a: usize, b: usize, c: usize) -> bool {
    let a = projected[a].0;
    let b = projected[b].0;
    let c = projected[c].0;
    cross2(b - a, c - b) > 0.0
}

/// Orthonormal `(u, v)` spanning the plane with `normal`, oriented so that `cross(u, v) == normal`.
fn plane_basis(normal: Vec3) -> Option<(Vec3, Vec3)> {
    let n = normal.try_normalized()?;
    let u = cross(n, Vec3::Y).try_normalized().or_else(|| cross(n, Vec3::Z).try_normalized())?;
    Some((u, cross(n, u)))
}

/// One-off convenience over [`Triangulator::triangulate`].
pub fn triangulate_convex(points: &[Vec3], normal: Vec3, region: Option<TextureRegion>) -> Option<Vec<AttributedTriangle>> {
    let mut out = Vec::new();
    Triangulator::new()
        .triangulate(points, normal, region.unwrap_or_default(), &mut out)
        .then_some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    fn square() -> [Vec3; 4] {
        [
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, -1.0),
            Vec3::new(-1.0, 0.0, 1.0),
            Vec3::new(-1.0, 0.0, -1.0),
        ]
    }

    #[test]
    fn test_square() {
        let tris = triangulate_convex(&square(), Vec3::Y, None).unwrap();
        assert_eq!(tris.len(), 2);
        let area: f32 = tris.iter().map(|t| t.area()).sum();
        assert_abs_diff_eq!(area, 4.0, epsilon = 1e-5);
    }

    #[rstest]
    #[case(Vec3::Y)]
    #[case(-Vec3::Y)]
    #[case(Vec3::X)]
    #[case(Vec3::new(0.0, 0.6, 0.8))]
    fn test_faces_the_normal(#[case] normal: Vec3) {
        // a hexagon around the origin in the plane with the given normal
        let (u, v) = plane_basis(normal).unwrap();
        let points: Vec<Vec3> = (0..6)
            .map(|i| {
                let a = i as f32 * std::f32::consts::TAU / 6.0;
                u * a.cos() + v * a.sin()
            })
            .collect();

        let tris = triangulate_convex(&points, normal, None).unwrap();
        assert_eq!(tris.len(), 4);
        for t in &tris {
            assert!(dot(t.face_normal(), normal) > 0.0);
            assert!(t.has_tex_coords() && t.has_normals() && t.has_tangents());
            for vertex in t.vertices() {
                assert_eq!(vertex.normal, normal.normalized());
                assert_abs_diff_eq!(dot(vertex.tangent.xyz(), normal), 0.0, epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn test_normals_are_unit_length() {
        let tris = triangulate_convex(&square(), Vec3::new(0.0, 2.0, 0.0), None).unwrap();
        assert_eq!(tris.len(), 2);
        for vertex in tris.iter().flat_map(|t| t.vertices()) {
            assert_eq!(vertex.normal, Vec3::Y);
            assert_abs_diff_eq!(vertex.tangent.xyz().length(), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_interior_points_are_dropped() {
        let mut points = square().to_vec();
        points.push(Vec3::ZERO);
        points.push(Vec3::new(0.5, 0.0, 0.0));
        // an edge midpoint is not a hull vertex either
        points.push(Vec3::new(1.0, 0.0, 0.0));
        let tris = triangulate_convex(&points, Vec3::Y, None).unwrap();
        assert_eq!(tris.len(), 2);
    }

    #[test]
    fn test_uvs_span_the_region() {
        let region = TextureRegion::new(0.5, 0.5, 1.0, 1.0);
        let tris = triangulate_convex(&square(), Vec3::Y, Some(region)).unwrap();
        let mut min = Vec2::new(f32::MAX, f32::MAX);
        let mut max = Vec2::new(f32::MIN, f32::MIN);
        for v in tris.iter().flat_map(|t| t.vertices()) {
            min = min.min(v.tex_coord);
            max = max.max(v.tex_coord);
        }
        assert_abs_diff_eq!(min.x, 0.5, epsilon = 1e-6);
        assert_abs_diff_eq!(min.y, 0.5, epsilon = 1e-6);
        assert_abs_diff_eq!(max.x, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(max.y, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_degenerate_input() {
        assert!(triangulate_convex(&[Vec3::ZERO, Vec3::X], Vec3::Y, None).is_none());
        // collinear
        assert!(triangulate_convex(&[Vec3::ZERO, Vec3::X, Vec3::X * 2.0], Vec3::Y, None).is_none());
        // duplicates only
        assert!(triangulate_convex(&[Vec3::X; 5], Vec3::Y, None).is_none());
        assert!(triangulate_convex(&square(), Vec3::ZERO, None).is_none());
    }

    #[test]
    fn test_scratch_is_reused() {
        let mut triangulator = Triangulator::new();
        let mut out = Vec::new();
        assert!(triangulator.triangulate(&square(), Vec3::Y, TextureRegion::FULL, &mut out));
        assert!(triangulator.triangulate(&square(), Vec3::Y, TextureRegion::FULL, &mut out));
        assert_eq!(out.len(), 4);
    }
}
