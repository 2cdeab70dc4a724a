use super::intersection::IntersectionResult;
use super::plane::Plane;
use super::plane::SideOfPlane::{Above, On};
use super::triangle::AttributedTriangle;
use log::trace;

/// Splits `tri` by `plane`, writing the pieces and the cut points into `result`.
///
/// `result` is cleared first and stays invalid when the plane does not separate the triangle:
/// all three vertices on one side, two of them on the plane, a single vertex on the plane with the
/// other two on the same side, a zero-area triangle, or an edge that fails to intersect. Otherwise
/// a triangle with one vertex on the plane yields two pieces, and one crossed by two edges yields
/// three. Every piece keeps the winding of `tri`, and new vertices take their attributes from `tri`.
pub fn intersect(plane: &Plane, tri: &AttributedTriangle, result: &mut IntersectionResult) {
    result.clear();

    if tri.is_degenerate() {
        trace!("skipping zero-area triangle {:?}", tri.positions());
        return;
    }

    let [a, b, c] = tri.positions();
    let [va, vb, vc] = *tri.vertices();
    let sa = plane.classify(a);
    let sb = plane.classify(b);
    let sc = plane.classify(c);

    if sa == sb && sb == sc {
        return;
    }
    if (sa == On && (sb == On || sc == On)) || (sb == On && sc == On) {
        return;
    }
    if (sa == On && sb == sc) || (sb == On && sa == sc) || (sc == On && sa == sb) {
        return;
    }

    // one vertex on the plane, the opposite edge crosses it
    if sa == On {
        let Some((_, q)) = plane.intersect_segment(b, c) else {
            trace!("edge b-c missed the plane");
            return;
        };
        let vq = tri.generate_vertex(q);
        let ta = tri.sub_triangle(va, vb, vq);
        let tb = tri.sub_triangle(va, vq, vc);
        result.add_point(q);
        result.add_point(a);
        if sb == Above {
            result.add_upper(ta);
            result.add_lower(tb);
        } else {
            result.add_upper(tb);
            result.add_lower(ta);
        }
        return;
    }
    if sb == On {
        let Some((_, q)) = plane.intersect_segment(a, c) else {
            trace!("edge a-c missed the plane");
            return;
        };
        let vq = tri.generate_vertex(q);
        let ta = tri.sub_triangle(va, vb, vq);
        let tb = tri.sub_triangle(vq, vb, vc);
        result.add_point(q);
        result.add_point(b);
        if sa == Above {
            result.add_upper(ta);
            result.add_lower(tb);
        } else {
            result.add_upper(tb);
            result.add_lower(ta);
        }
        return;
    }
    if sc == On {
        let Some((_, q)) = plane.intersect_segment(a, b) else {
            trace!("edge a-b missed the plane");
            return;
        };
        let vq = tri.generate_vertex(q);
        let ta = tri.sub_triangle(va, vq, vc);
        let tb = tri.sub_triangle(vq, vb, vc);
        result.add_point(q);
        result.add_point(c);
        if sa == Above {
            result.add_upper(ta);
            result.add_lower(tb);
        } else {
            result.add_upper(tb);
            result.add_lower(ta);
        }
        return;
    }

    // two edges cross: one lone vertex on one side, a quad split in two on the other
    let (alone, pair) = if sa != sb {
        let Some((_, qa)) = plane.intersect_segment(a, b) else {
            trace!("edge a-b missed the plane");
            return;
        };
        let vqa = tri.generate_vertex(qa);
        if sa == sc {
            // b is alone
            let Some((_, qb)) = plane.intersect_segment(b, c) else {
                trace!("edge b-c missed the plane");
                return;
            };
            let vqb = tri.generate_vertex(qb);
            result.add_point(qa);
            result.add_point(qb);
            (
                (sb, tri.sub_triangle(vqa, vb, vqb)),
                [tri.sub_triangle(va, vqa, vqb), tri.sub_triangle(va, vqb, vc)],
            )
        } else {
            // a is alone
            let Some((_, qb)) = plane.intersect_segment(a, c) else {
                trace!("edge a-c missed the plane");
                return;
            };
            let vqb = tri.generate_vertex(qb);
            result.add_point(qa);
            result.add_point(qb);
            (
                (sa, tri.sub_triangle(va, vqa, vqb)),
                [tri.sub_triangle(vqa, vb, vc), tri.sub_triangle(vqb, vqa, vc)],
            )
        }
    } else {
        // c is alone
        let Some((_, qa)) = plane.intersect_segment(c, a) else {
            trace!("edge c-a missed the plane");
            return;
        };
        let Some((_, qb)) = plane.intersect_segment(c, b) else {
            trace!("edge c-b missed the plane");
            return;
        };
        let vqa = tri.generate_vertex(qa);
        let vqb = tri.generate_vertex(qb);
        result.add_point(qa);
        result.add_point(qb);
        (
            (sc, tri.sub_triangle(vqa, vqb, vc)),
            [tri.sub_triangle(va, vqb, vqa), tri.sub_triangle(va, vb, vqb)],
        )
    };

    let (side, lone) = alone;
    if side == Above {
        result.add_upper(lone);
        pair.into_iter().for_each(|t| result.add_lower(t));
    } else {
        result.add_lower(lone);
        pair.into_iter().for_each(|t| result.add_upper(t));
    }
}
