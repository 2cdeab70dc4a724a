use super::error::Result;
use super::hull::SlicedHull;
use super::intersection::IntersectionResult;
use super::mesh::{MeshBuilder, MeshData};
use super::plane::{Plane, SideOfPlane};
use super::settings::SliceSettings;
use super::triangle::AttributedTriangle;
use super::triangulator::Triangulator;
use crate::math::*;
use log::{debug, trace, warn};

/// Cuts meshes in two along a plane.
///
/// A slicer owns the scratch memory a cut needs (per-submesh triangle lists, the cross-section
/// point cloud and the triangulator buffers) and reuses it from call to call. It holds no other
/// state, so one slicer per thread is all a parallel caller needs.
#[derive(Debug, Default)]
pub struct Slicer {
    settings: SliceSettings,
    result: IntersectionResult,
    triangulator: Triangulator,
    upper: Vec<Vec<AttributedTriangle>>,
    lower: Vec<Vec<AttributedTriangle>>,
    points: Vec<Vec3>,
    cap: Vec<AttributedTriangle>,
}

impl Slicer {
    pub fn new(settings: SliceSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self { settings, ..Default::default() })
    }

    pub fn settings(&self) -> &SliceSettings {
        &self.settings
    }

    /// Splits `mesh` by `plane`. Points are classified with the slicer's tolerance, not the
    /// plane's.
    ///
    /// Returns `Ok(None)` when the plane does not separate the mesh, that is when it crosses no
    /// triangle or either side would end up without triangles. Both meshes of the returned hull keep the submeshes of `mesh` and
    /// the attribute buffers it has; the cap goes where the settings say.
    pub fn slice(&mut self, mesh: &MeshData, plane: &Plane) -> Result<Option<SlicedHull>> {
        mesh.validate()?;
        let plane = plane.with_tolerance(self.settings.tolerance);

        if let Some(side) = bounds_side(&mesh.bounds(), &plane) {
            debug!("plane misses the mesh bounds, everything is {side:?}");
            return Ok(None);
        }

        let submesh_count = mesh.submeshes.len();
        self.reset(submesh_count);

        let mut split_count = 0usize;
        for submesh in 0..submesh_count {
            for tri in mesh.triangles(submesh) {
                if tri.split(&plane, &mut self.result) {
                    split_count += 1;
                    self.upper[submesh].extend_from_slice(self.result.upper());
                    self.lower[submesh].extend_from_slice(self.result.lower());
                    self.points.extend_from_slice(self.result.points());
                } else if plane.classify(tri.vertex(0).position) == SideOfPlane::Below {
                    self.lower[submesh].push(tri);
                } else {
                    self.upper[submesh].push(tri);
                }
            }
        }

        // touching a face or passing between disjoint parts still puts triangles on both sides
        if split_count == 0 {
            debug!("plane crosses no triangle of the mesh");
            return Ok(None);
        }
        let upper_count: usize = self.upper.iter().map(Vec::len).sum();
        let lower_count: usize = self.lower.iter().map(Vec::len).sum();
        if upper_count == 0 || lower_count == 0 {
            debug!("plane does not separate the mesh ({upper_count} upper, {lower_count} lower triangles)");
            return Ok(None);
        }

        if self.settings.generate_cross_section
            && !self.triangulator.triangulate(&self.points, plane.normal(), self.settings.texture_region, &mut self.cap)
        {
            trace!("no cap for {} cut points", self.points.len());
        }

        let cap_slot = match self.settings.cross_section_material_index {
            Some(i) if (i as usize) < submesh_count => i as usize,
            _ => submesh_count,
        };

        debug!(
            "sliced {} triangles into {upper_count} upper and {lower_count} lower, {} cut points, {} cap triangles",
            mesh.triangle_count(),
            self.points.len(),
            self.cap.len()
        );

        // the cap as triangulated faces along the normal, which is outward for the lower part
        let upper = self.build(mesh, &self.upper, cap_slot, true);
        let lower = self.build(mesh, &self.lower, cap_slot, false);
        Ok(Some(SlicedHull { upper: Some(upper), lower: Some(lower) }))
    }

    /// Like [`Slicer::slice`], for a `plane` given in world space and a mesh placed in the world
    /// by `local_to_world`.
    pub fn slice_world(&mut self, mesh: &MeshData, plane: &Plane, local_to_world: &Mat34) -> Result<Option<SlicedHull>> {
        let Some(local) = plane.transformed(local_to_world) else {
            warn!("cannot bring the plane into the local space of a degenerate transform");
            return Ok(None);
        };
        self.slice(mesh, &local)
    }

    fn reset(&mut self, submesh_count: usize) {
        for list in self.upper.iter_mut().chain(self.lower.iter_mut()) {
            list.clear();
        }
        self.upper.resize_with(submesh_count, Vec::new);
        self.lower.resize_with(submesh_count, Vec::new);
        self.points.clear();
        self.cap.clear();
    }

    fn build(&self, mesh: &MeshData, parts: &[Vec<AttributedTriangle>], cap_slot: usize, flip_cap: bool) -> MeshData {
        let mut builder = MeshBuilder::new(mesh.attributes(), mesh.submeshes.len());
        builder.reserve(parts.iter().map(Vec::len).sum::<usize>() + self.cap.len());
        for (submesh, tris) in parts.iter().enumerate() {
            for tri in tris {
                builder.push(submesh, tri);
            }
        }
        for tri in &self.cap {
            if flip_cap {
                builder.push(cap_slot, &tri.flipped());
            } else {
                builder.push(cap_slot, tri);
            }
        }
        builder.build()
    }
}

/// The side every corner of `bounds` lies on, if they all agree and none touches the plane.
fn bounds_side(bounds: &AABB, plane: &Plane) -> Option<SideOfPlane> {
    let mut corners = bounds.corners().into_iter().map(|p| plane.classify(p));
    let first = corners.next()?;
    (first != SideOfPlane::On && corners.all(|s| s == first)).then_some(first)
}

/// Slices `mesh` with default settings, putting the cap into `cross_section_material_index`.
/// Invalid meshes are logged and reported as no slice.
pub fn slice_mesh(mesh: &MeshData, plane: &Plane, cross_section_material_index: Option<u32>) -> Option<SlicedHull> {
    let settings = SliceSettings { cross_section_material_index, tolerance: plane.tolerance(), ..Default::default() };
    let result = Slicer::new(settings).and_then(|mut slicer| slicer.slice(mesh, plane));
    match result {
        Ok(hull) => hull,
        Err(err) => {
            warn!("cannot slice mesh: {err}");
            None
        }
    }
}
