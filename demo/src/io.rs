use anyhow::{Context, Result, anyhow};
use cleave::math::*;
use cleave::slice::*;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use wavefront_obj::obj::{Object, Primitive, VTNIndex};

/// Loads every object of an OBJ file into one mesh, one submesh per material group.
/// Texture coordinates and normals are kept only when every corner has them.
pub fn load_obj<P: AsRef<Path>>(path: P) -> Result<MeshData> {
    let path = path.as_ref();
    let obj_string = std::fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))?;
    let model = wavefront_obj::obj::parse(obj_string)
        .map_err(|e| anyhow!("{}:{}: {}", path.display(), e.line_number, e.message))?;

    let mut mesh = MeshData::default();
    let mut complete_uv = true;
    let mut complete_normals = true;
    for object in &model.objects {
        for geometry in &object.geometry {
            let mut indices = Vec::new();
            for shape in &geometry.shapes {
                let Primitive::Triangle(v0, v1, v2) = shape.primitive else {
                    continue;
                };
                for corner in [v0, v1, v2] {
                    indices.push(mesh.positions.len() as u32);
                    push_corner(&mut mesh, object, corner, &mut complete_uv, &mut complete_normals)?;
                }
            }
            mesh.submeshes.push(indices);
        }
    }
    if !complete_uv {
        mesh.tex_coords.clear();
    }
    if !complete_normals {
        mesh.normals.clear();
    }
    Ok(mesh)
}

fn push_corner(
    mesh: &mut MeshData,
    object: &Object,
    (v, t, n): VTNIndex,
    complete_uv: &mut bool,
    complete_normals: &mut bool,
) -> Result<()> {
    let p = object.vertices.get(v).ok_or_else(|| anyhow!("vertex {v} out of range in {}", object.name))?;
    mesh.positions.push(Vec3::new(p.x as f32, p.y as f32, p.z as f32));

    match t.and_then(|t| object.tex_vertices.get(t)) {
        Some(uv) => mesh.tex_coords.push(Vec2::new(uv.u as f32, uv.v as f32)),
        None => *complete_uv = false,
    }
    match n.and_then(|n| object.normals.get(n)) {
        Some(n) => mesh.normals.push(Vec3::new(n.x as f32, n.y as f32, n.z as f32)),
        None => *complete_normals = false,
    }
    Ok(())
}

/// Writes `mesh` as a single OBJ object, one `usemtl` group per submesh.
pub fn write_obj<W: Write>(out: &mut W, name: &str, mesh: &MeshData) -> std::io::Result<()> {
    let uv = mesh.has_tex_coords();
    let normals = mesh.has_normals();

    writeln!(out, "o {name}")?;
    for p in &mesh.positions {
        writeln!(out, "v {} {} {}", p.x, p.y, p.z)?;
    }
    if uv {
        for t in &mesh.tex_coords {
            writeln!(out, "vt {} {}", t.x, t.y)?;
        }
    }
    if normals {
        for n in &mesh.normals {
            writeln!(out, "vn {} {} {}", n.x, n.y, n.z)?;
        }
    }
    for (submesh, indices) in mesh.submeshes.iter().enumerate() {
        writeln!(out, "usemtl submesh_{submesh}")?;
        for tri in indices.chunks_exact(3) {
            write!(out, "f")?;
            for &i in tri {
                // OBJ indices start at 1
                let i = i + 1;
                match (uv, normals) {
                    (true, true) => write!(out, " {i}/{i}/{i}")?,
                    (true, false) => write!(out, " {i}/{i}")?,
                    (false, true) => write!(out, " {i}//{i}")?,
                    (false, false) => write!(out, " {i}")?,
                }
            }
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Stores hulls as `<name>.obj` files in a directory.
pub struct ObjSink {
    dir: PathBuf,
}

impl ObjSink {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }
}

impl MeshSink for ObjSink {
    type Output = Result<PathBuf>;

    fn create(&mut self, name: &str, mesh: &MeshData) -> Result<PathBuf> {
        let path = self.dir.join(format!("{name}.obj"));
        let file = std::fs::File::create(&path).with_context(|| format!("cannot create {}", path.display()))?;
        let mut out = BufWriter::new(file);
        write_obj(&mut out, name, mesh)?;
        out.flush()?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> MeshData {
        MeshData {
            positions: vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            tex_coords: vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0), Vec2::new(0.0, 1.0)],
            submeshes: vec![vec![0, 1, 2], vec![0, 2, 3]],
            ..Default::default()
        }
    }

    #[test]
    fn test_write_obj() {
        let mut out = Vec::new();
        write_obj(&mut out, "Upper_Hull", &quad()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("o Upper_Hull\n"));
        assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), 4);
        assert_eq!(text.lines().filter(|l| l.starts_with("vt ")).count(), 4);
        assert!(!text.contains("vn "));
        assert!(text.contains("usemtl submesh_1\nf 1/1 3/3 4/4\n"));
    }

    #[test]
    fn test_sink_round_trip() {
        let dir = std::env::temp_dir().join(format!("cleave-demo-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let mut sink = ObjSink::new(&dir);
        let path = sink.create("Lower_Hull", &quad()).unwrap();
        assert_eq!(path, dir.join("Lower_Hull.obj"));

        let loaded = load_obj(&path).unwrap();
        assert_eq!(loaded.triangle_count(), 2);
        assert_eq!(loaded.submeshes.len(), 2);
        assert!(loaded.has_tex_coords());
        assert!(!loaded.has_normals());
        assert_eq!(loaded.validate(), Ok(()));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
