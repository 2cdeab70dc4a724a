use cleave::math::*;
use cleave::slice::offload::{SliceJob, slice_batch};
use cleave::slice::*;
use criterion::{Bencher, BenchmarkId, Criterion, criterion_group, criterion_main};

// UV sphere of radius 1 with smooth normals and spherical texture coordinates
fn build_sphere(rings: u32, segments: u32) -> MeshData {
    let mut mesh = MeshData::default();
    for r in 0..=rings {
        let theta = r as f32 / rings as f32 * std::f32::consts::PI;
        for s in 0..=segments {
            let phi = s as f32 / segments as f32 * std::f32::consts::TAU;
            let p = Vec3::new(theta.sin() * phi.cos(), theta.cos(), theta.sin() * phi.sin());
            mesh.positions.push(p);
            mesh.normals.push(p);
            mesh.tex_coords.push(Vec2::new(s as f32 / segments as f32, r as f32 / rings as f32));
        }
    }
    let stride = segments + 1;
    let mut indices = Vec::new();
    for r in 0..rings {
        for s in 0..segments {
            let i0 = r * stride + s;
            let i1 = i0 + stride;
            indices.extend([i0, i0 + 1, i1, i0 + 1, i1 + 1, i1]);
        }
    }
    mesh.submeshes.push(indices);
    mesh
}

fn criterion_benchmark(c: &mut Criterion) {
    let plane = Plane::new(Vec3::new(0.0, 0.1, 0.0), Vec3::new(0.3, 0.9, 0.1).normalized());

    let mut group = c.benchmark_group("slice_sphere");
    for (rings, segments) in [(16, 32), (64, 128), (256, 512)] {
        let mesh = build_sphere(rings, segments);
        let triangles = mesh.triangle_count();
        group.bench_with_input(BenchmarkId::from_parameter(triangles), &mesh, |bencher: &mut Bencher, mesh| {
            let mut slicer = Slicer::default();
            bencher.iter(|| {
                let hull = slicer.slice(mesh, &plane);
                std::hint::black_box(hull)
            })
        });
    }
    group.finish();

    let mesh = build_sphere(64, 128);
    let jobs: Vec<SliceJob> = (0..64)
        .map(|i| {
            let y = i as f32 / 32.0 - 1.0;
            SliceJob { mesh: &mesh, plane: Plane::new(Vec3::new(0.0, y, 0.0), Vec3::Y) }
        })
        .collect();
    let settings = SliceSettings::default();

    c.bench_function("slice_batch_64", |bencher| {
        bencher.iter(|| std::hint::black_box(slice_batch(&jobs, &settings)))
    });
    c.bench_function("slice_sequential_64", |bencher| {
        let mut slicer = Slicer::default();
        bencher.iter(|| {
            for job in &jobs {
                std::hint::black_box(slicer.slice(job.mesh, &job.plane).ok());
            }
        })
    });

    let points: Vec<Vec3> = (0..1024)
        .map(|i| {
            let a = i as f32 / 1024.0 * std::f32::consts::TAU;
            Vec3::new(a.cos(), 0.0, a.sin())
        })
        .collect();
    c.bench_function("triangulate_1024", |bencher| {
        let mut triangulator = Triangulator::new();
        let mut out = Vec::new();
        bencher.iter(|| {
            out.clear();
            triangulator.triangulate(&points, Vec3::Y, TextureRegion::FULL, &mut out);
            std::hint::black_box(out.len())
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
