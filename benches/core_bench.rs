use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec3;
use road_mesh_editor::mesh::{build_ribbon, build_terrain_strips, RibbonParams, TerrainParams};
use road_mesh_editor::{sample_path, CurvePath, RoadGenerator, RoadOptions, StripMesh};
use std::hint::black_box;

/// Synthetischer Schlangenlinien-Pfad mit `point_count` Ankern.
fn build_synthetic_path(point_count: usize) -> CurvePath {
    let mut path = CurvePath::new();
    for index in 0..point_count {
        let x = index as f32 * 8.0;
        let z = if index % 2 == 0 { 0.0 } else { 6.0 };
        let y = (index % 5) as f32 * 0.25;
        path.add_point(Vec3::new(x, y, z));
    }
    path
}

fn bench_path_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("path_sampling");

    for &anchor_count in &[16usize, 128, 1024] {
        let path = build_synthetic_path(anchor_count);

        group.bench_with_input(
            BenchmarkId::new("sample_path", anchor_count),
            &path,
            |b, path| {
                b.iter(|| {
                    let polyline =
                        sample_path(black_box(path.anchors()), path.resolution(), false);
                    black_box(polyline.len())
                })
            },
        );
    }

    group.finish();
}

fn bench_mesh_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("mesh_build");

    for &anchor_count in &[16usize, 128, 1024] {
        let path = build_synthetic_path(anchor_count);
        let polyline = path.sample();

        let ribbon_params = RibbonParams {
            width: 4.0,
            height_offset: 0.05,
            uv_tiling_density: 0.5,
            uv_tiling_width: 1.0,
            flip_normals: false,
            is_closed: false,
        };
        group.bench_with_input(
            BenchmarkId::new("ribbon", anchor_count),
            &polyline,
            |b, polyline| {
                let mut mesh = StripMesh::new();
                b.iter(|| {
                    build_ribbon(black_box(polyline), &ribbon_params, &mut mesh);
                    black_box(mesh.triangle_count())
                })
            },
        );

        let terrain_params = TerrainParams {
            road_width: 4.0,
            terrain_size: 3.0,
            height_offset: 0.05,
            terrain_height_offset: 0.0,
            uv_tiling_density: 0.5,
            is_closed: false,
        };
        group.bench_with_input(
            BenchmarkId::new("terrain_strips", anchor_count),
            &polyline,
            |b, polyline| {
                let mut left = StripMesh::new();
                let mut right = StripMesh::new();
                b.iter(|| {
                    build_terrain_strips(black_box(polyline), &terrain_params, &mut left, &mut right);
                    black_box(left.triangle_count() + right.triangle_count())
                })
            },
        );
    }

    group.finish();
}

fn bench_change_detection(c: &mut Criterion) {
    let path = build_synthetic_path(256);
    let mut generator = RoadGenerator::new(RoadOptions::default());
    generator.regenerate_if_needed(&path);

    // Der häufigste Fall im Editor: Check ohne Änderung
    c.bench_function("regenerate_if_needed_unchanged", |b| {
        b.iter(|| black_box(generator.regenerate_if_needed(black_box(&path))))
    });
}

criterion_group!(
    benches,
    bench_path_sampling,
    bench_mesh_build,
    bench_change_detection
);
criterion_main!(benches);
