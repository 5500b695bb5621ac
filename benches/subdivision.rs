use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gasket::anim::{GasketObject, Sequencer, TransMode};
use gasket::gasket::{subdivide_tetrahedron, triangle_count, BASE_TETRAHEDRON};
use gasket::math::DEFAULT_PALETTE;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_subdivision_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("subdivision");

    for depth in [0, 2, 4, 6, 8].iter() {
        group.throughput(Throughput::Elements(triangle_count(*depth as u32) as u64));
        group.bench_with_input(BenchmarkId::new("depth", depth), depth, |b, &depth| {
            b.iter(|| black_box(subdivide_tetrahedron(&BASE_TETRAHEDRON, black_box(depth))))
        });
    }

    group.finish();
}

fn bench_vertex_upload(c: &mut Criterion) {
    let mut group = c.benchmark_group("vertex_upload");

    for depth in [3, 6].iter() {
        let mesh = match subdivide_tetrahedron(&BASE_TETRAHEDRON, *depth) {
            Ok(mesh) => mesh,
            Err(e) => panic!("depth {}: {}", depth, e),
        };
        group.bench_with_input(BenchmarkId::new("interleave", depth), &mesh, |b, mesh| {
            b.iter(|| black_box(mesh.to_vertices(&DEFAULT_PALETTE)))
        });
        group.bench_with_input(BenchmarkId::new("flatten", depth), &mesh, |b, mesh| {
            b.iter(|| black_box(mesh.flatten(&DEFAULT_PALETTE)))
        });
    }

    group.finish();
}

fn bench_full_show(c: &mut Criterion) {
    c.bench_function("sequencer_1000_ticks", |b| {
        b.iter(|| {
            let mut obj = GasketObject {
                trans_mode: TransMode::Paralysing,
                pause: false,
                ..Default::default()
            };
            let mut rng = StdRng::seed_from_u64(0);
            let mut sequencer = Sequencer::for_object(&obj);
            for _ in 0..1000 {
                if let Err(e) = sequencer.tick(&mut obj, &mut rng) {
                    panic!("tick failed: {}", e);
                }
            }
            black_box(obj.trans)
        })
    });
}

criterion_group!(
    benches,
    bench_subdivision_depth,
    bench_vertex_upload,
    bench_full_show
);
criterion_main!(benches);
