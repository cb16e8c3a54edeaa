use criterion::{black_box, criterion_group, criterion_main, Criterion};
use euclid::{point2, vec2};
use outline_inspector::geometry_utilities::types::*;
use outline_inspector::shapes::{self, BorderRadii};
use outline_inspector::svg::{parse_path_data, to_path_data};
use outline_inspector::Path;
use rand::prelude::*;

fn random_path(rng: &mut StdRng, sub_paths: usize) -> Path {
    let mut path = Path::new();
    for _ in 0..sub_paths {
        path.move_to(point2(rng.gen(), rng.gen()));
        for _ in 0..10 {
            match rng.gen_range(0..3) {
                0 => {
                    path.line_to(point2(rng.gen(), rng.gen()));
                }
                1 => {
                    path.quadratic_bezier_to(point2(rng.gen(), rng.gen()), point2(rng.gen(), rng.gen()));
                }
                _ => {
                    path.cubic_bezier_to(
                        point2(rng.gen(), rng.gen()),
                        point2(rng.gen(), rng.gen()),
                        point2(rng.gen(), rng.gen()),
                    );
                }
            }
        }
        path.close();
    }
    path
}

fn bench_decompose(path: &Path) {
    let mut k = OutlinePoint::origin();
    for curve in path.iter_curves() {
        k += curve.point_at(0.5).to_vector();
    }
    black_box(k);
}

fn bench_displace(path: &Path, indices: &[usize]) {
    for &index in indices {
        let displaced = path.displacing_point(index, vec2(1.0, 1.0));
        black_box(displaced);
    }
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut rng: StdRng = SeedableRng::seed_from_u64(0);
    let path = random_path(&mut rng, 100);
    let d = to_path_data(path.commands());
    let indices: Vec<usize> = (0..100).map(|_| rng.gen_range(0..path.point_count())).collect();

    c.bench_function("parse_path_data", |b| b.iter(|| parse_path_data(black_box(&d))));
    c.bench_function("decompose", |b| b.iter(|| bench_decompose(&path)));
    c.bench_function("displace", |b| b.iter(|| bench_displace(&path, &indices)));
    c.bench_function("rounded_rect", |b| {
        let rect = OutlineRect::new(point2(0.0, 0.0), euclid::size2(100.0, 50.0));
        b.iter(|| shapes::rounded_rect(black_box(&rect), BorderRadii::new_uniform(10.0)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
