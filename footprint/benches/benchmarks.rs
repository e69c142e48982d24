use criterion::{criterion_group, criterion_main, Criterion};
use footprint::CirclePoints;
use geo::geometry::Coord;

fn circle_footprint(c: &mut Criterion) {
    let mut group = c.benchmark_group("Circle Footprint");

    let center = Coord {
        x: -71.30830716441369,
        y: 44.28309806603165,
    };
    let _2km = 2000.0;

    group.bench_with_input("ring", &(center, _2km), |b, &(center, diameter)| {
        b.iter(|| CirclePoints::<f64>::new(center, diameter).collect::<Vec<_>>())
    });
}

criterion_group!(benches, circle_footprint);
criterion_main!(benches);
