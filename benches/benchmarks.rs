criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        building_slot_tables,
        encoding_random_observation,
        encoding_observation_maximum,
        encoding_map_topology,
        normalizing_observation,
}

fn building_slot_tables(c: &mut criterion::Criterion) {
    c.bench_function("build card and boss slot tables", |b| {
        b.iter(|| Encoder::new())
    });
}

fn encoding_random_observation(c: &mut criterion::Criterion) {
    let encoder = Encoder::new();
    let ref game = GameContext::random();
    c.bench_function("encode a random GameContext", |b| {
        b.iter(|| encoder.observe(game))
    });
}

fn encoding_observation_maximum(c: &mut criterion::Criterion) {
    c.bench_function("build the Observation maximum", |b| {
        b.iter(|| Encoder::maximum())
    });
}

fn encoding_map_topology(c: &mut criterion::Criterion) {
    let map = Map::random();
    c.bench_function("encode a random Map topology", |b| {
        b.iter(|| map.topology())
    });
}

fn normalizing_observation(c: &mut criterion::Criterion) {
    let ref max = Encoder::maximum();
    let obs = Encoder::new()
        .observe(&GameContext::random())
        .expect("random contexts are encodable");
    c.bench_function("normalize an Observation", |b| {
        b.iter(|| obs.normalized(max))
    });
}

use stsnet::Arbitrary;
use stsnet::Encoder;
use stsnet::game::GameContext;
use stsnet::map::Map;
