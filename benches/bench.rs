// Criterion benchmarks for Matchmaker

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use matchmaker::core::{mapper::map_candidates, sorter::sort_by_score};
use matchmaker::services::ProfileGenerator;
use matchmaker::{DiscreteInput, Matchmaker, Profile, ScoringModel};

fn names() -> Vec<String> {
    ["Alex", "Jordan", "Taylor", "Morgan", "Casey", "Riley", "Quinn", "Avery"]
        .iter()
        .map(|n| n.to_string())
        .collect()
}

fn create_user(model: ScoringModel, generator: &mut ProfileGenerator) -> Profile {
    match model {
        ScoringModel::Discrete => Profile::from_discrete(
            0,
            DiscreteInput {
                name: "Me".to_string(),
                political_view: 2,
                children_preference: 1,
                monogamy: 1,
                serious_dating: 1,
            },
        )
        .unwrap(),
        ScoringModel::Weighted => generator.generate(model, 1).unwrap().remove(0),
    }
}

fn bench_matching(c: &mut Criterion) {
    let mut group = c.benchmark_group("matching");

    for model in [ScoringModel::Discrete, ScoringModel::Weighted] {
        let mut generator = ProfileGenerator::new(names(), Some(42));
        let user = create_user(model, &mut generator);
        let matcher = Matchmaker::new(model);

        for candidate_count in [20, 100, 500, 1000].iter() {
            let candidates = generator.generate(model, *candidate_count).unwrap();

            group.bench_with_input(
                BenchmarkId::new(model.name(), candidate_count),
                candidate_count,
                |b, _| b.iter(|| matcher.run(black_box(&user), black_box(&candidates))),
            );
        }
    }

    group.finish();
}

fn bench_map_and_sort(c: &mut Criterion) {
    let mut generator = ProfileGenerator::new(names(), Some(7));
    let user = create_user(ScoringModel::Weighted, &mut generator);
    let candidates = generator.generate(ScoringModel::Weighted, 1000).unwrap();

    c.bench_function("map_and_sort_1000_weighted", |b| {
        b.iter(|| {
            let mut entries =
                map_candidates(ScoringModel::Weighted, black_box(&user), black_box(&candidates));
            sort_by_score(&mut entries);
            black_box(entries)
        });
    });
}

criterion_group!(benches, bench_matching, bench_map_and_sort);

criterion_main!(benches);
