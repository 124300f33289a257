// Criterion benchmarks for TrueMatch

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use truematch::core::{distance::haversine_distance, scoring::interest_score};
use truematch::models::{AgeRange, Gender, Location, LookingFor, Preferences, Profile};
use truematch::Matcher;

const INTERESTS: &[&str] = &[
    "hiking", "music", "art", "tennis", "cooking", "travel", "yoga", "reading",
    "gaming", "climbing", "cycling", "photography",
];

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn create_candidate(id: usize, lat: f64, lon: f64) -> Profile {
    Profile {
        interests: Some(
            INTERESTS
                .iter()
                .skip(id % 6)
                .take(3 + id % 4)
                .map(|s| s.to_string())
                .collect(),
        ),
        location: Some(Location::new(lat, lon)),
        date_of_birth: NaiveDate::from_ymd_opt(1990 + (id % 10) as i32, 1 + (id % 12) as u32, 1),
        gender: Some(if id % 2 == 0 { Gender::Female } else { Gender::Male }),
        looking_for: Some(if id % 3 == 0 { LookingFor::Both } else { LookingFor::Male }),
        preferences: Some(Preferences {
            distance: 50.0,
            age_range: AgeRange::new(21, 40),
        }),
        ..Profile::new(id.to_string())
    }
}

fn create_requester() -> Profile {
    Profile {
        gender: Some(Gender::Male),
        looking_for: Some(LookingFor::Female),
        ..create_candidate(usize::MAX, 40.7128, -74.0060)
    }
}

fn bench_haversine_distance(c: &mut Criterion) {
    let from = Location::new(40.7128, -74.0060);
    let to = Location::new(40.72, -74.01);
    c.bench_function("haversine_distance", |b| {
        b.iter(|| haversine_distance(black_box(&from), black_box(&to)));
    });
}

fn bench_interest_score(c: &mut Criterion) {
    let a: Vec<String> = INTERESTS[..6].iter().map(|s| s.to_string()).collect();
    let b: Vec<String> = INTERESTS[3..].iter().map(|s| s.to_string()).collect();
    c.bench_function("interest_score", |bench| {
        bench.iter(|| interest_score(black_box(&a), black_box(&b)));
    });
}

fn bench_ranking(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();
    let requester = create_requester();

    let mut group = c.benchmark_group("ranking");

    for candidate_count in [10, 50, 100, 500, 1000].iter() {
        let candidates: Vec<Profile> = (0..*candidate_count)
            .map(|i| {
                let lat_offset = (i as f64 * 0.001) % 0.5;
                let lon_offset = (i as f64 * 0.001) % 0.5;
                create_candidate(i, 40.7128 + lat_offset, -74.0060 + lon_offset)
            })
            .collect();

        group.bench_with_input(
            BenchmarkId::new("rank_candidates", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| {
                    matcher.rank_candidates(
                        black_box(&requester),
                        black_box(candidates.clone()),
                        black_box(today()),
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_haversine_distance, bench_interest_score, bench_ranking);

criterion_main!(benches);
