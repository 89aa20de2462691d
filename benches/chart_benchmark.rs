use beancounter_office::models::Activity;
use beancounter_office::services::build_activity_charts;
use chrono::{Duration, TimeZone, Utc};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

const VERBS: [&str; 5] = ["TWEET", "LIKE", "SHARE", "CHECKIN", "COMMENT"];

fn make_activities(count: usize) -> Vec<Activity> {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    (0..count)
        .map(|i| Activity {
            id: format!("act-{}", i),
            verb: VERBS[i % VERBS.len()].to_string(),
            kind: "TWEET".to_string(),
            service: "twitter".to_string(),
            // Roughly eight activities per day
            timestamp: start + Duration::hours(3 * i as i64),
            url: String::new(),
            name: String::new(),
            description: String::new(),
        })
        .collect()
}

fn benchmark_activity_charts(c: &mut Criterion) {
    let page = make_activities(20);
    let history = make_activities(10_000);

    let mut group = c.benchmark_group("activity_charts");

    group.bench_function("single_page", |b| {
        b.iter(|| build_activity_charts(black_box(&page)))
    });

    group.bench_function("long_history", |b| {
        b.iter(|| build_activity_charts(black_box(&history)))
    });

    group.finish();
}

criterion_group!(benches, benchmark_activity_charts);
criterion_main!(benches);
