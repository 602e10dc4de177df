//! 徽章评估性能基准测试
//!
//! 覆盖全表评估、汇总视图以及不同规模徽章表下的评估耗时。

use badge_engine::aggregator::{group_by_category, pick_next_goal, summarize};
use badge_engine::{BadgeDefinition, BadgeEvaluator, EvaluationReport, StatsSnapshot, catalog};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

/// 一个各类计数都有进展的快照
fn create_active_snapshot() -> StatsSnapshot {
    StatsSnapshot {
        pins_created: 42,
        pins_resolved: 6,
        comments_made: 57,
        votes_cast: 130,
        upvotes_received: 240,
        verifications_made: 12,
        events_attended: 3,
        suggestions_made: 4,
        current_streak: 9,
        account_age_days: 120,
        total_points: 780,
        email_verified: true,
        role: Some("moderator".to_string()),
        weekly_rank: 7,
        ..Default::default()
    }
}

/// 全表评估基准
fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    let evaluator = BadgeEvaluator::default();

    let empty = StatsSnapshot::default();
    let active = create_active_snapshot();

    group.throughput(Throughput::Elements(catalog().len() as u64));
    group.bench_function("empty_snapshot", |b| {
        b.iter(|| evaluator.evaluate(black_box(&empty)))
    });
    group.bench_function("active_snapshot", |b| {
        b.iter(|| evaluator.evaluate(black_box(&active)))
    });

    group.finish();
}

/// 汇总视图基准（基于已评估序列）
fn bench_aggregations(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregations");
    let badges = BadgeEvaluator::default().evaluate(&create_active_snapshot());

    group.bench_function("summarize", |b| b.iter(|| summarize(black_box(&badges))));
    group.bench_function("group_by_category", |b| {
        b.iter(|| group_by_category(black_box(&badges)))
    });
    group.bench_function("next_goal", |b| b.iter(|| pick_next_goal(black_box(&badges))));
    group.bench_function("full_report", |b| {
        b.iter(|| EvaluationReport::from_badges(black_box(badges.clone())))
    });

    group.finish();
}

/// 不同规模徽章表的评估基准
fn bench_catalog_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_size");
    let stats = create_active_snapshot();

    for multiplier in [1usize, 4, 16] {
        let table: Vec<BadgeDefinition> = catalog()
            .iter()
            .cycle()
            .take(catalog().len() * multiplier)
            .copied()
            .collect();
        let evaluator = BadgeEvaluator::new(&table);

        group.throughput(Throughput::Elements(table.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(table.len()), &stats, |b, stats| {
            b.iter(|| evaluator.evaluate(black_box(stats)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_aggregations, bench_catalog_size);
criterion_main!(benches);
