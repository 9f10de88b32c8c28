// ABOUTME: Criterion benchmarks for the recommendation and aggregation engine
// ABOUTME: Measures workout/nutrition aggregation, dashboard totals, and recommendation bundles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCoach Contributors

//! Criterion benchmarks for the intelligence engine.
//!
//! Measures record-set reductions over growing histories and the end-to-end
//! recommendation path (classification, energy targets, narrative).

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fitcoach::intelligence::{
    DashboardSummarizer, NutritionAggregator, RecommendationEngine, WorkoutAggregator,
};
use fitcoach::models::{MealRecord, ProfileFacts, Sex, WorkoutRecord};

const DATASET_SIZES: [usize; 3] = [10, 100, 1000];

#[allow(clippy::cast_precision_loss)]
fn generate_workouts(count: usize) -> Vec<WorkoutRecord> {
    (0..count)
        .map(|index| {
            let calories = 150.0 + ((index * 37) % 400) as f64;
            if index % 3 == 0 {
                WorkoutRecord::strength("Squat", 4, 8, 60.0 + (index % 40) as f64, calories)
            } else {
                WorkoutRecord::cardio("Running", 20 + (index % 40) as u32, calories)
            }
        })
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn generate_meals(count: usize) -> Vec<MealRecord> {
    (0..count)
        .map(|index| {
            MealRecord::new(
                format!("Meal {index}"),
                300.0 + ((index * 53) % 500) as f64,
                10.0 + (index % 30) as f64,
                40.0 + (index % 60) as f64,
                8.0 + (index % 20) as f64,
            )
        })
        .collect()
}

fn bench_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregation");

    for size in DATASET_SIZES {
        let workouts = generate_workouts(size);
        let meals = generate_meals(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("workouts", size), &workouts, |b, workouts| {
            b.iter(|| WorkoutAggregator::summarize(black_box(workouts)));
        });
        group.bench_with_input(BenchmarkId::new("nutrition", size), &meals, |b, meals| {
            b.iter(|| NutritionAggregator::summarize_daily(black_box(meals)));
        });
        group.bench_function(BenchmarkId::new("dashboard", size), |b| {
            b.iter(|| DashboardSummarizer::summarize(black_box(&workouts), black_box(&meals)));
        });
    }

    group.finish();
}

fn bench_recommendation(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommendation");
    let engine = RecommendationEngine::new();
    let profile = ProfileFacts {
        age: 30,
        sex: Sex::Male,
        height_cm: 180.0,
        weight_kg: 80.0,
    };

    for size in DATASET_SIZES {
        let history = generate_workouts(size);
        group.bench_with_input(BenchmarkId::new("bundle", size), &history, |b, history| {
            b.iter(|| {
                engine.recommend(
                    black_box(Some(&profile)),
                    black_box(Some("I want to lose weight before summer")),
                    black_box(history),
                )
            });
        });
    }

    group.bench_function("classify_and_target", |b| {
        b.iter(|| engine.for_profile(black_box(Some(&profile)), black_box(Some("build muscle"))));
    });

    group.finish();
}

criterion_group!(benches, bench_aggregation, bench_recommendation);
criterion_main!(benches);
