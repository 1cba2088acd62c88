//! Performance benchmarks for the Severance Engine.
//!
//! This benchmark suite verifies that the engine meets performance targets:
//! - Single calculation from a normalized input: < 50μs mean
//! - Validation of a raw form: < 20μs mean
//! - Full submission with history recording: < 200μs mean
//! - Batch of 100 submissions: < 20ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use severance_engine::calculation::calculate_severance;
use severance_engine::config::{ConfigLoader, StatutoryConfig};
use severance_engine::engine::SeveranceEngine;
use severance_engine::history::MemoryStore;
use severance_engine::models::RawSeveranceInput;
use severance_engine::validation::validate;

/// Loads the border zone configuration.
fn load_config() -> StatutoryConfig {
    ConfigLoader::load("./config/zona_libre_frontera_norte.yaml")
        .expect("Failed to load config")
        .into_config()
}

/// Creates a complete form with the given wage and hire year.
fn create_form(daily_wage: u32, hire_year: u32) -> RawSeveranceInput {
    RawSeveranceInput {
        daily_wage: Some(daily_wage.to_string()),
        annual_bonus_days: Some("15".to_string()),
        hire_date: Some(format!("{}-01-01", hire_year)),
        separation_date: Some("2025-06-15".to_string()),
        pending_vacation_days: Some("10".to_string()),
        include_twenty_days_per_year: Some(true),
        include_vacation_premium: Some(true),
    }
}

/// Benchmark: Calculation from an already validated input.
///
/// Target: < 50μs mean
fn bench_single_calculation(c: &mut Criterion) {
    let config = load_config();
    let input = validate(&create_form(500, 2022)).expect("Benchmark form must be valid");

    c.bench_function("single_calculation", |b| {
        b.iter(|| black_box(calculate_severance(black_box(&input), &config)))
    });
}

/// Benchmark: Validation of a raw form.
///
/// Target: < 20μs mean
fn bench_validation(c: &mut Criterion) {
    let form = create_form(500, 2022);

    c.bench_function("validation", |b| {
        b.iter(|| black_box(validate(black_box(&form))))
    });
}

/// Benchmark: Full submission through the engine, including history recording.
///
/// Target: < 200μs mean
fn bench_submission(c: &mut Criterion) {
    let mut engine = SeveranceEngine::new(load_config(), MemoryStore::new());
    let form = create_form(500, 2022);

    c.bench_function("submission", |b| {
        b.iter(|| black_box(engine.submit(black_box(&form))))
    });
}

/// Benchmark: Batch of 100 submissions with varying wages and tenure.
///
/// Target: < 20ms mean
fn bench_batch_100(c: &mut Criterion) {
    let config = load_config();
    let forms: Vec<RawSeveranceInput> = (0..100)
        .map(|i| create_form(200 + i * 10, 1990 + i % 35))
        .collect();

    let mut group = c.benchmark_group("batch");
    group.throughput(Throughput::Elements(100));
    group.bench_function("submissions_100", |b| {
        b.iter(|| {
            let mut engine = SeveranceEngine::new(config.clone(), MemoryStore::new());
            for form in &forms {
                black_box(engine.submit(form));
            }
        })
    });
    group.finish();
}

/// Benchmark: Calculation cost across lengths of service.
fn bench_scaling(c: &mut Criterion) {
    let config = load_config();

    let mut group = c.benchmark_group("scaling");

    for hire_year in [2024, 2020, 2010, 2000, 1985].iter() {
        let input = validate(&create_form(500, *hire_year)).expect("Benchmark form must be valid");

        group.bench_with_input(
            BenchmarkId::new("hire_year", hire_year),
            hire_year,
            |b, _| b.iter(|| black_box(calculate_severance(&input, &config))),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_calculation,
    bench_validation,
    bench_submission,
    bench_batch_100,
    bench_scaling,
);
criterion_main!(benches);
