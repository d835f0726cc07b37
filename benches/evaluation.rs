use criterion::{black_box, criterion_group, criterion_main, Criterion};
use formulon_rs::Context;

/// Benchmark simple arithmetic expressions
fn benchmark_simple_arithmetic(c: &mut Criterion) {
    let _ = pretty_env_logger::try_init();
    let mut group = c.benchmark_group("Simple arithmetic");

    let mut context = Context::new();
    let expr = "2 + 3 * 4";
    let formula = context.compile(expr).unwrap();

    group.bench_function("interpreted_arithmetic", |b| {
        b.iter(|| context.eval(black_box(expr)).unwrap())
    });

    group.bench_function("precompiled_arithmetic", |b| {
        b.iter(|| context.exec(black_box(&formula)).unwrap())
    });

    group.bench_function("native_rust_arithmetic", |b| {
        b.iter(|| black_box(2.0 + 3.0 * 4.0))
    });
}

/// Benchmark a formula re-evaluated across variable changes
fn benchmark_variable_formula(c: &mut Criterion) {
    let mut group = c.benchmark_group("Variable formula");

    let mut context = Context::new();
    context.set_var("level", 7.0).unwrap();
    context.set_var("strength", 12.0).unwrap();
    let expr = "clamp(10 + level * 2 + strength / 4, 0, 50)";
    let formula = context.compile(expr).unwrap();

    group.bench_function("interpreted_formula", |b| {
        b.iter(|| context.eval(black_box(expr)).unwrap())
    });

    group.bench_function("precompiled_formula", |b| {
        b.iter(|| context.exec(black_box(&formula)).unwrap())
    });

    group.bench_function("precompiled_formula_with_var_update", |b| {
        let mut level = 0.0;
        b.iter(|| {
            level += 1.0;
            context.set_var("level", level % 40.0).unwrap();
            context.exec(black_box(&formula)).unwrap()
        })
    });

    group.bench_function("native_rust_formula", |b| {
        let (level, strength) = (7.0f64, 12.0f64);
        b.iter(|| black_box((10.0 + level * 2.0 + strength / 4.0).clamp(0.0, 50.0)))
    });
}

/// Benchmark comparison/logical expressions
fn benchmark_logic_expressions(c: &mut Criterion) {
    let mut group = c.benchmark_group("Logic expressions");

    let mut context = Context::new();
    context.set_var("price", 120.0).unwrap();
    context.set_var("volume", 3000.0).unwrap();
    let expr = "price > 100 && volume < 5000 || volume >= 3000";
    let formula = context.compile(expr).unwrap();

    group.bench_function("interpreted_logic", |b| {
        b.iter(|| context.eval(black_box(expr)).unwrap())
    });

    group.bench_function("precompiled_logic", |b| {
        b.iter(|| context.exec(black_box(&formula)).unwrap())
    });
}

/// Benchmark function calls through the registry
fn benchmark_function_calls(c: &mut Criterion) {
    let mut group = c.benchmark_group("Function calls");

    let mut context = Context::new();
    let expr = "min(sqrt(16), clamp(3, 0, 10))";
    let formula = context.compile(expr).unwrap();

    group.bench_function("interpreted_function_call", |b| {
        b.iter(|| context.eval(black_box(expr)).unwrap())
    });

    group.bench_function("precompiled_function_call", |b| {
        b.iter(|| context.exec(black_box(&formula)).unwrap())
    });
}

criterion_group!(
    benches,
    benchmark_simple_arithmetic,
    benchmark_variable_formula,
    benchmark_logic_expressions,
    benchmark_function_calls,
);
criterion_main!(benches);
