use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cmdscript::{Config, ParamType};

fn bench_config() -> Config {
    let mut config = Config::new();
    config.define("Greet", &[ParamType::Str], |_| {});
    config.define("Add", &[ParamType::I32, ParamType::I32], |_| {});
    config.define("Push", &[ParamType::U64], |_| {});
    config.define("Reset", &[], |_| {});
    config
}

fn make_script(lines: usize) -> String {
    let chunk = "Greet \"benchmark run\"\nAdd -12, 345\nPush 9001\nReset\n";
    chunk.repeat(lines / 4)
}

fn bench_compile(c: &mut Criterion) {
    let config = bench_config();
    let script_small = make_script(100);
    let script_med = make_script(1_000);
    let script_large = make_script(10_000);

    let mut g = c.benchmark_group("compile");

    g.bench_function("compile_100", |b| {
        b.iter(|| config.compile(black_box(&script_small)).unwrap())
    });
    g.bench_function("compile_1k", |b| {
        b.iter(|| config.compile(black_box(&script_med)).unwrap())
    });
    g.bench_function("compile_10k", |b| {
        b.iter(|| config.compile(black_box(&script_large)).unwrap())
    });

    g.finish();
}

fn bench_run(c: &mut Criterion) {
    let config = bench_config();
    let program_small = config.compile(&make_script(100)).unwrap();
    let program_large = config.compile(&make_script(10_000)).unwrap();

    let mut g = c.benchmark_group("run");

    g.bench_function("run_100", |b| b.iter(|| black_box(&program_small).run()));
    g.bench_function("run_10k", |b| b.iter(|| black_box(&program_large).run()));

    g.finish();
}

criterion_group!(benches, bench_compile, bench_run);
criterion_main!(benches);
