use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::sync::Arc;
use std::thread;
use synclog::{FileSink, MemorySink, Prefix, Registry, Severity, prefix};
use tempfile::TempDir;

fn bench_memory_line(c: &mut Criterion) {
    let registry = Registry::new();
    let sink = MemorySink::new();
    registry.set_sink(sink.clone());

    c.bench_function("Line::append (memory)", |b| {
        b.iter(|| {
            registry
                .line(Severity::Info)
                .append(black_box("benchmark value "))
                .append(black_box(42));
            sink.clear();
        });
    });
}

fn bench_timestamped_file_line(c: &mut Criterion) {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let registry = Registry::new();
    registry.set_sink(FileSink::open(tmp.path().join("bench.log")).expect("open failed"));
    registry.install_prefixes([prefix::timestamp(prefix::DEFAULT_TIMESTAMP_FORMAT)]);

    c.bench_function("Line::append (file, timestamp)", |b| {
        b.iter(|| {
            registry
                .line(Severity::Warning)
                .append(black_box("Pi = "))
                .append(black_box(3.14159));
        });
    });
}

fn bench_disabled_line(c: &mut Criterion) {
    let registry = Registry::new();

    c.bench_function("Line::append (no sink)", |b| {
        b.iter(|| {
            registry.line(Severity::Debug).append(black_box("ignored"));
        });
    });
}

fn bench_contended_lines(c: &mut Criterion) {
    let registry = Arc::new(Registry::new());
    let sink = MemorySink::new();
    registry.set_sink(sink.clone());
    registry.install_prefixes([Prefix::new(|| "bench ".to_string())]);

    c.bench_function("4 threads x 100 lines", |b| {
        b.iter(|| {
            let handles: Vec<_> = (0..4)
                .map(|t| {
                    let registry = Arc::clone(&registry);
                    thread::spawn(move || {
                        for l in 0..100 {
                            registry.line(Severity::Info).append(t).append(' ').append(l);
                        }
                    })
                })
                .collect();
            for handle in handles {
                handle.join().expect("writer panicked");
            }
            sink.clear();
        });
    });
}

criterion_group!(
    benches,
    bench_memory_line,
    bench_timestamped_file_line,
    bench_disabled_line,
    bench_contended_lines,
);
criterion_main!(benches);
