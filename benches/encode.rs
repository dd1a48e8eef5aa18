// benches/encode.rs
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use enigma_rs::{Machine, Settings};
use std::hint::black_box;

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    // Fully cabled board so the plugboard pass is not a no-op.
    let settings = Settings {
        plugboard: "AE BF CM DQ HU JN LX PR SZ VW".to_string(),
        ..Settings::default()
    };
    let prototype = Machine::new(&settings).unwrap();

    let sizes = [26, 1024, 64 * 1024, 1024 * 1024];

    for &size in &sizes {
        // Cycle the alphabet so rotor turnovers are exercised throughout.
        let message: String = ('A'..='Z').cycle().take(size).collect();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            BenchmarkId::new("size", format_size(size)),
            &size,
            |b, _| {
                b.iter(|| {
                    let mut machine = prototype.clone();
                    black_box(machine.encode(black_box(&message)).unwrap())
                });
            },
        );
    }

    group.finish();
}

fn bench_keystroke(c: &mut Criterion) {
    let mut group = c.benchmark_group("keystroke");

    let prototype = Machine::new(&Settings::default()).unwrap();
    group.bench_function("encode_char", |b| {
        let mut machine = prototype.clone();
        b.iter(|| black_box(machine.encode_char(black_box('A'))));
    });

    group.finish();
}

fn format_size(letters: usize) -> String {
    const K: usize = 1024;
    if letters >= K * K {
        format!("{} Mi letters", letters / (K * K))
    } else if letters >= K {
        format!("{} Ki letters", letters / K)
    } else {
        format!("{letters} letters")
    }
}

criterion_group!(benches, bench_encode, bench_keystroke);
criterion_main!(benches);
