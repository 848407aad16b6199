use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use cyclic_codes::ecc::{CyclicCode, DecodingStrategy, ErrorCorrection};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// (length, generator polynomial)
const CODES: [(usize, u64); 3] = [(7, 0b1011), (15, 0b1_1101_0001), (15, 0b111_1001)];

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("cyclic_build");
    for &(length, generator) in &CODES {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("n={} g={:#b}", length, generator)),
            &(length, generator),
            |b, &(length, generator)| {
                b.iter(|| CyclicCode::from_generator_polynomial(black_box(length), generator))
            },
        );
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("cyclic_decode");
    let mut rng = StdRng::seed_from_u64(42);

    for &(length, generator) in &CODES {
        let code = match CyclicCode::from_generator_polynomial(length, generator) {
            Ok(code) => code,
            Err(e) => panic!("invalid benchmark code: {}", e),
        };
        let received: Vec<u32> = (0..256).map(|_| rng.gen_range(0..1u32 << length)).collect();

        for (name, strategy) in [
            ("weight", DecodingStrategy::WeightBound),
            ("burst", DecodingStrategy::burst()),
        ] {
            group.bench_with_input(
                BenchmarkId::new(name, code.to_string()),
                &received,
                |b, received| {
                    b.iter(|| {
                        for &word in received {
                            black_box(code.decode_with(word, strategy).ok());
                        }
                    })
                },
            );
        }
    }
    group.finish();
}

fn bench_byte_stream(c: &mut Criterion) {
    let code = match CyclicCode::from_generator_polynomial(7, 0b1011) {
        Ok(code) => code,
        Err(e) => panic!("invalid benchmark code: {}", e),
    };
    let data: Vec<u8> = (0..=255).collect();

    c.bench_function("hamming_7_4 encode 256 bytes", |b| {
        b.iter(|| ErrorCorrection::encode(&code, black_box(&data)))
    });

    let encoded = ErrorCorrection::encode(&code, &data).unwrap_or_default();
    c.bench_function("hamming_7_4 decode 256 bytes", |b| {
        b.iter(|| ErrorCorrection::decode(&code, black_box(&encoded)))
    });
}

criterion_group!(benches, bench_construction, bench_decode, bench_byte_stream);
criterion_main!(benches);
