use criterion::{criterion_group, criterion_main, Criterion};
use steganographer_core::{Algorithm, Channel, Concealer, LsbAlgorithm};

pub fn lsb_encoding(c: &mut Criterion) {
    let plain = Channel::from_fn(512, 512, |row, col| ((row * 3 + col) % 256) as u8);
    let lsb: Algorithm = LsbAlgorithm.into();
    let secret_message = "Hello World! ".repeat(64);

    c.bench_function("LSB Encoding", |b| {
        b.iter(|| {
            lsb.embed(&plain, &secret_message)
                .expect("Cannot hide secret message")
        })
    });

    let secret = lsb
        .embed(&plain, &secret_message)
        .expect("Cannot hide secret message");
    c.bench_function("LSB Decoding", |b| {
        b.iter(|| lsb.extract(&secret).expect("Cannot unveil secret message"))
    });
}

criterion_group!(benches, lsb_encoding);
criterion_main!(benches);
