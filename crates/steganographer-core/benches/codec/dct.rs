use criterion::{criterion_group, criterion_main, Criterion};
use steganographer_core::{Algorithm, Channel, Concealer, DctAlgorithm};

pub fn dct_encoding(c: &mut Criterion) {
    let plain = Channel::from_fn(512, 512, |row, col| (64 + (row + col * 2) % 128) as u8);
    let dct: Algorithm = DctAlgorithm::new(8, 3, 10)
        .expect("Invalid DCT parameters")
        .into();
    let secret_message = "Hello World!";

    c.bench_function("DCT Encoding", |b| {
        b.iter(|| {
            dct.embed(&plain, secret_message)
                .expect("Cannot hide secret message")
        })
    });

    let secret = dct
        .embed(&plain, secret_message)
        .expect("Cannot hide secret message");
    c.bench_function("DCT Decoding", |b| {
        b.iter(|| dct.extract(&secret).expect("Cannot unveil secret message"))
    });
}

criterion_group!(benches, dct_encoding);
criterion_main!(benches);
