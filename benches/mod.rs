use criterion::{criterion_group, criterion_main};


criterion_group!(
    benches,
    digest_bench::bench_signature_digest,
    digest_bench::bench_deep_copy
);
criterion_main!(benches);
