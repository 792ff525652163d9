use criterion::{criterion_group, criterion_main, Criterion};
use kestrel_algebra::{bls12_381::BLSScalar, prelude::*};
use kestrel_plonk::plonk::{constraint_system::SparseCS, indexer::setup};
use kestrel_plonk::poly_commit::kzg_poly_com::KZGCommitmentSchemeBLS;

/// A chain of `nb_gates` squarings of one public input.
fn chain_cs(nb_gates: usize) -> SparseCS<BLSScalar> {
    let mut cs = SparseCS::<BLSScalar>::new(1, 0);
    let mut acc = cs.public_variable(0);
    for _ in 0..nb_gates {
        let next = cs.new_internal_variable();
        cs.add_mul_gate(acc, acc, next);
        acc = next;
    }
    cs
}

fn bench_setup(c: &mut Criterion) {
    let mut prng = test_rng();
    let mut group = c.benchmark_group("plonk_setup");
    group.sample_size(10);
    for log_size in [10usize, 12] {
        let size = 1 << log_size;
        let pcs = KZGCommitmentSchemeBLS::new(size, &mut prng);
        let cs = chain_cs(size - 1);
        group.bench_function(format!("setup 2^{}", log_size), |b| {
            b.iter(|| setup(&cs, &pcs).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_setup);
criterion_main!(benches);
