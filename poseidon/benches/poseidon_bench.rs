use ark_ff::UniformRand;
use criterion::{criterion_group, criterion_main, Criterion};
use kestrel_curves::fields::{Fp, PervushinField, Solinas62Field};
use kestrel_poseidon::{
    circuit::{ConstraintRecorder, LinearCombination},
    pasta::{Poseidon2Pallas, Poseidon2PallasSponge},
    pervushin::{JivePervushin, Poseidon2Pervushin12},
    solinas62::Poseidon2Solinas62,
    CompressionFunction, Native, SpongeMode,
};
use rand::{rngs::StdRng, SeedableRng};

pub fn bench_poseidon2(c: &mut Criterion) {
    let mut group = c.benchmark_group("Poseidon2");
    group.sample_size(100);
    let mut rng = StdRng::seed_from_u64(0);

    group.bench_function("permute pallas", |b| {
        let mut state: [Fp; 3] = core::array::from_fn(|_| Fp::rand(&mut rng));
        b.iter(|| Poseidon2Pallas::permute_native(&mut state))
    });

    group.bench_function("permute pervushin12", |b| {
        let mut state: [PervushinField; 12] =
            core::array::from_fn(|_| PervushinField::rand(&mut rng));
        b.iter(|| Poseidon2Pervushin12::permute_native(&mut state))
    });

    group.bench_function("permute solinas62", |b| {
        let mut state: [Solinas62Field; 12] =
            core::array::from_fn(|_| Solinas62Field::rand(&mut rng));
        b.iter(|| Poseidon2Solinas62::permute_native(&mut state))
    });

    group.bench_function("permute pallas witness", |b| {
        let mut state: [Fp; 3] = core::array::from_fn(|_| Fp::rand(&mut rng));
        let mut trace = Vec::new();
        b.iter(|| {
            trace.clear();
            Poseidon2Pallas::permute_witness::<2>(&mut trace, &mut state)
        })
    });

    group.bench_function("permute pallas circuit", |b| {
        b.iter(|| {
            let mut cs = ConstraintRecorder::<Fp, 2>::new();
            let mut state: [LinearCombination<Fp>; 3] =
                core::array::from_fn(|_| cs.input().into());
            Poseidon2Pallas::permute_circuit(&mut cs, &mut state);
            cs
        })
    });

    // Chain of hashes, starting from a random value
    group.bench_function("sponge hash pallas", |b| {
        let mut hash = Fp::rand(&mut rng);
        let mut sponge = Poseidon2PallasSponge::new(Native, [Fp::from(0u64)], SpongeMode::Overwrite);
        b.iter(|| {
            sponge.absorb(hash);
            hash = sponge.squeeze();
        })
    });

    group.bench_function("jive pervushin", |b| {
        let mut x0: [PervushinField; 4] = core::array::from_fn(|_| PervushinField::rand(&mut rng));
        let x1: [PervushinField; 4] = core::array::from_fn(|_| PervushinField::rand(&mut rng));
        b.iter(|| x0 = JivePervushin::compress(&x0, &x1))
    });

    group.finish();
}

criterion_group!(benches, bench_poseidon2);
criterion_main!(benches);
