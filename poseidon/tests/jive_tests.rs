use ark_ff::{AdditiveGroup, Field};
use kestrel_curves::fields::{Fp, PervushinField};
use kestrel_poseidon::{
    circuit::{Constraint, ConstraintRecorder, ConstraintSystem, LinearCombination},
    pasta::Poseidon2PallasSponge,
    pervushin::{JivePervushin, Poseidon2Pervushin8},
    rng::SpongeRng,
    CompressionFunction, Environment, Jive, Native, Permutation, SpongeMode,
};
use kestrel_utils::FieldHelpers;
use proptest::prelude::*;
use rand_core::RngCore;

type Z = PervushinField;

/// Adds `i + 1` to lane `i`
#[derive(Clone, Copy, Debug)]
struct AddIndex;

impl Permutation<Z, 4> for AddIndex {
    fn permute<E: Environment<Z>>(_env: &mut E, state: &mut [E::Lane; 4]) {
        for (i, x) in state.iter_mut().enumerate() {
            *x += Z::from(i as u64 + 1);
        }
    }
}

type TestJive = Jive<Z, AddIndex, 2, 4>;

#[test]
fn test_jive_fold() {
    let x0 = [11u64, 12].map(Z::from);
    let x1 = [13u64, 14].map(Z::from);
    let expected = [52u64, 58].map(Z::from);
    assert_eq!(TestJive::compress(&x0, &x1), expected);

    let mut cs = ConstraintRecorder::<Z, 2>::new();
    let a: [LinearCombination<Z>; 2] = core::array::from_fn(|_| cs.input().into());
    let b: [LinearCombination<Z>; 2] = core::array::from_fn(|_| cs.input().into());
    let c = TestJive::compress_circuit(&mut cs, &a, &b);
    let assignment = [11u64, 12, 13, 14].map(Z::from);
    assert_eq!(c[0].evaluate(&assignment), Some(expected[0]));
    assert_eq!(c[1].evaluate(&assignment), Some(expected[1]));

    let mut trace = vec![];
    assert_eq!(TestJive::compress_witness::<2>(&mut trace, &x0, &x1), expected);
    assert!(trace.is_empty());
}

#[test]
fn test_jive_is_not_symmetric() {
    let x0 = [1u64, 2, 3, 4].map(Z::from);
    let x1 = [5u64, 6, 7, 8].map(Z::from);
    assert_ne!(
        JivePervushin::compress(&x0, &x1),
        JivePervushin::compress(&x1, &x0)
    );
}

#[test]
fn test_jive_pervushin_feed_forward() {
    let x0 = [1u64, 2, 3, 4].map(Z::from);
    let x1 = [5u64, 6, 7, 8].map(Z::from);
    let mut state = [1u64, 2, 3, 4, 5, 6, 7, 8].map(Z::from);
    Poseidon2Pervushin8::permute_native(&mut state);
    let expected: [Z; 4] = core::array::from_fn(|i| x0[i] + x1[i] + state[i] + state[i + 4]);
    assert_eq!(JivePervushin::compress(&x0, &x1), expected);
}

#[test]
fn test_sponge_rng_is_deterministic() {
    let new_rng = || {
        SpongeRng::new(Poseidon2PallasSponge::new(
            Native,
            [Fp::ZERO],
            SpongeMode::Overwrite,
        ))
    };
    let mut a = new_rng();
    let mut b = new_rng();
    let words: Vec<u64> = (0..5).map(|_| a.next_u64()).collect();
    assert_eq!(words, (0..5).map(|_| b.next_u64()).collect::<Vec<_>>());

    // the first word is the low limb of the first squeezed element
    let [first]: [Fp; 1] = Poseidon2PallasSponge::hash([Fp::ZERO], SpongeMode::Overwrite, &[]);
    let low = u64::from_le_bytes(first.to_bytes_le()[..8].try_into().unwrap());
    assert_eq!(words[0], low);

    let mut bytes = [0u8; 20];
    new_rng().fill_bytes(&mut bytes);
    assert_eq!(bytes[..8], low.to_le_bytes());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn jive_modes_agree(x in prop::array::uniform8(any::<u64>())) {
        let x = x.map(Z::from);
        let x0: [Z; 4] = core::array::from_fn(|i| x[i]);
        let x1: [Z; 4] = core::array::from_fn(|i| x[i + 4]);
        let native = JivePervushin::compress(&x0, &x1);

        let mut trace = vec![];
        prop_assert_eq!(JivePervushin::compress_witness::<3>(&mut trace, &x0, &x1), native);

        let mut cs = ConstraintRecorder::<Z, 3>::new();
        let a: [LinearCombination<Z>; 4] = core::array::from_fn(|_| cs.input().into());
        let b: [LinearCombination<Z>; 4] = core::array::from_fn(|_| cs.input().into());
        let c = JivePervushin::compress_circuit(&mut cs, &a, &b);
        for lc in c {
            let out = cs.auxiliary();
            cs.constrain(Constraint::new(vec![lc], out.into()));
        }

        let mut assignment = x.to_vec();
        assignment.extend(&trace);
        assignment.extend(&native);
        prop_assert_eq!(cs.is_satisfied(&assignment), Ok(()));
    }
}
