use ark_ff::{AdditiveGroup, Field};
use kestrel_curves::fields::{Fp, PervushinField};
use kestrel_poseidon::{
    circuit::{Constraint, ConstraintRecorder, ConstraintSystem, LinearCombination},
    pasta::Poseidon2PallasSponge,
    pervushin::Poseidon2PervushinSponge,
    sponge::SpongePhase,
    Circuit, Environment, Native, Permutation, Sponge, SpongeMode, Witness,
};
use kestrel_utils::FieldHelpers;
use proptest::prelude::*;

type Z = PervushinField;

/// Adds one to every lane, which makes the sponge state easy to follow.
#[derive(Clone, Copy, Debug)]
struct AddOne;

impl Permutation<Z, 4> for AddOne {
    fn permute<E: Environment<Z>>(_env: &mut E, state: &mut [E::Lane; 4]) {
        for x in state.iter_mut() {
            *x += Z::ONE;
        }
    }
}

type TestSponge<E = Native> = Sponge<Z, AddOne, E, 2, 2, 4>;

fn z<const N: usize>(values: [u64; N]) -> [Z; N] {
    values.map(Z::from)
}

fn new_test_sponge() -> TestSponge {
    TestSponge::new(Native, z([10, 0]), SpongeMode::Overwrite)
}

#[test]
fn test_duplex_transitions() {
    let mut duplex1 = new_test_sponge();
    assert_eq!(duplex1.state(), &z([0, 0, 10, 0]));

    duplex1.absorb(Z::from(2u64));
    assert_eq!(duplex1.state(), &z([2, 0, 10, 0]));
    duplex1.absorb(Z::from(4u64));
    assert_eq!(duplex1.state(), &z([2, 4, 10, 0]));
    duplex1.absorb(Z::from(6u64));
    assert_eq!(duplex1.state(), &z([6, 5, 11, 1]));

    let mut duplex2 = duplex1.clone();
    duplex2.absorb(Z::from(8u64));
    assert_eq!(duplex2.state(), &z([6, 8, 11, 1]));

    assert_eq!(duplex1.squeeze(), Z::from(7u64));
    assert_eq!(duplex1.state(), &z([7, 2, 12, 4]));
    assert_eq!(duplex1.phase(), SpongePhase::Squeeze);
    assert_eq!(duplex1.squeeze(), Z::from(2u64));
    assert_eq!(duplex1.squeeze(), Z::from(8u64));
    assert_eq!(duplex1.state(), &z([8, 3, 13, 5]));
    duplex1.absorb(Z::from(9u64));
    assert_eq!(duplex1.state(), &z([9, 3, 13, 5]));
    assert_eq!(duplex1.phase(), SpongePhase::Absorb);

    duplex2.absorb(Z::from(10u64));
    assert_eq!(duplex2.state(), &z([10, 9, 12, 2]));
    duplex2.absorb(Z::from(12u64));
    assert_eq!(duplex2.state(), &z([10, 12, 12, 2]));
    // the rate is full: padding only marks the capacity
    assert_eq!(duplex2.squeeze(), Z::from(11u64));
    assert_eq!(duplex2.state(), &z([11, 13, 13, 4]));
}

#[test]
fn test_squeeze_without_input() {
    let mut sponge = new_test_sponge();
    assert_eq!(sponge.squeeze(), Z::from(2u64));
    assert_eq!(sponge.state(), &z([2, 1, 11, 3]));
}

#[test]
fn test_add_mode() {
    let mut sponge = TestSponge::new(Native, z([10, 0]), SpongeMode::Add);
    sponge.absorb_slice(&z([2, 4, 6]));
    assert_eq!(sponge.state(), &z([9, 5, 11, 1]));
    sponge.absorb(Z::from(1u64));
    assert_eq!(sponge.state(), &z([9, 6, 11, 1]));
}

#[test]
fn test_reset() {
    let mut sponge = new_test_sponge();
    sponge.absorb_slice(&z([2, 4, 6]));
    let first: [Z; 3] = sponge.squeeze_n();
    sponge.reset();
    assert_eq!(sponge.state(), &z([0, 0, 10, 0]));
    assert_eq!(sponge.position(), 0);
    sponge.absorb_slice(&z([2, 4, 6]));
    assert_eq!(sponge.squeeze_n::<3>(), first);
    assert_eq!(first, z([7, 2, 8]));
}

#[test]
fn test_circuit_sponge() {
    let mut cs = ConstraintRecorder::<Z, 2>::new();
    let inputs: Vec<LinearCombination<Z>> = (0..3).map(|_| cs.input().into()).collect();
    let outputs = {
        let mut sponge = Sponge::<Z, AddOne, _, 2, 2, 4>::new(
            Circuit::new(&mut cs),
            z([10, 0]),
            SpongeMode::Overwrite,
        );
        sponge.absorb_slice(&inputs);
        sponge.squeeze_n::<3>()
    };
    let assignment = z([2, 4, 6]);
    let values: Vec<Option<Z>> = outputs.iter().map(|o| o.evaluate(&assignment)).collect();
    assert_eq!(values, z([7, 2, 8]).map(Some).to_vec());
    assert!(cs.constraints().is_empty());
}

#[test]
fn test_regression_pallas_sponge() {
    let [a, b]: [Fp; 2] = Poseidon2PallasSponge::hash(
        [Fp::ZERO],
        SpongeMode::Overwrite,
        &[1u64, 2, 3].map(Fp::from),
    );
    assert_eq!(
        a.to_hex(),
        "246eaf52261ee0cfba0dd9f985b7ea02aba26f8296230fdaba80e131ca8969d2"
    );
    assert_eq!(
        b.to_hex(),
        "0f3a754582de906700f6e5a297f181e6cfcf13b7b5055a0f4e3b68c68c6c07b0"
    );

    let [empty]: [Fp; 1] = Poseidon2PallasSponge::hash([Fp::ZERO], SpongeMode::Overwrite, &[]);
    assert_eq!(
        empty.to_hex(),
        "3cc301994a9641d19487786eb6f3083a1d2a7b70bf96c6a4104003f710842177"
    );
}

/// Hashes `input` into two elements in all three modes and checks they
/// agree.
fn check_pallas_sponge_modes<const D: usize>(input: &[Fp]) {
    let expected: [Fp; 2] = Poseidon2PallasSponge::hash([Fp::ZERO], SpongeMode::Overwrite, input);

    let mut trace = vec![];
    let traced = {
        let mut sponge = Poseidon2PallasSponge::<Witness<Fp, D>>::new(
            Witness::new(&mut trace),
            [Fp::ZERO],
            SpongeMode::Overwrite,
        );
        sponge.absorb_slice(input);
        sponge.squeeze_n::<2>()
    };
    assert_eq!(traced, expected);

    let mut cs = ConstraintRecorder::<Fp, D>::new();
    let symbolic: Vec<LinearCombination<Fp>> = input.iter().map(|_| cs.input().into()).collect();
    let outputs = {
        let mut sponge =
            Poseidon2PallasSponge::<Circuit<ConstraintRecorder<Fp, D>>>::new(
                Circuit::new(&mut cs),
                [Fp::ZERO],
                SpongeMode::Overwrite,
            );
        sponge.absorb_slice(&symbolic);
        sponge.squeeze_n::<2>()
    };
    for x in outputs {
        let out = cs.auxiliary();
        cs.constrain(Constraint::new(vec![x], out.into()));
    }

    let mut assignment = input.to_vec();
    assignment.extend(&trace);
    assignment.extend(&expected);
    assert_eq!(cs.is_satisfied(&assignment), Ok(()));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn pallas_sponge_modes_agree(input in prop::collection::vec(any::<u64>(), 0..7)) {
        let input: Vec<Fp> = input.into_iter().map(Fp::from).collect();
        check_pallas_sponge_modes::<2>(&input);
        check_pallas_sponge_modes::<3>(&input);
    }

    #[test]
    fn sponges_with_same_calls_agree(
        input in prop::collection::vec(any::<u64>(), 1..30),
        squeezes in prop::collection::vec(0usize..4, 1..30),
    ) {
        let mut a = Poseidon2PervushinSponge::new(Native, [Z::ZERO; 4], SpongeMode::Overwrite);
        let mut b = Poseidon2PervushinSponge::new(Native, [Z::ZERO; 4], SpongeMode::Overwrite);
        let mut out_a = vec![];
        let mut out_b = vec![];
        for (x, n) in input.iter().zip(squeezes.iter().cycle()) {
            a.absorb(Z::from(*x));
            b.absorb(Z::from(*x));
            for _ in 0..*n {
                out_a.push(a.squeeze());
                out_b.push(b.squeeze());
            }
        }
        out_a.push(a.squeeze());
        out_b.push(b.squeeze());
        prop_assert_eq!(out_a, out_b);
    }

    #[test]
    fn message_boundary_changes_output(input in prop::collection::vec(any::<u64>(), 1..20)) {
        // absorbing an extra zero is not the same message
        let input: Vec<Z> = input.into_iter().map(Z::from).collect();
        let mut padded = input.clone();
        padded.push(Z::ZERO);
        let a: [Z; 1] = Poseidon2PervushinSponge::hash([Z::ZERO; 4], SpongeMode::Overwrite, &input);
        let b: [Z; 1] = Poseidon2PervushinSponge::hash([Z::ZERO; 4], SpongeMode::Overwrite, &padded);
        prop_assert_ne!(a, b);
    }
}
