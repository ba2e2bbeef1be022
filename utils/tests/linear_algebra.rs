use ark_ff::{One, Zero};
use kestrel_curves::fields::PervushinField;
use kestrel_utils::{FieldHelpers, MatrixRing, Module, PowerOfTwoRing};
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

type Z = PowerOfTwoRing<32>;
type F = PervushinField;

fn z(n: i64) -> Z {
    Z::from_i64(n)
}

#[test]
fn module_operations() {
    let a = Module([1, 2, 3].map(z));
    let b = Module([4, -5, 6].map(z));
    assert_eq!(a + b, Module([5, -3, 9].map(z)));
    assert_eq!(a - b, Module([-3, 7, -3].map(z)));
    assert_eq!(-a, Module([-1, -2, -3].map(z)));
    assert_eq!(a * z(2), Module([2, 4, 6].map(z)));
    assert_eq!(a.dot(&b), z(4 - 10 + 18));
    assert_eq!(a.hadamard(&b), Module([4, -10, 18].map(z)));
    assert_eq!(b.sum(), z(5));
    assert!(Module::<Z, 3>::zero().is_zero());
    assert_eq!(a[1], z(2));
}

#[test]
fn matrix_ring_operations() {
    let a = MatrixRing::new([[1, 2], [3, 4]].map(|row| row.map(z)));
    let b = MatrixRing::new([[0, 1], [1, 0]].map(|row| row.map(z)));
    assert_eq!(a * b, MatrixRing::new([[2, 1], [4, 3]].map(|row| row.map(z))));
    assert_eq!(b * a, MatrixRing::new([[3, 4], [1, 2]].map(|row| row.map(z))));
    assert_eq!(a * MatrixRing::identity(), a);
    assert_eq!(MatrixRing::identity() * a, a);
    assert_eq!(a + (-a), MatrixRing::zero());
    assert_eq!(a.transpose()[(0, 1)], z(3));
    assert_eq!(a.trace(), z(5));
    assert_eq!(a.scale(z(3)), a + a + a);
    assert_eq!(a * Module([1, -1].map(z)), Module([-1, -1].map(z)));
    assert_eq!(a.column(1), Module([2, 4].map(z)));
    assert_eq!(
        MatrixRing::diagonal([2, 3].map(z)) * Module([5, 7].map(z)),
        Module([10, 21].map(z))
    );
}

#[test]
fn matrices_over_matrices() {
    // 2x2 blocks of 2x2 matrices, the ring needs no commutativity
    let e = MatrixRing::new([[1, 2], [3, 4]].map(|row| row.map(z)));
    let block = MatrixRing::<MatrixRing<Z, 2>, 2>::diagonal([e, MatrixRing::one()]);
    let v = Module([MatrixRing::one(), e]);
    assert_eq!(block * v, Module([e, e]));
}

fn random_matrix<const N: usize>(rng: &mut StdRng) -> MatrixRing<F, N> {
    MatrixRing::new(core::array::from_fn(|_| {
        core::array::from_fn(|_| F::random(rng))
    }))
}

proptest! {
    #[test]
    fn matrix_product_is_associative_and_linear(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let a = random_matrix::<3>(&mut rng);
        let b = random_matrix::<3>(&mut rng);
        let c = random_matrix::<3>(&mut rng);
        let v = Module(core::array::from_fn(|_| F::random(&mut rng)));
        prop_assert_eq!((a * b) * c, a * (b * c));
        prop_assert_eq!(a * (b + c), a * b + a * c);
        prop_assert_eq!((a * b) * v, a * (b * v));
        prop_assert_eq!((a * b).transpose(), b.transpose() * a.transpose());
    }

    #[test]
    fn ring_inverse_of_odd_elements(n in any::<u64>()) {
        let x = Z::new(n | 1);
        prop_assert_eq!(x * x.inverse().unwrap(), Z::one());
        prop_assert_eq!(Z::new(n & !1).inverse(), None);
    }
}
