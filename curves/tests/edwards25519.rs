//! Known-answer tests for edwards25519 in every twisted Edwards
//! representation, plus group laws on random points.

use ark_ec::{twisted_edwards, CurveGroup, PrimeGroup};
use ark_ff::UniformRand;
use core::ops::Mul;
use kestrel_curves::{
    ed25519::{
        Ed25519Affine, Ed25519Config, Ed25519Extended, Ed25519Projective, Field25519,
        Scalar25519,
    },
    Group,
};
use kestrel_utils::FieldHelpers;
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

type ArkProjective = twisted_edwards::Projective<Ed25519Config>;

/// l = 2^252 + 27742317777372353535851937790883648493
const ORDER: [u64; 4] = [
    0x5812631a5cf5d3ed,
    0x14def9dea2f79cd6,
    0x0000000000000000,
    0x1000000000000000,
];

fn point(x: &str, y: &str) -> Ed25519Affine {
    let x = Field25519::from_hex(x).unwrap();
    let y = Field25519::from_hex(y).unwrap();
    Ed25519Affine::new(x, y).unwrap()
}

fn check_add<G: Group + From<Ed25519Affine>>() {
    let a = G::from(point(
        "1E3DBD8EF7121F586A32C8789BE6C1BD516EA0B7B5E00D356527F3B9137C7F13",
        "10833664A42569382BCDF87CCF2D0423A5CDBF39666777496B1A17D1265138E7",
    ));
    let b = G::from(point(
        "172C422E616DC9017CB392143DCDB133E1071D8E87806CCD9B222D82665AAC69",
        "39C554667DD211EB35B90AD285D01819B184E5C2ED777BF10C4E7039E853D5F5",
    ));
    let c = G::from(point(
        "1CF5593AE7B4FD9F9AADB739818D5A3A027C5481D295567AC053E3EE711CF3D6",
        "4734A155F67FF10F2371E91A5EF1C89E0A246AF9FE5F4C76B3EB72325335E3AF",
    ));
    let d = G::from(point(
        "3D3B0EA90D13082AA6862F0DAC1E211C286614F222BAFE7210862D448EF0E467",
        "32AB5CACFE5225A4BF684AF87237E34A5A8F8FB4608AD5994F2A327A06513A42",
    ));
    let e = G::from(point(
        "75E985B20C0DF581F0941168FCE3006628E6F5086125A916031E11F4C1AC1533",
        "62E44D27633DD1CB2386748EDE1BA66240A7F428F98B2BE674381AAE4699E851",
    ));
    let f = G::from(point(
        "0A167A4DF3F20A7E0F6BEE97031CFF99D7190AF79EDA56E9FCE1EE0B3E53EABA",
        "62E44D27633DD1CB2386748EDE1BA66240A7F428F98B2BE674381AAE4699E851",
    ));
    assert_eq!(a + b, c);
    assert_eq!(b + a, c);
    assert_eq!(d + d, e);
    assert_eq!(d.double(), e);
    assert_eq!(e + f, G::IDENTITY);
    assert_eq!(G::IDENTITY + c, c);
    assert_eq!(c + G::IDENTITY, c);
    assert_eq!(G::IDENTITY + G::IDENTITY, G::IDENTITY);
}

fn check_neg<G: Group + From<Ed25519Affine>>() {
    let a = G::from(point(
        "2C998F5CD6F89A5323244238DCB0E122F3C48B690D17895D64C622FE7B134873",
        "3B94477B1521DE0931F76F6CEE88E34BC4E4B581F88D8EAE8616625EC8046C4F",
    ));
    let b = G::from(point(
        "536670A3290765ACDCDBBDC7234F1EDD0C3B7496F2E876A29B39DD0184ECB77A",
        "3B94477B1521DE0931F76F6CEE88E34BC4E4B581F88D8EAE8616625EC8046C4F",
    ));
    assert_eq!(-a, b);
    assert_eq!(-G::IDENTITY, G::IDENTITY);
}

fn check_sub<G: Group + From<Ed25519Affine>>() {
    let a = G::from(point(
        "248949BF1E33E577C48DF9037C0FEDCE42EA070F91125CD796F49349A994794D",
        "1736DB3E2DA93A423B2DC4E1A010CF1BAB40AF86FAE99E7ABAB19262E335E3FC",
    ));
    let b = G::from(point(
        "342CFACF5781EFBB03D6326015C9078AAC0FBC7E5F17D6AD71C9BD8D5BB0E41D",
        "3E124FEECFA34E7E6BE1773135B1F5BE7D66E4D22B33243361AF0179EC747917",
    ));
    let c = G::from(point(
        "329A08756FA031A978BDB2DC8CE0191B67A31A11061AB327DD6BB07FCA2B1637",
        "1A67928E14B11CB3C91CD549C14AF67810F38F29163459EDC4FA31C85C8F2D10",
    ));
    let d = G::from(point(
        "124713CD5616381192FDB5BB7868ABA8A48952687874B05F8CA79FFECA50FCB9",
        "1A0CF87C5FE58923F6C85DA6A9B0D0B812C34CE97CC8374F518D9B4E5B54904D",
    ));
    assert_eq!(a - b, c);
    assert_eq!(-b + a, c);
    assert_eq!(d - d, G::IDENTITY);
    assert_eq!(G::IDENTITY - c, -c);
    assert_eq!(c - G::IDENTITY, c);
    assert_eq!(G::IDENTITY - G::IDENTITY, G::IDENTITY);
}

fn check_mul<G>()
where
    G: Group<ScalarField = Scalar25519> + From<Ed25519Affine> + Mul<Scalar25519, Output = G>,
{
    let a = G::from(point(
        "3AED134ED42AD34F18DB7529FB0ED4470DBB0A157D676ECA74F7789208B87678",
        "278B8C16CEFF8BD165602933BC9CA4E4365C38F3CE8D17519172D76B8B046621",
    ));
    let c = G::from(point(
        "24E994BFDF037A840793AC3321DBC483E081150B4C888FE8E6B77CBCCA117411",
        "64967B5AA7773EB87585C0D81E755B917A6AF58EA2F20E6A12B47D98FB9929F4",
    ));
    let b = Scalar25519::from_hex("0E18DDB951F8A3A10C33028E6CD15A9B4480C3C825F515B6DA24B75E7C813623")
        .unwrap();
    let d = Scalar25519::from_hex("251D364ED569CBF14184665CE3FA321E9678002959E04609D1A0ECC692CEE9E1")
        .unwrap();
    assert_eq!(a * b, c);
    assert_eq!(a.mul_bigint([1u64]), a);
    assert_eq!(a.mul_bigint([0u64]), G::IDENTITY);
    assert_eq!(G::IDENTITY * d, G::IDENTITY);
}

#[test]
fn group_add() {
    check_add::<Ed25519Affine>();
    check_add::<Ed25519Projective>();
    check_add::<Ed25519Extended>();
}

#[test]
fn group_neg() {
    check_neg::<Ed25519Affine>();
    check_neg::<Ed25519Projective>();
    check_neg::<Ed25519Extended>();
}

#[test]
fn group_sub() {
    check_sub::<Ed25519Affine>();
    check_sub::<Ed25519Projective>();
    check_sub::<Ed25519Extended>();
}

#[test]
fn group_mul() {
    check_mul::<Ed25519Affine>();
    check_mul::<Ed25519Projective>();
    check_mul::<Ed25519Extended>();
}

#[test]
fn generator_has_prime_order() {
    let g = Ed25519Extended::generator();
    assert!(g.is_on_curve());
    assert_eq!(g * -Scalar25519::from(1u64), -g);
    assert!(g.mul_bigint(ORDER).is_identity());
    assert!(!Ed25519Affine::generator().mul_bigint([8u64]).is_identity());
}

proptest! {
    #[test]
    fn representations_agree(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let p = Ed25519Affine::random(&mut rng);
        let q = Ed25519Affine::random(&mut rng);
        prop_assert!(p.is_on_curve());
        let s = Scalar25519::rand(&mut rng);
        let t = Scalar25519::rand(&mut rng);

        let affine = p * s + q * t;
        let projective = Ed25519Projective::from(p) * s + Ed25519Projective::from(q) * t;
        let extended = Ed25519Extended::from(p) * s + Ed25519Extended::from(q) * t;
        prop_assert!(projective.is_on_curve());
        prop_assert!(extended.is_on_curve());
        prop_assert_eq!(Ed25519Affine::from(projective), affine);
        prop_assert_eq!(Ed25519Affine::from(extended), affine);
        prop_assert_eq!(Ed25519Extended::from(projective), extended);
        prop_assert_eq!(Ed25519Projective::from(extended), projective);

        prop_assert_eq!(p.double() - p, p);
        prop_assert_eq!(p * (s + t), p * s + p * t);
    }

    #[test]
    fn random_points_have_prime_order(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let p = Ed25519Affine::random(&mut rng);
        let q = Ed25519Projective::random(&mut rng);
        let r = Ed25519Extended::random(&mut rng);
        prop_assert!(!p.is_identity() && !q.is_identity() && !r.is_identity());
        prop_assert!(p.mul_bigint(ORDER).is_identity());
        prop_assert!(q.mul_bigint(ORDER).is_identity());
        prop_assert!(r.mul_bigint(ORDER).is_identity());

        // scalars wrap around l without leaving the subgroup
        let s = -Scalar25519::from(3u64);
        let t = Scalar25519::from(5u64);
        prop_assert_eq!(r * (s + t), r * s + r * t);
        prop_assert_eq!(r * (s + t), r.double());
    }

    #[test]
    fn extended_matches_arkworks(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let s = Scalar25519::rand(&mut rng);
        let expected = (ArkProjective::generator() * s).into_affine();
        let ours = Ed25519Extended::generator() * s;
        prop_assert_eq!(Ed25519Affine::from(ours), Ed25519Affine::from(expected));
        prop_assert_eq!(ArkProjective::from(ours).into_affine(), expected);
    }
}
