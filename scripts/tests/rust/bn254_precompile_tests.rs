//! EVM alt_bn128 precompile behaviour (EIP-196, EIP-197).
//!
//! Usage: cargo test --test bn254_precompile_tests

use ark_bn254::{Fr, G1Projective};
use ark_ec::CurveGroup;
use ark_ff::{BigInteger, PrimeField, UniformRand};
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

use bn254_verifier::bn254_curve::{g1_to_be_bytes, g2_to_be_bytes};
use bn254_verifier::bn254_error::Bn254Error;
use bn254_verifier::bn254_group::{G1Affine, G2Affine};
use bn254_verifier::bn254_precompiles::{
    ec_add, ec_mul, ec_pairing, PrecompileError, EC_ADD_GAS, EC_MUL_GAS, EC_PAIRING_BASE_GAS,
    EC_PAIRING_PER_PAIR_GAS,
};
use bn254_verifier::bn254_scalar::Scalar;

const TWO_G: &str = concat!(
    "030644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd3",
    "15ed738c0e0a7c92e7845f96b2ae9c0a68a6a449e3538fc7ff3ebf7a5a18a2c4",
);

const NINE_G: &str = concat!(
    "039730ea8dff1254c0fee9c0ea777d29a9c710b7e616683f194f18c43b43b869",
    "073a5ffcc6fc7a28c30723d6e58ce577356982d65b833a5a5c15bf9024b43d98",
);

fn word(v: u64) -> [u8; 32] {
    let mut out = [0u8; 32];
    out[24..].copy_from_slice(&v.to_be_bytes());
    out
}

fn ark_g1_bytes(p: ark_bn254::G1Affine) -> Vec<u8> {
    if p.infinity {
        return vec![0u8; 64];
    }
    let mut out = p.x.into_bigint().to_bytes_be();
    out.extend_from_slice(&p.y.into_bigint().to_bytes_be());
    out
}

prop_compose! {
    fn any_g1_pair()(seed in any::<u64>()) -> (ark_bn254::G1Affine, ark_bn254::G1Affine) {
        let mut rng = StdRng::seed_from_u64(seed);
        (G1Projective::rand(&mut rng).into_affine(), G1Projective::rand(&mut rng).into_affine())
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn ec_add_matches_ark((a, b) in any_g1_pair()) {
        let mut input = ark_g1_bytes(a);
        input.extend_from_slice(&ark_g1_bytes(b));
        let out = ec_add(&input).expect("ec_add");
        prop_assert_eq!(out.gas_used, EC_ADD_GAS);
        prop_assert_eq!(out.bytes, ark_g1_bytes((a + b).into_affine()));
    }

    #[test]
    fn ec_mul_matches_ark((a, _b) in any_g1_pair(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let k = Fr::rand(&mut rng);
        let mut input = ark_g1_bytes(a);
        input.extend_from_slice(&k.into_bigint().to_bytes_be());
        let out = ec_mul(&input).expect("ec_mul");
        prop_assert_eq!(out.gas_used, EC_MUL_GAS);
        prop_assert_eq!(out.bytes, ark_g1_bytes((a * k).into_affine()));
    }
}

#[test]
fn ec_add_known_vector() {
    let mut input = word(1).to_vec();
    input.extend_from_slice(&word(2));
    input.extend_from_slice(&word(1));
    input.extend_from_slice(&word(2));
    let out = ec_add(&input).expect("ec_add");
    assert_eq!(hex::encode(out.bytes), TWO_G);

    // trailing bytes past 128 are ignored
    input.extend_from_slice(&[0xee; 16]);
    assert_eq!(ec_add(&input).map(|o| hex::encode(o.bytes)), Ok(TWO_G.to_string()));
}

#[test]
fn ec_mul_known_vector() {
    let mut input = word(1).to_vec();
    input.extend_from_slice(&word(2));
    input.extend_from_slice(&word(9));
    let out = ec_mul(&input).expect("ec_mul");
    assert_eq!(hex::encode(out.bytes), NINE_G);

    // scalars above r wrap: (2^256 - 1) * G is well defined
    let mut input = g1_to_be_bytes(&G1Affine::generator()).to_vec();
    input.extend_from_slice(&[0xff; 32]);
    assert!(ec_mul(&input).is_ok());

    // short input is zero-padded: missing scalar means 0 * P
    let short = g1_to_be_bytes(&G1Affine::generator());
    assert_eq!(ec_mul(&short).map(|o| o.bytes), Ok(vec![0u8; 64]));
}

#[test]
fn ec_pairing_bilinear_check() {
    let p = G1Affine::generator();
    let q = G2Affine::generator();
    let p3 = p.mul(&Scalar::from_u64(3)).to_affine();
    let q3 = q.mul(&Scalar::from_u64(3)).to_affine();

    // e(3P, Q) * e(-P, 3Q) == 1
    let mut input = Vec::new();
    input.extend_from_slice(&g1_to_be_bytes(&p3));
    input.extend_from_slice(&g2_to_be_bytes(&q));
    input.extend_from_slice(&g1_to_be_bytes(&p.neg()));
    input.extend_from_slice(&g2_to_be_bytes(&q3));
    let out = ec_pairing(&input).expect("ec_pairing");
    assert_eq!(out.bytes, word(1).to_vec());
    assert_eq!(out.gas_used, EC_PAIRING_BASE_GAS + 2 * EC_PAIRING_PER_PAIR_GAS);

    // identity pairs are allowed and neutral
    let mut with_zero = input.clone();
    with_zero.extend_from_slice(&[0u8; 192]);
    assert_eq!(ec_pairing(&with_zero).map(|o| o.bytes), Ok(word(1).to_vec()));

    let mut unbalanced = Vec::new();
    unbalanced.extend_from_slice(&g1_to_be_bytes(&p3));
    unbalanced.extend_from_slice(&g2_to_be_bytes(&q));
    assert_eq!(ec_pairing(&unbalanced).map(|o| o.bytes), Ok(word(0).to_vec()));
}

#[test]
fn ec_pairing_rejects_bad_input() {
    assert_eq!(ec_pairing(&[0u8; 100]), Err(PrecompileError::InputLength(100)));

    let mut bad = g1_to_be_bytes(&G1Affine::generator()).to_vec();
    let mut g2 = g2_to_be_bytes(&G2Affine::generator());
    g2[127] ^= 1;
    bad.extend_from_slice(&g2);
    assert!(matches!(
        ec_pairing(&bad),
        Err(PrecompileError::Bn254(Bn254Error::InvalidPoint(_)))
    ));

    let mut non_canonical = vec![0xffu8; 64];
    non_canonical.extend_from_slice(&g2_to_be_bytes(&G2Affine::generator()));
    assert!(matches!(
        ec_pairing(&non_canonical),
        Err(PrecompileError::Bn254(Bn254Error::Decode(_)))
    ));
}
