//! Property-based tests for the BN254 group law and pairing.
//!
//! Usage: cargo test --release --test bn254_pairing_property_tests

use ark_bn254::{Bn254, Fq, Fq12, Fr, G1Projective, G2Projective};
use ark_ec::{pairing::Pairing, CurveGroup};
use ark_ff::{BigInteger, PrimeField, UniformRand};
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

use bn254_verifier::bn254_config::PairingConfig;
use bn254_verifier::bn254_curve::{g1_from_be_bytes, g1_to_be_bytes, g2_from_be_bytes_raw};
use bn254_verifier::bn254_final_exp::final_exponentiation;
use bn254_verifier::bn254_fp12::Fp12;
use bn254_verifier::bn254_group::{G1Affine, G2Affine};
use bn254_verifier::bn254_pairing::{
    multi_miller_loop_with_config, pairing, pairing_product_is_one, pairing_product_is_one_with_config,
};
use bn254_verifier::bn254_scalar::{Scalar, BN254_FR_MODULUS_LIMBS};

fn fq_bytes(x: Fq) -> Vec<u8> {
    x.into_bigint().to_bytes_be()
}

fn g1_from_ark(p: ark_bn254::G1Affine) -> G1Affine {
    let mut bytes = fq_bytes(p.x);
    bytes.extend_from_slice(&fq_bytes(p.y));
    g1_from_be_bytes(&bytes).expect("ark g1")
}

fn g2_from_ark(q: ark_bn254::G2Affine) -> G2Affine {
    let mut bytes = Vec::with_capacity(128);
    for c in [q.x.c0, q.x.c1, q.y.c0, q.y.c1] {
        bytes.extend_from_slice(&fq_bytes(c));
    }
    g2_from_be_bytes_raw(&bytes).expect("ark g2")
}

fn g1_to_ark(p: &G1Affine) -> ark_bn254::G1Affine {
    let bytes = g1_to_be_bytes(p);
    ark_bn254::G1Affine::new(
        Fq::from_be_bytes_mod_order(&bytes[..32]),
        Fq::from_be_bytes_mod_order(&bytes[32..]),
    )
}

fn fp12_to_ark(x: Fp12) -> Fq12 {
    let bytes = x.to_be_bytes();
    let c: Vec<Fq> = bytes.chunks_exact(32).map(Fq::from_be_bytes_mod_order).collect();
    let fq2 = |i: usize| ark_bn254::Fq2::new(c[2 * i], c[2 * i + 1]);
    Fq12::new(
        ark_bn254::Fq6::new(fq2(0), fq2(1), fq2(2)),
        ark_bn254::Fq6::new(fq2(3), fq2(4), fq2(5)),
    )
}

fn scalar_from_ark(s: Fr) -> Scalar {
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&s.into_bigint().to_bytes_be());
    Scalar::from_be_bytes(&bytes).expect("ark scalar")
}

prop_compose! {
    fn any_points()(seed in any::<u64>()) -> (ark_bn254::G1Affine, ark_bn254::G2Affine) {
        let mut rng = StdRng::seed_from_u64(seed);
        (G1Projective::rand(&mut rng).into_affine(), G2Projective::rand(&mut rng).into_affine())
    }
}

prop_compose! {
    fn any_fr()(seed in any::<u64>()) -> Fr {
        let mut rng = StdRng::seed_from_u64(seed);
        Fr::rand(&mut rng)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn g1_scalar_mul_matches_ark(k in any_fr(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let p = G1Projective::rand(&mut rng).into_affine();
        let expected = (p * k).into_affine();
        let got = g1_from_ark(p).mul(&scalar_from_ark(k)).to_affine();
        prop_assert_eq!(g1_to_ark(&got), expected);
    }

    #[test]
    fn g1_add_matches_ark(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let a = G1Projective::rand(&mut rng).into_affine();
        let b = G1Projective::rand(&mut rng).into_affine();
        let got = g1_from_ark(a).add(&g1_from_ark(b));
        prop_assert_eq!(g1_to_ark(&got), (a + b).into_affine());
        prop_assert!(g1_from_ark(a).add(&g1_from_ark(a).neg()).is_identity());
    }

    #[test]
    fn g2_points_are_in_subgroup((_p, q) in any_points()) {
        let q = g2_from_ark(q);
        prop_assert!(q.is_on_curve());
        prop_assert!(q.is_in_subgroup());
        let r = q.to_jacobian().mul_limbs(&BN254_FR_MODULUS_LIMBS);
        prop_assert!(r.is_identity());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(6))]

    #[test]
    fn pairing_matches_ark((p, q) in any_points()) {
        let expected = Bn254::pairing(p, q).0;
        prop_assert_eq!(fp12_to_ark(pairing(&g2_from_ark(q), &g1_from_ark(p))), expected);
    }

    #[test]
    fn pairing_is_bilinear(a in 1u64..1_000, b in 1u64..1_000) {
        let p = G1Affine::generator();
        let q = G2Affine::generator();
        let ap = p.mul(&Scalar::from_u64(a)).to_affine();
        let bq = q.mul(&Scalar::from_u64(b)).to_affine();
        let lhs = pairing(&bq, &ap);
        let rhs = pairing(&q, &p).pow_u64(a * b);
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn product_with_inverse_is_one((p, q) in any_points()) {
        let (p, q) = (g1_from_ark(p), g2_from_ark(q));
        prop_assert!(pairing_product_is_one(&[(q, p), (q, p.neg())]));
        prop_assert!(!pairing_product_is_one(&[(q, p), (q, p)]));
    }

    #[test]
    fn parallel_schedule_is_deterministic((p, q) in any_points()) {
        let (p, q) = (g1_from_ark(p), g2_from_ark(q));
        let g = G1Affine::generator();
        let h = G2Affine::generator();
        let pairs = [(q, p), (h, g), (q.neg(), g), (h, p.neg())];
        let seq = multi_miller_loop_with_config(&pairs, &PairingConfig::sequential());
        let par = multi_miller_loop_with_config(&pairs, &PairingConfig { parallel: true, par_min_pairs: 1 });
        prop_assert_eq!(seq, par);
    }
}

#[test]
fn final_exponentiation_lands_in_order_r_subgroup() {
    let mut rng = StdRng::seed_from_u64(0xf1a1);
    for _ in 0..2 {
        let f = Fq12::rand(&mut rng);
        let bytes: Vec<u8> = [f.c0, f.c1]
            .iter()
            .flat_map(|c6| [c6.c0, c6.c1, c6.c2])
            .flat_map(|c2| [c2.c0, c2.c1])
            .flat_map(fq_bytes)
            .collect();
        let mut buf = [0u8; 384];
        buf.copy_from_slice(&bytes);
        let x = Fp12::from_be_bytes(&buf).expect("canonical");
        let y = final_exponentiation(&x);
        assert!(y.pow(&BN254_FR_MODULUS_LIMBS).is_one());
    }
}

#[test]
fn identity_pairs_contribute_nothing() {
    let p = G1Affine::generator();
    let q = G2Affine::generator();
    let cfg = PairingConfig::sequential();
    assert!(pairing_product_is_one_with_config(&[], &cfg));
    assert!(pairing_product_is_one_with_config(&[(G2Affine::identity(), p), (q, G1Affine::identity())], &cfg));
    assert!(pairing(&q, &G1Affine::identity()).is_one());
}
