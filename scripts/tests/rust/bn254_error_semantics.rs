//! Error classification at the decode and verification boundaries.
//!
//! Usage: cargo test --test bn254_error_semantics

use bn254_verifier::bn254_curve::{
    g1_from_be_bytes, g1_to_be_bytes, g2_from_be_bytes, g2_to_be_bytes, g2_to_be_bytes_raw,
};
use bn254_verifier::bn254_error::Bn254Error;
use bn254_verifier::bn254_field::{be_bytes_from_limbs, BN254_FP_MODULUS_LIMBS};
use bn254_verifier::bn254_groth16::{
    decode_prefixed_proof, decode_proof, decode_public_inputs, ensure_valid, verify, verify_bytes,
    Groth16Proof, VerificationKey, GROTH16_PROOF_BYTES_LEN,
};
use bn254_verifier::bn254_group::{G1Affine, G2Affine};
use bn254_verifier::bn254_scalar::{Scalar, BN254_FR_MODULUS_LIMBS};
use bn254_verifier::bn254_vk_constants::SAMPLE_PROOF_HEX;
use bn254_verifier::bn254_vk_registry::{default_program_vk, VkRegistry};

fn assert_prefix(err: Bn254Error, prefix: &str) {
    let msg = err.to_string();
    assert!(msg.starts_with(prefix), "expected prefix {prefix}, got {msg}");
}

fn toy_vk() -> VerificationKey {
    let g = G1Affine::generator();
    let h = G2Affine::generator();
    VerificationKey::new(g, h, h, h, vec![g, g.double()]).expect("vk")
}

#[test]
fn length_is_checked_before_contents() {
    assert_prefix(g1_from_be_bytes(&[0xff; 65]).unwrap_err(), "decode: g1");
    assert_prefix(g2_from_be_bytes(&[0xff; 127]).unwrap_err(), "decode: g2");
    assert_prefix(decode_proof(&[0u8; 257]).unwrap_err(), "decode: proof");
    assert_prefix(decode_prefixed_proof(&[0u8; GROTH16_PROOF_BYTES_LEN]).unwrap_err(), "decode: proof");
}

#[test]
fn non_canonical_coordinate_is_decode_error() {
    let p = be_bytes_from_limbs(BN254_FP_MODULUS_LIMBS);
    let mut g1 = [0u8; 64];
    g1[..32].copy_from_slice(&p);
    g1[63] = 2;
    assert!(matches!(g1_from_be_bytes(&g1), Err(Bn254Error::Decode(_))));

    let mut g2 = g2_to_be_bytes(&G2Affine::generator());
    g2[64..96].copy_from_slice(&p);
    assert!(matches!(g2_from_be_bytes(&g2), Err(Bn254Error::Decode(_))));
}

#[test]
fn off_curve_is_invalid_point() {
    let mut g1 = g1_to_be_bytes(&G1Affine::generator());
    g1[31] ^= 0x04;
    assert_prefix(g1_from_be_bytes(&g1).unwrap_err(), "invalid point: g1");

    // real-first layout fed to the EVM decoder lands off the twist
    let raw = g2_to_be_bytes_raw(&G2Affine::generator());
    assert_prefix(g2_from_be_bytes(&raw).unwrap_err(), "invalid point: g2");
}

#[test]
fn public_inputs_are_strict() {
    let r = be_bytes_from_limbs(BN254_FR_MODULUS_LIMBS);
    assert!(matches!(decode_public_inputs(&r), Err(Bn254Error::Decode(_))));
    assert!(matches!(decode_public_inputs(&[0u8; 31]), Err(Bn254Error::Decode(_))));
    assert!(Scalar::from_be_bytes(&r).is_err());
    assert_eq!(Scalar::from_be_bytes_reduced(&r), Scalar::zero());
}

#[test]
fn input_count_mismatch() {
    let vk = toy_vk();
    let proof = Groth16Proof {
        a: G1Affine::generator(),
        b: G2Affine::generator(),
        c: G1Affine::generator(),
    };
    let err = verify(&proof, &[], &vk).unwrap_err();
    assert_eq!(err, Bn254Error::InvalidInputLength { expected: 1, got: 0 });
    assert_prefix(err, "public input length mismatch");
    let two = [Scalar::one(), Scalar::one()];
    assert!(matches!(
        verify(&proof, &two, &vk),
        Err(Bn254Error::InvalidInputLength { expected: 1, got: 2 })
    ));
}

#[test]
fn invalid_proof_is_false_or_verification_failed() {
    let vk = toy_vk();
    let proof = Groth16Proof {
        a: G1Affine::generator(),
        b: G2Affine::generator(),
        c: G1Affine::generator(),
    };
    assert_eq!(verify(&proof, &[Scalar::one()], &vk), Ok(false));
    let err = ensure_valid(&proof, &[Scalar::one()], &vk).unwrap_err();
    assert_eq!(err, Bn254Error::VerificationFailed);
    assert_prefix(err, "verification failed");
}

#[test]
fn shape_errors_win_over_pairing_work() {
    let vk = toy_vk();
    let proof_bytes = hex::decode(SAMPLE_PROOF_HEX).expect("hex");
    assert!(matches!(
        verify_bytes(&vk, &proof_bytes[..200], &[0u8; 32]),
        Err(Bn254Error::Decode(_))
    ));
    assert!(matches!(
        verify_bytes(&vk, &proof_bytes, &[0u8; 64]),
        Err(Bn254Error::InvalidInputLength { expected: 1, got: 2 })
    ));
}

#[test]
fn unknown_program_carries_hash() {
    let registry = VkRegistry::with_default().expect("registry");
    let proof_bytes = hex::decode(SAMPLE_PROOF_HEX).expect("hex");
    let missing = [0xabu8; 32];
    let err = registry.verify(&missing, &proof_bytes, &[0u8; 32]).unwrap_err();
    assert_eq!(err, Bn254Error::UnknownProgram(hex::encode(missing)));
    assert!(err.to_string().contains(&hex::encode(missing)));

    let (program_hash, _) = default_program_vk().expect("default vk");
    assert!(registry.get(&program_hash).is_some());
}

#[test]
fn empty_ic_rejected() {
    let g = G1Affine::generator();
    let h = G2Affine::generator();
    assert!(matches!(VerificationKey::new(g, h, h, h, vec![]), Err(Bn254Error::Decode(_))));
    assert!(matches!(VerificationKey::from_negated(g, h, h, h, vec![]), Err(Bn254Error::Decode(_))));
}
