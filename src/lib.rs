//! BN254 pairing engine and Groth16 verifier.
//!
//! Field tower (Fp, Fp2, Fp6, Fp12), G1/G2 group law, optimal Ate pairing with a traced
//! variant, Groth16 verification against program keys, and the EVM alt_bn128 precompiles.

pub mod bn254_error;
pub mod bn254_config;
pub mod bn254_field;
pub mod bn254_scalar;
pub mod bn254_fp2;
pub mod bn254_fp6;
pub mod bn254_fp12;
pub mod bn254_group;
pub mod bn254_curve;
pub mod bn254_pairing;
pub mod bn254_final_exp;
pub mod bn254_pairing_trace;
pub mod bn254_groth16;
pub mod bn254_vk_constants;
pub mod bn254_vk_registry;
pub mod bn254_precompiles;
