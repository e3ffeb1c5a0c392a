//! EVM alt_bn128 precompiles (EIP-196, EIP-197) on top of the native engine.
//!
//! Gas follows the Istanbul schedule (EIP-1108).

use crate::bn254_curve::{g1_from_be_bytes, g1_to_be_bytes, g2_from_be_bytes, G1_BYTES_LEN, G2_BYTES_LEN};
use crate::bn254_error::Bn254Error;
use crate::bn254_field::limbs_from_be_bytes;
use crate::bn254_group::{G1Affine, G2Affine};
use crate::bn254_pairing::pairing_product_is_one;

pub const EC_ADD_GAS: u64 = 150;
pub const EC_MUL_GAS: u64 = 6_000;
pub const EC_PAIRING_BASE_GAS: u64 = 45_000;
pub const EC_PAIRING_PER_PAIR_GAS: u64 = 34_000;

const EC_ADD_INPUT_LEN: usize = 2 * G1_BYTES_LEN;
const EC_MUL_INPUT_LEN: usize = G1_BYTES_LEN + 32;
pub const EC_PAIRING_ELEMENT_LEN: usize = G1_BYTES_LEN + G2_BYTES_LEN;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrecompileOutput {
    pub gas_used: u64,
    pub bytes: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PrecompileError {
    #[error(transparent)]
    Bn254(#[from] Bn254Error),

    #[error("pairing input length {0} is not a multiple of {EC_PAIRING_ELEMENT_LEN}")]
    InputLength(usize),
}

/// Right-pad with zeros or truncate to exactly `N` bytes.
fn fixed_input<const N: usize>(input: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    let n = input.len().min(N);
    out[..n].copy_from_slice(&input[..n]);
    out
}

/// 0x06: P + Q.
pub fn ec_add(input: &[u8]) -> Result<PrecompileOutput, PrecompileError> {
    let buf = fixed_input::<EC_ADD_INPUT_LEN>(input);
    let p = g1_from_be_bytes(&buf[..G1_BYTES_LEN])?;
    let q = g1_from_be_bytes(&buf[G1_BYTES_LEN..])?;
    let sum = p.add(&q);
    Ok(PrecompileOutput { gas_used: EC_ADD_GAS, bytes: g1_to_be_bytes(&sum).to_vec() })
}

/// 0x07: k * P for any 256-bit k.
pub fn ec_mul(input: &[u8]) -> Result<PrecompileOutput, PrecompileError> {
    let buf = fixed_input::<EC_MUL_INPUT_LEN>(input);
    let p = g1_from_be_bytes(&buf[..G1_BYTES_LEN])?;
    let mut k = [0u8; 32];
    k.copy_from_slice(&buf[G1_BYTES_LEN..]);
    let out = p.to_jacobian().mul_limbs(&limbs_from_be_bytes(k)).to_affine();
    Ok(PrecompileOutput { gas_used: EC_MUL_GAS, bytes: g1_to_be_bytes(&out).to_vec() })
}

/// 0x08: 32-byte big-endian 1 if the product of pairings is one, else 0.
pub fn ec_pairing(input: &[u8]) -> Result<PrecompileOutput, PrecompileError> {
    if input.len() % EC_PAIRING_ELEMENT_LEN != 0 {
        return Err(PrecompileError::InputLength(input.len()));
    }
    let pairs = input
        .chunks_exact(EC_PAIRING_ELEMENT_LEN)
        .map(|chunk| {
            let p = g1_from_be_bytes(&chunk[..G1_BYTES_LEN])?;
            let q = g2_from_be_bytes(&chunk[G1_BYTES_LEN..])?;
            Ok((q, p))
        })
        .collect::<Result<Vec<(G2Affine, G1Affine)>, Bn254Error>>()?;
    let gas_used = EC_PAIRING_BASE_GAS + EC_PAIRING_PER_PAIR_GAS * pairs.len() as u64;
    let mut bytes = vec![0u8; 32];
    if pairing_product_is_one(&pairs) {
        bytes[31] = 1;
    }
    tracing::trace!(pairs = pairs.len(), result = bytes[31], "ec_pairing");
    Ok(PrecompileOutput { gas_used, bytes })
}
