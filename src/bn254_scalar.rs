//! Scalars of the BN254 group order r.

use num_bigint::BigUint;
use std::fmt;

use crate::bn254_error::{decode_err, Bn254Result};
use crate::bn254_field::{be_bytes_from_limbs, limbs_from_be_bytes, limbs_ge};

/// r = 21888242871839275222246405745257275088548364400416034343698204186575808495617
pub const BN254_FR_MODULUS_LIMBS: [u64; 4] = [
    0x43e1_f593_f000_0001,
    0x2833_e848_79b9_7091,
    0xb850_45b6_8181_585d,
    0x3064_4e72_e131_a029,
];

/// Canonical integer in [0, r), little-endian limbs.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Scalar([u64; 4]);

impl Scalar {
    pub fn zero() -> Self {
        Self([0u64; 4])
    }

    pub fn one() -> Self {
        Self([1, 0, 0, 0])
    }

    pub fn from_u64(v: u64) -> Self {
        Self([v, 0, 0, 0])
    }

    pub fn from_limbs(limbs: [u64; 4]) -> Option<Self> {
        if limbs_ge(limbs, BN254_FR_MODULUS_LIMBS) {
            return None;
        }
        Some(Self(limbs))
    }

    /// Strict decode of a 32-byte big-endian scalar.
    pub fn from_be_bytes(bytes: &[u8; 32]) -> Bn254Result<Self> {
        Self::from_limbs(limbs_from_be_bytes(*bytes))
            .ok_or_else(|| decode_err("scalar", "value not below group order"))
    }

    /// Big-endian integer of any length, reduced mod r.
    pub fn from_be_bytes_reduced(bytes: &[u8]) -> Self {
        let modulus = fr_modulus();
        let value = BigUint::from_bytes_be(bytes) % modulus;
        let mut le = value.to_bytes_le();
        le.resize(32, 0);
        let mut limbs = [0u64; 4];
        for (limb, chunk) in limbs.iter_mut().zip(le.chunks_exact(8)) {
            let mut buf = [0u8; 8];
            buf.copy_from_slice(chunk);
            *limb = u64::from_le_bytes(buf);
        }
        Self(limbs)
    }

    pub fn to_be_bytes(&self) -> [u8; 32] {
        be_bytes_from_limbs(self.0)
    }

    pub fn limbs(&self) -> &[u64; 4] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u64; 4]
    }
}

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar(0x{})", hex::encode(self.to_be_bytes()))
    }
}

fn fr_modulus() -> BigUint {
    BigUint::from_bytes_be(&be_bytes_from_limbs(BN254_FR_MODULUS_LIMBS))
}
