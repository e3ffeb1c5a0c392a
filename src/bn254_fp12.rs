//! Fp12 = Fp6[w]/(w^2 - v), the pairing target field.
//!
//! Slot map (coefficient of w^k): c0.c0 -> w^0, c0.c1 -> w^2, c0.c2 -> w^4,
//! c1.c0 -> w^1, c1.c1 -> w^3, c1.c2 -> w^5. `to_coeffs` and `from_coeffs`
//! project and embed in that slot order; the flattened Fp forms list each
//! Fp2 as (re, im).

#![allow(clippy::should_implement_trait)]

use num_bigint::BigUint;
use std::sync::OnceLock;

use crate::bn254_field::{bits_msb_first, be_bytes_from_limbs, Fp, BN254_FP_MODULUS_LIMBS};
use crate::bn254_fp2::Fp2;
use crate::bn254_fp6::Fp6;

pub const FP12_BYTES_LEN: usize = 12 * 32;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Fp12 {
    pub c0: Fp6,
    pub c1: Fp6,
}

impl Fp12 {
    pub fn new(c0: Fp6, c1: Fp6) -> Self {
        Self { c0, c1 }
    }

    pub fn zero() -> Self {
        Self { c0: Fp6::zero(), c1: Fp6::zero() }
    }

    pub fn one() -> Self {
        Self { c0: Fp6::one(), c1: Fp6::zero() }
    }

    /// Scalar embedding of a base-field element.
    pub fn from_fp(x: Fp) -> Self {
        Self { c0: Fp6::from_fp2(Fp2::from_fp(x)), c1: Fp6::zero() }
    }

    /// Embed coefficients given in slot order [c0.c0, c0.c1, c0.c2, c1.c0, c1.c1, c1.c2].
    pub fn from_coeffs(c: [Fp2; 6]) -> Self {
        Self {
            c0: Fp6::new(c[0], c[1], c[2]),
            c1: Fp6::new(c[3], c[4], c[5]),
        }
    }

    pub fn to_coeffs(&self) -> [Fp2; 6] {
        [self.c0.c0, self.c0.c1, self.c0.c2, self.c1.c0, self.c1.c1, self.c1.c2]
    }

    pub fn from_fp_coeffs(c: [Fp; 12]) -> Self {
        let mut slots = [Fp2::zero(); 6];
        for (slot, pair) in slots.iter_mut().zip(c.chunks_exact(2)) {
            *slot = Fp2::new(pair[0], pair[1]);
        }
        Self::from_coeffs(slots)
    }

    pub fn to_fp_coeffs(&self) -> [Fp; 12] {
        let mut out = [Fp::zero(); 12];
        for (i, slot) in self.to_coeffs().iter().enumerate() {
            out[2 * i] = slot.c0;
            out[2 * i + 1] = slot.c1;
        }
        out
    }

    /// 12 big-endian Fp values in the flattened slot order.
    pub fn to_be_bytes(&self) -> [u8; FP12_BYTES_LEN] {
        let mut out = [0u8; FP12_BYTES_LEN];
        for (chunk, fp) in out.chunks_exact_mut(32).zip(self.to_fp_coeffs().iter()) {
            chunk.copy_from_slice(&fp.to_be_bytes());
        }
        out
    }

    pub fn from_be_bytes(bytes: &[u8; FP12_BYTES_LEN]) -> Option<Self> {
        let mut coeffs = [Fp::zero(); 12];
        for (coeff, chunk) in coeffs.iter_mut().zip(bytes.chunks_exact(32)) {
            let mut buf = [0u8; 32];
            buf.copy_from_slice(chunk);
            *coeff = Fp::from_be_bytes(&buf)?;
        }
        Some(Self::from_fp_coeffs(coeffs))
    }

    pub fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero()
    }

    pub fn is_one(&self) -> bool {
        *self == Self::one()
    }

    pub fn add(self, rhs: Self) -> Self {
        Self { c0: self.c0.add(rhs.c0), c1: self.c1.add(rhs.c1) }
    }

    pub fn sub(self, rhs: Self) -> Self {
        Self { c0: self.c0.sub(rhs.c0), c1: self.c1.sub(rhs.c1) }
    }

    pub fn neg(self) -> Self {
        Self { c0: self.c0.neg(), c1: self.c1.neg() }
    }

    pub fn mul(self, rhs: Self) -> Self {
        let v0 = self.c0.mul(rhs.c0);
        let v1 = self.c1.mul(rhs.c1);
        let c1 = self.c0.add(self.c1).mul(rhs.c0.add(rhs.c1)).sub(v0).sub(v1);
        Self { c0: v0.add(v1.mul_by_v()), c1 }
    }

    /// (a + bw)^2 = (a^2 + v b^2) + 2ab w.
    pub fn square(self) -> Self {
        let a2 = self.c0.square();
        let b2 = self.c1.square();
        let ab = self.c0.mul(self.c1);
        Self { c0: a2.add(b2.mul_by_v()), c1: ab.double() }
    }

    /// Multiply by a line value with non-zero slots w^0 (c0), w^1 (c3) and w^3 (c4).
    pub fn mul_by_034(&mut self, c0: &Fp2, c3: &Fp2, c4: &Fp2) {
        let a = Fp6::new(self.c0.c0.mul(*c0), self.c0.c1.mul(*c0), self.c0.c2.mul(*c0));
        let b = self.c1.mul_by_01(*c3, *c4);

        let e = self.c0.add(self.c1).mul_by_01(c0.add(*c3), *c4);
        self.c1 = e.sub(a.add(b));
        self.c0 = b.mul_by_v().add(a);
    }

    /// The involution w -> -w; the inverse on the cyclotomic subgroup.
    pub fn conjugate(self) -> Self {
        Self { c0: self.c0, c1: self.c1.neg() }
    }

    pub fn inverse(self) -> Option<Self> {
        let t = self.c0.square().sub(self.c1.square().mul_by_v());
        let inv = t.inverse()?;
        Some(Self { c0: self.c0.mul(inv), c1: self.c1.mul(inv).neg() })
    }

    /// x^(p^power).
    pub fn frobenius_map(self, power: usize) -> Self {
        let mut out = self;
        for _ in 0..power % 12 {
            out = out.frobenius_once();
        }
        out
    }

    fn frobenius_once(self) -> Self {
        let mut out = self.to_coeffs();
        for (slot, k) in out.iter_mut().zip(SLOT_W_POWER) {
            *slot = slot.conjugate().mul(frobenius_coeff(k));
        }
        Self::from_coeffs(out)
    }

    pub fn pow(self, exp: &[u64]) -> Self {
        let mut acc = Self::one();
        for bit in bits_msb_first(exp) {
            acc = acc.square();
            if bit {
                acc = acc.mul(self);
            }
        }
        acc
    }

    pub fn pow_u64(self, exp: u64) -> Self {
        self.pow(&[exp])
    }
}

/// Power of w held by each slot of `to_coeffs`.
const SLOT_W_POWER: [usize; 6] = [0, 2, 4, 1, 3, 5];

/// xi^(k(p-1)/6), the factor w^(kp) = w^k * gamma_k.
pub(crate) fn frobenius_coeff(k: usize) -> Fp2 {
    static COEFFS: OnceLock<[Fp2; 6]> = OnceLock::new();
    COEFFS.get_or_init(|| {
        let p = BigUint::from_bytes_be(&be_bytes_from_limbs(BN254_FP_MODULUS_LIMBS));
        let exp = (p - 1u32) / 6u32;
        let gamma1 = Fp2::xi().pow(&exp.to_u64_digits());
        let mut coeffs = [Fp2::one(); 6];
        for k in 1..6 {
            coeffs[k] = coeffs[k - 1].mul(gamma1);
        }
        coeffs
    })[k % 6]
}
