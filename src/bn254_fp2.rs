//! Quadratic extension Fp2 = Fp[u]/(u^2 + 1).
//!
//! `c0` is the real part and `c1` the imaginary part. The Ethereum wire order
//! (imaginary first) is handled only in `bn254_curve`.

#![allow(clippy::should_implement_trait)]

use crate::bn254_field::{bits_msb_first, Fp};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Fp2 {
    pub c0: Fp,
    pub c1: Fp,
}

impl Fp2 {
    pub fn new(c0: Fp, c1: Fp) -> Self {
        Self { c0, c1 }
    }

    pub fn zero() -> Self {
        Self { c0: Fp::zero(), c1: Fp::zero() }
    }

    pub fn one() -> Self {
        Self { c0: Fp::one(), c1: Fp::zero() }
    }

    pub fn from_fp(c0: Fp) -> Self {
        Self { c0, c1: Fp::zero() }
    }

    pub fn from_u64s(re: u64, im: u64) -> Self {
        Self { c0: Fp::from_u64(re), c1: Fp::from_u64(im) }
    }

    /// The sextic non-residue 9 + u.
    pub fn xi() -> Self {
        Self::from_u64s(9, 1)
    }

    pub fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.c0.is_one() && self.c1.is_zero()
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

    pub fn double(self) -> Self {
        Self { c0: self.c0.double(), c1: self.c1.double() }
    }

    pub fn mul(self, rhs: Self) -> Self {
        let v0 = self.c0.mul(rhs.c0);
        let v1 = self.c1.mul(rhs.c1);
        let c1 = self.c0.add(self.c1).mul(rhs.c0.add(rhs.c1)).sub(v0).sub(v1);
        Self { c0: v0.sub(v1), c1 }
    }

    pub fn square(self) -> Self {
        let a = self.c0.add(self.c1);
        let b = self.c0.sub(self.c1);
        let c = self.c0.double();
        Self { c0: a.mul(b), c1: c.mul(self.c1) }
    }

    pub fn mul_by_fp(self, rhs: Fp) -> Self {
        Self { c0: self.c0.mul(rhs), c1: self.c1.mul(rhs) }
    }

    /// Multiply by xi = 9 + u: (9*c0 - c1) + (9*c1 + c0)u.
    pub fn mul_by_nonresidue(self) -> Self {
        let nine_c0 = self.c0.double().double().double().add(self.c0);
        let nine_c1 = self.c1.double().double().double().add(self.c1);
        Self { c0: nine_c0.sub(self.c1), c1: nine_c1.add(self.c0) }
    }

    pub fn conjugate(self) -> Self {
        Self { c0: self.c0, c1: self.c1.neg() }
    }

    /// x^p; on Fp2 this is conjugation.
    pub fn frobenius_map(self) -> Self {
        self.conjugate()
    }

    pub fn inverse(self) -> Option<Self> {
        let norm = self.c0.square().add(self.c1.square());
        let inv = norm.inverse()?;
        Some(Self { c0: self.c0.mul(inv), c1: self.c1.neg().mul(inv) })
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
}
