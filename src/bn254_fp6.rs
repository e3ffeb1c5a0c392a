//! Cubic extension Fp6 = Fp2[v]/(v^3 - xi), xi = 9 + u.

#![allow(clippy::should_implement_trait)]

use crate::bn254_field::bits_msb_first;
use crate::bn254_fp2::Fp2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Fp6 {
    pub c0: Fp2,
    pub c1: Fp2,
    pub c2: Fp2,
}

impl Fp6 {
    pub fn new(c0: Fp2, c1: Fp2, c2: Fp2) -> Self {
        Self { c0, c1, c2 }
    }

    pub fn zero() -> Self {
        Self { c0: Fp2::zero(), c1: Fp2::zero(), c2: Fp2::zero() }
    }

    pub fn one() -> Self {
        Self { c0: Fp2::one(), c1: Fp2::zero(), c2: Fp2::zero() }
    }

    pub fn from_fp2(c0: Fp2) -> Self {
        Self { c0, c1: Fp2::zero(), c2: Fp2::zero() }
    }

    pub fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero() && self.c2.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.c0.is_one() && self.c1.is_zero() && self.c2.is_zero()
    }

    pub fn add(self, rhs: Self) -> Self {
        Self {
            c0: self.c0.add(rhs.c0),
            c1: self.c1.add(rhs.c1),
            c2: self.c2.add(rhs.c2),
        }
    }

    pub fn sub(self, rhs: Self) -> Self {
        Self {
            c0: self.c0.sub(rhs.c0),
            c1: self.c1.sub(rhs.c1),
            c2: self.c2.sub(rhs.c2),
        }
    }

    pub fn neg(self) -> Self {
        Self { c0: self.c0.neg(), c1: self.c1.neg(), c2: self.c2.neg() }
    }

    pub fn double(self) -> Self {
        Self { c0: self.c0.double(), c1: self.c1.double(), c2: self.c2.double() }
    }

    /// Karatsuba: six Fp2 multiplications.
    pub fn mul(self, rhs: Self) -> Self {
        let (a0, a1, a2) = (self.c0, self.c1, self.c2);
        let (b0, b1, b2) = (rhs.c0, rhs.c1, rhs.c2);

        let v0 = a0.mul(b0);
        let v1 = a1.mul(b1);
        let v2 = a2.mul(b2);

        let t0 = a1.add(a2).mul(b1.add(b2)).sub(v1).sub(v2);
        let t1 = a0.add(a1).mul(b0.add(b1)).sub(v0).sub(v1);
        let t2 = a0.add(a2).mul(b0.add(b2)).sub(v0).add(v1).sub(v2);

        Self {
            c0: v0.add(t0.mul_by_nonresidue()),
            c1: t1.add(v2.mul_by_nonresidue()),
            c2: t2,
        }
    }

    /// Three squarings and three multiplications.
    pub fn square(self) -> Self {
        let s0 = self.c0.square();
        let s1 = self.c0.mul(self.c1).double();
        let s2 = self.c1.square();
        let s3 = self.c1.mul(self.c2).double();
        let s4 = self.c2.square();
        let s5 = self.c0.mul(self.c2).double();

        Self {
            c0: s0.add(s3.mul_by_nonresidue()),
            c1: s1.add(s4.mul_by_nonresidue()),
            c2: s2.add(s5),
        }
    }

    /// Multiply by v: (c0, c1, c2) -> (xi * c2, c0, c1).
    pub fn mul_by_v(self) -> Self {
        Self { c0: self.c2.mul_by_nonresidue(), c1: self.c0, c2: self.c1 }
    }

    /// Multiply by the sparse element c0 + c1 * v.
    pub fn mul_by_01(self, c0: Fp2, c1: Fp2) -> Self {
        let a_a = self.c0.mul(c0);
        let b_b = self.c1.mul(c1);

        let t1 = c1.mul(self.c1.add(self.c2)).sub(b_b).mul_by_nonresidue().add(a_a);
        let t3 = c0.mul(self.c0.add(self.c2)).sub(a_a).add(b_b);
        let t2 = c0.add(c1).mul(self.c0.add(self.c1)).sub(a_a).sub(b_b);

        Self { c0: t1, c1: t2, c2: t3 }
    }

    pub fn inverse(self) -> Option<Self> {
        let (a0, a1, a2) = (self.c0, self.c1, self.c2);
        let t0 = a0.square().sub(a1.mul(a2).mul_by_nonresidue());
        let t1 = a2.square().mul_by_nonresidue().sub(a0.mul(a1));
        let t2 = a1.square().sub(a0.mul(a2));
        let norm = a0
            .mul(t0)
            .add(a2.mul(t1).add(a1.mul(t2)).mul_by_nonresidue());
        let inv = norm.inverse()?;
        Some(Self { c0: t0.mul(inv), c1: t1.mul(inv), c2: t2.mul(inv) })
    }

    /// Square-and-multiply over little-endian limbs, MSB first.
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
