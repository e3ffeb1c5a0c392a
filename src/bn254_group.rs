//! G1 and G2 group law.
//!
//! One affine/Jacobian implementation serves both groups through [`CurveField`]:
//! G1 is y^2 = x^3 + 3 over Fp, G2 is the D-type twist y^2 = x^3 + 3/xi over Fp2.
//! Jacobian (X, Y, Z) represents (X/Z^2, Y/Z^3); Z = 0 is the point at infinity.

#![allow(clippy::should_implement_trait)]

use std::fmt;

use crate::bn254_field::{bits_msb_first, Fp};
use crate::bn254_fp2::Fp2;
use crate::bn254_scalar::{Scalar, BN254_FR_MODULUS_LIMBS};

/// Coordinate field of a short Weierstrass curve with a = 0.
pub trait CurveField: Copy + Eq + fmt::Debug {
    fn zero() -> Self;
    fn one() -> Self;
    fn is_zero(&self) -> bool;
    fn add(self, rhs: Self) -> Self;
    fn sub(self, rhs: Self) -> Self;
    fn neg(self) -> Self;
    fn double(self) -> Self;
    fn mul(self, rhs: Self) -> Self;
    fn square(self) -> Self;
    fn inverse(self) -> Option<Self>;
    /// The curve constant b.
    fn coeff_b() -> Self;
}

macro_rules! impl_curve_field {
    ($field:ty, $coeff_b:expr) => {
        impl CurveField for $field {
            fn zero() -> Self {
                <$field>::zero()
            }
            fn one() -> Self {
                <$field>::one()
            }
            fn is_zero(&self) -> bool {
                <$field>::is_zero(self)
            }
            fn add(self, rhs: Self) -> Self {
                <$field>::add(self, rhs)
            }
            fn sub(self, rhs: Self) -> Self {
                <$field>::sub(self, rhs)
            }
            fn neg(self) -> Self {
                <$field>::neg(self)
            }
            fn double(self) -> Self {
                <$field>::double(self)
            }
            fn mul(self, rhs: Self) -> Self {
                <$field>::mul(self, rhs)
            }
            fn square(self) -> Self {
                <$field>::square(self)
            }
            fn inverse(self) -> Option<Self> {
                <$field>::inverse(self)
            }
            fn coeff_b() -> Self {
                $coeff_b
            }
        }
    };
}

impl_curve_field!(Fp, Fp::from_u64(3));
impl_curve_field!(Fp2, g2_coeff_b());

/// b2 = 3 / (9 + u).
pub fn g2_coeff_b() -> Fp2 {
    Fp2::new(
        Fp::from_limbs_mod_p([
            0x3267_e6dc_24a1_38e5,
            0xb5b4_c5e5_59db_efa3,
            0x81be_1899_1be0_6ac3,
            0x2b14_9d40_ceb8_aaae,
        ]),
        Fp::from_limbs_mod_p([
            0xe4a2_bd06_85c3_15d2,
            0xa74f_a084_e52d_1852,
            0xcd2c_afad_eed8_fdf4,
            0x0097_13b0_3af0_fed4,
        ]),
    )
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AffinePoint<F> {
    pub x: F,
    pub y: F,
    pub infinity: bool,
}

#[derive(Clone, Copy, Debug)]
pub struct JacobianPoint<F> {
    pub x: F,
    pub y: F,
    pub z: F,
}

pub type G1Affine = AffinePoint<Fp>;
pub type G2Affine = AffinePoint<Fp2>;
pub type G1Jacobian = JacobianPoint<Fp>;
pub type G2Jacobian = JacobianPoint<Fp2>;

impl<F: CurveField> AffinePoint<F> {
    /// Unchecked constructor; see `is_on_curve`.
    pub fn new(x: F, y: F) -> Self {
        Self { x, y, infinity: false }
    }

    pub fn identity() -> Self {
        Self { x: F::zero(), y: F::zero(), infinity: true }
    }

    pub fn is_identity(&self) -> bool {
        self.infinity
    }

    pub fn is_on_curve(&self) -> bool {
        if self.infinity {
            return true;
        }
        let lhs = self.y.square();
        let rhs = self.x.square().mul(self.x).add(F::coeff_b());
        lhs == rhs
    }

    pub fn neg(&self) -> Self {
        if self.infinity {
            return *self;
        }
        Self { x: self.x, y: self.y.neg(), infinity: false }
    }

    pub fn to_jacobian(&self) -> JacobianPoint<F> {
        JacobianPoint::from_affine(self)
    }

    pub fn add(&self, rhs: &Self) -> Self {
        self.to_jacobian().add_affine(rhs).to_affine()
    }

    pub fn double(&self) -> Self {
        self.to_jacobian().double().to_affine()
    }

    /// Scalar multiple, left in Jacobian form.
    pub fn mul(&self, k: &Scalar) -> JacobianPoint<F> {
        self.to_jacobian().mul(k)
    }
}

impl<F: CurveField> JacobianPoint<F> {
    pub fn identity() -> Self {
        Self { x: F::one(), y: F::one(), z: F::zero() }
    }

    pub fn is_identity(&self) -> bool {
        self.z.is_zero()
    }

    pub fn from_affine(p: &AffinePoint<F>) -> Self {
        if p.infinity {
            return Self::identity();
        }
        Self { x: p.x, y: p.y, z: F::one() }
    }

    pub fn to_affine(&self) -> AffinePoint<F> {
        let Some(z_inv) = self.z.inverse() else {
            return AffinePoint::identity();
        };
        let z_inv2 = z_inv.square();
        let z_inv3 = z_inv2.mul(z_inv);
        AffinePoint::new(self.x.mul(z_inv2), self.y.mul(z_inv3))
    }

    /// Y^2 = X^3 + b Z^6.
    pub fn is_on_curve(&self) -> bool {
        if self.is_identity() {
            return true;
        }
        let z2 = self.z.square();
        let z6 = z2.square().mul(z2);
        let lhs = self.y.square();
        let rhs = self.x.square().mul(self.x).add(F::coeff_b().mul(z6));
        lhs == rhs
    }

    pub fn neg(&self) -> Self {
        Self { x: self.x, y: self.y.neg(), z: self.z }
    }

    pub fn double(&self) -> Self {
        if self.is_identity() || self.y.is_zero() {
            return Self::identity();
        }
        let a = self.x.square();
        let b = self.y.square();
        let c = b.square();
        let d = self.x.add(b).square().sub(a).sub(c).double();
        let e = a.double().add(a);
        let f = e.square();
        let x3 = f.sub(d.double());
        let y3 = e.mul(d.sub(x3)).sub(c.double().double().double());
        let z3 = self.y.mul(self.z).double();
        Self { x: x3, y: y3, z: z3 }
    }

    pub fn add(&self, rhs: &Self) -> Self {
        if self.is_identity() {
            return *rhs;
        }
        if rhs.is_identity() {
            return *self;
        }
        let z1z1 = self.z.square();
        let z2z2 = rhs.z.square();
        let u1 = self.x.mul(z2z2);
        let u2 = rhs.x.mul(z1z1);
        let s1 = self.y.mul(rhs.z).mul(z2z2);
        let s2 = rhs.y.mul(self.z).mul(z1z1);
        if u1 == u2 {
            if s1 == s2 {
                return self.double();
            }
            return Self::identity();
        }
        let h = u2.sub(u1);
        let r = s2.sub(s1);
        let hh = h.square();
        let hhh = hh.mul(h);
        let v = u1.mul(hh);
        let x3 = r.square().sub(hhh).sub(v.double());
        let y3 = r.mul(v.sub(x3)).sub(s1.mul(hhh));
        let z3 = self.z.mul(rhs.z).mul(h);
        Self { x: x3, y: y3, z: z3 }
    }

    /// Mixed addition with an affine point.
    pub fn add_affine(&self, rhs: &AffinePoint<F>) -> Self {
        if rhs.infinity {
            return *self;
        }
        if self.is_identity() {
            return Self::from_affine(rhs);
        }
        let z1z1 = self.z.square();
        let u2 = rhs.x.mul(z1z1);
        let s2 = rhs.y.mul(self.z).mul(z1z1);
        if self.x == u2 {
            if self.y == s2 {
                return self.double();
            }
            return Self::identity();
        }
        let h = u2.sub(self.x);
        let r = s2.sub(self.y);
        let hh = h.square();
        let hhh = hh.mul(h);
        let v = self.x.mul(hh);
        let x3 = r.square().sub(hhh).sub(v.double());
        let y3 = r.mul(v.sub(x3)).sub(self.y.mul(hhh));
        let z3 = self.z.mul(h);
        Self { x: x3, y: y3, z: z3 }
    }

    /// Double-and-add over little-endian limbs, MSB first. Any 256-bit multiplier is accepted.
    pub fn mul_limbs(&self, k: &[u64]) -> Self {
        let mut acc = Self::identity();
        for bit in bits_msb_first(k) {
            acc = acc.double();
            if bit {
                acc = acc.add(self);
            }
        }
        acc
    }

    pub fn mul(&self, k: &Scalar) -> Self {
        self.mul_limbs(k.limbs())
    }
}

impl<F: CurveField> PartialEq for JacobianPoint<F> {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_identity(), other.is_identity()) {
            (true, true) => return true,
            (true, false) | (false, true) => return false,
            (false, false) => {}
        }
        let z1z1 = self.z.square();
        let z2z2 = other.z.square();
        if self.x.mul(z2z2) != other.x.mul(z1z1) {
            return false;
        }
        self.y.mul(other.z.mul(z2z2)) == other.y.mul(self.z.mul(z1z1))
    }
}

impl<F: CurveField> Eq for JacobianPoint<F> {}

impl G1Affine {
    pub fn generator() -> Self {
        Self::new(Fp::from_u64(1), Fp::from_u64(2))
    }

    /// G1 has cofactor 1.
    pub fn is_in_subgroup(&self) -> bool {
        self.is_on_curve()
    }
}

impl G2Affine {
    pub fn generator() -> Self {
        let x = Fp2::new(
            Fp::from_limbs_mod_p([
                0x46de_bd5c_d992_f6ed,
                0x6743_22d4_f75e_dadd,
                0x426a_0066_5e5c_4479,
                0x1800_deef_121f_1e76,
            ]),
            Fp::from_limbs_mod_p([
                0x97e4_85b7_aef3_12c2,
                0xf1aa_4933_35a9_e712,
                0x7260_bfb7_31fb_5d25,
                0x198e_9393_920d_483a,
            ]),
        );
        let y = Fp2::new(
            Fp::from_limbs_mod_p([
                0x4ce6_cc01_66fa_7daa,
                0xe3d1_e769_0c43_d37b,
                0x4aab_7180_8dcb_408f,
                0x12c8_5ea5_db8c_6deb,
            ]),
            Fp::from_limbs_mod_p([
                0x55ac_dadc_d122_975b,
                0xbc4b_3133_70b3_8ef3,
                0xec9e_99ad_690c_3395,
                0x0906_89d0_585f_f075,
            ]),
        );
        Self::new(x, y)
    }

    /// [r]Q = O; the twist has a large cofactor, so on-curve alone is not enough.
    pub fn is_in_subgroup(&self) -> bool {
        self.is_on_curve() && self.to_jacobian().mul_limbs(&BN254_FR_MODULUS_LIMBS).is_identity()
    }
}
