//! BN254 base field Fp.
//!
//! Elements are stored as Montgomery-form little-endian `u64` limbs (a * 2^256 mod p).
//! All public conversions speak canonical values: big-endian bytes or little-endian limbs.

#![allow(clippy::needless_range_loop)]
#![allow(clippy::should_implement_trait)]

use std::fmt;

/// p = 21888242871839275222246405745257275088696311157297823662689037894645226208583
pub const BN254_FP_MODULUS_LIMBS: [u64; 4] = [
    0x3c20_8c16_d87c_fd47,
    0x9781_6a91_6871_ca8d,
    0xb850_45b6_8181_585d,
    0x3064_4e72_e131_a029,
];

/// p - 2, the Fermat inversion exponent.
pub const BN254_FP_MODULUS_MINUS_TWO: [u64; 4] = [
    0x3c20_8c16_d87c_fd45,
    0x9781_6a91_6871_ca8d,
    0xb850_45b6_8181_585d,
    0x3064_4e72_e131_a029,
];

/// 2^256 mod p (Montgomery one).
const R_MOD_P: [u64; 4] = [
    0xd35d_438d_c58f_0d9d,
    0x0a78_eb28_f5c7_0b3d,
    0x666e_a36f_7879_462c,
    0x0e0a_77c1_9a07_df2f,
];

/// 2^512 mod p.
const R2_MOD_P: [u64; 4] = [
    0xf32c_fc5b_538a_fa89,
    0xb5e7_1911_d445_01fb,
    0x47ab_1eff_0a41_7ff6,
    0x06d8_9f71_cab8_351f,
];

/// -p^-1 mod 2^64.
const MONT_INV64: u64 = montgomery_inv64(BN254_FP_MODULUS_LIMBS[0]);

/// BN254 base-field element in Montgomery form.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fp([u64; 4]);

impl Fp {
    pub const ZERO: Fp = Fp([0u64; 4]);
    pub const ONE: Fp = Fp(R_MOD_P);

    pub fn zero() -> Self {
        Self::ZERO
    }

    pub fn one() -> Self {
        Self::ONE
    }

    pub fn from_u64(v: u64) -> Self {
        Self(montgomery_mul([v, 0, 0, 0], R2_MOD_P))
    }

    /// Canonical little-endian limbs; `None` when the value is not below p.
    pub fn from_canonical_limbs(limbs: [u64; 4]) -> Option<Self> {
        if !is_canonical_limbs(limbs) {
            return None;
        }
        Some(Self(montgomery_mul(limbs, R2_MOD_P)))
    }

    /// Any 256-bit value, reduced mod p.
    pub fn from_limbs_mod_p(limbs: [u64; 4]) -> Self {
        Self(montgomery_mul(limbs, R2_MOD_P))
    }

    pub fn to_canonical_limbs(self) -> [u64; 4] {
        montgomery_mul(self.0, [1u64, 0, 0, 0])
    }

    /// Strict big-endian decode; rejects values >= p.
    pub fn from_be_bytes(bytes: &[u8; 32]) -> Option<Self> {
        Self::from_canonical_limbs(limbs_from_be_bytes(*bytes))
    }

    pub fn to_be_bytes(self) -> [u8; 32] {
        be_bytes_from_limbs(self.to_canonical_limbs())
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u64; 4]
    }

    pub fn is_one(&self) -> bool {
        self.0 == R_MOD_P
    }

    pub fn add(self, rhs: Self) -> Self {
        let (sum, carry) = add_limbs_with_carry(self.0, rhs.0);
        let mut out = sum;
        if carry != 0 || limbs_ge(out, BN254_FP_MODULUS_LIMBS) {
            out = sub_limbs_with_borrow(out, BN254_FP_MODULUS_LIMBS).0;
        }
        Self(out)
    }

    pub fn sub(self, rhs: Self) -> Self {
        let (diff, borrow) = sub_limbs_with_borrow(self.0, rhs.0);
        let out = if borrow != 0 {
            add_limbs_with_carry(diff, BN254_FP_MODULUS_LIMBS).0
        } else {
            diff
        };
        Self(out)
    }

    pub fn neg(self) -> Self {
        if self.is_zero() {
            return self;
        }
        Self(sub_limbs_with_borrow(BN254_FP_MODULUS_LIMBS, self.0).0)
    }

    pub fn double(self) -> Self {
        self.add(self)
    }

    pub fn mul(self, rhs: Self) -> Self {
        Self(montgomery_mul(self.0, rhs.0))
    }

    pub fn square(self) -> Self {
        self.mul(self)
    }

    /// Square-and-multiply over little-endian exponent limbs, scanning MSB to LSB.
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

    /// Fermat inverse, `None` for zero.
    pub fn inverse(self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }
        Some(self.pow(&BN254_FP_MODULUS_MINUS_TWO))
    }
}

impl Default for Fp {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Debug for Fp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fp(0x{})", hex::encode(self.to_be_bytes()))
    }
}

impl fmt::Display for Fp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.to_be_bytes()))
    }
}

/// Bits of a little-endian limb slice from the highest set bit down to bit 0.
pub(crate) fn bits_msb_first(limbs: &[u64]) -> impl Iterator<Item = bool> + '_ {
    limbs
        .iter()
        .rev()
        .flat_map(|limb| (0..64).rev().map(move |i| (limb >> i) & 1 == 1))
        .skip_while(|bit| !*bit)
}

pub fn is_canonical_limbs(limbs: [u64; 4]) -> bool {
    !limbs_ge(limbs, BN254_FP_MODULUS_LIMBS)
}

pub fn limbs_from_be_bytes(bytes: [u8; 32]) -> [u64; 4] {
    let mut out = [0u64; 4];
    for i in 0..4 {
        let start = 32 - (i + 1) * 8;
        let mut chunk = [0u8; 8];
        chunk.copy_from_slice(&bytes[start..start + 8]);
        out[i] = u64::from_be_bytes(chunk);
    }
    out
}

pub fn be_bytes_from_limbs(limbs: [u64; 4]) -> [u8; 32] {
    let mut out = [0u8; 32];
    for i in 0..4 {
        let start = 32 - (i + 1) * 8;
        out[start..start + 8].copy_from_slice(&limbs[i].to_be_bytes());
    }
    out
}

pub(crate) fn add_limbs_with_carry(a: [u64; 4], b: [u64; 4]) -> ([u64; 4], u64) {
    let mut out = [0u64; 4];
    let mut carry = 0u64;
    for i in 0..4 {
        let (s0, c0) = a[i].overflowing_add(b[i]);
        let (s1, c1) = s0.overflowing_add(carry);
        out[i] = s1;
        carry = (c0 | c1) as u64;
    }
    (out, carry)
}

pub(crate) fn sub_limbs_with_borrow(a: [u64; 4], b: [u64; 4]) -> ([u64; 4], u64) {
    let mut out = [0u64; 4];
    let mut borrow = 0u64;
    for i in 0..4 {
        let (d0, b0) = a[i].overflowing_sub(b[i]);
        let (d1, b1) = d0.overflowing_sub(borrow);
        out[i] = d1;
        borrow = (b0 | b1) as u64;
    }
    (out, borrow)
}

pub(crate) fn limbs_ge(a: [u64; 4], b: [u64; 4]) -> bool {
    for i in (0..4).rev() {
        if a[i] != b[i] {
            return a[i] > b[i];
        }
    }
    true
}

fn mul_256(a: [u64; 4], b: [u64; 4]) -> [u64; 8] {
    let mut out = [0u64; 8];
    for i in 0..4 {
        let mut carry: u128 = 0;
        for j in 0..4 {
            let idx = i + j;
            let t = (a[i] as u128) * (b[j] as u128) + (out[idx] as u128) + carry;
            out[idx] = t as u64;
            carry = t >> 64;
        }
        out[i + 4] = carry as u64;
    }
    out
}

const fn montgomery_inv64(x: u64) -> u64 {
    let mut inv = 1u64;
    let mut i = 0;
    while i < 6 {
        inv = inv.wrapping_mul(2u64.wrapping_sub(x.wrapping_mul(inv)));
        i += 1;
    }
    inv.wrapping_neg()
}

fn montgomery_reduce(mut t: [u64; 8]) -> [u64; 4] {
    let n = BN254_FP_MODULUS_LIMBS;
    for i in 0..4 {
        let m = t[i].wrapping_mul(MONT_INV64);
        let mut carry = 0u128;
        for j in 0..4 {
            let idx = i + j;
            let sum = (t[idx] as u128) + (m as u128) * (n[j] as u128) + carry;
            t[idx] = sum as u64;
            carry = sum >> 64;
        }
        let mut k = i + 4;
        while carry != 0 && k < 8 {
            let sum = (t[k] as u128) + carry;
            t[k] = sum as u64;
            carry = sum >> 64;
            k += 1;
        }
    }
    let mut out = [t[4], t[5], t[6], t[7]];
    if limbs_ge(out, n) {
        out = sub_limbs_with_borrow(out, n).0;
    }
    out
}

fn montgomery_mul(a: [u64; 4], b: [u64; 4]) -> [u64; 4] {
    montgomery_reduce(mul_256(a, b))
}
