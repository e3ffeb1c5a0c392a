//! Optimal Ate pairing on BN254.
//!
//! The Miller loop keeps T in Jacobian coordinates over Fp2 and evaluates each
//! tangent/chord line at P directly as a sparse Fp12 value (slots w^0, w^1, w^3),
//! scaled by an Fp2 factor that the final exponentiation removes.

use rayon::prelude::*;

use crate::bn254_config::PairingConfig;
use crate::bn254_final_exp::final_exponentiation;
use crate::bn254_fp12::{frobenius_coeff, Fp12};
use crate::bn254_fp2::Fp2;
use crate::bn254_group::{G1Affine, G2Affine, G2Jacobian};
use crate::bn254_pairing_trace::{MillerStepKind, MillerTrace};

/// The BN parameter u.
pub const BN_U: u64 = 4_965_661_367_192_848_881;

/// 6u + 2 = 29793968203157093288, a 65-bit constant.
pub const ATE_LOOP_COUNT: u128 = 6 * BN_U as u128 + 2;

/// Bits processed below the leading one of `ATE_LOOP_COUNT`.
const ATE_LOOP_BITS: u32 = 64;

/// Line value c0 + c3 * w + c4 * w^3, already evaluated at P.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineEval {
    pub c0: Fp2,
    pub c3: Fp2,
    pub c4: Fp2,
}

impl LineEval {
    pub fn to_fp12(&self) -> Fp12 {
        let z = Fp2::zero();
        Fp12::from_coeffs([self.c0, z, z, self.c3, self.c4, z])
    }

    fn apply(&self, f: &mut Fp12) {
        f.mul_by_034(&self.c0, &self.c3, &self.c4);
    }
}

/// Tangent at T evaluated at P, then T = 2T.
pub fn doubling_step(t: &mut G2Jacobian, p: &G1Affine) -> LineEval {
    let (x, y, z) = (t.x, t.y, t.z);
    let a = x.square();
    let b = y.square();
    let c = b.square();
    let d = x.add(b).square().sub(a).sub(c).double();
    let e = a.double().add(a);
    let f = e.square();
    let zz = z.square();

    t.x = f.sub(d.double());
    t.y = e.mul(d.sub(t.x)).sub(c.double().double().double());
    t.z = y.mul(z).double();

    LineEval {
        c0: t.z.mul(zz).mul_by_fp(p.y),
        c3: e.mul(zz).mul_by_fp(p.x).neg(),
        c4: e.mul(x).sub(b.double()),
    }
}

/// Chord through T and affine Q evaluated at P, then T = T + Q.
pub fn addition_step(t: &mut G2Jacobian, q: &G2Affine, p: &G1Affine) -> LineEval {
    let (x, y, z) = (t.x, t.y, t.z);
    let zz = z.square();
    let u2 = q.x.mul(zz);
    let s2 = q.y.mul(z).mul(zz);
    let h = u2.sub(x);
    let r = s2.sub(y);
    let hh = h.square();
    let hhh = hh.mul(h);
    let v = x.mul(hh);

    t.x = r.square().sub(hhh).sub(v.double());
    t.y = r.mul(v.sub(t.x)).sub(y.mul(hhh));
    t.z = z.mul(h);

    LineEval {
        c0: t.z.mul_by_fp(p.y),
        c3: r.mul_by_fp(p.x).neg(),
        c4: r.mul(q.x).sub(t.z.mul(q.y)),
    }
}

/// pi(Q) on the twist: (conj(x) * xi^((p-1)/3), conj(y) * xi^((p-1)/2)).
pub fn twist_frobenius(q: &G2Affine) -> G2Affine {
    if q.infinity {
        return *q;
    }
    G2Affine::new(
        q.x.conjugate().mul(frobenius_coeff(2)),
        q.y.conjugate().mul(frobenius_coeff(3)),
    )
}

/// Q1 = pi(Q) and Q2 = -pi^2(Q), the two closing points of the loop.
pub fn frobenius_closing_points(q: &G2Affine) -> (G2Affine, G2Affine) {
    let q1 = twist_frobenius(q);
    let q2 = twist_frobenius(&q1).neg();
    (q1, q2)
}

/// Miller loop f_{6u+2,Q}(P) with the two Frobenius closing lines.
/// Returns one when either point is the identity.
pub fn miller_loop(q: &G2Affine, p: &G1Affine) -> Fp12 {
    miller_loop_inner(q, p, None)
}

pub(crate) fn miller_loop_inner(
    q: &G2Affine,
    p: &G1Affine,
    mut trace: Option<&mut MillerTrace>,
) -> Fp12 {
    if q.infinity || p.infinity {
        return Fp12::one();
    }
    let mut t = q.to_jacobian();
    let mut f = Fp12::one();

    for i in (0..ATE_LOOP_BITS).rev() {
        f = f.square();
        let line = doubling_step(&mut t, p);
        line.apply(&mut f);
        record(&mut trace, MillerStepKind::Double, Some(i), &line, &t, &f);

        if (ATE_LOOP_COUNT >> i) & 1 == 1 {
            let line = addition_step(&mut t, q, p);
            line.apply(&mut f);
            record(&mut trace, MillerStepKind::Add, Some(i), &line, &t, &f);
        }
    }

    let (q1, q2) = frobenius_closing_points(q);
    let line = addition_step(&mut t, &q1, p);
    line.apply(&mut f);
    record(&mut trace, MillerStepKind::FrobeniusAdd1, None, &line, &t, &f);

    let line = addition_step(&mut t, &q2, p);
    line.apply(&mut f);
    record(&mut trace, MillerStepKind::FrobeniusAdd2, None, &line, &t, &f);

    f
}

fn record(
    trace: &mut Option<&mut MillerTrace>,
    kind: MillerStepKind,
    bit: Option<u32>,
    line: &LineEval,
    t: &G2Jacobian,
    f: &Fp12,
) {
    if let Some(trace) = trace {
        trace.push(kind, bit, *line, *t, *f);
    }
}

/// Product of Miller loops over (G2, G1) pairs, skipping pairs with an identity point.
pub fn multi_miller_loop(pairs: &[(G2Affine, G1Affine)]) -> Fp12 {
    multi_miller_loop_with_config(pairs, PairingConfig::global())
}

pub fn multi_miller_loop_with_config(pairs: &[(G2Affine, G1Affine)], cfg: &PairingConfig) -> Fp12 {
    let active: Vec<&(G2Affine, G1Affine)> = pairs
        .iter()
        .filter(|(q, p)| !q.infinity && !p.infinity)
        .collect();
    if cfg.use_parallel(active.len()) {
        tracing::trace!(pairs = active.len(), "miller loops on rayon pool");
        let values: Vec<Fp12> = active.par_iter().map(|(q, p)| miller_loop(q, p)).collect();
        values.into_iter().fold(Fp12::one(), Fp12::mul)
    } else {
        tracing::trace!(pairs = active.len(), "sequential miller loops");
        active
            .iter()
            .fold(Fp12::one(), |acc, (q, p)| acc.mul(miller_loop(q, p)))
    }
}

/// e(P, Q) with operands in (G2, G1) order.
pub fn pairing(q: &G2Affine, p: &G1Affine) -> Fp12 {
    final_exponentiation(&miller_loop(q, p))
}

/// Whether the product of pairings over all pairs is one.
pub fn pairing_product_is_one(pairs: &[(G2Affine, G1Affine)]) -> bool {
    pairing_product_is_one_with_config(pairs, PairingConfig::global())
}

pub fn pairing_product_is_one_with_config(
    pairs: &[(G2Affine, G1Affine)],
    cfg: &PairingConfig,
) -> bool {
    final_exponentiation(&multi_miller_loop_with_config(pairs, cfg)).is_one()
}
