//! Final exponentiation f^((p^12 - 1) / r).
//!
//! Easy part: f^((p^6 - 1)(p^2 + 1)). Hard part: an addition chain in u over the
//! cyclotomic subgroup, using Frobenius maps for the p-power factors.

use crate::bn254_fp12::Fp12;
use crate::bn254_pairing::BN_U;

/// Named intermediates of one final exponentiation, in evaluation order.
pub type FinalExpTrace = Vec<(&'static str, Fp12)>;

/// Zero maps to zero; every Miller-loop output is invertible.
pub fn final_exponentiation(f: &Fp12) -> Fp12 {
    final_exponentiation_inner(f, None)
}

pub fn final_exponentiation_traced(f: &Fp12) -> (Fp12, FinalExpTrace) {
    let mut trace = Vec::new();
    let out = final_exponentiation_inner(f, Some(&mut trace));
    (out, trace)
}

/// f^((p^6 - 1)(p^2 + 1)).
pub fn easy_part(f: &Fp12) -> Option<Fp12> {
    let f1 = f.conjugate().mul(f.inverse()?);
    Some(f1.frobenius_map(2).mul(f1))
}

fn exp_by_u(x: Fp12) -> Fp12 {
    x.pow_u64(BN_U)
}

fn final_exponentiation_inner(f: &Fp12, mut trace: Option<&mut FinalExpTrace>) -> Fp12 {
    let mut note = |name: &'static str, value: &Fp12| {
        if let Some(trace) = trace.as_deref_mut() {
            trace.push((name, *value));
        }
    };

    let Some(f_inv) = f.inverse() else {
        return Fp12::zero();
    };
    let f1 = f.conjugate().mul(f_inv);
    note("f1", &f1);
    let x = f1.frobenius_map(2).mul(f1);
    note("f_easy", &x);

    let mut b = exp_by_u(x).square();
    let mut a = b.square().mul(b);
    note("b", &b);
    note("a", &a);

    let mut a2 = exp_by_u(a);
    a = a.mul(a2);
    let a3 = exp_by_u(a2.square());
    a = a.mul(a3);
    note("a2", &a2);
    note("a3", &a3);

    b = b.conjugate().mul(a);
    a2 = a2.mul(a);
    note("b", &b);
    note("a2", &a2);

    a = a.frobenius_map(2).mul(a2).mul(x);
    note("a", &a);

    let mut y = x.conjugate().mul(b);
    a = a.mul(b.frobenius_map(1));
    note("a", &a);

    y = y.frobenius_map(3).mul(a);
    note("y", &y);
    y
}
