//! Step-by-step Miller-loop traces.
//!
//! A trace records every line evaluation together with the running point T and the
//! accumulator f after the line was absorbed, so two implementations can be diffed
//! step by step.

use crate::bn254_final_exp::{final_exponentiation_traced, FinalExpTrace};
use crate::bn254_fp12::Fp12;
use crate::bn254_group::{G1Affine, G2Affine, G2Jacobian};
use crate::bn254_pairing::{miller_loop_inner, LineEval};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MillerStepKind {
    Double,
    Add,
    FrobeniusAdd1,
    FrobeniusAdd2,
}

impl MillerStepKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MillerStepKind::Double => "dbl",
            MillerStepKind::Add => "add",
            MillerStepKind::FrobeniusAdd1 => "frob1",
            MillerStepKind::FrobeniusAdd2 => "frob2",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MillerTraceStep {
    pub kind: MillerStepKind,
    /// Loop bit, `None` for the closing Frobenius steps.
    pub bit: Option<u32>,
    pub line: LineEval,
    pub t: G2Jacobian,
    pub f: Fp12,
}

#[derive(Clone, Debug, Default)]
pub struct MillerTrace {
    steps: Vec<MillerTraceStep>,
}

impl MillerTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(
        &mut self,
        kind: MillerStepKind,
        bit: Option<u32>,
        line: LineEval,
        t: G2Jacobian,
        f: Fp12,
    ) {
        self.steps.push(MillerTraceStep { kind, bit, line, t, f });
    }

    pub fn steps(&self) -> &[MillerTraceStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn count(&self, kind: MillerStepKind) -> usize {
        self.steps.iter().filter(|s| s.kind == kind).count()
    }

    /// Index of the first step whose kind, bit, or accumulator differs.
    pub fn first_divergence(&self, other: &MillerTrace) -> Option<usize> {
        let shared = self.steps.len().min(other.steps.len());
        for i in 0..shared {
            let (a, b) = (&self.steps[i], &other.steps[i]);
            if a.kind != b.kind || a.bit != b.bit || a.f != b.f {
                return Some(i);
            }
        }
        if self.steps.len() != other.steps.len() {
            return Some(shared);
        }
        None
    }

    /// One line per step: `<index> <kind> <bit|-> <f as 384-byte hex>`.
    pub fn to_hex_lines(&self) -> Vec<String> {
        self.steps
            .iter()
            .enumerate()
            .map(|(i, step)| {
                let bit = step.bit.map(|b| b.to_string()).unwrap_or_else(|| "-".to_string());
                format!("{i} {} {bit} {}", step.kind.as_str(), hex::encode(step.f.to_be_bytes()))
            })
            .collect()
    }
}

pub fn miller_loop_traced(q: &G2Affine, p: &G1Affine) -> (Fp12, MillerTrace) {
    let mut trace = MillerTrace::new();
    let f = miller_loop_inner(q, p, Some(&mut trace));
    (f, trace)
}

/// Full pairing trace: Miller steps plus named final-exponentiation intermediates.
pub fn pairing_traced(q: &G2Affine, p: &G1Affine) -> (Fp12, MillerTrace, FinalExpTrace) {
    let (f, miller) = miller_loop_traced(q, p);
    let (out, final_exp) = final_exponentiation_traced(&f);
    (out, miller, final_exp)
}
