//! Groth16 verification over BN254.
//!
//! A proof (A, B, C) verifies against a key (alpha, -beta, -gamma, -delta, IC) and
//! public inputs s_i when
//!
//! ```text
//! e(A, B) * e(C, -delta) * e(alpha, -beta) * e(L, -gamma) == 1,  L = IC_0 + sum s_i * IC_{i+1}
//! ```
//!
//! The G2 key points are stored pre-negated so verification never negates.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::bn254_config::PairingConfig;
use crate::bn254_curve::{
    g1_from_be_bytes, g1_to_be_bytes, g2_from_be_bytes, g2_to_be_bytes, G1_BYTES_LEN, G2_BYTES_LEN,
};
use crate::bn254_error::{decode_err, Bn254Error, Bn254Result};
use crate::bn254_group::{G1Affine, G1Jacobian, G2Affine};
use crate::bn254_pairing::pairing_product_is_one_with_config;
use crate::bn254_scalar::Scalar;

pub const GROTH16_PROOF_BYTES_LEN: usize = G1_BYTES_LEN + G2_BYTES_LEN + G1_BYTES_LEN;
/// A 4-byte verifier selector followed by the proof.
pub const GROTH16_PREFIXED_PROOF_BYTES_LEN: usize = 4 + GROTH16_PROOF_BYTES_LEN;
pub const SCALAR_BYTES_LEN: usize = 32;

const VK_FIXED_BYTES_LEN: usize = G1_BYTES_LEN + 3 * G2_BYTES_LEN + 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Groth16Proof {
    pub a: G1Affine,
    pub b: G2Affine,
    pub c: G1Affine,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerificationKey {
    alpha_g1: G1Affine,
    beta_neg_g2: G2Affine,
    gamma_neg_g2: G2Affine,
    delta_neg_g2: G2Affine,
    ic: Vec<G1Affine>,
}

/// JSON form of a verification key: 0x-hex wire encodings, non-negated G2 points.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationKeyJson {
    pub alpha_g1: String,
    pub beta_g2: String,
    pub gamma_g2: String,
    pub delta_g2: String,
    pub ic: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofJson {
    pub a: String,
    pub b: String,
    pub c: String,
}

impl VerificationKey {
    /// Key from setup output; beta, gamma and delta are negated here.
    pub fn new(
        alpha_g1: G1Affine,
        beta_g2: G2Affine,
        gamma_g2: G2Affine,
        delta_g2: G2Affine,
        ic: Vec<G1Affine>,
    ) -> Bn254Result<Self> {
        Self::from_negated(alpha_g1, beta_g2.neg(), gamma_g2.neg(), delta_g2.neg(), ic)
    }

    pub fn from_negated(
        alpha_g1: G1Affine,
        beta_neg_g2: G2Affine,
        gamma_neg_g2: G2Affine,
        delta_neg_g2: G2Affine,
        ic: Vec<G1Affine>,
    ) -> Bn254Result<Self> {
        if ic.is_empty() {
            return Err(decode_err("vk", "ic must contain at least one point"));
        }
        Ok(Self { alpha_g1, beta_neg_g2, gamma_neg_g2, delta_neg_g2, ic })
    }

    pub fn alpha_g1(&self) -> &G1Affine {
        &self.alpha_g1
    }

    pub fn beta_neg_g2(&self) -> &G2Affine {
        &self.beta_neg_g2
    }

    pub fn gamma_neg_g2(&self) -> &G2Affine {
        &self.gamma_neg_g2
    }

    pub fn delta_neg_g2(&self) -> &G2Affine {
        &self.delta_neg_g2
    }

    pub fn ic(&self) -> &[G1Affine] {
        &self.ic
    }

    pub fn num_public_inputs(&self) -> usize {
        self.ic.len().saturating_sub(1)
    }

    /// alpha || beta || gamma || delta || ic_len (u32 BE) || ic, with non-negated G2 points.
    pub fn from_bytes(bytes: &[u8]) -> Bn254Result<Self> {
        if bytes.len() < VK_FIXED_BYTES_LEN {
            return Err(decode_err("vk", "too short"));
        }
        let mut off = 0usize;
        let alpha = g1_from_be_bytes(take(bytes, &mut off, G1_BYTES_LEN)?)?;
        let beta = g2_from_be_bytes(take(bytes, &mut off, G2_BYTES_LEN)?)?;
        let gamma = g2_from_be_bytes(take(bytes, &mut off, G2_BYTES_LEN)?)?;
        let delta = g2_from_be_bytes(take(bytes, &mut off, G2_BYTES_LEN)?)?;
        let ic_len = read_u32_be(bytes, &mut off)? as usize;
        if bytes.len() - off != ic_len * G1_BYTES_LEN {
            return Err(decode_err("vk", "ic length mismatch"));
        }
        let ic = bytes[off..]
            .chunks_exact(G1_BYTES_LEN)
            .map(g1_from_be_bytes)
            .collect::<Bn254Result<Vec<_>>>()?;
        Self::new(alpha, beta, gamma, delta, ic)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(VK_FIXED_BYTES_LEN + self.ic.len() * G1_BYTES_LEN);
        out.extend_from_slice(&g1_to_be_bytes(&self.alpha_g1));
        out.extend_from_slice(&g2_to_be_bytes(&self.beta_neg_g2.neg()));
        out.extend_from_slice(&g2_to_be_bytes(&self.gamma_neg_g2.neg()));
        out.extend_from_slice(&g2_to_be_bytes(&self.delta_neg_g2.neg()));
        out.extend_from_slice(&(self.ic.len() as u32).to_be_bytes());
        for p in self.ic.iter() {
            out.extend_from_slice(&g1_to_be_bytes(p));
        }
        out
    }

    pub fn from_json_value(json: &VerificationKeyJson) -> Bn254Result<Self> {
        let ic = json
            .ic
            .iter()
            .map(|s| g1_from_be_bytes(&parse_hex("vk ic", s)?))
            .collect::<Bn254Result<Vec<_>>>()?;
        Self::new(
            g1_from_be_bytes(&parse_hex("vk alpha", &json.alpha_g1)?)?,
            g2_from_be_bytes(&parse_hex("vk beta", &json.beta_g2)?)?,
            g2_from_be_bytes(&parse_hex("vk gamma", &json.gamma_g2)?)?,
            g2_from_be_bytes(&parse_hex("vk delta", &json.delta_g2)?)?,
            ic,
        )
    }

    pub fn to_json_value(&self) -> VerificationKeyJson {
        VerificationKeyJson {
            alpha_g1: to_hex(&g1_to_be_bytes(&self.alpha_g1)),
            beta_g2: to_hex(&g2_to_be_bytes(&self.beta_neg_g2.neg())),
            gamma_g2: to_hex(&g2_to_be_bytes(&self.gamma_neg_g2.neg())),
            delta_g2: to_hex(&g2_to_be_bytes(&self.delta_neg_g2.neg())),
            ic: self.ic.iter().map(|p| to_hex(&g1_to_be_bytes(p))).collect(),
        }
    }

    pub fn from_json(s: &str) -> Bn254Result<Self> {
        let json: VerificationKeyJson =
            serde_json::from_str(s).map_err(|e| decode_err("vk json", e))?;
        Self::from_json_value(&json)
    }

    pub fn to_json(&self) -> Bn254Result<String> {
        serde_json::to_string_pretty(&self.to_json_value()).map_err(|e| decode_err("vk json", e))
    }
}

impl Groth16Proof {
    pub fn from_json(s: &str) -> Bn254Result<Self> {
        let json: ProofJson = serde_json::from_str(s).map_err(|e| decode_err("proof json", e))?;
        Ok(Self {
            a: g1_from_be_bytes(&parse_hex("proof a", &json.a)?)?,
            b: g2_from_be_bytes(&parse_hex("proof b", &json.b)?)?,
            c: g1_from_be_bytes(&parse_hex("proof c", &json.c)?)?,
        })
    }

    pub fn to_json(&self) -> Bn254Result<String> {
        let json = ProofJson {
            a: to_hex(&g1_to_be_bytes(&self.a)),
            b: to_hex(&g2_to_be_bytes(&self.b)),
            c: to_hex(&g1_to_be_bytes(&self.c)),
        };
        serde_json::to_string_pretty(&json).map_err(|e| decode_err("proof json", e))
    }
}

/// A || B || C, or the same behind a 4-byte selector.
pub fn decode_proof(bytes: &[u8]) -> Bn254Result<Groth16Proof> {
    match bytes.len() {
        GROTH16_PROOF_BYTES_LEN => decode_unprefixed(bytes),
        GROTH16_PREFIXED_PROOF_BYTES_LEN => decode_prefixed_proof(bytes).map(|(_, proof)| proof),
        n => Err(decode_err(
            "proof",
            format!("expected {GROTH16_PROOF_BYTES_LEN} or {GROTH16_PREFIXED_PROOF_BYTES_LEN} bytes, got {n}"),
        )),
    }
}

pub fn decode_prefixed_proof(bytes: &[u8]) -> Bn254Result<([u8; 4], Groth16Proof)> {
    if bytes.len() != GROTH16_PREFIXED_PROOF_BYTES_LEN {
        return Err(decode_err(
            "proof",
            format!("expected {GROTH16_PREFIXED_PROOF_BYTES_LEN} bytes, got {}", bytes.len()),
        ));
    }
    let mut selector = [0u8; 4];
    selector.copy_from_slice(&bytes[..4]);
    Ok((selector, decode_unprefixed(&bytes[4..])?))
}

fn decode_unprefixed(bytes: &[u8]) -> Bn254Result<Groth16Proof> {
    let mut off = 0usize;
    let a = g1_from_be_bytes(take(bytes, &mut off, G1_BYTES_LEN)?)?;
    let b = g2_from_be_bytes(take(bytes, &mut off, G2_BYTES_LEN)?)?;
    let c = g1_from_be_bytes(take(bytes, &mut off, G1_BYTES_LEN)?)?;
    Ok(Groth16Proof { a, b, c })
}

pub fn encode_proof(proof: &Groth16Proof) -> [u8; GROTH16_PROOF_BYTES_LEN] {
    let mut out = [0u8; GROTH16_PROOF_BYTES_LEN];
    out[..64].copy_from_slice(&g1_to_be_bytes(&proof.a));
    out[64..192].copy_from_slice(&g2_to_be_bytes(&proof.b));
    out[192..].copy_from_slice(&g1_to_be_bytes(&proof.c));
    out
}

/// Concatenated 32-byte big-endian scalars, each strictly below r.
pub fn decode_public_inputs(bytes: &[u8]) -> Bn254Result<Vec<Scalar>> {
    if bytes.len() % SCALAR_BYTES_LEN != 0 {
        return Err(decode_err("public inputs", "length not a multiple of 32"));
    }
    bytes
        .chunks_exact(SCALAR_BYTES_LEN)
        .map(|chunk| {
            let mut buf = [0u8; 32];
            buf.copy_from_slice(chunk);
            Scalar::from_be_bytes(&buf)
        })
        .collect()
}

pub fn encode_public_inputs(inputs: &[Scalar]) -> Vec<u8> {
    inputs.iter().flat_map(|s| s.to_be_bytes()).collect()
}

/// L = IC_0 + sum s_i * IC_{i+1}.
pub fn compute_linear_combination(vk: &VerificationKey, inputs: &[Scalar]) -> Bn254Result<G1Affine> {
    if inputs.len() != vk.num_public_inputs() {
        return Err(Bn254Error::InvalidInputLength {
            expected: vk.num_public_inputs(),
            got: inputs.len(),
        });
    }
    let (ic0, rest) = vk
        .ic
        .split_first()
        .ok_or_else(|| decode_err("vk", "ic must contain at least one point"))?;
    let acc = inputs
        .iter()
        .zip(rest.iter())
        .fold(G1Jacobian::from_affine(ic0), |acc, (s, base)| acc.add(&base.mul(s)));
    Ok(acc.to_affine())
}

/// `Ok(false)` for a well-formed proof that does not verify.
#[tracing::instrument(level = "debug", skip_all, fields(public_inputs = public_inputs.len()))]
pub fn verify(proof: &Groth16Proof, public_inputs: &[Scalar], vk: &VerificationKey) -> Bn254Result<bool> {
    verify_with_config(proof, public_inputs, vk, PairingConfig::global())
}

pub fn verify_with_config(
    proof: &Groth16Proof,
    public_inputs: &[Scalar],
    vk: &VerificationKey,
    cfg: &PairingConfig,
) -> Bn254Result<bool> {
    let l = compute_linear_combination(vk, public_inputs)?;
    let pairs = [
        (proof.b, proof.a),
        (vk.delta_neg_g2, proof.c),
        (vk.beta_neg_g2, vk.alpha_g1),
        (vk.gamma_neg_g2, l),
    ];
    let ok = pairing_product_is_one_with_config(&pairs, cfg);
    tracing::debug!(ok, "groth16 pairing check");
    Ok(ok)
}

/// Like `verify`, but a failed pairing check is `Err(VerificationFailed)`.
pub fn ensure_valid(proof: &Groth16Proof, public_inputs: &[Scalar], vk: &VerificationKey) -> Bn254Result<()> {
    if verify(proof, public_inputs, vk)? {
        Ok(())
    } else {
        Err(Bn254Error::VerificationFailed)
    }
}

/// Decode then verify; all shape errors surface before any pairing work.
pub fn verify_bytes(vk: &VerificationKey, proof_bytes: &[u8], input_bytes: &[u8]) -> Bn254Result<bool> {
    let proof = decode_proof(proof_bytes).inspect_err(|err| {
        tracing::debug!(error = %err, "proof rejected at decode");
    })?;
    let inputs = decode_public_inputs(input_bytes)?;
    verify(&proof, &inputs, vk)
}

/// Independent verifications on the rayon pool; results keep input order.
pub fn verify_batch(vk: &VerificationKey, items: &[(Groth16Proof, Vec<Scalar>)]) -> Vec<Bn254Result<bool>> {
    items
        .par_iter()
        .map(|(proof, inputs)| verify(proof, inputs, vk))
        .collect()
}

fn take<'a>(bytes: &'a [u8], off: &mut usize, len: usize) -> Bn254Result<&'a [u8]> {
    let s = bytes
        .get(*off..*off + len)
        .ok_or_else(|| decode_err("bytes", "unexpected EOF"))?;
    *off += len;
    Ok(s)
}

fn read_u32_be(bytes: &[u8], off: &mut usize) -> Bn254Result<u32> {
    let s = take(bytes, off, 4)?;
    Ok(u32::from_be_bytes([s[0], s[1], s[2], s[3]]))
}

fn to_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

fn parse_hex(context: &str, s: &str) -> Bn254Result<Vec<u8>> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    hex::decode(s).map_err(|e| decode_err(context, e))
}
