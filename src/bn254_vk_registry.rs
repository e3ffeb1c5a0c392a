//! Verification keys addressed by program hash.
//!
//! Program proofs carry two public inputs: the program (vkey) hash and the hash of the
//! program's public values, both reduced mod r.

use std::collections::HashMap;
use std::sync::Arc;

use crate::bn254_curve::{g1_from_be_bytes, g2_from_be_bytes};
use crate::bn254_error::{decode_err, Bn254Error, Bn254Result};
use crate::bn254_groth16::{decode_proof, verify, Groth16Proof, VerificationKey};
use crate::bn254_scalar::Scalar;
use crate::bn254_vk_constants::{
    DEFAULT_PROGRAM_HASH_HEX, DEFAULT_VK_ALPHA_G1_HEX, DEFAULT_VK_BETA_NEG_G2_HEX,
    DEFAULT_VK_DELTA_NEG_G2_HEX, DEFAULT_VK_GAMMA_NEG_G2_HEX, DEFAULT_VK_IC_HEX,
};

pub type ProgramHash = [u8; 32];

#[derive(Clone, Debug, Default)]
pub struct VkRegistry {
    keys: HashMap<ProgramHash, Arc<VerificationKey>>,
}

impl VkRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding only the built-in key.
    pub fn with_default() -> Bn254Result<Self> {
        let (hash, vk) = default_program_vk()?;
        let mut registry = Self::new();
        registry.register(hash, vk);
        Ok(registry)
    }

    /// First registration wins; returns false if the hash was already present.
    pub fn register(&mut self, program_hash: ProgramHash, vk: VerificationKey) -> bool {
        if self.keys.contains_key(&program_hash) {
            tracing::debug!(program = %hex::encode(program_hash), "vk already registered, keeping existing");
            return false;
        }
        tracing::debug!(
            program = %hex::encode(program_hash),
            public_inputs = vk.num_public_inputs(),
            "vk registered"
        );
        self.keys.insert(program_hash, Arc::new(vk));
        true
    }

    pub fn get(&self, program_hash: &ProgramHash) -> Option<Arc<VerificationKey>> {
        self.keys.get(program_hash).cloned()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Decode a 256- or 260-byte proof and check it against the key for `program_hash`.
    pub fn verify(
        &self,
        program_hash: &ProgramHash,
        proof_bytes: &[u8],
        public_hash: &[u8; 32],
    ) -> Bn254Result<bool> {
        let Some(vk) = self.get(program_hash) else {
            tracing::warn!(program = %hex::encode(program_hash), "no vk for program");
            return Err(Bn254Error::UnknownProgram(hex::encode(program_hash)));
        };
        let proof = decode_proof(proof_bytes)?;
        verify_program_proof(&vk, program_hash, &proof, public_hash)
    }
}

/// Inputs are [program_hash mod r, public_hash mod r]; the key must expect exactly two.
pub fn verify_program_proof(
    vk: &VerificationKey,
    program_hash: &ProgramHash,
    proof: &Groth16Proof,
    public_hash: &[u8; 32],
) -> Bn254Result<bool> {
    if vk.num_public_inputs() != 2 {
        return Err(Bn254Error::InvalidInputLength { expected: 2, got: vk.num_public_inputs() });
    }
    let inputs = [
        Scalar::from_be_bytes_reduced(program_hash),
        Scalar::from_be_bytes_reduced(public_hash),
    ];
    verify(proof, &inputs, vk)
}

/// The built-in key and the program hash it is registered under.
pub fn default_program_vk() -> Bn254Result<(ProgramHash, VerificationKey)> {
    let mut hash = [0u8; 32];
    hex::decode_to_slice(DEFAULT_PROGRAM_HASH_HEX, &mut hash)
        .map_err(|e| decode_err("program hash", e))?;
    let ic = DEFAULT_VK_IC_HEX
        .iter()
        .map(|h| g1_from_be_bytes(&from_hex("vk ic", h)?))
        .collect::<Bn254Result<Vec<_>>>()?;
    let vk = VerificationKey::from_negated(
        g1_from_be_bytes(&from_hex("vk alpha", DEFAULT_VK_ALPHA_G1_HEX)?)?,
        g2_from_be_bytes(&from_hex("vk beta", DEFAULT_VK_BETA_NEG_G2_HEX)?)?,
        g2_from_be_bytes(&from_hex("vk gamma", DEFAULT_VK_GAMMA_NEG_G2_HEX)?)?,
        g2_from_be_bytes(&from_hex("vk delta", DEFAULT_VK_DELTA_NEG_G2_HEX)?)?,
        ic,
    )?;
    Ok((hash, vk))
}

fn from_hex(context: &str, s: &str) -> Bn254Result<Vec<u8>> {
    hex::decode(s).map_err(|e| decode_err(context, e))
}
