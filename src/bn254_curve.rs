//! Wire encodings for G1 and G2 points.
//!
//! G1 is x || y (32-byte big-endian each). G2 defaults to the EVM precompile layout
//! x_im || x_re || y_im || y_re; the raw layout x_re || x_im || y_re || y_im is
//! available for tooling that writes the real part first. All-zero bytes encode the
//! point at infinity.

use crate::bn254_error::{decode_err, point_err, Bn254Result};
use crate::bn254_field::Fp;
use crate::bn254_fp2::Fp2;
use crate::bn254_group::{G1Affine, G2Affine};

pub const FP_BYTES_LEN: usize = 32;
pub const G1_BYTES_LEN: usize = 64;
pub const G2_BYTES_LEN: usize = 128;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum G2Encoding {
    /// x_im || x_re || y_im || y_re
    Ethereum,
    /// x_re || x_im || y_re || y_im
    Raw,
}

fn fp_chunk(bytes: &[u8], index: usize) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&bytes[index * FP_BYTES_LEN..(index + 1) * FP_BYTES_LEN]);
    out
}

pub fn fp_from_be_bytes_strict(bytes: &[u8; 32], context: &str) -> Bn254Result<Fp> {
    Fp::from_be_bytes(bytes).ok_or_else(|| decode_err(context, "coordinate not canonical"))
}

/// Wire (imaginary, real) pair to Fp2.
pub fn fp2_from_wire(im: &[u8; 32], re: &[u8; 32]) -> Option<Fp2> {
    Some(Fp2::new(Fp::from_be_bytes(re)?, Fp::from_be_bytes(im)?))
}

/// Fp2 to the wire (imaginary, real) pair.
pub fn fp2_to_wire(x: &Fp2) -> ([u8; 32], [u8; 32]) {
    (x.c1.to_be_bytes(), x.c0.to_be_bytes())
}

pub fn g1_from_be_bytes(bytes: &[u8]) -> Bn254Result<G1Affine> {
    if bytes.len() != G1_BYTES_LEN {
        return Err(decode_err("g1", format!("expected {G1_BYTES_LEN} bytes, got {}", bytes.len())));
    }
    if bytes.iter().all(|b| *b == 0) {
        return Ok(G1Affine::identity());
    }
    let x = fp_from_be_bytes_strict(&fp_chunk(bytes, 0), "g1 x")?;
    let y = fp_from_be_bytes_strict(&fp_chunk(bytes, 1), "g1 y")?;
    let p = G1Affine::new(x, y);
    if !p.is_on_curve() {
        return Err(point_err("g1", "not on curve"));
    }
    Ok(p)
}

pub fn g1_to_be_bytes(p: &G1Affine) -> [u8; G1_BYTES_LEN] {
    let mut out = [0u8; G1_BYTES_LEN];
    if p.infinity {
        return out;
    }
    out[..32].copy_from_slice(&p.x.to_be_bytes());
    out[32..].copy_from_slice(&p.y.to_be_bytes());
    out
}

/// EVM layout, with on-curve and subgroup checks.
pub fn g2_from_be_bytes(bytes: &[u8]) -> Bn254Result<G2Affine> {
    g2_from_be_bytes_with(bytes, G2Encoding::Ethereum)
}

pub fn g2_from_be_bytes_raw(bytes: &[u8]) -> Bn254Result<G2Affine> {
    g2_from_be_bytes_with(bytes, G2Encoding::Raw)
}

pub fn g2_from_be_bytes_with(bytes: &[u8], encoding: G2Encoding) -> Bn254Result<G2Affine> {
    if bytes.len() != G2_BYTES_LEN {
        return Err(decode_err("g2", format!("expected {G2_BYTES_LEN} bytes, got {}", bytes.len())));
    }
    if bytes.iter().all(|b| *b == 0) {
        return Ok(G2Affine::identity());
    }
    let x = g2_coordinate(bytes, 0, encoding, "g2 x")?;
    let y = g2_coordinate(bytes, 2, encoding, "g2 y")?;
    let q = G2Affine::new(x, y);
    if !q.is_on_curve() {
        return Err(point_err("g2", "not on curve"));
    }
    if !q.is_in_subgroup() {
        return Err(point_err("g2", "not in subgroup"));
    }
    Ok(q)
}

/// One Fp2 coordinate starting at 32-byte chunk `index`.
fn g2_coordinate(bytes: &[u8], index: usize, encoding: G2Encoding, context: &str) -> Bn254Result<Fp2> {
    let (first, second) = (fp_chunk(bytes, index), fp_chunk(bytes, index + 1));
    let (im, re) = match encoding {
        G2Encoding::Ethereum => (first, second),
        G2Encoding::Raw => (second, first),
    };
    fp2_from_wire(&im, &re).ok_or_else(|| decode_err(context, "coordinate not canonical"))
}

pub fn g2_to_be_bytes(q: &G2Affine) -> [u8; G2_BYTES_LEN] {
    g2_to_be_bytes_with(q, G2Encoding::Ethereum)
}

pub fn g2_to_be_bytes_raw(q: &G2Affine) -> [u8; G2_BYTES_LEN] {
    g2_to_be_bytes_with(q, G2Encoding::Raw)
}

pub fn g2_to_be_bytes_with(q: &G2Affine, encoding: G2Encoding) -> [u8; G2_BYTES_LEN] {
    let mut out = [0u8; G2_BYTES_LEN];
    if q.infinity {
        return out;
    }
    let (x_im, x_re) = fp2_to_wire(&q.x);
    let (y_im, y_re) = fp2_to_wire(&q.y);
    let chunks = match encoding {
        G2Encoding::Ethereum => [x_im, x_re, y_im, y_re],
        G2Encoding::Raw => [x_re, x_im, y_re, y_im],
    };
    for (dst, src) in out.chunks_exact_mut(FP_BYTES_LEN).zip(chunks.iter()) {
        dst.copy_from_slice(src);
    }
    out
}
