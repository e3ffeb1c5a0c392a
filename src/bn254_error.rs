//! Typed errors for decoding and verification.

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Bn254Error {
    /// Wrong byte length, or a coordinate/scalar that is not a canonical field element.
    #[error("decode: {0}")]
    Decode(String),

    /// Coordinates off the curve, or a G2 point outside the order-r subgroup.
    #[error("invalid point: {0}")]
    InvalidPoint(String),

    #[error("public input length mismatch: expected {expected}, got {got}")]
    InvalidInputLength { expected: usize, got: usize },

    /// Well-formed inputs whose pairing product is not one.
    #[error("verification failed: pairing product is not one")]
    VerificationFailed,

    #[error("no verification key registered for program 0x{0}")]
    UnknownProgram(String),
}

pub type Bn254Result<T> = Result<T, Bn254Error>;

pub fn decode_err(context: &str, reason: impl std::fmt::Display) -> Bn254Error {
    Bn254Error::Decode(format!("{context}: {reason}"))
}

pub fn point_err(context: &str, reason: impl std::fmt::Display) -> Bn254Error {
    Bn254Error::InvalidPoint(format!("{context}: {reason}"))
}
