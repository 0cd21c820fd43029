// ─────────────────────────────────────────────────────────────────────
// SCPN Beam Stripping — Error
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

/// Failure taxonomy for the stripping engine.
///
/// Every failure is deterministic in its inputs, so nothing here is
/// retryable and nothing is ever defaulted to zero.
#[derive(Error, Debug)]
pub enum StripError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown particle species: {0:?}")]
    UnknownSpecies(String),

    #[error("Unknown substance: {0:?}")]
    UnknownSubstance(String),

    #[error("{model} cross-section fit has no coefficients for {substance}")]
    ModelUnavailable {
        substance: &'static str,
        model: &'static str,
    },

    #[error(
        "Bracket [{lo:e}, {hi:e}] with values [{f_lo:e}, {f_hi:e}] does not straddle target {target}"
    )]
    Bracket {
        lo: f64,
        hi: f64,
        f_lo: f64,
        f_hi: f64,
        target: f64,
    },

    #[error("Numeric domain error: {0}")]
    NumericDomain(String),

    #[error("Solver failed to converge after {iterations} iterations: {message}")]
    NoConvergence { iterations: usize, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type StripResult<T> = Result<T, StripError>;
