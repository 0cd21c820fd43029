// ─────────────────────────────────────────────────────────────────────
// SCPN Beam Stripping — Bisect
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Bounded bisection for monotone curves.
//!
//! Inverts "probability of stripping over thickness d" to answer the foil
//! design question "what thickness strips X% of the beam". The bracket is
//! precondition-checked up front and the iteration count is bounded, so the
//! search terminates even on a malformed curve.

use stripping_types::error::{StripError, StripResult};

/// Extra steps beyond the width-derived bound; covers the value-space
/// stopping rule needing a few more halvings than the width alone implies.
const ITERATION_MARGIN: usize = 64;

/// Outcome of a bisection search.
#[derive(Debug, Clone, Copy)]
pub struct BisectionResult {
    /// Midpoint of the final bracket.
    pub x: f64,
    /// Mean of the two bracket-edge evaluations.
    pub value: f64,
    /// Bisection steps taken.
    pub iterations: usize,
}

/// Find `x` with `f(x) ≈ target` for a monotone non-decreasing `f`.
///
/// Preconditions: `lo < hi`, `tolerance > 0`, and the bracket straddles the
/// target, `f(lo) < target ≤ f(hi)`; otherwise `StripError::Bracket` or
/// `StripError::InvalidInput`. The search stops once the value spread
/// `f(hi) − f(lo)` drops to the tolerance and reports the midpoint of the
/// final bracket with the mean of its edge evaluations.
pub fn bisect_monotonic<F>(
    target: f64,
    tolerance: f64,
    lo: f64,
    hi: f64,
    mut f: F,
) -> StripResult<BisectionResult>
where
    F: FnMut(f64) -> StripResult<f64>,
{
    if !tolerance.is_finite() || tolerance <= 0.0 {
        return Err(StripError::InvalidInput(format!(
            "tolerance must be positive, got {tolerance}"
        )));
    }
    if !(lo.is_finite() && hi.is_finite() && lo < hi) {
        return Err(StripError::InvalidInput(format!(
            "bracket bounds must be finite with lo < hi, got [{lo}, {hi}]"
        )));
    }

    let mut f_lo = f(lo)?;
    let mut f_hi = f(hi)?;
    if !(f_lo < target && target <= f_hi) {
        return Err(StripError::Bracket {
            lo,
            hi,
            f_lo,
            f_hi,
            target,
        });
    }

    let max_iterations =
        (((hi - lo) / tolerance).log2().ceil().max(1.0)) as usize + ITERATION_MARGIN;

    let (mut lo, mut hi) = (lo, hi);
    let mut iterations = 0;
    while f_hi - f_lo > tolerance {
        if iterations >= max_iterations {
            return Err(StripError::NoConvergence {
                iterations,
                message: format!(
                    "bracket value spread {:e} still above tolerance {tolerance:e}",
                    f_hi - f_lo
                ),
            });
        }
        let mid = 0.5 * (lo + hi);
        let f_mid = f(mid)?;
        if f_mid < target {
            lo = mid;
            f_lo = f_mid;
        } else {
            hi = mid;
            f_hi = f_mid;
        }
        iterations += 1;
    }

    Ok(BisectionResult {
        x: 0.5 * (lo + hi),
        value: 0.5 * (f_lo + f_hi),
        iterations,
    })
}
