// ─────────────────────────────────────────────────────────────────────
// SCPN Beam Stripping — Energy Loss
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Bethe mean stopping power.
//!
//! Density and shell corrections are omitted; for βγ ≲ 10 they shift the
//! PDG liquid-hydrogen muon reference values by well under a percent.

use crate::particle::Particle;
use stripping_types::constants::{AVOGADRO, K_BETHE, M_ELECTRON_MEV};
use stripping_types::error::{StripError, StripResult};
use stripping_types::substance::SubstanceParams;

/// Kinetic-energy loss rate [MeV/cm]; negative, the projectile slows down.
///
/// dE/dx = −(K/N_A)·n_e·z²/β² · [½·ln(2 m_e c² β²γ² T_max / I²) − β²]
/// with n_e the electron density and T_max the maximum energy transfer to
/// one electron. Linear in the target number density at fixed velocity.
pub fn energy_loss_per_length(
    particle: &Particle,
    params: &SubstanceParams,
    number_density: f64,
) -> StripResult<f64> {
    let beta = particle.beta();
    if !beta.is_finite() || beta <= 0.0 || beta >= 1.0 {
        return Err(StripError::InvalidInput(format!(
            "velocity fraction must lie in (0, 1), got {beta}"
        )));
    }
    if !number_density.is_finite() || number_density <= 0.0 {
        return Err(StripError::InvalidInput(format!(
            "number density must be positive, got {number_density} cm^-3"
        )));
    }
    // The closed-form T_max below assumes a projectile much heavier than
    // the electron; electron projectiles need the Møller closure instead.
    let mass_ratio = M_ELECTRON_MEV / particle.mass_mev();
    if mass_ratio > 0.1 {
        return Err(StripError::NumericDomain(format!(
            "stopping power undefined for projectile of mass {} MeV (too close to m_e)",
            particle.mass_mev()
        )));
    }

    let gamma = particle.gamma();
    let beta2 = beta * beta;
    let beta2_gamma2 = beta2 * gamma * gamma;
    let t_max = 2.0 * M_ELECTRON_MEV * beta2_gamma2
        / (1.0 + 2.0 * gamma * mass_ratio + mass_ratio * mass_ratio);

    let i_mev = params.mean_excitation_ev * 1e-6;
    let electron_density = number_density * params.electrons_per_molecule;
    let z2 = particle.species().stopping_charge().powi(2);
    let coupling = K_BETHE / AVOGADRO * electron_density * z2 / beta2;
    let log_term = (2.0 * M_ELECTRON_MEV * beta2_gamma2 * t_max / (i_mev * i_mev)).ln();

    // Below ~tens of keV the bracket goes negative and the formula would
    // report energy gain; that is outside the Bethe validity range.
    let bracket = 0.5 * log_term - beta2;
    if bracket <= 0.0 {
        return Err(StripError::NumericDomain(format!(
            "Bethe bracket {bracket} non-positive at beta = {beta}; \
             projectile below the stopping-power validity range"
        )));
    }

    let dedx = -coupling * bracket;
    if !dedx.is_finite() {
        return Err(StripError::NumericDomain(format!(
            "stopping power evaluated to {dedx} at beta = {beta}"
        )));
    }
    Ok(dedx)
}
