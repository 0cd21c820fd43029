// ─────────────────────────────────────────────────────────────────────
// SCPN Beam Stripping — Material
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! A stripping target: substance bound to a macroscopic scale parameter.
//!
//! Number density and bulk density are fully derived at construction; the
//! only mutable state is the cross-section model selector.

use crate::cross_section::{self, ChargeTransition};
use crate::energy_loss;
use crate::particle::Particle;
use stripping_math::bisect::bisect_monotonic;
use stripping_types::error::{StripError, StripResult};
use stripping_types::substance::{Phase, StrippingModel, Substance, SubstanceParams};

/// Default bisection bracket for thickness inversion [cm]. Wide enough to
/// cover both sub-µm foils and metre-scale residual-gas columns.
const BRACKET_LO_CM: f64 = 1e-16;
const BRACKET_HI_CM: f64 = 1.0;

#[derive(Debug, Clone)]
pub struct Material {
    substance: Substance,
    scale: f64,
    density: f64,
    number_density: f64,
    model: StrippingModel,
}

impl Material {
    /// Bind a substance name to a macroscopic scale parameter.
    ///
    /// `scale` is the gas pressure [mbar]; condensed targets take their
    /// tabulated density and ignore it.
    pub fn new(name: &str, scale: f64) -> StripResult<Self> {
        Self::from_substance(Substance::from_name(name)?, scale)
    }

    pub fn from_substance(substance: Substance, scale: f64) -> StripResult<Self> {
        let params = substance.params();
        if matches!(params.phase, Phase::Gas) && (!scale.is_finite() || scale <= 0.0) {
            return Err(StripError::InvalidInput(format!(
                "gas pressure must be positive and finite, got {scale} mbar"
            )));
        }
        Ok(Material {
            substance,
            scale,
            density: params.density(scale),
            number_density: params.number_density(scale),
            model: substance.default_model(),
        })
    }

    pub fn substance(&self) -> Substance {
        self.substance
    }

    pub fn name(&self) -> &'static str {
        self.substance.name()
    }

    pub fn params(&self) -> &'static SubstanceParams {
        self.substance.params()
    }

    /// Macroscopic scale parameter given at construction.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Bulk density [g/cm³].
    pub fn density(&self) -> f64 {
        self.density
    }

    /// Target molecules per cm³.
    pub fn number_density(&self) -> f64 {
        self.number_density
    }

    pub fn model(&self) -> StrippingModel {
        self.model
    }

    /// Select the cross-section parametrisation for subsequent queries.
    /// Not safe to race on a shared instance; give each worker its own.
    pub fn set_model(&mut self, model: StrippingModel) {
        self.model = model;
    }

    /// Stripping cross section [cm²] for the transition implied by the
    /// projectile's charge state (−1 tests σ₋₁₀, 0 tests σ₀₁).
    pub fn cross_section(&self, particle: &Particle) -> StripResult<f64> {
        let transition = ChargeTransition::for_charge(particle.charge())?;
        cross_section::cross_section(particle, self.substance, self.model, transition)
    }

    /// Mean free path [cm] between charge-changing interactions.
    pub fn mean_free_path(&self, particle: &Particle) -> StripResult<f64> {
        let sigma = self.cross_section(particle)?;
        let lambda = 1.0 / (self.number_density * sigma);
        if !lambda.is_finite() {
            return Err(StripError::NumericDomain(format!(
                "mean free path evaluated to {lambda} cm"
            )));
        }
        Ok(lambda)
    }

    /// Probability that the charge-changing interaction occurs over
    /// `thickness_cm`, treating it as a Poisson process:
    /// P = 1 − exp(−n·σ·dx).
    pub fn probability_of_interaction(
        &self,
        particle: &Particle,
        thickness_cm: f64,
    ) -> StripResult<f64> {
        if !thickness_cm.is_finite() || thickness_cm < 0.0 {
            return Err(StripError::InvalidInput(format!(
                "thickness must be non-negative, got {thickness_cm} cm"
            )));
        }
        let sigma = self.cross_section(particle)?;
        Ok(1.0 - (-self.number_density * sigma * thickness_cm).exp())
    }

    /// Energy-loss rate [MeV/cm]; negative.
    pub fn energy_loss_per_length(&self, particle: &Particle) -> StripResult<f64> {
        energy_loss::energy_loss_per_length(particle, self.substance.params(), self.number_density)
    }

    /// Kinetic-energy change [MeV] over `thickness_cm`; no straggling.
    pub fn energy_loss_over_thickness(
        &self,
        particle: &Particle,
        thickness_cm: f64,
    ) -> StripResult<f64> {
        if !thickness_cm.is_finite() || thickness_cm < 0.0 {
            return Err(StripError::InvalidInput(format!(
                "thickness must be non-negative, got {thickness_cm} cm"
            )));
        }
        Ok(self.energy_loss_per_length(particle)? * thickness_cm)
    }

    /// Thickness [cm] at which `target_fraction` of the beam has undergone
    /// the charge-changing transition, with the fraction actually achieved.
    ///
    /// Bisection over [1e-16, 1] cm; a target the material cannot reach
    /// inside that bracket surfaces as `StripError::Bracket`.
    pub fn thickness_for_fraction(
        &self,
        particle: &Particle,
        target_fraction: f64,
        tolerance: f64,
    ) -> StripResult<(f64, f64)> {
        if !target_fraction.is_finite() || target_fraction <= 0.0 || target_fraction >= 1.0 {
            return Err(StripError::InvalidInput(format!(
                "target fraction must lie in (0, 1), got {target_fraction}"
            )));
        }
        let result = bisect_monotonic(target_fraction, tolerance, BRACKET_LO_CM, BRACKET_HI_CM, |dx| {
            self.probability_of_interaction(particle, dx)
        })?;
        Ok((result.x, result.value))
    }
}
