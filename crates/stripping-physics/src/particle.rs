// ─────────────────────────────────────────────────────────────────────
// SCPN Beam Stripping — Particle
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Relativistic kinematic state of a single beam particle.

use stripping_types::error::{StripError, StripResult};
use stripping_types::species::Species;

/// Immutable projectile state.
///
/// All derived quantities are fixed at construction from the exact
/// identities E_tot² = (pc)² + (mc²)², γ = E_tot/mc², β = pc/E_tot, so the
/// accessors are always mutually consistent to floating-point precision.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    species: Species,
    kinetic_energy: f64,
    momentum: f64,
    beta: f64,
    gamma: f64,
}

impl Particle {
    /// Build from kinetic energy [MeV].
    pub fn from_kinetic_energy(t_mev: f64, species: Species) -> StripResult<Self> {
        if !t_mev.is_finite() || t_mev <= 0.0 {
            return Err(StripError::InvalidInput(format!(
                "kinetic energy must be positive and finite, got {t_mev} MeV"
            )));
        }
        let m = species.mass_mev();
        let e_total = m + t_mev;
        // Factorized form of sqrt(E² − m²); no cancellation at low T.
        let momentum = (t_mev * (t_mev + 2.0 * m)).sqrt();
        Ok(Particle {
            species,
            kinetic_energy: t_mev,
            momentum,
            beta: momentum / e_total,
            gamma: e_total / m,
        })
    }

    /// Build from total momentum [MeV/c].
    pub fn from_momentum(p_mev_c: f64, species: Species) -> StripResult<Self> {
        if !p_mev_c.is_finite() || p_mev_c <= 0.0 {
            return Err(StripError::InvalidInput(format!(
                "momentum must be positive and finite, got {p_mev_c} MeV/c"
            )));
        }
        let m = species.mass_mev();
        let e_total = (p_mev_c * p_mev_c + m * m).sqrt();
        // p²/(E + m) equals E − m without cancellation at low p.
        let kinetic_energy = p_mev_c * p_mev_c / (e_total + m);
        Ok(Particle {
            species,
            kinetic_energy,
            momentum: p_mev_c,
            beta: p_mev_c / e_total,
            gamma: e_total / m,
        })
    }

    /// Name-string factory for external callers.
    pub fn from_kinetic_energy_named(t_mev: f64, species_name: &str) -> StripResult<Self> {
        Self::from_kinetic_energy(t_mev, Species::from_name(species_name)?)
    }

    /// Name-string factory for external callers.
    pub fn from_momentum_named(p_mev_c: f64, species_name: &str) -> StripResult<Self> {
        Self::from_momentum(p_mev_c, Species::from_name(species_name)?)
    }

    pub fn species(&self) -> Species {
        self.species
    }

    /// Kinetic energy [MeV].
    pub fn kinetic_energy(&self) -> f64 {
        self.kinetic_energy
    }

    /// Total momentum [MeV/c].
    pub fn momentum(&self) -> f64 {
        self.momentum
    }

    /// Velocity fraction of light speed.
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Lorentz factor.
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Total energy [MeV].
    pub fn total_energy(&self) -> f64 {
        self.kinetic_energy + self.species.mass_mev()
    }

    /// Rest energy [MeV].
    pub fn mass_mev(&self) -> f64 {
        self.species.mass_mev()
    }

    /// Charge state [e].
    pub fn charge(&self) -> f64 {
        self.species.charge()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinetic_energy_momentum_round_trip() {
        for t in [1e-3, 0.181, 3.0, 181.0, 3000.0] {
            let a = Particle::from_kinetic_energy(t, Species::HMinus).unwrap();
            let b = Particle::from_momentum(a.momentum(), Species::HMinus).unwrap();
            assert!(
                (b.kinetic_energy() / t - 1.0).abs() < 1e-10,
                "round trip at {t} MeV gave {}",
                b.kinetic_energy()
            );
        }
    }

    #[test]
    fn test_muon_reference_kinematics() {
        // p = 152.7 MeV/c muon: beta*gamma = 1.445, beta = 0.822
        let muon = Particle::from_momentum(152.7, Species::MuMinus).unwrap();
        assert!((muon.beta() - 0.8223).abs() < 1e-3, "beta = {}", muon.beta());
        assert!(
            (muon.gamma() - 1.7574).abs() < 1e-3,
            "gamma = {}",
            muon.gamma()
        );
        assert!(
            (muon.kinetic_energy() - 80.0).abs() < 0.1,
            "T = {}",
            muon.kinetic_energy()
        );
    }

    #[test]
    fn test_consistency_identity() {
        let p = Particle::from_kinetic_energy(3.0, Species::HNeutral).unwrap();
        let e_tot = p.total_energy();
        // E² = p² + m²
        let lhs = e_tot * e_tot;
        let rhs = p.momentum() * p.momentum() + p.mass_mev() * p.mass_mev();
        assert!((lhs / rhs - 1.0).abs() < 1e-12);
        assert!((p.beta() - p.momentum() / e_tot).abs() < 1e-15);
        assert!((p.gamma() - e_tot / p.mass_mev()).abs() < 1e-12);
    }

    #[test]
    fn test_nonpositive_inputs_rejected() {
        assert!(matches!(
            Particle::from_kinetic_energy(0.0, Species::HMinus).unwrap_err(),
            StripError::InvalidInput(_)
        ));
        assert!(matches!(
            Particle::from_kinetic_energy(-3.0, Species::HMinus).unwrap_err(),
            StripError::InvalidInput(_)
        ));
        assert!(matches!(
            Particle::from_momentum(-152.7, Species::MuMinus).unwrap_err(),
            StripError::InvalidInput(_)
        ));
    }

    #[test]
    fn test_unknown_species_name_rejected() {
        let err = Particle::from_kinetic_energy_named(3.0, "D-").unwrap_err();
        assert!(matches!(err, StripError::UnknownSpecies(_)));
    }

    #[test]
    fn test_beta_bounded() {
        let slow = Particle::from_kinetic_energy(1e-6, Species::Proton).unwrap();
        let fast = Particle::from_kinetic_energy(1e6, Species::Proton).unwrap();
        assert!(slow.beta() > 0.0 && slow.beta() < 1.0);
        assert!(fast.beta() > 0.0 && fast.beta() < 1.0);
        assert!(fast.beta() > slow.beta());
    }
}
