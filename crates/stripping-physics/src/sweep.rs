// ─────────────────────────────────────────────────────────────────────
// SCPN Beam Stripping — Sweep
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Grid evaluation helpers for plotting and report collaborators.
//!
//! Pure sweeps over kinetic energy or thickness; the first failing sample
//! aborts the sweep and surfaces its error.

use crate::material::Material;
use crate::particle::Particle;
use ndarray::Array1;
use stripping_types::error::{StripError, StripResult};
use stripping_types::species::Species;

/// Logarithmic kinetic-energy grid [MeV], `points_per_decade` samples per
/// decade from `e_min_mev` up to and including the last point ≤ `e_max_mev`.
pub fn log_energy_grid(
    e_min_mev: f64,
    e_max_mev: f64,
    points_per_decade: usize,
) -> StripResult<Array1<f64>> {
    if !(e_min_mev > 0.0 && e_max_mev > e_min_mev) {
        return Err(StripError::InvalidInput(format!(
            "energy grid needs 0 < e_min < e_max, got [{e_min_mev}, {e_max_mev}]"
        )));
    }
    if points_per_decade == 0 {
        return Err(StripError::InvalidInput(
            "points_per_decade must be at least 1".to_string(),
        ));
    }
    let step = 1.0 / points_per_decade as f64;
    let decades = (e_max_mev / e_min_mev).log10();
    let count = (decades * points_per_decade as f64).floor() as usize + 1;
    let values: Vec<f64> = (0..count)
        .map(|i| e_min_mev * 10f64.powf(i as f64 * step))
        .collect();
    Ok(Array1::from(values))
}

/// Stripping cross section [cm²] at each grid energy.
pub fn cross_section_sweep(
    material: &Material,
    species: Species,
    energies_mev: &Array1<f64>,
) -> StripResult<Array1<f64>> {
    let mut out = Array1::zeros(energies_mev.len());
    for (i, &energy) in energies_mev.iter().enumerate() {
        let ion = Particle::from_kinetic_energy(energy, species)?;
        out[i] = material.cross_section(&ion)?;
    }
    Ok(out)
}

/// Energy-loss rate [MeV/cm] at each grid energy; negative values.
pub fn energy_loss_sweep(
    material: &Material,
    species: Species,
    energies_mev: &Array1<f64>,
) -> StripResult<Array1<f64>> {
    let mut out = Array1::zeros(energies_mev.len());
    for (i, &energy) in energies_mev.iter().enumerate() {
        let ion = Particle::from_kinetic_energy(energy, species)?;
        out[i] = material.energy_loss_per_length(&ion)?;
    }
    Ok(out)
}

/// Stripping probability at each thickness [cm]; the beam-pipe lifetime
/// study sweeps this over a residual-gas pressure column. The surviving
/// beam fraction is the complement of each sample.
pub fn stripping_probability_sweep(
    material: &Material,
    particle: &Particle,
    thicknesses_cm: &Array1<f64>,
) -> StripResult<Array1<f64>> {
    let mut out = Array1::zeros(thicknesses_cm.len());
    for (i, &thickness) in thicknesses_cm.iter().enumerate() {
        out[i] = material.probability_of_interaction(particle, thickness)?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stripping_types::substance::StrippingModel;

    #[test]
    fn test_grid_spacing_and_bounds() {
        let grid = log_energy_grid(1e-3, 3.0, 4).unwrap();
        assert!((grid[0] - 1e-3).abs() < 1e-18);
        // Quarter-decade steps
        assert!((grid[1] / grid[0] - 10f64.powf(0.25)).abs() < 1e-12);
        assert!(*grid.last().unwrap() <= 3.0 * (1.0 + 1e-12));
        // 3.477 decades at 4/decade: 14 points
        assert_eq!(grid.len(), 14);
    }

    #[test]
    fn test_bad_grid_rejected() {
        assert!(log_energy_grid(0.0, 3.0, 4).is_err());
        assert!(log_energy_grid(3.0, 1.0, 4).is_err());
        assert!(log_energy_grid(1e-3, 3.0, 0).is_err());
    }

    #[test]
    fn test_cross_section_sweep_shape_and_sign() {
        let helium = Material::new("gaseous_helium", 10.0).unwrap();
        let grid = log_energy_grid(1e-3, 11.0, 4).unwrap();
        let sigmas = cross_section_sweep(&helium, Species::HMinus, &grid).unwrap();
        assert_eq!(sigmas.len(), grid.len());
        assert!(sigmas.iter().all(|&s| s > 0.0 && s.is_finite()));
        // Detachment falls towards high energy
        assert!(sigmas[0] > sigmas[sigmas.len() - 1]);
    }

    #[test]
    fn test_energy_loss_sweep_negative() {
        let carbon = Material::new("carbon", 10.0).unwrap();
        let grid = log_energy_grid(0.5, 30.0, 4).unwrap();
        let losses = energy_loss_sweep(&carbon, Species::HMinus, &grid).unwrap();
        assert!(losses.iter().all(|&d| d < 0.0 && d.is_finite()));
    }

    #[test]
    fn test_stripping_probability_sweep_monotone() {
        let mut nitrogen = Material::new("gaseous_nitrogen", 10.0).unwrap();
        nitrogen.set_model(StrippingModel::Nakai);
        let ion = Particle::from_kinetic_energy(3.0, Species::HMinus).unwrap();
        let thicknesses = Array1::from(vec![1e-6, 1e-4, 1e-2, 1.0]);
        let probs = stripping_probability_sweep(&nitrogen, &ion, &thicknesses).unwrap();
        for pair in probs.as_slice().unwrap().windows(2) {
            assert!(pair[1] >= pair[0], "{pair:?}");
        }
    }

    #[test]
    fn test_sweep_propagates_sample_failure() {
        let carbon = Material::new("carbon", 10.0).unwrap();
        let grid = log_energy_grid(1e-3, 3.0, 4).unwrap();
        // Carbon has no gas fit; a Nakai sweep must fail, not zero-fill.
        let mut foil = carbon;
        foil.set_model(StrippingModel::Nakai);
        let err = cross_section_sweep(&foil, Species::HMinus, &grid).unwrap_err();
        assert!(matches!(err, StripError::ModelUnavailable { .. }));
    }
}
