// ─────────────────────────────────────────────────────────────────────
// SCPN Beam Stripping — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Scenario configuration consumed by plotting and report collaborators.

use crate::species::Species;
use crate::substance::{StrippingModel, Substance};
use serde::{Deserialize, Serialize};

/// Top-level scenario: one beam, one target, sweep and solver knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub scenario_name: String,
    pub beam: BeamConfig,
    pub material: MaterialSpec,
    #[serde(default)]
    pub sweep: SweepConfig,
    #[serde(default)]
    pub solver: SolverSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeamConfig {
    pub species: Species,
    pub kinetic_energy_mev: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialSpec {
    pub substance: Substance,
    /// Gas pressure [mbar]; ignored for condensed targets.
    #[serde(default = "default_pressure")]
    pub pressure_mbar: f64,
    /// Cross-section parametrisation; absent keeps the per-phase default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<StrippingModel>,
}

/// Kinetic-energy sweep grid for cross-section and dE/dx curves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepConfig {
    #[serde(default = "default_e_min")]
    pub e_min_mev: f64,
    #[serde(default = "default_e_max")]
    pub e_max_mev: f64,
    #[serde(default = "default_points_per_decade")]
    pub points_per_decade: usize,
}

/// Thickness-inversion settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverSettings {
    #[serde(default = "default_target_fraction")]
    pub target_fraction: f64,
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

fn default_pressure() -> f64 {
    10.0
}
fn default_e_min() -> f64 {
    1e-3
}
fn default_e_max() -> f64 {
    30.0
}
fn default_points_per_decade() -> usize {
    4
}
fn default_target_fraction() -> f64 {
    0.999
}
fn default_tolerance() -> f64 {
    1e-5
}

impl Default for SweepConfig {
    fn default() -> Self {
        SweepConfig {
            e_min_mev: default_e_min(),
            e_max_mev: default_e_max(),
            points_per_decade: default_points_per_decade(),
        }
    }
}

impl Default for SolverSettings {
    fn default() -> Self {
        SolverSettings {
            target_fraction: default_target_fraction(),
            tolerance: default_tolerance(),
        }
    }
}

impl ScenarioConfig {
    /// Load a scenario from a JSON file.
    pub fn from_file(path: &str) -> crate::error::StripResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }
}
