// ─────────────────────────────────────────────────────────────────────
// SCPN Beam Stripping — Species
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Projectile species table: rest masses and charge states.

use crate::constants::{M_ELECTRON_MEV, M_HMINUS_MEV, M_HYDROGEN_MEV, M_MUON_MEV, M_PROTON_MEV};
use crate::error::{StripError, StripResult};
use serde::{Deserialize, Serialize};

/// Supported beam particles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    #[serde(rename = "H-")]
    HMinus,
    #[serde(rename = "H")]
    HNeutral,
    #[serde(rename = "H+")]
    Proton,
    #[serde(rename = "mu-")]
    MuMinus,
    #[serde(rename = "e-")]
    Electron,
}

impl Species {
    /// Look up a species by its beamline name.
    pub fn from_name(name: &str) -> StripResult<Self> {
        match name {
            "H-" => Ok(Species::HMinus),
            "H" | "H0" => Ok(Species::HNeutral),
            "H+" | "p" => Ok(Species::Proton),
            "mu-" => Ok(Species::MuMinus),
            "e-" => Ok(Species::Electron),
            other => Err(StripError::UnknownSpecies(other.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Species::HMinus => "H-",
            Species::HNeutral => "H",
            Species::Proton => "H+",
            Species::MuMinus => "mu-",
            Species::Electron => "e-",
        }
    }

    /// Rest energy [MeV].
    pub fn mass_mev(&self) -> f64 {
        match self {
            Species::HMinus => M_HMINUS_MEV,
            Species::HNeutral => M_HYDROGEN_MEV,
            Species::Proton => M_PROTON_MEV,
            Species::MuMinus => M_MUON_MEV,
            Species::Electron => M_ELECTRON_MEV,
        }
    }

    /// Charge state [e].
    pub fn charge(&self) -> f64 {
        match self {
            Species::HMinus | Species::MuMinus | Species::Electron => -1.0,
            Species::HNeutral => 0.0,
            Species::Proton => 1.0,
        }
    }

    /// Core charge magnitude entering the Bethe z² factor.
    ///
    /// A fast H⁰ or H⁻ stops like a bare proton: the loosely bound
    /// electrons do not screen the nucleus at beam velocities.
    pub fn stopping_charge(&self) -> f64 {
        1.0
    }
}
