// ─────────────────────────────────────────────────────────────────────
// SCPN Beam Stripping — Substance
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Target substance table: phases, densities and atomic parameters.

use crate::constants::{AVOGADRO, GAS_TEMPERATURE_K, K_BOLTZMANN};
use crate::error::{StripError, StripResult};
use serde::{Deserialize, Serialize};

/// Supported stripping targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Substance {
    GaseousHydrogen,
    GaseousHelium,
    GaseousNitrogen,
    CarbonDioxide,
    Carbon,
    Aluminium,
    LiquidHydrogen,
}

/// Aggregate state of a target; controls how the macroscopic scale
/// parameter maps to number density.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// Ideal gas; number density follows from the pressure parameter.
    Gas,
    /// Condensed target with a fixed reference density [g/cm³].
    Condensed { density: f64 },
}

/// Selector for the stripping cross-section parametrisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrippingModel {
    /// Per-gas empirical fit (Nakai-Shirai-Tabata form); gaseous targets.
    Nakai,
    /// Atomic-number scaling (Saha et al. form); solid and heavy targets.
    Saha,
}

impl StrippingModel {
    pub fn name(&self) -> &'static str {
        match self {
            StrippingModel::Nakai => "nakai",
            StrippingModel::Saha => "saha",
        }
    }
}

/// Physical parameters of one target substance.
#[derive(Debug, Clone, Copy)]
pub struct SubstanceParams {
    pub name: &'static str,
    pub phase: Phase,
    /// Molar mass of one target molecule [g/mol].
    pub molar_mass: f64,
    /// Electrons per target molecule (drives the stopping power).
    pub electrons_per_molecule: f64,
    /// Representative atomic number (Z-weighted mean for compounds).
    pub z_atomic: f64,
    /// Mean excitation energy I [eV].
    pub mean_excitation_ev: f64,
}

const GASEOUS_HYDROGEN: SubstanceParams = SubstanceParams {
    name: "gaseous_hydrogen",
    phase: Phase::Gas,
    molar_mass: 2.016,
    electrons_per_molecule: 2.0,
    z_atomic: 1.0,
    mean_excitation_ev: 19.2,
};

const GASEOUS_HELIUM: SubstanceParams = SubstanceParams {
    name: "gaseous_helium",
    phase: Phase::Gas,
    molar_mass: 4.0026,
    electrons_per_molecule: 2.0,
    z_atomic: 2.0,
    mean_excitation_ev: 41.8,
};

const GASEOUS_NITROGEN: SubstanceParams = SubstanceParams {
    name: "gaseous_nitrogen",
    phase: Phase::Gas,
    molar_mass: 28.014,
    electrons_per_molecule: 14.0,
    z_atomic: 7.0,
    mean_excitation_ev: 82.0,
};

const CARBON_DIOXIDE: SubstanceParams = SubstanceParams {
    name: "carbon_dioxide",
    phase: Phase::Gas,
    molar_mass: 44.009,
    electrons_per_molecule: 22.0,
    z_atomic: 7.33,
    mean_excitation_ev: 85.0,
};

const CARBON: SubstanceParams = SubstanceParams {
    name: "carbon",
    phase: Phase::Condensed { density: 2.0 },
    molar_mass: 12.011,
    electrons_per_molecule: 6.0,
    z_atomic: 6.0,
    mean_excitation_ev: 78.0,
};

const ALUMINIUM: SubstanceParams = SubstanceParams {
    name: "aluminium",
    phase: Phase::Condensed { density: 2.699 },
    molar_mass: 26.982,
    electrons_per_molecule: 13.0,
    z_atomic: 13.0,
    mean_excitation_ev: 166.0,
};

const LIQUID_HYDROGEN: SubstanceParams = SubstanceParams {
    name: "liquid_hydrogen",
    phase: Phase::Condensed { density: 0.0708 },
    molar_mass: 2.016,
    electrons_per_molecule: 2.0,
    z_atomic: 1.0,
    mean_excitation_ev: 21.8,
};

impl Substance {
    /// Look up a substance by its snake_case table name.
    pub fn from_name(name: &str) -> StripResult<Self> {
        match name {
            "gaseous_hydrogen" => Ok(Substance::GaseousHydrogen),
            "gaseous_helium" => Ok(Substance::GaseousHelium),
            "gaseous_nitrogen" => Ok(Substance::GaseousNitrogen),
            "carbon_dioxide" => Ok(Substance::CarbonDioxide),
            "carbon" => Ok(Substance::Carbon),
            "aluminium" => Ok(Substance::Aluminium),
            "liquid_hydrogen" => Ok(Substance::LiquidHydrogen),
            other => Err(StripError::UnknownSubstance(other.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        self.params().name
    }

    pub fn params(&self) -> &'static SubstanceParams {
        match self {
            Substance::GaseousHydrogen => &GASEOUS_HYDROGEN,
            Substance::GaseousHelium => &GASEOUS_HELIUM,
            Substance::GaseousNitrogen => &GASEOUS_NITROGEN,
            Substance::CarbonDioxide => &CARBON_DIOXIDE,
            Substance::Carbon => &CARBON,
            Substance::Aluminium => &ALUMINIUM,
            Substance::LiquidHydrogen => &LIQUID_HYDROGEN,
        }
    }

    /// Parametrisation applied unless the caller overrides it.
    pub fn default_model(&self) -> StrippingModel {
        match self.params().phase {
            Phase::Gas => StrippingModel::Nakai,
            Phase::Condensed { .. } => StrippingModel::Saha,
        }
    }
}

impl SubstanceParams {
    /// Target molecules per cm³.
    ///
    /// `scale` is the gas pressure [mbar] at the reference temperature;
    /// condensed targets take their tabulated density and ignore it.
    pub fn number_density(&self, scale: f64) -> f64 {
        match self.phase {
            Phase::Gas => scale * 100.0 / (K_BOLTZMANN * GAS_TEMPERATURE_K) * 1e-6,
            Phase::Condensed { density } => density * AVOGADRO / self.molar_mass,
        }
    }

    /// Bulk density [g/cm³] for the given scale parameter.
    pub fn density(&self, scale: f64) -> f64 {
        match self.phase {
            Phase::Gas => self.number_density(scale) * self.molar_mass / AVOGADRO,
            Phase::Condensed { density } => density,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for substance in [
            Substance::GaseousHydrogen,
            Substance::GaseousHelium,
            Substance::GaseousNitrogen,
            Substance::CarbonDioxide,
            Substance::Carbon,
            Substance::Aluminium,
            Substance::LiquidHydrogen,
        ] {
            assert_eq!(Substance::from_name(substance.name()).unwrap(), substance);
        }
    }

    #[test]
    fn test_unknown_substance_rejected() {
        let err = Substance::from_name("unobtainium").unwrap_err();
        assert!(matches!(err, StripError::UnknownSubstance(_)));
    }

    #[test]
    fn test_gas_density_linear_in_pressure() {
        let params = Substance::GaseousHelium.params();
        let n1 = params.number_density(1.0);
        let n10 = params.number_density(10.0);
        assert!((n10 / n1 - 10.0).abs() < 1e-12);
        // Loschmidt check: ~2.47e16 molecules/cm³ per mbar at 293 K
        assert!((n1 / 2.4706e16 - 1.0).abs() < 1e-3, "n1 = {n1}");
    }

    #[test]
    fn test_condensed_density_fixed() {
        let params = Substance::Carbon.params();
        assert_eq!(params.density(10.0), params.density(1e-3));
        // 2.0 g/cm³ graphite: ~1.0e23 atoms/cm³
        let n = params.number_density(10.0);
        assert!((n / 1.003e23 - 1.0).abs() < 1e-3, "n = {n}");
    }

    #[test]
    fn test_default_models() {
        assert_eq!(
            Substance::GaseousHelium.default_model(),
            StrippingModel::Nakai
        );
        assert_eq!(Substance::Carbon.default_model(), StrippingModel::Saha);
        assert_eq!(Substance::Aluminium.default_model(), StrippingModel::Saha);
    }
}
