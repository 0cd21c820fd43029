// ─────────────────────────────────────────────────────────────────────
// SCPN Beam Stripping — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Physical constants in accelerator units: MeV, MeV/c, cm, g/cm³, mbar.

/// Electron rest energy [MeV].
pub const M_ELECTRON_MEV: f64 = 0.510_998_950;

/// Proton rest energy [MeV].
pub const M_PROTON_MEV: f64 = 938.272_088_16;

/// Neutral hydrogen rest energy [MeV] (proton + one electron).
pub const M_HYDROGEN_MEV: f64 = M_PROTON_MEV + M_ELECTRON_MEV;

/// H⁻ rest energy [MeV] (proton + two electrons; the 0.75 eV electron
/// affinity is far below the precision carried here).
pub const M_HMINUS_MEV: f64 = M_PROTON_MEV + 2.0 * M_ELECTRON_MEV;

/// Muon rest energy [MeV].
pub const M_MUON_MEV: f64 = 105.658_375_5;

/// Avogadro's number [1/mol].
pub const AVOGADRO: f64 = 6.022_140_76e23;

/// Boltzmann constant [J/K].
pub const K_BOLTZMANN: f64 = 1.380_649e-23;

/// Bethe stopping constant 4π·N_A·r_e²·m_e c² [MeV·cm²/mol].
pub const K_BETHE: f64 = 0.307_075;

/// Fine-structure constant (also β of the Bohr velocity).
pub const ALPHA_FS: f64 = 7.297_352_569_3e-3;

/// Bohr radius [cm].
pub const BOHR_RADIUS_CM: f64 = 5.291_772_109e-9;

/// Reference gas temperature [K] for the pressure → number density law.
pub const GAS_TEMPERATURE_K: f64 = 293.15;
