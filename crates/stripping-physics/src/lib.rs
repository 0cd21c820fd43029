// ─────────────────────────────────────────────────────────────────────
// SCPN Beam Stripping — Stripping Physics
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Beam-stripping physics engine.
//!
//! Relativistic projectile kinematics, charge-changing cross sections,
//! Bethe stopping power, thin-target interaction probability and foil
//! thickness inversion.

pub mod cross_section;
pub mod energy_loss;
pub mod material;
pub mod particle;
pub mod sweep;
