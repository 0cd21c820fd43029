//! Numeric primitives for SCPN Beam Stripping.

pub mod bisect;
