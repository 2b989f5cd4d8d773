// src/units.rs

//! Energy units and the Livingston (fixed-target equivalent) transform.

use std::fmt;
use std::str::FromStr;

use crate::error::TimelineError;

/// Energy scale of a value. The base unit for plotting is GeV.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnergyUnit {
    GeV,
    TeV,
}

impl EnergyUnit {
    /// Multiplier that converts a value in this unit to GeV.
    pub fn in_gev(self) -> f64 {
        match self {
            EnergyUnit::GeV => 1.0,
            EnergyUnit::TeV => 1000.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EnergyUnit::GeV => "GeV",
            EnergyUnit::TeV => "TeV",
        }
    }

    /// Express `value` (given in `self`) in `target` units.
    pub fn convert(self, value: f64, target: EnergyUnit) -> f64 {
        value * self.in_gev() / target.in_gev()
    }
}

impl FromStr for EnergyUnit {
    type Err = TimelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "GeV" => Ok(EnergyUnit::GeV),
            "TeV" => Ok(EnergyUnit::TeV),
            other => Err(TimelineError::UnknownUnit(other.to_string())),
        }
    }
}

impl fmt::Display for EnergyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Converts center-of-mass energy to the beam energy a fixed-target
/// experiment would need: `E_eq = s / (2 m)` with `s = E_cm^2`.
///
/// `energy` and `target_mass` must be in the same unit; the result is too.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LivingstonTransform {
    target_mass: f64,
}

impl LivingstonTransform {
    pub fn new(target_mass: f64) -> Self {
        Self { target_mass }
    }

    pub fn target_mass(&self) -> f64 {
        self.target_mass
    }

    pub fn apply(&self, energy: f64) -> f64 {
        energy * energy / (2.0 * self.target_mass)
    }
}

/// Energy of a record in the plotting base unit, optionally Livingston-transformed.
pub fn to_base_energy(
    energy: f64,
    unit: EnergyUnit,
    base: EnergyUnit,
    livingston: Option<&LivingstonTransform>,
) -> f64 {
    let value = unit.convert(energy, base);
    match livingston {
        Some(transform) => transform.apply(value),
        None => value,
    }
}
