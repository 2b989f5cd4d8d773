// src/data_input/collider.rs

use std::fmt;
use std::str::FromStr;

use crate::error::TimelineError;
use crate::label_placement::LabelLocation;
use crate::units::EnergyUnit;

/// Colliding beam species. Keys match the dataset files: `e`, `p`, `m`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ParticleType {
    ElectronPair,
    ProtonPair,
    MuonPair,
}

impl ParticleType {
    pub const ALL: [ParticleType; 3] = [
        ParticleType::ElectronPair,
        ParticleType::ProtonPair,
        ParticleType::MuonPair,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ParticleType::ElectronPair => "e",
            ParticleType::ProtonPair => "p",
            ParticleType::MuonPair => "m",
        }
    }
}

impl FromStr for ParticleType {
    type Err = TimelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "e" => Ok(ParticleType::ElectronPair),
            "p" => Ok(ParticleType::ProtonPair),
            "m" => Ok(ParticleType::MuonPair),
            other => Err(TimelineError::UnknownParticle(other.to_string())),
        }
    }
}

impl fmt::Display for ParticleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One collider run: a bar on the timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct ColliderRecord {
    pub name: String,
    pub start_year: i32,
    pub end_year: i32,
    pub energy: f64,
    pub unit: EnergyUnit,
    pub particle_type: ParticleType,
    pub label_location: Option<LabelLocation>,
}

impl ColliderRecord {
    /// Builds a record, rejecting reversed year spans and non-positive energies.
    pub fn new(
        name: impl Into<String>,
        start_year: i32,
        end_year: i32,
        energy: f64,
        unit: EnergyUnit,
        particle_type: ParticleType,
    ) -> Result<Self, TimelineError> {
        let name = name.into();
        if end_year < start_year {
            return Err(TimelineError::InvalidRecord {
                name,
                reason: format!("end year {end_year} is before start year {start_year}"),
            });
        }
        if !(energy.is_finite() && energy > 0.0) {
            return Err(TimelineError::InvalidRecord {
                name,
                reason: format!("energy must be positive, got {energy}"),
            });
        }
        Ok(Self {
            name,
            start_year,
            end_year,
            energy,
            unit,
            particle_type,
            label_location: None,
        })
    }

    pub fn with_label_location(mut self, location: LabelLocation) -> Self {
        self.label_location = Some(location);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_particle_keys() {
        for particle in ParticleType::ALL {
            assert_eq!(particle.key().parse::<ParticleType>().unwrap(), particle);
        }
        assert!(matches!(
            "i".parse::<ParticleType>(),
            Err(TimelineError::UnknownParticle(k)) if k == "i"
        ));
    }

    #[test]
    fn test_record_rejects_reversed_years() {
        let err = ColliderRecord::new("LEP", 2000, 1989, 91.2, EnergyUnit::GeV, ParticleType::ElectronPair)
            .unwrap_err();
        assert!(matches!(err, TimelineError::InvalidRecord { ref name, .. } if name == "LEP"));
    }

    #[test]
    fn test_record_rejects_non_positive_energy() {
        assert!(ColliderRecord::new("X", 2000, 2001, 0.0, EnergyUnit::GeV, ParticleType::ProtonPair).is_err());
        assert!(ColliderRecord::new("X", 2000, 2001, f64::NAN, EnergyUnit::GeV, ParticleType::ProtonPair).is_err());
    }

    #[test]
    fn test_single_year_run_is_valid() {
        let rec = ColliderRecord::new("Pilot", 2020, 2020, 1.0, EnergyUnit::TeV, ParticleType::ProtonPair).unwrap();
        assert_eq!(rec.start_year, rec.end_year);
        assert!(rec.label_location.is_none());
    }
}
