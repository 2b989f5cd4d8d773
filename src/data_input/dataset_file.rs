// src/data_input/dataset_file.rs

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::data_input::collider::{ColliderRecord, ParticleType};
use crate::data_input::datasets::builtin_dataset;
use crate::error::TimelineError;
use crate::label_placement::LabelLocation;
use crate::units::EnergyUnit;

/// On-disk layout of a dataset file. Keys stay as strings until
/// `into_record` so bad keys surface as lookup errors rather than parse errors.
#[derive(Debug, Deserialize)]
struct DatasetFile {
    colliders: Vec<ColliderEntry>,
}

#[derive(Debug, Deserialize)]
struct ColliderEntry {
    name: String,
    start: i32,
    end: i32,
    energy: f64,
    unit: String,
    particles: Vec<String>,
    #[serde(default)]
    loc: Option<String>,
}

impl ColliderEntry {
    fn into_record(self) -> Result<ColliderRecord, TimelineError> {
        let unit: EnergyUnit = self.unit.parse()?;
        // Only the first species colors the bar.
        let particle: ParticleType = match self.particles.first() {
            Some(key) => key.parse()?,
            None => {
                return Err(TimelineError::InvalidRecord {
                    name: self.name,
                    reason: "no particle type given".to_string(),
                })
            }
        };
        let record = ColliderRecord::new(self.name, self.start, self.end, self.energy, unit, particle)?;
        match self.loc {
            Some(loc) => Ok(record.with_label_location(loc.parse::<LabelLocation>()?)),
            None => Ok(record),
        }
    }
}

/// Parses dataset TOML text into validated records.
pub fn parse_dataset(text: &str) -> Result<Vec<ColliderRecord>, TimelineError> {
    let file: DatasetFile = toml::from_str(text)?;
    file.colliders
        .into_iter()
        .map(ColliderEntry::into_record)
        .collect()
}

pub fn load_dataset_file(path: &Path) -> Result<Vec<ColliderRecord>, TimelineError> {
    let text = fs::read_to_string(path)?;
    parse_dataset(&text)
}

/// Resolves the `--colliders` selector: a built-in name, or a path to a TOML file.
pub fn load_dataset(selector: &str) -> Result<Vec<ColliderRecord>, TimelineError> {
    let path = Path::new(selector);
    let records = if path.extension().is_some_and(|ext| ext == "toml") || path.is_file() {
        log::info!("Loading colliders from '{}'", path.display());
        load_dataset_file(path)?
    } else {
        log::info!("Using built-in collider set '{selector}'");
        builtin_dataset(selector)?
    };
    if records.is_empty() {
        return Err(TimelineError::EmptyDataset);
    }
    Ok(records)
}
