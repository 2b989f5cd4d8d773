// src/data_input/datasets.rs

//! Built-in collider lists. Future scenarios are the current list
//! concatenated with an extension list.

use crate::data_input::collider::{ColliderRecord, ParticleType};
use crate::error::TimelineError;
use crate::label_placement::LabelLocation;
use crate::units::EnergyUnit::{self, GeV, TeV};

use ParticleType::{ElectronPair as EE, MuonPair as MuMu, ProtonPair as PP};

/// Names accepted by `builtin_dataset`.
pub const BUILTIN_DATASETS: [&str; 3] = ["current", "future1", "future2"];

type Row = (&'static str, i32, i32, f64, EnergyUnit, ParticleType);

const CURRENT: [Row; 11] = [
    ("PETRA", 1978, 1986, 20.0 * 2.0, GeV, EE),
    ("SLC", 1988, 1998, 45.0 * 2.0, GeV, EE),
    ("LEP", 1989, 1995, 45.6 * 2.0, GeV, EE),
    ("LEP2", 1995, 2000, 104.5 * 2.0, GeV, EE),
    ("SppS", 1981, 1984, 315.0 * 2.0, GeV, PP),
    ("Tevatron (I)", 1992, 1995, 900.0 * 2.0, GeV, PP),
    ("Tevatron (II)", 2001, 2011, 980.0 * 2.0, GeV, PP),
    ("LHC (1)", 2010, 2013, 4.0 * 2.0, TeV, PP),
    ("LHC (2)", 2015, 2018, 6.5 * 2.0, TeV, PP),
    ("LHC (3)", 2022, 2026, 6.8 * 2.0, TeV, PP),
    ("HL-LHC", 2029, 2041, 7.0 * 2.0, TeV, PP),
];

const FUTURE_FCC: [Row; 3] = [
    ("FCC-ee (1)", 2048, 2057, 240.0, GeV, EE),
    ("FCC-ee (2)", 2059, 2063, 350.0, GeV, EE),
    ("FCC-hh", 2074, 2099, 100.0, TeV, PP),
];

const FUTURE_C3_MUON: [Row; 5] = [
    ("C³ (1)", 2040, 2051, 250.0, GeV, EE),
    ("C³ (2)", 2053, 2062, 500.0, GeV, EE),
    ("C³ (3)", 2065, 2074, 2.0, TeV, EE),
    ("MuColl (1)", 2045, 2050, 3.0, TeV, MuMu),
    ("MuColl (2)", 2056, 2062, 10.0, TeV, MuMu),
];

fn build(rows: &[Row]) -> Result<Vec<ColliderRecord>, TimelineError> {
    rows.iter()
        .map(|&(name, start, end, energy, unit, particle)| {
            ColliderRecord::new(name, start, end, energy, unit, particle)
        })
        .collect()
}

/// Colliders that have run or are scheduled: PETRA through HL-LHC.
pub fn current_colliders() -> Result<Vec<ColliderRecord>, TimelineError> {
    let mut records = build(&CURRENT)?;
    // SLC overlaps LEP; keep its label clear of the LEP bar.
    if let Some(slc) = records.iter_mut().find(|r| r.name == "SLC") {
        slc.label_location = Some(LabelLocation::CENTER_RIGHT);
    }
    Ok(records)
}

/// FCC-ee and FCC-hh proposals.
pub fn fcc_extension() -> Result<Vec<ColliderRecord>, TimelineError> {
    build(&FUTURE_FCC)
}

/// C³ linear collider and muon collider proposals.
pub fn c3_muon_extension() -> Result<Vec<ColliderRecord>, TimelineError> {
    build(&FUTURE_C3_MUON)
}

/// Base list followed by the extension, neither modified.
pub fn compose(base: &[ColliderRecord], extension: &[ColliderRecord]) -> Vec<ColliderRecord> {
    base.iter().chain(extension).cloned().collect()
}

/// Looks up a built-in dataset by name.
pub fn builtin_dataset(name: &str) -> Result<Vec<ColliderRecord>, TimelineError> {
    match name {
        "current" => current_colliders(),
        "future1" => Ok(compose(&current_colliders()?, &fcc_extension()?)),
        "future2" => Ok(compose(&current_colliders()?, &c3_muon_extension()?)),
        other => Err(TimelineError::UnknownDataset(other.to_string())),
    }
}
