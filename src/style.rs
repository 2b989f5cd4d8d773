// src/style.rs

//! Plot style: particle colors and legend names, bar sizing, fonts and
//! per-format print settings. Built-in default plus optional TOML overrides.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use palette::Srgb;
use plotters::style::RGBColor;
use serde::Deserialize;

use crate::constants::{
    DEFAULT_DPI, DEFAULT_FIG_WIDTH_PER_YEAR, DEFAULT_FONT_SIZE_PT, DEFAULT_LABEL_SIZE_PT,
    DEFAULT_LIN_HEIGHT, DEFAULT_LOG_HEIGHT, DEFAULT_REFERENCE_YEAR, PROTON_MASS_GEV,
};
use crate::data_input::collider::ParticleType;
use crate::error::TimelineError;
use crate::label_placement::LabelLocation;
use crate::output_format::OutputFormat;
use crate::units::{EnergyUnit, LivingstonTransform};

#[derive(Debug, Clone, PartialEq)]
pub struct ParticleStyle {
    pub particle: ParticleType,
    pub color: RGBColor,
    pub display_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrintArgs {
    pub dpi: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StyleConfig {
    pub base_unit: EnergyUnit,
    /// Figure width in inches per plotted year.
    pub fig_width_per_year: f64,
    /// Bar thickness in decades on the log axis.
    pub log_height: f64,
    /// Bar thickness in base units on the linear axis.
    pub lin_height: f64,
    pub font_size_pt: u32,
    pub label_size_pt: u32,
    pub edge_color: RGBColor,
    pub default_label_location: LabelLocation,
    pub reference_year: i32,
    pub proton_mass: f64,
    pub proton_mass_unit: EnergyUnit,
    /// Legend order follows this list.
    pub particles: Vec<ParticleStyle>,
    pub print_args: Vec<(OutputFormat, PrintArgs)>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            base_unit: EnergyUnit::GeV,
            fig_width_per_year: DEFAULT_FIG_WIDTH_PER_YEAR,
            log_height: DEFAULT_LOG_HEIGHT,
            lin_height: DEFAULT_LIN_HEIGHT,
            font_size_pt: DEFAULT_FONT_SIZE_PT,
            label_size_pt: DEFAULT_LABEL_SIZE_PT,
            edge_color: RGBColor(0, 0, 0),
            default_label_location: LabelLocation::UPPER_CENTER,
            reference_year: DEFAULT_REFERENCE_YEAR,
            proton_mass: PROTON_MASS_GEV,
            proton_mass_unit: EnergyUnit::GeV,
            particles: vec![
                ParticleStyle {
                    particle: ParticleType::ElectronPair,
                    color: RGBColor(0xf8, 0x9c, 0x20),
                    display_name: "e⁺e⁻".to_string(),
                },
                ParticleStyle {
                    particle: ParticleType::ProtonPair,
                    color: RGBColor(0x96, 0x4a, 0x8b),
                    display_name: "pp (or p-pbar)".to_string(),
                },
                ParticleStyle {
                    particle: ParticleType::MuonPair,
                    color: RGBColor(0xe4, 0x25, 0x36),
                    display_name: "μ⁺μ⁻".to_string(),
                },
            ],
            print_args: vec![
                (OutputFormat::Png, PrintArgs { dpi: DEFAULT_DPI }),
                (OutputFormat::Svg, PrintArgs { dpi: DEFAULT_DPI }),
            ],
        }
    }
}

impl StyleConfig {
    /// Style entry for a particle type; missing entries are a lookup error.
    pub fn particle(&self, particle: ParticleType) -> Result<&ParticleStyle, TimelineError> {
        self.particles
            .iter()
            .find(|p| p.particle == particle)
            .ok_or_else(|| TimelineError::UnknownParticle(particle.key().to_string()))
    }

    pub fn print_args(&self, format: OutputFormat) -> PrintArgs {
        self.print_args
            .iter()
            .find(|(f, _)| *f == format)
            .map(|(_, args)| *args)
            .unwrap_or(PrintArgs { dpi: DEFAULT_DPI })
    }

    /// Fixed-target transform with the proton mass expressed in the base unit.
    pub fn livingston(&self) -> LivingstonTransform {
        LivingstonTransform::new(self.proton_mass_unit.convert(self.proton_mass, self.base_unit))
    }

    /// Applies the overrides from a style file on top of `self`.
    fn merge(mut self, file: StyleFile) -> Result<Self, TimelineError> {
        if let Some(unit) = file.base_unit {
            self.base_unit = unit.parse()?;
        }
        if let Some(v) = file.fig_width {
            self.fig_width_per_year = v;
        }
        if let Some(v) = file.log_height {
            self.log_height = v;
        }
        if let Some(v) = file.lin_height {
            self.lin_height = v;
        }
        if let Some(v) = file.font_size {
            self.font_size_pt = v;
        }
        if let Some(v) = file.label_size {
            self.label_size_pt = v;
        }
        if let Some(edge) = file.edge {
            self.edge_color = parse_color(&edge)?;
        }
        if let Some(loc) = file.loc {
            self.default_label_location = loc.parse()?;
        }
        if let Some(year) = file.reference_year {
            self.reference_year = year;
        }
        if let Some(proton) = file.proton {
            self.proton_mass = proton.mass;
            self.proton_mass_unit = proton.unit.parse()?;
        }
        for (key, entry) in file.particles {
            let particle: ParticleType = key.parse()?;
            let existing = self
                .particles
                .iter_mut()
                .find(|p| p.particle == particle)
                .ok_or_else(|| TimelineError::UnknownParticle(key.clone()))?;
            if let Some(hex) = entry.color {
                existing.color = parse_color(&hex)?;
            }
            if let Some(name) = entry.name {
                existing.display_name = name;
            }
        }
        for (name, args) in file.print_args {
            let format: OutputFormat = name.parse()?;
            match self.print_args.iter_mut().find(|(f, _)| *f == format) {
                Some((_, existing)) => existing.dpi = args.dpi,
                None => self.print_args.push((format, PrintArgs { dpi: args.dpi })),
            }
        }
        Ok(self)
    }
}

/// `#rrggbb` (or `rrggbb`) to a plotting color.
pub fn parse_color(value: &str) -> Result<RGBColor, TimelineError> {
    let rgb = value
        .trim()
        .parse::<Srgb<u8>>()
        .map_err(|source| TimelineError::InvalidColor {
            value: value.to_string(),
            source,
        })?;
    Ok(RGBColor(rgb.red, rgb.green, rgb.blue))
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct StyleFile {
    base_unit: Option<String>,
    fig_width: Option<f64>,
    log_height: Option<f64>,
    lin_height: Option<f64>,
    font_size: Option<u32>,
    label_size: Option<u32>,
    edge: Option<String>,
    loc: Option<String>,
    reference_year: Option<i32>,
    proton: Option<ProtonEntry>,
    #[serde(default)]
    particles: BTreeMap<String, ParticleEntry>,
    #[serde(default)]
    print_args: BTreeMap<String, PrintArgsEntry>,
}

#[derive(Debug, Deserialize)]
struct ProtonEntry {
    mass: f64,
    unit: String,
}

#[derive(Debug, Deserialize)]
struct ParticleEntry {
    color: Option<String>,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PrintArgsEntry {
    dpi: u32,
}

pub fn parse_style(text: &str) -> Result<StyleConfig, TimelineError> {
    let file: StyleFile = toml::from_str(text)?;
    StyleConfig::default().merge(file)
}

pub fn builtin_style(name: &str) -> Result<StyleConfig, TimelineError> {
    match name {
        "style" => Ok(StyleConfig::default()),
        other => Err(TimelineError::UnknownStyle(other.to_string())),
    }
}

/// Resolves the `--style` selector: a built-in name, or a path to a TOML file.
pub fn load_style(selector: &str) -> Result<StyleConfig, TimelineError> {
    let path = Path::new(selector);
    if path.extension().is_some_and(|ext| ext == "toml") || path.is_file() {
        log::info!("Loading style from '{}'", path.display());
        parse_style(&fs::read_to_string(path)?)
    } else {
        log::info!("Using built-in style '{selector}'");
        builtin_style(selector)
    }
}
