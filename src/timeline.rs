// src/timeline.rs

//! Turns collider records and a style into everything the renderer draws:
//! bars, label placements, axis ranges, legend entries and figure size.

use std::ops::Range;

use plotters::style::RGBColor;

use crate::constants::{FIG_HEIGHT_IN, MIN_PLOT_WIDTH};
use crate::data_input::collider::{ColliderRecord, ParticleType};
use crate::error::TimelineError;
use crate::geometry::{bar_geometry, energy_range, year_range, AxisScale, BarGeometry};
use crate::label_placement::{place_label, LabelLocation, LabelPlacement};
use crate::style::{ParticleStyle, StyleConfig};
use crate::units::to_base_energy;

/// Switches from the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlotOptions {
    /// Plot the fixed-target equivalent energy instead of √s.
    pub livingston: bool,
    pub linear_y: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineBar {
    pub name: String,
    pub particle: ParticleType,
    pub color: RGBColor,
    /// Energy in the style's base unit, after the optional transform.
    pub energy: f64,
    pub geometry: BarGeometry,
    pub label_location: LabelLocation,
    /// Anchor in data coordinates.
    pub label: LabelPlacement,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimelinePlot {
    pub bars: Vec<TimelineBar>,
    pub scale: AxisScale,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub x_desc: String,
    pub y_desc: String,
    /// Particle types present in the data, in style order.
    pub legend: Vec<ParticleStyle>,
    /// Dashed marker year, if it falls inside the plotted span.
    pub reference_year: Option<f64>,
    pub edge_color: RGBColor,
    /// Figure size in inches (width, height).
    pub figure_size_in: (f64, f64),
}

/// Vertical scale for the run. With the Livingston transform the linear bar
/// height goes through the same conversion so it stays proportionate.
pub fn axis_scale(style: &StyleConfig, options: PlotOptions) -> AxisScale {
    if options.linear_y {
        let height = if options.livingston {
            style.livingston().apply(2.0 * style.lin_height)
        } else {
            style.lin_height
        };
        AxisScale::Linear { height }
    } else {
        AxisScale::Log {
            height: style.log_height,
        }
    }
}

impl TimelinePlot {
    pub fn build(
        records: &[ColliderRecord],
        style: &StyleConfig,
        options: PlotOptions,
    ) -> Result<Self, TimelineError> {
        if records.is_empty() {
            return Err(TimelineError::EmptyDataset);
        }

        let transform = options.livingston.then(|| style.livingston());
        let scale = axis_scale(style, options);

        let mut bars = Vec::with_capacity(records.len());
        for record in records {
            let particle_style = style.particle(record.particle_type)?;
            let energy = to_base_energy(record.energy, record.unit, style.base_unit, transform.as_ref());
            let geometry = bar_geometry(record.start_year, record.end_year, energy, &scale);
            let label_location = record.label_location.unwrap_or(style.default_label_location);

            let mut label = place_label(&geometry.axis_box(&scale), label_location);
            label.anchor.1 = scale.from_axis(label.anchor.1);

            log::debug!(
                "{}: x=[{}, {}] y=[{:.4e}, {:.4e}] label '{}' at ({:.1}, {:.4e})",
                record.name,
                geometry.x_left,
                geometry.x_right(),
                geometry.y_bottom,
                geometry.y_top(),
                label_location,
                label.anchor.0,
                label.anchor.1,
            );

            bars.push(TimelineBar {
                name: record.name.clone(),
                particle: record.particle_type,
                color: particle_style.color,
                energy,
                geometry,
                label_location,
                label,
            });
        }

        let geometries: Vec<BarGeometry> = bars.iter().map(|b| b.geometry).collect();
        let x_range = year_range(&geometries).ok_or(TimelineError::EmptyDataset)?;
        let y_range = energy_range(&geometries, &scale).ok_or(TimelineError::EmptyDataset)?;

        let legend: Vec<ParticleStyle> = style
            .particles
            .iter()
            .filter(|p| bars.iter().any(|b| b.particle == p.particle))
            .cloned()
            .collect();

        let reference = style.reference_year as f64;
        let reference_year = if (x_range.start..=x_range.end).contains(&reference) {
            Some(reference)
        } else {
            log::warn!(
                "Reference year {} is outside the plotted span {}..{}; not drawing it",
                style.reference_year,
                x_range.start,
                x_range.end
            );
            None
        };

        let quantity = if options.livingston { "Particle energy" } else { "√s" };
        let y_desc = format!("{quantity} [{}]", style.base_unit);

        let span_years = x_range.end - x_range.start;
        let figure_size_in = (style.fig_width_per_year * span_years, FIG_HEIGHT_IN);

        Ok(Self {
            bars,
            scale,
            x_range,
            y_range,
            x_desc: "year".to_string(),
            y_desc,
            legend,
            reference_year,
            edge_color: style.edge_color,
            figure_size_in,
        })
    }

    /// Figure size in pixels at `dpi`.
    pub fn pixel_size(&self, dpi: u32) -> (u32, u32) {
        let (w, h) = self.figure_size_in;
        let width = (w * dpi as f64).round() as u32;
        let height = (h * dpi as f64).round() as u32;
        (width.max(MIN_PLOT_WIDTH), height.max(1))
    }
}
