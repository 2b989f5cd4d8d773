// src/lib.rs - Library interface for the timeline pipeline

pub mod constants;
pub mod data_input;
pub mod error;
pub mod font_config;
pub mod geometry;
pub mod label_placement;
pub mod output_format;
pub mod plot_framework;
pub mod style;
pub mod timeline;
pub mod units;

use std::path::PathBuf;

use crate::data_input::collider::ColliderRecord;
use crate::error::TimelineError;
use crate::output_format::OutputFormat;
use crate::style::StyleConfig;
use crate::timeline::{PlotOptions, TimelinePlot};

pub fn crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Builds the timeline for `records` and writes one file per format.
pub fn make_collider_plot(
    records: &[ColliderRecord],
    style: &StyleConfig,
    output: &str,
    formats: &[OutputFormat],
    options: PlotOptions,
) -> Result<Vec<PathBuf>, TimelineError> {
    let plot = TimelinePlot::build(records, style, options)?;
    log::info!(
        "Plotting {} colliders over {}..{} ({} y-axis{})",
        plot.bars.len(),
        plot.x_range.start,
        plot.x_range.end,
        if plot.scale.is_log() { "log" } else { "linear" },
        if options.livingston { ", Livingston" } else { "" },
    );
    plot_framework::render_timeline(&plot, style, output, formats)
}
