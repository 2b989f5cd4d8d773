// src/constants.rs

use plotters::style::RGBColor;

// Figure height in inches; width comes from the plotted year span.
pub const FIG_HEIGHT_IN: f64 = 7.0;
// Keeps very short timelines readable.
pub const MIN_PLOT_WIDTH: u32 = 640;

pub const DEFAULT_DPI: u32 = 100;

// Style defaults.
pub const DEFAULT_FIG_WIDTH_PER_YEAR: f64 = 0.15; // 9 inches for 60 years
pub const DEFAULT_LOG_HEIGHT: f64 = 0.1; // decades
pub const DEFAULT_LIN_HEIGHT: f64 = 500.0; // GeV
pub const DEFAULT_FONT_SIZE_PT: u32 = 20;
pub const DEFAULT_LABEL_SIZE_PT: u32 = 14;
pub const DEFAULT_REFERENCE_YEAR: i32 = 2023;

pub const PROTON_MASS_GEV: f64 = 0.938;

// Fractional padding added to each side of the energy axis (decades on a log axis).
pub const Y_RANGE_PADDING: f64 = 0.15;

// Pixel gap between a bar edge and its label.
pub const LABEL_OFFSET_PX: i32 = 4;

// Chart layout in pixels at 100 dpi; scaled with dpi.
pub const CHART_MARGIN_PX: u32 = 20;
pub const X_LABEL_AREA_PX: u32 = 60;
pub const Y_LABEL_AREA_PX: u32 = 90;

pub const LINE_WIDTH_REFERENCE: u32 = 2;
pub const LINE_WIDTH_BAR_EDGE: u32 = 1;
pub const REFERENCE_DASH_PX: u32 = 8;
pub const REFERENCE_GAP_PX: u32 = 6;

pub const COLOR_REFERENCE_LINE: RGBColor = RGBColor(0x1f, 0x77, 0xb4);
pub const COLOR_GRID: RGBColor = RGBColor(0xdd, 0xdd, 0xdd);
