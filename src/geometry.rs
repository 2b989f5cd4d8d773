// src/geometry.rs

//! Bar geometry and axis ranges for the timeline.

use std::ops::Range;

use crate::constants::Y_RANGE_PADDING;
use crate::label_placement::BoundingBox;

/// How energies map onto the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisScale {
    /// Bars span `height` decades, centered (multiplicatively) on the energy.
    Log { height: f64 },
    /// Bars span `height` base units, centered on the energy.
    Linear { height: f64 },
}

impl AxisScale {
    /// Maps an energy into the space where the axis is linear.
    pub fn to_axis(&self, value: f64) -> f64 {
        match self {
            AxisScale::Log { .. } => value.log10(),
            AxisScale::Linear { .. } => value,
        }
    }

    pub fn from_axis(&self, value: f64) -> f64 {
        match self {
            AxisScale::Log { .. } => 10f64.powf(value),
            AxisScale::Linear { .. } => value,
        }
    }

    pub fn is_log(&self) -> bool {
        matches!(self, AxisScale::Log { .. })
    }
}

/// Rectangle of one bar, in data coordinates (years × energy).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarGeometry {
    pub x_left: f64,
    pub width: f64,
    pub y_bottom: f64,
    pub height: f64,
}

impl BarGeometry {
    pub fn x_right(&self) -> f64 {
        self.x_left + self.width
    }

    pub fn y_top(&self) -> f64 {
        self.y_bottom + self.height
    }

    /// Bounding box in axis space, where the label placement is linear.
    pub fn axis_box(&self, scale: &AxisScale) -> BoundingBox {
        BoundingBox::new(
            self.x_left,
            self.x_right(),
            scale.to_axis(self.y_bottom),
            scale.to_axis(self.y_top()),
        )
    }
}

/// Bar for a run from `start_year` to `end_year` at `energy` (base units).
pub fn bar_geometry(start_year: i32, end_year: i32, energy: f64, scale: &AxisScale) -> BarGeometry {
    let (y_bottom, height) = match *scale {
        AxisScale::Log { height } => {
            let half = 10f64.powf(height / 2.0);
            let bottom = energy / half;
            (bottom, energy * half - bottom)
        }
        AxisScale::Linear { height } => (energy - height / 2.0, height),
    };
    BarGeometry {
        x_left: start_year as f64,
        width: (end_year - start_year) as f64,
        y_bottom,
        height,
    }
}

/// Calculate plot range with padding.
/// Adds `Y_RANGE_PADDING` of the span on each side, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 { 0.5 } else { range * Y_RANGE_PADDING };
    (min - padding, max + padding)
}

/// Year span of the bars: exactly `[min left, max right]`.
pub fn year_range(bars: &[BarGeometry]) -> Option<Range<f64>> {
    let left = bars.iter().map(|b| b.x_left).reduce(f64::min)?;
    let right = bars.iter().map(|b| b.x_right()).reduce(f64::max)?;
    if right > left {
        Some(left..right)
    } else {
        // A dataset of zero-length runs still needs a drawable axis.
        Some(left - 0.5..right + 0.5)
    }
}

/// Padded energy range covering every bar. The padding is applied in axis
/// space, so a log axis gets the same number of extra decades on each side.
pub fn energy_range(bars: &[BarGeometry], scale: &AxisScale) -> Option<Range<f64>> {
    let bottom = bars.iter().map(|b| b.y_bottom).reduce(f64::min)?;
    let top = bars.iter().map(|b| b.y_top()).reduce(f64::max)?;
    let (lo, hi) = calculate_range(scale.to_axis(bottom), scale.to_axis(top));
    Some(scale.from_axis(lo)..scale.from_axis(hi))
}
