// src/plot_framework.rs

use plotters::backend::{BitMapBackend, DrawingBackend, SVGBackend};
use plotters::chart::{ChartBuilder, ChartContext, SeriesLabelPosition};
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::ranged1d::{Ranged, ValueFormatter};
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{Rectangle, Text};
use plotters::prelude::IntoLogRange;
use plotters::series::DashedLineSeries;
use plotters::style::colors::{BLACK, WHITE};
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{Color, IntoFont};

use std::error::Error;
use std::path::PathBuf;

use crate::constants::{
    CHART_MARGIN_PX, COLOR_GRID, COLOR_REFERENCE_LINE, DEFAULT_DPI, LABEL_OFFSET_PX,
    LINE_WIDTH_BAR_EDGE, LINE_WIDTH_REFERENCE, REFERENCE_DASH_PX, REFERENCE_GAP_PX,
    X_LABEL_AREA_PX, Y_LABEL_AREA_PX,
};
use crate::error::TimelineError;
use crate::font_config::FigureFonts;
use crate::geometry::AxisScale;
use crate::label_placement::{HorizontalAlign, VerticalAlign};
use crate::output_format::OutputFormat;
use crate::style::StyleConfig;
use crate::timeline::TimelinePlot;

/// Energy axis tick text: plain numbers below 1000, then k/M/G notation.
pub fn format_energy_tick(y: f64) -> String {
    if y.abs() >= 1_000_000_000.0 {
        format!("{:.1}G", y / 1_000_000_000.0)
    } else if y.abs() >= 1_000_000.0 {
        format!("{:.1}M", y / 1_000_000.0)
    } else if y.abs() >= 1000.0 {
        format!("{:.0}k", y / 1000.0)
    } else if y.abs() < 10.0 && y.fract() != 0.0 {
        // Sub-decade ticks on the log axis (0.5, 2.5, ...)
        format!("{:.1}", y)
    } else {
        format!("{:.0}", y)
    }
}

/// Layout sizes are tuned at 100 dpi.
fn scale_px(px: u32, dpi: u32) -> u32 {
    (px * dpi / DEFAULT_DPI).max(1)
}

/// Pixel nudge that moves a label away from its anchor along the alignment.
fn label_anchor(
    horizontal: HorizontalAlign,
    vertical: VerticalAlign,
    offset: i32,
) -> (Pos, (i32, i32)) {
    let (hpos, dx) = match horizontal {
        HorizontalAlign::Left => (HPos::Left, offset),
        HorizontalAlign::Center => (HPos::Center, 0),
        HorizontalAlign::Right => (HPos::Right, -offset),
    };
    // Pixel y grows downward.
    let (vpos, dy) = match vertical {
        VerticalAlign::Top => (VPos::Top, offset),
        VerticalAlign::Center => (VPos::Center, 0),
        VerticalAlign::Bottom => (VPos::Bottom, -offset),
    };
    (Pos::new(hpos, vpos), (dx, dy))
}

/// Draws axes, bars, legend, reference line and bar labels onto a built chart.
fn draw_chart<'a, DB, Y>(
    root: &DrawingArea<DB, Shift>,
    chart: &mut ChartContext<'a, DB, Cartesian2d<RangedCoordf64, Y>>,
    plot: &TimelinePlot,
    fonts: &FigureFonts,
    dpi: u32,
) -> Result<(), Box<dyn Error>>
where
    DB: DrawingBackend + 'a,
    DB::ErrorType: 'static,
    Y: Ranged<ValueType = f64> + ValueFormatter<f64>,
{
    chart
        .configure_mesh()
        .x_desc(plot.x_desc.as_str())
        .y_desc(plot.y_desc.as_str())
        .x_label_formatter(&|x| format!("{x:.0}"))
        .y_label_formatter(&|y| format_energy_tick(*y))
        .bold_line_style(COLOR_GRID)
        .light_line_style(WHITE.mix(0.0))
        .axis_desc_style(fonts.axis.scaled(dpi))
        .label_style(fonts.tick.scaled(dpi))
        .draw()?;

    if let Some(year) = plot.reference_year {
        chart.draw_series(DashedLineSeries::new(
            vec![(year, plot.y_range.start), (year, plot.y_range.end)],
            scale_px(REFERENCE_DASH_PX, dpi),
            scale_px(REFERENCE_GAP_PX, dpi),
            COLOR_REFERENCE_LINE.stroke_width(scale_px(LINE_WIDTH_REFERENCE, dpi)),
        ))?;
    }

    // One series per particle type so each gets a legend entry.
    let swatch = (scale_px(8, dpi) as i32).max(2);
    for entry in &plot.legend {
        let color = entry.color;
        let bars = plot
            .bars
            .iter()
            .filter(|bar| bar.particle == entry.particle)
            .map(|bar| {
                let g = bar.geometry;
                Rectangle::new([(g.x_left, g.y_bottom), (g.x_right(), g.y_top())], color.filled())
            });
        chart
            .draw_series(bars)?
            .label(entry.display_name.clone())
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - swatch), (x + 2 * swatch, y + swatch)], color.filled())
            });
    }

    let edge_style = plot.edge_color.stroke_width(scale_px(LINE_WIDTH_BAR_EDGE, dpi));
    chart.draw_series(plot.bars.iter().map(|bar| {
        let g = bar.geometry;
        Rectangle::new([(g.x_left, g.y_bottom), (g.x_right(), g.y_top())], edge_style)
    }))?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(fonts.legend.scaled(dpi))
        .draw()?;

    // Labels go on the root area in pixel space so the offset is uniform on both axis types.
    let offset = scale_px(LABEL_OFFSET_PX as u32, dpi) as i32;
    let label_font = fonts.bar_label.scaled(dpi);
    for bar in &plot.bars {
        let (pos, (dx, dy)) = label_anchor(bar.label.horizontal_align, bar.label.vertical_align, offset);
        let (x, y) = chart.backend_coord(&bar.label.anchor);
        let style = label_font.into_font().color(&BLACK).pos(pos);
        root.draw(&Text::new(bar.name.as_str(), (x + dx, y + dy), style))?;
    }

    Ok(())
}

/// Fills `root` with the complete timeline figure.
fn draw_timeline<DB>(
    root: &DrawingArea<DB, Shift>,
    plot: &TimelinePlot,
    fonts: &FigureFonts,
    dpi: u32,
) -> Result<(), Box<dyn Error>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let mut builder = ChartBuilder::on(root);
    builder
        .margin(scale_px(CHART_MARGIN_PX, dpi))
        .x_label_area_size(scale_px(X_LABEL_AREA_PX, dpi))
        .y_label_area_size(scale_px(Y_LABEL_AREA_PX, dpi));

    match plot.scale {
        AxisScale::Log { .. } => {
            let mut chart =
                builder.build_cartesian_2d(plot.x_range.clone(), plot.y_range.clone().log_scale())?;
            draw_chart(root, &mut chart, plot, fonts, dpi)
        }
        AxisScale::Linear { .. } => {
            let mut chart = builder.build_cartesian_2d(plot.x_range.clone(), plot.y_range.clone())?;
            draw_chart(root, &mut chart, plot, fonts, dpi)
        }
    }
}

fn write_figure<DB>(
    root: DrawingArea<DB, Shift>,
    plot: &TimelinePlot,
    fonts: &FigureFonts,
    dpi: u32,
) -> Result<(), Box<dyn Error>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    draw_timeline(&root, plot, fonts, dpi)?;
    root.present()?;
    Ok(())
}

/// Renders `plot` once per format to `<output>.<format>`.
/// Returns the written paths; the first failure aborts the run.
pub fn render_timeline(
    plot: &TimelinePlot,
    style: &StyleConfig,
    output: &str,
    formats: &[OutputFormat],
) -> Result<Vec<PathBuf>, TimelineError> {
    let fonts = FigureFonts::from_style(style);
    let mut written = Vec::with_capacity(formats.len());

    for &format in formats {
        let dpi = style.print_args(format).dpi;
        let path = format.output_path(output);
        let size = plot.pixel_size(dpi);
        log::debug!("Rendering {} at {}x{} px ({} dpi)", path.display(), size.0, size.1, dpi);

        let result = match format {
            OutputFormat::Png => write_figure(BitMapBackend::new(&path, size).into_drawing_area(), plot, &fonts, dpi),
            OutputFormat::Svg => write_figure(SVGBackend::new(&path, size).into_drawing_area(), plot, &fonts, dpi),
        };
        result.map_err(|e| TimelineError::Render(format!("{}: {e}", path.display())))?;

        log::info!("Timeline saved as '{}'.", path.display());
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_px() {
        assert_eq!(scale_px(20, 100), 20);
        assert_eq!(scale_px(20, 300), 60);
        assert_eq!(scale_px(1, 50), 1);
    }

    #[test]
    fn test_label_anchor_moves_away_from_bar() {
        let (_, (dx, dy)) = label_anchor(HorizontalAlign::Center, VerticalAlign::Bottom, 4);
        assert_eq!((dx, dy), (0, -4));
        let (_, (dx, dy)) = label_anchor(HorizontalAlign::Left, VerticalAlign::Center, 4);
        assert_eq!((dx, dy), (4, 0));
        let (_, (dx, dy)) = label_anchor(HorizontalAlign::Right, VerticalAlign::Top, 4);
        assert_eq!((dx, dy), (-4, 4));
    }
}
