use crate::chart::{time_label, Chart, Series, XAxis};
use crate::ChartStyle;
use plotters::backend::{DrawingBackend, SVGBackend};
use plotters::chart::ChartBuilder;
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, DrawingAreaErrorKind, IntoDrawingArea};
use plotters::series::LineSeries;
use plotters::style::{Color as _, FontTransform, IntoFont, RGBColor};
use std::ops::Range;
use std::path::Path;
use sysgraph_core::{Result, SysgraphError};

/// Usage series are percentages.
const Y_RANGE: Range<f64> = 0.0..100.0;

/// Padding around a single timestamp so a one-sample chart still has width.
const TIME_PAD_SECS: f64 = 30.0;

fn render_err<E: std::error::Error + Send + Sync>(e: DrawingAreaErrorKind<E>) -> SysgraphError {
    SysgraphError::Render(e.to_string())
}

/// Draw `chart` as two side-by-side panels into an SVG file at `path`.
pub fn draw(path: &Path, chart: &Chart, style: &ChartStyle) -> Result<()> {
    let root = SVGBackend::new(path, (style.width, style.height)).into_drawing_area();
    root.fill(&style.background).map_err(render_err)?;

    let panels = root.split_evenly((1, 2));
    let x_range = x_range(chart);
    draw_panel(&panels[0], chart, &chart.memory, x_range.clone(), style.memory)?;
    draw_panel(&panels[1], chart, &chart.cpu, x_range, style.cpu)?;

    root.present().map_err(render_err)?;
    tracing::trace!("Rendered '{}' to {}", chart.memory.title, path.display());
    Ok(())
}

fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    chart: &Chart,
    series: &Series,
    x_range: Range<f64>,
    color: RGBColor,
) -> Result<()> {
    let x_label_area = match chart.axis {
        XAxis::Time => 110,
        XAxis::Hour => 40,
    };

    let mut ctx = ChartBuilder::on(area)
        .caption(series.title, ("sans-serif", 20).into_font())
        .margin(10)
        .x_label_area_size(x_label_area)
        .y_label_area_size(50)
        .build_cartesian_2d(x_range, Y_RANGE)
        .map_err(render_err)?;

    {
        let rotated = ("sans-serif", 12).into_font().transform(FontTransform::Rotate90);
        let mut mesh = ctx.configure_mesh();
        mesh.x_desc(chart.x_desc()).y_desc("Usage (%)");
        match chart.axis {
            XAxis::Time => {
                mesh.x_labels(8)
                    .x_label_formatter(&time_label)
                    .x_label_style(rotated);
            }
            XAxis::Hour => {
                mesh.x_labels(24).x_label_formatter(&hour_label);
            }
        }
        mesh.draw().map_err(render_err)?;
    }

    ctx.draw_series(
        LineSeries::new(series.points.iter().copied(), color.stroke_width(2)).point_size(2),
    )
    .map_err(render_err)?;

    Ok(())
}

fn hour_label(x: &f64) -> String {
    format!("{x:.0}")
}

/// Horizontal extent shared by both panels.
fn x_range(chart: &Chart) -> Range<f64> {
    match chart.axis {
        XAxis::Hour => 0.0..23.0,
        XAxis::Time => {
            let xs = chart.memory.points.iter().chain(&chart.cpu.points).map(|p| p.0);
            let (lo, hi) = xs.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), x| {
                (lo.min(x), hi.max(x))
            });
            if lo > hi {
                // no samples yet
                0.0..1.0
            } else if lo == hi {
                lo - TIME_PAD_SECS..hi + TIME_PAD_SECS
            } else {
                lo..hi
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time_chart(xs: &[f64]) -> Chart {
        let points: Vec<(f64, f64)> = xs.iter().map(|&x| (x, 1.0)).collect();
        Chart {
            axis:   XAxis::Time,
            memory: Series { title: "m", points: points.clone() },
            cpu:    Series { title: "c", points },
        }
    }

    #[test]
    fn time_range_spans_samples() {
        assert_eq!(x_range(&time_chart(&[300.0, 100.0, 200.0])), 100.0..300.0);
    }

    #[test]
    fn single_time_is_padded() {
        assert_eq!(x_range(&time_chart(&[50.0])), 20.0..80.0);
    }

    #[test]
    fn empty_time_range_is_not_degenerate() {
        let range = x_range(&time_chart(&[]));
        assert!(range.start < range.end);
    }
}
