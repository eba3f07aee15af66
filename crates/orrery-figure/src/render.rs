//! Figure rendering
//!
//! Draws the combined chart: CPU clock rates as blue dots, the cumulative
//! planet count as a black line, and one starred point per simulation
//! record with its short code alongside. Linear year axis, log-scale count
//! axis, written to both a PNG and an SVG.

use std::ops::Range;
use std::path::Path;

use anyhow::anyhow;
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use tracing::info;

use orrery_core::{ClockSample, DiscoveryCurve, FigureVariant};

/// Canvas size in pixels (a 10x7 inch figure at 100 dpi)
pub const FIGURE_SIZE: (u32, u32) = (1000, 700);

/// Plotted year span
const YEAR_RANGE: Range<f64> = 1945.0..2035.0;

/// Chart title
const TITLE: &str = "N-body simulations, computer efficiency, and planet discoveries";

/// Everything the chart draws
pub struct Figure<'a> {
    /// Which record table and rescaling to use
    pub variant: FigureVariant,

    /// CPU clock history
    pub clock_samples: &'a [ClockSample],

    /// Cumulative planet count
    pub curve: &'a DiscoveryCurve,
}

impl Figure<'_> {
    /// Count-axis bounds: the combined data range padded out to whole
    /// decades, since all three series share the log axis
    fn y_range(&self) -> Range<f64> {
        let rescale = self.variant.outer_to_inner_rescale();

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut cover = |value: f64| {
            min = min.min(value);
            max = max.max(value);
        };

        for sample in self.clock_samples {
            cover(sample.megahertz);
        }
        for (_, count) in self.curve.points() {
            cover(count);
        }
        for record in self.variant.records() {
            cover(record.normalized_efficiency(rescale));
        }

        let lo = 10f64.powi(min.log10().floor() as i32);
        let hi = 10f64.powi(max.log10().ceil() as i32);
        if lo < hi { lo..hi } else { lo..lo * 10.0 }
    }
}

/// Render the figure to a PNG and an SVG at the given paths
pub fn render_figure(figure: &Figure<'_>, png_out: &Path, svg_out: &Path) -> anyhow::Result<()> {
    {
        let root = BitMapBackend::new(png_out, FIGURE_SIZE).into_drawing_area();
        draw_chart(&root, figure).map_err(|e| anyhow!("drawing {}: {}", png_out.display(), e))?;
    }
    info!("🖼️  Wrote {}", png_out.display());

    {
        let root = SVGBackend::new(svg_out, FIGURE_SIZE).into_drawing_area();
        draw_chart(&root, figure).map_err(|e| anyhow!("drawing {}: {}", svg_out.display(), e))?;
    }
    info!("🖼️  Wrote {}", svg_out.display());

    Ok(())
}

fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    figure: &Figure<'_>,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let rescale = figure.variant.outer_to_inner_rescale();
    let records = figure.variant.records();

    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(root)
        .caption(TITLE, ("sans-serif", 24))
        .margin(12)
        .x_label_area_size(48)
        .y_label_area_size(64)
        .build_cartesian_2d(YEAR_RANGE, figure.y_range().log_scale())?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_desc("Year")
        .y_desc("N")
        .label_style(("sans-serif", 16))
        .y_label_formatter(&|n| format!("{:e}", n))
        .draw()?;

    // Clock rates sit behind everything else
    chart
        .draw_series(
            figure
                .clock_samples
                .iter()
                .map(|sample| Circle::new((sample.year, sample.megahertz), 2, BLUE.filled())),
        )?
        .label("CPU clock rates [MHz]")
        .legend(|(x, y)| Circle::new((x + 10, y), 3, BLUE.filled()));

    // The sentinel year predates the axis; clamp it to the left edge so the
    // line does not run into the label margin.
    let curve_points = figure
        .curve
        .points()
        .map(|(year, count)| (year.max(YEAR_RANGE.start), count));
    chart
        .draw_series(LineSeries::new(curve_points, BLACK.stroke_width(3)))?
        .label("Known Planets")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK.stroke_width(3)));

    chart
        .draw_series(records.iter().map(|record| {
            EmptyElement::at(record.marker_point(rescale))
                + Polygon::new(star_vertices(7.0, 3.0), BLACK.filled())
        }))?
        .label("Simulation Efficiency [Myr/CPU month]")
        .legend(|(x, y)| {
            Polygon::new(
                star_vertices(6.0, 2.5)
                    .into_iter()
                    .map(|(dx, dy)| (x + 10 + dx, y + dy))
                    .collect::<Vec<_>>(),
                BLACK.filled(),
            )
        });

    let code_style =
        TextStyle::from(("sans-serif", 13).into_font()).pos(Pos::new(HPos::Center, VPos::Bottom));
    chart.draw_series(records.iter().map(|record| {
        Text::new(
            record.short_code,
            record.annotation_point(rescale),
            code_style.clone(),
        )
    }))?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font(("sans-serif", 14))
        .draw()?;

    root.present()?;

    Ok(())
}

/// Pixel offsets of a five-pointed star centered on the origin
fn star_vertices(outer: f64, inner: f64) -> Vec<(i32, i32)> {
    use std::f64::consts::PI;

    (0..10)
        .map(|k| {
            let radius = if k % 2 == 0 { outer } else { inner };
            let angle = -PI / 2.0 + PI * f64::from(k) / 5.0;
            (
                (radius * angle.cos()).round() as i32,
                (radius * angle.sin()).round() as i32,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_has_ten_vertices_pointing_up() {
        let points = star_vertices(7.0, 3.0);
        assert_eq!(points.len(), 10);
        assert_eq!(points[0], (0, -7));
    }

    #[test]
    fn test_y_range_pads_to_decades() {
        let samples = [ClockSample {
            year: 1970.0,
            megahertz: 33.0,
        }];
        let curve = DiscoveryCurve::from_years(vec![1995]);
        let figure = Figure {
            variant: FigureVariant::Classic,
            clock_samples: &samples,
            curve: &curve,
        };

        // Bottom decade comes from the 1950 record, top from the 2023 ones
        let range = figure.y_range();
        assert_eq!(range.start, 1e-5);
        assert_eq!(range.end, 1e5);
    }

    #[test]
    fn test_y_range_never_collapses() {
        let samples = [ClockSample {
            year: 1970.0,
            megahertz: 10.0,
        }];
        let curve = DiscoveryCurve::from_years(Vec::new());

        let mut figure = Figure {
            variant: FigureVariant::Classic,
            clock_samples: &samples,
            curve: &curve,
        };
        let range = figure.y_range();
        assert!(range.start < range.end);

        figure.variant = FigureVariant::Revised;
        let range = figure.y_range();
        assert!(range.start < range.end);
    }
}
