//! Plotters-powered forecast chart widget for Ratatui.
//!
//! Why Plotters instead of Ratatui's built-in `Chart` widget?
//! - nicer axis + mesh rendering
//! - less manual work for ticks/labels
//! - easy to extend later (legend, annotations, exportable PNG/SVG backends, etc.)
//!
//! We render Plotters output into the Ratatui buffer using `plotters-ratatui-backend`.

use plotters::prelude::*;
use plotters_ratatui_backend::widget_fn;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// A lightweight, render-only chart description.
///
/// The widget is intentionally data-driven: the series and bounds are computed
/// outside the render call. X coordinates are day indices into the forecast;
/// the caller draws the date tick labels (terminal cells are too coarse for
/// Plotters' own label areas to carry text labels well).
pub struct ForecastPlottersChart<'a> {
    /// Line series of (day index, predicted sales).
    pub series: &'a [(f64, f64)],
    /// The peak day, highlighted on top of the line.
    pub peak: Option<(f64, f64)>,
    /// X bounds (day index).
    pub x_bounds: [f64; 2],
    /// Y bounds (predicted sales).
    pub y_bounds: [f64; 2],
}

impl<'a> Widget for ForecastPlottersChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // When the available area is too small, Plotters may fail to build a
        // chart. In that case, we render a small hint rather than panicking.
        if area.width < 20 || area.height < 8 {
            buf.set_string(
                area.x,
                area.y,
                "Chart area too small (resize terminal).",
                Style::default().fg(Color::Yellow),
            );
            return;
        }

        let x0 = self.x_bounds[0];
        let x1 = self.x_bounds[1];
        let y0 = self.y_bounds[0];
        let y1 = self.y_bounds[1];

        if !(x0.is_finite() && x1.is_finite() && y0.is_finite() && y1.is_finite()) || x1 <= x0 || y1 <= y0 {
            return;
        }

        // `plotters-ratatui-backend` draws Plotters primitives via Ratatui's
        // `Canvas` widget, which ultimately writes to the terminal buffer.
        let widget = widget_fn(move |root| {
            let mut chart = ChartBuilder::on(&root)
                .margin(1)
                .build_cartesian_2d(x0..x1, y0..y1)?;

            // Keep the mesh off: tick labels are drawn by the caller in
            // terminal cells, and grid lines only add clutter at this
            // resolution.
            chart.configure_mesh().disable_x_mesh().disable_y_mesh().draw()?;

            let line_color = RGBColor(0, 255, 255); // cyan
            let peak_color = RGBColor(255, 191, 0); // amber

            chart.draw_series(LineSeries::new(self.series.iter().copied(), &line_color))?;

            // Peak highlight as a colored pixel: `Circle` markers render with
            // wrong radii through this backend, a plain dot reads better in a
            // terminal anyway.
            if let Some(peak) = self.peak {
                chart.draw_series(std::iter::once(Pixel::new(peak, peak_color)))?;
            }

            Ok(())
        });

        widget.render(area, buf);
    }
}
