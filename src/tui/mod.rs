//! Ratatui-based terminal dashboard.
//!
//! The TUI acquires the forecast through the shared pipeline, then renders
//! KPI cards (total, average, horizon, peak day) above a line chart of the
//! predicted series. On a failed load the cards and chart stay in their
//! placeholder state with the failure message in the footer.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Terminal,
};

use crate::app::pipeline::DashboardData;
use crate::chart::format_full_date;
use crate::cli::LoadArgs;
use crate::domain::DashboardConfig;
use crate::error::AppError;
use crate::report::format_currency;

mod plotters_chart;

use plotters_chart::ForecastPlottersChart;

/// Start the TUI.
pub fn run(args: LoadArgs) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::new(4, format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(crate::app::dashboard_config_from_args(&args));
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::new(4, format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::new(4, format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

struct App {
    config: DashboardConfig,
    /// The current dashboard snapshot, replaced wholesale on reload.
    data: Option<DashboardData>,
    status: String,
}

impl App {
    fn new(config: DashboardConfig) -> Self {
        let mut app = Self {
            config,
            data: None,
            status: "Loading...".to_string(),
        };
        app.reload();
        app
    }

    /// Synchronous acquire + derive. Reloads cannot overlap: the event loop
    /// is blocked for the duration, so no in-flight guard is needed.
    fn reload(&mut self) {
        match crate::app::pipeline::load_dashboard(&self.config) {
            Ok(data) => {
                self.status = format!("Forecast ready ({} days).", data.metrics.days);
                self.data = Some(data);
            }
            Err(err) => {
                // Keep any previous snapshot; a fresh start stays on
                // placeholders.
                self.status = err.to_string();
            }
        }
    }

    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::new(4, format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::new(4, format!("Event poll error: {e}")))? {
                continue;
            }

            match event::read().map_err(|e| AppError::new(4, format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    match key.code {
                        KeyCode::Char('q') => break,
                        KeyCode::Char('r') => self.reload(),
                        _ => {}
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(5),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_kpis(frame, chunks[1]);
        self.draw_chart(frame, chunks[2]);
        self.draw_footer(frame, chunks[3]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let line = Line::from(vec![
            Span::styled("fdeck", Style::default().fg(Color::Cyan)),
            Span::raw(" — sales forecast dashboard"),
        ]);
        let p = Paragraph::new(Text::from(vec![line])).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_kpis(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
            ])
            .split(area);

        let metrics = self.data.as_ref().map(|d| &d.metrics);

        let total = metrics
            .map(|m| format_currency(m.total))
            .unwrap_or_else(placeholder);
        let average = metrics
            .map(|m| format_currency(m.average))
            .unwrap_or_else(placeholder);
        let horizon = metrics
            .map(|m| format!("{} days", m.days))
            .unwrap_or_else(placeholder);
        let peak = metrics
            .map(|m| format_currency(m.peak.predicted_sales))
            .unwrap_or_else(placeholder);
        let peak_date = metrics
            .map(|m| format_full_date(m.peak.date))
            .unwrap_or_else(placeholder);

        draw_kpi_card(frame, cards[0], "Total Predicted", &total, None);
        draw_kpi_card(frame, cards[1], "Average / Day", &average, None);
        draw_kpi_card(frame, cards[2], "Horizon", &horizon, None);
        draw_kpi_card(frame, cards[3], "Peak Day", &peak, Some(&peak_date));
    }

    fn draw_chart(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default().title("Predicted Sales").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        let Some(data) = &self.data else {
            let msg = Paragraph::new("Waiting for forecast data...")
                .style(Style::default().fg(Color::Yellow))
                .block(Block::default());
            frame.render_widget(msg, inner);
            return;
        };

        let (series, peak, x_bounds, y_bounds) = chart_series(data);

        let (chart_rect, insets) = chart_layout(inner);
        let widget = ForecastPlottersChart {
            series: &series,
            peak,
            x_bounds,
            y_bounds,
        };

        frame.render_widget(widget, chart_rect);
        if let Some(insets) = insets {
            draw_axis_ticks(
                frame,
                inner,
                chart_rect,
                insets,
                &data.series.labels,
                y_bounds,
            );
        }
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "r reload  q quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

fn placeholder() -> String {
    "--".to_string()
}

fn draw_kpi_card(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    title: &str,
    value: &str,
    subtitle: Option<&str>,
) {
    let mut lines = vec![Line::from(Span::styled(
        value.to_string(),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))];
    if let Some(subtitle) = subtitle {
        lines.push(Line::from(Span::styled(
            subtitle.to_string(),
            Style::default().fg(Color::Gray),
        )));
    }

    let p = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Center)
        .block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(p, area);
}

/// Build the Plotters series: (day index, value) pairs plus padded bounds.
fn chart_series(data: &DashboardData) -> (Vec<(f64, f64)>, Option<(f64, f64)>, [f64; 2], [f64; 2]) {
    let values = &data.series.values;

    let series: Vec<(f64, f64)> = values
        .iter()
        .enumerate()
        .map(|(i, &v)| (i as f64, v))
        .collect();

    let peak = data
        .result
        .forecast
        .iter()
        .position(|p| p == &data.metrics.peak)
        .map(|i| (i as f64, data.metrics.peak.predicted_sales));

    let x_max = (values.len().saturating_sub(1)).max(1) as f64;
    let x_bounds = [0.0, x_max];

    let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for &v in values {
        y_min = y_min.min(v);
        y_max = y_max.max(v);
    }
    if !y_min.is_finite() || !y_max.is_finite() {
        y_min = 0.0;
        y_max = 1.0;
    } else if y_max <= y_min {
        // Flat series: pad around the level itself so the line stays in view.
        y_min -= 1.0;
        y_max += 1.0;
    }

    let pad = ((y_max - y_min).abs() * 0.05).max(1e-12);
    let y_bounds = [y_min - pad, y_max + pad];

    (series, peak, x_bounds, y_bounds)
}

#[derive(Debug, Clone, Copy)]
struct AxisInsets {
    left: u16,
    right: u16,
    top: u16,
    bottom: u16,
}

fn chart_layout(inner: Rect) -> (Rect, Option<AxisInsets>) {
    let insets = AxisInsets {
        left: 10,
        right: 2,
        top: 1,
        bottom: 2,
    };

    if inner.width <= insets.left + insets.right + 10
        || inner.height <= insets.top + insets.bottom + 5
    {
        return (inner, None);
    }

    let rect = Rect {
        x: inner.x + insets.left,
        y: inner.y + insets.top,
        width: inner.width - insets.left - insets.right,
        height: inner.height - insets.top - insets.bottom,
    };

    (rect, Some(insets))
}

/// Draw date labels under the x axis and sales values along the y axis.
///
/// Tick labels live in terminal cells outside the Plotters area; date strings
/// come straight from the chart series so ticks always name real forecast
/// days.
fn draw_axis_ticks(
    frame: &mut ratatui::Frame<'_>,
    inner: Rect,
    chart: Rect,
    insets: AxisInsets,
    labels: &[String],
    y_bounds: [f64; 2],
) {
    let style = Style::default().fg(Color::Gray);

    // X ticks: up to 5 evenly spaced forecast days.
    if !labels.is_empty() {
        let ticks = 5usize.min(labels.len());
        for i in 0..ticks {
            let u = if ticks == 1 {
                0.0
            } else {
                i as f64 / (ticks as f64 - 1.0)
            };
            let idx = ((labels.len() - 1) as f64 * u).round() as usize;
            let label = labels[idx].clone();
            let label_len = label.len() as u16;

            let x = chart.x + ((chart.width - 1) as f64 * u).round() as u16;
            let start = x.saturating_sub((label.len() / 2) as u16);
            let y = chart.y + chart.height;
            if y >= inner.y + inner.height - 1 {
                continue;
            }
            frame.render_widget(
                Paragraph::new(label).style(style),
                Rect {
                    x: start,
                    y,
                    width: label_len,
                    height: 1,
                },
            );
        }
    }

    // Y ticks: 5 evenly spaced sales levels, currency-formatted.
    let ticks = 5usize;
    for i in 0..ticks {
        let u = i as f64 / (ticks as f64 - 1.0);
        let y_val = y_bounds[0] + u * (y_bounds[1] - y_bounds[0]);
        let y = chart.y + (chart.height - 1) - ((chart.height - 1) as f64 * u).round() as u16;
        let label = format_currency(y_val.max(0.0));
        let label_len = label.len() as u16;
        let x = inner.x + insets.left.saturating_sub(1);
        let start = x.saturating_sub(label.len() as u16);
        if start < inner.x {
            continue;
        }
        frame.render_widget(
            Paragraph::new(label).style(style),
            Rect {
                x: start,
                y,
                width: label_len,
                height: 1,
            },
        );
    }
}
