//! Burndown chart rendering for the wekan-burndown TUI.
//!
//! Renders a [`Timeline`] as a bordered [`ratatui::widgets::Chart`] line
//! plot with date-formatted x ticks and a units-formatted value axis, plus a
//! one-line summary footer.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use burndown_core::formatting;
use burndown_core::models::{Timeline, Units};

use crate::themes::Theme;

/// Everything the chart view needs to draw one burndown.
#[derive(Debug, Clone)]
pub struct ChartViewData {
    /// Resolved board title.
    pub board_title: String,
    /// Resolved list title, when the chart is narrowed to one list.
    pub list_title: Option<String>,
    /// Value-axis interpretation of the estimates.
    pub units: Units,
    /// The aggregated series to plot.
    pub timeline: Timeline,
}

/// Render the burndown chart and its summary footer into `area`.
pub fn render_chart_view(frame: &mut Frame, area: Rect, data: &ChartViewData, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(3)])
        .split(area);

    render_chart(frame, chunks[0], data, theme);
    render_summary(frame, chunks[1], data, theme);
}

/// Render a "no data" placeholder when the timeline is empty.
pub fn render_no_data(frame: &mut Frame, area: Rect, data: &ChartViewData, theme: &Theme) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("No estimated cards found on \"{}\"", data.board_title),
            theme.warning,
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Card titles need a parenthesized estimate, e.g. \"Fix login (3)\".",
            theme.dim,
        )),
        Line::from(Span::styled("Press 'q' or Ctrl+C to exit", theme.dim)),
    ];
    frame.render_widget(
        Paragraph::new(ratatui::text::Text::from(text)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" wekan-burndown "),
        ),
        area,
    );
}

// ── Internal rendering ────────────────────────────────────────────────────────

fn render_chart(frame: &mut Frame, area: Rect, data: &ChartViewData, theme: &Theme) {
    let points = chart_points(&data.timeline);
    let (x_max, y_max) = chart_bounds(&points);

    let title = match &data.list_title {
        Some(list) => format!(" Burndown: {} / {} ", data.board_title, list),
        None => format!(" Burndown: {} ", data.board_title),
    };

    let dataset = Dataset::default()
        .name("cumulative estimate")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(theme.chart_line)
        .data(&points);

    let chart = Chart::new(vec![dataset])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.chart_border)
                .title(Span::styled(title, theme.header)),
        )
        .x_axis(
            Axis::default()
                .style(theme.chart_axis)
                .bounds([0.0, x_max])
                .labels(x_labels(&data.timeline, theme)),
        )
        .y_axis(
            Axis::default()
                .style(theme.chart_axis)
                .bounds([0.0, y_max])
                .labels(y_labels(y_max, data.units, theme)),
        );

    frame.render_widget(chart, area);
}

fn render_summary(frame: &mut Frame, area: Rect, data: &ChartViewData, theme: &Theme) {
    let timeline = &data.timeline;
    let span_days = match (timeline.first_date(), timeline.last_date()) {
        (Some(first), Some(last)) => (last - first).num_days() + 1,
        _ => 0,
    };

    let line = Line::from(vec![
        Span::styled("Total: ", theme.label),
        Span::styled(
            formatting::format_estimate(timeline.final_total() as f64, data.units),
            theme.value,
        ),
        Span::styled("   Days: ", theme.label),
        Span::styled(timeline.len().to_string(), theme.value),
        Span::styled("   Span: ", theme.label),
        Span::styled(format!("{} d", span_days), theme.value),
        Span::styled("   Press 'q' to exit", theme.dim),
    ]);

    frame.render_widget(
        Paragraph::new(line).block(Block::default().borders(Borders::ALL)),
        area,
    );
}

// ── Chart geometry helpers ────────────────────────────────────────────────────

/// Convert the timeline into `(days_since_first, total)` pairs for the chart
/// dataset.
fn chart_points(timeline: &Timeline) -> Vec<(f64, f64)> {
    let Some(first) = timeline.first_date() else {
        return Vec::new();
    };
    timeline
        .points
        .iter()
        .map(|p| ((p.date - first).num_days() as f64, p.total as f64))
        .collect()
}

/// Axis upper bounds, padded so a single-day series still has a visible
/// extent.
fn chart_bounds(points: &[(f64, f64)]) -> (f64, f64) {
    let x_max = points
        .iter()
        .map(|(x, _)| *x)
        .fold(0.0_f64, f64::max)
        .max(1.0);
    let y_max = points
        .iter()
        .map(|(_, y)| *y)
        .fold(0.0_f64, f64::max)
        .max(1.0);
    (x_max, y_max)
}

/// First / middle / last day tick labels, `%b-%d` formatted.
fn x_labels(timeline: &Timeline, theme: &Theme) -> Vec<Span<'static>> {
    let (Some(first), Some(last)) = (timeline.first_date(), timeline.last_date()) else {
        return Vec::new();
    };
    let mid = first + (last - first) / 2;
    [first, mid, last]
        .into_iter()
        .map(|d| Span::styled(d.format("%b-%d").to_string(), theme.chart_label))
        .collect()
}

/// Zero / middle / maximum value tick labels in the configured units.
fn y_labels(y_max: f64, units: Units, theme: &Theme) -> Vec<Span<'static>> {
    [0.0, y_max / 2.0, y_max]
        .into_iter()
        .map(|v| Span::styled(formatting::format_estimate(v, units), theme.chart_label))
        .collect()
}

// ── Tests ──────────────────────────────────────────────────────────────────────
