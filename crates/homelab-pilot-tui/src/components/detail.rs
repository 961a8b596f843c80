//! Detail view for services with an integration

use crate::components::Component;
use crate::ui_ext::{HealthIndicatorExt, key_hint};
use color_eyre::Result;
use homelab_pilot_core::{DetailView, ViewModel, format_age, format_bytes, truncate_string};
use homelab_rs::{DetailPayload, PiHoleSummary, SeriesResource};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

const TITLE_WIDTH: usize = 36;

/// Pi-hole metrics or Sonarr series for the active service
#[derive(Default)]
pub struct DetailComponent {
    table_state: TableState,
}

impl DetailComponent {
    pub fn new() -> Self {
        Self::default()
    }

    fn draw_header(&self, frame: &mut Frame, area: Rect, detail: &DetailView<'_>) {
        let (symbol, color) = detail.health.symbol_and_color();
        let mut spans = vec![
            Span::raw(format!(" {} ", detail.service)).bold().fg(Color::Cyan),
            Span::raw(format!("{}  ", detail.kind.label())).dim(),
            Span::styled(
                format!("{} {}", symbol, detail.health.label()),
                Style::default().fg(color),
            ),
        ];
        if let Some(age) = detail.age {
            spans.push(Span::raw(format!("  updated {}", format_age(age))).dim());
        }
        if detail.state.is_refreshing() {
            spans.push(Span::styled("  refreshing...", Style::default().fg(Color::Yellow)));
        }

        let mut lines = vec![Line::from(spans)];
        // An error with a stale snapshot still on screen goes under the title
        if let (Some(err), true) = (detail.error(), detail.payload().is_some()) {
            lines.push(Line::from(Span::styled(
                format!(" {}", err),
                Style::default().fg(Color::Red),
            )));
        }

        let header = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(header, area);
    }

    fn draw_pihole(&mut self, frame: &mut Frame, area: Rect, summary: &PiHoleSummary) {
        let rows: Vec<Row> = summary
            .rows()
            .into_iter()
            .map(|(metric, value)| Row::new(vec![Cell::from(metric), Cell::from(value)]))
            .collect();

        let header = Row::new(vec![Cell::from("METRIC"), Cell::from("VALUE")])
            .style(Style::default().add_modifier(Modifier::DIM))
            .bottom_margin(1);

        let table = Table::new(rows, [Constraint::Length(22), Constraint::Min(10)])
            .header(header)
            .row_highlight_style(Style::default().bg(Color::DarkGray))
            .highlight_symbol("> ");
        frame.render_stateful_widget(table, area, &mut self.table_state);
    }

    fn series_row(series: &SeriesResource) -> Row<'static> {
        let (status, color) = if series.ended {
            ("ended".to_string(), Color::DarkGray)
        } else {
            (series.status.clone(), Color::Green)
        };
        let monitored = if series.monitored { "yes" } else { "no" };
        let year = if series.year > 0 {
            series.year.to_string()
        } else {
            "-".to_string()
        };

        Row::new(vec![
            Cell::from(truncate_string(&series.title, TITLE_WIDTH)),
            Cell::from(status).style(Style::default().fg(color)),
            Cell::from(series.network.clone().unwrap_or_else(|| "-".to_string())),
            Cell::from(year),
            Cell::from(monitored),
            Cell::from(series.episodes_display()),
            Cell::from(format_bytes(series.size_on_disk())),
        ])
    }

    fn draw_series(&mut self, frame: &mut Frame, area: Rect, series: &[SeriesResource]) {
        if series.is_empty() {
            let empty = Paragraph::new(" No series").style(Style::default().fg(Color::DarkGray));
            frame.render_widget(empty, area);
            return;
        }

        let rows: Vec<Row> = series.iter().map(Self::series_row).collect();
        let header = Row::new(vec![
            Cell::from("TITLE"),
            Cell::from("STATUS"),
            Cell::from("NETWORK"),
            Cell::from("YEAR"),
            Cell::from("MONITORED"),
            Cell::from("EPISODES"),
            Cell::from("SIZE"),
        ])
        .style(Style::default().add_modifier(Modifier::DIM))
        .bottom_margin(1);

        let widths = [
            Constraint::Min(20),
            Constraint::Length(11),
            Constraint::Length(14),
            Constraint::Length(6),
            Constraint::Length(10),
            Constraint::Length(9),
            Constraint::Length(10),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .row_highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
        frame.render_stateful_widget(table, area, &mut self.table_state);
    }

    fn draw_body(&mut self, frame: &mut Frame, area: Rect, detail: &DetailView<'_>) {
        let Some(payload) = detail.payload() else {
            let para = match detail.error() {
                Some(err) => Paragraph::new(format!(" {}", err)).style(Style::default().fg(Color::Red)),
                None => Paragraph::new(" Loading...").style(Style::default().fg(Color::DarkGray)),
            };
            frame.render_widget(para, area);
            return;
        };

        self.table_state.select(Some(detail.selected_row));
        match payload {
            DetailPayload::PiHoleSummary(summary) => self.draw_pihole(frame, area, summary),
            DetailPayload::SonarrSeries(series) => self.draw_series(frame, area, series),
        }
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::raw(" ")];
        spans.extend(key_hint("[j/k]", " scroll  "));
        spans.extend(key_hint("[r]", " refresh  "));
        spans.extend(key_hint("[Esc]", " back  "));
        spans.extend(key_hint("[q]", " quit"));
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

impl Component for DetailComponent {
    fn draw(&mut self, frame: &mut Frame, area: Rect, view: &ViewModel<'_>) -> Result<()> {
        let Some(detail) = &view.detail else {
            return Ok(());
        };

        let chunks = Layout::vertical([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

        self.draw_header(frame, chunks[0], detail);
        self.draw_body(frame, chunks[1], detail);
        self.draw_footer(frame, chunks[2]);
        Ok(())
    }
}
