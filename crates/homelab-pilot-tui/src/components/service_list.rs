//! Service list - main dashboard view

use crate::components::Component;
use crate::ui_ext::{HealthIndicatorExt, key_hint};
use color_eyre::Result;
use homelab_pilot_core::{ServiceRow, ViewModel, pluralize, truncate_string};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

const DESCRIPTION_WIDTH: usize = 40;

/// Table of monitored services with a status bar
#[derive(Default)]
pub struct ServiceListComponent {
    table_state: TableState,
}

impl ServiceListComponent {
    pub fn new() -> Self {
        Self::default()
    }

    fn draw_header(&self, frame: &mut Frame, area: Rect, view: &ViewModel<'_>) {
        let (symbol, color) = view.overall.symbol_and_color();
        let count = view.rows.len();
        let line = Line::from(vec![
            Span::raw(format!(" {} ", view.title)).bold().fg(Color::Cyan),
            Span::styled(format!("{} ", symbol), Style::default().fg(color)),
            Span::raw(format!("{} {}", count, pluralize(count, "service", "services"))).dim(),
        ]);
        let header = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(header, area);
    }

    fn service_row(row: &ServiceRow<'_>) -> Row<'static> {
        let (symbol, color) = row.health.symbol_and_color();
        let name_style = if row.active {
            Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default()
        };
        let name = if row.has_detail {
            format!("{} +", row.name)
        } else {
            row.name.to_string()
        };

        Row::new(vec![
            Cell::from(format!("{} {}", symbol, row.status_text)).style(Style::default().fg(color)),
            Cell::from(name).style(name_style),
            Cell::from(truncate_string(row.description, DESCRIPTION_WIDTH)),
            Cell::from(row.url.to_string()).style(Style::default().fg(Color::DarkGray)),
        ])
    }

    fn draw_table(&mut self, frame: &mut Frame, area: Rect, view: &ViewModel<'_>) {
        let rows: Vec<Row> = view.rows.iter().map(Self::service_row).collect();

        let header = Row::new(vec![
            Cell::from("STATUS"),
            Cell::from("SERVICE"),
            Cell::from("DESCRIPTION"),
            Cell::from("URL"),
        ])
        .style(Style::default().add_modifier(Modifier::DIM))
        .bottom_margin(1);

        let widths = [
            Constraint::Length(8),
            Constraint::Min(14),
            Constraint::Percentage(35),
            Constraint::Percentage(35),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .row_highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        self.table_state.select(Some(view.highlighted));
        frame.render_stateful_widget(table, area, &mut self.table_state);
    }

    fn draw_status_bar(&self, frame: &mut Frame, area: Rect, view: &ViewModel<'_>) {
        let color = view.overall.color();
        let line = Line::from(Span::styled(
            format!(" {}", view.status_line),
            Style::default().fg(color),
        ));
        let para = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(para, area);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::raw(" ")];
        spans.extend(key_hint("[j/k]", " select  "));
        spans.extend(key_hint("[Enter]", " details  "));
        spans.extend(key_hint("[q]", " quit"));
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

impl Component for ServiceListComponent {
    fn draw(&mut self, frame: &mut Frame, area: Rect, view: &ViewModel<'_>) -> Result<()> {
        let chunks = Layout::vertical([
            Constraint::Length(2), // Header
            Constraint::Min(0),    // Services
            Constraint::Length(2), // Status bar
            Constraint::Length(1), // Footer
        ])
        .split(area);

        self.draw_header(frame, chunks[0], view);
        self.draw_table(frame, chunks[1], view);
        self.draw_status_bar(frame, chunks[2], view);
        self.draw_footer(frame, chunks[3]);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use homelab_pilot_core::{Dashboard, Event, ServiceRegistry};
    use homelab_rs::{HealthOutcome, ServiceDescriptor};
    use ratatui::{Terminal, backend::TestBackend};
    use std::time::Duration;

    fn render(dashboard: &Dashboard) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 16)).unwrap();
        let mut component = ServiceListComponent::new();
        terminal
            .draw(|frame| {
                let view = dashboard.view();
                component.draw(frame, frame.area(), &view).unwrap();
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn dashboard() -> Dashboard {
        let registry = ServiceRegistry::new(vec![
            ServiceDescriptor::new("Jellyfin", "http://10.0.0.4:8096").with_description("Media"),
            ServiceDescriptor::new("Gitea", "http://10.0.0.5:3000"),
        ])
        .unwrap();
        Dashboard::new(
            "Homelab",
            registry,
            Duration::from_secs(30),
            Duration::from_secs(60),
        )
    }

    #[test]
    fn renders_loading_status() {
        let text = render(&dashboard());
        assert!(text.contains("Homelab"));
        assert!(text.contains("Jellyfin"));
        assert!(text.contains("loading..."));
    }

    #[test]
    fn renders_sweep_results() {
        let mut dashboard = dashboard();
        let results = [
            ("Jellyfin".to_string(), HealthOutcome::from_status(200)),
            ("Gitea".to_string(), HealthOutcome::from_status(502)),
        ]
        .into_iter()
        .collect();
        dashboard.handle(Event::Sweep(results));

        let text = render(&dashboard);
        assert!(text.contains("502"));
        assert!(text.contains("Gitea might be having issues..."));
    }
}
