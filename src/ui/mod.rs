mod filter;
mod header;
mod popup;
mod review_item;
mod reviews;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;
use crate::types::TimeRange;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

fn spinner(app: &App) -> &'static str {
    SPINNER_FRAMES[app.spinner_frame % SPINNER_FRAMES.len()]
}

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    header::render(frame, app, chunks[0]);
    filter::render(frame, app, chunks[1]);
    reviews::render(frame, app, chunks[2]);
    render_status_bar(frame, app, chunks[3]);

    if let Some(cursor) = app.time_range_popup {
        let items: Vec<String> = TimeRange::ALL
            .iter()
            .map(|t| {
                if *t == app.filter.time_range {
                    format!("{} ✓", t)
                } else {
                    t.to_string()
                }
            })
            .collect();
        popup::render_select(frame, "Time range", &items, cursor);
    }
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let help = if app.time_range_popup.is_some() {
        "j/k: move | Enter: apply | Esc: cancel"
    } else {
        "j/k: nav | Ctrl+d/u: page | 1-5: rating | 0: clear | t: time range | r: refresh | q: quit"
    };

    let mut spans = Vec::new();
    if app.show_back_to_top {
        spans.push(Span::styled(
            "↑ g: back to top",
            Style::default().fg(Color::Black).bg(Color::Blue),
        ));
        spans.push(Span::raw("  "));
    }
    spans.push(Span::styled(help, Style::default().fg(Color::Gray)));

    let status_bar = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status_bar, area);
}
